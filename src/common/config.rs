//! Scanner configuration loaded from environment variables.
//!
//! Every key is read with the `POOL_ARB_` prefix, e.g. `POOL_ARB_RPC_URL`.
//! The token pair and the pool list come from the built-in catalog and can be
//! replaced by library callers before [ScannerConfig::validate].

use crate::common::ScannerError;
use crate::dex::chains::{EthereumTokens, TokenPair};
use crate::dex::pools::{EthereumPools, PoolConfig};
use serde::Deserialize;
use std::collections::HashSet;
use std::time::Duration;

pub const ENV_PREFIX: &str = "POOL_ARB_";

/// Fee of the modeled constant-product AMM (0.3%).
pub const DEFAULT_FEE_RATE: f64 = 0.003;

/// Bound on a single JSON-RPC request.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 5_000;

/// How opportunities are written by the file sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines.
    Text,
    /// One JSON object per line.
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScannerConfig {
    /// HTTP JSON-RPC endpoint used for `balanceOf` queries.
    #[serde(default)]
    pub rpc_url: Option<String>,

    /// Proportional fee applied identically to every pool.
    #[serde(default = "default_fee_rate")]
    pub fee_rate: f64,

    /// Notional size the profit of each opportunity is evaluated at.
    #[serde(default = "default_trade_amount")]
    pub trade_amount: f64,

    /// Input size the directional rates are derived at.
    #[serde(default = "default_reference_trade_size")]
    pub reference_trade_size: f64,

    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    /// Snapshots older than this are treated as stale.
    #[serde(default)]
    pub max_snapshot_age_ms: Option<u64>,

    /// Stop after this many cycles; run until Ctrl-C when unset.
    #[serde(default)]
    pub max_cycles: Option<u64>,

    #[serde(default = "default_output_path")]
    pub output_path: String,

    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    #[serde(skip, default = "EthereumTokens::weth_dai")]
    pub tokens: TokenPair,

    #[serde(skip, default = "EthereumPools::weth_dai")]
    pub pools: Vec<PoolConfig>,
}

fn default_fee_rate() -> f64 {
    DEFAULT_FEE_RATE
}

fn default_trade_amount() -> f64 {
    0.000001
}

fn default_reference_trade_size() -> f64 {
    1.0
}

fn default_poll_interval_ms() -> u64 {
    12_000
}

fn default_request_timeout_ms() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_MS
}

fn default_output_path() -> String {
    "arbitrage_opportunities_output.txt".to_string()
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Text
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            rpc_url: None,
            fee_rate: default_fee_rate(),
            trade_amount: default_trade_amount(),
            reference_trade_size: default_reference_trade_size(),
            poll_interval_ms: default_poll_interval_ms(),
            request_timeout_ms: default_request_timeout_ms(),
            max_snapshot_age_ms: None,
            max_cycles: None,
            output_path: default_output_path(),
            output_format: default_output_format(),
            tokens: EthereumTokens::weth_dai(),
            pools: EthereumPools::weth_dai(),
        }
    }
}

impl ScannerConfig {
    /// Loads `.env` (if any) and reads the `POOL_ARB_*` variables.
    pub fn from_env() -> Result<Self, ScannerError> {
        let _ = dotenvy::dotenv();
        let config: ScannerConfig = envy::prefixed(ENV_PREFIX).from_env()?;
        Ok(config)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// The RPC URL, or an error when it was not configured.
    pub fn require_rpc_url(&self) -> Result<&str, ScannerError> {
        self.rpc_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| {
                ScannerError::InvalidConfiguration(format!("{}RPC_URL is not set", ENV_PREFIX))
            })
    }

    /// Rejects configurations the core cannot scan with. Runs before the
    /// first cycle.
    pub fn validate(&self) -> Result<(), ScannerError> {
        validate_fee_rate(self.fee_rate)?;
        validate_positive("trade_amount", self.trade_amount)?;
        validate_positive("reference_trade_size", self.reference_trade_size)?;

        if self.poll_interval_ms == 0 {
            return Err(ScannerError::InvalidConfiguration(
                "poll_interval_ms must be greater than zero".to_string(),
            ));
        }
        if self.request_timeout_ms == 0 {
            return Err(ScannerError::InvalidConfiguration(
                "request_timeout_ms must be greater than zero".to_string(),
            ));
        }

        let (a, b) = (&self.tokens.a, &self.tokens.b);
        if a.address.eq_ignore_ascii_case(&b.address) {
            return Err(ScannerError::InvalidConfiguration(format!(
                "tokens must be distinct, got {} twice",
                a.symbol
            )));
        }
        if a.chain_id != b.chain_id {
            return Err(ScannerError::InvalidConfiguration(format!(
                "tokens must be on the same chain. A: {:?}, B: {:?}",
                a.chain_id, b.chain_id
            )));
        }

        if self.pools.is_empty() {
            return Err(ScannerError::InvalidConfiguration(
                "at least one pool must be configured".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        for pool in &self.pools {
            if !seen.insert(pool.id.as_str()) {
                return Err(ScannerError::InvalidConfiguration(format!(
                    "duplicate pool id {}",
                    pool.id
                )));
            }
            if pool.chain_id != a.chain_id {
                return Err(ScannerError::InvalidConfiguration(format!(
                    "pool {} is on {:?}, tokens are on {:?}",
                    pool.id, pool.chain_id, a.chain_id
                )));
            }
        }

        Ok(())
    }
}

pub fn validate_fee_rate(fee_rate: f64) -> Result<(), ScannerError> {
    if !(0.0..1.0).contains(&fee_rate) {
        return Err(ScannerError::InvalidConfiguration(format!(
            "fee_rate must be in [0, 1), got {}",
            fee_rate
        )));
    }
    Ok(())
}

pub fn validate_positive(field_name: &str, value: f64) -> Result<(), ScannerError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ScannerError::InvalidConfiguration(format!(
            "{} must be positive, got {}",
            field_name, value
        )));
    }
    Ok(())
}
