//! `aeon-pool-arb-rs`
//!
//! Read token reserves of constant-product DEX pools, derive directional AMM
//! rates per pool and scan every ordered pool pair for arbitrage.
//!
//! ## Quickstart (offline scan)
//!
//! ```
//! use aeon_pool_arb_rs::{ArbitrageScanner, ReserveSnapshot, build_rate_table};
//!
//! # fn main() -> Result<(), aeon_pool_arb_rs::ScannerError> {
//! let pool1 = ReserveSnapshot::new(1_000.0, 3_000_000.0, 0);
//! let pool2 = ReserveSnapshot::new(1_000.0, 3_100_000.0, 0);
//!
//! let rates = build_rate_table(
//!     "WETH",
//!     "DAI",
//!     [("Pool1", &pool1), ("Pool2", &pool2)],
//!     1.0,
//!     0.003,
//! )?;
//!
//! for opp in ArbitrageScanner::scan(&rates, 0.000001)? {
//!     println!("{} | profit {} {}", opp.narrative, opp.profit, opp.profit_token);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Quickstart (polling a node)
//!
//! ```no_run
//! use aeon_pool_arb_rs::{FileSink, RpcReserveSource, ScannerConfig, run};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), aeon_pool_arb_rs::ScannerError> {
//! let config = ScannerConfig::from_env()?;
//! let source = RpcReserveSource::new(config.require_rpc_url()?, config.request_timeout())?;
//! let sink = FileSink::new(&config.output_path, config.output_format);
//! run(&config, &source, &sink).await?;
//! # Ok(())
//! # }
//! ```

pub mod common;
pub mod dex;
pub mod report;
pub mod runner;
pub mod scanner;

// Re-export common types
pub use common::{
    DEFAULT_FEE_RATE, DEFAULT_REQUEST_TIMEOUT_MS, OutputFormat, ScannerConfig, ScannerError,
};
pub use dex::{
    ChainId, EthereumPools, EthereumTokens, PoolConfig, PoolSnapshots, ReserveSource,
    RpcReserveSource, Token, TokenPair, get_amount_out,
};
pub use report::{FileSink, OpportunitySink};
pub use runner::{CycleOutcome, run, run_cycle, run_until};
pub use scanner::{
    ArbitrageScanner, DirectionalRate, Opportunity, RateTable, ReserveSnapshot, ScanReport,
    TradeDirection, build_rate_table, derive_rates,
};
