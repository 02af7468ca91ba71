//! Per-pool directional rates derived from reserve snapshots.

use crate::common::{ScannerError, validate_fee_rate, validate_positive};
use crate::dex::amm::get_amount_out;
use crate::scanner::TradeDirection;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Reserves of TokenA and TokenB held by one pool at one instant, in decimal
/// units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReserveSnapshot {
    pub reserve_a: f64,
    pub reserve_b: f64,
    /// Acquisition time, unix milliseconds.
    pub timestamp: u64,
}

impl ReserveSnapshot {
    pub fn new(reserve_a: f64, reserve_b: f64, timestamp: u64) -> Self {
        Self {
            reserve_a,
            reserve_b,
            timestamp,
        }
    }

    /// Same pool seen with TokenA and TokenB exchanged.
    pub fn swapped(&self) -> Self {
        Self {
            reserve_a: self.reserve_b,
            reserve_b: self.reserve_a,
            timestamp: self.timestamp,
        }
    }
}

/// Output per `reference_trade_size` input sold, in both directions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionalRate {
    pub pool_id: String,
    /// TokenB received for `reference_trade_size` TokenA sold.
    pub rate_a_to_b: f64,
    /// TokenA received for `reference_trade_size` TokenB sold.
    pub rate_b_to_a: f64,
}

impl DirectionalRate {
    /// Rate for selling in `direction`.
    pub fn rate(&self, direction: TradeDirection) -> f64 {
        match direction {
            TradeDirection::AtoB => self.rate_a_to_b,
            TradeDirection::BtoA => self.rate_b_to_a,
        }
    }
}

/// Derives both directional rates of one pool.
///
/// Fails with `InvalidConfiguration` for a non-positive `reference_trade_size`
/// or a `fee_rate` outside `[0, 1)`, and with `StalePool` when either reserve
/// is zero, negative or not a finite number, or when a derived rate is.
pub fn derive_rates(
    pool_id: &str,
    snapshot: &ReserveSnapshot,
    reference_trade_size: f64,
    fee_rate: f64,
) -> Result<DirectionalRate, ScannerError> {
    validate_positive("reference_trade_size", reference_trade_size)?;
    validate_fee_rate(fee_rate)?;

    for (label, reserve) in [("A", snapshot.reserve_a), ("B", snapshot.reserve_b)] {
        if !reserve.is_finite() || reserve <= 0.0 {
            return Err(ScannerError::StalePool(format!(
                "{}: reserve {} is {}",
                pool_id, label, reserve
            )));
        }
    }

    let rate_a_to_b = get_amount_out(
        reference_trade_size,
        snapshot.reserve_a,
        snapshot.reserve_b,
        fee_rate,
    );
    let rate_b_to_a = get_amount_out(
        reference_trade_size,
        snapshot.reserve_b,
        snapshot.reserve_a,
        fee_rate,
    );

    // Extreme reserves can overflow to infinity or underflow to zero.
    for (label, rate) in [("A -> B", rate_a_to_b), ("B -> A", rate_b_to_a)] {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(ScannerError::StalePool(format!(
                "{}: rate {} is {}",
                pool_id, label, rate
            )));
        }
    }

    Ok(DirectionalRate {
        pool_id: pool_id.to_string(),
        rate_a_to_b,
        rate_b_to_a,
    })
}

/// Rates of every priceable pool in one cycle, in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    /// Symbol of TokenA.
    pub token_a: String,
    /// Symbol of TokenB.
    pub token_b: String,
    rates: Vec<DirectionalRate>,
}

impl RateTable {
    pub fn new(token_a: &str, token_b: &str) -> Self {
        Self {
            token_a: token_a.to_string(),
            token_b: token_b.to_string(),
            rates: Vec::new(),
        }
    }

    /// Adds a rate, replacing an existing entry for the same pool in place.
    pub fn insert(&mut self, rate: DirectionalRate) {
        match self.rates.iter_mut().find(|r| r.pool_id == rate.pool_id) {
            Some(existing) => *existing = rate,
            None => self.rates.push(rate),
        }
    }

    pub fn get(&self, pool_id: &str) -> Option<&DirectionalRate> {
        self.rates.iter().find(|r| r.pool_id == pool_id)
    }

    pub fn contains(&self, pool_id: &str) -> bool {
        self.get(pool_id).is_some()
    }

    pub fn pool_ids(&self) -> impl Iterator<Item = &str> {
        self.rates.iter().map(|r| r.pool_id.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DirectionalRate> {
        self.rates.iter()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl<'a> IntoIterator for &'a RateTable {
    type Item = &'a DirectionalRate;
    type IntoIter = std::slice::Iter<'a, DirectionalRate>;

    fn into_iter(self) -> Self::IntoIter {
        self.rates.iter()
    }
}

/// Builds the rate table for one cycle. Stale pools are logged and left out;
/// invalid parameters fail before any pool is looked at.
pub fn build_rate_table<'a, I>(
    token_a: &str,
    token_b: &str,
    snapshots: I,
    reference_trade_size: f64,
    fee_rate: f64,
) -> Result<RateTable, ScannerError>
where
    I: IntoIterator<Item = (&'a str, &'a ReserveSnapshot)>,
{
    validate_positive("reference_trade_size", reference_trade_size)?;
    validate_fee_rate(fee_rate)?;

    let mut table = RateTable::new(token_a, token_b);
    for (pool_id, snapshot) in snapshots {
        match derive_rates(pool_id, snapshot, reference_trade_size, fee_rate) {
            Ok(rate) => {
                debug!(
                    pool = pool_id,
                    a_to_b = rate.rate_a_to_b,
                    b_to_a = rate.rate_b_to_a,
                    "derived rates"
                );
                table.insert(rate);
            }
            Err(ScannerError::StalePool(reason)) => {
                warn!(pool = pool_id, %reason, "excluding stale pool");
            }
            Err(e) => return Err(e),
        }
    }

    Ok(table)
}
