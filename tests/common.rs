use aeon_pool_arb_rs::{
    ChainId, Opportunity, OpportunitySink, PoolConfig, ReserveSnapshot, ReserveSource,
    ScannerConfig, ScannerError, TokenPair,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

// Allow dead code warnings since different test files use different items from this module
#[allow(dead_code)]
pub const FEE_RATE: f64 = 0.003;

#[allow(dead_code)]
pub const REFERENCE_TRADE_SIZE: f64 = 1.0;

#[allow(dead_code)]
pub const TRADE_AMOUNT: f64 = 0.000001;

#[allow(dead_code)]
pub fn snapshot(reserve_a: f64, reserve_b: f64) -> ReserveSnapshot {
    ReserveSnapshot::new(reserve_a, reserve_b, 0)
}

#[allow(dead_code)]
pub fn pool(id: &str) -> PoolConfig {
    PoolConfig::create(id, "0x0000000000000000000000000000000000000001", ChainId::ETHEREUM)
}

/// Config over the given pool ids with fast ticks, no RPC.
#[allow(dead_code)]
pub fn test_config(pool_ids: &[&str]) -> ScannerConfig {
    ScannerConfig {
        pools: pool_ids.iter().map(|id| pool(id)).collect(),
        poll_interval_ms: 10,
        ..ScannerConfig::default()
    }
}

/// Serves fixed reserves per pool id; unknown pools fail like an RPC error.
#[allow(dead_code)]
pub struct StaticReserveSource {
    reserves: HashMap<String, ReserveSnapshot>,
    pub calls: AtomicUsize,
}

#[allow(dead_code)]
impl StaticReserveSource {
    pub fn new(entries: &[(&str, ReserveSnapshot)]) -> Self {
        Self {
            reserves: entries
                .iter()
                .map(|(id, snapshot)| (id.to_string(), *snapshot))
                .collect(),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ReserveSource for StaticReserveSource {
    fn source_name(&self) -> &str {
        "static"
    }

    async fn fetch_reserves(
        &self,
        _tokens: &TokenPair,
        pool: &PoolConfig,
    ) -> Result<ReserveSnapshot, ScannerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reserves
            .get(&pool.id)
            .copied()
            .ok_or_else(|| ScannerError::RpcError(format!("no reserves for {}", pool.id)))
    }
}

/// Keeps every reported cycle in memory.
#[allow(dead_code)]
#[derive(Default)]
pub struct RecordingSink {
    pub cycles: Mutex<Vec<Vec<Opportunity>>>,
}

#[async_trait]
impl OpportunitySink for RecordingSink {
    async fn report(&self, opportunities: &[Opportunity]) -> Result<(), ScannerError> {
        self.cycles.lock().unwrap().push(opportunities.to_vec());
        Ok(())
    }
}

/// Always fails, to check a broken sink does not stop the runner.
#[allow(dead_code)]
pub struct FailingSink;

#[async_trait]
impl OpportunitySink for FailingSink {
    async fn report(&self, _opportunities: &[Opportunity]) -> Result<(), ScannerError> {
        Err(ScannerError::IoError(std::io::Error::other("disk full")))
    }
}
