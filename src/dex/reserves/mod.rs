//! Reserve acquisition: token balances held by each pool.
//!
//! A [ReserveSource] delivers one [ReserveSnapshot] per pool for a cycle.
//! Pools whose balances cannot be read are left out of the cycle; they are
//! tried again on the next one.

mod rpc;

use crate::common::ScannerError;
use crate::dex::chains::TokenPair;
use crate::dex::pools::PoolConfig;
use crate::scanner::ReserveSnapshot;
use async_trait::async_trait;
use futures::future::join_all;
use tracing::warn;

pub use rpc::{RpcReserveSource, balance_of_calldata};

/// Snapshots of one cycle, keyed by pool id, in configured pool order.
pub type PoolSnapshots = Vec<(String, ReserveSnapshot)>;

#[async_trait]
pub trait ReserveSource: Send + Sync {
    fn source_name(&self) -> &str;

    /// Reads TokenA and TokenB balances held by `pool`, in decimal units.
    async fn fetch_reserves(
        &self,
        tokens: &TokenPair,
        pool: &PoolConfig,
    ) -> Result<ReserveSnapshot, ScannerError>;

    /// Reads every pool concurrently. Failed pools are logged and skipped.
    async fn fetch_snapshots(&self, tokens: &TokenPair, pools: &[PoolConfig]) -> PoolSnapshots {
        let futures: Vec<_> = pools
            .iter()
            .map(|pool| self.fetch_reserves(tokens, pool))
            .collect();

        let results = join_all(futures).await;
        let mut snapshots = Vec::with_capacity(pools.len());

        for (pool, result) in pools.iter().zip(results) {
            match result {
                Ok(snapshot) => snapshots.push((pool.id.clone(), snapshot)),
                Err(e) => {
                    warn!(source = self.source_name(), pool = %pool.id, error = %e, "failed to read reserves");
                }
            }
        }

        snapshots
    }
}
