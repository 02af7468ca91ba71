//! Fixed-interval scheduler running one stateless scan cycle per tick:
//! acquire reserves, derive rates, scan, report.

use crate::common::{ScannerConfig, ScannerError, get_timestamp_millis};
use crate::dex::reserves::{PoolSnapshots, ReserveSource};
use crate::report::OpportunitySink;
use crate::scanner::{ArbitrageScanner, ScanReport, build_rate_table};
use std::future::Future;
use tokio::time::MissedTickBehavior;
use tracing::{error, info, warn};

/// What one cycle saw and produced.
#[derive(Debug, Clone)]
pub struct CycleOutcome {
    /// Pools whose reserves were read this cycle
    pub snapshots: usize,
    /// Pools left in the rate table after stale ones were excluded
    pub priced_pools: usize,
    pub report: ScanReport,
    pub timestamp: u64,
}

/// Drops snapshots taken more than `max_age_ms` before `now`.
pub fn drop_stale_snapshots(snapshots: PoolSnapshots, max_age_ms: u64, now: u64) -> PoolSnapshots {
    snapshots
        .into_iter()
        .filter(|(pool_id, snapshot)| {
            let age = now.saturating_sub(snapshot.timestamp);
            if age > max_age_ms {
                warn!(pool = %pool_id, age_ms = age, max_age_ms, "excluding stale snapshot");
                false
            } else {
                true
            }
        })
        .collect()
}

/// Runs a single cycle. Only configuration errors are returned; unreadable
/// pools are skipped and a failing sink is logged.
pub async fn run_cycle(
    config: &ScannerConfig,
    source: &dyn ReserveSource,
    sink: &dyn OpportunitySink,
) -> Result<CycleOutcome, ScannerError> {
    let mut snapshots = source.fetch_snapshots(&config.tokens, &config.pools).await;
    let fetched = snapshots.len();

    let now = get_timestamp_millis();
    if let Some(max_age_ms) = config.max_snapshot_age_ms {
        snapshots = drop_stale_snapshots(snapshots, max_age_ms, now);
    }

    let rates = build_rate_table(
        &config.tokens.a.symbol,
        &config.tokens.b.symbol,
        snapshots.iter().map(|(id, snapshot)| (id.as_str(), snapshot)),
        config.reference_trade_size,
        config.fee_rate,
    )?;
    let report = ArbitrageScanner::scan_report(&rates, config.trade_amount)?;

    info!(
        pools = config.pools.len(),
        fetched,
        priced = rates.len(),
        candidates = report.candidates_evaluated,
        opportunities = report.opportunities.len(),
        "scan cycle complete"
    );

    if let Err(e) = sink.report(&report.opportunities).await {
        error!(error = %e, "failed to report opportunities");
    }

    Ok(CycleOutcome {
        snapshots: fetched,
        priced_pools: rates.len(),
        report,
        timestamp: now,
    })
}

/// Runs cycles every `poll_interval` until `shutdown` resolves or
/// `max_cycles` is reached. Returns the number of completed cycles.
pub async fn run_until<F>(
    config: &ScannerConfig,
    source: &dyn ReserveSource,
    sink: &dyn OpportunitySink,
    shutdown: F,
) -> Result<u64, ScannerError>
where
    F: Future<Output = ()>,
{
    config.validate()?;

    let mut interval = tokio::time::interval(config.poll_interval());
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    tokio::pin!(shutdown);

    let mut cycles = 0u64;
    loop {
        if config.max_cycles.is_some_and(|max| cycles >= max) {
            info!(cycles, "cycle limit reached");
            break;
        }

        tokio::select! {
            _ = &mut shutdown => {
                info!(cycles, "shutdown requested");
                break;
            }
            _ = interval.tick() => {
                run_cycle(config, source, sink).await?;
                cycles += 1;
            }
        }
    }

    Ok(cycles)
}

/// [run_until] with Ctrl-C as the shutdown signal.
pub async fn run(
    config: &ScannerConfig,
    source: &dyn ReserveSource,
    sink: &dyn OpportunitySink,
) -> Result<u64, ScannerError> {
    run_until(config, source, sink, async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "cannot listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    })
    .await
}
