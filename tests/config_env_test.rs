//! Reads configuration from the process environment. Kept in its own test
//! binary so no other test observes the variables.

use aeon_pool_arb_rs::{OutputFormat, ScannerConfig};

#[test]
fn prefixed_environment_overrides_defaults() {
    // SAFETY: single test in this binary, no other thread reads the environment.
    unsafe {
        std::env::set_var("POOL_ARB_RPC_URL", "http://localhost:8545");
        std::env::set_var("POOL_ARB_FEE_RATE", "0.0025");
        std::env::set_var("POOL_ARB_TRADE_AMOUNT", "0.5");
        std::env::set_var("POOL_ARB_REFERENCE_TRADE_SIZE", "0.5");
        std::env::set_var("POOL_ARB_MAX_SNAPSHOT_AGE_MS", "30000");
        std::env::set_var("POOL_ARB_MAX_CYCLES", "3");
        std::env::set_var("POOL_ARB_OUTPUT_FORMAT", "json");
    }

    let config = ScannerConfig::from_env().expect("config should load");

    assert_eq!(config.rpc_url.as_deref(), Some("http://localhost:8545"));
    assert_eq!(config.fee_rate, 0.0025);
    assert_eq!(config.trade_amount, 0.5);
    assert_eq!(config.reference_trade_size, 0.5);
    assert_eq!(config.max_snapshot_age_ms, Some(30_000));
    assert_eq!(config.max_cycles, Some(3));
    assert_eq!(config.output_format, OutputFormat::Json);
    assert_eq!(config.poll_interval_ms, 12_000);
    assert_eq!(config.pools.len(), 4);
    assert!(config.validate().is_ok());
}
