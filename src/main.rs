use aeon_pool_arb_rs::{FileSink, RpcReserveSource, ScannerConfig, ScannerError, run};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    if let Err(e) = start().await {
        error!(error = %e, "pool-arb-scanner stopped");
        std::process::exit(1);
    }
}

async fn start() -> Result<(), ScannerError> {
    let config = ScannerConfig::from_env()?;
    config.validate()?;

    let source = RpcReserveSource::new(config.require_rpc_url()?, config.request_timeout())?;
    let sink = FileSink::new(&config.output_path, config.output_format);

    info!(
        tokens = %format!("{}/{}", config.tokens.a.symbol, config.tokens.b.symbol),
        pools = config.pools.len(),
        fee_rate = config.fee_rate,
        trade_amount = config.trade_amount,
        reference_trade_size = config.reference_trade_size,
        output = %sink.path().display(),
        "starting pool arbitrage scanner"
    );

    let cycles = run(&config, &source, &sink).await?;
    info!(cycles, "pool-arb-scanner finished");
    Ok(())
}
