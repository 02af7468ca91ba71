#[derive(thiserror::Error, Debug)]
pub enum ScannerError {
    #[error("Stale pool: {0}")]
    StalePool(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Provider error: {0}")]
    ProviderError(#[from] ethers::providers::ProviderError),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("JSON-RPC error: {0}")]
    RpcError(String),

    #[error("Config error: {0}")]
    ConfigError(#[from] envy::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

