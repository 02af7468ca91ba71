pub mod chain;
pub mod tokens;

// Re-export
pub use chain::ChainId;
pub use tokens::{EthereumTokens, Token, TokenPair};
