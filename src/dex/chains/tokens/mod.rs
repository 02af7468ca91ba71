pub mod eth;
pub mod token;

// Re-export
pub use eth::EthereumTokens;
pub use token::{Token, TokenPair};
