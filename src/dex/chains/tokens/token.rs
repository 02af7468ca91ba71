use crate::dex::chains::ChainId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub address: String,
    pub name: String,
    pub symbol: String,
    pub decimal: u8,
    pub chain_id: ChainId,
}

impl Token {
    pub fn new(
        address: String,
        name: String,
        symbol: String,
        decimal: u8,
        chain_id: ChainId,
    ) -> Self {
        Self {
            address,
            name,
            symbol,
            decimal,
            chain_id,
        }
    }

    /// Creates a token generically with provided parameters
    pub fn create(address: &str, name: &str, symbol: &str, decimal: u8, chain_id: ChainId) -> Self {
        Self::new(
            address.to_string(),
            name.to_string(),
            symbol.to_string(),
            decimal,
            chain_id,
        )
    }
}

/// The two tokens being arbitraged. `a` is TokenA, `b` is TokenB in every
/// reserve snapshot and rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub a: Token,
    pub b: Token,
}

impl TokenPair {
    pub fn new(a: Token, b: Token) -> Self {
        Self { a, b }
    }
}
