use serde::{Deserialize, Serialize};
use std::fmt;

/// Which token is sold first on the sell pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeDirection {
    /// Sell TokenA for TokenB on the sell pool, buy TokenA back on the buy pool.
    AtoB,
    /// Sell TokenB for TokenA on the sell pool, buy TokenB back on the buy pool.
    BtoA,
}

impl TradeDirection {
    /// Evaluation order for a single pool pair.
    pub const ALL: [TradeDirection; 2] = [TradeDirection::AtoB, TradeDirection::BtoA];

    pub fn reverse(self) -> Self {
        match self {
            TradeDirection::AtoB => TradeDirection::BtoA,
            TradeDirection::BtoA => TradeDirection::AtoB,
        }
    }

    /// (sold, received) token labels for this direction.
    pub fn legs<'a>(self, token_a: &'a str, token_b: &'a str) -> (&'a str, &'a str) {
        match self {
            TradeDirection::AtoB => (token_a, token_b),
            TradeDirection::BtoA => (token_b, token_a),
        }
    }
}

impl fmt::Display for TradeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeDirection::AtoB => write!(f, "A -> B"),
            TradeDirection::BtoA => write!(f, "B -> A"),
        }
    }
}

/// Arbitrage opportunity - sell on one pool, buy back on another
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    pub direction: TradeDirection,
    /// Pool the first leg is sold into
    pub sell_pool: String,
    /// Pool the second leg buys back from
    pub buy_pool: String,
    /// Net return for the scanned trade amount, always > 0
    pub profit: f64,
    /// Symbol of the token sold on the sell pool
    pub token_sold: String,
    /// Symbol of the token received on the sell pool; `profit` is denominated in it
    pub profit_token: String,
    /// e.g. "Sell WETH -> DAI on UniswapV2 and buy DAI -> WETH on Sushiswap"
    pub narrative: String,
}

impl Opportunity {
    /// Human-readable direction using token symbols, e.g. "WETH -> DAI".
    pub fn direction_label(&self) -> String {
        format!("{} -> {}", self.token_sold, self.profit_token)
    }
}

/// Result of one scan pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanReport {
    /// Discovery order: sell pool, then buy pool, then direction
    pub opportunities: Vec<Opportunity>,
    /// Number of (sell pool, buy pool, direction) triples examined
    pub candidates_evaluated: usize,
}
