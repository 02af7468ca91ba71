use serde::{Deserialize, Serialize};

/// EVM chains with a built-in token and pool catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChainId {
    ETHEREUM = 0x1,
}

impl ChainId {
    pub fn id(&self) -> u64 {
        *self as u64
    }

    pub fn name(&self) -> &'static str {
        match self {
            ChainId::ETHEREUM => "ethereum",
        }
    }
}
