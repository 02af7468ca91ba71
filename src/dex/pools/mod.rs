//! Constant-product pools watched by the scanner.

use crate::dex::chains::ChainId;
use serde::{Deserialize, Serialize};

/// A pool the scanner reads reserves from. `id` is the human-readable venue
/// name used as the key in snapshots, rate tables and reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolConfig {
    pub id: String,
    pub address: String,
    pub chain_id: ChainId,
}

impl PoolConfig {
    pub fn create(id: &str, address: &str, chain_id: ChainId) -> Self {
        Self {
            id: id.to_string(),
            address: address.to_string(),
            chain_id,
        }
    }
}

/// WETH/DAI pairs on Ethereum mainnet.
pub struct EthereumPools;

impl EthereumPools {
    pub fn weth_dai() -> Vec<PoolConfig> {
        vec![
            PoolConfig::create(
                "UniswapV2",
                "0xa478c2975ab1ea89e8196811f51a7b7ade33eb11",
                ChainId::ETHEREUM,
            ),
            PoolConfig::create(
                "Sushiswap",
                "0xc3d03e4f041fd4cd388c549ee2a29a9e5075882f",
                ChainId::ETHEREUM,
            ),
            PoolConfig::create(
                "Shebaswap",
                "0x8faf958e36c6970497386118030e6297fff8d275",
                ChainId::ETHEREUM,
            ),
            PoolConfig::create(
                "Croswap",
                "0x60a26d69263ef43e9a68964ba141263f19d71d51",
                ChainId::ETHEREUM,
            ),
        ]
    }
}
