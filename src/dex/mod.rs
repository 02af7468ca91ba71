// imports
pub mod amm;
pub mod chains;
pub mod pools;
pub mod reserves;

// re-exports
pub use amm::get_amount_out;
pub use chains::{ChainId, EthereumTokens, Token, TokenPair};
pub use pools::{EthereumPools, PoolConfig};
pub use reserves::{PoolSnapshots, ReserveSource, RpcReserveSource};
