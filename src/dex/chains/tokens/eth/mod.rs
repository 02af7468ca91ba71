use crate::dex::chains::{ChainId, Token, TokenPair};

pub const WETH_ADDRESS: &str = "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2";
pub const DAI_ADDRESS: &str = "0x6B175474E89094C44Da98b954EedeAC495271d0F";

/// Ethereum mainnet tokens used by the default pool catalog.
pub struct EthereumTokens;

impl EthereumTokens {
    pub fn weth() -> Token {
        Token::create(WETH_ADDRESS, "Wrapped Ether", "WETH", 18, ChainId::ETHEREUM)
    }

    pub fn dai() -> Token {
        Token::create(DAI_ADDRESS, "Dai Stablecoin", "DAI", 18, ChainId::ETHEREUM)
    }

    /// WETH as TokenA, DAI as TokenB.
    pub fn weth_dai() -> TokenPair {
        TokenPair::new(Self::weth(), Self::dai())
    }
}
