use super::ReserveSource;
use crate::common::{
    ScannerError, decode_uint256, from_base_units, get_timestamp_millis, parse_address,
};
use crate::dex::chains::{Token, TokenPair};
use crate::dex::pools::PoolConfig;
use crate::scanner::ReserveSnapshot;
use async_trait::async_trait;
use ethers::core::types::{Bytes, TransactionRequest};
use ethers::providers::{Http, JsonRpcClient, Middleware, Provider};
use std::time::Duration;

// balanceOf(address)
const SELECTOR_BALANCE_OF: &[u8] = &[0x70, 0xa0, 0x82, 0x31];

/// Reads pool reserves with `eth_call` `balanceOf(pool)` on each token
/// contract.
pub struct RpcReserveSource<P = Http> {
    provider: Provider<P>,
    timeout: Duration,
}

impl RpcReserveSource<Http> {
    /// HTTP JSON-RPC source. `timeout` bounds every single `eth_call`.
    pub fn new(rpc_url: &str, timeout: Duration) -> Result<Self, ScannerError> {
        let provider = Provider::<Http>::try_from(rpc_url).map_err(|e| {
            ScannerError::InvalidConfiguration(format!("Invalid RPC URL {}: {}", rpc_url, e))
        })?;
        Ok(Self::with_provider(provider, timeout))
    }
}

impl<P: JsonRpcClient> RpcReserveSource<P> {
    pub fn with_provider(provider: Provider<P>, timeout: Duration) -> Self {
        Self { provider, timeout }
    }

    async fn token_balance(&self, token: &Token, holder: &str) -> Result<f64, ScannerError> {
        let to = parse_address(&token.address)?;
        let tx = TransactionRequest::new()
            .to(to)
            .data(balance_of_calldata(holder)?);

        let result = tokio::time::timeout(self.timeout, self.provider.call(&tx.into(), None))
            .await
            .map_err(|_| {
                ScannerError::RpcError(format!(
                    "eth_call to {} timed out after {:?}",
                    token.address, self.timeout
                ))
            })??;

        from_base_units(decode_uint256(&result)?, token.decimal)
    }
}

/// Calldata for `balanceOf(holder)`: selector followed by the address left
/// padded to 32 bytes.
pub fn balance_of_calldata(holder: &str) -> Result<Bytes, ScannerError> {
    let address = parse_address(holder)?;

    let mut data = Vec::with_capacity(36);
    data.extend_from_slice(SELECTOR_BALANCE_OF);
    data.extend_from_slice(&[0u8; 12]);
    data.extend_from_slice(address.as_bytes());
    Ok(Bytes::from(data))
}

#[async_trait]
impl<P: JsonRpcClient + 'static> ReserveSource for RpcReserveSource<P> {
    fn source_name(&self) -> &str {
        "json-rpc"
    }

    async fn fetch_reserves(
        &self,
        tokens: &TokenPair,
        pool: &PoolConfig,
    ) -> Result<ReserveSnapshot, ScannerError> {
        let (reserve_a, reserve_b) = tokio::try_join!(
            self.token_balance(&tokens.a, &pool.address),
            self.token_balance(&tokens.b, &pool.address)
        )?;

        Ok(ReserveSnapshot::new(
            reserve_a,
            reserve_b,
            get_timestamp_millis(),
        ))
    }
}
