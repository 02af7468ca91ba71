// src/common/utils.rs
use crate::common::ScannerError;
use ethers::core::types::{Address, U256};
use ethers::utils::format_units;
use std::str::FromStr;

// Parse a string to a f64, return a ScannerError if the parsing fails
pub fn parse_f64(value: &str, field_name: &str) -> Result<f64, ScannerError> {
    value
        .parse::<f64>()
        .map_err(|_| ScannerError::RpcError(format!("Invalid {} format", field_name)))
}

pub fn parse_address(value: &str) -> Result<Address, ScannerError> {
    Address::from_str(value.trim_start_matches("0x"))
        .map_err(|e| ScannerError::RpcError(format!("Invalid address {}: {}", value, e)))
}

/// Decodes a single ABI `uint256` return value. An empty return (no contract
/// at the address) decodes to zero.
pub fn decode_uint256(data: &[u8]) -> Result<U256, ScannerError> {
    if data.len() > 32 {
        return Err(ScannerError::RpcError(format!(
            "uint256 return value too long: {} bytes",
            data.len()
        )));
    }
    Ok(U256::from_big_endian(data))
}

/// Converts an amount in the token's smallest unit into decimal units.
pub fn from_base_units(raw: U256, decimals: u8) -> Result<f64, ScannerError> {
    let formatted = format_units(raw, decimals as u32)
        .map_err(|e| ScannerError::RpcError(format!("Cannot format units: {}", e)))?;
    parse_f64(&formatted, "token amount")
}

// get timestamp in milliseconds
pub fn get_timestamp_millis() -> u64 {
    chrono::Utc::now()
        .timestamp_millis()
        .try_into()
        .unwrap_or(0)
}
