pub mod config;
pub mod errors;
pub mod utils;

// Re-export
pub use config::{
    DEFAULT_FEE_RATE, DEFAULT_REQUEST_TIMEOUT_MS, OutputFormat, ScannerConfig, validate_fee_rate,
    validate_positive,
};
pub use errors::ScannerError;
pub use utils::{decode_uint256, from_base_units, get_timestamp_millis, parse_address, parse_f64};
