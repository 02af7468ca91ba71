//! Where the opportunities of each cycle end up.

mod file;

use crate::common::ScannerError;
use crate::scanner::Opportunity;
use async_trait::async_trait;

pub use file::{FileSink, render_json_lines, render_text};

#[async_trait]
pub trait OpportunitySink: Send + Sync {
    /// Receives the opportunities of one cycle in discovery order. Called
    /// once per cycle, also when nothing was found.
    async fn report(&self, opportunities: &[Opportunity]) -> Result<(), ScannerError>;
}
