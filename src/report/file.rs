use super::OpportunitySink;
use crate::common::{OutputFormat, ScannerError};
use crate::scanner::Opportunity;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

pub const NO_ARBITRAGE_LINE: &str = "No arbitrage found.";

/// Appends every cycle's opportunities to a file.
pub struct FileSink {
    path: PathBuf,
    format: OutputFormat,
}

impl FileSink {
    pub fn new(path: impl AsRef<Path>, format: OutputFormat) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            format,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Three lines per opportunity, or a single "No arbitrage found." line.
pub fn render_text(opportunities: &[Opportunity]) -> String {
    if opportunities.is_empty() {
        return format!("{}\n", NO_ARBITRAGE_LINE);
    }

    let mut out = String::new();
    for opp in opportunities {
        out.push_str(&format!(
            "Arbitrage Opportunity Found! Direction: {}\n",
            opp.direction_label()
        ));
        out.push_str(&format!("Profit: {} {}\n", opp.profit, opp.profit_token));
        out.push_str(&format!("Details: {}\n", opp.narrative));
    }
    out
}

/// One JSON object per opportunity. Empty cycles write nothing.
pub fn render_json_lines(opportunities: &[Opportunity]) -> Result<String, ScannerError> {
    let mut out = String::new();
    for opp in opportunities {
        out.push_str(&serde_json::to_string(opp)?);
        out.push('\n');
    }
    Ok(out)
}

#[async_trait]
impl OpportunitySink for FileSink {
    async fn report(&self, opportunities: &[Opportunity]) -> Result<(), ScannerError> {
        let rendered = match self.format {
            OutputFormat::Text => render_text(opportunities),
            OutputFormat::Json => render_json_lines(opportunities)?,
        };
        if rendered.is_empty() {
            return Ok(());
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(rendered.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}
