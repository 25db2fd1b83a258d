//! Subcommands and the shared plumbing between them.

pub mod batch;
pub mod config;
pub mod summarize;

use std::fmt;
use std::path::Path;

use acsum_core::SummaryConfig;
use tracing::debug;

/// Raised when `summarize` is called without an input path.
#[derive(Debug)]
pub struct MissingInput;

impl fmt::Display for MissingInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("กรุณาระบุ path ของไฟล์ข้อความ OCR")
    }
}

impl std::error::Error for MissingInput {}

/// Render a failure as the `{"error": ...}` document printed on stdout.
pub fn error_json(err: &anyhow::Error) -> String {
    let message = if err.is::<MissingInput>() {
        err.to_string()
    } else {
        format!("เกิดข้อผิดพลาด: {:#}", err)
    };
    serde_json::json!({ "error": message }).to_string()
}

/// Load the configuration from an explicit path, the default location, or
/// built-in defaults, in that order.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<SummaryConfig> {
    if let Some(path) = config_path {
        debug!("Loading config from {}", path);
        return Ok(SummaryConfig::from_file(Path::new(path))?);
    }

    let default_path = config::default_config_path();
    if default_path.exists() {
        debug!("Loading config from {}", default_path.display());
        Ok(SummaryConfig::from_file(&default_path)?)
    } else {
        Ok(SummaryConfig::default())
    }
}
