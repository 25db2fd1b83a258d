//! Configuration structures for the summarizer.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, SummaryError};

/// Sentinel written for header fields that were not found ("not found").
pub const NOT_FOUND: &str = "ไม่พบ";

/// Stated total used when no "TOTALS" marker is present.
pub const DEFAULT_TOTAL: &str = "0.00";

/// Main configuration for the acsum pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Header extraction configuration.
    pub extraction: ExtractionConfig,

    /// Debit/credit category rules.
    pub ledger: LedgerRules,

    /// JSON output configuration.
    pub output: OutputConfig,
}

/// Header extraction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Value used for company, payee, date and document number when absent.
    pub not_found: String,

    /// Value used for the stated total when absent.
    pub default_total: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            not_found: NOT_FOUND.to_string(),
            default_total: DEFAULT_TOTAL.to_string(),
        }
    }
}

/// Account-code prefix rules for the debit/credit balance check.
///
/// A code counts toward either total only if it starts with `group_prefix`
/// and then with `debit_prefix` or `credit_prefix`. Debit wins when both
/// sub-prefixes match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerRules {
    /// Prefix gating both categories.
    pub group_prefix: String,

    /// Prefix of debit-category codes.
    pub debit_prefix: String,

    /// Prefix of credit-category codes.
    pub credit_prefix: String,
}

impl Default for LedgerRules {
    fn default() -> Self {
        Self {
            group_prefix: "21".to_string(),
            debit_prefix: "2154".to_string(),
            credit_prefix: "2111".to_string(),
        }
    }
}

/// JSON output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON with two-space indentation.
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl SummaryConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the ledger prefixes can match anything.
    pub fn validate(&self) -> Result<()> {
        let rules = &self.ledger;
        for (name, prefix) in [
            ("debit_prefix", &rules.debit_prefix),
            ("credit_prefix", &rules.credit_prefix),
        ] {
            if !prefix.starts_with(&rules.group_prefix) {
                return Err(SummaryError::Config(format!(
                    "ledger.{} {:?} does not start with ledger.group_prefix {:?}",
                    name, prefix, rules.group_prefix
                )));
            }
        }
        if rules.debit_prefix == rules.credit_prefix {
            return Err(SummaryError::Config(
                "ledger.debit_prefix and ledger.credit_prefix must differ".to_string(),
            ));
        }
        Ok(())
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
