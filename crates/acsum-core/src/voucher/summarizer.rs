//! Rule-based voucher summarizer.

use tracing::{debug, info};

use crate::models::config::{ExtractionConfig, LedgerRules, SummaryConfig};
use crate::models::summary::SummaryRecord;

use super::rules::{aggregate, extract_entries, extract_header, generate_insights};
use super::Summarizer;

/// Summarizer running header extraction, row extraction, aggregation and
/// insight generation over a single OCR transcript.
#[derive(Debug, Clone, Default)]
pub struct DocumentSummarizer {
    /// Sentinels for missing header fields.
    extraction: ExtractionConfig,
    /// Debit/credit prefix rules.
    ledger: LedgerRules,
}

impl DocumentSummarizer {
    /// Create a summarizer with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a summarizer from a loaded configuration.
    pub fn from_config(config: &SummaryConfig) -> Self {
        Self {
            extraction: config.extraction.clone(),
            ledger: config.ledger.clone(),
        }
    }

    /// Set the value used for missing company, payee, date and document number.
    pub fn with_not_found(mut self, sentinel: impl Into<String>) -> Self {
        self.extraction.not_found = sentinel.into();
        self
    }

    /// Set the value used when no stated total is found.
    pub fn with_default_total(mut self, total: impl Into<String>) -> Self {
        self.extraction.default_total = total.into();
        self
    }

    /// Set the debit/credit prefix rules.
    pub fn with_ledger_rules(mut self, rules: LedgerRules) -> Self {
        self.ledger = rules;
        self
    }

    fn or_not_found(&self, value: Option<String>) -> String {
        value.unwrap_or_else(|| self.extraction.not_found.clone())
    }
}

impl Summarizer for DocumentSummarizer {
    fn summarize(&self, text: &str) -> SummaryRecord {
        info!("Summarizing voucher from {} characters of text", text.len());

        let header = extract_header(text);
        let missing = header.missing();
        if !missing.is_empty() {
            debug!("Header fields not found: {}", missing.join(", "));
        }

        let entries = extract_entries(text);
        debug!("Extracted {} table rows", entries.len());

        let totals = aggregate(&entries, &self.ledger);
        let balance_ok = totals.is_balanced();
        debug!(
            "Debit {} / credit {} across {} accounts",
            totals.debit_total,
            totals.credit_total,
            totals.account_totals.len()
        );

        let insights = generate_insights(text, &entries, balance_ok)
            .iter()
            .map(|insight| insight.message().to_string())
            .collect();

        SummaryRecord {
            company: self.or_not_found(header.company),
            payee: self.or_not_found(header.payee),
            date: self.or_not_found(header.date),
            doc_no: self.or_not_found(header.doc_no),
            total: header
                .total
                .unwrap_or_else(|| self.extraction.default_total.clone()),
            entries,
            account_totals: totals.account_totals,
            debit_total: totals.debit_total,
            credit_total: totals.credit_total,
            balance_ok,
            insights,
        }
    }
}
