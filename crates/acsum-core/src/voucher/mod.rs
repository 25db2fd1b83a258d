//! Voucher summarization module.

mod summarizer;
pub mod rules;

pub use summarizer::DocumentSummarizer;

use crate::error::Result;
use crate::models::summary::SummaryRecord;

/// Trait for voucher summarizers.
pub trait Summarizer {
    /// Summarize OCR text. Never fails on messy or partial content.
    fn summarize(&self, text: &str) -> SummaryRecord;

    /// Summarize OCR text and render the result as JSON.
    fn summarize_to_json(&self, text: &str, pretty: bool) -> Result<String> {
        self.summarize(text).to_json(pretty)
    }
}
