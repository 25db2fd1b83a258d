//! Rule-based extractors for Thai accounting vouchers.

pub mod amounts;
pub mod entries;
pub mod header;
pub mod insights;
pub mod ledger;
pub mod patterns;

pub use amounts::{parse_amount, try_parse_amount};
pub use entries::{extract_entries, EntryExtractor};
pub use header::{extract_header, HeaderField, HeaderFields};
pub use insights::{generate_insights, Insight};
pub use ledger::{aggregate, LedgerTotals};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the first occurrence of the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}
