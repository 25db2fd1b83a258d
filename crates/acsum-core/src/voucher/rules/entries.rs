//! Line-item extraction from pipe-delimited voucher tables.

use crate::models::summary::LineEntry;

use super::FieldExtractor;
use super::amounts::parse_amount;
use super::patterns::ENTRY_ROW;

/// Table row extractor.
pub struct EntryExtractor;

impl EntryExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EntryExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for EntryExtractor {
    type Output = LineEntry;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        ENTRY_ROW
            .captures_iter(text)
            .map(|caps| LineEntry {
                line: caps[1].to_string(),
                account_code: caps[2].to_string(),
                description: caps[3].trim().to_string(),
                note: caps[4].trim().to_string(),
                amount: parse_amount(&caps[5]),
            })
            .collect()
    }
}

/// Extract every table row from voucher text, in order of appearance.
pub fn extract_entries(text: &str) -> Vec<LineEntry> {
    EntryExtractor::new().extract_all(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_extract_entries() {
        let text = r#"
            | No | Account | Description | Note | Amount |
            | 1 | 2154001 | Freight charge | Instrumentation job | 1,234.56 |
            | 2 | 2111002 | Withholding tax |  | 1,234.56 |
        "#;

        let entries = extract_entries(text);

        assert_eq!(
            entries,
            vec![
                LineEntry {
                    line: "1".to_string(),
                    account_code: "2154001".to_string(),
                    description: "Freight charge".to_string(),
                    note: "Instrumentation job".to_string(),
                    amount: Decimal::from_str("1234.56").unwrap(),
                },
                LineEntry {
                    line: "2".to_string(),
                    account_code: "2111002".to_string(),
                    description: "Withholding tax".to_string(),
                    note: String::new(),
                    amount: Decimal::from_str("1234.56").unwrap(),
                },
            ]
        );
    }

    #[test]
    fn test_missing_amount_is_zero() {
        let entries = extract_entries("| 3 | 5100 | Office supplies | ภาษีซื้อ | |");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].amount, Decimal::ZERO);
        assert_eq!(entries[0].note, "ภาษีซื้อ");
    }

    #[test]
    fn test_malformed_amount_keeps_entry() {
        let entries = extract_entries("| 4 | 2154009 | Freight | | 1,0a0.00 |");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].account_code, "2154009");
        assert_eq!(entries[0].amount, Decimal::ZERO);
    }

    #[test]
    fn test_order_and_line_numbers_are_preserved() {
        let text = "| 10 | 1 | a | | 1.00 |\n| 2 | 2 | b | | 2.00 |\n| 7 | 3 | c | | 3.00 |";
        let lines: Vec<String> = extract_entries(text).into_iter().map(|e| e.line).collect();
        assert_eq!(lines, vec!["10", "2", "7"]);
    }

    #[test]
    fn test_no_rows() {
        assert!(extract_entries("no table here").is_empty());
        assert!(EntryExtractor::new().extract("| a | b | c | d | e |").is_none());
    }
}
