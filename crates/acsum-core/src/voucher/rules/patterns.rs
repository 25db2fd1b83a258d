//! Regex patterns for Thai accounting voucher extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Header fields
    pub static ref COMPANY: Regex = Regex::new(
        r"บริษัท\s+(.+?)\s+จำกัด"
    ).unwrap();

    pub static ref PAYEE: Regex = Regex::new(
        r"Pay to\s+(.*)"
    ).unwrap();

    pub static ref DATE_PRINTED: Regex = Regex::new(
        r"Date Printed:\s+([\d/]+)"
    ).unwrap();

    pub static ref DOCUMENT_NO: Regex = Regex::new(
        r"Document No\.\s+(\S+)"
    ).unwrap();

    pub static ref TOTALS: Regex = Regex::new(
        r"TOTALS\s+([\d,]+\.\d+)"
    ).unwrap();

    // Table rows: | line | account code | description | note | amount |
    pub static ref ENTRY_ROW: Regex = Regex::new(
        r"\|\s*(\d+)\s*\|\s*(\d+)\s*\|([^|\n]*?)\|([^|\n]*?)\|([^|\n]*?)\|"
    ).unwrap();

    // Amount cell after digit normalization: comma-grouped digits, fraction required
    pub static ref AMOUNT_SHAPE: Regex = Regex::new(
        r"^[0-9,]+\.[0-9]+$"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_is_non_greedy() {
        let text = "บริษัท ไทยออยล์ จำกัด (มหาชน) และ บริษัท อื่น จำกัด";
        let caps = COMPANY.captures(text).unwrap();
        assert_eq!(&caps[1], "ไทยออยล์");
    }

    #[test]
    fn test_entry_row_skips_header_and_rule_lines() {
        let text = "| Line | Account | Description | Note | Amount |\n\
                    |------|---------|-------------|------|--------|\n\
                    | 1 | 2154001 | Freight | Job | 1,234.56 |";
        let rows: Vec<_> = ENTRY_ROW.captures_iter(text).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][2], "2154001");
    }
}
