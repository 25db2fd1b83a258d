//! Amount parsing for voucher table rows.

use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::warn;

use super::patterns::AMOUNT_SHAPE;

/// Parse a thousands-separated amount (e.g. "1,234.56") as an exact decimal.
///
/// Blank or unreadable text yields zero.
pub fn parse_amount(s: &str) -> Decimal {
    try_parse_amount(s).unwrap_or_else(|| {
        if !s.trim().is_empty() {
            warn!("Unreadable amount {:?}, using 0", s.trim());
        }
        Decimal::ZERO
    })
}

/// Parse a thousands-separated amount, returning `None` if it is blank or
/// malformed.
///
/// Thai digits (๐-๙) are read as their ASCII counterparts. Signs, exponents,
/// underscores and amounts without a fractional part are rejected.
pub fn try_parse_amount(s: &str) -> Option<Decimal> {
    let normalized: String = s.trim().chars().map(ascii_digit).collect();
    if !AMOUNT_SHAPE.is_match(&normalized) {
        return None;
    }
    Decimal::from_str(&normalized.replace(',', "")).ok()
}

fn ascii_digit(c: char) -> char {
    match c {
        '\u{0E50}'..='\u{0E59}' => char::from(b'0' + (c as u32 - 0x0E50) as u8),
        _ => c,
    }
}
