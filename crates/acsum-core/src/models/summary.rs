//! Voucher summary data model.
//!
//! Amounts are held as exact [`Decimal`] values for every sum and comparison.
//! They become `f64` only inside the serializers below, when the record is
//! written out as JSON.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Serialize, Serializer};

use crate::error::Result;

/// Structured summary of a single OCR-transcribed voucher.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRecord {
    /// Legal entity name found between "บริษัท" and "จำกัด".
    pub company: String,

    /// Recipient following "Pay to".
    pub payee: String,

    /// Date token following "Date Printed:" (not validated as a calendar date).
    pub date: String,

    /// Document identifier following "Document No.".
    pub doc_no: String,

    /// Stated total, kept as the matched text.
    pub total: String,

    /// Table rows in order of appearance.
    pub entries: Vec<LineEntry>,

    /// Summed amount per account code.
    #[serde(serialize_with = "serialize_decimal_map")]
    pub account_totals: BTreeMap<String, Decimal>,

    /// Sum over debit-category account codes.
    #[serde(serialize_with = "serialize_decimal")]
    pub debit_total: Decimal,

    /// Sum over credit-category account codes.
    #[serde(serialize_with = "serialize_decimal")]
    pub credit_total: Decimal,

    /// Whether `debit_total` equals `credit_total` exactly.
    pub balance_ok: bool,

    /// Human-readable annotations in rule evaluation order.
    pub insights: Vec<String>,
}

/// A single row of the voucher's account table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineEntry {
    /// Row index as printed.
    pub line: String,

    /// Account code digits.
    pub account_code: String,

    /// Row description.
    pub description: String,

    /// Free-form note column.
    pub note: String,

    /// Row amount, zero when the column was blank or unreadable.
    #[serde(serialize_with = "serialize_decimal")]
    pub amount: Decimal,
}

impl SummaryRecord {
    /// Render the record as JSON.
    ///
    /// Pretty output uses two-space indentation. Thai text is written
    /// unescaped.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

fn decimal_to_f64(value: &Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

fn serialize_decimal<S>(value: &Decimal, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(decimal_to_f64(value))
}

fn serialize_decimal_map<S>(
    map: &BTreeMap<String, Decimal>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_map(map.iter().map(|(code, amount)| (code, decimal_to_f64(amount))))
}
