//! Header field extraction (company, payee, date, document number, total).

use regex::Regex;

use super::FieldExtractor;
use super::patterns::{COMPANY, DATE_PRINTED, DOCUMENT_NO, PAYEE, TOTALS};

/// A labeled scalar field in the voucher header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderField {
    /// Text between "บริษัท" and "จำกัด".
    Company,
    /// Rest of the line after "Pay to".
    Payee,
    /// Digits and slashes after "Date Printed:".
    DatePrinted,
    /// Token after "Document No.".
    DocumentNo,
    /// Decimal number after "TOTALS".
    Totals,
}

impl HeaderField {
    /// All header fields in output order.
    pub const ALL: [HeaderField; 5] = [
        HeaderField::Company,
        HeaderField::Payee,
        HeaderField::DatePrinted,
        HeaderField::DocumentNo,
        HeaderField::Totals,
    ];

    /// Output field name.
    pub fn name(&self) -> &'static str {
        match self {
            HeaderField::Company => "company",
            HeaderField::Payee => "payee",
            HeaderField::DatePrinted => "date",
            HeaderField::DocumentNo => "doc_no",
            HeaderField::Totals => "total",
        }
    }

    fn pattern(&self) -> &'static Regex {
        match self {
            HeaderField::Company => &*COMPANY,
            HeaderField::Payee => &*PAYEE,
            HeaderField::DatePrinted => &*DATE_PRINTED,
            HeaderField::DocumentNo => &*DOCUMENT_NO,
            HeaderField::Totals => &*TOTALS,
        }
    }
}

impl FieldExtractor for HeaderField {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.pattern()
            .captures(text)
            .map(|caps| caps[1].trim().to_string())
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        self.pattern()
            .captures_iter(text)
            .map(|caps| caps[1].trim().to_string())
            .collect()
    }
}

/// Header fields found in a voucher. `None` means the marker was absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderFields {
    pub company: Option<String>,
    pub payee: Option<String>,
    pub date: Option<String>,
    pub doc_no: Option<String>,
    pub total: Option<String>,
}

impl HeaderFields {
    /// Names of the fields that were not found.
    pub fn missing(&self) -> Vec<&'static str> {
        HeaderField::ALL
            .iter()
            .filter(|field| self.get(**field).is_none())
            .map(|field| field.name())
            .collect()
    }

    /// Value of a single field.
    pub fn get(&self, field: HeaderField) -> Option<&str> {
        match field {
            HeaderField::Company => self.company.as_deref(),
            HeaderField::Payee => self.payee.as_deref(),
            HeaderField::DatePrinted => self.date.as_deref(),
            HeaderField::DocumentNo => self.doc_no.as_deref(),
            HeaderField::Totals => self.total.as_deref(),
        }
    }
}

/// Extract the header fields from voucher text.
pub fn extract_header(text: &str) -> HeaderFields {
    HeaderFields {
        company: HeaderField::Company.extract(text),
        payee: HeaderField::Payee.extract(text),
        date: HeaderField::DatePrinted.extract(text),
        doc_no: HeaderField::DocumentNo.extract(text),
        total: HeaderField::Totals.extract(text),
    }
}
