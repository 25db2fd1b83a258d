//! Core library for summarizing OCR-transcribed Thai accounting vouchers.
//!
//! This crate provides:
//! - Header field extraction (company, payee, date, document number, total)
//! - Pipe-delimited table row extraction with exact decimal amounts
//! - Per-account aggregation and the debit/credit balance check
//! - Rule-based insights, serialized alongside the summary as JSON

pub mod error;
pub mod models;
pub mod voucher;

pub use error::{Result, SummaryError};
pub use models::config::SummaryConfig;
pub use models::summary::{LineEntry, SummaryRecord};
pub use voucher::{DocumentSummarizer, Summarizer};
