//! Data models for voucher summaries and configuration.

pub mod config;
pub mod summary;
