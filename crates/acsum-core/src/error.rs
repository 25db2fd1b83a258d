//! Error types for the acsum-core library.
//!
//! Voucher content never produces an error: missing fields fall back to
//! sentinels and malformed amounts to zero. These variants cover the
//! surrounding plumbing only.

use thiserror::Error;

/// Main error type for the acsum library.
#[derive(Error, Debug)]
pub enum SummaryError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for the acsum library.
pub type Result<T> = std::result::Result<T, SummaryError>;
