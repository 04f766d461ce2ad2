//! Error types for the core crate

use thiserror::Error;

/// Core digest errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Truncated digest: needed {needed} bytes, {remaining} remaining")]
    Truncated { needed: usize, remaining: usize },

    #[error("Invalid hash: {0}")]
    InvalidHash(String),

    #[error("Hex decode error: {0}")]
    HexDecode(#[from] hex::FromHexError),
}

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;
