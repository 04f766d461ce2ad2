//! Admin block error types

use chain_core::CoreError;
use thiserror::Error;

/// Admin block error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AdminError {
    /// Origin/non-origin mismatch between the parent block and chain height
    #[error("Invalid chain linkage at height {height}: {reason}")]
    InvalidChainLinkage { height: u32, reason: &'static str },

    /// Not enough bytes left for a fixed-size field
    #[error("Truncated input: needed {needed} bytes, {remaining} remaining")]
    TruncatedInput { needed: usize, remaining: usize },

    /// Tag byte outside the entry type table
    #[error("Unknown entry type: 0x{0:02x}")]
    UnknownEntryType(u8),

    /// A variant decoder was handed another variant's bytes
    #[error("Unexpected entry type: expected 0x{expected:02x}, found 0x{found:02x}")]
    UnexpectedEntryType { expected: u8, found: u8 },

    #[error("Invalid signature length: expected {expected} bytes, got {actual}")]
    InvalidSignatureLength { expected: usize, actual: usize },

    #[error("Entry count mismatch: header declares {declared}, block holds {actual}")]
    EntryCountMismatch { declared: u32, actual: usize },

    #[error("Body size mismatch: header declares {declared}, entries occupy {actual}")]
    BodySizeMismatch { declared: u32, actual: usize },

    /// Entry count or body size no longer fits the header's 32-bit fields
    #[error("Block cannot hold more entries")]
    BlockFull,

    /// The chain's height counter cannot be advanced any further
    #[error("Block height overflow")]
    HeightOverflow,

    /// Error reported by the digest codec
    #[error("Digest codec error: {0}")]
    Digest(#[from] CoreError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for admin block operations
pub type AdminResult<T> = Result<T, AdminError>;
