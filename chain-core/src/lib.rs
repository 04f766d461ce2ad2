//! Core blockchain primitives
//!
//! This crate provides the digest type shared by every chain in the system:
//! - `Hash`, the fixed-width 32-byte digest with its binary marshal contract
//! - `sha256`, the content-hash function applied to encoded blocks
//! - `CoreError`, the error type for digest parsing and decoding

pub mod crypto;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use crypto::*;
pub use error::*;
pub use types::*;
