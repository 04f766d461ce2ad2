//! Administrative block chain
//!
//! This crate implements the administrative block that accompanies every
//! directory block:
//! - Wire codec for the fixed 76-byte header and the tagged entry variants
//! - Block assembly, self-hashing and parent linkage
//! - The chain-wide height counter that serializes block creation
//! - TOML configuration for a chain instance

pub mod block;
pub mod chain;
pub mod codec;
pub mod config;
pub mod constants;
pub mod entry;
pub mod error;
pub mod header;

pub use block::AdminBlock;
pub use chain::AdminChain;
pub use codec::WireCodec;
pub use config::{AdminChainConfig, BodySizePolicy};
pub use entry::{AdminEntry, DbSignatureEntry, EndOfMinuteEntry, EntryType, Signature};
pub use error::{AdminError, AdminResult};
pub use header::AdminBlockHeader;
