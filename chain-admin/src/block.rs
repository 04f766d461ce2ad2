//! Admin block assembly, hashing and decoding

use crate::chain::AdminChain;
use crate::codec::WireCodec;
use crate::config::BodySizePolicy;
use crate::constants::MIN_ENTRY_SIZE;
use crate::entry::{AdminEntry, DbSignatureEntry, EndOfMinuteEntry, Signature};
use crate::header::AdminBlockHeader;
use crate::{AdminError, AdminResult};
use bytes::{Buf, BufMut};
use chain_core::{sha256, BlockHeight, Hash};
use serde::Serialize;
use tracing::{debug, warn};

/// Administrative block: a header followed by an ordered entry sequence.
///
/// The self-hash is cached and never encoded. Appending an entry drops the
/// cached value, so a hash obtained through [`AdminBlock::hash`] always covers
/// every entry present at the time of the call.
#[derive(Debug, Clone, Serialize)]
pub struct AdminBlock {
    /// Block header
    pub header: AdminBlockHeader,
    /// Entries in insertion order
    entries: Vec<AdminEntry>,
    #[serde(skip)]
    self_hash: Option<Hash>,
}

impl AdminBlock {
    /// Create an empty block with an explicit header position
    pub fn new(chain_id: Hash, prev_hash: Hash, height: BlockHeight, capacity: usize) -> Self {
        Self {
            header: AdminBlockHeader::empty(chain_id, prev_hash, height),
            entries: Vec::with_capacity(capacity),
            self_hash: None,
        }
    }

    /// Create the next empty block of `chain` without advancing its height.
    ///
    /// `prev` must be absent exactly when the chain is at height 0. A parent
    /// that was never hashed gets its hash computed and cached here.
    pub fn create(
        chain: &AdminChain,
        prev: Option<&mut AdminBlock>,
        capacity: usize,
    ) -> AdminResult<Self> {
        Self::link(chain.chain_id(), chain.next_height(), prev, capacity)
    }

    /// Linkage rule shared by `create` and `AdminChain::begin_next_block`
    pub(crate) fn link(
        chain_id: Hash,
        height: BlockHeight,
        prev: Option<&mut AdminBlock>,
        capacity: usize,
    ) -> AdminResult<Self> {
        let prev_hash = match prev {
            None if height != 0 => {
                warn!(height, "missing parent for non-origin admin block");
                return Err(AdminError::InvalidChainLinkage {
                    height,
                    reason: "previous block cannot be absent",
                });
            }
            Some(_) if height == 0 => {
                warn!("parent supplied for origin admin block");
                return Err(AdminError::InvalidChainLinkage {
                    height,
                    reason: "origin block cannot have a parent block",
                });
            }
            None => Hash::zero(),
            Some(parent) => parent.hash()?,
        };

        debug!(%chain_id, height, %prev_hash, "created admin block");
        Ok(Self::new(chain_id, prev_hash, height, capacity))
    }

    /// Encode the block, hash it and cache the result.
    pub fn build_self_hash(&mut self) -> AdminResult<Hash> {
        let encoded = self.encode()?;
        let hash = sha256(&encoded);
        self.self_hash = Some(hash);
        Ok(hash)
    }

    /// Cached self-hash, computing it first if necessary
    pub fn hash(&mut self) -> AdminResult<Hash> {
        match self.self_hash {
            Some(hash) => Ok(hash),
            None => self.build_self_hash(),
        }
    }

    /// Cached self-hash, if one is current
    pub fn self_hash(&self) -> Option<Hash> {
        self.self_hash
    }

    /// Append an entry.
    ///
    /// Only fails once the header's 32-bit counters are exhausted.
    pub fn add_entry(&mut self, entry: impl Into<AdminEntry>) -> AdminResult<()> {
        let entry = entry.into();
        // Counters come from the entries; a decoded header may carry any body_size.
        let entry_count =
            u32::try_from(self.entries.len() + 1).map_err(|_| AdminError::BlockFull)?;
        let body_size = u32::try_from(self.body_size() + entry.encoded_size())
            .map_err(|_| AdminError::BlockFull)?;

        self.header.entry_count = entry_count;
        self.header.body_size = body_size;
        self.entries.push(entry);
        self.self_hash = None;
        Ok(())
    }

    /// Append an end-of-minute marker
    pub fn add_end_of_minute_marker(&mut self, minute: u8) -> AdminResult<()> {
        self.add_entry(EndOfMinuteEntry::new(minute))
    }

    /// Append a directory block signature
    pub fn add_db_signature(
        &mut self,
        identity_chain_id: Hash,
        pub_key: Hash,
        signature: Signature,
    ) -> AdminResult<()> {
        self.add_entry(DbSignatureEntry::new(identity_chain_id, pub_key, signature))
    }

    pub fn entries(&self) -> &[AdminEntry] {
        &self.entries
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn height(&self) -> BlockHeight {
        self.header.height
    }

    /// Check if block is the chain's origin
    pub fn is_origin(&self) -> bool {
        self.header.is_origin()
    }

    /// Encoded size of the entry sequence
    pub fn body_size(&self) -> usize {
        self.entries.iter().map(WireCodec::encoded_size).sum()
    }

    /// Check the header's declared body size against the entries
    pub fn verify_body_size(&self) -> AdminResult<()> {
        let actual = self.body_size();
        if actual != self.header.body_size as usize {
            return Err(AdminError::BodySizeMismatch {
                declared: self.header.body_size,
                actual,
            });
        }
        Ok(())
    }

    /// Decode a block, applying `policy` to the declared body size
    pub fn from_bytes_with_policy(data: &[u8], policy: BodySizePolicy) -> AdminResult<Self> {
        let block = Self::from_bytes(data)?;
        if policy == BodySizePolicy::Strict {
            block.verify_body_size()?;
        }
        Ok(block)
    }
}

impl PartialEq for AdminBlock {
    fn eq(&self, other: &Self) -> bool {
        self.header == other.header && self.entries == other.entries
    }
}

impl Eq for AdminBlock {}

impl WireCodec for AdminBlock {
    fn encoded_size(&self) -> usize {
        self.header.encoded_size() + self.body_size()
    }

    fn encode_into<B: BufMut>(&self, buf: &mut B) -> AdminResult<()> {
        if self.header.entry_count as usize != self.entries.len() {
            return Err(AdminError::EntryCountMismatch {
                declared: self.header.entry_count,
                actual: self.entries.len(),
            });
        }
        self.header.encode_into(buf)?;
        for entry in &self.entries {
            entry.encode_into(buf)?;
        }
        Ok(())
    }

    fn decode<B: Buf>(buf: &mut B) -> AdminResult<Self> {
        let header = AdminBlockHeader::decode(buf)?;
        let capacity = (header.entry_count as usize).min(buf.remaining() / MIN_ENTRY_SIZE);
        let mut entries = Vec::with_capacity(capacity);
        for _ in 0..header.entry_count {
            entries.push(AdminEntry::decode(buf)?);
        }
        debug!(
            height = header.height,
            entries = entries.len(),
            "decoded admin block"
        );
        Ok(Self {
            header,
            entries,
            self_hash: None,
        })
    }
}
