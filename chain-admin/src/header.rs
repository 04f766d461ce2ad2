//! Admin block header

use crate::codec::{ensure_remaining, WireCodec};
use crate::constants::HEADER_SIZE;
use crate::AdminResult;
use bytes::{Buf, BufMut};
use chain_core::{BlockHeight, Hash};
use serde::{Deserialize, Serialize};

/// Fixed-layout header preceding the entry sequence
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AdminBlockHeader {
    /// Identity of the administrative chain
    pub chain_id: Hash,
    /// Hash of the preceding block, zero for the origin block
    pub prev_hash: Hash,
    /// Directory block height this block accompanies
    pub height: BlockHeight,
    /// Number of entries in the body
    pub entry_count: u32,
    /// Size of the entry sequence in bytes
    pub body_size: u32,
}

impl AdminBlockHeader {
    /// Create a new block header
    pub fn new(
        chain_id: Hash,
        prev_hash: Hash,
        height: BlockHeight,
        entry_count: u32,
        body_size: u32,
    ) -> Self {
        Self {
            chain_id,
            prev_hash,
            height,
            entry_count,
            body_size,
        }
    }

    /// Header of an empty block at `height`
    pub fn empty(chain_id: Hash, prev_hash: Hash, height: BlockHeight) -> Self {
        Self::new(chain_id, prev_hash, height, 0, 0)
    }

    /// Check if this is the header of an origin block
    pub fn is_origin(&self) -> bool {
        self.height == 0 && self.prev_hash.is_zero()
    }
}

impl WireCodec for AdminBlockHeader {
    fn encoded_size(&self) -> usize {
        self.chain_id.encoded_size() + self.prev_hash.encoded_size() + 4 + 4 + 4
    }

    fn encode_into<B: BufMut>(&self, buf: &mut B) -> AdminResult<()> {
        self.chain_id.encode_into(buf);
        self.prev_hash.encode_into(buf);
        buf.put_u32(self.height);
        buf.put_u32(self.entry_count);
        buf.put_u32(self.body_size);
        Ok(())
    }

    fn decode<B: Buf>(buf: &mut B) -> AdminResult<Self> {
        ensure_remaining(buf, HEADER_SIZE)?;
        let chain_id = Hash::decode(buf)?;
        let prev_hash = Hash::decode(buf)?;
        Ok(Self {
            chain_id,
            prev_hash,
            height: buf.get_u32(),
            entry_count: buf.get_u32(),
            body_size: buf.get_u32(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AdminError;

    fn sample_header() -> AdminBlockHeader {
        AdminBlockHeader::new(
            Hash::new([0x0a; 32]),
            Hash::new([0xbb; 32]),
            0x0102_0304,
            2,
            0x0000_0104,
        )
    }

    #[test]
    fn test_header_layout() {
        let bytes = sample_header().encode().unwrap();
        assert_eq!(bytes.len(), HEADER_SIZE);
        assert_eq!(&bytes[..32], &[0x0a; 32]);
        assert_eq!(&bytes[32..64], &[0xbb; 32]);
        assert_eq!(&bytes[64..68], &[0x01, 0x02, 0x03, 0x04]);
        assert_eq!(&bytes[68..72], &[0, 0, 0, 2]);
        assert_eq!(&bytes[72..76], &[0, 0, 0x01, 0x04]);
    }

    #[test]
    fn test_header_round_trip() {
        let header = sample_header();
        let bytes = header.encode().unwrap();
        assert_eq!(AdminBlockHeader::from_bytes(&bytes).unwrap(), header);
    }

    #[test]
    fn test_header_size_is_fixed() {
        let zero = AdminBlockHeader::default();
        let max = AdminBlockHeader::new(
            Hash::new([0xff; 32]),
            Hash::new([0xff; 32]),
            u32::MAX,
            u32::MAX,
            u32::MAX,
        );
        assert_eq!(zero.encoded_size(), HEADER_SIZE);
        assert_eq!(max.encoded_size(), HEADER_SIZE);
        assert_eq!(max.encode().unwrap().len(), HEADER_SIZE);
    }

    #[test]
    fn test_header_truncated() {
        let bytes = sample_header().encode().unwrap();
        let mut cursor = &bytes[..HEADER_SIZE - 1];
        assert_eq!(
            AdminBlockHeader::decode(&mut cursor),
            Err(AdminError::TruncatedInput {
                needed: HEADER_SIZE,
                remaining: HEADER_SIZE - 1
            })
        );
        assert_eq!(cursor.len(), HEADER_SIZE - 1);
    }

    #[test]
    fn test_is_origin() {
        let origin = AdminBlockHeader::empty(Hash::new([1; 32]), Hash::zero(), 0);
        assert!(origin.is_origin());
        assert!(!sample_header().is_origin());
    }
}
