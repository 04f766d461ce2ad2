//! Basic blockchain types

use crate::{CoreError, CoreResult};
use bytes::{Buf, BufMut};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Block height type (32-bit unsigned integer)
pub type BlockHeight = u32;

/// 32-byte hash type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hash([u8; 32]);

impl Hash {
    /// Width of a marshalled hash in bytes
    pub const ENCODED_SIZE: usize = 32;

    /// Create a new hash from byte array
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Create hash from slice, failing unless it holds exactly 32 bytes
    pub fn from_slice(slice: &[u8]) -> CoreResult<Self> {
        let bytes: [u8; 32] = slice.try_into().map_err(|_| {
            CoreError::InvalidHash(format!("expected 32 bytes, got {}", slice.len()))
        })?;
        Ok(Self(bytes))
    }

    /// Get the underlying byte array
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to hex string
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Create from hex string, with or without a `0x` prefix
    pub fn from_hex(hex: &str) -> CoreResult<Self> {
        let digits = hex.strip_prefix("0x").unwrap_or(hex);
        let bytes = hex::decode(digits)?;
        if bytes.len() != 32 {
            return Err(hex::FromHexError::InvalidStringLength.into());
        }
        Self::from_slice(&bytes)
    }

    /// Zero hash (all bytes are 0)
    pub fn zero() -> Self {
        Self([0u8; 32])
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// Marshalled size; constant for every hash.
    pub fn encoded_size(&self) -> usize {
        Self::ENCODED_SIZE
    }

    /// Write the raw 32 bytes to `buf`.
    pub fn encode_into<B: BufMut>(&self, buf: &mut B) {
        buf.put_slice(&self.0);
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    /// Read a hash from the front of `buf`, consuming exactly 32 bytes.
    ///
    /// Nothing is consumed when fewer than 32 bytes remain.
    pub fn decode<B: Buf>(buf: &mut B) -> CoreResult<Self> {
        if buf.remaining() < Self::ENCODED_SIZE {
            return Err(CoreError::Truncated {
                needed: Self::ENCODED_SIZE,
                remaining: buf.remaining(),
            });
        }
        let mut bytes = [0u8; 32];
        buf.copy_to_slice(&mut bytes);
        Ok(Self(bytes))
    }
}

impl Default for Hash {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

impl From<[u8; 32]> for Hash {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Hash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for Hash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Hash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Hash::from_hex(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_creation() {
        let hash = Hash::zero();
        assert_eq!(
            hash.to_hex(),
            "0000000000000000000000000000000000000000000000000000000000000000"
        );
        assert!(hash.is_zero());

        let bytes = [1u8; 32];
        let hash2 = Hash::new(bytes);
        assert_eq!(
            hash2.to_hex(),
            "0101010101010101010101010101010101010101010101010101010101010101"
        );
        assert!(!hash2.is_zero());
    }

    #[test]
    fn test_hash_from_hex() {
        let hex = "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef";
        let hash = Hash::from_hex(hex).unwrap();
        assert_eq!(hash.to_hex(), hex);

        let prefixed = Hash::from_hex(&format!("0x{}", hex)).unwrap();
        assert_eq!(prefixed, hash);

        assert!(matches!(
            Hash::from_hex("abcd"),
            Err(CoreError::HexDecode(hex::FromHexError::InvalidStringLength))
        ));
    }

    #[test]
    fn test_from_slice_rejects_wrong_length() {
        assert!(Hash::from_slice(&[7u8; 32]).is_ok());
        assert!(matches!(
            Hash::from_slice(&[7u8; 31]),
            Err(CoreError::InvalidHash(_))
        ));
    }

    #[test]
    fn test_encode_decode() {
        let hash = Hash::new([0xab; 32]);
        let mut out = Vec::new();
        hash.encode_into(&mut out);
        assert_eq!(out.len(), hash.encoded_size());
        assert_eq!(out, hash.to_vec());

        out.push(0xff);
        let mut cursor = out.as_slice();
        assert_eq!(Hash::decode(&mut cursor).unwrap(), hash);
        assert_eq!(cursor, &[0xff]);
    }

    #[test]
    fn test_decode_truncated_consumes_nothing() {
        let data = [1u8; 31];
        let mut cursor = &data[..];
        assert_eq!(
            Hash::decode(&mut cursor),
            Err(CoreError::Truncated {
                needed: 32,
                remaining: 31
            })
        );
        assert_eq!(cursor.len(), 31);
    }

    #[test]
    fn test_serde_hex_string() {
        let hash = Hash::new([0x0a; 32]);
        let json = serde_json::to_string(&hash).unwrap();
        assert_eq!(json, format!("\"0x{}\"", "0a".repeat(32)));
        let back: Hash = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hash);
    }
}
