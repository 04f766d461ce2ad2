//! Admin block entries
//!
//! Every entry starts with a one-byte type tag. The tag alone decides which
//! variant follows, so the decoder peeks it before handing the buffer to the
//! variant's own decoder.

use crate::codec::{ensure_remaining, peek_u8, WireCodec};
use crate::constants::{
    DB_SIGNATURE_SIZE, END_OF_MINUTE_SIZE, SIG_LENGTH, TYPE_DB_SIGNATURE, TYPE_MINUTE_NUMBER,
};
use crate::{AdminError, AdminResult};
use bytes::{Buf, BufMut};
use chain_core::Hash;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use tracing::trace;

/// Closed table of entry tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryType {
    MinuteNumber,
    DbSignature,
}

impl EntryType {
    pub fn tag(self) -> u8 {
        match self {
            EntryType::MinuteNumber => TYPE_MINUTE_NUMBER,
            EntryType::DbSignature => TYPE_DB_SIGNATURE,
        }
    }

    /// Encoded size of every entry of this type, tag included
    pub fn encoded_size(self) -> usize {
        match self {
            EntryType::MinuteNumber => END_OF_MINUTE_SIZE,
            EntryType::DbSignature => DB_SIGNATURE_SIZE,
        }
    }
}

impl TryFrom<u8> for EntryType {
    type Error = AdminError;

    fn try_from(tag: u8) -> AdminResult<Self> {
        match tag {
            TYPE_MINUTE_NUMBER => Ok(EntryType::MinuteNumber),
            TYPE_DB_SIGNATURE => Ok(EntryType::DbSignature),
            other => Err(AdminError::UnknownEntryType(other)),
        }
    }
}

/// Consume the tag byte, checking it belongs to `expected`.
fn read_tag<B: Buf>(buf: &mut B, expected: EntryType) -> AdminResult<()> {
    let found = peek_u8(buf)?;
    if found != expected.tag() {
        return Err(AdminError::UnexpectedEntryType {
            expected: expected.tag(),
            found,
        });
    }
    buf.advance(1);
    Ok(())
}

/// Fixed-width directory block signature
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signature([u8; SIG_LENGTH]);

impl Signature {
    pub fn new(bytes: [u8; SIG_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Create from slice, failing unless it holds exactly `SIG_LENGTH` bytes
    pub fn from_slice(slice: &[u8]) -> AdminResult<Self> {
        let bytes: [u8; SIG_LENGTH] = slice
            .try_into()
            .map_err(|_| AdminError::InvalidSignatureLength {
                expected: SIG_LENGTH,
                actual: slice.len(),
            })?;
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; SIG_LENGTH] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn zero() -> Self {
        Self([0u8; SIG_LENGTH])
    }
}

impl Default for Signature {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({})", self.to_hex())
    }
}

impl Serialize for Signature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Signature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        let bytes = hex::decode(&s).map_err(de::Error::custom)?;
        Signature::from_slice(&bytes).map_err(de::Error::custom)
    }
}

/// Marks the end of a minute within the directory block period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EndOfMinuteEntry {
    pub minute: u8,
}

impl EndOfMinuteEntry {
    pub fn new(minute: u8) -> Self {
        Self { minute }
    }

    pub fn type_tag(&self) -> u8 {
        TYPE_MINUTE_NUMBER
    }
}

impl WireCodec for EndOfMinuteEntry {
    fn encoded_size(&self) -> usize {
        END_OF_MINUTE_SIZE
    }

    fn encode_into<B: BufMut>(&self, buf: &mut B) -> AdminResult<()> {
        buf.put_u8(self.type_tag());
        buf.put_u8(self.minute);
        Ok(())
    }

    fn decode<B: Buf>(buf: &mut B) -> AdminResult<Self> {
        ensure_remaining(buf, END_OF_MINUTE_SIZE)?;
        read_tag(buf, EntryType::MinuteNumber)?;
        Ok(Self {
            minute: buf.get_u8(),
        })
    }
}

/// Signature over the previous directory block by an authority identity
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DbSignatureEntry {
    /// Identity chain of the signing authority
    pub identity_chain_id: Hash,
    /// Public key the signature verifies against
    pub pub_key: Hash,
    /// Signature of the previous directory block
    pub prev_db_signature: Signature,
}

impl DbSignatureEntry {
    pub fn new(identity_chain_id: Hash, pub_key: Hash, prev_db_signature: Signature) -> Self {
        Self {
            identity_chain_id,
            pub_key,
            prev_db_signature,
        }
    }

    pub fn type_tag(&self) -> u8 {
        TYPE_DB_SIGNATURE
    }
}

impl WireCodec for DbSignatureEntry {
    fn encoded_size(&self) -> usize {
        1 + self.identity_chain_id.encoded_size() + self.pub_key.encoded_size() + SIG_LENGTH
    }

    fn encode_into<B: BufMut>(&self, buf: &mut B) -> AdminResult<()> {
        buf.put_u8(self.type_tag());
        self.identity_chain_id.encode_into(buf);
        self.pub_key.encode_into(buf);
        buf.put_slice(self.prev_db_signature.as_bytes());
        Ok(())
    }

    fn decode<B: Buf>(buf: &mut B) -> AdminResult<Self> {
        ensure_remaining(buf, DB_SIGNATURE_SIZE)?;
        read_tag(buf, EntryType::DbSignature)?;
        let identity_chain_id = Hash::decode(buf)?;
        let pub_key = Hash::decode(buf)?;
        let mut signature = [0u8; SIG_LENGTH];
        buf.copy_to_slice(&mut signature);
        Ok(Self {
            identity_chain_id,
            pub_key,
            prev_db_signature: Signature::new(signature),
        })
    }
}

/// One record in an admin block body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AdminEntry {
    EndOfMinute(EndOfMinuteEntry),
    DbSignature(DbSignatureEntry),
}

impl AdminEntry {
    pub fn entry_type(&self) -> EntryType {
        match self {
            AdminEntry::EndOfMinute(_) => EntryType::MinuteNumber,
            AdminEntry::DbSignature(_) => EntryType::DbSignature,
        }
    }

    pub fn type_tag(&self) -> u8 {
        match self {
            AdminEntry::EndOfMinute(e) => e.type_tag(),
            AdminEntry::DbSignature(e) => e.type_tag(),
        }
    }
}

impl From<EndOfMinuteEntry> for AdminEntry {
    fn from(entry: EndOfMinuteEntry) -> Self {
        AdminEntry::EndOfMinute(entry)
    }
}

impl From<DbSignatureEntry> for AdminEntry {
    fn from(entry: DbSignatureEntry) -> Self {
        AdminEntry::DbSignature(entry)
    }
}

impl WireCodec for AdminEntry {
    fn encoded_size(&self) -> usize {
        match self {
            AdminEntry::EndOfMinute(e) => e.encoded_size(),
            AdminEntry::DbSignature(e) => e.encoded_size(),
        }
    }

    fn encode_into<B: BufMut>(&self, buf: &mut B) -> AdminResult<()> {
        match self {
            AdminEntry::EndOfMinute(e) => e.encode_into(buf),
            AdminEntry::DbSignature(e) => e.encode_into(buf),
        }
    }

    /// Peek the tag, then let the matching variant decode the whole entry.
    fn decode<B: Buf>(buf: &mut B) -> AdminResult<Self> {
        let tag = peek_u8(buf)?;
        let entry_type = EntryType::try_from(tag)?;
        trace!(tag, ?entry_type, remaining = buf.remaining(), "decoding admin entry");
        match entry_type {
            EntryType::MinuteNumber => EndOfMinuteEntry::decode(buf).map(AdminEntry::EndOfMinute),
            EntryType::DbSignature => DbSignatureEntry::decode(buf).map(AdminEntry::DbSignature),
        }
    }
}
