//! Binary wire codec shared by headers, entries and blocks

use crate::{AdminError, AdminResult};
use bytes::{Buf, BufMut};

/// Byte-exact marshalling used by every admin block structure.
///
/// `decode` reads from the front of `buf` and must leave it untouched on a
/// truncation failure detected before the first field is read.
pub trait WireCodec: Sized {
    /// Exact number of bytes `encode` produces
    fn encoded_size(&self) -> usize;

    /// Append the encoding to `buf`
    fn encode_into<B: BufMut>(&self, buf: &mut B) -> AdminResult<()>;

    /// Decode one value, advancing `buf` past it
    fn decode<B: Buf>(buf: &mut B) -> AdminResult<Self>;

    /// Encode into a freshly allocated buffer
    fn encode(&self) -> AdminResult<Vec<u8>> {
        let mut out = Vec::with_capacity(self.encoded_size());
        self.encode_into(&mut out)?;
        Ok(out)
    }

    /// Decode from a byte slice, ignoring anything after the value
    fn from_bytes(data: &[u8]) -> AdminResult<Self> {
        let mut cursor = data;
        Self::decode(&mut cursor)
    }
}

/// Fail with `TruncatedInput` unless `needed` bytes remain.
pub(crate) fn ensure_remaining<B: Buf>(buf: &B, needed: usize) -> AdminResult<()> {
    if buf.remaining() < needed {
        return Err(AdminError::TruncatedInput {
            needed,
            remaining: buf.remaining(),
        });
    }
    Ok(())
}

/// First byte of `buf` without consuming it.
pub(crate) fn peek_u8<B: Buf>(buf: &B) -> AdminResult<u8> {
    ensure_remaining(buf, 1)?;
    Ok(buf.chunk()[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_remaining() {
        let data = [1u8, 2, 3];
        let cursor = &data[..];
        assert!(ensure_remaining(&cursor, 3).is_ok());
        assert_eq!(
            ensure_remaining(&cursor, 4),
            Err(AdminError::TruncatedInput {
                needed: 4,
                remaining: 3
            })
        );
    }

    #[test]
    fn test_peek_does_not_consume() {
        let data = [9u8, 8];
        let cursor = &data[..];
        assert_eq!(peek_u8(&cursor).unwrap(), 9);
        assert_eq!(cursor.remaining(), 2);

        let empty: &[u8] = &[];
        assert!(matches!(
            peek_u8(&empty),
            Err(AdminError::TruncatedInput { needed: 1, remaining: 0 })
        ));
    }
}
