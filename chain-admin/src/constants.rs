//! Protocol constants for the administrative chain

use chain_core::Hash;

/// Width of a directory block signature in bytes
pub const SIG_LENGTH: usize = 64;

/// Entry tag: end-of-minute marker
pub const TYPE_MINUTE_NUMBER: u8 = 0x00;
/// Entry tag: directory block signature
pub const TYPE_DB_SIGNATURE: u8 = 0x01;

/// Header: two digests plus height, entry count and body size
pub const HEADER_SIZE: usize = 2 * Hash::ENCODED_SIZE + 4 + 4 + 4;

pub const END_OF_MINUTE_SIZE: usize = 2;

/// Tag, identity chain id, public key, signature
pub const DB_SIGNATURE_SIZE: usize = 1 + 2 * Hash::ENCODED_SIZE + SIG_LENGTH;

/// Smallest possible encoded entry
pub const MIN_ENTRY_SIZE: usize = END_OF_MINUTE_SIZE;

/// Well-known chain id of the administrative chain
pub const ADMIN_CHAIN_ID: [u8; 32] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0x0a,
];

pub fn admin_chain_id() -> Hash {
    Hash::new(ADMIN_CHAIN_ID)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes() {
        assert_eq!(HEADER_SIZE, 76);
        assert_eq!(DB_SIGNATURE_SIZE, 65 + SIG_LENGTH);
    }

    #[test]
    fn test_admin_chain_id() {
        assert_eq!(
            admin_chain_id().to_hex(),
            "000000000000000000000000000000000000000000000000000000000000000a"
        );
    }
}
