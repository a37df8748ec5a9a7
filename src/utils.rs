//! Utility functions for byte manipulation and data processing.

use crate::error::{Error, Result};
use crate::{KEY_BYTES, NONCE_BYTES};
use subtle::ConstantTimeEq;

/// Size of a data block, in bytes.
pub const BLOCK_BYTES: usize = 16;

/// Read a little-endian 32-bit word from the first four bytes.
#[inline(always)]
pub fn load_le32(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Read a little-endian 64-bit word from the first eight bytes.
#[inline(always)]
pub fn load_le64(bytes: &[u8]) -> u64 {
    u64::from_le_bytes([
        bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
    ])
}

/// Split a block into the two 64-bit words the duplex update absorbs.
#[inline(always)]
pub fn block_words(block: &[u8; BLOCK_BYTES]) -> (u64, u64) {
    (load_le64(&block[..8]), load_le64(&block[8..]))
}

/// Copy a (possibly partial) chunk into a zero-padded block.
#[inline]
pub fn pad_block(data: &[u8]) -> [u8; BLOCK_BYTES] {
    debug_assert!(data.len() <= BLOCK_BYTES);
    let mut block = [0u8; BLOCK_BYTES];
    block[..data.len()].copy_from_slice(data);
    block
}

/// XOR two 16-byte blocks.
#[inline]
pub fn xor_block(a: &[u8; BLOCK_BYTES], b: &[u8; BLOCK_BYTES]) -> [u8; BLOCK_BYTES] {
    let mut result = [0u8; BLOCK_BYTES];
    for i in 0..BLOCK_BYTES {
        result[i] = a[i] ^ b[i];
    }
    result
}

/// Constant-time comparison of two byte arrays.
///
/// Differences are accumulated over every byte and tested once at the end.
#[inline]
pub fn ct_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut acc = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        acc |= x ^ y;
    }

    acc.ct_eq(&0).into()
}

/// Validate slice lengths for key and nonce.
pub fn validate_params(key: &[u8], nonce: &[u8]) -> Result<()> {
    if key.len() != KEY_BYTES {
        return Err(Error::InvalidKeyLength);
    }

    if nonce.len() != NONCE_BYTES {
        return Err(Error::InvalidNonceLength);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_le() {
        assert_eq!(load_le32(&[0x78, 0x56, 0x34, 0x12]), 0x12345678);
        assert_eq!(
            load_le64(&[0xef, 0xcd, 0xab, 0x90, 0x78, 0x56, 0x34, 0x12]),
            0x1234567890abcdef
        );
    }

    #[test]
    fn test_block_words() {
        let mut block = [0u8; 16];
        block[0] = 1;
        block[15] = 0x80;
        assert_eq!(block_words(&block), (1, 0x8000_0000_0000_0000));
    }

    #[test]
    fn test_pad_block() {
        let padded = pad_block(&[1, 2, 3]);
        assert_eq!(&padded[..3], &[1, 2, 3]);
        assert_eq!(&padded[3..], &[0; 13]);

        // Already full
        assert_eq!(pad_block(&[7u8; 16]), [7u8; 16]);

        assert_eq!(pad_block(&[]), [0u8; 16]);
    }

    #[test]
    fn test_xor_block() {
        let a = [0xf0; 16];
        let b = [0x0f; 16];
        assert_eq!(xor_block(&a, &b), [0xff; 16]);
    }

    #[test]
    fn test_ct_eq() {
        assert!(ct_eq(&[1, 2, 3], &[1, 2, 3]));
        assert!(!ct_eq(&[1, 2, 3], &[1, 2, 4]));
        assert!(!ct_eq(&[0x80, 2, 3], &[0, 2, 3]));
        assert!(!ct_eq(&[1, 2], &[1, 2, 3]));
        assert!(ct_eq(&[], &[]));
    }

    #[test]
    fn test_validate_params() {
        let key = [0u8; 32];
        let nonce = [0u8; 20];

        assert!(validate_params(&key, &nonce).is_ok());

        // Wrong key length
        assert_eq!(
            validate_params(&[0u8; 31], &nonce),
            Err(Error::InvalidKeyLength)
        );

        // Wrong nonce length
        assert_eq!(
            validate_params(&key, &[0u8; 16]),
            Err(Error::InvalidNonceLength)
        );
    }
}
