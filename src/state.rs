//! The 512-bit duplex state.
//!
//! The canonical representation is two halves of eight little-endian 32-bit
//! words. The 64-bit word view and the byte view are derived from it:
//! 64-bit word `k` is `word(2k) | word(2k + 1) << 32`, and byte `i` is byte
//! `i % 4` of `word(i / 4)`.

use crate::permutation::{self, Half};
use crate::utils::{load_le32, BLOCK_BYTES};
use crate::{Key, Nonce};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Initial value of the `x` half.
pub(crate) const X0: Half = [
    0x243f6a88, 0x85a308d3, 0x13198a2e, 0x03707344, 0xa4093822, 0x299f31d0, 0x082efa98, 0xec4e6c89,
];

/// Initial value of the `y` half.
pub(crate) const Y0: Half = [
    0x452821e6, 0x38d01377, 0xbe5466cf, 0x34e90c6c, 0xc0ac29b7, 0xc97c50dd, 0x3f84d5b5, 0xb5470917,
];

/// Number of counter-only updates run after loading key and nonce.
const INIT_ROUNDS: u64 = 20;

/// Duplex state owned by exactly one encryption or decryption.
#[derive(Zeroize, ZeroizeOnDrop)]
pub(crate) struct State {
    x: Half,
    y: Half,
}

impl State {
    /// Load the IV, mix in key and nonce, then run the warm-up updates.
    pub(crate) fn new(key: &Key, nonce: &Nonce) -> Self {
        let mut state = State { x: X0, y: Y0 };

        for (w, k) in state.x.iter_mut().zip(key.chunks_exact(4)) {
            *w ^= load_le32(k);
        }
        // The nonce covers the first 20 bytes (five words) of `y`.
        for (w, n) in state.y.iter_mut().zip(nonce.chunks_exact(4)) {
            *w ^= load_le32(n);
        }

        for i in 0..INIT_ROUNDS {
            state.update(i, i);
        }
        state
    }

    /// 32-bit word `i` of the sixteen-word view.
    #[inline(always)]
    fn word(&self, i: usize) -> u32 {
        if i < 8 {
            self.x[i]
        } else {
            self.y[i - 8]
        }
    }

    /// 64-bit word `i` of the eight-word view.
    #[inline(always)]
    pub(crate) fn word64(&self, i: usize) -> u64 {
        u64::from(self.word(2 * i)) | (u64::from(self.word(2 * i + 1)) << 32)
    }

    /// XOR `v` into 64-bit word `i`.
    #[inline(always)]
    pub(crate) fn xor_word64(&mut self, i: usize, v: u64) {
        let half = if i < 4 { &mut self.x } else { &mut self.y };
        let j = (i % 4) * 2;
        half[j] ^= v as u32;
        half[j + 1] ^= (v >> 32) as u32;
    }

    /// The sixteen bytes starting at byte `offset`, which must be a multiple of 16.
    #[inline]
    pub(crate) fn block(&self, offset: usize) -> [u8; BLOCK_BYTES] {
        debug_assert!(offset % BLOCK_BYTES == 0 && offset < 64);
        let first = offset / 4;
        let mut out = [0u8; BLOCK_BYTES];
        for (j, chunk) in out.chunks_exact_mut(4).enumerate() {
            chunk.copy_from_slice(&self.word(first + j).to_le_bytes());
        }
        out
    }

    /// Advance the state by one duplex step, injecting `d1` and `d2`.
    ///
    /// After the permutation, 64-bit word `i` absorbs the old word `i - 1`
    /// (word 0 takes old word 7), then `d1` lands in word 0 and `d2` in word 4.
    pub(crate) fn update(&mut self, d1: u64, d2: u64) {
        let mut prev = [0u64; 8];
        for (i, w) in prev.iter_mut().enumerate() {
            *w = self.word64(i);
        }

        permutation::permute(&mut self.x, &mut self.y);

        for i in 0..8 {
            self.xor_word64(i, prev[(i + 7) % 8]);
        }
        self.xor_word64(0, d1);
        self.xor_word64(4, d2);

        prev.zeroize();
    }

    #[cfg(test)]
    pub(crate) fn to_bytes(&self) -> [u8; 64] {
        let mut out = [0u8; 64];
        for (i, chunk) in out.chunks_exact_mut(4).enumerate() {
            chunk.copy_from_slice(&self.word(i).to_le_bytes());
        }
        out
    }

    #[cfg(test)]
    pub(crate) fn from_halves(x: Half, y: Half) -> Self {
        State { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_hex(s: &str) -> [u8; 64] {
        let mut out = [0u8; 64];
        out.copy_from_slice(&hex::decode(s).unwrap());
        out
    }

    #[test]
    fn test_views_alias_same_storage() {
        let state = State::from_halves(X0, Y0);
        let bytes = state.to_bytes();

        for i in 0..8 {
            let mut w = [0u8; 8];
            w.copy_from_slice(&bytes[i * 8..i * 8 + 8]);
            assert_eq!(state.word64(i), u64::from_le_bytes(w), "word64({i})");
        }
        for offset in [0, 16, 32, 48] {
            assert_eq!(&state.block(offset)[..], &bytes[offset..offset + 16]);
        }
        assert_eq!(&bytes[..4], &[0x88, 0x6a, 0x3f, 0x24]);
    }

    #[test]
    fn test_xor_word64_targets_one_word() {
        let mut state = State::from_halves([0; 8], [0; 8]);
        state.xor_word64(4, 0x0807_0605_0403_0201);
        let bytes = state.to_bytes();
        assert_eq!(&bytes[32..40], &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert!(bytes[..32].iter().all(|&b| b == 0));
        assert!(bytes[40..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_update_vector() {
        let mut state = State::from_halves(X0, Y0);
        state.update(1, 2);
        let expected = from_hex(
            "e2db9708d6fac766547c026555e150f47cfb6a58f15ad47d5b97d08b5178e85a\
             d2aff4ca91791d268121b4903fbc0b210fe934b2f3ec766388959b93a568af7c",
        );
        assert_eq!(state.to_bytes(), expected);
    }

    #[test]
    fn test_update_injects_into_words_0_and_4() {
        let mut a = State::from_halves(X0, Y0);
        let mut b = State::from_halves(X0, Y0);
        a.update(0, 0);
        b.update(0xff, 0xff00);

        assert_eq!(a.word64(0) ^ b.word64(0), 0xff);
        assert_eq!(a.word64(4) ^ b.word64(4), 0xff00);
        for i in [1, 2, 3, 5, 6, 7] {
            assert_eq!(a.word64(i), b.word64(i));
        }
    }

    #[test]
    fn test_init_vector() {
        let state = State::new(&[0x01; 32], &[0x02; 20]);
        let expected = from_hex(
            "237c8804c5a5f04fc90304e963eb6a0a75e2a611633ce8d59fb592aa8c6dff5f\
             388eb475739a8113fd6f0f166b467a12be95da7e4971aa5decc2788224760e47",
        );
        assert_eq!(state.to_bytes(), expected);
    }

    #[test]
    fn test_init_depends_on_key_and_nonce() {
        let base = State::new(&[0u8; 32], &[0u8; 20]).to_bytes();

        let mut key = [0u8; 32];
        key[31] = 1;
        assert_ne!(State::new(&key, &[0u8; 20]).to_bytes(), base);

        let mut nonce = [0u8; 20];
        nonce[19] = 1;
        assert_ne!(State::new(&[0u8; 32], &nonce).to_bytes(), base);
    }
}
