//! Core Garoupe-256 algorithm implementation.

use crate::error::{Error, Result};
use crate::state::State;
use crate::utils::{self, block_words, ct_eq, pad_block, xor_block, BLOCK_BYTES};
use crate::{Key, Nonce, Tag, WIPE_BYTE};
use alloc::vec::Vec;
use tracing::{debug, trace};
use zeroize::Zeroize;

/// Byte offsets of the two state windows that mask data blocks.
const MASK_OFFSETS: [usize; 2] = [16, 48];

/// Byte offsets of the state windows folded into the tag.
const TAG_OFFSETS: [usize; 4] = [0, 16, 32, 48];

/// Number of length-injecting updates before the tag is extracted.
const MAC_ROUNDS: usize = 10;

impl State {
    /// Mask derived from the current (pre-update) state.
    #[inline]
    fn keystream(&self) -> [u8; BLOCK_BYTES] {
        xor_block(&self.block(MASK_OFFSETS[0]), &self.block(MASK_OFFSETS[1]))
    }

    /// Absorb a block without producing output.
    ///
    /// This is `enc` with the masked block discarded.
    #[inline]
    fn absorb(&mut self, ai: &[u8; BLOCK_BYTES]) {
        let (d1, d2) = block_words(ai);
        self.update(d1, d2);
    }

    /// Absorb associated data, zero-padding the final partial block.
    fn absorb_ad(&mut self, ad: &[u8]) {
        for chunk in ad.chunks(BLOCK_BYTES) {
            self.absorb(&pad_block(chunk));
        }
    }

    /// Encrypt a single block, then absorb the plaintext.
    #[inline]
    fn enc(&mut self, mi: &[u8; BLOCK_BYTES]) -> [u8; BLOCK_BYTES] {
        let mut ks = self.keystream();
        let ci = xor_block(mi, &ks);
        ks.zeroize();
        self.absorb(mi);
        ci
    }

    /// Decrypt a single block, then absorb the recovered plaintext.
    #[inline]
    fn dec(&mut self, ci: &[u8; BLOCK_BYTES]) -> [u8; BLOCK_BYTES] {
        let mut ks = self.keystream();
        let mi = xor_block(ci, &ks);
        ks.zeroize();
        self.absorb(&mi);
        mi
    }

    /// Decrypt a final partial block in place.
    fn dec_partial(&mut self, cn: &mut [u8]) {
        let len = cn.len();
        debug_assert!(len > 0 && len < BLOCK_BYTES);

        let mut mi = self.dec(&pad_block(cn));
        cn.copy_from_slice(&mi[..len]);
        self.undo_partial_block_padding(&mi, len);
        mi.zeroize();
    }

    /// Cancel the padding bytes absorbed by `dec` for a partial block.
    ///
    /// Decrypting a zero-padded ciphertext block yields keystream bytes past
    /// `valid_len`, and those were injected instead of the zeros `enc` absorbs.
    /// XORing them back out of bytes `[0..8)` and `[32..40)` (64-bit words 0
    /// and 4) puts the state on the same trajectory as encryption.
    fn undo_partial_block_padding(&mut self, decrypted: &[u8; BLOCK_BYTES], valid_len: usize) {
        let mut pad = *decrypted;
        pad[..valid_len].fill(0);
        let (d1, d2) = block_words(&pad);
        self.xor_word64(0, d1);
        self.xor_word64(4, d2);
        pad.zeroize();
    }

    /// Generate the authentication tag, binding both lengths.
    fn mac(&mut self, ad_len: usize, m_len: usize) -> Tag {
        for _ in 0..MAC_ROUNDS {
            self.update(ad_len as u64, m_len as u64);
        }

        let mut tag = [0u8; BLOCK_BYTES];
        for offset in TAG_OFFSETS {
            tag = xor_block(&tag, &self.block(offset));
        }
        tag
    }
}

/// Garoupe-256 cipher bound to one key and nonce.
///
/// The state is initialized on construction and consumed by the first
/// encryption or decryption, so a value can only ever process one message.
pub struct Garoupe256 {
    state: State,
}

impl Garoupe256 {
    /// Create a new instance from a key and a nonce.
    ///
    /// The nonce MUST NOT be reused with the same key.
    pub fn new(key: &Key, nonce: &Nonce) -> Self {
        Garoupe256 {
            state: State::new(key, nonce),
        }
    }

    /// Create a new instance from key and nonce slices, checking their lengths.
    pub fn new_from_slices(key: &[u8], nonce: &[u8]) -> Result<Self> {
        utils::validate_params(key, nonce)?;

        let mut k = [0u8; crate::KEY_BYTES];
        let mut n = [0u8; crate::NONCE_BYTES];
        k.copy_from_slice(key);
        n.copy_from_slice(nonce);

        let cipher = Self::new(&k, &n);
        k.zeroize();
        Ok(cipher)
    }

    /// Encrypt a message, returning the ciphertext and the tag.
    pub fn encrypt(self, plaintext: &[u8], aad: &[u8]) -> (Vec<u8>, Tag) {
        let mut ciphertext = plaintext.to_vec();
        let tag = self.encrypt_in_place(&mut ciphertext, aad);
        (ciphertext, tag)
    }

    /// Encrypt in place, returning the tag.
    pub fn encrypt_in_place(mut self, mc: &mut [u8], aad: &[u8]) -> Tag {
        let state = &mut self.state;
        let mclen = mc.len();
        trace!(ad_len = aad.len(), m_len = mclen, "encrypting");

        state.absorb_ad(aad);

        let mut chunks = mc.chunks_exact_mut(BLOCK_BYTES);
        for chunk in chunks.by_ref() {
            let mut mi = [0u8; BLOCK_BYTES];
            mi.copy_from_slice(chunk);
            chunk.copy_from_slice(&state.enc(&mi));
            mi.zeroize();
        }
        let rem = chunks.into_remainder();
        if !rem.is_empty() {
            let len = rem.len();
            let mut mi = pad_block(rem);
            let mut ci = state.enc(&mi);
            rem.copy_from_slice(&ci[..len]);
            mi.zeroize();
            ci.zeroize();
        }

        state.mac(aad.len(), mclen)
    }

    /// Decrypt a message and verify its tag.
    ///
    /// No plaintext is returned if verification fails.
    pub fn decrypt(self, ciphertext: &[u8], tag: &Tag, aad: &[u8]) -> Result<Vec<u8>> {
        let mut plaintext = ciphertext.to_vec();
        self.decrypt_in_place(&mut plaintext, tag, aad)?;
        Ok(plaintext)
    }

    /// Decrypt in place and verify the tag.
    ///
    /// On failure the whole buffer is overwritten with [`WIPE_BYTE`].
    pub fn decrypt_in_place(mut self, mc: &mut [u8], tag: &Tag, aad: &[u8]) -> Result<()> {
        let state = &mut self.state;
        let mclen = mc.len();
        trace!(ad_len = aad.len(), c_len = mclen, "decrypting");

        state.absorb_ad(aad);

        let mut chunks = mc.chunks_exact_mut(BLOCK_BYTES);
        for chunk in chunks.by_ref() {
            let mut ci = [0u8; BLOCK_BYTES];
            ci.copy_from_slice(chunk);
            let mut mi = state.dec(&ci);
            chunk.copy_from_slice(&mi);
            mi.zeroize();
        }
        let rem = chunks.into_remainder();
        if !rem.is_empty() {
            state.dec_partial(rem);
        }

        let mut expected_tag = state.mac(aad.len(), mclen);
        let valid = ct_eq(tag, &expected_tag);
        expected_tag.zeroize();

        if !valid {
            mc.fill(WIPE_BYTE);
            debug!(c_len = mclen, "authentication failed, output wiped");
            return Err(Error::AuthenticationFailed);
        }
        Ok(())
    }
}
