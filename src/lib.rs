//! # Garoupe-256 - Authenticated Encryption over a 512-bit Duplex State
//!
//! This crate provides an implementation of the Garoupe-256 AEAD construction.
//!
//! A 512-bit state is driven by a lightweight add-rotate-xor permutation in
//! duplex mode: every 16-byte block is masked with bytes of the current state,
//! then absorbed, so the same pass produces the ciphertext and accumulates the
//! authentication tag.
//!
//! ## Features
//!
//! - **Small**: a single sequential state machine with no tables
//! - **Security**: 256-bit keys, 160-bit nonces, 128-bit tags, constant-time tag verification
//! - **Hygiene**: the state is wiped when it goes out of scope, on success and on failure
//! - **No-std Compatible**: only `alloc` is needed for the allocating API
//!
//! ## Usage
//!
//! ```rust
//! use garoupe::{decrypt, encrypt};
//!
//! let key = [0u8; 32];      // 256-bit key
//! let nonce = [0u8; 20];    // 160-bit nonce
//! let plaintext = b"Hello, world!";
//! let aad = b"additional data";
//!
//! // Encrypt
//! let (ciphertext, tag) = encrypt(plaintext, aad, &key, &nonce);
//!
//! // Decrypt
//! let decrypted = decrypt(&ciphertext, &tag, aad, &key, &nonce)?;
//! assert_eq!(decrypted, plaintext);
//! # Ok::<(), garoupe::Error>(())
//! ```
//!
//! ## Nonces
//!
//! A nonce MUST NOT be reused with the same key. The construction offers no
//! protection against nonce misuse.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

extern crate alloc;

mod core;
mod error;
mod permutation;
mod state;
mod utils;


pub use crate::core::Garoupe256;
pub use error::{Error, Result};
pub use utils::BLOCK_BYTES;

use alloc::vec::Vec;

/// Key size, in bytes.
pub const KEY_BYTES: usize = 32;

/// Nonce size, in bytes.
pub const NONCE_BYTES: usize = 20;

/// Authentication tag size, in bytes.
pub const TAG_BYTES: usize = 16;

/// Byte written over the whole output buffer when decryption fails.
pub const WIPE_BYTE: u8 = 0xd0;

/// Garoupe-256 key.
pub type Key = [u8; KEY_BYTES];

/// Garoupe-256 nonce.
pub type Nonce = [u8; NONCE_BYTES];

/// Garoupe-256 authentication tag.
pub type Tag = [u8; TAG_BYTES];

/// Encrypts plaintext with associated data using Garoupe-256.
///
/// # Arguments
///
/// * `plaintext` - The data to encrypt
/// * `aad` - Additional authenticated data (not encrypted, but authenticated)
/// * `key` - 256-bit encryption key
/// * `nonce` - 160-bit nonce (must be unique for each encryption with the same key)
///
/// # Returns
///
/// A tuple of (ciphertext, authentication_tag). The ciphertext has exactly
/// the length of the plaintext.
///
/// # Security
///
/// - The nonce MUST NOT be reused with the same key
/// - The key MUST be randomly chosen from a uniform distribution
///
/// # Example
///
/// ```rust
/// use garoupe::encrypt;
///
/// let key = [0u8; 32];
/// let nonce = [0u8; 20];
/// let plaintext = b"secret message";
/// let aad = b"public header";
///
/// let (ciphertext, tag) = encrypt(plaintext, aad, &key, &nonce);
/// assert_eq!(ciphertext.len(), plaintext.len());
/// ```
pub fn encrypt(plaintext: &[u8], aad: &[u8], key: &Key, nonce: &Nonce) -> (Vec<u8>, Tag) {
    Garoupe256::new(key, nonce).encrypt(plaintext, aad)
}

/// Decrypts ciphertext and verifies the authentication tag.
///
/// # Arguments
///
/// * `ciphertext` - The encrypted data
/// * `tag` - 128-bit authentication tag
/// * `aad` - Additional authenticated data (must match encryption)
/// * `key` - 256-bit encryption key (must match encryption)
/// * `nonce` - 160-bit nonce (must match encryption)
///
/// # Returns
///
/// The decrypted plaintext on success, or [`Error::AuthenticationFailed`].
///
/// # Security
///
/// - If tag verification fails, no plaintext data is returned
/// - Tag comparison is performed in constant time
///
/// # Example
///
/// ```rust
/// use garoupe::{encrypt, decrypt};
///
/// let key = [0u8; 32];
/// let nonce = [0u8; 20];
/// let plaintext = b"secret message";
/// let aad = b"public header";
///
/// let (ciphertext, tag) = encrypt(plaintext, aad, &key, &nonce);
/// let decrypted = decrypt(&ciphertext, &tag, aad, &key, &nonce)?;
///
/// assert_eq!(decrypted, plaintext);
/// # Ok::<(), garoupe::Error>(())
/// ```
pub fn decrypt(
    ciphertext: &[u8],
    tag: &Tag,
    aad: &[u8],
    key: &Key,
    nonce: &Nonce,
) -> Result<Vec<u8>> {
    Garoupe256::new(key, nonce).decrypt(ciphertext, tag, aad)
}

/// Encrypts `buffer` in place and returns the authentication tag.
pub fn encrypt_in_place(buffer: &mut [u8], aad: &[u8], key: &Key, nonce: &Nonce) -> Tag {
    Garoupe256::new(key, nonce).encrypt_in_place(buffer, aad)
}

/// Decrypts `buffer` in place and verifies the authentication tag.
///
/// If verification fails, every byte of `buffer` is set to [`WIPE_BYTE`],
/// so a caller that ignores the error still never sees unauthenticated
/// plaintext.
///
/// # Example
///
/// ```rust
/// use garoupe::{decrypt_in_place, encrypt_in_place, Error, WIPE_BYTE};
///
/// let key = [7u8; 32];
/// let nonce = [9u8; 20];
/// let mut buffer = *b"attack at dawn";
///
/// let mut tag = encrypt_in_place(&mut buffer, b"", &key, &nonce);
/// tag[3] ^= 0x20;
///
/// let result = decrypt_in_place(&mut buffer, &tag, b"", &key, &nonce);
/// assert_eq!(result, Err(Error::AuthenticationFailed));
/// assert!(buffer.iter().all(|&b| b == WIPE_BYTE));
/// ```
pub fn decrypt_in_place(
    buffer: &mut [u8],
    tag: &Tag,
    aad: &[u8],
    key: &Key,
    nonce: &Nonce,
) -> Result<()> {
    Garoupe256::new(key, nonce).decrypt_in_place(buffer, tag, aad)
}
