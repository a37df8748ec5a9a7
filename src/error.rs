//! Error types for Garoupe-256 operations.

use core::fmt;

/// Result type alias for Garoupe-256 operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur during Garoupe-256 operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Invalid key length (must be 32 bytes).
    InvalidKeyLength,

    /// Invalid nonce length (must be 20 bytes).
    InvalidNonceLength,

    /// Authentication tag verification failed.
    AuthenticationFailed,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidKeyLength => write!(f, "invalid key length (must be 32 bytes)"),
            Error::InvalidNonceLength => write!(f, "invalid nonce length (must be 20 bytes)"),
            Error::AuthenticationFailed => write!(f, "authentication tag verification failed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
