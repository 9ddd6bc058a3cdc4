//! # Error Types
//!
//! This module defines the error type used throughout the library.
//! Only conditions that prevent producing plaintext live here; advisory
//! footer anomalies are modeled separately as
//! [`FooterWarning`](crate::footer::FooterWarning) and never abort a
//! decryption.

use thiserror::Error;

/// The error type for all Endx log decryption operations.
#[derive(Error, Debug)]
pub enum EndxError {
    /// I/O error occurred during file operations.
    ///
    /// Wraps [`std::io::Error`] and is created automatically when reading
    /// an input file or writing a batch output fails.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is shorter than any known footer layout, so there is no
    /// salt to derive a key from and nothing can be decrypted.
    #[error("file too small for a log footer: {len} bytes")]
    FileTooSmall { len: u64 },

    /// Cryptographic operation failed (KDF derivation).
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// An empty password was supplied. The producer never encrypts with an
    /// empty password; rejected at the CLI boundary before any file is
    /// touched.
    #[error("password must not be empty")]
    EmptyPassword,
}
