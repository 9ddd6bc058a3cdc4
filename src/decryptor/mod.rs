// src/decryptor/mod.rs

//! High-level decryption facade.
//!
//! Core API: `decrypt_file(path, password)?` for whole files,
//! `decrypt_bytes` for content already in memory. Both return the
//! recovered plaintext together with any advisory footer warnings; where
//! the output goes is the caller's business.

pub(crate) mod decrypt;

pub use decrypt::{decrypt_bytes, decrypt_file, DecryptedLog};
