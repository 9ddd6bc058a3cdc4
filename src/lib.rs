// src/lib.rs

pub mod aliases;
#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod consts;
pub mod crypto;
pub mod decryptor;
pub mod error;
pub mod footer;

// High-level API, what most users import
pub use decryptor::{decrypt_bytes, decrypt_file, DecryptedLog};
pub use error::EndxError;
pub use footer::{split_log_file, FooterWarning, LogFileFooter, ParsedLogFile};

// Low-level primitives, intentionally public at the root because partial
// reads of a still-growing log need direct keystream addressing, and custom
// readers need the KDF without the whole-file pipeline.
pub use crypto::ctr::{apply_keystream_at, keystream_at};
pub use crypto::kdf::derive_log_key;

#[cfg(feature = "batch-ops")]
pub use batch_ops::{decrypt_batch, find_log_files, BatchSummary, JobOutcome};
