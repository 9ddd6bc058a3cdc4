//! Global constants for the Endx log container format.
//!
//! Every value here is fixed by the producer side of the protocol; none of
//! them are tuning knobs.

/// AES-256 key length in bytes.
pub const KEY_SIZE: usize = 32;

/// AES block size; also the CTR keystream granularity.
pub const BLOCK_SIZE: usize = 16;

/// Per-file KDF salt length.
pub const SALT_SIZE: usize = 16;

/// PBKDF2-HMAC-SHA256 iteration count used by every producer version.
pub const PBKDF2_ITERATIONS: u32 = 10_000;

/// Footer magic. The constant's big-endian bytes spell `"Endx"`; on the
/// wire it is stored as a little-endian u32 like every other footer field.
pub const FOOTER_MAGIC: u32 = 0x456E_6478;

/// Modern footer length: salt 16 + magic 4 + padding 4 + file size 8 + used size 8.
pub const FOOTER_SIZE: usize = 40;

/// Legacy footer length: salt 16 + magic 4 + file size 4 + used size 4.
pub const LEGACY_FOOTER_SIZE: usize = 28;
