//! tests/common.rs
//! Shared constants and fixture builders for integration tests

use endx_decrypt::aliases::{LogKey32, LogPassword};
use endx_decrypt::consts::{FOOTER_MAGIC, FOOTER_SIZE};
use endx_decrypt::{apply_keystream_at, derive_log_key, LogFileFooter};
use secure_gate::RevealSecret;

/// Standard test password used across test files
#[allow(dead_code)] // Used across multiple test files
pub const TEST_PASSWORD: &str = "correct horse battery staple";

/// Standard per-file salt used where the exact value does not matter
#[allow(dead_code)] // Used across multiple test files
pub const TEST_SALT: [u8; 16] = [0x11; 16];

/// Build a complete encrypted log file image: the CTR-encrypted plaintext
/// followed by a well-formed modern footer whose sizes are all accurate.
#[allow(dead_code)] // Used across multiple test files
pub fn build_log_file(plaintext: &[u8], password: &str, salt: [u8; 16]) -> Vec<u8> {
    build_log_file_with(plaintext, password, salt, |_| {})
}

/// Same as [`build_log_file`] but lets the caller tweak the footer before
/// it is encoded, e.g. to corrupt the magic or shrink `used_size`.
#[allow(dead_code)] // Used across multiple test files
pub fn build_log_file_with(
    plaintext: &[u8],
    password: &str,
    salt: [u8; 16],
    tweak: impl FnOnce(&mut LogFileFooter),
) -> Vec<u8> {
    let password = LogPassword::new(password.to_string());
    let mut key = LogKey32::new([0u8; 32]);
    derive_log_key(&password, &salt, &mut key).unwrap();

    let mut payload = plaintext.to_vec();
    apply_keystream_at(key.expose_secret(), &mut payload, 0);

    let mut footer = LogFileFooter {
        salt,
        magic: FOOTER_MAGIC,
        padding: 0,
        declared_file_size: (payload.len() + FOOTER_SIZE) as u64,
        used_size: payload.len() as u64,
    };
    tweak(&mut footer);

    let mut file = payload;
    file.extend_from_slice(&footer.to_bytes());
    file
}
