//! src/decryptor/decrypt.rs

use std::path::Path;

use secure_gate::RevealSecret;

use crate::aliases::{LogKey32, LogPassword};
use crate::crypto::ctr::apply_keystream_at;
use crate::crypto::kdf::derive_log_key;
use crate::error::EndxError;
use crate::footer::{split_log_file, FooterWarning};

/// Result of a successful decryption pass.
#[derive(Debug, Clone)]
pub struct DecryptedLog {
    /// Recovered plaintext, truncated to the footer's used size where that
    /// applied.
    pub plaintext: Vec<u8>,
    /// Advisory anomalies observed while parsing the footer, in the order
    /// they were found.
    pub warnings: Vec<FooterWarning>,
}

/// Decrypt in-memory log file content.
///
/// Splits off the footer, derives the file key from `(password, salt)` and
/// runs the counter-mode pass over the payload. The payload starts at file
/// offset 0, so the keystream does too. The derived key is zeroized when
/// this function returns.
///
/// A wrong password is not detectable here: the format carries no
/// integrity check, so the result is simply garbage of the same length.
pub fn decrypt_bytes(data: &[u8], password: &LogPassword) -> Result<DecryptedLog, EndxError> {
    let parsed = split_log_file(data)?;

    let mut key = LogKey32::new([0u8; 32]);
    derive_log_key(password, &parsed.footer.salt, &mut key)?;

    let mut plaintext = parsed.payload;
    apply_keystream_at(key.expose_secret(), &mut plaintext, 0);

    Ok(DecryptedLog {
        plaintext,
        warnings: parsed.warnings,
    })
}

/// Read `path` fully and decrypt it.
pub fn decrypt_file<P: AsRef<Path>>(
    path: P,
    password: &LogPassword,
) -> Result<DecryptedLog, EndxError> {
    let data = std::fs::read(path.as_ref())?;
    decrypt_bytes(&data, password)
}
