//! src/crypto/kdf.rs

use hmac::Hmac;
use pbkdf2::pbkdf2;
use sha2::Sha256;

use secure_gate::{RevealSecret, RevealSecretMut};

use crate::aliases::{LogKey32, LogPassword};
use crate::consts::{PBKDF2_ITERATIONS, SALT_SIZE};
use crate::error::EndxError;

/// Derive the AES-256 file key directly into the caller's secure buffer.
///
/// PBKDF2-HMAC-SHA256 over the UTF-8 password bytes with the per-file salt
/// from the footer and the producer's fixed iteration count. Deterministic:
/// the same `(password, salt)` pair always yields the same key.
#[inline(always)]
pub fn derive_log_key(
    password: &LogPassword,
    salt: &[u8; SALT_SIZE],
    out_key: &mut LogKey32,
) -> Result<(), EndxError> {
    pbkdf2::<Hmac<Sha256>>(
        password.expose_secret().as_bytes(),
        salt,
        PBKDF2_ITERATIONS,
        out_key.expose_secret_mut(),
    )
    .map_err(|e| EndxError::Crypto(format!("PBKDF2 failed: {e}")))?;
    Ok(())
}
