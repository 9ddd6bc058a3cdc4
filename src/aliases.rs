//! # Secure Type Aliases
//!
//! Secret-holding wrappers built on [`secure-gate`](https://docs.rs/secure-gate):
//! zeroized on drop and only readable through explicit `.expose_secret()` /
//! `.expose_secret_mut()` calls, so neither the password nor the derived
//! key can leak through `Debug` output or linger after a decryption pass.

use secure_gate::dynamic_alias;
use secure_gate::fixed_alias;

dynamic_alias!(pub LogPassword, String); // user password, from flag or prompt
fixed_alias!(pub LogKey32, 32); // derived AES-256 file key
