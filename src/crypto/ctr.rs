// src/crypto/ctr.rs

//! Offset-aware AES-256-CTR.
//!
//! The producer addresses the keystream by absolute file position: block
//! `n` of the keystream is the block cipher applied to counter value `n`,
//! with the counter in the low 8 bytes of the 16-byte counter block,
//! big-endian, and the high 8 bytes always zero. Any byte range of a file
//! can therefore be processed independently given its offset: the producer
//! appends from arbitrary positions and readers may start mid-file.
//! Encryption and decryption are the same XOR pass.
//!
//! No padding, no authentication: a wrong key, salt, or offset yields
//! silent garbage, not an error.

use aes::Aes256;
use ctr::cipher::{KeyIvInit, StreamCipher};
use ctr::Ctr128BE;

use crate::consts::{BLOCK_SIZE, KEY_SIZE};

type Aes256Ctr = Ctr128BE<Aes256>;

/// Build a cipher whose keystream starts at the given block number.
fn cipher_at_block(key: &[u8; KEY_SIZE], block_number: u64) -> Aes256Ctr {
    let mut iv = [0u8; BLOCK_SIZE];
    iv[8..].copy_from_slice(&block_number.to_be_bytes());
    Aes256Ctr::new(key.into(), &iv.into())
}

/// XOR `data` in place with the keystream starting at absolute
/// `byte_offset`.
///
/// When the offset is not block-aligned, the leading `byte_offset % 16`
/// keystream bytes are generated and discarded first so that `data[0]`
/// lines up with the right keystream byte.
pub fn apply_keystream_at(key: &[u8; KEY_SIZE], data: &mut [u8], byte_offset: u64) {
    let mut cipher = cipher_at_block(key, byte_offset / BLOCK_SIZE as u64);

    let block_offset = (byte_offset % BLOCK_SIZE as u64) as usize;
    if block_offset > 0 {
        let mut discard = [0u8; BLOCK_SIZE];
        cipher.apply_keystream(&mut discard[..block_offset]);
    }

    cipher.apply_keystream(data);
}

/// Raw keystream bytes for `[byte_offset, byte_offset + len)`.
///
/// Defined as the transform of a zero buffer. Exposed so callers can XOR
/// against data they cannot hold mutably, without tying them to the cipher
/// backend.
pub fn keystream_at(key: &[u8; KEY_SIZE], byte_offset: u64, len: usize) -> Vec<u8> {
    let mut stream = vec![0u8; len];
    apply_keystream_at(key, &mut stream, byte_offset);
    stream
}
