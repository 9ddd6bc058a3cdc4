// src/footer.rs

//! Trailing-footer parsing for Endx log containers.
//!
//! A producer finalizes a log file by appending a fixed-size footer after
//! the encrypted payload:
//!
//! ```text
//! [ payload ][ salt:16 ][ magic:4 ][ padding:4 ][ file size:8 ][ used size:8 ]
//! ```
//!
//! All multi-byte fields are little-endian. Early producers wrote a shorter
//! 28-byte footer with 32-bit size fields and no padding word; both layouts
//! are recognized here.
//!
//! Only the salt position is load-bearing. The magic and size fields are
//! advisory: a crash can leave them stale, so mismatches surface as
//! [`FooterWarning`]s and parsing continues.

use thiserror::Error;

use crate::consts::{FOOTER_MAGIC, FOOTER_SIZE, LEGACY_FOOTER_SIZE, SALT_SIZE};
use crate::error::EndxError;

/// Advisory footer anomaly. Collected during parsing and handed to the
/// caller for display; never treated as fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FooterWarning {
    #[error("footer magic mismatch (expected 0x{expected:08X}, found 0x{actual:08X})")]
    MagicMismatch { expected: u32, actual: u32 },

    #[error("footer declares a file size of {declared} bytes but the file is {actual} bytes")]
    DeclaredSizeMismatch { declared: u64, actual: u64 },
}

/// Decoded footer fields, normalized to the modern field widths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFileFooter {
    /// Per-file random salt fed into key derivation.
    pub salt: [u8; SALT_SIZE],
    /// Layout marker; expected to be [`FOOTER_MAGIC`].
    pub magic: u32,
    /// Reserved field, carried through round-trips but unused. Always zero
    /// for legacy footers, which have no padding word.
    pub padding: u32,
    /// Total file size as recorded by the producer at finalize time.
    pub declared_file_size: u64,
    /// Meaningful payload bytes. The producer pre-allocates its mmap
    /// region, so the payload may extend past what was actually written;
    /// zero means the field was never finalized.
    pub used_size: u64,
}

/// Copy a fixed-size span out of `bytes` starting at `at`.
fn span<const N: usize>(bytes: &[u8], at: usize) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes[at..at + N]);
    out
}

impl LogFileFooter {
    /// Decode the modern 40-byte layout.
    pub fn parse(bytes: &[u8; FOOTER_SIZE]) -> Self {
        Self {
            salt: span(bytes, 0),
            magic: u32::from_le_bytes(span(bytes, 16)),
            padding: u32::from_le_bytes(span(bytes, 20)),
            declared_file_size: u64::from_le_bytes(span(bytes, 24)),
            used_size: u64::from_le_bytes(span(bytes, 32)),
        }
    }

    /// Decode the legacy 28-byte layout written by early producers.
    /// Size fields widen from u32 to u64.
    pub fn parse_legacy(bytes: &[u8; LEGACY_FOOTER_SIZE]) -> Self {
        Self {
            salt: span(bytes, 0),
            magic: u32::from_le_bytes(span(bytes, 16)),
            padding: 0,
            declared_file_size: u64::from(u32::from_le_bytes(span(bytes, 20))),
            used_size: u64::from(u32::from_le_bytes(span(bytes, 24))),
        }
    }

    /// Encode into the modern 40-byte layout. Exact inverse of [`parse`],
    /// field for field.
    ///
    /// [`parse`]: Self::parse
    pub fn to_bytes(&self) -> [u8; FOOTER_SIZE] {
        let mut out = [0u8; FOOTER_SIZE];
        out[..16].copy_from_slice(&self.salt);
        out[16..20].copy_from_slice(&self.magic.to_le_bytes());
        out[20..24].copy_from_slice(&self.padding.to_le_bytes());
        out[24..32].copy_from_slice(&self.declared_file_size.to_le_bytes());
        out[32..40].copy_from_slice(&self.used_size.to_le_bytes());
        out
    }

    /// Whether the magic field carries the expected `"Endx"` constant.
    pub fn magic_matches(&self) -> bool {
        self.magic == FOOTER_MAGIC
    }
}

/// A log file split into its payload and footer, together with any
/// advisory anomalies observed along the way.
#[derive(Debug, Clone)]
pub struct ParsedLogFile {
    pub footer: LogFileFooter,
    /// Encrypted payload, already truncated to `used_size` where that
    /// applies.
    pub payload: Vec<u8>,
    pub warnings: Vec<FooterWarning>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FooterLayout {
    Modern,
    Legacy,
}

impl FooterLayout {
    fn size(self) -> usize {
        match self {
            FooterLayout::Modern => FOOTER_SIZE,
            FooterLayout::Legacy => LEGACY_FOOTER_SIZE,
        }
    }
}

/// Probe the footer magic to decide which layout the file carries.
///
/// The modern position wins outright; the legacy layout is selected only
/// on an exact magic match there, so a modern file with a corrupted magic
/// keeps the modern interpretation (plus a warning) instead of being
/// misread through the legacy lens.
fn sniff_layout(data: &[u8]) -> FooterLayout {
    let len = data.len();
    if len >= FOOTER_SIZE {
        let magic = u32::from_le_bytes(span(data, len - FOOTER_SIZE + 16));
        if magic == FOOTER_MAGIC {
            return FooterLayout::Modern;
        }
    }
    if len >= LEGACY_FOOTER_SIZE {
        let magic = u32::from_le_bytes(span(data, len - LEGACY_FOOTER_SIZE + 16));
        if magic == FOOTER_MAGIC {
            return FooterLayout::Legacy;
        }
    }
    FooterLayout::Modern
}

/// Split raw file content into payload and footer.
///
/// Fails only with [`EndxError::FileTooSmall`]; every other anomaly is
/// reported through the returned warning list. If the footer's `used_size`
/// lies strictly inside `(0, payload length)`, the payload is truncated to
/// it; the tail is pre-allocated scratch the producer never wrote.
pub fn split_log_file(data: &[u8]) -> Result<ParsedLogFile, EndxError> {
    let layout = sniff_layout(data);
    if data.len() < layout.size() {
        return Err(EndxError::FileTooSmall {
            len: data.len() as u64,
        });
    }

    let payload_len = data.len() - layout.size();
    let footer = match layout {
        FooterLayout::Modern => LogFileFooter::parse(&span(data, payload_len)),
        FooterLayout::Legacy => LogFileFooter::parse_legacy(&span(data, payload_len)),
    };

    let mut warnings = Vec::new();
    if !footer.magic_matches() {
        warnings.push(FooterWarning::MagicMismatch {
            expected: FOOTER_MAGIC,
            actual: footer.magic,
        });
    }
    if footer.declared_file_size != data.len() as u64 {
        warnings.push(FooterWarning::DeclaredSizeMismatch {
            declared: footer.declared_file_size,
            actual: data.len() as u64,
        });
    }

    let mut payload = data[..payload_len].to_vec();
    if footer.used_size > 0 && footer.used_size < payload.len() as u64 {
        payload.truncate(footer.used_size as usize);
    }

    Ok(ParsedLogFile {
        footer,
        payload,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magic_spells_endx() {
        assert_eq!(&FOOTER_MAGIC.to_be_bytes(), b"Endx");
    }

    #[test]
    fn modern_layout_field_positions() {
        let mut bytes = [0u8; FOOTER_SIZE];
        bytes[..16].copy_from_slice(&[0xAA; 16]);
        bytes[16..20].copy_from_slice(&FOOTER_MAGIC.to_le_bytes());
        bytes[20..24].copy_from_slice(&7u32.to_le_bytes());
        bytes[24..32].copy_from_slice(&1234u64.to_le_bytes());
        bytes[32..40].copy_from_slice(&999u64.to_le_bytes());

        let footer = LogFileFooter::parse(&bytes);
        assert_eq!(footer.salt, [0xAA; 16]);
        assert!(footer.magic_matches());
        assert_eq!(footer.padding, 7);
        assert_eq!(footer.declared_file_size, 1234);
        assert_eq!(footer.used_size, 999);
        assert_eq!(footer.to_bytes(), bytes);
    }

    #[test]
    fn legacy_layout_widens_sizes() {
        let mut bytes = [0u8; LEGACY_FOOTER_SIZE];
        bytes[..16].copy_from_slice(&[0xBB; 16]);
        bytes[16..20].copy_from_slice(&FOOTER_MAGIC.to_le_bytes());
        bytes[20..24].copy_from_slice(&500u32.to_le_bytes());
        bytes[24..28].copy_from_slice(&400u32.to_le_bytes());

        let footer = LogFileFooter::parse_legacy(&bytes);
        assert_eq!(footer.salt, [0xBB; 16]);
        assert!(footer.magic_matches());
        assert_eq!(footer.padding, 0);
        assert_eq!(footer.declared_file_size, 500);
        assert_eq!(footer.used_size, 400);
    }

    #[test]
    fn sniff_prefers_modern_position() {
        let mut footer = LogFileFooter {
            salt: [0x01; 16],
            magic: FOOTER_MAGIC,
            padding: 0,
            declared_file_size: (64 + FOOTER_SIZE) as u64,
            used_size: 64,
        };
        let mut data = vec![0u8; 64];
        data.extend_from_slice(&footer.to_bytes());
        assert_eq!(sniff_layout(&data), FooterLayout::Modern);

        // Corrupt the modern magic: layout still resolves as modern because
        // nothing matches at the legacy position either.
        footer.magic = 0xDEAD_BEEF;
        let mut data = vec![0u8; 64];
        data.extend_from_slice(&footer.to_bytes());
        assert_eq!(sniff_layout(&data), FooterLayout::Modern);
    }
}
