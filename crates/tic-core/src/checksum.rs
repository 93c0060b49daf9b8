//! TIC dataset checksum: sum of bytes, low 6 bits, offset into printable ASCII.
//!
//! The result always lies in `0x20..=0x5F`, so it can be sent on the wire
//! next to the data it protects without clashing with control characters.

use thiserror::Error;

/// Mask keeping the low 6 bits of the running sum.
pub const CHECKSUM_MASK: u8 = 0x3F;
/// Offset added to the masked sum to land in printable ASCII.
pub const CHECKSUM_OFFSET: u8 = 0x20;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChecksumError {
    /// Text contained a character that has no single-byte ASCII encoding.
    #[error("character {ch:?} at index {index} is not 7-bit ASCII")]
    NonAscii { index: usize, ch: char },
}

/// Compute the checksum of `data` as a raw byte in `0x20..=0x5F`.
///
/// The accumulator is masked after every addition; since only the low
/// 6 bits survive, this equals summing in a wide integer and masking once.
pub fn checksum_byte(data: &[u8]) -> u8 {
    let masked = data
        .iter()
        .fold(0u8, |acc, &b| acc.wrapping_add(b) & CHECKSUM_MASK);
    masked + CHECKSUM_OFFSET
}

/// Compute the checksum of `data` as a printable character.
pub fn checksum(data: &[u8]) -> char {
    char::from(checksum_byte(data))
}

/// Encode `text` with one byte per character (7-bit ASCII).
pub fn encode_ascii(text: &str) -> Result<Vec<u8>, ChecksumError> {
    text.chars()
        .enumerate()
        .map(|(index, ch)| {
            if ch.is_ascii() {
                Ok(ch as u8)
            } else {
                Err(ChecksumError::NonAscii { index, ch })
            }
        })
        .collect()
}

/// Checksum of an ASCII string. Fails if `text` is not pure ASCII.
pub fn checksum_str(text: &str) -> Result<char, ChecksumError> {
    Ok(checksum(&encode_ascii(text)?))
}
