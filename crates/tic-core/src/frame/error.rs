//! Error types for TIC frame encoding and decoding.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FrameError {
    #[error("checksum mismatch for {label}: computed {expected:#04x}, received {received:#04x}")]
    ChecksumMismatch {
        label: String,
        expected: u8,
        received: u8,
    },
    #[error("label longer than {max} bytes")]
    LabelTooLong { max: usize },
    #[error("data longer than {max} bytes")]
    DataTooLong { max: usize },
    #[error("expected CR after checksum, found {found:#04x}")]
    MissingCarriageReturn { found: u8 },
    /// Encoder only: label must contain at least one character.
    #[error("empty label")]
    EmptyLabel,
    /// Encoder only: fields must be printable ASCII without spaces.
    #[error("invalid byte {byte:#04x} in {field}")]
    InvalidByte { field: &'static str, byte: u8 },
}
