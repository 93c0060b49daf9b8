//! TIC frame codec (historic mode).
//!
//! A frame is `STX` followed by datasets and closed by `ETX`. Each dataset is
//! `LF label SP data SP checksum CR`, where the checksum covers the label,
//! the first separator and the data.

mod decode;
mod encode;
mod error;

pub use decode::{Decoder, State};
pub use encode::{encode_dataset, encode_frame};
pub use error::FrameError;

pub const STX: u8 = 0x02;
pub const ETX: u8 = 0x03;
pub const LF: u8 = 0x0A;
pub const CR: u8 = 0x0D;
pub const SP: u8 = 0x20;

/// Field length limits applied when encoding and decoding datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_label_len: usize,
    pub max_data_len: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_label_len: 8,
            max_data_len: 12,
        }
    }
}

/// One validated `label value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    pub label: String,
    pub data: String,
}

impl Dataset {
    pub fn new(label: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            data: data.into(),
        }
    }
}

/// Output of the decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A dataset passed its checksum and was terminated by `CR`.
    Dataset(Dataset),
    /// `ETX` seen between datasets.
    EndOfFrame,
    /// The current dataset was dropped; the decoder waits for the next `STX`.
    Error(FrameError),
}
