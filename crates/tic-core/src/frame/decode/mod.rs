//! Byte-at-a-time TIC frame decoder.
//!
//! Input bytes are masked to 7 bits. Any framing or checksum error drops the
//! dataset in progress and puts the decoder back in [`State::WaitFrame`].

use super::{Dataset, Event, FrameError, Limits, CR, ETX, LF, SP, STX};
use crate::checksum;

/// Decoder position within the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Waiting for `STX`.
    WaitFrame,
    /// Between datasets: waiting for `LF` or `ETX`.
    WaitDataset,
    Label,
    Data,
    Checksum,
    /// Checksum accepted, waiting for `CR`.
    EndOfDataset,
}

#[derive(Debug)]
pub struct Decoder {
    limits: Limits,
    emit_checksum_errors: bool,
    state: State,
    label: Vec<u8>,
    data: Vec<u8>,
}

impl Decoder {
    pub fn new(limits: Limits) -> Self {
        Self {
            limits,
            emit_checksum_errors: true,
            state: State::WaitFrame,
            label: Vec::new(),
            data: Vec::new(),
        }
    }

    /// When disabled, checksum mismatches are logged but not returned as events.
    pub fn with_checksum_errors(mut self, emit: bool) -> Self {
        self.emit_checksum_errors = emit;
        self
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Drop any partial dataset and wait for the next frame.
    pub fn reset(&mut self) {
        self.state = State::WaitFrame;
        self.label.clear();
        self.data.clear();
    }

    /// Decode every byte of `buf`, collecting the events produced.
    pub fn feed(&mut self, buf: &[u8]) -> Vec<Event> {
        buf.iter().filter_map(|&b| self.push(b)).collect()
    }

    /// Advance the state machine by one byte.
    pub fn push(&mut self, byte: u8) -> Option<Event> {
        let chr = byte & 0x7F;

        match self.state {
            State::WaitFrame => {
                if chr == STX {
                    self.state = State::WaitDataset;
                }
                None
            }
            State::WaitDataset => {
                if chr == LF {
                    self.label.clear();
                    self.data.clear();
                    self.state = State::Label;
                    None
                } else if chr == ETX {
                    self.state = State::WaitFrame;
                    Some(Event::EndOfFrame)
                } else {
                    None
                }
            }
            State::Label => {
                if chr == SP {
                    self.state = State::Data;
                    None
                } else if self.label.len() < self.limits.max_label_len {
                    self.label.push(chr);
                    None
                } else {
                    self.fail(FrameError::LabelTooLong {
                        max: self.limits.max_label_len,
                    })
                }
            }
            State::Data => {
                if chr == SP {
                    self.state = State::Checksum;
                    None
                } else if self.data.len() < self.limits.max_data_len {
                    self.data.push(chr);
                    None
                } else {
                    self.fail(FrameError::DataTooLong {
                        max: self.limits.max_data_len,
                    })
                }
            }
            State::Checksum => {
                let expected = self.expected_checksum();
                if expected == chr {
                    self.state = State::EndOfDataset;
                    return None;
                }
                let err = FrameError::ChecksumMismatch {
                    label: String::from_utf8_lossy(&self.label).into_owned(),
                    expected,
                    received: chr,
                };
                if self.emit_checksum_errors {
                    self.fail(err)
                } else {
                    tracing::warn!("{}", err);
                    self.reset();
                    None
                }
            }
            State::EndOfDataset => {
                if chr == CR {
                    self.state = State::WaitDataset;
                    Some(Event::Dataset(Dataset {
                        label: String::from_utf8_lossy(&self.label).into_owned(),
                        data: String::from_utf8_lossy(&self.data).into_owned(),
                    }))
                } else {
                    self.fail(FrameError::MissingCarriageReturn { found: chr })
                }
            }
        }
    }

    fn expected_checksum(&self) -> u8 {
        let mut covered = Vec::with_capacity(self.label.len() + 1 + self.data.len());
        covered.extend_from_slice(&self.label);
        covered.push(SP);
        covered.extend_from_slice(&self.data);
        checksum::checksum_byte(&covered)
    }

    fn fail(&mut self, err: FrameError) -> Option<Event> {
        tracing::warn!("{}", err);
        self.reset();
        Some(Event::Error(err))
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new(Limits::default())
    }
}

#[cfg(test)]
mod tests;
