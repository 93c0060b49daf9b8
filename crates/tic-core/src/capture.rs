//! Raw TIC capture files: bytes exactly as received on the serial line.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::config::TicConfig;
use crate::frame::{Decoder, Event};

/// Counts gathered while decoding a capture.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DecodeSummary {
    pub datasets: usize,
    pub frames: usize,
    pub errors: usize,
}

impl DecodeSummary {
    pub fn record(&mut self, event: &Event) {
        match event {
            Event::Dataset(_) => self.datasets += 1,
            Event::EndOfFrame => self.frames += 1,
            Event::Error(_) => self.errors += 1,
        }
    }
}

/// Decode a capture file with the limits and options from `cfg`.
pub fn decode_path(path: &Path, cfg: &TicConfig) -> Result<Vec<Event>> {
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    let mut decoder = Decoder::new(cfg.limits()).with_checksum_errors(cfg.emit_checksum_errors());
    let events = decoder.feed(&bytes);
    tracing::debug!(
        "decoded {} bytes from {} into {} events",
        bytes.len(),
        path.display(),
        events.len()
    );
    Ok(events)
}

/// Write raw frame bytes to `path`, replacing any existing file.
pub fn write_path(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).with_context(|| format!("write {}", path.display()))?;
    tracing::info!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}
