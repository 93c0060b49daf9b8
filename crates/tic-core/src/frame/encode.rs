//! Build datasets and frames ready to be written to a serial line or capture file.

use super::{Dataset, FrameError, Limits, CR, ETX, LF, SP, STX};
use crate::checksum;

fn check_printable(field: &'static str, value: &str) -> Result<(), FrameError> {
    match value.bytes().find(|b| !b.is_ascii_graphic()) {
        Some(byte) => Err(FrameError::InvalidByte { field, byte }),
        None => Ok(()),
    }
}

/// Encode one dataset as `LF label SP data SP checksum CR`.
pub fn encode_dataset(label: &str, data: &str, limits: &Limits) -> Result<Vec<u8>, FrameError> {
    if label.is_empty() {
        return Err(FrameError::EmptyLabel);
    }
    check_printable("label", label)?;
    if label.len() > limits.max_label_len {
        return Err(FrameError::LabelTooLong {
            max: limits.max_label_len,
        });
    }
    check_printable("data", data)?;
    if data.len() > limits.max_data_len {
        return Err(FrameError::DataTooLong {
            max: limits.max_data_len,
        });
    }

    let mut out = Vec::with_capacity(label.len() + data.len() + 5);
    out.push(LF);
    out.extend_from_slice(label.as_bytes());
    out.push(SP);
    out.extend_from_slice(data.as_bytes());
    let sum = checksum::checksum_byte(&out[1..]);
    out.push(SP);
    out.push(sum);
    out.push(CR);
    Ok(out)
}

/// Encode a full frame: `STX`, every dataset in order, `ETX`.
pub fn encode_frame(datasets: &[Dataset], limits: &Limits) -> Result<Vec<u8>, FrameError> {
    let mut out = vec![STX];
    for ds in datasets {
        out.extend(encode_dataset(&ds.label, &ds.data, limits)?);
    }
    out.push(ETX);
    Ok(out)
}
