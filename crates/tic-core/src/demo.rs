//! Demonstration: checksum of a fixed meter address dataset.

use crate::checksum::{self, ChecksumError};

/// Meter address dataset used by the demonstration.
pub const DEMO_IDENTIFIER: &str = "ADCO 999999999999";

/// Build the one-line demonstration message for `identifier`.
pub fn demo_message(identifier: &str) -> Result<String, ChecksumError> {
    let c = checksum::checksum_str(identifier)?;
    Ok(format!("Checksum for ADCO {} is: {}", identifier, c))
}
