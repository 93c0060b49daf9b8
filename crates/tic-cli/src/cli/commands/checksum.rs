//! Checksum command: checksum character of an ASCII string.

use anyhow::{Context, Result};
use tic_core::checksum;

/// Compute and print the checksum of `text`.
pub fn run_checksum(text: &str) -> Result<()> {
    let c = checksum::checksum_str(text).with_context(|| format!("checksum {:?}", text))?;
    println!("{}", c);
    Ok(())
}
