//! `tic encode` – build one frame from LABEL=DATA arguments.

use anyhow::{bail, Result};
use std::path::Path;
use tic_core::capture;
use tic_core::config::TicConfig;
use tic_core::frame::{encode_frame, Dataset};

/// Split `LABEL=DATA` at the first `=`.
pub fn parse_dataset(arg: &str) -> Result<Dataset> {
    match arg.split_once('=') {
        Some((label, data)) => Ok(Dataset::new(label, data)),
        None => bail!("expected LABEL=DATA, got {:?}", arg),
    }
}

pub fn run_encode(args: &[String], out: &Path, cfg: &TicConfig) -> Result<()> {
    let datasets = args
        .iter()
        .map(|a| parse_dataset(a))
        .collect::<Result<Vec<_>>>()?;
    let frame = encode_frame(&datasets, &cfg.limits())?;
    capture::write_path(out, &frame)?;
    println!("wrote {} datasets ({} bytes) to {}", datasets.len(), frame.len(), out.display());
    Ok(())
}
