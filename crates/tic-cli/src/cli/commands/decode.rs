//! `tic decode` – print datasets, frame ends and errors from a capture file.

use anyhow::Result;
use serde_json::json;
use std::path::Path;
use tic_core::capture::{self, DecodeSummary};
use tic_core::config::TicConfig;
use tic_core::frame::Event;

fn event_json(event: &Event) -> serde_json::Value {
    match event {
        Event::Dataset(ds) => json!({ "type": "dataset", "label": ds.label, "data": ds.data }),
        Event::EndOfFrame => json!({ "type": "end_of_frame" }),
        Event::Error(e) => json!({ "type": "error", "message": e.to_string() }),
    }
}

pub fn run_decode(path: &Path, cfg: &TicConfig, json: bool) -> Result<()> {
    let events = capture::decode_path(path, cfg)?;
    let mut summary = DecodeSummary::default();
    for event in &events {
        summary.record(event);
        if json {
            println!("{}", event_json(event));
            continue;
        }
        match event {
            Event::Dataset(ds) => println!("{:<8} {}", ds.label, ds.data),
            Event::EndOfFrame => println!("-- end of frame"),
            Event::Error(e) => println!("!! {}", e),
        }
    }
    tracing::info!(
        "decode {}: datasets={} frames={} errors={}",
        path.display(),
        summary.datasets,
        summary.frames,
        summary.errors
    );
    Ok(())
}
