//! CLI for the TIC checksum toolkit.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tic_core::config;
use tic_core::logging::{self, LogSink};

use commands::{run_checksum, run_decode, run_demo, run_encode};

/// Top-level CLI. Without a subcommand, runs the demonstration.
#[derive(Debug, Parser)]
#[command(name = "tic")]
#[command(about = "TIC: Teleinfo checksum and frame codec", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the checksum of the demonstration meter address dataset.
    Demo,

    /// Print the checksum character of an ASCII string.
    Checksum {
        /// Text to checksum (e.g. "ADCO 999999999999").
        text: String,
    },

    /// Decode a raw TIC capture file and print its datasets.
    Decode {
        /// Path to the capture file.
        path: PathBuf,
        /// Print one JSON object per event instead of plain text.
        #[arg(long)]
        json: bool,
    },

    /// Encode datasets into a single frame and write it to a file.
    Encode {
        /// Datasets as LABEL=DATA (e.g. ADCO=999999999999).
        #[arg(required = true, value_name = "LABEL=DATA")]
        datasets: Vec<String>,
        /// Output file for the raw frame bytes.
        #[arg(long, value_name = "PATH")]
        out: PathBuf,
    },
}

impl CliCommand {
    /// Commands that read or write files log to the state dir; the rest stay off disk.
    pub fn log_sink(&self) -> LogSink {
        match self {
            CliCommand::Demo | CliCommand::Checksum { .. } => LogSink::Stderr,
            CliCommand::Decode { .. } | CliCommand::Encode { .. } => LogSink::StateFile,
        }
    }
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let command = cli.command.unwrap_or(CliCommand::Demo);

        let sink = command.log_sink();
        if logging::init(sink).is_err() && sink != LogSink::Stderr {
            let _ = logging::init(LogSink::Stderr);
        }

        match command {
            CliCommand::Demo => run_demo()?,
            CliCommand::Checksum { text } => run_checksum(&text)?,
            CliCommand::Decode { path, json } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_decode(&path, &cfg, json)?;
            }
            CliCommand::Encode { datasets, out } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_encode(&datasets, &out, &cfg)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
