//! Logging init. Nothing is ever written to stdout; the CLI owns stdout.
//!
//! Commands that touch files log to `~/.local/state/tic/tic.log`. Pure
//! computations (demo, checksum) only log warnings to stderr and leave no
//! trace on disk.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Where log records go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink {
    /// Warnings and errors on stderr, nothing persisted.
    Stderr,
    /// Append to the log file under the XDG state dir.
    StateFile,
}

impl LogSink {
    fn default_filter(self) -> &'static str {
        match self {
            LogSink::Stderr => "warn",
            LogSink::StateFile => "info,tic=debug",
        }
    }
}

/// Per-record writer: the shared log file, or stderr when the handle can't be cloned.
enum LogWriter {
    File(File),
    Stderr(io::Stderr),
}

impl io::Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            LogWriter::File(f) => f.write(buf),
            LogWriter::Stderr(e) => e.lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            LogWriter::File(f) => f.flush(),
            LogWriter::Stderr(e) => e.lock().flush(),
        }
    }
}

struct SharedLogFile(File);

impl<'a> MakeWriter<'a> for SharedLogFile {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        match self.0.try_clone() {
            Ok(f) => LogWriter::File(f),
            Err(_) => LogWriter::Stderr(io::stderr()),
        }
    }
}

/// Create `dir` if needed and open `tic.log` inside it for appending.
pub fn open_log_file(dir: &Path) -> Result<(File, PathBuf)> {
    fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    let path = dir.join("tic.log");
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open {}", path.display()))?;
    Ok((file, path))
}

fn state_dir() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("tic")?;
    Ok(xdg_dirs.get_state_home().join("tic"))
}

/// Install the global subscriber for `sink`. `RUST_LOG` overrides the default filter.
///
/// Fails if the state dir is unwritable or a subscriber is already set; callers
/// can then fall back to [`LogSink::Stderr`].
pub fn init(sink: LogSink) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(sink.default_filter()));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false);

    match sink {
        LogSink::Stderr => builder
            .with_writer(io::stderr)
            .try_init()
            .map_err(|e| anyhow::anyhow!("{e}")),
        LogSink::StateFile => {
            let (file, path) = open_log_file(&state_dir()?)?;
            builder
                .with_writer(BoxMakeWriter::new(SharedLogFile(file)))
                .try_init()
                .map_err(|e| anyhow::anyhow!("{e}"))?;
            tracing::debug!("tic logging initialized at {}", path.display());
            Ok(())
        }
    }
}
