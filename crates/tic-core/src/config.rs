use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::frame::Limits;

/// Decoder behaviour (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodeConfig {
    /// Report datasets whose checksum does not match as errors (otherwise they are only logged).
    pub emit_checksum_errors: bool,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            emit_checksum_errors: true,
        }
    }
}

/// Upper bound for both field limits. Real meters stay far below it.
pub const MAX_FIELD_LEN: usize = 256;

/// Global configuration loaded from `~/.config/tic/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicConfig {
    /// Longest accepted dataset label, in bytes.
    pub max_label_len: usize,
    /// Longest accepted dataset value, in bytes.
    pub max_data_len: usize,
    /// Optional decoder section; if missing, built-in defaults are used.
    #[serde(default)]
    pub decode: Option<DecodeConfig>,
}

impl Default for TicConfig {
    fn default() -> Self {
        Self {
            max_label_len: 8,
            max_data_len: 12,
            decode: None,
        }
    }
}

impl TicConfig {
    pub fn limits(&self) -> Limits {
        Limits {
            max_label_len: self.max_label_len,
            max_data_len: self.max_data_len,
        }
    }

    /// Reject field limits of zero or above [`MAX_FIELD_LEN`].
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("max_label_len", self.max_label_len),
            ("max_data_len", self.max_data_len),
        ] {
            if value == 0 || value > MAX_FIELD_LEN {
                bail!("{} = {} out of range 1..={}", name, value, MAX_FIELD_LEN);
            }
        }
        Ok(())
    }

    pub fn emit_checksum_errors(&self) -> bool {
        self.decode.as_ref().map_or(true, |d| d.emit_checksum_errors)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("tic")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<TicConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] but at an explicit path (tests, custom locations).
pub fn load_or_init_at(path: &Path) -> Result<TicConfig> {
    if !path.exists() {
        let default_cfg = TicConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: TicConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
