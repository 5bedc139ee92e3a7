//! Configuration file support.
//!
//! A small TOML file mirrors the CLI flags so a greeting can be set up once
//! and replayed: countdown length, rotation, artwork sources. CLI flags
//! always win over file values.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

use crate::{LovewaveError, Result};

/// Values read from `config.toml`. Every field has a default, so a missing
/// or partial file is fine.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Countdown length in seconds.
    pub seconds: u64,

    /// Rotate through artworks automatically.
    pub rotate: bool,

    /// Keep wave/bob/sparkle running while a wipe transition is active.
    pub effects_during_wipes: bool,

    /// Single artwork file or URL.
    pub ascii_src: Option<String>,

    /// Ordered list of artwork files or URLs.
    pub ascii_list: Vec<String>,

    /// Directory (or base URL) holding a `manifest.json` listing artworks.
    pub ascii_dir: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seconds: 60,
            rotate: true,
            effects_during_wipes: true,
            ascii_src: None,
            ascii_list: Vec::new(),
            ascii_dir: None,
        }
    }
}

impl Config {
    /// Standard config file path: ~/.config/lovewave/config.toml
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("lovewave")
            .join("config.toml")
    }

    /// Load from `path`, or from the standard location when `None`.
    ///
    /// A missing file yields the defaults; a malformed file is an error so a
    /// typo never silently drops the user's settings.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::default_path);
        if !path.exists() {
            if path != Self::default_path() {
                warn!(path = %path.display(), "config file not found, using defaults");
            }
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(&path)?;
        let config = toml::from_str(&text)
            .map_err(|e| LovewaveError::Config(format!("{}: {}", path.display(), e)))?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }
}
