//! Terminal presentation configuration.
//!
//! Defaults suit a laptop screen; a JSON file pointed at by
//! `ORDER_TERMINAL_CONFIG` overrides them, e.g.:
//!
//! ```json
//! { "title": "Front Counter", "scale": 3 }
//! ```

use std::fs;
use std::path::Path;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

/// Settings for the simulator window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Window title.
    pub title: String,
    /// Integer upscaling factor (1 = native pixels).
    pub scale: u32,
    /// Delay between frames in milliseconds.
    pub frame_ms: u64,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            title: "Order Terminal".to_owned(),
            scale: 2,
            frame_ms: 33,
        }
    }
}

impl TerminalConfig {
    /// Load and validate a JSON config file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("parsing config {}", path.display()))?;
        anyhow::ensure!(config.scale >= 1, "scale must be at least 1");
        anyhow::ensure!(config.frame_ms >= 1, "frame_ms must be at least 1");
        Ok(config)
    }

    /// The file named by `ORDER_TERMINAL_CONFIG`, or defaults when unset.
    pub fn from_env() -> anyhow::Result<Self> {
        match std::env::var_os("ORDER_TERMINAL_CONFIG") {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }
}
