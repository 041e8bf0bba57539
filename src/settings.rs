//! Game settings and preferences
//!
//! Read once at startup from a JSON file next to the binary's working directory.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Runtime preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed RNG seed for reproducible wall layouts (None = seed from the clock)
    pub seed: Option<u64>,
    /// Print telemetry lines to stdout
    pub telemetry: bool,
    /// Window title
    pub window_title: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            telemetry: true,
            window_title: "Gap Dash".to_string(),
        }
    }
}

impl Settings {
    /// Settings file looked up when no path is given
    pub const DEFAULT_PATH: &'static str = "gap_dash.json";

    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Load settings from an explicit path. Any failure is an error.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| Error::SettingsIo {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json).map_err(|source| Error::SettingsParse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings from [`Self::DEFAULT_PATH`], falling back to defaults
    /// when the file is missing or malformed.
    pub fn load() -> Self {
        Self::load_or_default(Self::DEFAULT_PATH)
    }

    fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("Using default settings");
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }
}
