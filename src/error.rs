//! Error types
//!
//! Only startup can fail: opening the window and reading settings.
//! The simulation itself has no fallible operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can abort startup.
#[derive(Error, Debug)]
pub enum Error {
    /// The graphics subsystem could not open a window.
    #[error("failed to initialize window: {0}")]
    WindowInit(String),

    /// A settings file could not be read.
    #[error("failed to read settings from {path}: {source}")]
    SettingsIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A settings file was not valid JSON for [`crate::Settings`].
    #[error("invalid settings in {path}: {source}")]
    SettingsParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for startup operations.
pub type Result<T> = std::result::Result<T, Error>;
