//! Configuration system for the step engine.
//!
//! This module defines the structures used to parameterize an engine. It provides:
//! 1. **Defaults:** The fixed status strings and behaviour switches.
//! 2. **Structures:** `general` (tracing, register masking) and `display` (status messages).
//! 3. **Loading:** JSON parsing from a string or a file.
//!
//! Every field is optional in JSON; missing fields take the values in `defaults`.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Default configuration constants.
mod defaults {
    /// Message shown before the first step.
    pub const AWAITING_MESSAGE: &str = "Awaiting execution start...";

    /// Message shown once every step has been applied.
    pub const FINISHED_MESSAGE: &str = "Execution complete.";
}

/// Errors raised while loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// The JSON was malformed or had wrongly typed fields.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Root engine configuration.
///
/// # Examples
///
/// ```
/// use cyclesim_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_steps": true, "mask_register_writes": true },
///     "display": { "finished_message": "Done." }
/// }"#;
///
/// let config = Config::from_json_str(json).unwrap();
/// assert!(config.general.trace_steps);
/// assert!(config.general.mask_register_writes);
/// assert_eq!(config.display.finished_message, "Done.");
/// assert_eq!(config.display.awaiting_message, "Awaiting execution start...");
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Behaviour switches
    #[serde(default)]
    pub general: GeneralConfig,
    /// Status strings returned by `current_message`
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or mistyped fields.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if its contents are not a valid configuration.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

/// Behaviour switches.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Emit an `info` event for every applied step
    #[serde(default)]
    pub trace_steps: bool,

    /// Truncate register writes to the register's bit width instead of storing them as-is
    #[serde(default)]
    pub mask_register_writes: bool,
}

/// Status strings.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Returned by `current_message` before the first step
    #[serde(default = "DisplayConfig::default_awaiting")]
    pub awaiting_message: String,

    /// Returned by `current_message` once the trace has been fully replayed
    #[serde(default = "DisplayConfig::default_finished")]
    pub finished_message: String,
}

impl DisplayConfig {
    /// Returns the default pre-start message.
    fn default_awaiting() -> String {
        defaults::AWAITING_MESSAGE.to_owned()
    }

    /// Returns the default completion message.
    fn default_finished() -> String {
        defaults::FINISHED_MESSAGE.to_owned()
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            awaiting_message: Self::default_awaiting(),
            finished_message: Self::default_finished(),
        }
    }
}
