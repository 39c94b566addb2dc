//! Game configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Deserialize;
use std::num::NonZeroU8;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Largest supported disk count; keeps every size label two characters wide.
pub const MAX_DISKS: u8 = 99;

/// Disk count used when neither the command line nor a file sets one.
pub const DEFAULT_DISKS: NonZeroU8 = NonZeroU8::new(5).expect("default disk count is non-zero");

/// Configuration for one run of the puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Deserialize)]
pub struct HanoiConfig {
    /// Total number of disks.
    #[serde(default = "default_disks")]
    disks: NonZeroU8,
}

fn default_disks() -> NonZeroU8 {
    DEFAULT_DISKS
}

impl HanoiConfig {
    /// Creates a configuration, rejecting disk counts outside `1..=MAX_DISKS`.
    #[instrument]
    pub fn new(disks: u8) -> Result<Self, ConfigError> {
        let disks = NonZeroU8::new(disks).ok_or_else(|| out_of_range(disks))?;
        let config = Self { disks };
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(disks = config.disks.get(), "Config loaded successfully");
        Ok(config)
    }

    /// Resolves the configuration for a run.
    ///
    /// A disk count given on the command line wins over the config file,
    /// and a missing config file falls back to defaults.
    #[instrument(skip(path))]
    pub fn resolve(disks: Option<u8>, path: Option<&Path>) -> Result<Self, ConfigError> {
        let from_file = match path {
            Some(path) if path.exists() => Some(Self::from_file(path)?),
            Some(path) => {
                debug!(path = %path.display(), "Config file not found, using defaults");
                None
            }
            None => None,
        };

        match (disks, from_file) {
            (Some(disks), _) => Self::new(disks),
            (None, Some(config)) => Ok(config),
            (None, None) => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.disks.get() <= MAX_DISKS {
            Ok(())
        } else {
            Err(out_of_range(self.disks.get()))
        }
    }
}

#[track_caller]
fn out_of_range(disks: u8) -> ConfigError {
    ConfigError::new(format!(
        "Disk count must be between 1 and {}, got {}",
        MAX_DISKS, disks
    ))
}

impl Default for HanoiConfig {
    fn default() -> Self {
        Self {
            disks: DEFAULT_DISKS,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
