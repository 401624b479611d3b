//! Application configuration.

use std::path::PathBuf;

/// Environment variable that overrides the dataset path.
pub const DATASET_ENV: &str = "TRAIN_DATASET";

/// Dataset file used when nothing else is configured.
pub const DEFAULT_DATASET_PATH: &str = "data.json";

/// Configuration for the train finder binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Path to the JSON dataset file.
    pub dataset_path: PathBuf,
}

impl AppConfig {
    /// Create a new configuration with the given dataset path.
    pub fn new(dataset_path: impl Into<PathBuf>) -> Self {
        Self {
            dataset_path: dataset_path.into(),
        }
    }

    /// Build the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// Unset or empty variables fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(DATASET_ENV) {
            Some(path) if !path.is_empty() => Self::new(path),
            _ => Self::default(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATASET_PATH)
    }
}
