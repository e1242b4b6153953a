//! Configuration parsing and validation.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use crate::{AppError, Result};

/// Which employees may be picked as the manager of a new employee.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ManagerCandidates {
    /// Only employees that have no manager themselves.
    #[default]
    TopLevel,
    /// Every existing employee.
    Any,
}

/// Storage location of the `SQLite` database.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct DatabaseConfig {
    /// Database file path.
    #[serde(default = "default_db_path")]
    pub path: PathBuf,
    /// Create the file (and its parent directory) when it does not exist.
    #[serde(default = "default_true")]
    pub create_if_missing: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            create_if_missing: true,
        }
    }
}

fn default_db_path() -> PathBuf {
    PathBuf::from("employee_tracker.db")
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".into()
}

/// Top-level configuration parsed from `employee-tracker.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct TrackerConfig {
    /// Default tracing filter, used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Manager candidate policy for Add Employee.
    #[serde(default)]
    pub manager_candidates: ManagerCandidates,
    /// Database settings.
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            manager_candidates: ManagerCandidates::default(),
            database: DatabaseConfig::default(),
        }
    }
}

impl TrackerConfig {
    /// Load and validate configuration from a TOML file path.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the file cannot be read or contains
    /// invalid TOML, or if validation fails.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|err| AppError::Config(format!("failed to read config: {err}")))?;
        Self::from_toml_str(&raw)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if parsing or validation fails.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Path of the database file.
    #[must_use]
    pub fn db_path(&self) -> &Path {
        &self.database.path
    }

    /// Check the loaded values. Called by the loaders, and again by the
    /// binary after command-line overrides are applied.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` for an empty database path or an
    /// unparsable `log_level`.
    pub fn validate(&self) -> Result<()> {
        if self.database.path.as_os_str().is_empty() {
            return Err(AppError::Config("database.path must not be empty".into()));
        }

        EnvFilter::try_new(&self.log_level)
            .map_err(|err| AppError::Config(format!("log_level invalid: {err}")))?;

        Ok(())
    }
}
