//! Configuration for SocialKV
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{Result, SocialError};

/// Main configuration for a SocialKV engine
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // File Configuration
    // -------------------------------------------------------------------------
    /// Directory holding both CSV files
    /// Internal structure:
    ///   {data_dir}/
    ///     ├── accounts.csv          (user accounts)
    ///     └── status_updates.csv    (status updates)
    pub data_dir: PathBuf,

    /// File name of the user accounts CSV (relative to data_dir)
    pub accounts_file: String,

    /// File name of the status updates CSV (relative to data_dir)
    pub status_file: String,

    // -------------------------------------------------------------------------
    // Behaviour
    // -------------------------------------------------------------------------
    /// Save both collections after a mutating CLI command
    pub autosave: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            accounts_file: "accounts.csv".to_string(),
            status_file: "status_updates.csv".to_string(),
            autosave: true,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Full path of the user accounts file
    pub fn accounts_path(&self) -> PathBuf {
        self.data_dir.join(&self.accounts_file)
    }

    /// Full path of the status updates file
    pub fn status_path(&self) -> PathBuf {
        self.data_dir.join(&self.status_file)
    }

    /// Reject configurations that cannot name both files
    pub fn validate(&self) -> Result<()> {
        if self.accounts_file.trim().is_empty() {
            return Err(SocialError::Config("accounts file name is empty".to_string()));
        }
        if self.status_file.trim().is_empty() {
            return Err(SocialError::Config("status file name is empty".to_string()));
        }
        if self.accounts_path() == self.status_path() {
            return Err(SocialError::Config(format!(
                "accounts and status files must differ (both {})",
                self.accounts_path().display()
            )));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set the accounts file name
    pub fn accounts_file(mut self, name: impl Into<String>) -> Self {
        self.config.accounts_file = name.into();
        self
    }

    /// Set the status updates file name
    pub fn status_file(mut self, name: impl Into<String>) -> Self {
        self.config.status_file = name.into();
        self
    }

    /// Enable or disable saving after mutations
    pub fn autosave(mut self, enabled: bool) -> Self {
        self.config.autosave = enabled;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
