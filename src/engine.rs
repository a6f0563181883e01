//! Engine Module
//!
//! Orchestration layer that owns both collections.
//!
//! ## Responsibilities
//! - Route add/update/delete/search to the right collection
//! - Load and save the CSV files, turning errors into `false` plus a log line
//! - Resolve the configured file locations
//!
//! Front ends (the CLI) call into the engine; the collections never call out.

use std::path::Path;

use crate::collection::{StatusCollection, UserCollection};
use crate::config::Config;
use crate::csv;
use crate::error::Result;
use crate::record::{User, UserStatus};

/// Create an empty user collection
pub fn init_user_collection() -> UserCollection {
    UserCollection::new()
}

/// Create an empty status collection
pub fn init_status_collection() -> StatusCollection {
    StatusCollection::new()
}

/// Owns the user and status collections for one session
#[derive(Debug, Default)]
pub struct Engine {
    config: Config,
    users: UserCollection,
    statuses: StatusCollection,
}

impl Engine {
    /// Create an engine with empty collections
    pub fn new(config: Config) -> Self {
        Self {
            config,
            users: init_user_collection(),
            statuses: init_status_collection(),
        }
    }

    /// Create an engine and load whichever configured files exist
    ///
    /// Missing files mean empty collections; a present but invalid file is an
    /// error.
    pub fn open(config: Config) -> Result<Self> {
        config.validate()?;
        let mut engine = Self::new(config);

        let accounts = engine.config.accounts_path();
        if accounts.exists() {
            let report = csv::load_users(&accounts, &mut engine.users)?;
            tracing::info!(path = %accounts.display(), added = report.added, "opened accounts");
        }

        let status = engine.config.status_path();
        if status.exists() {
            let report = csv::load_statuses(&status, &mut engine.statuses)?;
            tracing::info!(path = %status.display(), added = report.added, "opened status updates");
        }

        Ok(engine)
    }

    // =========================================================================
    // CSV Import / Export
    // =========================================================================

    /// Load users from a CSV file, skipping ids already present
    ///
    /// Returns false on any I/O or row error, with the collection unchanged.
    pub fn load_users(&mut self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        match csv::load_users(path, &mut self.users) {
            Ok(report) => {
                tracing::info!(
                    path = %path.display(),
                    added = report.added,
                    skipped = report.skipped,
                    "users loaded"
                );
                true
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to load users");
                false
            }
        }
    }

    /// Save all users to a CSV file, overwriting it
    pub fn save_users(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        match csv::save_users(path, &self.users) {
            Ok(count) => {
                tracing::info!(path = %path.display(), count, "users saved");
                true
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to save users");
                false
            }
        }
    }

    /// Load status updates from a CSV file, skipping ids already present
    pub fn load_statuses(&mut self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        match csv::load_statuses(path, &mut self.statuses) {
            Ok(report) => {
                tracing::info!(
                    path = %path.display(),
                    added = report.added,
                    skipped = report.skipped,
                    "statuses loaded"
                );
                true
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to load statuses");
                false
            }
        }
    }

    /// Save all status updates to a CSV file, overwriting it
    pub fn save_statuses(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        match csv::save_statuses(path, &self.statuses) {
            Ok(count) => {
                tracing::info!(path = %path.display(), count, "statuses saved");
                true
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to save statuses");
                false
            }
        }
    }

    /// Load both configured files
    ///
    /// Both loads are attempted even if the first fails.
    pub fn load_all(&mut self) -> bool {
        let accounts = self.config.accounts_path();
        let status = self.config.status_path();
        let users_ok = self.load_users(accounts);
        let statuses_ok = self.load_statuses(status);
        users_ok && statuses_ok
    }

    /// Save both collections to the configured files
    pub fn save_all(&self) -> bool {
        let users_ok = self.save_users(self.config.accounts_path());
        let statuses_ok = self.save_statuses(self.config.status_path());
        users_ok && statuses_ok
    }

    // =========================================================================
    // Users
    // =========================================================================

    /// Add a new user; false if the id is taken
    pub fn add_user(
        &mut self,
        user_id: &str,
        email: &str,
        user_name: &str,
        user_last_name: &str,
    ) -> bool {
        self.users.add(user_id, email, user_name, user_last_name)
    }

    /// Update an existing user; false if the id is absent
    pub fn update_user(
        &mut self,
        user_id: &str,
        email: &str,
        user_name: &str,
        user_last_name: &str,
    ) -> bool {
        self.users.modify(user_id, email, user_name, user_last_name)
    }

    /// Delete a user; statuses referencing it are kept
    pub fn delete_user(&mut self, user_id: &str) -> bool {
        self.users.delete(user_id)
    }

    /// Look up a user; `None` when absent
    pub fn search_user(&self, user_id: &str) -> Option<&User> {
        self.users.search(user_id)
    }

    // =========================================================================
    // Status Updates
    // =========================================================================

    /// Add a new status; false if the id is taken
    pub fn add_status(&mut self, status_id: &str, user_id: &str, status_text: &str) -> bool {
        self.statuses.add(status_id, user_id, status_text)
    }

    /// Update an existing status; false if the id is absent
    pub fn update_status(&mut self, status_id: &str, user_id: &str, status_text: &str) -> bool {
        self.statuses.modify(status_id, user_id, status_text)
    }

    /// Delete a status
    pub fn delete_status(&mut self, status_id: &str) -> bool {
        self.statuses.delete(status_id)
    }

    /// Look up a status; `None` when absent
    pub fn search_status(&self, status_id: &str) -> Option<&UserStatus> {
        self.statuses.search(status_id)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the user collection
    pub fn users(&self) -> &UserCollection {
        &self.users
    }

    /// Get the user collection for direct mutation
    pub fn users_mut(&mut self) -> &mut UserCollection {
        &mut self.users
    }

    /// Get the status collection
    pub fn statuses(&self) -> &StatusCollection {
        &self.statuses
    }

    /// Get the status collection for direct mutation
    pub fn statuses_mut(&mut self) -> &mut StatusCollection {
        &mut self.statuses
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
