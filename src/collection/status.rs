//! Status collection
//!
//! CRUD over status updates keyed by `status_id`.

use crate::record::UserStatus;

use super::Collection;

/// Keyed store of status updates
#[derive(Debug, Clone, Default)]
pub struct StatusCollection {
    inner: Collection<UserStatus>,
}

impl StatusCollection {
    /// Create a new empty status collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new status
    ///
    /// Returns false if `status_id` is already present. `user_id` is not
    /// checked against any user collection.
    pub fn add(&mut self, status_id: &str, user_id: &str, status_text: &str) -> bool {
        self.inner.insert(UserStatus::new(status_id, user_id, status_text))
    }

    /// Add an already built status record
    pub fn insert_record(&mut self, status: UserStatus) -> bool {
        self.inner.insert(status)
    }

    /// Overwrite `user_id` and `status_text` of an existing status
    pub fn modify(&mut self, status_id: &str, user_id: &str, status_text: &str) -> bool {
        self.inner.update_with(status_id, |status| {
            status.user_id = user_id.to_string();
            status.status_text = status_text.to_string();
        })
    }

    /// Delete a status
    pub fn delete(&mut self, status_id: &str) -> bool {
        self.inner.remove(status_id)
    }

    /// Look up a status; `None` when absent
    pub fn search(&self, status_id: &str) -> Option<&UserStatus> {
        self.inner.get(status_id)
    }

    /// Check whether a status with this id exists
    pub fn contains(&self, status_id: &str) -> bool {
        self.inner.contains(status_id)
    }

    /// Number of stored statuses
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if the collection is empty
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterate over statuses in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = &UserStatus> {
        self.inner.iter()
    }

    /// Statuses ordered by id
    pub fn records_sorted(&self) -> Vec<&UserStatus> {
        self.inner.records_sorted()
    }
}
