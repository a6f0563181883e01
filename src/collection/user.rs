//! User collection
//!
//! CRUD over user accounts keyed by `user_id`.

use crate::record::User;

use super::Collection;

/// Keyed store of user accounts
#[derive(Debug, Clone, Default)]
pub struct UserCollection {
    inner: Collection<User>,
}

impl UserCollection {
    /// Create a new empty user collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new user
    ///
    /// Returns false if `user_id` is already present.
    pub fn add(
        &mut self,
        user_id: &str,
        email: &str,
        user_name: &str,
        user_last_name: &str,
    ) -> bool {
        self.inner.insert(User::new(user_id, email, user_name, user_last_name))
    }

    /// Add an already built user record
    pub fn insert_record(&mut self, user: User) -> bool {
        self.inner.insert(user)
    }

    /// Overwrite the mutable fields of an existing user
    ///
    /// Returns false if `user_id` is absent. The id itself never changes.
    pub fn modify(
        &mut self,
        user_id: &str,
        email: &str,
        user_name: &str,
        user_last_name: &str,
    ) -> bool {
        self.inner.update_with(user_id, |user| {
            user.email = email.to_string();
            user.user_name = user_name.to_string();
            user.user_last_name = user_last_name.to_string();
        })
    }

    /// Delete a user
    pub fn delete(&mut self, user_id: &str) -> bool {
        self.inner.remove(user_id)
    }

    /// Look up a user; `None` when absent
    pub fn search(&self, user_id: &str) -> Option<&User> {
        self.inner.get(user_id)
    }

    /// Check whether a user with this id exists
    pub fn contains(&self, user_id: &str) -> bool {
        self.inner.contains(user_id)
    }

    /// Number of stored users
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if the collection is empty
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterate over users in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.inner.iter()
    }

    /// Users ordered by id
    pub fn records_sorted(&self) -> Vec<&User> {
        self.inner.records_sorted()
    }
}
