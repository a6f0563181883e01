//! Generic keyed store
//!
//! HashMap-based store shared by the user and status collections.

use std::collections::hash_map::{Entry, Values};
use std::collections::HashMap;

use crate::record::Record;

/// An owned keyed store of records of one kind
#[derive(Debug, Clone)]
pub struct Collection<R: Record> {
    records: HashMap<String, R>,
}

impl<R: Record> Collection<R> {
    /// Create a new empty collection
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
        }
    }

    /// Insert a record unless its id is already present
    ///
    /// Returns false (and leaves the stored record untouched) on a duplicate.
    pub fn insert(&mut self, record: R) -> bool {
        match self.records.entry(record.id().to_string()) {
            Entry::Occupied(_) => {
                tracing::debug!(
                    kind = R::KIND,
                    id = record.id(),
                    "rejected add: id already present"
                );
                false
            }
            Entry::Vacant(slot) => {
                slot.insert(record);
                true
            }
        }
    }

    /// Mutate the record stored under `id` in place
    ///
    /// Returns false without inserting anything when `id` is absent.
    pub fn update_with<F>(&mut self, id: &str, update: F) -> bool
    where
        F: FnOnce(&mut R),
    {
        match self.records.get_mut(id) {
            Some(record) => {
                update(record);
                true
            }
            None => {
                tracing::debug!(kind = R::KIND, id, "rejected modify: id not found");
                false
            }
        }
    }

    /// Remove the record stored under `id`
    pub fn remove(&mut self, id: &str) -> bool {
        if self.records.remove(id).is_some() {
            true
        } else {
            tracing::debug!(kind = R::KIND, id, "rejected delete: id not found");
            false
        }
    }

    /// Look up a record by id
    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.get(id)
    }

    /// Check whether `id` is present
    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the collection holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in unspecified order
    pub fn iter(&self) -> Values<'_, String, R> {
        self.records.values()
    }

    /// All records ordered by id
    pub fn records_sorted(&self) -> Vec<&R> {
        let mut records: Vec<&R> = self.records.values().collect();
        records.sort_by(|a, b| a.id().cmp(b.id()));
        records
    }
}

impl<R: Record> Default for Collection<R> {
    fn default() -> Self {
        Self::new()
    }
}
