//! CSV reader
//!
//! Loads CSV files into collections.
//!
//! Loading is all-or-nothing with respect to validation: every data row is
//! parsed and checked before the first insertion, so a bad row leaves the
//! collection exactly as it was. Rows whose id is already present are skipped.

use std::fs;
use std::path::Path;

use crate::collection::{StatusCollection, UserCollection};
use crate::error::{Result, SocialError};
use crate::record::{Record, User, UserStatus};

use super::parse_rows;

/// Outcome of a successful load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Rows inserted into the collection
    pub added: usize,
    /// Rows ignored because their id was already present
    pub skipped: usize,
}

impl LoadReport {
    /// Total data rows seen
    pub fn total(&self) -> usize {
        self.added + self.skipped
    }
}

/// Read and validate every data row of a CSV file
///
/// The header row is required but its content is not checked.
pub fn read_records<R: Record>(path: &Path) -> Result<Vec<R>> {
    let text = fs::read_to_string(path)?;
    let mut rows = parse_rows(&text)?.into_iter();

    if rows.next().is_none() {
        return Err(SocialError::Malformed {
            line: 1,
            reason: "missing header row".to_string(),
        });
    }

    rows.map(|row| R::from_fields(row.line, row.fields)).collect()
}

/// Insert records one by one, counting duplicates
fn insert_all<R, F>(records: Vec<R>, mut insert: F) -> LoadReport
where
    R: Record,
    F: FnMut(R) -> bool,
{
    let mut report = LoadReport::default();

    for record in records {
        if insert(record) {
            report.added += 1;
        } else {
            report.skipped += 1;
        }
    }

    report
}

/// Load user accounts from `path` into `users`
pub fn load_users(path: &Path, users: &mut UserCollection) -> Result<LoadReport> {
    let records = read_records::<User>(path)?;
    let report = insert_all(records, |user| users.insert_record(user));

    tracing::debug!(
        path = %path.display(),
        added = report.added,
        skipped = report.skipped,
        "loaded users"
    );
    Ok(report)
}

/// Load status updates from `path` into `statuses`
pub fn load_statuses(path: &Path, statuses: &mut StatusCollection) -> Result<LoadReport> {
    let records = read_records::<UserStatus>(path)?;
    let report = insert_all(records, |status| statuses.insert_record(status));

    tracing::debug!(
        path = %path.display(),
        added = report.added,
        skipped = report.skipped,
        "loaded statuses"
    );
    Ok(report)
}
