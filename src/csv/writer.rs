//! CSV writer
//!
//! Saves collections to CSV files, overwriting the destination.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::collection::{StatusCollection, UserCollection};
use crate::error::{Result, SocialError};
use crate::record::Record;

use super::encode_row;

/// Open `path` for writing, truncating any existing file
fn create(path: &Path) -> Result<File> {
    if path.as_os_str().is_empty() {
        return Err(SocialError::InvalidPath("empty path".to_string()));
    }
    if path.is_dir() {
        return Err(SocialError::InvalidPath(format!(
            "{} is a directory",
            path.display()
        )));
    }

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;
    Ok(file)
}

/// Write a header and one line per record
///
/// Returns the number of records written.
pub fn write_records<'a, R, I>(path: &Path, records: I) -> Result<usize>
where
    R: Record + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let mut writer = BufWriter::new(create(path)?);
    writeln!(writer, "{}", encode_row(R::HEADER))?;

    let mut count = 0;
    for record in records {
        writeln!(writer, "{}", encode_row(&record.to_fields()))?;
        count += 1;
    }

    writer.flush()?;
    Ok(count)
}

/// Save every user, ordered by id
pub fn save_users(path: &Path, users: &UserCollection) -> Result<usize> {
    let count = write_records(path, users.records_sorted())?;
    tracing::debug!(path = %path.display(), count, "saved users");
    Ok(count)
}

/// Save every status, ordered by id
pub fn save_statuses(path: &Path, statuses: &StatusCollection) -> Result<usize> {
    let count = write_records(path, statuses.records_sorted())?;
    tracing::debug!(path = %path.display(), count, "saved statuses");
    Ok(count)
}
