//! Record Module
//!
//! Fixed-shape payloads stored in the collections.
//!
//! ## Records
//! - `User`: account keyed by `user_id`
//! - `UserStatus`: status update keyed by `status_id`
//!
//! Both carry one identity field that never changes after creation and a
//! handful of mutable fields. The `Record` trait is the seam shared by the
//! generic `Collection` and the CSV reader/writer.

mod status;
mod user;

pub use status::UserStatus;
pub use user::User;

use crate::error::{Result, SocialError};

/// A keyed record that can be stored in a collection and mapped to a CSV row
pub trait Record: Clone {
    /// Short human name used in logs ("user", "status")
    const KIND: &'static str;

    /// CSV column names, identity first
    const HEADER: &'static [&'static str];

    /// The identity field
    fn id(&self) -> &str;

    /// Build a record from one CSV row starting at `line`
    fn from_fields(line: usize, fields: Vec<String>) -> Result<Self>;

    /// The record as a row in `HEADER` order
    fn to_fields(&self) -> Vec<&str>;
}

/// Check arity and emptiness of a row against a header
///
/// Shared by the `from_fields` implementations. Whitespace-only fields count
/// as empty.
pub(crate) fn validate_fields(
    line: usize,
    fields: &[String],
    header: &'static [&'static str],
) -> Result<()> {
    if fields.len() != header.len() {
        return Err(SocialError::Malformed {
            line,
            reason: format!("expected {} fields, got {}", header.len(), fields.len()),
        });
    }

    match blank_field(fields, header) {
        Some(field) => Err(SocialError::EmptyField { line, field }),
        None => Ok(()),
    }
}

/// Name of the first column whose value is empty or whitespace-only
///
/// Values beyond the header length are ignored.
pub fn blank_field<S: AsRef<str>>(
    values: &[S],
    header: &'static [&'static str],
) -> Option<&'static str> {
    values
        .iter()
        .zip(header.iter())
        .find(|(value, _)| AsRef::<str>::as_ref(*value).trim().is_empty())
        .map(|(_, name)| *name)
}
