//! Status update record

use crate::error::Result;

use super::{validate_fields, Record};

/// A status update posted by a user
///
/// `user_id` is a free-text reference and is never checked against the
/// user collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStatus {
    /// Identity, fixed at creation
    pub status_id: String,
    pub user_id: String,
    pub status_text: String,
}

impl UserStatus {
    /// Create a new status record
    pub fn new(
        status_id: impl Into<String>,
        user_id: impl Into<String>,
        status_text: impl Into<String>,
    ) -> Self {
        Self {
            status_id: status_id.into(),
            user_id: user_id.into(),
            status_text: status_text.into(),
        }
    }
}

impl Record for UserStatus {
    const KIND: &'static str = "status";
    const HEADER: &'static [&'static str] = &["STATUS_ID", "USER_ID", "STATUS_TEXT"];

    fn id(&self) -> &str {
        &self.status_id
    }

    fn from_fields(line: usize, fields: Vec<String>) -> Result<Self> {
        validate_fields(line, &fields, Self::HEADER)?;

        let mut fields = fields.into_iter();
        let mut next = || fields.next().unwrap_or_default();

        Ok(Self {
            status_id: next(),
            user_id: next(),
            status_text: next(),
        })
    }

    fn to_fields(&self) -> Vec<&str> {
        vec![&self.status_id, &self.user_id, &self.status_text]
    }
}
