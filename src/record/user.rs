//! User account record

use crate::error::Result;

use super::{validate_fields, Record};

/// A user account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Identity, fixed at creation
    pub user_id: String,
    pub email: String,
    pub user_name: String,
    pub user_last_name: String,
}

impl User {
    /// Create a new user record
    pub fn new(
        user_id: impl Into<String>,
        email: impl Into<String>,
        user_name: impl Into<String>,
        user_last_name: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            email: email.into(),
            user_name: user_name.into(),
            user_last_name: user_last_name.into(),
        }
    }
}

impl Record for User {
    const KIND: &'static str = "user";
    const HEADER: &'static [&'static str] = &["USER_ID", "EMAIL", "NAME", "LASTNAME"];

    fn id(&self) -> &str {
        &self.user_id
    }

    fn from_fields(line: usize, fields: Vec<String>) -> Result<Self> {
        validate_fields(line, &fields, Self::HEADER)?;

        let mut fields = fields.into_iter();
        // Arity was checked above
        let mut next = || fields.next().unwrap_or_default();

        Ok(Self {
            user_id: next(),
            email: next(),
            user_name: next(),
            user_last_name: next(),
        })
    }

    fn to_fields(&self) -> Vec<&str> {
        vec![
            &self.user_id,
            &self.email,
            &self.user_name,
            &self.user_last_name,
        ]
    }
}
