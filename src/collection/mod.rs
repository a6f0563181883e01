//! Collection Module
//!
//! Owned keyed stores of records.
//!
//! ## Responsibilities
//! - Unique keys: no two records share an id
//! - Reject add on a present id, modify/delete on an absent id
//! - Report "not found" as `None`, never as a placeholder record
//!
//! ## Data Structure Choice
//! `HashMap<String, R>` for expected O(1) lookups. Ordered output (CSV save)
//! sorts on demand via `records_sorted`.

mod status;
mod store;
mod user;

pub use status::StatusCollection;
pub use store::Collection;
pub use user::UserCollection;
