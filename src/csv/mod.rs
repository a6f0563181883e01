//! CSV Module
//!
//! Import/export of collections as comma-separated files.
//!
//! ## Responsibilities
//! - Parse and encode CSV rows (quoted fields, doubled quotes, CRLF)
//! - Load a file into a collection, all-or-nothing on invalid rows
//! - Save a collection, overwriting the destination
//!
//! ## File Format
//! ```text
//! USER_ID,EMAIL,NAME,LASTNAME              STATUS_ID,USER_ID,STATUS_TEXT
//! evmiles97,eve.miles@uw.edu,Eve,Miles     evmiles97_00001,evmiles97,"Hi, all"
//! ...                                      ...
//! ```
//! The first row is always a header. Every field of every data row is
//! required.

mod codec;
mod reader;
mod writer;

pub use codec::{encode_row, parse_rows, CsvRow};
pub use reader::{load_statuses, load_users, read_records, LoadReport};
pub use writer::{save_statuses, save_users, write_records};
