//! # SocialKV
//!
//! In-memory user accounts and status updates with:
//! - Keyed CRUD collections with duplicate/missing key rejection
//! - CSV import/export (header row, quoted fields)
//! - An orchestration engine and a command-line front end
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      socialkv-cli                            │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                        Engine                                │
//! │             (bool results, load/save routing)                │
//! └──────────┬──────────────────────────────────┬───────────────┘
//!            │                                  │
//!            ▼                                  ▼
//!   ┌─────────────────┐                ┌─────────────────┐
//!   │ UserCollection  │                │StatusCollection │
//!   └────────┬────────┘                └────────┬────────┘
//!            └──────────────┬───────────────────┘
//!                           ▼
//!                  ┌─────────────────┐
//!                  │  CSV reader /   │
//!                  │     writer      │
//!                  └─────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod collection;
pub mod csv;
pub mod engine;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{SocialError, Result};
pub use config::Config;
pub use collection::{StatusCollection, UserCollection};
pub use engine::Engine;
pub use record::{blank_field, Record, User, UserStatus};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of SocialKV
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
