//! LinkGate Storage Layer
//!
//! SQLite-based persistence for consent rules. Writes are atomic per
//! statement; the rule table survives process restarts.

mod database;
mod error;
mod migrations;

pub use database::Database;
pub use error::StorageError;

pub type Result<T> = std::result::Result<T, StorageError>;
