//! LinkShort Storage Layer
//!
//! SQLite-based persistence for client state. Values survive process
//! restarts within the same profile directory; all writes go through a
//! single serialized connection.

mod database;
mod error;
mod migrations;

pub use database::Database;
pub use error::StorageError;

pub type Result<T> = std::result::Result<T, StorageError>;
