//! Skiff Storage Layer
//!
//! SQLite-backed settings persistence and the key-value store the browser shell
//! uses to remember the last visited address across launches.

mod database;
mod error;
mod migrations;
mod store;

pub use database::Database;
pub use error::StorageError;
pub use store::{KeyValueStore, MemoryStore, SqliteStore};

pub type Result<T> = std::result::Result<T, StorageError>;
