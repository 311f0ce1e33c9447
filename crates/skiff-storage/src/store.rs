//! Key-value store abstraction
//!
//! The shell only ever needs string settings. Writes are fire-and-forget:
//! a failed write is logged and dropped, never reported to the caller.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::database::Database;

/// Persisted string storage scoped to the application
pub trait KeyValueStore {
    /// Read `key`, falling back to `default` when it is missing or unreadable
    fn get_string(&self, key: &str, default: &str) -> String;

    /// Write `key`. No completion or failure signal is surfaced.
    fn set_string(&self, key: &str, value: &str);
}

/// Store backed by the `settings` table
#[derive(Clone)]
pub struct SqliteStore {
    db: Database,
}

impl SqliteStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

impl KeyValueStore for SqliteStore {
    fn get_string(&self, key: &str, default: &str) -> String {
        match self.db.get_setting(key) {
            Ok(Some(value)) => value,
            Ok(None) => default.to_string(),
            Err(e) => {
                tracing::warn!(key, error = %e, "Failed to read setting, using default");
                default.to_string()
            }
        }
    }

    fn set_string(&self, key: &str, value: &str) {
        if let Err(e) = self.db.set_setting(key, value) {
            tracing::warn!(key, error = %e, "Failed to persist setting");
        }
    }
}

/// In-memory store. Clones share the same map.
#[derive(Clone, Default)]
pub struct MemoryStore {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values.read().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.values.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.read().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_string(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }

    fn set_string(&self, key: &str, value: &str) {
        self.values
            .write()
            .insert(key.to_string(), value.to_string());
    }
}
