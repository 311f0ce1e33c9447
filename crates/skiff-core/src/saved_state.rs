//! Saved instance state
//!
//! String-keyed container the host hands to the controller before the process
//! may be killed, and back again on the next launch. The render surface's
//! back stack lives in a nested bundle under [`NAVIGATION_STATE_KEY`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::Result;

/// Key of the nested navigation bundle
pub const NAVIGATION_STATE_KEY: &str = "webview_state";

/// Opaque snapshot written and read by the render surface
pub type NavigationSnapshot = Map<String, Value>;

/// A key is held either as a plain value or as a nested bundle, never both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SavedState {
    #[serde(default)]
    values: BTreeMap<String, Value>,
    #[serde(default)]
    bundles: BTreeMap<String, NavigationSnapshot>,
}

impl SavedState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain value under `key`. Bundles are read with [`SavedState::bundle`].
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Store `value` under `key`; a JSON object becomes a bundle
    pub fn put(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        match value {
            Value::Object(bundle) => {
                self.values.remove(&key);
                self.bundles.insert(key, bundle);
            }
            other => {
                self.bundles.remove(&key);
                self.values.insert(key, other);
            }
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key) || self.bundles.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.bundles.is_empty()
    }

    /// Nested bundle under `key`, if one is present
    pub fn bundle(&self, key: &str) -> Option<&NavigationSnapshot> {
        self.bundles.get(key)
    }

    /// Nested bundle under `key`, created empty when missing or held as a plain value
    pub fn bundle_mut(&mut self, key: &str) -> &mut NavigationSnapshot {
        self.values.remove(key);
        self.bundles.entry(key.to_string()).or_default()
    }

    pub fn navigation_snapshot(&self) -> Option<&NavigationSnapshot> {
        self.bundle(NAVIGATION_STATE_KEY)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
