//! Shell configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use skiff_navigation::{QueryEncoding, DEFAULT_SEARCH_TEMPLATE};

use crate::controller::{DEFAULT_ADDRESS_KEY, DEFAULT_HOMEPAGE};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the settings database
    pub database_path: PathBuf,
    /// Loaded when nothing was persisted or restored
    pub homepage: String,
    /// Search engine URL template
    pub search_engine: String,
    /// Settings key holding the last started address
    pub persisted_address_key: String,
    /// Form-encode search queries instead of inserting them as typed
    pub encode_search_queries: bool,
}

impl Config {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            database_path: data_dir.join("skiff.db"),
            homepage: DEFAULT_HOMEPAGE.to_string(),
            search_engine: DEFAULT_SEARCH_TEMPLATE.to_string(),
            persisted_address_key: DEFAULT_ADDRESS_KEY.to_string(),
            encode_search_queries: false,
        }
    }

    pub fn data_dir() -> PathBuf {
        dirs::data_local_dir()
            .map(|d| d.join("Skiff"))
            .unwrap_or_else(|| PathBuf::from(".skiff"))
    }

    pub fn query_encoding(&self) -> QueryEncoding {
        if self.encode_search_queries {
            QueryEncoding::Percent
        } else {
            QueryEncoding::Verbatim
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::data_dir())
    }
}
