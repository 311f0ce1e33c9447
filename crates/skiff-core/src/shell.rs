//! Shell assembly
//!
//! Opens the settings database named by [`Config`] and builds controllers
//! backed by it.

use skiff_navigation::AddressResolver;
use skiff_storage::{Database, SqliteStore};

use crate::config::Config;
use crate::controller::{BrowserShellController, ShellWidgets};
use crate::surface::RenderSurface;
use crate::Result;

const SEARCH_ENGINE_KEY: &str = "search_engine";

pub struct Shell {
    config: Config,
    db: Database,
}

impl Shell {
    /// Open (or create) the settings database
    pub fn open(config: Config) -> Result<Self> {
        if let Some(parent) = config.database_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::open(&config.database_path)?;
        tracing::info!(path = %config.database_path.display(), "Settings database opened");

        Ok(Self { config, db })
    }

    /// Shell whose settings vanish with the process
    pub fn open_in_memory(config: Config) -> Result<Self> {
        let db = Database::open_in_memory()?;
        Ok(Self { config, db })
    }

    /// Resolver for the configured engine; a persisted choice wins over the config
    pub fn resolver(&self) -> Result<AddressResolver> {
        let template = self
            .db
            .get_setting(SEARCH_ENGINE_KEY)?
            .unwrap_or_else(|| self.config.search_engine.clone());

        Ok(AddressResolver::with_search_engine(template)
            .with_query_encoding(self.config.query_encoding()))
    }

    pub fn set_search_engine(&self, template: &str) -> Result<()> {
        self.db.set_setting(SEARCH_ENGINE_KEY, template)?;
        Ok(())
    }

    /// Controller over the given surface and widgets, persisting to this shell's database
    pub fn controller(
        &self,
        surface: Box<dyn RenderSurface>,
        widgets: ShellWidgets,
    ) -> Result<BrowserShellController> {
        let store = SqliteStore::new(self.db.clone());

        Ok(BrowserShellController::new(surface, widgets, Box::new(store))
            .with_resolver(self.resolver()?)
            .with_homepage(self.config.homepage.clone())
            .with_address_key(self.config.persisted_address_key.clone()))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}
