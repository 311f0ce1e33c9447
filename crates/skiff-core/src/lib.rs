//! Skiff Core
//!
//! A single browser screen: a render surface, an address field, a progress
//! indicator and a favicon view, wired together by [`BrowserShellController`].
//! The render surface and the widgets belong to the host platform; this crate
//! only drives them.

mod config;
mod controller;
mod error;
mod lifecycle;
mod saved_state;
mod shell;
mod state;
mod surface;
mod widgets;

#[cfg(test)]
mod testing;

pub use config::Config;
pub use controller::{
    BrowserShellController, PageSession, ShellWidgets, DEFAULT_ADDRESS_KEY, DEFAULT_HOMEPAGE,
};
pub use error::CoreError;
pub use lifecycle::{BackNavigation, HostLifecycle};
pub use saved_state::{NavigationSnapshot, SavedState, NAVIGATION_STATE_KEY};
pub use shell::Shell;
pub use state::ShellState;
pub use surface::{
    EventChannel, Icon, RenderSurface, SurfaceEvent, SurfaceSettings, BLANK_ADDRESS,
};
pub use widgets::{AddressField, EventHandling, IconView, InputEvent, InputKey, ProgressIndicator};

// Re-export collaborator crates
pub use skiff_navigation::{
    resolve_address, AddressResolver, InputResolution, QueryEncoding, DEFAULT_SEARCH_TEMPLATE,
};
pub use skiff_storage::{Database, KeyValueStore, MemoryStore, SqliteStore, StorageError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
