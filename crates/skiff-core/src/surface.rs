//! Render surface contract
//!
//! The render surface is the platform's web view. Page fetch, DOM, scripting,
//! favicon extraction and the back stack all live behind this trait.

use serde::{Deserialize, Serialize};

use crate::saved_state::NavigationSnapshot;

/// Neutral address loaded during teardown to release page resources
pub const BLANK_ADDRESS: &str = "about:blank";

/// Capabilities enabled on the surface before anything is loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceSettings {
    pub javascript_enabled: bool,
    pub dom_storage_enabled: bool,
    pub database_enabled: bool,
    pub file_access_enabled: bool,
}

impl SurfaceSettings {
    /// The shell always runs with everything on
    pub const fn fixed() -> Self {
        Self {
            javascript_enabled: true,
            dom_storage_enabled: true,
            database_enabled: true,
            file_access_enabled: true,
        }
    }
}

impl Default for SurfaceSettings {
    fn default() -> Self {
        Self::fixed()
    }
}

/// Decoded favicon bitmap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Icon {
    pub width: u32,
    pub height: u32,
    /// RGBA8, row-major
    pub rgba: Vec<u8>,
}

impl Icon {
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Self {
        Self {
            width,
            height,
            rgba,
        }
    }
}

/// Event sources a host forwards to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventChannel {
    /// Page started / page finished, from the surface
    PageLifecycle,
    /// Load progress, from the surface
    Progress,
    /// Focus changes, from the address field
    InputFocus,
    /// Key presses, from the address field
    InputKey,
}

/// Events emitted by the render surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    PageStarted { address: String, icon: Option<Icon> },
    PageFinished { address: String },
    ProgressChanged(u8),
}

impl SurfaceEvent {
    pub fn channel(&self) -> EventChannel {
        match self {
            SurfaceEvent::PageStarted { .. } | SurfaceEvent::PageFinished { .. } => {
                EventChannel::PageLifecycle
            }
            SurfaceEvent::ProgressChanged(_) => EventChannel::Progress,
        }
    }
}

pub trait RenderSurface {
    fn apply_settings(&mut self, settings: &SurfaceSettings);

    /// Start forwarding events on `channel` to the controller
    fn subscribe(&mut self, channel: EventChannel);
    fn unsubscribe(&mut self, channel: EventChannel);

    /// Begin an asynchronous navigation
    fn load_address(&mut self, address: &str);
    fn go_back(&mut self);
    fn can_go_back(&self) -> bool;
    fn stop(&mut self);
    fn clear_history(&mut self);

    fn current_address(&self) -> Option<String>;
    fn current_title(&self) -> Option<String>;
    fn current_icon(&self) -> Option<Icon>;

    /// Write the back stack into `snapshot`, keeping whatever it already holds
    fn save_navigation_state(&self, snapshot: &mut NavigationSnapshot);
    /// Rebuild the back stack. Returns false when the snapshot is unusable.
    fn restore_navigation_state(&mut self, snapshot: &NavigationSnapshot) -> bool;

    fn remove_child_views(&mut self);
    fn destroy(&mut self);
}
