//! Browser shell controller
//!
//! Wires render surface events to the address field, progress indicator and
//! icon view, remembers the last started address, and turns submitted input
//! into navigations. Every handler runs on the UI thread and none of them fail:
//! persistence is fire-and-forget and navigation errors belong to the surface.

use std::collections::HashSet;

use skiff_navigation::AddressResolver;
use skiff_storage::KeyValueStore;

use crate::saved_state::{NavigationSnapshot, SavedState, NAVIGATION_STATE_KEY};
use crate::state::ShellState;
use crate::surface::{
    EventChannel, Icon, RenderSurface, SurfaceEvent, SurfaceSettings, BLANK_ADDRESS,
};
use crate::widgets::{AddressField, EventHandling, IconView, InputEvent, InputKey, ProgressIndicator};

/// Default home page when nothing was persisted
pub const DEFAULT_HOMEPAGE: &str = "https://www.google.com/";

/// Default settings key of the persisted address
pub const DEFAULT_ADDRESS_KEY: &str = "url";

/// The passive widgets of the browser screen
pub struct ShellWidgets {
    pub address_field: Box<dyn AddressField>,
    pub progress: Box<dyn ProgressIndicator>,
    pub icon: Box<dyn IconView>,
}

/// What the screen currently shows, rebuilt from surface queries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSession {
    pub current_address: String,
    pub current_title: String,
    pub load_progress: u8,
    pub icon: Option<Icon>,
}

pub struct BrowserShellController {
    surface: Option<Box<dyn RenderSurface>>,
    address_field: Option<Box<dyn AddressField>>,
    progress: Option<Box<dyn ProgressIndicator>>,
    icon: Option<Box<dyn IconView>>,
    store: Option<Box<dyn KeyValueStore>>,
    resolver: AddressResolver,
    homepage: String,
    address_key: String,
    registered: HashSet<EventChannel>,
    state: ShellState,
    load_progress: u8,
}

impl BrowserShellController {
    pub fn new(
        surface: Box<dyn RenderSurface>,
        widgets: ShellWidgets,
        store: Box<dyn KeyValueStore>,
    ) -> Self {
        Self {
            surface: Some(surface),
            address_field: Some(widgets.address_field),
            progress: Some(widgets.progress),
            icon: Some(widgets.icon),
            store: Some(store),
            resolver: AddressResolver::new(),
            homepage: DEFAULT_HOMEPAGE.to_string(),
            address_key: DEFAULT_ADDRESS_KEY.to_string(),
            registered: HashSet::new(),
            state: ShellState::Uninitialized,
            load_progress: 0,
        }
    }

    pub fn with_resolver(mut self, resolver: AddressResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn with_homepage(mut self, homepage: impl Into<String>) -> Self {
        self.homepage = homepage.into();
        self
    }

    pub fn with_address_key(mut self, key: impl Into<String>) -> Self {
        self.address_key = key.into();
        self
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    pub fn resolver(&self) -> &AddressResolver {
        &self.resolver
    }

    pub fn is_registered(&self, channel: EventChannel) -> bool {
        self.registered.contains(&channel)
    }

    /// True once teardown released every collaborator
    pub fn is_released(&self) -> bool {
        self.surface.is_none()
            && self.address_field.is_none()
            && self.progress.is_none()
            && self.icon.is_none()
            && self.store.is_none()
    }

    /// Configure the surface, register handlers and start the first navigation.
    ///
    /// A restore snapshot rebuilds the surface's back stack; without one (or
    /// when the surface rejects it) the persisted address is loaded, falling
    /// back to the home page.
    pub fn initialize(&mut self, restore: Option<&NavigationSnapshot>) {
        if self.state != ShellState::Uninitialized || !self.registered.is_empty() {
            tracing::warn!(state = %self.state, "Shell already initialized, ignoring");
            return;
        }

        let Some(surface) = self.surface.as_mut() else {
            return;
        };

        surface.apply_settings(&SurfaceSettings::fixed());
        for channel in [EventChannel::PageLifecycle, EventChannel::Progress] {
            surface.subscribe(channel);
            self.registered.insert(channel);
        }
        if let Some(field) = self.address_field.as_mut() {
            for channel in [EventChannel::InputFocus, EventChannel::InputKey] {
                field.subscribe(channel);
                self.registered.insert(channel);
            }
        }

        if let Some(snapshot) = restore {
            if surface.restore_navigation_state(snapshot) {
                tracing::info!("Restored navigation state");
                return;
            }
            tracing::warn!("Navigation snapshot rejected, starting a fresh session");
        }

        let address = match self.store.as_ref() {
            Some(store) => store.get_string(&self.address_key, &self.homepage),
            None => self.homepage.clone(),
        };
        tracing::info!(address = %address, "Loading initial address");
        surface.load_address(&address);
    }

    /// Dispatch a surface event to its handler. Dropped when unregistered.
    pub fn handle_surface_event(&mut self, event: SurfaceEvent) {
        if !self.registered.contains(&event.channel()) {
            tracing::debug!(?event, "Dropping surface event on unregistered channel");
            return;
        }

        match event {
            SurfaceEvent::PageStarted { address, .. } => self.on_page_started(&address),
            SurfaceEvent::PageFinished { address } => self.on_page_finished(&address),
            SurfaceEvent::ProgressChanged(percent) => self.on_progress_changed(percent),
        }
    }

    /// Dispatch an address field event to its handler. Dropped when unregistered.
    pub fn handle_input_event(&mut self, event: InputEvent) -> EventHandling {
        if !self.registered.contains(&event.channel()) {
            tracing::debug!(?event, "Dropping input event on unregistered channel");
            return EventHandling::NotHandled;
        }

        match event {
            InputEvent::FocusChanged(has_focus) => {
                self.on_input_focus_changed(has_focus);
                EventHandling::Handled
            }
            InputEvent::Key(key) => self.on_input_key(key),
        }
    }

    pub fn on_page_started(&mut self, address: &str) {
        tracing::debug!(address, "Page started");
        self.transition(ShellState::Loading);
        self.set_progress(0);

        if let Some(store) = self.store.as_ref() {
            store.set_string(&self.address_key, address);
        }

        // The surface still reports the previous page's title at this point
        let title = self.surface.as_ref().and_then(|s| s.current_title());
        if let Some(field) = self.address_field.as_mut() {
            field.set_text(title.as_deref());
        }

        if let Some(icon) = self.icon.as_mut() {
            icon.show_placeholder();
        }
    }

    pub fn on_page_finished(&mut self, address: &str) {
        tracing::debug!(address, "Page finished");
        self.transition(ShellState::Finished);
        self.set_progress(0);

        let favicon = self.surface.as_ref().and_then(|s| s.current_icon());
        if let (Some(favicon), Some(icon)) = (favicon, self.icon.as_mut()) {
            icon.show_icon(&favicon);
        }
    }

    pub fn on_progress_changed(&mut self, percent: u8) {
        self.set_progress(percent.min(100));
    }

    /// Focused: show the raw address for editing. Blurred: show the title.
    pub fn on_input_focus_changed(&mut self, has_focus: bool) {
        let text = self.surface.as_ref().and_then(|s| {
            if has_focus {
                s.current_address()
            } else {
                s.current_title()
            }
        });

        if let Some(field) = self.address_field.as_mut() {
            field.set_text(text.as_deref());
        }
    }

    /// Enter submits the field's text; every other key passes through.
    pub fn on_input_key(&mut self, key: InputKey) -> EventHandling {
        if key != InputKey::Enter {
            return EventHandling::NotHandled;
        }

        let raw = self
            .address_field
            .as_ref()
            .map(|field| field.text())
            .unwrap_or_default();
        self.on_input_submit(&raw)
    }

    /// Resolve `raw` and navigate. Blank input navigates to an empty address.
    pub fn on_input_submit(&mut self, raw: &str) -> EventHandling {
        let address = self.resolver.resolve_address(raw);
        tracing::debug!(input = raw, address = %address, "Address submitted");

        if let Some(surface) = self.surface.as_mut() {
            surface.load_address(&address);
        }
        EventHandling::Handled
    }

    /// Merge the surface's navigation state into `out` under the fixed key
    pub fn save_state_into(&self, out: &mut SavedState) {
        if let Some(surface) = self.surface.as_ref() {
            surface.save_navigation_state(out.bundle_mut(NAVIGATION_STATE_KEY));
        }
    }

    pub fn save_state(&self) -> SavedState {
        let mut state = SavedState::new();
        self.save_state_into(&mut state);
        state
    }

    pub fn go_back(&mut self) -> bool {
        match self.surface.as_mut() {
            Some(surface) if surface.can_go_back() => {
                surface.go_back();
                true
            }
            _ => false,
        }
    }

    pub fn session(&self) -> Option<PageSession> {
        let surface = self.surface.as_ref()?;
        Some(PageSession {
            current_address: surface.current_address().unwrap_or_default(),
            current_title: surface.current_title().unwrap_or_default(),
            load_progress: self.load_progress,
            icon: surface.current_icon(),
        })
    }

    /// Release every collaborator. Safe to call repeatedly.
    pub fn teardown(&mut self) {
        if let Some(mut surface) = self.surface.take() {
            surface.stop();
            surface.load_address(BLANK_ADDRESS);
            surface.clear_history();
            surface.unsubscribe(EventChannel::PageLifecycle);
            surface.unsubscribe(EventChannel::Progress);
            surface.remove_child_views();
            surface.destroy();
        }

        if let Some(mut field) = self.address_field.take() {
            field.unsubscribe(EventChannel::InputKey);
            field.unsubscribe(EventChannel::InputFocus);
            field.set_text(None);
        }

        self.store = None;
        self.progress = None;
        self.icon = None;
        self.registered.clear();

        if !self.state.is_torn_down() {
            tracing::info!("Browser shell torn down");
            self.transition(ShellState::TornDown);
        }
    }

    fn set_progress(&mut self, percent: u8) {
        self.load_progress = percent;
        if let Some(progress) = self.progress.as_mut() {
            progress.set_progress(percent);
        }
    }

    fn transition(&mut self, target: ShellState) {
        if self.state.can_transition_to(target) {
            self.state = target;
        } else {
            tracing::debug!(from = %self.state, to = %target, "Ignoring shell state transition");
        }
    }
}

impl Drop for BrowserShellController {
    fn drop(&mut self) {
        self.teardown();
    }
}
