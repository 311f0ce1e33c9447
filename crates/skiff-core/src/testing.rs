//! Recording fakes for the platform collaborators

use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::HashSet;
use std::sync::Arc;

use crate::saved_state::NavigationSnapshot;
use crate::surface::{EventChannel, Icon, RenderSurface, SurfaceSettings};
use crate::widgets::{AddressField, IconView, ProgressIndicator};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall {
    ApplySettings(SurfaceSettings),
    Subscribe(EventChannel),
    Unsubscribe(EventChannel),
    Load(String),
    GoBack,
    Stop,
    ClearHistory,
    Save,
    Restore,
    RemoveChildViews,
    Destroy,
}

#[derive(Debug, Default)]
pub struct SurfaceLog {
    pub calls: Vec<SurfaceCall>,
    pub back_stack: Vec<String>,
    pub title: Option<String>,
    pub icon: Option<Icon>,
    pub subscriptions: HashSet<EventChannel>,
}

impl SurfaceLog {
    pub fn loads(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SurfaceCall::Load(address) => Some(address.clone()),
                _ => None,
            })
            .collect()
    }
}

/// Surface whose back stack is a list of loaded addresses
#[derive(Clone, Default)]
pub struct FakeSurface {
    pub log: Arc<Mutex<SurfaceLog>>,
}

impl RenderSurface for FakeSurface {
    fn apply_settings(&mut self, settings: &SurfaceSettings) {
        self.log.lock().calls.push(SurfaceCall::ApplySettings(*settings));
    }

    fn subscribe(&mut self, channel: EventChannel) {
        let mut log = self.log.lock();
        log.calls.push(SurfaceCall::Subscribe(channel));
        log.subscriptions.insert(channel);
    }

    fn unsubscribe(&mut self, channel: EventChannel) {
        let mut log = self.log.lock();
        log.calls.push(SurfaceCall::Unsubscribe(channel));
        log.subscriptions.remove(&channel);
    }

    fn load_address(&mut self, address: &str) {
        let mut log = self.log.lock();
        log.calls.push(SurfaceCall::Load(address.to_string()));
        log.back_stack.push(address.to_string());
    }

    fn go_back(&mut self) {
        let mut log = self.log.lock();
        log.calls.push(SurfaceCall::GoBack);
        log.back_stack.pop();
    }

    fn can_go_back(&self) -> bool {
        self.log.lock().back_stack.len() > 1
    }

    fn stop(&mut self) {
        self.log.lock().calls.push(SurfaceCall::Stop);
    }

    fn clear_history(&mut self) {
        let mut log = self.log.lock();
        log.calls.push(SurfaceCall::ClearHistory);
        let current = log.back_stack.pop();
        log.back_stack = current.into_iter().collect();
    }

    fn current_address(&self) -> Option<String> {
        self.log.lock().back_stack.last().cloned()
    }

    fn current_title(&self) -> Option<String> {
        self.log.lock().title.clone()
    }

    fn current_icon(&self) -> Option<Icon> {
        self.log.lock().icon.clone()
    }

    fn save_navigation_state(&self, snapshot: &mut NavigationSnapshot) {
        let mut log = self.log.lock();
        log.calls.push(SurfaceCall::Save);
        snapshot.insert("back_stack".to_string(), json!(log.back_stack));
    }

    fn restore_navigation_state(&mut self, snapshot: &NavigationSnapshot) -> bool {
        let mut log = self.log.lock();
        log.calls.push(SurfaceCall::Restore);
        let Some(Value::Array(entries)) = snapshot.get("back_stack") else {
            return false;
        };
        log.back_stack = entries
            .iter()
            .filter_map(|entry| entry.as_str().map(str::to_string))
            .collect();
        true
    }

    fn remove_child_views(&mut self) {
        self.log.lock().calls.push(SurfaceCall::RemoveChildViews);
    }

    fn destroy(&mut self) {
        self.log.lock().calls.push(SurfaceCall::Destroy);
    }
}

#[derive(Debug, Default)]
pub struct FieldLog {
    pub text: String,
    /// Every value passed to `set_text`, in order
    pub writes: Vec<Option<String>>,
    pub subscriptions: HashSet<EventChannel>,
}

#[derive(Clone, Default)]
pub struct FakeField {
    pub log: Arc<Mutex<FieldLog>>,
}

impl FakeField {
    /// Simulate the user typing into the field
    pub fn type_text(&self, text: &str) {
        self.log.lock().text = text.to_string();
    }
}

impl AddressField for FakeField {
    fn text(&self) -> String {
        self.log.lock().text.clone()
    }

    fn set_text(&mut self, text: Option<&str>) {
        let mut log = self.log.lock();
        log.text = text.unwrap_or_default().to_string();
        log.writes.push(text.map(str::to_string));
    }

    fn subscribe(&mut self, channel: EventChannel) {
        self.log.lock().subscriptions.insert(channel);
    }

    fn unsubscribe(&mut self, channel: EventChannel) {
        self.log.lock().subscriptions.remove(&channel);
    }
}

#[derive(Clone, Default)]
pub struct FakeProgress {
    pub values: Arc<Mutex<Vec<u8>>>,
}

impl FakeProgress {
    pub fn last(&self) -> Option<u8> {
        self.values.lock().last().copied()
    }
}

impl ProgressIndicator for FakeProgress {
    fn set_progress(&mut self, percent: u8) {
        self.values.lock().push(percent);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconUpdate {
    Placeholder,
    Icon(Icon),
}

#[derive(Clone, Default)]
pub struct FakeIconView {
    pub updates: Arc<Mutex<Vec<IconUpdate>>>,
}

impl FakeIconView {
    pub fn last(&self) -> Option<IconUpdate> {
        self.updates.lock().last().cloned()
    }
}

impl IconView for FakeIconView {
    fn show_icon(&mut self, icon: &Icon) {
        self.updates.lock().push(IconUpdate::Icon(icon.clone()));
    }

    fn show_placeholder(&mut self) {
        self.updates.lock().push(IconUpdate::Placeholder);
    }
}

/// Handles onto every fake, kept by the test after the fakes are boxed
#[derive(Clone, Default)]
pub struct Fakes {
    pub surface: FakeSurface,
    pub field: FakeField,
    pub progress: FakeProgress,
    pub icon: FakeIconView,
}

impl Fakes {
    pub fn widgets(&self) -> crate::controller::ShellWidgets {
        crate::controller::ShellWidgets {
            address_field: Box::new(self.field.clone()),
            progress: Box::new(self.progress.clone()),
            icon: Box::new(self.icon.clone()),
        }
    }
}
