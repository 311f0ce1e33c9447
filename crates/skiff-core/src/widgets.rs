//! Passive UI widgets driven by the controller

use crate::surface::{EventChannel, Icon};

/// Editable URL / search field
pub trait AddressField {
    fn text(&self) -> String;
    /// `None` clears the field
    fn set_text(&mut self, text: Option<&str>);
    fn subscribe(&mut self, channel: EventChannel);
    fn unsubscribe(&mut self, channel: EventChannel);
}

pub trait ProgressIndicator {
    fn set_progress(&mut self, percent: u8);
}

pub trait IconView {
    fn show_icon(&mut self, icon: &Icon);
    /// Default favicon shown while a page has none
    fn show_placeholder(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    Enter,
    /// Any other key, by platform key code
    Other(u32),
}

/// Events emitted by the address field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    FocusChanged(bool),
    Key(InputKey),
}

impl InputEvent {
    pub fn channel(&self) -> EventChannel {
        match self {
            InputEvent::FocusChanged(_) => EventChannel::InputFocus,
            InputEvent::Key(_) => EventChannel::InputKey,
        }
    }
}

/// Whether the host should consider an input event consumed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventHandling {
    Handled,
    NotHandled,
}

impl EventHandling {
    pub fn is_handled(self) -> bool {
        self == EventHandling::Handled
    }
}
