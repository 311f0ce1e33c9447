//! Host lifecycle boundary
//!
//! The platform drives the screen through these four entry points.

use crate::controller::BrowserShellController;
use crate::saved_state::SavedState;

/// Outcome of a back press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackNavigation {
    /// The surface went back one page
    Handled,
    /// Nothing to go back to; the host applies its default behavior
    DeferToHost,
}

pub trait HostLifecycle {
    /// Screen created, possibly after process death
    fn on_create(&mut self, saved_state: Option<&SavedState>);
    /// Screen may be destroyed; stash what is needed to rebuild it
    fn on_save_instance_state(&mut self, out_state: &mut SavedState);
    fn on_back_pressed(&mut self) -> BackNavigation;
    fn on_destroy(&mut self);
}

impl HostLifecycle for BrowserShellController {
    fn on_create(&mut self, saved_state: Option<&SavedState>) {
        self.initialize(saved_state.and_then(SavedState::navigation_snapshot));
    }

    fn on_save_instance_state(&mut self, out_state: &mut SavedState) {
        self.save_state_into(out_state);
    }

    fn on_back_pressed(&mut self) -> BackNavigation {
        if self.go_back() {
            BackNavigation::Handled
        } else {
            BackNavigation::DeferToHost
        }
    }

    fn on_destroy(&mut self) {
        self.teardown();
    }
}
