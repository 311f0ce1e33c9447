//! Shell State Machine
//!
//! ```text
//! Uninitialized
//!   ↓ page started
//! Loading ⇄ Finished
//!   ↓ teardown (from any state)
//! TornDown
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShellState {
    /// Constructed, no page has started yet
    Uninitialized,
    /// A page started and has not finished
    Loading,
    /// The last page finished
    Finished,
    /// Resources released; terminal
    TornDown,
}

impl ShellState {
    /// Check if transition to another state is valid
    pub fn can_transition_to(&self, target: ShellState) -> bool {
        match (self, target) {
            // Nothing leaves TornDown
            (ShellState::TornDown, ShellState::TornDown) => true,
            (ShellState::TornDown, _) => false,
            (_, ShellState::TornDown) => true,
            (ShellState::Uninitialized, ShellState::Loading) => true,
            // Redirects restart the load
            (ShellState::Loading, ShellState::Loading) => true,
            (ShellState::Loading, ShellState::Finished) => true,
            (ShellState::Finished, ShellState::Loading) => true,
            // Surfaces may report finish more than once per page
            (ShellState::Finished, ShellState::Finished) => true,
            _ => false,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ShellState::Loading)
    }

    pub fn is_torn_down(&self) -> bool {
        matches!(self, ShellState::TornDown)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShellState::Uninitialized => "uninitialized",
            ShellState::Loading => "loading",
            ShellState::Finished => "finished",
            ShellState::TornDown => "torn_down",
        }
    }
}

impl std::fmt::Display for ShellState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
