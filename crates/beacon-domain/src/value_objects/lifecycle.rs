//! Lifecycle state machine

use serde::Serialize;
use std::fmt;

/// State of a lifecycle manager
///
/// Transitions only move forward, except `Failed`, which is entered from
/// `Starting` or `Running` and leaves through `Stopping` on cleanup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum LifecycleState {
    /// Nothing started yet
    #[default]
    Uninitialized,
    /// Init hooks are running
    Starting,
    /// Every init hook succeeded
    Running,
    /// Stop hooks are running
    Stopping,
    /// Shutdown completed
    Stopped,
    /// An init hook failed
    Failed,
}

impl LifecycleState {
    /// Whether moving from `self` to `next` is a legal transition
    pub fn can_transition_to(self, next: LifecycleState) -> bool {
        use LifecycleState::{Failed, Running, Starting, Stopped, Stopping, Uninitialized};
        matches!(
            (self, next),
            (Uninitialized, Starting)
                | (Starting, Running | Failed)
                | (Running, Stopping | Failed)
                | (Failed, Stopping)
                | (Stopping, Stopped)
        )
    }

    /// Whether `stop` has anything to do in this state
    pub fn needs_stop(self) -> bool {
        !matches!(self, LifecycleState::Uninitialized | LifecycleState::Stopped)
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LifecycleState::Uninitialized => "uninitialized",
            LifecycleState::Starting => "starting",
            LifecycleState::Running => "running",
            LifecycleState::Stopping => "stopping",
            LifecycleState::Stopped => "stopped",
            LifecycleState::Failed => "failed",
        };
        f.write_str(name)
    }
}
