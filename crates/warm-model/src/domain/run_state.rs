use serde::{Deserialize, Serialize};

/// Lifecycle of a single run.
///
/// `Idle → Running → Completed | Failed`. Terminal states are final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RunState {
    /// Scheduler built, nothing dispatched yet.
    #[default]
    Idle,
    /// Batches are being processed.
    Running,
    /// Every batch settled.
    Completed,
    /// Run aborted (precondition, internal fault or cancellation).
    Failed,
}

impl RunState {
    /// Returns `true` if the run has ended and won't transition further.
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunState::Completed | RunState::Failed)
    }

    /// Returns `true` while batches are being processed.
    pub fn is_active(&self) -> bool {
        matches!(self, RunState::Running)
    }

    /// Whether moving from `self` to `next` is a legal transition.
    pub fn can_transition_to(&self, next: RunState) -> bool {
        matches!(
            (self, next),
            (RunState::Idle, RunState::Running)
                | (RunState::Idle, RunState::Failed)
                | (RunState::Running, RunState::Completed)
                | (RunState::Running, RunState::Failed)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_states() {
        assert!(RunState::Completed.is_terminal());
        assert!(RunState::Failed.is_terminal());

        assert!(!RunState::Idle.is_terminal());
        assert!(!RunState::Running.is_terminal());
    }

    #[test]
    fn only_running_is_active() {
        assert!(RunState::Running.is_active());
        assert!(!RunState::Idle.is_active());
        assert!(!RunState::Completed.is_active());
    }

    #[test]
    fn transitions() {
        assert!(RunState::Idle.can_transition_to(RunState::Running));
        assert!(RunState::Idle.can_transition_to(RunState::Failed));
        assert!(RunState::Running.can_transition_to(RunState::Completed));
        assert!(RunState::Running.can_transition_to(RunState::Failed));

        assert!(!RunState::Idle.can_transition_to(RunState::Completed));
        assert!(!RunState::Completed.can_transition_to(RunState::Running));
        assert!(!RunState::Failed.can_transition_to(RunState::Running));
        assert!(!RunState::Completed.can_transition_to(RunState::Failed));
    }

    #[test]
    fn serde_shape() {
        let json = serde_json::to_string(&RunState::Running).unwrap();
        assert_eq!(json, r#""running""#);

        let back: RunState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, RunState::Running);
    }
}
