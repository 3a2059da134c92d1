//! SessionState enum for tracking progress through the selection sequence.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Progress of a user through the grade then subject selection sequence.
///
/// A restart recreates the session from scratch rather than transitioning,
/// so `Completed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    #[default]
    AwaitingGrade,
    AwaitingSubject,
    Completed,
}

impl StateMachine for SessionState {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SessionState::*;
        matches!(
            (self, target),
            (AwaitingGrade, AwaitingSubject) | (AwaitingSubject, Completed)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SessionState::*;
        match self {
            AwaitingGrade => vec![AwaitingSubject],
            AwaitingSubject => vec![Completed],
            Completed => vec![],
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionState::AwaitingGrade => "AwaitingGrade",
            SessionState::AwaitingSubject => "AwaitingSubject",
            SessionState::Completed => "Completed",
        };
        write!(f, "{}", s)
    }
}
