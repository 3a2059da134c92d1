//! Session entity.
//!
//! One record per user, tracking progress through the fixed selection
//! sequence: grade first, then subject.
//!
//! # Ownership
//!
//! Sessions are owned by the session store, keyed by user identifier.
//! There is no sharing across users; the application layer serializes
//! access per user.

use serde::{Deserialize, Serialize};

use crate::domain::curriculum::{Grade, Subject};
use crate::domain::foundation::{DomainError, ErrorCode, StateMachine, UserId};
use crate::domain::session::SessionState;

/// Per-user progress record through the grade then subject selection.
///
/// # Invariants
///
/// - `grade` is set if and only if state has passed `AwaitingGrade`
/// - `subject` is set if and only if state is `Completed`
/// - A completed session stays available for repeat week queries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// User who owns this session.
    user_id: UserId,

    /// Progress through the selection sequence.
    state: SessionState,

    /// Chosen grade, once selected.
    grade: Option<Grade>,

    /// Chosen subject, once selected.
    subject: Option<Subject>,
}

impl Session {
    /// Creates a fresh session awaiting grade selection.
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            state: SessionState::AwaitingGrade,
            grade: None,
            subject: None,
        }
    }

    /// Returns the owning user's identifier.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the current selection state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Returns the chosen grade, if any.
    pub fn grade(&self) -> Option<Grade> {
        self.grade
    }

    /// Returns the chosen subject, if any.
    pub fn subject(&self) -> Option<Subject> {
        self.subject
    }

    /// Returns both selections once the sequence is complete.
    pub fn selection(&self) -> Option<(Grade, Subject)> {
        match (self.grade, self.subject) {
            (Some(grade), Some(subject)) => Some((grade, subject)),
            _ => None,
        }
    }

    /// Stores the grade selection and advances to subject selection.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if the session is not awaiting a grade
    pub fn choose_grade(&mut self, grade: Grade) -> Result<(), DomainError> {
        let next = self
            .state
            .transition_to(SessionState::AwaitingSubject)
            .map_err(|e| DomainError::new(ErrorCode::InvalidStateTransition, e.to_string()))?;

        self.grade = Some(grade);
        self.state = next;
        Ok(())
    }

    /// Stores the subject selection and completes the sequence.
    ///
    /// # Errors
    ///
    /// - `SequenceViolation` if no grade has been selected
    /// - `InvalidStateTransition` if the session is not awaiting a subject
    pub fn choose_subject(&mut self, subject: Subject) -> Result<(), DomainError> {
        if self.grade.is_none() {
            return Err(DomainError::new(
                ErrorCode::SequenceViolation,
                "Grade must be selected before subject",
            ));
        }

        let next = self
            .state
            .transition_to(SessionState::Completed)
            .map_err(|e| DomainError::new(ErrorCode::InvalidStateTransition, e.to_string()))?;

        self.subject = Some(subject);
        self.state = next;
        Ok(())
    }
}
