//! Fixed selection vocabularies.
//!
//! Grades and subjects are closed sets. User input is matched against the
//! display labels with exact, case-sensitive comparison; anything else is
//! rejected by the conversation layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Grade level of the curriculum (Turkish high school, 9 through 12).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    Nine,
    Ten,
    Eleven,
    Twelve,
}

impl Grade {
    /// All grades in selection order.
    pub const ALL: [Grade; 4] = [Grade::Nine, Grade::Ten, Grade::Eleven, Grade::Twelve];

    /// The display label, which is also the accepted input token.
    pub fn label(&self) -> &'static str {
        match self {
            Grade::Nine => "9",
            Grade::Ten => "10",
            Grade::Eleven => "11",
            Grade::Twelve => "12",
        }
    }

    /// Exact-match classification of free text into a grade.
    pub fn from_input(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|grade| grade.label() == text)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Subject branch of the curriculum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    Biology,
    Chemistry,
    Physics,
    Mathematics,
}

impl Subject {
    /// All subjects in selection order.
    pub const ALL: [Subject; 4] = [
        Subject::Biology,
        Subject::Chemistry,
        Subject::Physics,
        Subject::Mathematics,
    ];

    /// The Turkish display label, which is also the accepted input token.
    pub fn label(&self) -> &'static str {
        match self {
            Subject::Biology => "Biyoloji",
            Subject::Chemistry => "Kimya",
            Subject::Physics => "Fizik",
            Subject::Mathematics => "Matematik",
        }
    }

    /// Exact-match classification of free text into a subject.
    pub fn from_input(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|subject| subject.label() == text)
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
