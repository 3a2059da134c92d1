//! Curriculum objective lookup table.
//!
//! The table is constructed once at startup from an external source and is
//! immutable afterwards. Lookup misses at any level are normal negative
//! results, never errors; the conversation layer decides the wording.

use std::collections::HashMap;
use thiserror::Error;

use super::{Grade, Subject};
use crate::domain::schedule::WEEKS_PER_YEAR;

/// Raw table shape as externally maintained: subject label, grade label,
/// week number (stringified), objective text.
pub type RawTable = HashMap<String, HashMap<String, HashMap<String, String>>>;

/// Result of a curriculum lookup.
///
/// Tagged so the presentation layer owns the final wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOutcome<'a> {
    /// The stored objective text, verbatim.
    Found(&'a str),
    /// The subject/grade combination has no entries at all.
    SubjectGradeMissing,
    /// The subject/grade exists but has no objective for this week.
    WeekMissing,
}

/// Errors raised while building a table from raw external data.
#[derive(Debug, Clone, Error)]
pub enum TableBuildError {
    #[error("Unknown subject key: '{0}'")]
    UnknownSubject(String),

    #[error("Unknown grade key '{grade}' under subject '{subject}'")]
    UnknownGrade { subject: String, grade: String },

    #[error("Invalid week key '{week}' under {subject}/{grade}")]
    InvalidWeek {
        subject: String,
        grade: String,
        week: String,
    },
}

/// Immutable mapping from (subject, grade, week) to objective text.
#[derive(Debug, Clone, Default)]
pub struct CurriculumTable {
    entries: HashMap<(Subject, Grade), HashMap<u8, String>>,
}

impl CurriculumTable {
    /// Creates an empty table (degraded mode: every lookup misses).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a typed table from the raw string-keyed shape.
    ///
    /// # Errors
    ///
    /// - `UnknownSubject` / `UnknownGrade` if a key is outside the fixed
    ///   vocabularies
    /// - `InvalidWeek` if a week key is not an integer in [1, 40]
    pub fn from_raw(raw: RawTable) -> Result<Self, TableBuildError> {
        let mut entries: HashMap<(Subject, Grade), HashMap<u8, String>> = HashMap::new();

        for (subject_key, grades) in raw {
            let subject = Subject::from_input(&subject_key)
                .ok_or_else(|| TableBuildError::UnknownSubject(subject_key.clone()))?;

            for (grade_key, weeks) in grades {
                let grade =
                    Grade::from_input(&grade_key).ok_or_else(|| TableBuildError::UnknownGrade {
                        subject: subject_key.clone(),
                        grade: grade_key.clone(),
                    })?;

                let mut objectives = HashMap::new();
                for (week_key, objective) in weeks {
                    let week = week_key
                        .parse::<u8>()
                        .ok()
                        .filter(|week| (1..=WEEKS_PER_YEAR).contains(week))
                        .ok_or_else(|| TableBuildError::InvalidWeek {
                            subject: subject_key.clone(),
                            grade: grade_key.clone(),
                            week: week_key.clone(),
                        })?;
                    objectives.insert(week, objective);
                }

                entries.insert((subject, grade), objectives);
            }
        }

        Ok(Self { entries })
    }

    /// Looks up the objective for a subject, grade, and week.
    pub fn lookup(&self, subject: Subject, grade: Grade, week: u8) -> LookupOutcome<'_> {
        match self.entries.get(&(subject, grade)) {
            None => LookupOutcome::SubjectGradeMissing,
            Some(objectives) => match objectives.get(&week) {
                Some(text) => LookupOutcome::Found(text),
                None => LookupOutcome::WeekMissing,
            },
        }
    }

    /// Number of (subject, grade) combinations with entries.
    pub fn combination_count(&self) -> usize {
        self.entries.len()
    }

    /// Total number of stored objectives.
    pub fn objective_count(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }
}
