//! Curriculum source port.
//!
//! A collaborator provides the externally-maintained objective table once
//! at startup. Load failures are recoverable: the caller degrades to an
//! empty table and the process still starts.

use thiserror::Error;

use crate::domain::curriculum::CurriculumTable;

/// Errors raised while loading curriculum data.
#[derive(Debug, Clone, Error)]
pub enum CurriculumSourceError {
    /// The source is missing or unreadable.
    #[error("Curriculum data unavailable: {0}")]
    DataUnavailable(String),

    /// The source exists but its content is not a valid table.
    #[error("Curriculum data malformed: {0}")]
    DataMalformed(String),
}

/// Source port for the curriculum objective table.
pub trait CurriculumSource: Send + Sync {
    /// Loads the full table.
    ///
    /// # Errors
    ///
    /// - `DataUnavailable` on a missing or unreadable source
    /// - `DataMalformed` on content that does not parse or validate
    fn load(&self) -> Result<CurriculumTable, CurriculumSourceError>;
}
