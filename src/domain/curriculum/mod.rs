//! Curriculum vocabularies and the objective lookup table.

mod table;
mod vocabulary;

pub use table::{CurriculumTable, LookupOutcome, RawTable, TableBuildError};
pub use vocabulary::{Grade, Subject};
