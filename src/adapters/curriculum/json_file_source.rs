//! JSON file curriculum source.
//!
//! Reads the externally-maintained objective table from a JSON file with
//! the shape `subject -> grade -> week -> objective text`, all string keys.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::curriculum::{CurriculumTable, RawTable};
use crate::ports::{CurriculumSource, CurriculumSourceError};

/// Curriculum source backed by a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Creates a source reading from the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the configured file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CurriculumSource for JsonFileSource {
    fn load(&self) -> Result<CurriculumTable, CurriculumSourceError> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            CurriculumSourceError::DataUnavailable(format!("{}: {}", self.path.display(), e))
        })?;

        let raw: RawTable = serde_json::from_str(&content)
            .map_err(|e| CurriculumSourceError::DataMalformed(e.to_string()))?;

        CurriculumTable::from_raw(raw)
            .map_err(|e| CurriculumSourceError::DataMalformed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::curriculum::{Grade, LookupOutcome, Subject};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn source_with_content(content: &str) -> (NamedTempFile, JsonFileSource) {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        let source = JsonFileSource::new(file.path());
        (file, source)
    }

    #[test]
    fn loads_a_valid_table() {
        let (_file, source) = source_with_content(
            r#"{"Matematik": {"9": {"1": "Kümelerde işlemler", "2": "Kartezyen çarpım"}}}"#,
        );

        let table = source.load().unwrap();
        assert_eq!(table.objective_count(), 2);
        assert_eq!(
            table.lookup(Subject::Mathematics, Grade::Nine, 2),
            LookupOutcome::Found("Kartezyen çarpım")
        );
    }

    #[test]
    fn missing_file_is_data_unavailable() {
        let source = JsonFileSource::new("/nonexistent/kazanimlar.json");
        assert!(matches!(
            source.load(),
            Err(CurriculumSourceError::DataUnavailable(_))
        ));
    }

    #[test]
    fn invalid_json_is_data_malformed() {
        let (_file, source) = source_with_content("{not json");
        assert!(matches!(
            source.load(),
            Err(CurriculumSourceError::DataMalformed(_))
        ));
    }

    #[test]
    fn wrong_shape_is_data_malformed() {
        let (_file, source) = source_with_content(r#"{"Matematik": ["liste"]}"#);
        assert!(matches!(
            source.load(),
            Err(CurriculumSourceError::DataMalformed(_))
        ));
    }

    #[test]
    fn unknown_vocabulary_key_is_data_malformed() {
        let (_file, source) = source_with_content(r#"{"Tarih": {"9": {"1": "x"}}}"#);
        assert!(matches!(
            source.load(),
            Err(CurriculumSourceError::DataMalformed(_))
        ));
    }

    #[test]
    fn empty_object_loads_as_empty_table() {
        let (_file, source) = source_with_content("{}");
        let table = source.load().unwrap();
        assert_eq!(table.objective_count(), 0);
    }
}
