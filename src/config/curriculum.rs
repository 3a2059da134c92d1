//! Curriculum data configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Curriculum data configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CurriculumConfig {
    /// Path to the JSON objective table
    #[serde(default = "default_data_path")]
    pub data_path: String,
}

impl CurriculumConfig {
    /// Validate curriculum configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.data_path.trim().is_empty() {
            return Err(ValidationError::MissingRequired("curriculum.data_path"));
        }
        Ok(())
    }
}

impl Default for CurriculumConfig {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
        }
    }
}

fn default_data_path() -> String {
    "data/kazanimlar.json".to_string()
}
