//! Error types for the potability inference library

use std::fmt;

/// Unified error type for the library
#[derive(Debug)]
pub enum PotabilityError {
    /// Artifact loading or initialization error
    ArtifactLoad { path: String, source: String },
    /// Artifact file missing
    FileNotFound { path: String },
    /// Invalid JSON in an artifact file
    InvalidJson { path: String, source: String },
    /// Artifact contents inconsistent with the feature contract
    ArtifactShape { expected: String, actual: String },
    /// User input missing a field, or a field that does not parse as a number
    MissingOrInvalidField { field: String, detail: String },
    /// Inference error (dimension mismatch at classify time)
    Inference { operation: String, source: String },
}

impl fmt::Display for PotabilityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PotabilityError::ArtifactLoad { path, source } => {
                write!(f, "Failed to load artifact from '{}': {}", path, source)
            }
            PotabilityError::FileNotFound { path } => {
                write!(f, "Artifact file not found: {}", path)
            }
            PotabilityError::InvalidJson { path, source } => {
                write!(f, "Invalid JSON in '{}': {}", path, source)
            }
            PotabilityError::ArtifactShape { expected, actual } => {
                write!(
                    f,
                    "Artifact shape mismatch: expected {}, got {}",
                    expected, actual
                )
            }
            PotabilityError::MissingOrInvalidField { field, detail } => {
                write!(f, "Field '{}' missing or invalid: {}", field, detail)
            }
            PotabilityError::Inference { operation, source } => {
                write!(f, "Inference error during '{}': {}", operation, source)
            }
        }
    }
}

impl std::error::Error for PotabilityError {}

/// Result type alias using PotabilityError
pub type PotabilityResult<T> = Result<T, PotabilityError>;

/// Helper functions for creating errors
pub mod errors {
    use super::PotabilityError;

    pub fn artifact_load(path: &str, source: &str) -> PotabilityError {
        PotabilityError::ArtifactLoad {
            path: path.to_string(),
            source: source.to_string(),
        }
    }

    pub fn file_not_found(path: &str) -> PotabilityError {
        PotabilityError::FileNotFound {
            path: path.to_string(),
        }
    }

    pub fn invalid_json(path: &str, source: &str) -> PotabilityError {
        PotabilityError::InvalidJson {
            path: path.to_string(),
            source: source.to_string(),
        }
    }

    pub fn artifact_shape(expected: &str, actual: &str) -> PotabilityError {
        PotabilityError::ArtifactShape {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    pub fn missing_or_invalid_field(field: &str, detail: &str) -> PotabilityError {
        PotabilityError::MissingOrInvalidField {
            field: field.to_string(),
            detail: detail.to_string(),
        }
    }

    pub fn inference_error(operation: &str, source: &str) -> PotabilityError {
        PotabilityError::Inference {
            operation: operation.to_string(),
            source: source.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_error_names_the_field() {
        let err = errors::missing_or_invalid_field("Sulfate", "empty value");
        let msg = err.to_string();
        assert!(msg.contains("Sulfate"));
        assert!(msg.contains("empty value"));
    }

    #[test]
    fn file_not_found_display() {
        let err = errors::file_not_found("/models/forest.json");
        assert!(err.to_string().contains("/models/forest.json"));
    }
}
