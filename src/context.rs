//! Inference context: artifacts loaded once, shared read-only
//!
//! Replaces the ambient module-level model globals of the original serving
//! scripts. The context is constructed once at process start from the two
//! artifact paths; a handler borrows it for each request. A load failure is
//! fatal to startup. There is no fallback model and no hot reload.

use crate::classifier::{PotabilityClassifier, Verdict};
use crate::error::{errors, PotabilityResult};
use crate::forest::RandomForest;
use crate::sample::WaterSample;
use crate::scaler::StandardScaler;
use std::path::Path;

/// Immutable inference state for the process lifetime.
#[derive(Debug, Clone)]
pub struct InferenceContext {
    classifier: PotabilityClassifier,
    forest_path: String,
    scaler_path: String,
}

fn read_artifact(path: &Path) -> PotabilityResult<String> {
    if !path.exists() {
        return Err(errors::file_not_found(&path.display().to_string()));
    }
    std::fs::read_to_string(path)
        .map_err(|e| errors::artifact_load(&path.display().to_string(), &e.to_string()))
}

impl InferenceContext {
    /// Load both artifacts and build the classifier.
    ///
    /// # Errors
    ///
    /// Any failure (missing file, unreadable file, invalid JSON, shape
    /// mismatch between the artifacts and the nine-feature contract) is
    /// returned as a descriptive error; callers treat it as fatal.
    pub fn load<P: AsRef<Path>>(forest_path: P, scaler_path: P) -> PotabilityResult<Self> {
        let forest_path = forest_path.as_ref();
        let scaler_path = scaler_path.as_ref();

        let forest_json = read_artifact(forest_path)?;
        let forest = RandomForest::from_json(&forest_json)
            .map_err(|e| errors::artifact_load(&forest_path.display().to_string(), &e.to_string()))?;

        let scaler_json = read_artifact(scaler_path)?;
        let scaler = StandardScaler::from_json(&scaler_json)
            .map_err(|e| errors::artifact_load(&scaler_path.display().to_string(), &e.to_string()))?;

        let classifier = PotabilityClassifier::new(scaler, forest)?;

        Ok(Self {
            classifier,
            forest_path: forest_path.display().to_string(),
            scaler_path: scaler_path.display().to_string(),
        })
    }

    /// Classify a validated sample.
    pub fn classify(&self, sample: &WaterSample) -> PotabilityResult<Verdict> {
        self.classifier.classify(sample)
    }

    /// The composed classifier.
    pub fn classifier(&self) -> &PotabilityClassifier {
        &self.classifier
    }

    /// Path the forest artifact was loaded from.
    pub fn forest_path(&self) -> &str {
        &self.forest_path
    }

    /// Path the scaler artifact was loaded from.
    pub fn scaler_path(&self) -> &str {
        &self.scaler_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_forest_file_is_fatal() {
        let err = InferenceContext::load(
            Path::new("/nonexistent/forest.json"),
            Path::new("/nonexistent/scaler.json"),
        )
        .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/forest.json"));
    }
}
