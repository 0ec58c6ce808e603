//! Pre-fitted feature scaler
//!
//! Inference-only implementation. Fitting is done in Python (scikit-learn);
//! the learned center and scale vectors are exported as JSON and loaded
//! here. One parameterization covers both families seen in training:
//! `StandardScaler` exports (mean, std), min-max exports (min, range),
//! and either way the transform is `(x - center) / scale` per feature.

use crate::error::{errors, PotabilityResult};
use crate::sample::{FEATURE_NAMES, N_FEATURES};
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Per-feature linear scaling transform, immutable after load.
#[derive(Debug, Clone)]
pub struct StandardScaler {
    center: Array1<f64>,
    scale: Array1<f64>,
}

/// Model data for JSON serialization
#[derive(Debug, Serialize, Deserialize)]
pub struct ScalerData {
    pub algorithm: String,
    pub feature_names: Vec<String>,
    pub center: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    /// Build a scaler from center and scale vectors (contract order).
    ///
    /// # Errors
    ///
    /// Fails if either vector does not have exactly nine entries, or any
    /// scale entry is zero or non-finite.
    pub fn from_parameters(center: Vec<f64>, scale: Vec<f64>) -> PotabilityResult<Self> {
        if center.len() != N_FEATURES || scale.len() != N_FEATURES {
            return Err(errors::artifact_shape(
                &format!("{} center/scale entries", N_FEATURES),
                &format!("{} center, {} scale", center.len(), scale.len()),
            ));
        }
        if scale.iter().any(|s| *s == 0.0 || !s.is_finite()) {
            return Err(errors::artifact_shape(
                "finite non-zero scale entries",
                "zero or non-finite scale",
            ));
        }
        Ok(Self {
            center: Array1::from_vec(center),
            scale: Array1::from_vec(scale),
        })
    }

    /// Apply the fixed transform: `(x - center) / scale` per feature.
    ///
    /// # Errors
    ///
    /// Fails if the input vector is not nine elements long.
    pub fn transform(&self, features: &[f64]) -> PotabilityResult<Vec<f64>> {
        if features.len() != N_FEATURES {
            return Err(errors::inference_error(
                "scale",
                &format!("expected {} features, got {}", N_FEATURES, features.len()),
            ));
        }
        let x = Array1::from_vec(features.to_vec());
        let scaled = (&x - &self.center) / &self.scale;
        Ok(scaled.to_vec())
    }

    /// Save scaler parameters to JSON
    pub fn to_json(&self) -> PotabilityResult<String> {
        let data = ScalerData {
            algorithm: "standard_scaler".to_string(),
            feature_names: FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
            center: self.center.to_vec(),
            scale: self.scale.to_vec(),
        };
        serde_json::to_string_pretty(&data)
            .map_err(|e| errors::inference_error("serialize scaler", &e.to_string()))
    }

    /// Load scaler parameters from JSON (no refitting needed)
    ///
    /// The artifact's `feature_names`, when present, must match the
    /// contract order exactly. A reordered export would silently corrupt
    /// every prediction, so it is rejected at load time.
    pub fn from_json(json: &str) -> PotabilityResult<Self> {
        let data: ScalerData = serde_json::from_str(json)
            .map_err(|e| errors::invalid_json("scaler", &e.to_string()))?;

        if !data.feature_names.is_empty() {
            let expected: Vec<&str> = FEATURE_NAMES.to_vec();
            let actual: Vec<&str> = data.feature_names.iter().map(|s| s.as_str()).collect();
            if actual != expected {
                return Err(errors::artifact_shape(
                    &format!("feature order {:?}", expected),
                    &format!("{:?}", actual),
                ));
            }
        }

        Self::from_parameters(data.center, data.scale)
    }
}
