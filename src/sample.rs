//! Water sample feature vector assembly
//!
//! Nine named measurements make up a sample. Their order is a contract
//! shared with the Python training side: the scaler and forest were fitted
//! on columns in exactly this order, so [`WaterSample::to_vector`] must
//! never reorder them. Field names match the dataset column names,
//! including the lowercase `ph`.

use crate::error::{errors, PotabilityResult};
use std::collections::HashMap;

/// Feature names in training column order. Index i of every feature vector
/// in this crate corresponds to FEATURE_NAMES[i].
pub const FEATURE_NAMES: [&str; 9] = [
    "ph",
    "Hardness",
    "Solids",
    "Chloramines",
    "Sulfate",
    "Conductivity",
    "Organic_carbon",
    "Trihalomethanes",
    "Turbidity",
];

/// Number of features per sample.
pub const N_FEATURES: usize = FEATURE_NAMES.len();

/// Advisory metadata for one feature: unit and typical range.
///
/// Used for CLI help text and diagnostics only. Ranges are hints from the
/// dataset, never enforced before scaling.
#[derive(Debug, Clone, Copy)]
pub struct FeatureSpec {
    pub name: &'static str,
    pub unit: &'static str,
    pub typical_range: (f64, f64),
}

/// Per-feature advisory table, in contract order.
pub const FEATURE_SPECS: [FeatureSpec; 9] = [
    FeatureSpec { name: "ph", unit: "pH", typical_range: (0.0, 14.0) },
    FeatureSpec { name: "Hardness", unit: "mg/L", typical_range: (47.0, 323.0) },
    FeatureSpec { name: "Solids", unit: "ppm", typical_range: (320.0, 61227.0) },
    FeatureSpec { name: "Chloramines", unit: "ppm", typical_range: (0.35, 13.1) },
    FeatureSpec { name: "Sulfate", unit: "mg/L", typical_range: (129.0, 481.0) },
    FeatureSpec { name: "Conductivity", unit: "uS/cm", typical_range: (181.0, 753.0) },
    FeatureSpec { name: "Organic_carbon", unit: "ppm", typical_range: (2.2, 28.3) },
    FeatureSpec { name: "Trihalomethanes", unit: "ug/L", typical_range: (0.74, 124.0) },
    FeatureSpec { name: "Turbidity", unit: "NTU", typical_range: (1.45, 6.74) },
];

/// A fully validated water sample.
///
/// Construction goes through [`WaterSample::from_form`] (string input with
/// per-field validation) or the plain struct literal when values are
/// already numeric.
#[derive(Debug, Clone, PartialEq)]
pub struct WaterSample {
    pub ph: f64,
    pub hardness: f64,
    pub solids: f64,
    pub chloramines: f64,
    pub sulfate: f64,
    pub conductivity: f64,
    pub organic_carbon: f64,
    pub trihalomethanes: f64,
    pub turbidity: f64,
}

impl WaterSample {
    /// Assemble a sample from form-style string fields.
    ///
    /// Every field in [`FEATURE_NAMES`] is mandatory. A missing key, an
    /// empty (or whitespace-only) value, or a value that does not parse as
    /// a number fails with a `MissingOrInvalidField` error naming that
    /// field. No partial sample is ever produced.
    pub fn from_form(fields: &HashMap<String, String>) -> PotabilityResult<Self> {
        let mut values = [0.0f64; N_FEATURES];
        for (i, name) in FEATURE_NAMES.iter().enumerate() {
            let raw = fields
                .get(*name)
                .ok_or_else(|| errors::missing_or_invalid_field(name, "field is required"))?;
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Err(errors::missing_or_invalid_field(name, "field is required"));
            }
            values[i] = trimmed.parse::<f64>().map_err(|_| {
                errors::missing_or_invalid_field(name, &format!("'{}' is not a number", trimmed))
            })?;
        }
        Ok(Self::from_ordered(&values))
    }

    /// Build a sample from nine values already in contract order.
    pub fn from_ordered(values: &[f64; N_FEATURES]) -> Self {
        Self {
            ph: values[0],
            hardness: values[1],
            solids: values[2],
            chloramines: values[3],
            sulfate: values[4],
            conductivity: values[5],
            organic_carbon: values[6],
            trihalomethanes: values[7],
            turbidity: values[8],
        }
    }

    /// Emit the feature vector in contract order.
    pub fn to_vector(&self) -> Vec<f64> {
        vec![
            self.ph,
            self.hardness,
            self.solids,
            self.chloramines,
            self.sulfate,
            self.conductivity,
            self.organic_carbon,
            self.trihalomethanes,
            self.turbidity,
        ]
    }
}
