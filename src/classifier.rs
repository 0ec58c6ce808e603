//! Scored classifier: scaler composed with the forest
//!
//! The one real contract in the system: a nine-element feature vector in
//! contract order is scaled by the pre-fitted transform, then classified by
//! the pre-fitted forest. Deterministic given fixed artifacts: no
//! randomness, no retraining, no mutation after construction.

use crate::error::{errors, PotabilityResult};
use crate::forest::RandomForest;
use crate::sample::{WaterSample, N_FEATURES};
use crate::scaler::StandardScaler;
use std::fmt;

/// Classification label. Potable is the positive class (1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    NotPotable,
    Potable,
}

impl Label {
    /// Map a forest class index to a label.
    pub fn from_class(class: usize) -> Self {
        if class == 1 {
            Label::Potable
        } else {
            Label::NotPotable
        }
    }

    /// Class index this label corresponds to.
    pub fn class(self) -> usize {
        match self {
            Label::NotPotable => 0,
            Label::Potable => 1,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::NotPotable => write!(f, "not potable"),
            Label::Potable => write!(f, "potable"),
        }
    }
}

/// Classification result for one sample
#[derive(Debug, Clone)]
pub struct Verdict {
    /// Predicted label
    pub label: Label,
    /// Fraction of trees voting for the winning class, in [0, 1]
    pub confidence: f64,
    /// Vote count per class (index 0 = not potable, 1 = potable)
    pub votes: Vec<usize>,
}

/// Pre-fitted scaler + forest, the full inference pipeline.
#[derive(Debug, Clone)]
pub struct PotabilityClassifier {
    scaler: StandardScaler,
    forest: RandomForest,
}

impl PotabilityClassifier {
    /// Compose a scaler and a forest.
    ///
    /// # Errors
    ///
    /// Fails if the forest was not fitted on nine features or is not a
    /// binary classifier; either means the artifacts do not belong to
    /// this pipeline.
    pub fn new(scaler: StandardScaler, forest: RandomForest) -> PotabilityResult<Self> {
        if forest.n_features() != N_FEATURES {
            return Err(errors::artifact_shape(
                &format!("forest fitted on {} features", N_FEATURES),
                &format!("{}", forest.n_features()),
            ));
        }
        if forest.n_classes() != 2 {
            return Err(errors::artifact_shape(
                "binary forest",
                &format!("{} classes", forest.n_classes()),
            ));
        }
        Ok(Self { scaler, forest })
    }

    /// Classify a validated sample.
    pub fn classify(&self, sample: &WaterSample) -> PotabilityResult<Verdict> {
        self.classify_vector(&sample.to_vector())
    }

    /// Classify a raw nine-element vector already in contract order.
    pub fn classify_vector(&self, features: &[f64]) -> PotabilityResult<Verdict> {
        let scaled = self.scaler.transform(features)?;
        let pred = self.forest.predict_with_votes(&scaled);
        Ok(Verdict {
            label: Label::from_class(pred.class),
            confidence: pred.confidence,
            votes: pred.votes,
        })
    }

    /// The underlying forest (metadata for diagnostics).
    pub fn forest(&self) -> &RandomForest {
        &self.forest
    }
}
