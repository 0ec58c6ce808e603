//! Water Potability Inference
//!
//! Inference-only library for water potability classification.
//!
//! ## Architecture
//! - **Training**: Done in Python (scikit-learn): fit a per-feature scaler
//!   and a random forest on the potability dataset, then export both as JSON
//! - **Inference**: Done in Rust; artifacts are loaded once at startup into
//!   an [`InferenceContext`] and shared read-only for the process lifetime
//!
//! ## Pipeline
//! - Assemble nine named measurements into a fixed-order feature vector
//! - Apply the pre-fitted scaling transform per feature
//! - Majority vote across the forest; confidence is the fraction of trees
//!   voting for the winning class
//!
//! The feature order is a contract shared with the training side; see
//! [`sample::FEATURE_NAMES`]. Models are loaded from JSON files exported by
//! the Python training scripts.

pub mod classifier;
pub mod context;
pub mod error;
pub mod forest;
pub mod sample;
pub mod scaler;
pub mod tree;

// Re-exports for convenience
pub use classifier::{Label, PotabilityClassifier, Verdict};
pub use context::InferenceContext;
pub use error::{PotabilityError, PotabilityResult};
pub use forest::RandomForest;
pub use sample::WaterSample;
pub use scaler::StandardScaler;
