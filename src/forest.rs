//! Random forest inference
//!
//! Inference-only implementation. Training is done in Python (scikit-learn);
//! the fitted forest is exported as JSON and loaded here. Prediction is a
//! majority vote across trees; confidence is the fraction of trees voting
//! for the winning class, which matches what `predict_proba` reports for a
//! hard-voting forest.

use crate::error::{errors, PotabilityResult};
use crate::tree::{DecisionTree, TreeData};
use serde::{Deserialize, Serialize};

/// A pre-fitted random forest classifier, immutable after load.
#[derive(Debug, Clone)]
pub struct RandomForest {
    trees: Vec<DecisionTree>,
    n_features: usize,
    n_classes: usize,
}

/// Outcome of one forest prediction.
#[derive(Debug, Clone)]
pub struct ForestPrediction {
    /// Winning class (majority vote).
    pub class: usize,
    /// Vote count per class.
    pub votes: Vec<usize>,
    /// Fraction of trees voting for the winning class, in [0, 1].
    pub confidence: f64,
}

/// Model data for JSON serialization
#[derive(Debug, Serialize, Deserialize)]
pub struct ForestData {
    pub algorithm: String,
    pub n_features: usize,
    pub n_classes: usize,
    pub trees: Vec<TreeData>,
}

impl RandomForest {
    /// Build a forest from pre-trained trees.
    ///
    /// # Errors
    ///
    /// Fails on an empty forest or fewer than two classes.
    pub fn from_trees(
        trees: Vec<DecisionTree>,
        n_features: usize,
        n_classes: usize,
    ) -> PotabilityResult<Self> {
        if trees.is_empty() {
            return Err(errors::artifact_shape("at least one tree", "empty forest"));
        }
        if n_classes < 2 {
            return Err(errors::artifact_shape(
                "at least two classes",
                &format!("{}", n_classes),
            ));
        }
        Ok(Self {
            trees,
            n_features,
            n_classes,
        })
    }

    /// Predict one sample with vote details.
    ///
    /// Tree votes for classes outside `0..n_classes` are ignored (a
    /// malformed artifact cannot index out of bounds here). Ties resolve
    /// to the lowest class index, matching sklearn's argmax over
    /// `predict_proba`.
    pub fn predict_with_votes(&self, features: &[f64]) -> ForestPrediction {
        let mut votes = vec![0usize; self.n_classes];
        for tree in &self.trees {
            let class = tree.predict(features);
            if class < self.n_classes {
                votes[class] += 1;
            }
        }

        // First maximum wins, so a tied vote goes to the lower class.
        let mut class = 0usize;
        for (i, &v) in votes.iter().enumerate() {
            if v > votes[class] {
                class = i;
            }
        }

        ForestPrediction {
            class,
            confidence: votes[class] as f64 / self.trees.len() as f64,
            votes,
        }
    }

    /// Predict one sample (class only).
    pub fn predict(&self, features: &[f64]) -> usize {
        self.predict_with_votes(features).class
    }

    /// Predict multiple samples.
    pub fn predict_batch(&self, samples: &[Vec<f64>]) -> Vec<usize> {
        samples.iter().map(|s| self.predict(s)).collect()
    }

    /// Number of trees.
    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }

    /// Expected feature count per sample.
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Number of output classes.
    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    /// Longest root-to-leaf path across the forest.
    pub fn max_depth(&self) -> usize {
        self.trees.iter().map(DecisionTree::depth).max().unwrap_or(0)
    }

    /// Total node count across all trees.
    pub fn total_nodes(&self) -> usize {
        self.trees.iter().map(DecisionTree::n_nodes).sum()
    }

    /// Save the forest to JSON
    pub fn to_json(&self) -> PotabilityResult<String> {
        let data = ForestData {
            algorithm: "random_forest".to_string(),
            n_features: self.n_features,
            n_classes: self.n_classes,
            trees: self.trees.iter().map(DecisionTree::to_data).collect(),
        };
        serde_json::to_string_pretty(&data)
            .map_err(|e| errors::inference_error("serialize forest", &e.to_string()))
    }

    /// Load a forest from JSON (no retraining needed)
    pub fn from_json(json: &str) -> PotabilityResult<Self> {
        let data: ForestData = serde_json::from_str(json)
            .map_err(|e| errors::invalid_json("forest", &e.to_string()))?;

        let trees = data
            .trees
            .into_iter()
            .map(|t| DecisionTree::from_data(t, data.n_features))
            .collect::<PotabilityResult<Vec<_>>>()?;

        Self::from_trees(trees, data.n_features, data.n_classes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split_on(feature: i32) -> TreeData {
        // f[feature] <= 0.5 -> class 0, else class 1
        TreeData {
            feature: vec![feature, -2, -2],
            threshold: vec![0.5, -2.0, -2.0],
            children_left: vec![1, -1, -1],
            children_right: vec![2, -1, -1],
            class: vec![0, 0, 1],
        }
    }

    fn always(class: u32) -> TreeData {
        TreeData {
            feature: vec![-2],
            threshold: vec![-2.0],
            children_left: vec![-1],
            children_right: vec![-1],
            class: vec![class],
        }
    }

    fn three_tree_forest() -> RandomForest {
        let trees = vec![
            DecisionTree::from_data(split_on(0), 2).unwrap(),
            DecisionTree::from_data(split_on(1), 2).unwrap(),
            DecisionTree::from_data(always(1), 2).unwrap(),
        ];
        RandomForest::from_trees(trees, 2, 2).unwrap()
    }

    #[test]
    fn unanimous_vote() {
        let pred = three_tree_forest().predict_with_votes(&[0.7, 0.7]);
        assert_eq!(pred.class, 1);
        assert_eq!(pred.votes, vec![0, 3]);
        assert!((pred.confidence - 1.0).abs() < 1e-12);
    }

    #[test]
    fn majority_vote_with_dissent() {
        // tree0 votes 0, tree1 and the constant tree vote 1
        let pred = three_tree_forest().predict_with_votes(&[0.3, 0.7]);
        assert_eq!(pred.class, 1);
        assert_eq!(pred.votes, vec![1, 2]);
        assert!((pred.confidence - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn batch_matches_single() {
        let forest = three_tree_forest();
        // [0.3, 0.3]: both stumps vote 0, constant tree votes 1 -> class 0.
        let preds = forest.predict_batch(&[vec![0.3, 0.3], vec![0.7, 0.7]]);
        assert_eq!(preds, vec![0, 1]);
        assert_eq!(preds[0], forest.predict(&[0.3, 0.3]));
    }

    #[test]
    fn metadata() {
        let forest = three_tree_forest();
        assert_eq!(forest.n_trees(), 3);
        assert_eq!(forest.n_classes(), 2);
        assert_eq!(forest.total_nodes(), 7);
        assert_eq!(forest.max_depth(), 1);
    }

    #[test]
    fn tied_vote_goes_to_lower_class() {
        // Even forest, one constant tree per class: sklearn's argmax over
        // predict_proba takes the first maximum, so class 0 must win.
        let trees = vec![
            DecisionTree::from_data(always(0), 2).unwrap(),
            DecisionTree::from_data(always(1), 2).unwrap(),
        ];
        let forest = RandomForest::from_trees(trees, 2, 2).unwrap();
        let pred = forest.predict_with_votes(&[0.0, 0.0]);
        assert_eq!(pred.class, 0);
        assert_eq!(pred.votes, vec![1, 1]);
        assert!((pred.confidence - 0.5).abs() < 1e-12);
    }

    #[test]
    fn empty_forest_rejected() {
        assert!(RandomForest::from_trees(vec![], 2, 2).is_err());
    }

    #[test]
    fn json_roundtrip_preserves_predictions() {
        let forest = three_tree_forest();
        let json = forest.to_json().unwrap();
        let restored = RandomForest::from_json(&json).unwrap();
        for sample in [[0.3, 0.3], [0.3, 0.7], [0.7, 0.7]] {
            assert_eq!(forest.predict(&sample), restored.predict(&sample));
        }
    }

    #[test]
    fn load_from_literal_json() {
        // Pre-trained two-tree forest
        let json = r#"{
            "algorithm": "random_forest",
            "n_features": 2,
            "n_classes": 2,
            "trees": [
                {
                    "feature": [0, -2, -2],
                    "threshold": [0.5, -2.0, -2.0],
                    "children_left": [1, -1, -1],
                    "children_right": [2, -1, -1],
                    "class": [0, 0, 1]
                },
                {
                    "feature": [-2],
                    "threshold": [-2.0],
                    "children_left": [-1],
                    "children_right": [-1],
                    "class": [1]
                }
            ]
        }"#;
        let forest = RandomForest::from_json(json).unwrap();
        assert_eq!(forest.n_trees(), 2);
        assert_eq!(forest.predict(&[0.9, 0.0]), 1);
    }

    #[test]
    fn malformed_tree_in_artifact_rejected() {
        let json = r#"{
            "algorithm": "random_forest",
            "n_features": 2,
            "n_classes": 2,
            "trees": [
                {
                    "feature": [0],
                    "threshold": [0.5],
                    "children_left": [-1],
                    "children_right": [-1],
                    "class": [0]
                }
            ]
        }"#;
        assert!(RandomForest::from_json(json).is_err());
    }
}
