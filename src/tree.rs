//! Single decision tree inference
//!
//! Array-based representation mirroring sklearn's `tree_` export: parallel
//! arrays of split feature, threshold, child indices, and leaf class. The
//! tree is pre-trained in Python and serialized; this module handles
//! inference only.
//!
//! Sentinels follow sklearn: `feature == -2` marks a leaf, child index
//! `-1` marks no child. Children always point past their parent, which is
//! validated at load and makes traversal provably terminating.

use crate::error::{errors, PotabilityResult};
use serde::{Deserialize, Serialize};

/// Node arrays for one tree, as exported from sklearn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeData {
    pub feature: Vec<i32>,
    pub threshold: Vec<f64>,
    pub children_left: Vec<i32>,
    pub children_right: Vec<i32>,
    /// Majority class at each node (meaningful at leaves).
    pub class: Vec<u32>,
}

/// A decision tree classifier, immutable after load.
#[derive(Debug, Clone)]
pub struct DecisionTree {
    feature: Vec<i32>,
    threshold: Vec<f64>,
    children_left: Vec<i32>,
    children_right: Vec<i32>,
    class: Vec<u32>,
    n_features: usize,
}

impl DecisionTree {
    /// Validate node arrays and build a tree.
    ///
    /// # Errors
    ///
    /// Fails on inconsistent array lengths, an empty tree, split features
    /// outside `0..n_features`, or child pointers that do not point
    /// strictly past their parent (the sklearn layout guarantee that rules
    /// out cycles).
    pub fn from_data(data: TreeData, n_features: usize) -> PotabilityResult<Self> {
        let n = data.feature.len();
        if n == 0 {
            return Err(errors::artifact_shape("non-empty tree", "0 nodes"));
        }
        if data.threshold.len() != n
            || data.children_left.len() != n
            || data.children_right.len() != n
            || data.class.len() != n
        {
            return Err(errors::artifact_shape(
                &format!("{} entries in every node array", n),
                &format!(
                    "threshold={} left={} right={} class={}",
                    data.threshold.len(),
                    data.children_left.len(),
                    data.children_right.len(),
                    data.class.len()
                ),
            ));
        }
        for i in 0..n {
            if data.feature[i] < 0 {
                continue; // leaf
            }
            if data.feature[i] as usize >= n_features {
                return Err(errors::artifact_shape(
                    &format!("split feature < {}", n_features),
                    &format!("feature {} at node {}", data.feature[i], i),
                ));
            }
            let (l, r) = (data.children_left[i], data.children_right[i]);
            let in_range = |c: i32| c > i as i32 && (c as usize) < n;
            if !in_range(l) || !in_range(r) {
                return Err(errors::artifact_shape(
                    "child indices strictly past parent",
                    &format!("node {} has children ({}, {})", i, l, r),
                ));
            }
        }
        Ok(Self {
            feature: data.feature,
            threshold: data.threshold,
            children_left: data.children_left,
            children_right: data.children_right,
            class: data.class,
            n_features,
        })
    }

    /// Classify one sample: root-to-leaf traversal, `<= threshold` goes left.
    ///
    /// `features` must hold at least [`n_features`](Self::n_features)
    /// values; `from_data` bounds every split index below that, so a
    /// shorter slice panics rather than classifying on a made-up value.
    pub fn predict(&self, features: &[f64]) -> usize {
        let mut idx = 0usize;
        loop {
            let feat = self.feature[idx];
            if feat < 0 {
                return self.class[idx] as usize;
            }
            idx = if features[feat as usize] <= self.threshold[idx] {
                self.children_left[idx] as usize
            } else {
                self.children_right[idx] as usize
            };
        }
    }

    /// Number of nodes.
    pub fn n_nodes(&self) -> usize {
        self.feature.len()
    }

    /// Number of leaf nodes.
    pub fn n_leaves(&self) -> usize {
        self.feature.iter().filter(|f| **f < 0).count()
    }

    /// Expected feature count.
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        self.node_depth(0)
    }

    fn node_depth(&self, idx: usize) -> usize {
        if self.feature[idx] < 0 {
            return 0;
        }
        let left = self.node_depth(self.children_left[idx] as usize);
        let right = self.node_depth(self.children_right[idx] as usize);
        1 + left.max(right)
    }

    /// Export the node arrays (artifact round-trip).
    pub fn to_data(&self) -> TreeData {
        TreeData {
            feature: self.feature.clone(),
            threshold: self.threshold.clone(),
            children_left: self.children_left.clone(),
            children_right: self.children_right.clone(),
            class: self.class.clone(),
        }
    }
}
