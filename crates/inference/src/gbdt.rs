//! Gradient-boosted decision tree classifier.
//!
//! Evaluates a pretrained binary GBDT ensemble serialized as JSON: each tree
//! contributes a leaf value to the margin, the margin goes through a sigmoid,
//! and the configured class channel is extracted. The artifact is produced
//! offline by the training side; this module only deserializes and evaluates.

use serde::Deserialize;
use tracing::info;

use fire_common::{FireError, FireResult};

use crate::classifier::Classifier;
use crate::features::FeatureMatrix;

/// One node of a decision tree.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum Node {
    Split {
        feature: usize,
        threshold: f32,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f32,
    },
}

/// A single decision tree, nodes indexed into a flat array, root at 0.
#[derive(Debug, Clone, Deserialize)]
struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    // Child indices are strictly increasing (checked at load), so the walk
    // always terminates.
    fn evaluate(&self, row: &[f32]) -> f32 {
        let mut index = 0;
        loop {
            match &self.nodes[index] {
                Node::Leaf { value } => return *value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    index = if row[*feature] < *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
    }
}

/// The serialized model artifact.
#[derive(Debug, Clone, Deserialize)]
struct GbdtArtifact {
    /// Number of feature columns the model was trained on
    feature_count: usize,
    /// Margin before any tree contributes (log-odds space)
    #[serde(default)]
    base_score: f32,
    trees: Vec<Tree>,
}

/// A pretrained binary GBDT classifier.
///
/// The model conceptually exposes two class-probability channels per row;
/// which one is "positive" is a property of how the model was trained, so it
/// is explicit configuration validated at construction rather than inferred
/// at runtime.
#[derive(Debug)]
pub struct GbdtModel {
    artifact: GbdtArtifact,
    positive_class: usize,
}

/// Output arity of a binary classifier.
const CLASS_CHANNELS: usize = 2;

impl GbdtModel {
    /// Deserialize a model artifact and fix the positive-class channel.
    pub fn from_bytes(bytes: &[u8], positive_class: usize) -> FireResult<Self> {
        let artifact: GbdtArtifact = serde_json::from_slice(bytes)
            .map_err(|e| FireError::Model(format!("failed to deserialize model: {}", e)))?;

        if artifact.feature_count == 0 || artifact.trees.is_empty() {
            return Err(FireError::Model(
                "model has no features or no trees".to_string(),
            ));
        }

        for tree in &artifact.trees {
            for (index, node) in tree.nodes.iter().enumerate() {
                if let Node::Split { feature, left, right, .. } = node {
                    if *feature >= artifact.feature_count
                        || *left >= tree.nodes.len()
                        || *right >= tree.nodes.len()
                    {
                        return Err(FireError::Model(
                            "model references out-of-range feature or node".to_string(),
                        ));
                    }
                    // The flat layout stores children after their parent;
                    // anything else could loop during evaluation.
                    if *left <= index || *right <= index {
                        return Err(FireError::Model(
                            "model tree child node does not come after its parent".to_string(),
                        ));
                    }
                }
            }
        }

        if positive_class >= CLASS_CHANNELS {
            return Err(FireError::Model(format!(
                "positive class index {} out of range for {} class channels",
                positive_class, CLASS_CHANNELS
            )));
        }

        info!(
            trees = artifact.trees.len(),
            feature_count = artifact.feature_count,
            positive_class,
            "Loaded GBDT model"
        );

        Ok(Self {
            artifact,
            positive_class,
        })
    }

    fn probability(&self, row: &[f32]) -> f32 {
        let margin: f32 = self.artifact.base_score
            + self
                .artifact
                .trees
                .iter()
                .map(|tree| tree.evaluate(row))
                .sum::<f32>();
        let positive = sigmoid(margin);
        // Channel 0 is the negative class, channel 1 the positive class.
        if self.positive_class == 1 {
            positive
        } else {
            1.0 - positive
        }
    }
}

impl Classifier for GbdtModel {
    fn feature_count(&self) -> usize {
        self.artifact.feature_count
    }

    fn predict(&self, features: &FeatureMatrix) -> FireResult<Vec<f32>> {
        if features.cols() != self.artifact.feature_count {
            return Err(FireError::FeatureShapeMismatch {
                expected: self.artifact.feature_count,
                actual: features.cols(),
            });
        }

        Ok((0..features.rows())
            .map(|i| self.probability(features.row(i)))
            .collect())
    }
}

fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}
