//! The classifier port.

use fire_common::FireResult;

use crate::features::FeatureMatrix;

/// A pretrained binary classifier producing positive-class probabilities.
///
/// This is the pipeline's abstraction boundary to the model: implementations
/// own deserialization and evaluation, the pipeline only relies on the
/// contract that output row `i` is the probability for input row `i`
/// (no reordering) and that values lie in [0, 1].
pub trait Classifier: Send + Sync {
    /// Number of feature columns the model was trained on.
    fn feature_count(&self) -> usize;

    /// Predict the positive-class probability for every row.
    ///
    /// Fails with `FeatureShapeMismatch` if the matrix's column count does
    /// not match [`feature_count`](Self::feature_count).
    fn predict(&self, features: &FeatureMatrix) -> FireResult<Vec<f32>>;
}
