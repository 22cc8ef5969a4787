//! Feature assembly, classification and probability-map reconstruction.
//!
//! The stages here are pure synchronous functions over aligned rasters:
//! stack layers into per-pixel feature vectors behind a validity mask, run a
//! pretrained binary classifier over the valid rows, and scatter the
//! resulting probabilities back onto the full grid with NaN where the mask
//! was false. Row-major scan order over the mask is the single ordering
//! contract tying the feature matrix, the prediction vector and the output
//! raster together.

pub mod classifier;
pub mod features;
pub mod gbdt;
pub mod reconstruct;

pub use classifier::Classifier;
pub use features::{assemble, FeatureMatrix, FeatureSet};
pub use gbdt::GbdtModel;
pub use reconstruct::reconstruct;
