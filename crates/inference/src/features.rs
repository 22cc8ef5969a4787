//! Feature assembly from aligned raster layers.

use tracing::debug;

use fire_common::{FireError, FireResult, Raster, SpatialProfile};

/// A dense row-major feature matrix: one row per valid pixel, one column per
/// layer.
#[derive(Debug, Clone)]
pub struct FeatureMatrix {
    values: Vec<f32>,
    rows: usize,
    cols: usize,
}

impl FeatureMatrix {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn row(&self, i: usize) -> &[f32] {
        &self.values[i * self.cols..(i + 1) * self.cols]
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }
}

/// Aligned layers stacked into inference inputs.
#[derive(Debug, Clone)]
pub struct FeatureSet {
    /// The common grid of all layers (the alignment reference grid).
    pub profile: SpatialProfile,
    /// True where every layer has a finite value.
    pub mask: Vec<bool>,
    /// One row per true-mask pixel, in row-major scan order of the grid.
    pub features: FeatureMatrix,
}

impl FeatureSet {
    /// Number of valid pixels.
    pub fn valid_count(&self) -> usize {
        self.features.rows
    }
}

/// Stack aligned layers into a [`FeatureSet`].
///
/// All layers must share the reference grid shape (guaranteed by the
/// aligner's output contract; a mismatch here is an upstream bug). A pixel
/// is valid only if **every** layer is finite there. Rows are emitted in
/// row-major scan order over the mask — the same traversal
/// [`reconstruct`](crate::reconstruct) uses to scatter predictions back.
pub fn assemble(layers: &[&Raster]) -> FireResult<FeatureSet> {
    let first = layers
        .first()
        .ok_or_else(|| FireError::Internal("assemble called with no layers".to_string()))?;
    let profile = first.profile().clone();

    for layer in &layers[1..] {
        if layer.width() != profile.width || layer.height() != profile.height {
            return Err(FireError::ShapeMismatch {
                expected: profile.shape_string(),
                actual: layer.profile().shape_string(),
            });
        }
    }

    let pixel_count = profile.len();
    let cols = layers.len();

    let mut mask = vec![false; pixel_count];
    let mut values = Vec::new();
    let mut rows = 0;

    for i in 0..pixel_count {
        let valid = layers.iter().all(|layer| layer.data()[i].is_finite());
        if valid {
            mask[i] = true;
            for layer in layers {
                values.push(layer.data()[i]);
            }
            rows += 1;
        }
    }

    if rows == 0 {
        return Err(FireError::NoValidPixels);
    }

    debug!(
        layers = cols,
        valid_pixels = rows,
        total_pixels = pixel_count,
        "Assembled feature matrix"
    );

    Ok(FeatureSet {
        profile,
        mask,
        features: FeatureMatrix { values, rows, cols },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{geographic_profile, test_raster};

    fn raster_with_nan_block(width: usize, height: usize) -> Raster {
        let mut data: Vec<f32> = (0..width * height).map(|i| i as f32).collect();
        // 2x2 block at rows 1..3, cols 1..3
        for row in 1..3 {
            for col in 1..3 {
                data[row * width + col] = f32::NAN;
            }
        }
        let profile = geographic_profile(width, height, 0.0, height as f64, 1.0);
        Raster::from_normalized(profile, data).unwrap()
    }

    #[test]
    fn test_mask_is_universal_and() {
        let full = test_raster(4, 4);
        let holed = raster_with_nan_block(4, 4);

        let set = assemble(&[&holed, &full]).unwrap();

        assert_eq!(set.mask.iter().filter(|m| **m).count(), 12);
        assert_eq!(set.features.rows(), 12);
        assert_eq!(set.features.cols(), 2);
        assert!(!set.mask[5] && !set.mask[6] && !set.mask[9] && !set.mask[10]);
    }

    #[test]
    fn test_rows_follow_row_major_scan_order() {
        let full = test_raster(2, 2);
        let mut data = vec![10.0, f32::NAN, 30.0, 40.0];
        data[1] = f32::NAN;
        let holed =
            Raster::from_normalized(geographic_profile(2, 2, 0.0, 2.0, 1.0), data).unwrap();

        let set = assemble(&[&holed, &full]).unwrap();
        assert_eq!(set.features.rows(), 3);
        // Valid pixels in scan order: index 0, 2, 3.
        assert_eq!(set.features.row(0), &[10.0, full.data()[0]]);
        assert_eq!(set.features.row(1), &[30.0, full.data()[2]]);
        assert_eq!(set.features.row(2), &[40.0, full.data()[3]]);
    }

    #[test]
    fn test_shape_mismatch() {
        let a = test_raster(4, 4);
        let b = test_raster(3, 4);
        let err = assemble(&[&a, &b]).unwrap_err();
        assert!(matches!(err, FireError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_no_valid_pixels() {
        let profile = geographic_profile(2, 2, 0.0, 2.0, 1.0);
        let all_nan = Raster::from_normalized(profile, vec![f32::NAN; 4]).unwrap();
        let full = test_raster(2, 2);

        let err = assemble(&[&all_nan, &full]).unwrap_err();
        assert!(matches!(err, FireError::NoValidPixels));
    }
}
