//! Scatter predictions back onto the full grid.

use fire_common::{FireError, FireResult, Raster, SpatialProfile};

/// Reconstruct a full-grid probability raster from masked predictions.
///
/// A pure scatter: the i-th true-mask pixel in row-major order receives
/// `predictions[i]`, false-mask pixels receive NaN. No resampling, no
/// coordinate transform; calling it twice with the same inputs yields
/// bit-identical output. The output profile mirrors the reference grid with
/// the raw nodata convention dropped (NaN is the sentinel).
pub fn reconstruct(
    reference: &SpatialProfile,
    mask: &[bool],
    predictions: &[f32],
) -> FireResult<Raster> {
    if mask.len() != reference.len() {
        return Err(FireError::ShapeMismatch {
            expected: format!("{} mask entries", reference.len()),
            actual: format!("{} mask entries", mask.len()),
        });
    }

    let valid = mask.iter().filter(|m| **m).count();
    if predictions.len() != valid {
        return Err(FireError::ShapeMismatch {
            expected: format!("{} predictions", valid),
            actual: format!("{} predictions", predictions.len()),
        });
    }

    let mut data = vec![f32::NAN; reference.len()];
    let mut next = 0;
    for (i, is_valid) in mask.iter().enumerate() {
        if *is_valid {
            data[i] = predictions[next];
            next += 1;
        }
    }

    Raster::from_normalized(reference.without_nodata(), data)
}
