//! In-memory single-band raster.

use crate::error::{FireError, FireResult};
use crate::profile::SpatialProfile;

/// A single-band raster: row-major f32 pixels plus the profile that places
/// them in the world.
///
/// Pixels equal to the profile's raw nodata value are normalized to NaN at
/// construction, so downstream arithmetic propagates missingness without
/// sentinel checks. Instances are immutable after construction; every
/// pipeline stage produces a new raster.
#[derive(Debug, Clone)]
pub struct Raster {
    profile: SpatialProfile,
    data: Vec<f32>,
}

impl Raster {
    /// Build a raster from raw pixels, normalizing nodata to NaN.
    pub fn new(profile: SpatialProfile, mut data: Vec<f32>) -> FireResult<Self> {
        if data.len() != profile.len() {
            return Err(FireError::ShapeMismatch {
                expected: format!("{} pixels ({})", profile.len(), profile.shape_string()),
                actual: format!("{} pixels", data.len()),
            });
        }

        if let Some(nodata) = profile.nodata {
            let nodata = nodata as f32;
            for v in &mut data {
                if *v == nodata {
                    *v = f32::NAN;
                }
            }
        }

        Ok(Self { profile, data })
    }

    /// Build a raster from pixels that are already NaN-normalized.
    ///
    /// Used by pipeline stages whose inputs went through [`Raster::new`];
    /// skips the nodata scan but still enforces the shape contract.
    pub fn from_normalized(profile: SpatialProfile, data: Vec<f32>) -> FireResult<Self> {
        if data.len() != profile.len() {
            return Err(FireError::ShapeMismatch {
                expected: format!("{} pixels ({})", profile.len(), profile.shape_string()),
                actual: format!("{} pixels", data.len()),
            });
        }
        Ok(Self { profile, data })
    }

    pub fn profile(&self) -> &SpatialProfile {
        &self.profile
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn width(&self) -> usize {
        self.profile.width
    }

    pub fn height(&self) -> usize {
        self.profile.height
    }

    /// Pixel value at (row, col). Panics if out of bounds, like slice
    /// indexing; callers iterate within the profile's shape.
    pub fn pixel(&self, row: usize, col: usize) -> f32 {
        self.data[row * self.profile.width + col]
    }

    /// Number of finite (non-missing) pixels.
    pub fn valid_count(&self) -> usize {
        self.data.iter().filter(|v| v.is_finite()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crs::CrsCode;
    use crate::geotransform::GeoTransform;

    fn profile(nodata: Option<f64>) -> SpatialProfile {
        SpatialProfile::new(
            Some(CrsCode::Epsg4326),
            GeoTransform::new(0.0, 2.0, 1.0, -1.0),
            2,
            2,
            nodata,
        )
    }

    #[test]
    fn test_nodata_normalized_to_nan() {
        let raster = Raster::new(profile(Some(-9999.0)), vec![1.0, -9999.0, 3.0, -9999.0]).unwrap();

        assert_eq!(raster.pixel(0, 0), 1.0);
        assert!(raster.pixel(0, 1).is_nan());
        assert!(raster.pixel(1, 1).is_nan());
        assert_eq!(raster.valid_count(), 2);
    }

    #[test]
    fn test_no_nodata_leaves_values_untouched() {
        let raster = Raster::new(profile(None), vec![1.0, -9999.0, 3.0, 4.0]).unwrap();
        assert_eq!(raster.pixel(0, 1), -9999.0);
        assert_eq!(raster.valid_count(), 4);
    }

    #[test]
    fn test_shape_contract() {
        let err = Raster::new(profile(None), vec![1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, FireError::ShapeMismatch { .. }));
    }
}
