//! Spatial profiles describing a raster's grid.

use serde::{Deserialize, Serialize};

use crate::crs::CrsCode;
use crate::error::{FireError, FireResult};
use crate::geotransform::GeoTransform;

/// Georeferencing metadata for a single-band raster: grid shape, affine
/// transform, coordinate system and the raw nodata convention of the file
/// it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpatialProfile {
    /// Coordinate reference system, if the source file declared one
    pub crs: Option<CrsCode>,
    /// Affine pixel-to-world transform
    pub transform: GeoTransform,
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
    /// Raw nodata value of the source encoding, if declared
    pub nodata: Option<f64>,
}

impl SpatialProfile {
    pub fn new(
        crs: Option<CrsCode>,
        transform: GeoTransform,
        width: usize,
        height: usize,
        nodata: Option<f64>,
    ) -> Self {
        Self {
            crs,
            transform,
            width,
            height,
            nodata,
        }
    }

    /// Total number of pixels.
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// `"{width}x{height}"`, used in shape-mismatch diagnostics.
    pub fn shape_string(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }

    /// Check that this profile can take part in an alignment.
    ///
    /// Alignment needs both a CRS and an invertible transform; a profile
    /// missing either cannot be placed in the world.
    pub fn validate_for_alignment(&self) -> FireResult<&CrsCode> {
        if self.is_empty() {
            return Err(FireError::InvalidSpatialProfile(format!(
                "empty grid ({})",
                self.shape_string()
            )));
        }
        if self.transform.is_degenerate() {
            return Err(FireError::InvalidSpatialProfile(
                "degenerate affine transform".to_string(),
            ));
        }
        self.crs
            .as_ref()
            .ok_or_else(|| FireError::InvalidSpatialProfile("missing CRS".to_string()))
    }

    /// The same grid without a raw nodata convention.
    ///
    /// Output rasters mark missing pixels with NaN directly, so the
    /// destination profile carries no raw nodata value.
    pub fn without_nodata(&self) -> Self {
        Self {
            nodata: None,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(crs: Option<CrsCode>) -> SpatialProfile {
        SpatialProfile::new(crs, GeoTransform::new(0.0, 10.0, 1.0, -1.0), 4, 4, None)
    }

    #[test]
    fn test_validate_requires_crs() {
        let p = profile(None);
        assert!(matches!(
            p.validate_for_alignment(),
            Err(FireError::InvalidSpatialProfile(_))
        ));

        let p = profile(Some(CrsCode::Epsg4326));
        assert_eq!(p.validate_for_alignment().unwrap(), &CrsCode::Epsg4326);
    }

    #[test]
    fn test_validate_rejects_degenerate_transform() {
        let mut p = profile(Some(CrsCode::Epsg4326));
        p.transform = GeoTransform::new(0.0, 10.0, 0.0, -1.0);
        assert!(p.validate_for_alignment().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_grid() {
        let mut p = profile(Some(CrsCode::Epsg4326));
        p.width = 0;
        assert!(p.validate_for_alignment().is_err());
    }
}
