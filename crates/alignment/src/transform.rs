//! CRS pair resolution.

use fire_common::{CrsCode, FireError, FireResult};
use projection::{Projection, Sinusoidal, WebMercator};

/// A resolved coordinate transformation from one CRS to another.
///
/// Conversion goes through geographic degrees as the hub. Resolution happens
/// once per alignment; an unknown CRS on either side is a configuration
/// error, not something to retry.
#[derive(Debug, Clone, Copy)]
pub struct CoordTransform {
    from: Projection,
    to: Projection,
}

impl CoordTransform {
    /// Resolve the transformation from `from` to `to`.
    pub fn new(from: CrsCode, to: CrsCode) -> FireResult<Self> {
        let resolve = |crs: CrsCode| -> Option<Projection> {
            match crs {
                CrsCode::Epsg4326 => Some(Projection::Geographic),
                CrsCode::Epsg3857 => Some(Projection::Mercator(WebMercator)),
                CrsCode::Sinusoidal => Some(Projection::Sinusoidal(Sinusoidal::modis())),
                CrsCode::Other(_) => None,
            }
        };

        match (resolve(from), resolve(to)) {
            (Some(f), Some(t)) => Ok(Self { from: f, to: t }),
            _ => Err(FireError::Reprojection {
                source_crs: from.to_string(),
                destination_crs: to.to_string(),
            }),
        }
    }

    /// Convert a world coordinate from the source CRS to the target CRS.
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        let (lon, lat) = self.from.to_geographic(x, y);
        self.to.from_geographic(lon, lat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_crs_is_identity() {
        let t = CoordTransform::new(CrsCode::Epsg4326, CrsCode::Epsg4326).unwrap();
        let (x, y) = t.apply(-70.5, -33.2);
        assert!((x - -70.5).abs() < 1e-12);
        assert!((y - -33.2).abs() < 1e-12);
    }

    #[test]
    fn test_sinusoidal_to_geographic() {
        let t = CoordTransform::new(CrsCode::Sinusoidal, CrsCode::Epsg4326).unwrap();
        let back = CoordTransform::new(CrsCode::Epsg4326, CrsCode::Sinusoidal).unwrap();

        let (lon, lat) = t.apply(-6000000.0, -3500000.0);
        assert!(lon.is_finite() && lat.is_finite());

        let (x, y) = back.apply(lon, lat);
        assert!((x - -6000000.0).abs() < 1e-3);
        assert!((y - -3500000.0).abs() < 1e-3);
    }

    #[test]
    fn test_unknown_crs_is_a_reprojection_error() {
        let err = CoordTransform::new(CrsCode::Other(32719), CrsCode::Epsg4326).unwrap_err();
        assert!(matches!(err, FireError::Reprojection { .. }));

        let err = CoordTransform::new(CrsCode::Epsg4326, CrsCode::Other(2154)).unwrap_err();
        assert!(matches!(err, FireError::Reprojection { .. }));
    }
}
