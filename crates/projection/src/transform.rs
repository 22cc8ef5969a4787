//! Projection dispatch over the supported coordinate systems.

use crate::mercator::WebMercator;
use crate::sinusoidal::Sinusoidal;

/// A projection between world coordinates and geographic degrees.
///
/// `Geographic` is the identity: its world coordinates already are
/// longitude/latitude in degrees.
#[derive(Debug, Clone, Copy)]
pub enum Projection {
    Geographic,
    Mercator(WebMercator),
    Sinusoidal(Sinusoidal),
}

impl Projection {
    /// Convert world coordinates in this projection to (lon, lat) degrees.
    pub fn to_geographic(&self, x: f64, y: f64) -> (f64, f64) {
        match self {
            Projection::Geographic => (x, y),
            Projection::Mercator(p) => p.unproject(x, y),
            Projection::Sinusoidal(p) => p.unproject(x, y),
        }
    }

    /// Convert (lon, lat) degrees to world coordinates in this projection.
    pub fn from_geographic(&self, lon: f64, lat: f64) -> (f64, f64) {
        match self {
            Projection::Geographic => (lon, lat),
            Projection::Mercator(p) => p.project(lon, lat),
            Projection::Sinusoidal(p) => p.project(lon, lat),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geographic_is_identity() {
        let p = Projection::Geographic;
        assert_eq!(p.to_geographic(-70.5, -33.2), (-70.5, -33.2));
        assert_eq!(p.from_geographic(-70.5, -33.2), (-70.5, -33.2));
    }

    #[test]
    fn test_cross_projection_roundtrip() {
        let sin = Projection::Sinusoidal(Sinusoidal::modis());
        let merc = Projection::Mercator(WebMercator);

        let (lon, lat) = (-71.2, -34.8);
        let (sx, sy) = sin.from_geographic(lon, lat);
        let (lon2, lat2) = sin.to_geographic(sx, sy);
        let (mx, my) = merc.from_geographic(lon2, lat2);
        let (lon3, lat3) = merc.to_geographic(mx, my);

        assert!((lon - lon3).abs() < 1e-6);
        assert!((lat - lat3).abs() < 1e-6);
    }
}
