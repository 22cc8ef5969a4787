//! Sinusoidal projection on the MODIS sphere.
//!
//! MODIS land products (NDVI, LST) are distributed on a sinusoidal grid over
//! a spherical earth of radius 6371007.181 m. The projection is equal-area:
//! x spacing shrinks with cos(latitude), y is linear in latitude.

/// Radius of the MODIS authalic sphere (meters).
const MODIS_SPHERE_RADIUS: f64 = 6371007.181;

/// Sinusoidal projection.
#[derive(Debug, Clone, Copy)]
pub struct Sinusoidal {
    /// Sphere radius in meters
    pub radius: f64,
    /// Central meridian in degrees
    pub lon0: f64,
}

impl Default for Sinusoidal {
    fn default() -> Self {
        Self::modis()
    }
}

impl Sinusoidal {
    /// The MODIS sinusoidal grid (sphere radius 6371007.181 m, central
    /// meridian 0°).
    pub fn modis() -> Self {
        Self {
            radius: MODIS_SPHERE_RADIUS,
            lon0: 0.0,
        }
    }

    /// Project geographic coordinates (degrees) to sinusoidal meters.
    pub fn project(&self, lon: f64, lat: f64) -> (f64, f64) {
        let lat_rad = lat.to_radians();
        let dlon_rad = (lon - self.lon0).to_radians();
        let x = self.radius * dlon_rad * lat_rad.cos();
        let y = self.radius * lat_rad;
        (x, y)
    }

    /// Unproject sinusoidal meters to geographic coordinates (degrees).
    ///
    /// Returns non-finite longitude for points at the poles or outside the
    /// projection's range; callers treat non-finite output as unmappable.
    pub fn unproject(&self, x: f64, y: f64) -> (f64, f64) {
        let lat_rad = y / self.radius;
        let lon = self.lon0 + (x / (self.radius * lat_rad.cos())).to_degrees();
        (lon, lat_rad.to_degrees())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equator_is_linear_in_longitude() {
        let proj = Sinusoidal::modis();
        let (x, y) = proj.project(90.0, 0.0);
        // Quarter of the sphere circumference
        assert!((x - MODIS_SPHERE_RADIUS * std::f64::consts::FRAC_PI_2).abs() < 1e-3);
        assert!(y.abs() < 1e-9);
    }

    #[test]
    fn test_roundtrip() {
        let proj = Sinusoidal::modis();
        for &(lon, lat) in &[(-71.0, -33.5), (10.0, 45.0), (145.0, -20.0)] {
            let (x, y) = proj.project(lon, lat);
            let (lon2, lat2) = proj.unproject(x, y);
            assert!((lon - lon2).abs() < 1e-9, "lon {} vs {}", lon, lon2);
            assert!((lat - lat2).abs() < 1e-9, "lat {} vs {}", lat, lat2);
        }
    }

    #[test]
    fn test_modis_tile_corner() {
        // MODIS tile h11v11 upper-left corner (approximately 20°S..30°S,
        // crossing South America): x of the tile grid is well inside the
        // projection's finite range.
        let proj = Sinusoidal::modis();
        let (lon, lat) = proj.unproject(-6671703.118, -2223901.039);
        assert!(lat < -19.9 && lat > -20.1);
        assert!(lon.is_finite());
    }
}
