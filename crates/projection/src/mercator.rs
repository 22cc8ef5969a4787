//! Web Mercator projection (EPSG:3857).
//!
//! Spherical Mercator as used by web tile services. Latitude is clamped to
//! the projection's valid range (~±85.05°) on the forward path; the inverse
//! is exact for any finite y.

use std::f64::consts::PI;

/// WGS84 semi-major axis used as the Web Mercator sphere radius (meters).
const EARTH_RADIUS: f64 = 6378137.0;

/// Maximum latitude representable in Web Mercator (degrees).
pub const MAX_LATITUDE: f64 = 85.05112877980659;

/// Web Mercator projection.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebMercator;

impl WebMercator {
    /// Project geographic coordinates (degrees) to Web Mercator meters.
    pub fn project(&self, lon: f64, lat: f64) -> (f64, f64) {
        let lat = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE);
        let x = EARTH_RADIUS * lon.to_radians();
        let y = EARTH_RADIUS * (PI / 4.0 + lat.to_radians() / 2.0).tan().ln();
        (x, y)
    }

    /// Unproject Web Mercator meters to geographic coordinates (degrees).
    pub fn unproject(&self, x: f64, y: f64) -> (f64, f64) {
        let lon = (x / EARTH_RADIUS).to_degrees();
        let lat = (2.0 * (y / EARTH_RADIUS).exp().atan() - PI / 2.0).to_degrees();
        (lon, lat)
    }
}
