//! Coordinate Reference System codes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coordinate reference systems the pipeline knows how to transform.
///
/// The MODIS products the pipeline consumes live on the sinusoidal grid;
/// geographic and Web Mercator cover resampled distribution copies. Anything
/// else decodes as `Other` and is rejected at alignment time, not at
/// ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CrsCode {
    /// WGS84 Geographic (lat/lon in degrees)
    Epsg4326,
    /// Web Mercator (meters)
    Epsg3857,
    /// MODIS sinusoidal grid (meters, spherical earth)
    Sinusoidal,
    /// Unrecognized CRS, carrying the raw EPSG code
    Other(u32),
}

impl CrsCode {
    /// Map an EPSG code to a known CRS.
    pub fn from_epsg(code: u32) -> Self {
        match code {
            4326 => CrsCode::Epsg4326,
            3857 | 900913 => CrsCode::Epsg3857,
            _ => CrsCode::Other(code),
        }
    }

    /// Check if this is a geographic (lat/lon in degrees) CRS.
    pub fn is_geographic(&self) -> bool {
        matches!(self, CrsCode::Epsg4326)
    }
}

impl fmt::Display for CrsCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrsCode::Epsg4326 => write!(f, "EPSG:4326"),
            CrsCode::Epsg3857 => write!(f, "EPSG:3857"),
            CrsCode::Sinusoidal => write!(f, "MODIS:Sinusoidal"),
            CrsCode::Other(code) => write!(f, "EPSG:{}", code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_epsg() {
        assert_eq!(CrsCode::from_epsg(4326), CrsCode::Epsg4326);
        assert_eq!(CrsCode::from_epsg(900913), CrsCode::Epsg3857);
        assert_eq!(CrsCode::from_epsg(32719), CrsCode::Other(32719));
    }

    #[test]
    fn test_display() {
        assert_eq!(CrsCode::Epsg4326.to_string(), "EPSG:4326");
        assert_eq!(CrsCode::Other(32719).to_string(), "EPSG:32719");
        assert_eq!(CrsCode::Sinusoidal.to_string(), "MODIS:Sinusoidal");
    }
}
