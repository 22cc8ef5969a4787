//! Coordinate reference system transformations.
//!
//! Implements map projections from scratch without external dependencies.
//! All projections convert between projected world coordinates and
//! geographic coordinates (longitude/latitude in degrees), which act as the
//! hub for CRS-pair transformations.

pub mod mercator;
pub mod sinusoidal;
pub mod transform;

pub use mercator::WebMercator;
pub use sinusoidal::Sinusoidal;
pub use transform::Projection;
