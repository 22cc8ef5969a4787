//! Grid alignment: reprojecting one raster onto another raster's grid.
//!
//! The aligner walks every destination pixel center, maps it through the
//! destination transform, a CRS-pair conversion and the inverse source
//! transform, and samples the source raster with the configured resampling
//! policy. Pixels that fall outside the source, touch a missing source pixel
//! or produce a non-finite sample come out as NaN, never as an unnormalized
//! Inf.

pub mod align;
pub mod interpolation;
pub mod transform;
pub mod units;

pub use align::align;
pub use interpolation::{bilinear_interpolate, nearest_interpolate, Resampling};
pub use transform::CoordTransform;
pub use units::UnitConversion;
