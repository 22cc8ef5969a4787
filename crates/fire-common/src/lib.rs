//! Common types shared across the fire-risk services.

pub mod crs;
pub mod error;
pub mod geotransform;
pub mod profile;
pub mod raster;

pub use crs::CrsCode;
pub use error::{FireError, FireResult};
pub use geotransform::GeoTransform;
pub use profile::SpatialProfile;
pub use raster::Raster;
