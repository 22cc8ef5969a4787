//! Single-band GeoTIFF decoding and encoding.
//!
//! Reads the subset of GeoTIFF the pipeline needs: one band of float-coercible
//! pixels, the affine georeferencing tags (ModelPixelScale + ModelTiepoint),
//! the GeoKey directory for the CRS, and the GDAL nodata convention. Writes
//! float32 single-band output with LZW compression.
//!
//! Missing georeferencing does not fail the decode; it produces a profile
//! that alignment later rejects as invalid. A file that is not a readable
//! single-band TIFF fails here.

pub mod decode;
pub mod encode;
pub mod error;
mod keys;

pub use decode::decode_geotiff;
pub use encode::encode_geotiff;
pub use error::GeoTiffError;
