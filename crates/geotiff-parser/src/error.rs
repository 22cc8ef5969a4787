//! Error types for GeoTIFF parsing.

use thiserror::Error;

use fire_common::FireError;

/// Errors that can occur while decoding or encoding a GeoTIFF.
#[derive(Error, Debug)]
pub enum GeoTiffError {
    /// The file is not a readable TIFF.
    #[error("failed to decode TIFF: {0}")]
    Decode(String),

    /// The image layout is one the pipeline does not handle.
    #[error("unsupported image layout: {0}")]
    Unsupported(String),

    /// Encoding the output raster failed.
    #[error("failed to encode TIFF: {0}")]
    Encode(String),
}

impl From<tiff::TiffError> for GeoTiffError {
    fn from(err: tiff::TiffError) -> Self {
        GeoTiffError::Decode(err.to_string())
    }
}

impl From<GeoTiffError> for FireError {
    fn from(err: GeoTiffError) -> Self {
        FireError::GeoTiff(err.to_string())
    }
}

/// Result type for GeoTIFF operations.
pub type Result<T> = std::result::Result<T, GeoTiffError>;
