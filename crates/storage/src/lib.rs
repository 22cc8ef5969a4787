//! Object storage collaborators for the fire-risk pipeline.
//!
//! Raster files and the model artifact live in S3-compatible object storage.
//! This crate wraps the `object_store` client and exposes the three
//! collaborators the pipeline needs: fetch a raster, fetch model bytes, and
//! persist the output raster.

pub mod object_store;
pub mod paths;
pub mod rasters;

pub use crate::object_store::{ObjectStorage, ObjectStorageConfig};
pub use paths::result_key;
pub use rasters::RasterStore;
