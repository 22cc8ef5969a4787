//! Raster and model collaborators over object storage.

use tracing::{info, instrument};

use fire_common::{FireResult, Raster};
use geotiff_parser::{decode_geotiff, encode_geotiff};

use crate::object_store::ObjectStorage;

/// Raster source, model source and result sink in one collaborator.
///
/// Nodata normalization (raw nodata → NaN) happens inside the GeoTIFF
/// decode, before the pixels enter the pipeline.
#[derive(Clone)]
pub struct RasterStore {
    storage: ObjectStorage,
}

impl RasterStore {
    pub fn new(storage: ObjectStorage) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &ObjectStorage {
        &self.storage
    }

    /// Fetch and decode a raster.
    #[instrument(skip(self), fields(key = %key))]
    pub async fn fetch_raster(&self, key: &str) -> FireResult<Raster> {
        let bytes = self.storage.get(key).await?;
        let raster = decode_geotiff(&bytes)?;
        info!(
            location = %self.storage.url(key),
            shape = %raster.profile().shape_string(),
            valid_pixels = raster.valid_count(),
            "Loaded raster"
        );
        Ok(raster)
    }

    /// Fetch the raw serialized classifier artifact.
    #[instrument(skip(self), fields(key = %key))]
    pub async fn fetch_model_bytes(&self, key: &str) -> FireResult<Vec<u8>> {
        let bytes = self.storage.get(key).await?;
        info!(location = %self.storage.url(key), size = bytes.len(), "Loaded model artifact");
        Ok(bytes.to_vec())
    }

    /// Encode and persist an output raster, returning its location.
    #[instrument(skip(self, raster), fields(key = %key))]
    pub async fn store_raster(&self, key: &str, raster: &Raster) -> FireResult<String> {
        let bytes = encode_geotiff(raster)?;
        self.storage.put(key, bytes).await?;
        let location = self.storage.url(key);
        info!(location = %location, "Stored raster");
        Ok(location)
    }
}
