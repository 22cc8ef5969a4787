//! The alignment and inference pipeline.
//!
//! One strictly sequential path per request:
//! ingest NDVI → ingest LST → convert LST units → align the non-reference
//! layer onto the reference grid → assemble features → predict → reconstruct
//! → emit. The first failing stage aborts the request; no partial output is
//! ever written.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{info, instrument};

use alignment::align;
use fire_common::{FireError, FireResult, Raster};
use inference::{assemble, reconstruct, Classifier, GbdtModel};
use storage::{result_key, ObjectStorage, RasterStore};

use crate::config::{ReferenceLayer, ServiceConfig};

/// Request body: the two input layers and the bucket holding them. The model
/// identifier is service configuration, never request-supplied.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictRequest {
    pub bucket: String,
    /// Vegetation index (NDVI) layer key
    pub ndvi_key: String,
    /// Land surface temperature (LST) layer key
    pub lst_key: String,
}

impl PredictRequest {
    /// Reject empty required fields before any pipeline stage runs.
    pub fn validate(&self) -> FireResult<()> {
        for (name, value) in [
            ("bucket", &self.bucket),
            ("ndvi_key", &self.ndvi_key),
            ("lst_key", &self.lst_key),
        ] {
            if value.trim().is_empty() {
                return Err(FireError::MissingParameter(name.to_string()));
            }
        }
        Ok(())
    }
}

/// Successful response: a human-readable message plus the three resolved
/// storage locations.
#[derive(Debug, Clone, Serialize)]
pub struct PredictResponse {
    pub message: String,
    pub input_ndvi: String,
    pub input_lst: String,
    pub output: String,
    /// Number of pixels that received a probability
    pub valid_pixels: usize,
}

/// Warm-start cache for deserialized models, keyed by storage location.
///
/// Model weights are the only state shared across requests, and they are
/// read-only once loaded.
struct ModelCache {
    models: Mutex<HashMap<String, Arc<GbdtModel>>>,
}

impl ModelCache {
    fn new() -> Self {
        Self {
            models: Mutex::new(HashMap::new()),
        }
    }

    async fn get_or_load(
        &self,
        store: &RasterStore,
        key: &str,
        positive_class: usize,
    ) -> FireResult<Arc<GbdtModel>> {
        let cache_key = store.storage().url(key);

        let mut models = self.models.lock().await;
        if let Some(model) = models.get(&cache_key) {
            return Ok(Arc::clone(model));
        }

        let bytes = store.fetch_model_bytes(key).await?;
        let model = Arc::new(GbdtModel::from_bytes(&bytes, positive_class)?);
        models.insert(cache_key, Arc::clone(&model));
        Ok(model)
    }
}

/// The pipeline orchestrator. Construct once, share behind an `Arc`.
pub struct FirePipeline {
    config: ServiceConfig,
    models: ModelCache,
}

impl FirePipeline {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            config,
            models: ModelCache::new(),
        }
    }

    /// Storage client for the request's bucket. Overridable in tests via
    /// [`run_with_store`](Self::run_with_store).
    fn store_for(&self, bucket: &str) -> FireResult<RasterStore> {
        let storage = ObjectStorage::new(&self.config.storage_config(), bucket)?;
        Ok(RasterStore::new(storage))
    }

    /// Run one request end to end.
    #[instrument(skip(self), fields(bucket = %request.bucket))]
    pub async fn run(&self, request: &PredictRequest) -> FireResult<PredictResponse> {
        request.validate()?;
        let store = self.store_for(&request.bucket)?;
        self.run_with_store(request, &store).await
    }

    /// Run one request against an explicit store (used by tests with an
    /// in-memory backend).
    pub async fn run_with_store(
        &self,
        request: &PredictRequest,
        store: &RasterStore,
    ) -> FireResult<PredictResponse> {
        request.validate()?;

        let input_ndvi = store.storage().url(&request.ndvi_key);
        let input_lst = store.storage().url(&request.lst_key);
        info!(ndvi = %input_ndvi, lst = %input_lst, "Starting fire probability pipeline");

        // Ingest both layers. Nodata is already NaN at this point.
        let ndvi = store.fetch_raster(&request.ndvi_key).await?;
        let lst_raw = store.fetch_raster(&request.lst_key).await?;

        // Convert the temperature layer's raw encoding to physical units.
        let lst = self.convert_lst(&lst_raw)?;
        drop(lst_raw);

        // Align the non-reference layer onto the reference grid. Feature
        // column order stays [temperature, vegetation] either way; it is a
        // property of the trained model, not of the reference choice.
        let (lst, ndvi) = match self.config.reference_layer {
            ReferenceLayer::Temperature => {
                let ndvi_aligned = align(&ndvi, lst.profile(), self.config.resampling)?;
                (lst, ndvi_aligned)
            }
            ReferenceLayer::Vegetation => {
                let lst_aligned = align(&lst, ndvi.profile(), self.config.resampling)?;
                (lst_aligned, ndvi)
            }
        };

        let set = assemble(&[&lst, &ndvi])?;
        info!(valid_pixels = set.valid_count(), "Assembled features");

        let model = self
            .models
            .get_or_load(store, &self.config.model_key, self.config.positive_class)
            .await?;
        let predictions = model.predict(&set.features)?;

        let probability_map = reconstruct(&set.profile, &set.mask, &predictions)?;

        let output_key = result_key(&request.lst_key);
        let output = store.store_raster(&output_key, &probability_map).await?;

        info!(output = %output, "Generated fire probability map");

        Ok(PredictResponse {
            message: "Fire probability map generated".to_string(),
            input_ndvi,
            input_lst,
            output,
            valid_pixels: set.valid_count(),
        })
    }

    fn convert_lst(&self, raster: &Raster) -> FireResult<Raster> {
        let conversion = self.config.lst_conversion();
        if conversion.is_identity() {
            return Ok(raster.clone());
        }
        conversion.apply(raster)
    }
}
