//! Service configuration.

use clap::Parser;
use serde::Deserialize;

use alignment::{Resampling, UnitConversion};
use storage::ObjectStorageConfig;

/// Which input layer provides the alignment reference grid.
///
/// The other layer is reprojected onto this layer's grid. This is an
/// explicit configuration choice: the trained model's feature order does not
/// change with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceLayer {
    /// Align onto the temperature layer's grid (default, matches the
    /// deployed model's training data).
    Temperature,
    /// Align onto the vegetation layer's grid.
    Vegetation,
}

/// Command line / environment configuration for the service.
#[derive(Debug, Clone, Parser)]
#[command(name = "fire-api")]
#[command(about = "Wildfire probability map service")]
pub struct ServiceConfig {
    /// Address to listen on in server mode
    #[arg(long, env = "FIRE_LISTEN_ADDR", default_value = "0.0.0.0:8080")]
    pub listen_addr: String,

    /// S3/MinIO endpoint URL
    #[arg(long, env = "FIRE_S3_ENDPOINT", default_value = "http://minio:9000")]
    pub s3_endpoint: String,

    /// S3 access key
    #[arg(long, env = "FIRE_S3_ACCESS_KEY", default_value = "minioadmin")]
    pub s3_access_key: String,

    /// S3 secret key
    #[arg(long, env = "FIRE_S3_SECRET_KEY", default_value = "minioadmin")]
    pub s3_secret_key: String,

    /// S3 region
    #[arg(long, env = "FIRE_S3_REGION", default_value = "us-east-1")]
    pub s3_region: String,

    /// Allow plain-HTTP storage endpoints (local MinIO)
    #[arg(long, env = "FIRE_S3_ALLOW_HTTP", default_value_t = true)]
    pub s3_allow_http: bool,

    /// Storage key of the model artifact (fixed per deployment, never
    /// request-supplied)
    #[arg(long, env = "FIRE_MODEL_KEY", default_value = "model/fire_gbdt.json")]
    pub model_key: String,

    /// Class-probability channel holding the positive (fire) class
    #[arg(long, env = "FIRE_POSITIVE_CLASS", default_value_t = 1)]
    pub positive_class: usize,

    /// Resampling policy for grid alignment
    #[arg(long, env = "FIRE_RESAMPLING", default_value = "bilinear", value_parser = parse_resampling)]
    pub resampling: Resampling,

    /// Which layer's grid is the alignment reference
    #[arg(long, env = "FIRE_REFERENCE_LAYER", default_value = "temperature", value_parser = parse_reference_layer)]
    pub reference_layer: ReferenceLayer,

    /// Scale of the temperature layer's raw encoding
    #[arg(long, env = "FIRE_LST_SCALE", default_value_t = 0.02)]
    pub lst_scale: f64,

    /// Offset of the temperature layer's raw encoding
    #[arg(long, env = "FIRE_LST_OFFSET", default_value_t = -273.15)]
    pub lst_offset: f64,

    /// Run a single request from the command line and exit (server mode
    /// otherwise)
    #[arg(long)]
    pub once: bool,

    /// Bucket for --once mode
    #[arg(long, requires = "once")]
    pub bucket: Option<String>,

    /// Vegetation (NDVI) layer key for --once mode
    #[arg(long, requires = "once")]
    pub ndvi_key: Option<String>,

    /// Temperature (LST) layer key for --once mode
    #[arg(long, requires = "once")]
    pub lst_key: Option<String>,

    /// Log level
    #[arg(long, env = "FIRE_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Emit logs as JSON
    #[arg(long, env = "FIRE_LOG_JSON", default_value_t = false)]
    pub log_json: bool,
}

fn parse_resampling(s: &str) -> Result<Resampling, String> {
    match s.to_lowercase().as_str() {
        "bilinear" => Ok(Resampling::Bilinear),
        "nearest" => Ok(Resampling::Nearest),
        other => Err(format!("unknown resampling policy: {}", other)),
    }
}

fn parse_reference_layer(s: &str) -> Result<ReferenceLayer, String> {
    match s.to_lowercase().as_str() {
        "temperature" | "lst" => Ok(ReferenceLayer::Temperature),
        "vegetation" | "ndvi" => Ok(ReferenceLayer::Vegetation),
        other => Err(format!("unknown reference layer: {}", other)),
    }
}

impl ServiceConfig {
    pub fn storage_config(&self) -> ObjectStorageConfig {
        ObjectStorageConfig {
            endpoint: self.s3_endpoint.clone(),
            access_key_id: self.s3_access_key.clone(),
            secret_access_key: self.s3_secret_key.clone(),
            region: self.s3_region.clone(),
            allow_http: self.s3_allow_http,
        }
    }

    /// Conversion applied to the temperature layer before alignment.
    pub fn lst_conversion(&self) -> UnitConversion {
        UnitConversion::new(self.lst_scale, self.lst_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::parse_from(["fire-api"]);
        assert_eq!(config.model_key, "model/fire_gbdt.json");
        assert_eq!(config.positive_class, 1);
        assert_eq!(config.resampling, Resampling::Bilinear);
        assert_eq!(config.lst_conversion(), UnitConversion::modis_lst_to_celsius());
        assert_eq!(config.reference_layer, ReferenceLayer::Temperature);
    }

    #[test]
    fn test_once_mode_flags() {
        let config = ServiceConfig::parse_from([
            "fire-api",
            "--once",
            "--bucket",
            "fire-data",
            "--ndvi-key",
            "inputs/ndvi.tif",
            "--lst-key",
            "inputs/lst.tif",
        ]);
        assert!(config.once);
        assert_eq!(config.bucket.as_deref(), Some("fire-data"));
    }

    #[test]
    fn test_resampling_parser() {
        assert_eq!(parse_resampling("NEAREST").unwrap(), Resampling::Nearest);
        assert!(parse_resampling("cubic").is_err());
    }

    #[test]
    fn test_reference_layer_parser() {
        assert_eq!(
            parse_reference_layer("ndvi").unwrap(),
            ReferenceLayer::Vegetation
        );
        assert!(parse_reference_layer("elevation").is_err());
    }
}
