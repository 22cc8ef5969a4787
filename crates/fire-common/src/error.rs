//! Error types for the fire-risk services.

use thiserror::Error;

/// Result type alias using FireError.
pub type FireResult<T> = Result<T, FireError>;

/// Primary error type for the alignment and inference pipeline.
///
/// No stage retries internally: every failure here is a deterministic
/// function of its input, so it propagates unmodified to the orchestrator,
/// which surfaces it as a structured failure response.
#[derive(Debug, Error)]
pub enum FireError {
    // === Request Errors ===
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    #[error("Invalid parameter value for '{param}': {message}")]
    InvalidParameter { param: String, message: String },

    // === Alignment Errors ===
    #[error("Invalid spatial profile: {0}")]
    InvalidSpatialProfile(String),

    #[error("Cannot reproject from {source_crs} to {destination_crs}")]
    Reprojection {
        source_crs: String,
        destination_crs: String,
    },

    // === Feature / Inference Errors ===
    #[error("Shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch { expected: String, actual: String },

    #[error("No valid pixels available for inference")]
    NoValidPixels,

    #[error("Feature shape mismatch: model expects {expected} columns, matrix has {actual}")]
    FeatureShapeMismatch { expected: usize, actual: usize },

    // === Collaborator Errors ===
    #[error("GeoTIFF error: {0}")]
    GeoTiff(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Model error: {0}")]
    Model(String),

    // === Infrastructure Errors ===
    #[error("Internal error: {0}")]
    Internal(String),
}

impl FireError {
    /// Short machine-readable kind for structured failure responses.
    pub fn kind(&self) -> &'static str {
        match self {
            FireError::MissingParameter(_) | FireError::InvalidParameter { .. } => {
                "invalid_request"
            }
            FireError::InvalidSpatialProfile(_) => "invalid_spatial_profile",
            FireError::Reprojection { .. } => "reprojection_error",
            FireError::ShapeMismatch { .. } => "shape_mismatch",
            FireError::NoValidPixels => "no_valid_pixels",
            FireError::FeatureShapeMismatch { .. } => "feature_shape_mismatch",
            FireError::GeoTiff(_) => "geotiff_error",
            FireError::Storage(_) => "storage_error",
            FireError::Model(_) => "model_error",
            FireError::Internal(_) => "internal_error",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            FireError::MissingParameter(_) | FireError::InvalidParameter { .. } => 400,

            // Legitimate-but-unusable input, not a bug.
            FireError::NoValidPixels
            | FireError::InvalidSpatialProfile(_)
            | FireError::Reprojection { .. }
            | FireError::GeoTiff(_) => 422,

            _ => 500,
        }
    }
}

// Conversion from common error types
impl From<std::io::Error> for FireError {
    fn from(err: std::io::Error) -> Self {
        FireError::Internal(err.to_string())
    }
}

impl From<serde_json::Error> for FireError {
    fn from(err: serde_json::Error) -> Self {
        FireError::Internal(format!("JSON error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            FireError::MissingParameter("ndvi_key".into()).http_status_code(),
            400
        );
        assert_eq!(FireError::NoValidPixels.http_status_code(), 422);
        assert_eq!(
            FireError::Reprojection {
                source_crs: "EPSG:4326".into(),
                destination_crs: "EPSG:99999".into(),
            }
            .http_status_code(),
            422
        );
        assert_eq!(
            FireError::FeatureShapeMismatch {
                expected: 2,
                actual: 3
            }
            .http_status_code(),
            500
        );
    }

    #[test]
    fn test_kinds_are_distinct_per_taxonomy() {
        let errors = [
            FireError::MissingParameter("x".into()),
            FireError::InvalidSpatialProfile("no crs".into()),
            FireError::Reprojection {
                source_crs: "a".into(),
                destination_crs: "b".into(),
            },
            FireError::ShapeMismatch {
                expected: "4x4".into(),
                actual: "3x4".into(),
            },
            FireError::NoValidPixels,
            FireError::FeatureShapeMismatch {
                expected: 2,
                actual: 1,
            },
        ];

        let kinds: std::collections::HashSet<_> = errors.iter().map(|e| e.kind()).collect();
        assert_eq!(kinds.len(), errors.len());
    }
}
