//! HTTP server for the fire probability service.
//!
//! Endpoints:
//! - `POST /predict` - run the pipeline for a pair of input layers
//! - `GET /health` - health check

use std::sync::Arc;

use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use tracing::{error, info};

use crate::pipeline::{FirePipeline, PredictRequest};

/// Structured failure response, one `kind` per error in the taxonomy.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: &'static str,
}

pub fn router(pipeline: Arc<FirePipeline>) -> Router {
    Router::new()
        .route("/predict", post(predict))
        .route("/health", get(health))
        .with_state(pipeline)
}

/// Serve until the process is stopped.
pub async fn serve(pipeline: Arc<FirePipeline>, listen_addr: &str) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(listen_addr).await?;
    info!(addr = %listen_addr, "fire-api listening");
    axum::serve(listener, router(pipeline)).await?;
    Ok(())
}

async fn predict(
    State(pipeline): State<Arc<FirePipeline>>,
    Json(request): Json<PredictRequest>,
) -> impl IntoResponse {
    match pipeline.run(&request).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(err) => {
            error!(kind = err.kind(), error = %err, "Pipeline request failed");
            let status = StatusCode::from_u16(err.http_status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            let body = ErrorResponse {
                error: err.to_string(),
                kind: err.kind(),
            };
            (status, Json(body)).into_response()
        }
    }
}

async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}
