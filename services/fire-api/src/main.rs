//! Wildfire probability map service.
//!
//! Aligns a vegetation index raster onto a land-surface-temperature grid,
//! runs a pretrained classifier over the valid pixels and writes a
//! probability GeoTIFF back to object storage. Runs as an HTTP service or a
//! single-shot CLI (`--once`).

use std::sync::Arc;

use anyhow::{bail, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use fire_api::config::ServiceConfig;
use fire_api::pipeline::{FirePipeline, PredictRequest};
use fire_api::server;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServiceConfig::parse();

    init_tracing(&config)?;

    info!(
        model_key = %config.model_key,
        resampling = ?config.resampling,
        reference_layer = ?config.reference_layer,
        "Starting fire-api"
    );

    let once = config.once;
    let listen_addr = config.listen_addr.clone();
    let request = single_shot_request(&config);

    let pipeline = Arc::new(FirePipeline::new(config));

    if once {
        let Some(request) = request else {
            bail!("--once requires --bucket, --ndvi-key and --lst-key");
        };
        let response = pipeline.run(&request).await?;
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    server::serve(pipeline, &listen_addr).await
}

fn single_shot_request(config: &ServiceConfig) -> Option<PredictRequest> {
    Some(PredictRequest {
        bucket: config.bucket.clone()?,
        ndvi_key: config.ndvi_key.clone()?,
        lst_key: config.lst_key.clone()?,
    })
}

fn init_tracing(config: &ServiceConfig) -> Result<()> {
    let level = match config.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true);

    if config.log_json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }

    Ok(())
}
