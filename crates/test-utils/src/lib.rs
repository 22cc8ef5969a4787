//! Shared test fixtures for the fire-risk workspace.

pub mod generators;

pub use generators::{
    create_ndvi_grid, create_temperature_grid, create_test_grid, geographic_profile,
    sinusoidal_profile, test_raster,
};
