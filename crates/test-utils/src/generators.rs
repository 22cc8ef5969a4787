//! Test data generators for synthetic rasters.
//!
//! These generators create predictable, verifiable pixel patterns used
//! across the test suite.

use fire_common::{CrsCode, GeoTransform, Raster, SpatialProfile};

/// Creates a test grid with predictable values.
///
/// Each cell value is `col * 1000 + row`, so a test can verify that a pixel
/// ended up in the right place by inspecting its value.
pub fn create_test_grid(width: usize, height: usize) -> Vec<f32> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            data.push((col * 1000 + row) as f32);
        }
    }
    data
}

/// Creates a grid of raw MODIS-style LST encodings (unitless counts).
///
/// Values decode to roughly 0..40 °C under the standard `*0.02 - 273.15`
/// conversion, as a gradient from the top-left to the bottom-right.
pub fn create_temperature_grid(width: usize, height: usize) -> Vec<f32> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            let x_factor = col as f32 / width.max(1) as f32;
            let y_factor = row as f32 / height.max(1) as f32;
            // 13657.5 decodes to 0 °C; +1000 counts spans 20 °C.
            data.push(13657.5 + x_factor * 1000.0 + y_factor * 1000.0);
        }
    }
    data
}

/// Creates a grid of NDVI-like values in [-0.2, 0.9].
pub fn create_ndvi_grid(width: usize, height: usize) -> Vec<f32> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            let x_factor = col as f32 / width.max(1) as f32;
            let y_factor = row as f32 / height.max(1) as f32;
            data.push(-0.2 + (x_factor + y_factor) / 2.0 * 1.1);
        }
    }
    data
}

/// A north-up geographic (EPSG:4326) profile.
///
/// `origin_x`/`origin_y` are the coordinates of the upper-left corner and
/// `resolution` the pixel size in degrees.
pub fn geographic_profile(
    width: usize,
    height: usize,
    origin_x: f64,
    origin_y: f64,
    resolution: f64,
) -> SpatialProfile {
    SpatialProfile::new(
        Some(CrsCode::Epsg4326),
        GeoTransform::new(origin_x, origin_y, resolution, -resolution),
        width,
        height,
        None,
    )
}

/// A MODIS sinusoidal profile with the given upper-left corner in meters.
pub fn sinusoidal_profile(
    width: usize,
    height: usize,
    origin_x: f64,
    origin_y: f64,
    resolution: f64,
) -> SpatialProfile {
    SpatialProfile::new(
        Some(CrsCode::Sinusoidal),
        GeoTransform::new(origin_x, origin_y, resolution, -resolution),
        width,
        height,
        None,
    )
}

/// A geographic raster with `create_test_grid` pixels, 1° resolution,
/// upper-left corner at (0°, height°).
pub fn test_raster(width: usize, height: usize) -> Raster {
    let profile = geographic_profile(width, height, 0.0, height as f64, 1.0);
    Raster::from_normalized(profile, create_test_grid(width, height))
        .expect("generator shape is consistent")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_values_encode_position() {
        let grid = create_test_grid(10, 5);
        assert_eq!(grid.len(), 50);
        assert_eq!(grid[0], 0.0); // col=0, row=0
        assert_eq!(grid[1], 1000.0); // col=1, row=0
        assert_eq!(grid[10], 1.0); // col=0, row=1
    }

    #[test]
    fn test_temperature_grid_decodes_to_plausible_celsius() {
        let grid = create_temperature_grid(4, 4);
        for raw in grid {
            let celsius = raw * 0.02 - 273.15;
            assert!((-5.0..=45.0).contains(&celsius), "got {} °C", celsius);
        }
    }

    #[test]
    fn test_ndvi_grid_range() {
        let grid = create_ndvi_grid(8, 8);
        assert!(grid.iter().all(|v| (-0.2..=0.9).contains(v)));
    }
}
