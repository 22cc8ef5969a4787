//! Resampling policies for grid alignment.

use serde::{Deserialize, Serialize};

/// How to sample the source raster at a fractional pixel location.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resampling {
    /// Weighted average of the four nearest source pixels (default).
    #[default]
    Bilinear,
    /// Value of the nearest source pixel.
    Nearest,
}

impl Resampling {
    /// Sample `data` (row-major, width × height) at fractional pixel
    /// coordinates (x = column, y = row), pixel-center convention.
    pub fn sample(&self, data: &[f32], width: usize, height: usize, x: f64, y: f64) -> f32 {
        match self {
            Resampling::Bilinear => bilinear_interpolate(data, width, height, x, y),
            Resampling::Nearest => nearest_interpolate(data, width, height, x, y),
        }
    }
}

/// Nearest neighbor interpolation.
pub fn nearest_interpolate(data: &[f32], width: usize, height: usize, x: f64, y: f64) -> f32 {
    if x < -0.5 || y < -0.5 {
        return f32::NAN;
    }

    let col = x.round() as usize;
    let row = y.round() as usize;

    if col >= width || row >= height {
        return f32::NAN;
    }

    data[row * width + col]
}

/// Bilinear interpolation.
///
/// Interpolates between the four surrounding source pixels. A missing (NaN)
/// pixel anywhere in the neighborhood makes the result missing; points
/// outside the grid are missing as well.
pub fn bilinear_interpolate(data: &[f32], width: usize, height: usize, x: f64, y: f64) -> f32 {
    if x < 0.0 || y < 0.0 || x > (width - 1) as f64 || y > (height - 1) as f64 {
        return f32::NAN;
    }

    let x0 = x.floor() as usize;
    let y0 = y.floor() as usize;
    let x1 = (x0 + 1).min(width - 1);
    let y1 = (y0 + 1).min(height - 1);

    let xf = (x - x0 as f64) as f32;
    let yf = (y - y0 as f64) as f32;

    let v00 = data[y0 * width + x0];
    let v10 = data[y0 * width + x1];
    let v01 = data[y1 * width + x0];
    let v11 = data[y1 * width + x1];

    // A missing neighbor poisons the whole sample.
    if v00.is_nan() || v10.is_nan() || v01.is_nan() || v11.is_nan() {
        return f32::NAN;
    }

    let top = v00 * (1.0 - xf) + v10 * xf;
    let bottom = v01 * (1.0 - xf) + v11 * xf;
    top * (1.0 - yf) + bottom * yf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearest_interpolate() {
        let data: Vec<f32> = vec![
            1.0, 2.0, 3.0, //
            4.0, 5.0, 6.0, //
            7.0, 8.0, 9.0,
        ];

        assert_eq!(nearest_interpolate(&data, 3, 3, 0.0, 0.0), 1.0);
        assert_eq!(nearest_interpolate(&data, 3, 3, 1.0, 1.0), 5.0);
        assert_eq!(nearest_interpolate(&data, 3, 3, 0.4, 0.4), 1.0);
        assert_eq!(nearest_interpolate(&data, 3, 3, 0.6, 0.6), 5.0);
        assert!(nearest_interpolate(&data, 3, 3, 3.0, 0.0).is_nan());
        assert!(nearest_interpolate(&data, 3, 3, -1.0, 0.0).is_nan());
    }

    #[test]
    fn test_bilinear_interpolate() {
        let data: Vec<f32> = vec![
            1.0, 2.0, //
            3.0, 4.0,
        ];

        // Corners
        assert_eq!(bilinear_interpolate(&data, 2, 2, 0.0, 0.0), 1.0);
        assert_eq!(bilinear_interpolate(&data, 2, 2, 1.0, 0.0), 2.0);
        assert_eq!(bilinear_interpolate(&data, 2, 2, 0.0, 1.0), 3.0);
        assert_eq!(bilinear_interpolate(&data, 2, 2, 1.0, 1.0), 4.0);

        // Center
        let center = bilinear_interpolate(&data, 2, 2, 0.5, 0.5);
        assert!((center - 2.5).abs() < 0.001);
    }

    #[test]
    fn test_bilinear_nan_neighbor_poisons_sample() {
        let data: Vec<f32> = vec![
            1.0, f32::NAN, //
            3.0, 4.0,
        ];

        assert!(bilinear_interpolate(&data, 2, 2, 0.5, 0.5).is_nan());
        // A sample whose neighborhood avoids the NaN pixel is unaffected.
        assert_eq!(bilinear_interpolate(&data, 2, 2, 0.0, 1.0), 3.0);
    }

    #[test]
    fn test_bilinear_outside_extent() {
        let data: Vec<f32> = vec![1.0, 2.0, 3.0, 4.0];
        assert!(bilinear_interpolate(&data, 2, 2, -0.1, 0.0).is_nan());
        assert!(bilinear_interpolate(&data, 2, 2, 0.0, 1.1).is_nan());
    }

    #[test]
    fn test_default_policy_is_bilinear() {
        assert_eq!(Resampling::default(), Resampling::Bilinear);
    }
}
