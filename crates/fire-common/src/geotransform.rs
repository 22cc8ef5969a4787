//! Affine geotransform mapping pixel indices to world coordinates.

use serde::{Deserialize, Serialize};

/// Affine transformation coefficients for georeferencing a raster.
///
/// Converts between pixel coordinates (col, row) and world coordinates (x, y):
/// ```text
/// x = origin_x + col * pixel_width + row * row_rotation
/// y = origin_y + col * col_rotation + row * pixel_height
/// ```
///
/// For north-up rasters `row_rotation` and `col_rotation` are 0 and
/// `pixel_height` is negative. The origin is the outer corner of pixel
/// (0, 0); pixel-center methods add the half-pixel offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoTransform {
    /// X coordinate of the upper-left corner
    pub origin_x: f64,
    /// Y coordinate of the upper-left corner
    pub origin_y: f64,
    /// Pixel width (cell size in X direction)
    pub pixel_width: f64,
    /// Pixel height (cell size in Y direction, usually negative)
    pub pixel_height: f64,
    /// Rotation term applied to rows (usually 0)
    pub row_rotation: f64,
    /// Rotation term applied to columns (usually 0)
    pub col_rotation: f64,
}

impl GeoTransform {
    /// Create a north-up transform with no rotation.
    pub fn new(origin_x: f64, origin_y: f64, pixel_width: f64, pixel_height: f64) -> Self {
        Self {
            origin_x,
            origin_y,
            pixel_width,
            pixel_height,
            row_rotation: 0.0,
            col_rotation: 0.0,
        }
    }

    /// Create from a GDAL-style coefficient array
    /// `[origin_x, pixel_width, row_rotation, origin_y, col_rotation, pixel_height]`.
    pub fn from_gdal(coeffs: [f64; 6]) -> Self {
        Self {
            origin_x: coeffs[0],
            pixel_width: coeffs[1],
            row_rotation: coeffs[2],
            origin_y: coeffs[3],
            col_rotation: coeffs[4],
            pixel_height: coeffs[5],
        }
    }

    /// Convert to a GDAL-style coefficient array.
    pub fn to_gdal(&self) -> [f64; 6] {
        [
            self.origin_x,
            self.pixel_width,
            self.row_rotation,
            self.origin_y,
            self.col_rotation,
            self.pixel_height,
        ]
    }

    /// World coordinates of the center of pixel (col, row).
    ///
    /// `col` and `row` are fractional pixel indices in center convention:
    /// (0.0, 0.0) is the center of the top-left pixel.
    pub fn pixel_to_world(&self, col: f64, row: f64) -> (f64, f64) {
        let c = col + 0.5;
        let r = row + 0.5;
        let x = self.origin_x + c * self.pixel_width + r * self.row_rotation;
        let y = self.origin_y + c * self.col_rotation + r * self.pixel_height;
        (x, y)
    }

    /// Fractional pixel indices (center convention) for a world coordinate.
    ///
    /// Inverse of [`pixel_to_world`](Self::pixel_to_world). Returns `None`
    /// when the transform is singular (zero determinant).
    pub fn world_to_pixel(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        let det = self.pixel_width * self.pixel_height - self.row_rotation * self.col_rotation;
        if det == 0.0 {
            return None;
        }

        let dx = x - self.origin_x;
        let dy = y - self.origin_y;

        let c = (dx * self.pixel_height - dy * self.row_rotation) / det;
        let r = (dy * self.pixel_width - dx * self.col_rotation) / det;

        Some((c - 0.5, r - 0.5))
    }

    /// A transform with zero pixel size cannot georeference anything.
    pub fn is_degenerate(&self) -> bool {
        let det = self.pixel_width * self.pixel_height - self.row_rotation * self.col_rotation;
        det == 0.0 || !det.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_center_roundtrip() {
        let gt = GeoTransform::new(-180.0, 90.0, 0.25, -0.25);

        let (x, y) = gt.pixel_to_world(0.0, 0.0);
        assert!((x - (-179.875)).abs() < 1e-9);
        assert!((y - 89.875).abs() < 1e-9);

        let (c, r) = gt.world_to_pixel(x, y).unwrap();
        assert!(c.abs() < 1e-9);
        assert!(r.abs() < 1e-9);
    }

    #[test]
    fn test_roundtrip_with_rotation() {
        let gt = GeoTransform {
            origin_x: 1000.0,
            origin_y: 2000.0,
            pixel_width: 30.0,
            pixel_height: -30.0,
            row_rotation: 1.5,
            col_rotation: -0.5,
        };

        let (x, y) = gt.pixel_to_world(7.0, 11.0);
        let (c, r) = gt.world_to_pixel(x, y).unwrap();
        assert!((c - 7.0).abs() < 1e-9);
        assert!((r - 11.0).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_transform() {
        let gt = GeoTransform::new(0.0, 0.0, 0.0, -1.0);
        assert!(gt.is_degenerate());
        assert!(gt.world_to_pixel(1.0, 1.0).is_none());

        let ok = GeoTransform::new(0.0, 0.0, 1.0, -1.0);
        assert!(!ok.is_degenerate());
    }

    #[test]
    fn test_gdal_array_roundtrip() {
        let coeffs = [-20015109.354, 926.625, 0.0, 10007554.677, 0.0, -926.625];
        let gt = GeoTransform::from_gdal(coeffs);
        assert_eq!(gt.to_gdal(), coeffs);
    }
}
