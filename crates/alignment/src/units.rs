//! Per-layer unit conversions.

use serde::{Deserialize, Serialize};

use fire_common::{FireResult, Raster};

/// A deterministic affine unit conversion, `value' = value * scale + offset`.
///
/// Applied element-wise before alignment for layers whose raw encoding is not
/// in physical units. Missing values (NaN) are invariant: NaN times anything
/// stays NaN, so a nodata pixel can never turn into a plausible measurement.
/// Which layers get a conversion is configuration, not a hardcoded property
/// of one layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitConversion {
    pub scale: f64,
    pub offset: f64,
}

impl UnitConversion {
    pub fn new(scale: f64, offset: f64) -> Self {
        Self { scale, offset }
    }

    /// The identity conversion.
    pub fn identity() -> Self {
        Self {
            scale: 1.0,
            offset: 0.0,
        }
    }

    /// MODIS LST raw encoding to degrees Celsius: `raw * 0.02 - 273.15`.
    pub fn modis_lst_to_celsius() -> Self {
        Self {
            scale: 0.02,
            offset: -273.15,
        }
    }

    pub fn is_identity(&self) -> bool {
        self.scale == 1.0 && self.offset == 0.0
    }

    /// Apply the conversion, producing a new raster on the same grid.
    pub fn apply(&self, raster: &Raster) -> FireResult<Raster> {
        let (scale, offset) = (self.scale as f32, self.offset as f32);
        let converted = raster.data().iter().map(|v| v * scale + offset).collect();
        Raster::from_normalized(raster.profile().clone(), converted)
    }
}
