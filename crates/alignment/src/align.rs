//! The grid aligner.

use tracing::debug;

use fire_common::{FireResult, Raster, SpatialProfile};

use crate::interpolation::Resampling;
use crate::transform::CoordTransform;

/// Reproject `source` onto the grid described by `destination`.
///
/// For every pixel center of the destination grid, the aligner computes the
/// world coordinate via the destination transform, converts it into the
/// source CRS, inverse-maps it through the source transform and samples the
/// source raster with `resampling`. The output profile equals `destination`
/// exactly, whatever the source shape was.
///
/// Destination pixels that map outside the source extent, sample a missing
/// source pixel, or produce a non-finite value are set to NaN.
pub fn align(
    source: &Raster,
    destination: &SpatialProfile,
    resampling: Resampling,
) -> FireResult<Raster> {
    let src_crs = *source.profile().validate_for_alignment()?;
    let dst_crs = *destination.validate_for_alignment()?;

    let to_source = CoordTransform::new(dst_crs, src_crs)?;

    let src_transform = &source.profile().transform;
    let dst_transform = &destination.transform;
    let (src_w, src_h) = (source.width(), source.height());

    let mut output = vec![f32::NAN; destination.len()];

    for row in 0..destination.height {
        for col in 0..destination.width {
            let (wx, wy) = dst_transform.pixel_to_world(col as f64, row as f64);
            let (sx, sy) = to_source.apply(wx, wy);
            if !sx.is_finite() || !sy.is_finite() {
                continue;
            }

            let Some((src_col, src_row)) = src_transform.world_to_pixel(sx, sy) else {
                continue;
            };

            let value = resampling.sample(source.data(), src_w, src_h, src_col, src_row);
            if value.is_finite() {
                output[row * destination.width + col] = value;
            }
            // Outside-extent and NaN-neighborhood samples stay NaN.
        }
    }

    let valid = output.iter().filter(|v| v.is_finite()).count();
    debug!(
        source_shape = %source.profile().shape_string(),
        destination_shape = %destination.shape_string(),
        valid_pixels = valid,
        "Aligned raster"
    );

    Raster::from_normalized(destination.clone(), output)
}
