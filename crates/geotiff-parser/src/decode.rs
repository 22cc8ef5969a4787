//! GeoTIFF decoding.

use std::io::Cursor;

use tiff::decoder::{Decoder, DecodingResult, Limits};
use tiff::tags::Tag;

use fire_common::{CrsCode, GeoTransform, Raster, SpatialProfile};

use crate::error::{GeoTiffError, Result};
use crate::keys;

/// Decode a single-band GeoTIFF into a [`Raster`].
///
/// Pixel values are coerced to f32 and the raw nodata value (GDAL_NODATA
/// tag) is normalized to NaN by the raster constructor. Georeferencing tags
/// are optional; without them the profile carries no CRS and a degenerate
/// transform, which the aligner rejects.
pub fn decode_geotiff(bytes: &[u8]) -> Result<Raster> {
    let mut decoder =
        Decoder::new(Cursor::new(bytes)).map_err(|e| GeoTiffError::Decode(e.to_string()))?;
    decoder = decoder.with_limits(Limits::unlimited());

    let (width, height) = decoder.dimensions()?;
    let data = read_band(&mut decoder)?;

    let transform = read_transform(&mut decoder);
    let crs = read_crs(&mut decoder);
    let nodata = read_nodata(&mut decoder);

    let profile = SpatialProfile::new(
        crs,
        transform.unwrap_or_else(|| GeoTransform::new(0.0, 0.0, 0.0, 0.0)),
        width as usize,
        height as usize,
        nodata,
    );

    Raster::new(profile, data).map_err(|e| GeoTiffError::Decode(e.to_string()))
}

/// Read the first band as f32, coercing integer encodings.
fn read_band(decoder: &mut Decoder<Cursor<&[u8]>>) -> Result<Vec<f32>> {
    match decoder.read_image()? {
        DecodingResult::F32(v) => Ok(v),
        DecodingResult::F64(v) => Ok(v.into_iter().map(|x| x as f32).collect()),
        DecodingResult::U8(v) => Ok(v.into_iter().map(|x| x as f32).collect()),
        DecodingResult::U16(v) => Ok(v.into_iter().map(|x| x as f32).collect()),
        DecodingResult::U32(v) => Ok(v.into_iter().map(|x| x as f32).collect()),
        DecodingResult::I8(v) => Ok(v.into_iter().map(|x| x as f32).collect()),
        DecodingResult::I16(v) => Ok(v.into_iter().map(|x| x as f32).collect()),
        DecodingResult::I32(v) => Ok(v.into_iter().map(|x| x as f32).collect()),
        _ => Err(GeoTiffError::Unsupported(
            "sample format is not float- or integer-valued".to_string(),
        )),
    }
}

/// Build the affine transform from ModelPixelScale + ModelTiepoint.
fn read_transform(decoder: &mut Decoder<Cursor<&[u8]>>) -> Option<GeoTransform> {
    let scale = decoder
        .find_tag(Tag::ModelPixelScaleTag)
        .ok()
        .flatten()?
        .into_f64_vec()
        .ok()?;
    let tiepoint = decoder
        .find_tag(Tag::ModelTiepointTag)
        .ok()
        .flatten()?
        .into_f64_vec()
        .ok()?;

    if scale.len() < 2 || tiepoint.len() < 5 {
        return None;
    }

    let (sx, sy) = (scale[0], scale[1]);
    // Tiepoint maps raster point (i, j) to world point (x, y).
    let (i, j, x, y) = (tiepoint[0], tiepoint[1], tiepoint[3], tiepoint[4]);

    Some(GeoTransform::new(x - i * sx, y + j * sy, sx, -sy))
}

/// Resolve the CRS from the GeoKey directory.
fn read_crs(decoder: &mut Decoder<Cursor<&[u8]>>) -> Option<CrsCode> {
    let directory = decoder
        .find_tag(Tag::GeoKeyDirectoryTag)
        .ok()
        .flatten()?
        .into_u32_vec()
        .ok()?;

    // Header: [version, revision, minor, key count], then one quad per key:
    // [key id, tag location, count, value].
    if directory.len() < 4 {
        return None;
    }
    let key_count = directory[3] as usize;

    let mut projected_cs = None;
    let mut geographic_type = None;
    let mut coord_trans = None;

    for k in 0..key_count {
        let base = 4 + k * 4;
        if base + 3 >= directory.len() {
            break;
        }
        let (key_id, location, value) = (
            directory[base] as u16,
            directory[base + 1],
            directory[base + 3] as u16,
        );
        // Only inline SHORT values (location 0) matter for these keys.
        if location != 0 {
            continue;
        }
        match key_id {
            keys::PROJECTED_CS_TYPE => projected_cs = Some(value),
            keys::GEOGRAPHIC_TYPE => geographic_type = Some(value),
            keys::PROJ_COORD_TRANS => coord_trans = Some(value),
            _ => {}
        }
    }

    match (projected_cs, coord_trans, geographic_type) {
        (Some(code), _, _) if code != keys::USER_DEFINED => {
            Some(CrsCode::from_epsg(code as u32))
        }
        (_, Some(keys::CT_SINUSOIDAL), _) => Some(CrsCode::Sinusoidal),
        (_, _, Some(code)) => Some(CrsCode::from_epsg(code as u32)),
        _ => None,
    }
}

/// Parse the GDAL nodata convention (ASCII tag).
fn read_nodata(decoder: &mut Decoder<Cursor<&[u8]>>) -> Option<f64> {
    let text = decoder.get_tag_ascii_string(Tag::GdalNodata).ok()?;
    text.trim_matches(char::from(0)).trim().parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encode_geotiff;

    fn sample_raster() -> Raster {
        let profile = SpatialProfile::new(
            Some(CrsCode::Epsg4326),
            GeoTransform::new(-71.0, -33.0, 0.01, -0.01),
            3,
            2,
            Some(-9999.0),
        );
        Raster::new(profile, vec![0.1, 0.2, -9999.0, 0.4, 0.5, 0.6]).unwrap()
    }

    #[test]
    fn test_decode_recovers_profile_and_pixels() {
        let original = sample_raster();
        let bytes = encode_geotiff(&original).unwrap();
        let decoded = decode_geotiff(&bytes).unwrap();

        assert_eq!(decoded.width(), 3);
        assert_eq!(decoded.height(), 2);
        assert_eq!(decoded.profile().crs, Some(CrsCode::Epsg4326));

        let gt = &decoded.profile().transform;
        assert!((gt.origin_x - -71.0).abs() < 1e-9);
        assert!((gt.origin_y - -33.0).abs() < 1e-9);
        assert!((gt.pixel_width - 0.01).abs() < 1e-9);
        assert!((gt.pixel_height - -0.01).abs() < 1e-9);

        assert_eq!(decoded.pixel(0, 0), 0.1);
        // The encoder writes the NaN sentinel; decoded stays missing.
        assert!(decoded.pixel(0, 2).is_nan());
    }

    #[test]
    fn test_decode_sinusoidal_crs() {
        let profile = SpatialProfile::new(
            Some(CrsCode::Sinusoidal),
            GeoTransform::new(-6671703.118, -2223901.039, 926.625, -926.625),
            2,
            2,
            None,
        );
        let raster = Raster::new(profile, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let bytes = encode_geotiff(&raster).unwrap();
        let decoded = decode_geotiff(&bytes).unwrap();
        assert_eq!(decoded.profile().crs, Some(CrsCode::Sinusoidal));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_geotiff(b"not a tiff at all").is_err());
    }
}
