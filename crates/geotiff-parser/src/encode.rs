//! GeoTIFF encoding for output rasters.

use std::io::Cursor;

use bytes::Bytes;
use tiff::encoder::{colortype, compression::Lzw, TiffEncoder};
use tiff::tags::Tag;

use fire_common::{CrsCode, Raster};

use crate::error::{GeoTiffError, Result};
use crate::keys;

/// Encode a raster as a single-band float32 GeoTIFF with LZW compression.
///
/// Missing pixels are written as NaN and declared through the GDAL nodata
/// tag, so downstream GIS tools recover the same mask.
pub fn encode_geotiff(raster: &Raster) -> Result<Bytes> {
    let mut buffer = Cursor::new(Vec::new());

    {
        let mut encoder =
            TiffEncoder::new(&mut buffer).map_err(|e| GeoTiffError::Encode(e.to_string()))?;

        let mut image = encoder
            .new_image_with_compression::<colortype::Gray32Float, _>(
                raster.width() as u32,
                raster.height() as u32,
                Lzw::default(),
            )
            .map_err(|e| GeoTiffError::Encode(e.to_string()))?;

        let gt = &raster.profile().transform;
        let scale = [gt.pixel_width, -gt.pixel_height, 0.0];
        let tiepoint = [0.0, 0.0, 0.0, gt.origin_x, gt.origin_y, 0.0];

        image
            .encoder()
            .write_tag(Tag::ModelPixelScaleTag, &scale[..])
            .map_err(|e| GeoTiffError::Encode(e.to_string()))?;
        image
            .encoder()
            .write_tag(Tag::ModelTiepointTag, &tiepoint[..])
            .map_err(|e| GeoTiffError::Encode(e.to_string()))?;

        if let Some(crs) = raster.profile().crs {
            let directory = geokey_directory(crs);
            image
                .encoder()
                .write_tag(Tag::GeoKeyDirectoryTag, &directory[..])
                .map_err(|e| GeoTiffError::Encode(e.to_string()))?;
        }

        image
            .encoder()
            .write_tag(Tag::GdalNodata, "nan")
            .map_err(|e| GeoTiffError::Encode(e.to_string()))?;

        image
            .write_data(raster.data())
            .map_err(|e| GeoTiffError::Encode(e.to_string()))?;
    }

    Ok(Bytes::from(buffer.into_inner()))
}

/// Build the GeoKey directory for a supported CRS.
fn geokey_directory(crs: CrsCode) -> Vec<u16> {
    let mut entries: Vec<[u16; 4]> = Vec::new();

    match crs {
        CrsCode::Epsg4326 => {
            entries.push([keys::MODEL_TYPE, 0, 1, keys::MODEL_TYPE_GEOGRAPHIC]);
            entries.push([keys::GEOGRAPHIC_TYPE, 0, 1, 4326]);
        }
        CrsCode::Epsg3857 => {
            entries.push([keys::MODEL_TYPE, 0, 1, keys::MODEL_TYPE_PROJECTED]);
            entries.push([keys::PROJECTED_CS_TYPE, 0, 1, 3857]);
        }
        CrsCode::Sinusoidal => {
            entries.push([keys::MODEL_TYPE, 0, 1, keys::MODEL_TYPE_PROJECTED]);
            entries.push([keys::PROJECTED_CS_TYPE, 0, 1, keys::USER_DEFINED]);
            entries.push([keys::PROJ_COORD_TRANS, 0, 1, keys::CT_SINUSOIDAL]);
        }
        CrsCode::Other(code) => {
            entries.push([keys::MODEL_TYPE, 0, 1, keys::MODEL_TYPE_PROJECTED]);
            entries.push([keys::PROJECTED_CS_TYPE, 0, 1, code.min(u16::MAX as u32) as u16]);
        }
    }

    let mut directory = vec![1, 1, 0, entries.len() as u16];
    for entry in entries {
        directory.extend_from_slice(&entry);
    }
    directory
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geokey_directory_layout() {
        let dir = geokey_directory(CrsCode::Epsg4326);
        assert_eq!(&dir[..4], &[1, 1, 0, 2]);
        assert_eq!(dir.len(), 4 + 2 * 4);

        let dir = geokey_directory(CrsCode::Sinusoidal);
        assert_eq!(dir[3], 3);
        // Last key quad carries the sinusoidal transform method.
        assert_eq!(&dir[dir.len() - 4..], &[keys::PROJ_COORD_TRANS, 0, 1, keys::CT_SINUSOIDAL]);
    }
}
