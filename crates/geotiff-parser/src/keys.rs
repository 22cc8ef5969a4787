//! GeoKey identifiers used by the decoder and encoder.
//!
//! Subset of the GeoTIFF key registry; only the keys needed to recognize the
//! coordinate systems the pipeline supports.

/// GTModelTypeGeoKey: 1 = projected, 2 = geographic
pub const MODEL_TYPE: u16 = 1024;
/// GeographicTypeGeoKey: EPSG code of a geographic CRS
pub const GEOGRAPHIC_TYPE: u16 = 2048;
/// ProjectedCSTypeGeoKey: EPSG code of a projected CRS, 32767 = user-defined
pub const PROJECTED_CS_TYPE: u16 = 3072;
/// ProjCoordTransGeoKey: projection method for user-defined CRSs
pub const PROJ_COORD_TRANS: u16 = 3075;

pub const MODEL_TYPE_PROJECTED: u16 = 1;
pub const MODEL_TYPE_GEOGRAPHIC: u16 = 2;

/// User-defined marker for ProjectedCSTypeGeoKey.
pub const USER_DEFINED: u16 = 32767;
/// CT_Sinusoidal in the GeoTIFF coordinate transformation registry.
pub const CT_SINUSOIDAL: u16 = 24;
