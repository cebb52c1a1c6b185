//! Constants for CRS handling

use lazy_static::lazy_static;

use crate::coordinate::Crs;

/// Decimal digits kept when reprojecting to lat/lon (~1 mm at the equator)
pub const TO_LATLON_PRECISION: u32 = 8;
/// Decimal digits kept when reprojecting from lat/lon into metric units
pub const FROM_LATLON_PRECISION: u32 = 2;
/// Points per edge in densified bounds transforms
pub const DENSIFY_PTS: i32 = 5000;

lazy_static! {
    /// Geographic WGS 84 reference (EPSG:4326)
    pub static ref WGS84_CRS: Crs = Crs::from_epsg(4326);
}

/// EPSG codes of WGS 84 / UTM zones
pub mod utm {
    /// Base code of northern hemisphere zones (32601..=32660)
    pub const NORTH_EPSG_BASE: u32 = 32600;
    /// Base code of southern hemisphere zones (32701..=32760)
    pub const SOUTH_EPSG_BASE: u32 = 32700;
    /// Number of zones per hemisphere
    pub const ZONE_COUNT: u8 = 60;
    /// Longitudinal width of a zone in degrees
    pub const ZONE_WIDTH: f64 = 6.0;
    /// Northern limit of the northern hemisphere zones
    pub const NORTH_LAT_LIMIT: f64 = 84.0;
    /// Southern limit of the southern hemisphere zones
    pub const SOUTH_LAT_LIMIT: f64 = -80.0;
}
