//! UTM zone resolution
//!
//! Converts geographic coordinates into WGS 84 / UTM zone designators
//! ("31N") and zone designators into EPSG codes.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use log::debug;
use num_traits::ToPrimitive;
use regex::Regex;

use crate::coordinate::Crs;
use crate::projection::constants::utm;
use crate::projection::errors::{ProjkitError, ProjkitResult};

lazy_static! {
    static ref ZONE_PATTERN: Regex = Regex::new(r"^(\d+)([A-Za-z])$").unwrap();
}

/// A WGS 84 / UTM zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UtmZone {
    /// Zone number, 1 to 60
    pub number: u8,
    /// Northern hemisphere if true
    pub north: bool,
}

impl UtmZone {
    /// Create a zone, validating its number
    pub fn new(number: u8, north: bool) -> ProjkitResult<Self> {
        if !(1..=utm::ZONE_COUNT).contains(&number) {
            return Err(ProjkitError::CrsError(format!(
                "Invalid UTM zone number: {} (must be between 1 and {})", number, utm::ZONE_COUNT
            )));
        }

        Ok(UtmZone { number, north })
    }

    /// Get the zone matching a WGS 84 / UTM EPSG code
    pub fn from_epsg(code: u32) -> ProjkitResult<Self> {
        let (base, north) = match code {
            32601..=32660 => (utm::NORTH_EPSG_BASE, true),
            32701..=32760 => (utm::SOUTH_EPSG_BASE, false),
            _ => return Err(ProjkitError::CrsError(format!(
                "EPSG:{} is not a WGS 84 / UTM zone", code
            ))),
        };

        UtmZone::new((code - base) as u8, north)
    }

    /// Get the EPSG code of this zone
    pub fn epsg_code(&self) -> u32 {
        if self.north {
            utm::NORTH_EPSG_BASE + self.number as u32
        } else {
            utm::SOUTH_EPSG_BASE + self.number as u32
        }
    }

    /// Hemisphere letter, 'N' or 'S'
    pub fn hemisphere(&self) -> char {
        if self.north { 'N' } else { 'S' }
    }

    /// Display name of the zone's CRS, e.g. "WGS 84 / UTM zone 31N"
    pub fn name(&self) -> String {
        format!("WGS 84 / UTM zone {}", self)
    }

    /// CRS descriptor of this zone
    pub fn crs(&self) -> Crs {
        Crs::from_epsg(self.epsg_code())
    }

    /// Area of use as (west, south, east, north) in degrees
    pub fn area_of_use(&self) -> (f64, f64, f64, f64) {
        let west = -180.0 + (self.number as f64 - 1.0) * utm::ZONE_WIDTH;
        let east = west + utm::ZONE_WIDTH;

        if self.north {
            (west, 0.0, east, utm::NORTH_LAT_LIMIT)
        } else {
            (west, utm::SOUTH_LAT_LIMIT, east, 0.0)
        }
    }

    /// Check whether a point lies in the zone's area of use (edges included)
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        let (west, south, east, north) = self.area_of_use();
        (west..=east).contains(&lon) && (south..=north).contains(&lat)
    }

    /// All WGS 84 / UTM zones in EPSG code order
    pub fn all() -> impl Iterator<Item = UtmZone> {
        [true, false].into_iter().flat_map(|north| {
            (1..=utm::ZONE_COUNT).map(move |number| UtmZone { number, north })
        })
    }
}

impl fmt::Display for UtmZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.number, self.hemisphere())
    }
}

impl FromStr for UtmZone {
    type Err = ProjkitError;

    /// Parse "31N", "01n", "8S" and similar designators
    fn from_str(s: &str) -> ProjkitResult<Self> {
        let caps = ZONE_PATTERN.captures(s.trim())
            .ok_or_else(|| ProjkitError::InvalidArgument(format!(
                "Malformed UTM zone '{}': expected zone digits followed by N or S", s
            )))?;

        let number = caps[1].parse::<u32>().ok()
            .and_then(|n| u8::try_from(n).ok())
            .filter(|n| (1..=utm::ZONE_COUNT).contains(n))
            .ok_or_else(|| ProjkitError::CrsError(format!(
                "Invalid UTM zone number in '{}' (must be between 1 and {})", s, utm::ZONE_COUNT
            )))?;

        let north = match caps[2].to_ascii_uppercase().as_str() {
            "N" => true,
            "S" => false,
            other => return Err(ProjkitError::CrsError(format!(
                "Invalid UTM hemisphere '{}' in '{}' (must be N or S)", other, s
            ))),
        };

        UtmZone::new(number, north)
    }
}

/// Get the UTM zone for a latitude and longitude
///
/// Points on a zone edge belong to the western zone and points on the
/// equator to the northern hemisphere.
///
/// # Arguments
/// * `lat` - Latitude, in [-90, 90)
/// * `lon` - Longitude, in [-180, 180)
///
/// # Returns
/// The zone designator, e.g. "31N"
pub fn latlon_to_utm<T: ToPrimitive, U: ToPrimitive>(lat: T, lon: U) -> ProjkitResult<String> {
    let (lat, lon) = match (lat.to_f64(), lon.to_f64()) {
        (Some(lat), Some(lon)) => (lat, lon),
        _ => return Err(ProjkitError::TypeError(
            "Latitude and longitude must be floats or integers.".to_string())),
    };

    if !(-180.0..180.0).contains(&lon) {
        return Err(ProjkitError::OutOfRange("Longitude value is out of range [-180, 180[.".to_string()));
    }
    if !(-90.0..90.0).contains(&lat) {
        return Err(ProjkitError::OutOfRange("Latitude value is out of range [-90, 90[.".to_string()));
    }

    let zone = UtmZone::all()
        .find(|zone| zone.contains(lat, lon))
        .ok_or_else(|| ProjkitError::CrsError(format!(
            "No WGS 84 / UTM zone covers latitude {} (UTM is defined between {} and {})",
            lat, utm::SOUTH_LAT_LIMIT, utm::NORTH_LAT_LIMIT
        )))?;

    let name = zone.name();
    debug!("Point ({}, {}) lies in {} (EPSG:{})", lat, lon, name, zone.epsg_code());

    let designator = name.split(' ').last().unwrap_or_default();
    Ok(designator.to_string())
}

/// Get the EPSG code of a UTM zone
///
/// # Arguments
/// * `utm` - Zone designator with one or two digits, e.g. "1N", "01n", "60S"
///
/// # Returns
/// The EPSG code, e.g. 32601
pub fn utm_to_epsg(utm: &str) -> ProjkitResult<u32> {
    let zone: UtmZone = utm.parse()?;
    debug!("Resolved UTM zone '{}' to {} (EPSG:{})", utm, zone.name(), zone.epsg_code());
    Ok(zone.epsg_code())
}

/// Parse a textual coordinate value
///
/// Fails with a type error when the text is not a number.
pub fn parse_coordinate(value: &str) -> ProjkitResult<f64> {
    value.trim().parse::<f64>()
        .map_err(|_| ProjkitError::TypeError(format!(
            "Coordinate '{}' must be a float or an integer", value.trim()
        )))
}

/// Parse a "lat,lon" pair
pub fn parse_latlon(latlon_str: &str) -> ProjkitResult<(f64, f64)> {
    match latlon_str.split(',').collect::<Vec<_>>().as_slice() {
        [lat, lon] => Ok((parse_coordinate(lat)?, parse_coordinate(lon)?)),
        _ => Err(ProjkitError::InvalidArgument(format!(
            "Coordinate must be in format 'lat,lon': {}", latlon_str
        ))),
    }
}
