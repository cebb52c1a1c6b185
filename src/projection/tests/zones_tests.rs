//! Tests for UTM zone resolution

extern crate std;

use crate::projection::errors::ProjkitError;
use crate::projection::zones::{latlon_to_utm, parse_coordinate, parse_latlon, utm_to_epsg, UtmZone};

#[test]
fn test_latlon_to_utm_rejects_out_of_range() {
    // Latitude above or below 90
    std::assert!(matches!(latlon_to_utm(91, 0), Err(ProjkitError::OutOfRange(_))));
    std::assert!(matches!(latlon_to_utm(-91, 0), Err(ProjkitError::OutOfRange(_))));
    // Longitude above or below 180
    std::assert!(matches!(latlon_to_utm(0, -181), Err(ProjkitError::OutOfRange(_))));
    std::assert!(matches!(latlon_to_utm(0, 181), Err(ProjkitError::OutOfRange(_))));
    // Upper bounds are excluded
    std::assert!(matches!(latlon_to_utm(90.0, 0.0), Err(ProjkitError::OutOfRange(_))));
    std::assert!(matches!(latlon_to_utm(0.0, 180.0), Err(ProjkitError::OutOfRange(_))));
    std::assert!(matches!(latlon_to_utm(f64::NAN, 0.0), Err(ProjkitError::OutOfRange(_))));
}

#[test]
fn test_latlon_to_utm_zones() {
    // The lower-left corner belongs to the western zone
    std::assert_eq!(latlon_to_utm(0, 0).unwrap(), "30N");

    // Extreme zones
    std::assert_eq!(latlon_to_utm(-79, -179).unwrap(), "1S");
    std::assert_eq!(latlon_to_utm(79, -179).unwrap(), "1N");
    std::assert_eq!(latlon_to_utm(-79, 179).unwrap(), "60S");
    std::assert_eq!(latlon_to_utm(79, 179).unwrap(), "60N");
    std::assert_eq!(latlon_to_utm(0, -180).unwrap(), "1N");

    // Middle zones
    std::assert_eq!(latlon_to_utm(1, -59).unwrap(), "21N");
    std::assert_eq!(latlon_to_utm(1, 61).unwrap(), "41N");
    std::assert_eq!(latlon_to_utm(-1, -121).unwrap(), "10S");
    std::assert_eq!(latlon_to_utm(-1, 119).unwrap(), "50S");
}

#[test]
fn test_latlon_to_utm_numeric_types() {
    std::assert!(latlon_to_utm(0.1, 0.1).is_ok());
    std::assert!(latlon_to_utm(0.1f32, 0.1f32).is_ok());
    std::assert!(latlon_to_utm(0i16, 0i16).is_ok());
    std::assert!(latlon_to_utm(45u8, 7i64).is_ok());
}

#[test]
fn test_latlon_to_utm_polar_caps() {
    std::assert!(matches!(latlon_to_utm(85.0, 10.0), Err(ProjkitError::CrsError(_))));
    std::assert!(matches!(latlon_to_utm(-85.0, 10.0), Err(ProjkitError::CrsError(_))));
    std::assert!(latlon_to_utm(84.0, 10.0).is_ok());
    std::assert!(latlon_to_utm(-80.0, 10.0).is_ok());
}

#[test]
fn test_parse_coordinate_type_error() {
    std::assert!(matches!(parse_coordinate("abc"), Err(ProjkitError::TypeError(_))));
    std::assert_eq!(parse_coordinate(" 12.5 ").unwrap(), 12.5);
    std::assert!(matches!(parse_latlon("a,100"), Err(ProjkitError::TypeError(_))));
    std::assert!(matches!(parse_latlon("1"), Err(ProjkitError::InvalidArgument(_))));
    std::assert_eq!(parse_latlon("-79,-179").unwrap(), (-79.0, -179.0));
}

#[test]
fn test_utm_to_epsg_codes() {
    std::assert_eq!(utm_to_epsg("1N").unwrap(), 32601);
    std::assert_eq!(utm_to_epsg("1S").unwrap(), 32701);
    std::assert_eq!(utm_to_epsg("60N").unwrap(), 32660);
    std::assert_eq!(utm_to_epsg("60S").unwrap(), 32760);
}

#[test]
fn test_utm_to_epsg_formats() {
    // Single digit, zero-padded, lower-case
    std::assert_eq!(utm_to_epsg("1N").unwrap(), utm_to_epsg("01N").unwrap());
    std::assert_eq!(utm_to_epsg("01N").unwrap(), utm_to_epsg("01n").unwrap());
    std::assert_eq!(utm_to_epsg("08s").unwrap(), utm_to_epsg("8S").unwrap());
    std::assert_eq!(utm_to_epsg("8S").unwrap(), utm_to_epsg("08S").unwrap());
}

#[test]
fn test_utm_to_epsg_invalid_zones() {
    std::assert!(matches!(utm_to_epsg("100N"), Err(ProjkitError::CrsError(_))));
    std::assert!(matches!(utm_to_epsg("61N"), Err(ProjkitError::CrsError(_))));
    std::assert!(matches!(utm_to_epsg("61E"), Err(ProjkitError::CrsError(_))));
    std::assert!(matches!(utm_to_epsg("10E"), Err(ProjkitError::CrsError(_))));
    std::assert!(matches!(utm_to_epsg("0N"), Err(ProjkitError::CrsError(_))));
    std::assert!(matches!(utm_to_epsg("N10"), Err(ProjkitError::InvalidArgument(_))));
    std::assert!(matches!(utm_to_epsg(""), Err(ProjkitError::InvalidArgument(_))));
}

#[test]
fn test_zone_roundtrip_through_epsg() {
    for zone in UtmZone::all() {
        let epsg = zone.epsg_code();
        std::assert_eq!(UtmZone::from_epsg(epsg).unwrap(), zone);
        std::assert_eq!(utm_to_epsg(&zone.to_string()).unwrap(), epsg);
    }
    std::assert!(UtmZone::from_epsg(4326).is_err());
}

#[test]
fn test_zone_name_and_area() {
    let zone = UtmZone::new(31, true).unwrap();
    std::assert_eq!(zone.name(), "WGS 84 / UTM zone 31N");
    std::assert_eq!(zone.area_of_use(), (0.0, 0.0, 6.0, 84.0));
    std::assert!(zone.contains(45.0, 3.0));
    std::assert!(!zone.contains(-1.0, 3.0));
    std::assert_eq!(zone.crs().epsg(), Some(32631));
}
