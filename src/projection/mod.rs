//! CRS lookup and comparison
//!
//! This module resolves UTM zones and EPSG codes, compares CRS
//! descriptors, and holds the error types and configuration shared by
//! the rest of the crate.

pub mod errors;
pub mod constants;
pub mod config;
pub mod zones;
pub mod compare;
#[cfg(test)]
mod tests;

pub use errors::{ProjkitError, ProjkitResult};
pub use constants::WGS84_CRS;
pub use config::ProjkitConfig;
pub use zones::{latlon_to_utm, parse_coordinate, parse_latlon, utm_to_epsg, UtmZone};
pub use compare::{compare_proj, compare_proj_str};
