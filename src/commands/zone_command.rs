//! UTM zone lookup command
//!
//! Resolves a "lat,lon" pair to its UTM zone and EPSG code, or a zone
//! designator to its EPSG code.

use clap::ArgMatches;
use log::info;

use crate::api::ProjKit;
use crate::commands::command_traits::Command;
use crate::projection::errors::{ProjkitError, ProjkitResult};
use crate::projection::zones::parse_latlon;

enum ZoneQuery {
    LatLon(f64, f64),
    Zone(String),
}

/// Command for UTM zone and EPSG lookups
pub struct ZoneCommand<'a> {
    query: ZoneQuery,
    kit: &'a ProjKit,
}

impl<'a> ZoneCommand<'a> {
    /// Create a new zone command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `kit` - Library facade
    ///
    /// # Returns
    /// A new ZoneCommand instance or an error
    pub fn new(args: &ArgMatches, kit: &'a ProjKit) -> ProjkitResult<Self> {
        let query = if let Some(latlon) = args.get_one::<String>("latlon") {
            let (lat, lon) = parse_latlon(latlon)?;
            ZoneQuery::LatLon(lat, lon)
        } else if let Some(zone) = args.get_one::<String>("zone") {
            ZoneQuery::Zone(zone.clone())
        } else {
            return Err(ProjkitError::InvalidArgument(
                "Missing zone query. Use --latlon or --zone".to_string()));
        };

        Ok(ZoneCommand { query, kit })
    }
}

impl<'a> Command for ZoneCommand<'a> {
    fn execute(&self) -> ProjkitResult<String> {
        match &self.query {
            ZoneQuery::LatLon(lat, lon) => {
                info!("Looking up UTM zone for lat={}, lon={}", lat, lon);
                let (zone, epsg) = self.kit.utm_zone(*lat, *lon)?;
                Ok(format!("UTM zone: {}\nEPSG: {}", zone, epsg))
            },
            ZoneQuery::Zone(zone) => {
                info!("Looking up EPSG code for UTM zone {}", zone);
                let epsg = self.kit.utm_to_epsg(zone)?;
                Ok(format!("EPSG: {}", epsg))
            },
        }
    }
}
