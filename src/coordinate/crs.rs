//! Coordinate Reference System descriptors

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

use crate::projection::errors::{ProjkitError, ProjkitResult};

lazy_static! {
    static ref EPSG_PATTERN: Regex = Regex::new(r"^(?i)epsg\s*:\s*(\d+)$").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Opaque identifier for a coordinate reference system
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Crs {
    /// Authority code from the EPSG registry
    Epsg(u32),
    /// PROJ string, e.g. "+proj=utm +zone=31 +datum=WGS84"
    ProjString(String),
    /// Well-known text definition
    Wkt(String),
}

impl Crs {
    /// Create a descriptor from an EPSG code
    pub fn from_epsg(code: u32) -> Self {
        Crs::Epsg(code)
    }

    /// Parse a descriptor from text
    ///
    /// Accepts "EPSG:4326" (any case), a bare code such as "4326",
    /// a PROJ string starting with '+' or "proj=", and WKT.
    pub fn from_string(crs_str: &str) -> ProjkitResult<Self> {
        let crs_str = crs_str.trim();

        if let Some(caps) = EPSG_PATTERN.captures(crs_str) {
            let code = caps[1].parse::<u32>()
                .map_err(|_| ProjkitError::InvalidArgument(format!("Invalid EPSG code: {}", &caps[1])))?;
            return Ok(Crs::Epsg(code));
        }

        if let Ok(code) = crs_str.parse::<u32>() {
            return Ok(Crs::Epsg(code));
        }

        if crs_str.starts_with('+') || crs_str.starts_with("proj=") {
            return Ok(Crs::ProjString(crs_str.to_string()));
        }

        if looks_like_wkt(crs_str) {
            return Ok(Crs::Wkt(crs_str.to_string()));
        }

        Err(ProjkitError::InvalidArgument(format!("Unrecognized CRS descriptor: {}", crs_str)))
    }

    /// Get the EPSG code, if this descriptor is an authority code
    pub fn epsg(&self) -> Option<u32> {
        match self {
            Crs::Epsg(code) => Some(*code),
            _ => None,
        }
    }

    /// Definition string handed to PROJ
    pub fn definition(&self) -> String {
        match self {
            Crs::Epsg(code) => format!("EPSG:{}", code),
            Crs::ProjString(s) | Crs::Wkt(s) => s.clone(),
        }
    }

    /// Normalized form used for exact comparison
    pub fn canonical(&self) -> String {
        match self {
            Crs::Epsg(code) => format!("EPSG:{}", code),
            Crs::ProjString(s) => {
                let mut tokens = s.split_whitespace()
                    .map(|token| {
                        let token = token.trim_start_matches('+');
                        match token.split_once('=') {
                            Some((key, value)) => format!("+{}={}", key.to_lowercase(), value),
                            None => format!("+{}", token.to_lowercase()),
                        }
                    })
                    .filter(|token| token != "+type=crs")
                    .collect::<Vec<_>>();
                // PROJ parameters are order-independent
                tokens.sort_unstable();
                tokens.join(" ")
            },
            Crs::Wkt(s) => WHITESPACE.replace_all(s.trim(), " ").into_owned(),
        }
    }
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.definition())
    }
}

impl From<u32> for Crs {
    fn from(code: u32) -> Self {
        Crs::Epsg(code)
    }
}

fn looks_like_wkt(s: &str) -> bool {
    const WKT_ROOTS: [&str; 8] = [
        "GEOGCS", "PROJCS", "GEOCCS", "COMPD_CS",
        "GEOGCRS", "PROJCRS", "GEODCRS", "COMPOUNDCRS",
    ];

    let upper = s.to_uppercase();
    WKT_ROOTS.iter().any(|root| upper.starts_with(root)) && s.ends_with(']')
}
