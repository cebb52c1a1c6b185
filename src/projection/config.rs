//! Configuration for projection helpers
//!
//! Defaults come from the embedded `projkit.toml`. A user file only
//! needs to contain the keys it changes.

use std::fs;
use std::str::FromStr;

use lazy_static::lazy_static;
use log::warn;

use crate::projection::constants;
use crate::projection::errors::{ProjkitError, ProjkitResult};

lazy_static! {
    // Parse the embedded defaults at startup
    static ref DEFAULT_CONFIG: ProjkitConfig = {
        let content = include_str!("../../projkit.toml");
        ProjkitConfig::builtin().merged_with_str(content).unwrap_or_else(|e| {
            warn!("Failed to parse embedded projkit defaults: {}", e);
            ProjkitConfig::builtin()
        })
    };
}

/// Tunable defaults for the helpers
#[derive(Debug, Clone, PartialEq)]
pub struct ProjkitConfig {
    /// Decimal digits kept by `reproject_to_latlon`
    pub to_latlon_precision: u32,
    /// Decimal digits kept by `reproject_from_latlon`
    pub from_latlon_precision: u32,
    /// Points per edge in densified bounds transforms
    pub densify_pts: i32,
    /// Merge algorithm used when none is given
    pub default_merge_algorithm: String,
}

impl Default for ProjkitConfig {
    fn default() -> Self {
        DEFAULT_CONFIG.clone()
    }
}

impl FromStr for ProjkitConfig {
    type Err = ProjkitError;

    /// Parse a configuration from a TOML string, starting from the defaults
    fn from_str(content: &str) -> ProjkitResult<Self> {
        ProjkitConfig::default().merged_with_str(content)
    }
}

impl ProjkitConfig {
    fn builtin() -> Self {
        ProjkitConfig {
            to_latlon_precision: constants::TO_LATLON_PRECISION,
            from_latlon_precision: constants::FROM_LATLON_PRECISION,
            densify_pts: constants::DENSIFY_PTS,
            default_merge_algorithm: "union".to_string(),
        }
    }

    /// Load a configuration from a TOML file, starting from the defaults
    pub fn from_file(path: &str) -> ProjkitResult<Self> {
        let contents = fs::read_to_string(path)?;
        contents.parse()
    }

    fn merged_with_str(mut self, content: &str) -> ProjkitResult<Self> {
        let toml_value: toml::Value = content.parse()
            .map_err(|e| ProjkitError::ConfigError(format!("Failed to parse TOML: {}", e)))?;

        if let Some(table) = toml_value.get("reprojection").and_then(|v| v.as_table()) {
            if let Some(value) = table.get("to_latlon_precision") {
                self.to_latlon_precision = Self::as_precision(value, "to_latlon_precision")?;
            }
            if let Some(value) = table.get("from_latlon_precision") {
                self.from_latlon_precision = Self::as_precision(value, "from_latlon_precision")?;
            }
            if let Some(value) = table.get("densify_pts") {
                self.densify_pts = value.as_integer()
                    .and_then(|v| i32::try_from(v).ok())
                    .filter(|v| *v >= 0)
                    .ok_or_else(|| ProjkitError::ConfigError(
                        "reprojection.densify_pts must be a non-negative integer".to_string()))?;
            }
        }

        if let Some(table) = toml_value.get("merge").and_then(|v| v.as_table()) {
            if let Some(value) = table.get("algorithm") {
                let algorithm = value.as_str()
                    .ok_or_else(|| ProjkitError::ConfigError("merge.algorithm must be a string".to_string()))?;
                if algorithm != "union" && algorithm != "intersection" {
                    return Err(ProjkitError::ConfigError(format!(
                        "merge.algorithm must be 'union' or 'intersection', got '{}'", algorithm
                    )));
                }
                self.default_merge_algorithm = algorithm.to_string();
            }
        }

        Ok(self)
    }

    fn as_precision(value: &toml::Value, key: &str) -> ProjkitResult<u32> {
        value.as_integer()
            .and_then(|v| u32::try_from(v).ok())
            .filter(|v| *v <= 15)
            .ok_or_else(|| ProjkitError::ConfigError(format!(
                "reprojection.{} must be an integer between 0 and 15", key
            )))
    }
}
