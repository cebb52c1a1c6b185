use geo::MapCoords;
use geo_types::Polygon;
use log::info;

use crate::coordinate::{AffineTransform, BoundingBox, BoundsSource, Crs, PointSet};
use crate::projection::config::ProjkitConfig;
use crate::projection::errors::ProjkitResult;
use crate::projection::{compare, zones};
use crate::utils::{alignment_utils, bounds_utils, reprojection_utils};
use crate::utils::bounds_utils::MergedBounds;

/// Main interface to the projkit library
///
/// Wraps the free functions with the defaults of a loaded configuration.
pub struct ProjKit {
    config: ProjkitConfig,
}

impl ProjKit {
    /// Create a new ProjKit instance
    ///
    /// # Arguments
    /// * `config_file` - Optional path to a TOML file overriding the defaults
    ///
    /// # Returns
    /// A ProjKit instance or an error if the configuration cannot be read
    pub fn new(config_file: Option<&str>) -> ProjkitResult<Self> {
        let config = match config_file {
            Some(path) => {
                info!("Loading configuration from {}", path);
                ProjkitConfig::from_file(path)?
            },
            None => ProjkitConfig::default(),
        };

        Ok(ProjKit { config })
    }

    /// Create a ProjKit instance from an existing configuration
    pub fn with_config(config: ProjkitConfig) -> Self {
        ProjKit { config }
    }

    /// The configuration in use
    pub fn config(&self) -> &ProjkitConfig {
        &self.config
    }

    /// Get the UTM zone designator and its EPSG code for a point
    pub fn utm_zone(&self, lat: f64, lon: f64) -> ProjkitResult<(String, u32)> {
        let zone = zones::latlon_to_utm(lat, lon)?;
        let epsg = zones::utm_to_epsg(&zone)?;
        Ok((zone, epsg))
    }

    /// Get the EPSG code of a UTM zone designator
    pub fn utm_to_epsg(&self, zone: &str) -> ProjkitResult<u32> {
        zones::utm_to_epsg(zone)
    }

    /// Convert a bounds source into a polygon, optionally reprojected
    pub fn bounds2poly(&self, bounds: &BoundsSource, in_crs: Option<&Crs>, out_crs: Option<&Crs>) -> ProjkitResult<Polygon<f64>> {
        bounds_utils::bounds2poly(bounds, in_crs, out_crs)
    }

    /// Merge bounds with the given algorithm, or the configured one
    pub fn merge_bounds(&self,
                        bounds_list: &[BoundsSource],
                        resolution: Option<f64>,
                        merging_algorithm: Option<&str>) -> ProjkitResult<BoundingBox> {
        let algorithm = merging_algorithm.unwrap_or(self.config.default_merge_algorithm.as_str());
        let merged = bounds_utils::merge_bounds(bounds_list, resolution, algorithm, true)?;
        Ok(merged.to_bounding_box())
    }

    /// Merge bounds, choosing the output form
    pub fn merge_bounds_as(&self,
                           bounds_list: &[BoundsSource],
                           resolution: Option<f64>,
                           merging_algorithm: &str,
                           return_as_named_box: bool) -> ProjkitResult<MergedBounds> {
        bounds_utils::merge_bounds(bounds_list, resolution, merging_algorithm, return_as_named_box)
    }

    /// Align bounds to a reference grid
    pub fn align_bounds(&self, ref_transform: &AffineTransform, bounds: BoundingBox) -> ProjkitResult<BoundingBox> {
        alignment_utils::align_bounds(ref_transform, bounds)
    }

    /// Reproject points between two coordinate systems
    pub fn reproject_points(&self, points: &PointSet, in_crs: &Crs, out_crs: &Crs) -> ProjkitResult<PointSet> {
        reprojection_utils::reproject_points(points, in_crs, out_crs)
    }

    /// Reproject points to (lat, lon) with the configured precision
    pub fn reproject_to_latlon(&self, points: &PointSet, in_crs: &Crs) -> ProjkitResult<PointSet> {
        reprojection_utils::reproject_to_latlon(points, in_crs, Some(self.config.to_latlon_precision))
    }

    /// Reproject (lat, lon) points with the configured precision
    pub fn reproject_from_latlon(&self, points: &PointSet, out_crs: &Crs) -> ProjkitResult<PointSet> {
        reprojection_utils::reproject_from_latlon(points, out_crs, Some(self.config.from_latlon_precision))
    }

    /// Reproject a geometry between two coordinate systems
    pub fn reproject_shape<G>(&self, shape: &G, in_crs: &Crs, out_crs: &Crs) -> ProjkitResult<G>
    where
        G: MapCoords<f64, f64, Output = G> + Clone,
    {
        reprojection_utils::reproject_shape(shape, in_crs, out_crs)
    }

    /// Reproject bounds with the configured edge densification
    pub fn transform_bounds(&self, bounds: &BoundingBox, in_crs: &Crs, out_crs: &Crs) -> ProjkitResult<BoundingBox> {
        reprojection_utils::get_bounds_projected(bounds, in_crs, out_crs, Some(self.config.densify_pts))
    }

    /// Check whether two CRS descriptors are exactly the same
    pub fn compare_proj(&self, crs1: &Crs, crs2: &Crs) -> bool {
        compare::compare_proj(crs1, crs2)
    }
}
