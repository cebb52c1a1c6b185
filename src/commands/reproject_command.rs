//! Reprojection command
//!
//! Reprojects a list of points or a bounding box between two coordinate
//! systems, or points to and from lat/lon.

use clap::ArgMatches;
use log::info;

use crate::api::ProjKit;
use crate::commands::command_traits::Command;
use crate::coordinate::{BoundingBox, Crs, PointSet};
use crate::projection::errors::{ProjkitError, ProjkitResult};
use crate::utils::reprojection_utils::get_bounds_projected;

enum ReprojectTarget {
    Points(PointSet),
    ToLatLon(PointSet),
    FromLatLon(PointSet),
    Bounds(BoundingBox),
}

/// Command for reprojecting points and bounds
pub struct ReprojectCommand<'a> {
    target: ReprojectTarget,
    source_crs: Option<Crs>,
    target_crs: Option<Crs>,
    /// Edge densification, the configured default if absent
    densify_pts: Option<i32>,
    kit: &'a ProjKit,
}

impl<'a> ReprojectCommand<'a> {
    /// Create a new reproject command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `kit` - Library facade
    ///
    /// # Returns
    /// A new ReprojectCommand instance or an error
    pub fn new(args: &ArgMatches, kit: &'a ProjKit) -> ProjkitResult<Self> {
        let source_crs = args.get_one::<String>("s-crs").map(|s| Crs::from_string(s)).transpose()?;
        let target_crs = args.get_one::<String>("t-crs").map(|s| Crs::from_string(s)).transpose()?;

        let densify_pts = match args.get_one::<String>("densify") {
            Some(s) => Some(s.trim().parse::<i32>().ok()
                .filter(|n| *n >= 0)
                .ok_or_else(|| ProjkitError::InvalidArgument(format!(
                    "--densify must be a non-negative integer, got {}", s
                )))?),
            None => None,
        };

        let target = if let Some(bbox) = args.get_one::<String>("transform-bounds") {
            ReprojectTarget::Bounds(BoundingBox::from_string(bbox)?)
        } else if let Some(points) = args.get_one::<String>("reproject") {
            let points = PointSet::from_string(points)?;
            if args.get_flag("to-latlon") {
                ReprojectTarget::ToLatLon(points)
            } else if args.get_flag("from-latlon") {
                ReprojectTarget::FromLatLon(points)
            } else {
                ReprojectTarget::Points(points)
            }
        } else {
            return Err(ProjkitError::InvalidArgument(
                "Missing input. Use --reproject or --transform-bounds".to_string()));
        };

        Ok(ReprojectCommand { target, source_crs, target_crs, densify_pts, kit })
    }

    fn require(crs: &Option<Crs>, flag: &str) -> ProjkitResult<Crs> {
        crs.clone().ok_or_else(|| ProjkitError::InvalidArgument(format!("Missing {} CRS", flag)))
    }

    fn format_points(points: &PointSet) -> String {
        points.pairs()
            .map(|(x, y)| format!("{},{}", x, y))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl<'a> Command for ReprojectCommand<'a> {
    fn execute(&self) -> ProjkitResult<String> {
        match &self.target {
            ReprojectTarget::Points(points) => {
                let (s_crs, t_crs) = (Self::require(&self.source_crs, "--s-crs")?, Self::require(&self.target_crs, "--t-crs")?);
                info!("Reprojecting {} points from {} to {}", points.len(), s_crs, t_crs);
                Ok(Self::format_points(&self.kit.reproject_points(points, &s_crs, &t_crs)?))
            },
            ReprojectTarget::ToLatLon(points) => {
                let s_crs = Self::require(&self.source_crs, "--s-crs")?;
                info!("Reprojecting {} points from {} to lat/lon", points.len(), s_crs);
                Ok(Self::format_points(&self.kit.reproject_to_latlon(points, &s_crs)?))
            },
            ReprojectTarget::FromLatLon(points) => {
                let t_crs = Self::require(&self.target_crs, "--t-crs")?;
                info!("Reprojecting {} points from lat/lon to {}", points.len(), t_crs);
                Ok(Self::format_points(&self.kit.reproject_from_latlon(points, &t_crs)?))
            },
            ReprojectTarget::Bounds(bbox) => {
                let (s_crs, t_crs) = (Self::require(&self.source_crs, "--s-crs")?, Self::require(&self.target_crs, "--t-crs")?);
                info!("Transforming bounds {:?} from {} to {}", bbox.as_tuple(), s_crs, t_crs);
                let projected = match self.densify_pts {
                    Some(n) => get_bounds_projected(bbox, &s_crs, &t_crs, Some(n))?,
                    None => self.kit.transform_bounds(bbox, &s_crs, &t_crs)?,
                };
                Ok(format!("{},{},{},{}", projected.left, projected.bottom, projected.right, projected.top))
            },
        }
    }
}
