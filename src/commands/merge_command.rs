//! Bounds merging command

use clap::ArgMatches;
use log::info;

use crate::api::ProjKit;
use crate::commands::command_traits::Command;
use crate::coordinate::{BoundingBox, BoundsSource};
use crate::projection::errors::{ProjkitError, ProjkitResult};

/// Command for merging several bounding boxes
pub struct MergeCommand<'a> {
    /// Bounds to merge, in input order
    bounds: Vec<BoundsSource>,
    /// Resolution the merged extent is snapped to
    resolution: Option<f64>,
    /// "union" or "intersection", the configured default if absent
    algorithm: Option<String>,
    kit: &'a ProjKit,
}

impl<'a> MergeCommand<'a> {
    /// Create a new merge command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `kit` - Library facade
    ///
    /// # Returns
    /// A new MergeCommand instance or an error
    pub fn new(args: &ArgMatches, kit: &'a ProjKit) -> ProjkitResult<Self> {
        let bounds = args.get_many::<String>("merge")
            .ok_or_else(|| ProjkitError::InvalidArgument("Missing bounds to merge".to_string()))?
            .map(|s| BoundingBox::from_string(s).map(BoundsSource::from))
            .collect::<ProjkitResult<Vec<_>>>()?;

        let resolution = match args.get_one::<String>("resolution") {
            Some(s) => Some(s.trim().parse::<f64>()
                .map_err(|_| ProjkitError::TypeError(format!("Invalid resolution: {}", s)))?),
            None => None,
        };

        let algorithm = args.get_one::<String>("algorithm").cloned();

        Ok(MergeCommand { bounds, resolution, algorithm, kit })
    }
}

impl<'a> Command for MergeCommand<'a> {
    fn execute(&self) -> ProjkitResult<String> {
        info!("Merging {} bounds", self.bounds.len());
        let merged = self.kit.merge_bounds(&self.bounds, self.resolution, self.algorithm.as_deref())?;
        Ok(format!("{},{},{},{}", merged.left, merged.bottom, merged.right, merged.top))
    }
}
