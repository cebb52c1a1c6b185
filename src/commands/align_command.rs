//! Grid alignment command

use clap::ArgMatches;
use log::info;

use crate::api::ProjKit;
use crate::commands::command_traits::Command;
use crate::coordinate::{AffineTransform, BoundingBox};
use crate::projection::errors::{ProjkitError, ProjkitResult};

/// Command for aligning bounds to a reference grid
pub struct AlignCommand<'a> {
    bounds: BoundingBox,
    transform: AffineTransform,
    kit: &'a ProjKit,
}

impl<'a> AlignCommand<'a> {
    /// Create a new align command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `kit` - Library facade
    ///
    /// # Returns
    /// A new AlignCommand instance or an error
    pub fn new(args: &ArgMatches, kit: &'a ProjKit) -> ProjkitResult<Self> {
        let bounds_str = args.get_one::<String>("align")
            .ok_or_else(|| ProjkitError::InvalidArgument("Missing bounds to align".to_string()))?;
        let bounds = BoundingBox::from_string(bounds_str)?;

        let transform_str = args.get_one::<String>("transform")
            .ok_or_else(|| ProjkitError::InvalidArgument(
                "Missing reference transform. Use --transform a,b,c,d,e,f".to_string()))?;
        let transform = AffineTransform::from_string(transform_str)?;

        Ok(AlignCommand { bounds, transform, kit })
    }
}

impl<'a> Command for AlignCommand<'a> {
    fn execute(&self) -> ProjkitResult<String> {
        info!("Aligning bounds {:?} to reference grid", self.bounds.as_tuple());
        let aligned = self.kit.align_bounds(&self.transform, self.bounds)?;
        Ok(format!("{},{},{},{}", aligned.left, aligned.bottom, aligned.right, aligned.top))
    }
}
