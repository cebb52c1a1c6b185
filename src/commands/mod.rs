//! CLI command implementations
//!
//! This module contains implementations of the commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod zone_command;
pub mod merge_command;
pub mod align_command;
pub mod reproject_command;

pub use command_traits::{Command, CommandFactory};
pub use zone_command::ZoneCommand;
pub use merge_command::MergeCommand;
pub use align_command::AlignCommand;
pub use reproject_command::ReprojectCommand;

use clap::ArgMatches;
use crate::api::ProjKit;
use crate::projection::errors::{ProjkitError, ProjkitResult};

/// Factory for creating command instances based on CLI arguments
pub struct ProjkitCommandFactory;

impl ProjkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        ProjkitCommandFactory
    }
}

impl Default for ProjkitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for ProjkitCommandFactory {
    fn create_command(&self, args: &ArgMatches, kit: &'a ProjKit) -> ProjkitResult<Box<dyn Command + 'a>> {
        if args.contains_id("latlon") || args.contains_id("zone") {
            Ok(Box::new(ZoneCommand::new(args, kit)?))
        } else if args.contains_id("merge") {
            Ok(Box::new(MergeCommand::new(args, kit)?))
        } else if args.contains_id("align") {
            Ok(Box::new(AlignCommand::new(args, kit)?))
        } else if args.contains_id("reproject") || args.contains_id("transform-bounds") {
            // Point and bounds reprojection both use the ReprojectCommand
            Ok(Box::new(ReprojectCommand::new(args, kit)?))
        } else {
            Err(ProjkitError::InvalidArgument(
                "Nothing to do. Use one of --latlon, --zone, --merge, --align, --reproject, --transform-bounds".to_string()))
        }
    }
}
