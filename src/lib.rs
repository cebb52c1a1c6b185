pub mod projection;
pub mod coordinate;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::ProjKit;

pub use coordinate::{AffineTransform, BoundingBox, BoundsProvider, BoundsSource, CoordinateTransformer, Crs, PointSet, TotalBoundsProvider};
pub use projection::{compare_proj, latlon_to_utm, utm_to_epsg, ProjkitError, ProjkitResult, UtmZone, WGS84_CRS};
pub use utils::alignment_utils::align_bounds;
pub use utils::bounds_utils::{bounds2poly, merge_bounds, MergeAlgorithm, MergedBounds};
pub use utils::reprojection_utils::{get_bounds_projected, reproject_from_latlon, reproject_points, reproject_shape, reproject_to_latlon};
