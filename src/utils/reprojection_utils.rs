//! Point and geometry reprojection utilities
//!
//! This module forwards coordinates through `CoordinateTransformer`, adds
//! fixed bindings to and from geographic WGS 84, and reprojects whole
//! geometries and bounds.

use geo::MapCoords;
use geo_types::coord;
use log::debug;

use crate::coordinate::{BoundingBox, CoordinateTransformer, Crs, PointSet};
use crate::projection::constants::{DENSIFY_PTS, FROM_LATLON_PRECISION, TO_LATLON_PRECISION, WGS84_CRS};
use crate::projection::errors::ProjkitResult;

/// Reproject a set of points from `in_crs` to `out_crs`
///
/// # Arguments
/// * `pts` - Points of shape (2, N), i.e. (x coords, y coords)
/// * `in_crs` - Input CRS
/// * `out_crs` - Output CRS
///
/// # Returns
/// Reprojected points, of the same shape as `pts`
pub fn reproject_points(pts: &PointSet, in_crs: &Crs, out_crs: &Crs) -> ProjkitResult<PointSet> {
    let transformer = CoordinateTransformer::new(in_crs, out_crs)?;
    let projected = transformer.transform_points(pts)?;
    debug!("Reprojected {} points from {} to {}", pts.len(), in_crs, out_crs);
    Ok(projected)
}

/// Reproject a set of points from `in_crs` to lat/lon
///
/// # Arguments
/// * `pts` - Points of shape (2, N), i.e. (x coords, y coords)
/// * `in_crs` - Input CRS
/// * `precision` - Output rounding in decimals, 8 by default (~1 mm)
///
/// # Returns
/// Points as (latitudes, longitudes)
pub fn reproject_to_latlon(pts: &PointSet, in_crs: &Crs, precision: Option<u32>) -> ProjkitResult<PointSet> {
    let lonlat = reproject_points(pts, in_crs, &WGS84_CRS)?;
    Ok(lonlat.swapped().rounded(precision.unwrap_or(TO_LATLON_PRECISION)))
}

/// Reproject a set of points from lat/lon to `out_crs`
///
/// # Arguments
/// * `pts` - Points as (latitudes, longitudes)
/// * `out_crs` - Output CRS
/// * `precision` - Output rounding in decimals, 2 by default (cm in metric units)
///
/// # Returns
/// Points as (x coords, y coords)
pub fn reproject_from_latlon(pts: &PointSet, out_crs: &Crs, precision: Option<u32>) -> ProjkitResult<PointSet> {
    let lonlat = pts.clone().swapped();
    let projected = reproject_points(&lonlat, &WGS84_CRS, out_crs)?;
    Ok(projected.rounded(precision.unwrap_or(FROM_LATLON_PRECISION)))
}

/// Reproject a geometry from one CRS into another
///
/// Every vertex is transformed in (x, y) order. When both CRSs are the
/// same the geometry is returned unchanged.
pub fn reproject_shape<G>(inshape: &G, in_crs: &Crs, out_crs: &Crs) -> ProjkitResult<G>
where
    G: MapCoords<f64, f64, Output = G> + Clone,
{
    let transformer = CoordinateTransformer::new(in_crs, out_crs)?;
    if transformer.is_identity() {
        return Ok(inshape.clone());
    }

    inshape.try_map_coords(|c| {
        transformer.transform_point(c.x, c.y).map(|(x, y)| coord! { x: x, y: y })
    })
}

/// Reproject bounds, densifying each edge before transforming
///
/// # Arguments
/// * `bounds` - Bounds in `in_crs`
/// * `in_crs` - Input CRS
/// * `out_crs` - Output CRS
/// * `densify_pts` - Points inserted along each edge, 5000 by default
///
/// # Returns
/// The box enclosing the transformed boundary
pub fn get_bounds_projected(
    bounds: &BoundingBox,
    in_crs: &Crs,
    out_crs: &Crs,
    densify_pts: Option<i32>,
) -> ProjkitResult<BoundingBox> {
    let densify_pts = densify_pts.unwrap_or(DENSIFY_PTS);
    let transformer = CoordinateTransformer::new(in_crs, out_crs)?;
    let projected = transformer.transform_bbox(bounds, densify_pts)?;
    debug!("Projected bounds {:?} ({} pts per edge) to {:?}",
           bounds.as_tuple(), densify_pts, projected.as_tuple());
    Ok(projected)
}
