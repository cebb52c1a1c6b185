//! Bounds utility functions
//!
//! Conversion of bounds-bearing inputs into polygons, and merging of
//! several bounds into one by union or intersection.

use std::fmt;
use std::str::FromStr;

use geo::BoundingRect;
use geo_types::{coord, LineString, Polygon, Rect};
use log::{debug, warn};

use crate::coordinate::{BoundingBox, BoundsSource, Crs, PointSet};
use crate::projection::errors::{ProjkitError, ProjkitResult};
use crate::utils::reprojection_utils::reproject_points;

/// How a list of bounds is combined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeAlgorithm {
    Union,
    Intersection,
}

impl FromStr for MergeAlgorithm {
    type Err = ProjkitError;

    fn from_str(s: &str) -> ProjkitResult<Self> {
        match s {
            "union" => Ok(MergeAlgorithm::Union),
            "intersection" => Ok(MergeAlgorithm::Intersection),
            _ => Err(ProjkitError::InvalidArgument(format!(
                "merging_algorithm must be 'union' or 'intersection', got '{}'", s
            ))),
        }
    }
}

impl fmt::Display for MergeAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergeAlgorithm::Union => write!(f, "union"),
            MergeAlgorithm::Intersection => write!(f, "intersection"),
        }
    }
}

/// Output of `merge_bounds`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MergedBounds {
    /// (left, bottom, right, top)
    Tuple((f64, f64, f64, f64)),
    /// Named-field box
    Named(BoundingBox),
}

impl MergedBounds {
    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        match self {
            MergedBounds::Tuple(t) => *t,
            MergedBounds::Named(bbox) => bbox.as_tuple(),
        }
    }

    pub fn to_bounding_box(&self) -> BoundingBox {
        BoundingBox::from(self.as_tuple())
    }

    pub fn left(&self) -> f64 {
        self.as_tuple().0
    }

    pub fn bottom(&self) -> f64 {
        self.as_tuple().1
    }

    pub fn right(&self) -> f64 {
        self.as_tuple().2
    }

    pub fn top(&self) -> f64 {
        self.as_tuple().3
    }
}

/// Convert a bounds source into a polygon, optionally in another CRS
///
/// The CRS of an extent or bounds object replaces `in_crs`. When both an
/// input and an output CRS are known, the four corners are reprojected
/// one by one; edges are not densified, so for strongly non-linear
/// transforms use `get_bounds_projected` instead.
///
/// # Arguments
/// * `bounds_geom` - The bounds source
/// * `in_crs` - Input CRS, used for plain coordinates
/// * `out_crs` - Output CRS
///
/// # Returns
/// Polygon with corners (xmin,ymin), (xmax,ymin), (xmax,ymax), (xmin,ymax)
pub fn bounds2poly(bounds_geom: &BoundsSource, in_crs: Option<&Crs>, out_crs: Option<&Crs>) -> ProjkitResult<Polygon<f64>> {
    let bbox = bounds_geom.bounds();
    let in_crs = match bounds_geom {
        BoundsSource::FromExtentObject { crs, .. } | BoundsSource::FromBoundsObject { crs, .. } => crs.as_ref(),
        BoundsSource::FromCoordinates(_) => in_crs,
    };

    let mut corners = PointSet::from_pairs(&[
        (bbox.left, bbox.bottom),
        (bbox.right, bbox.bottom),
        (bbox.right, bbox.top),
        (bbox.left, bbox.top),
    ]);

    if let (Some(in_crs), Some(out_crs)) = (in_crs, out_crs) {
        debug!("Reprojecting bounds corners from {} to {}", in_crs, out_crs);
        corners = reproject_points(&corners, in_crs, out_crs)?;
    }

    let ring: LineString<f64> = corners.pairs().map(|(x, y)| coord! { x: x, y: y }).collect();
    Ok(Polygon::new(ring, vec![]))
}

/// Merge a list of bounds into single bounds
///
/// CRS differences between elements are not checked.
///
/// # Arguments
/// * `bounds_list` - Bounds sources, at least one
/// * `resolution` - If given, right and top are padded outward so that
///   width and height become multiples of it
/// * `merging_algorithm` - "union" or "intersection"
/// * `return_as_named_box` - Return a `BoundingBox` instead of a tuple
///
/// # Returns
/// The merged (left, bottom, right, top) bounds
pub fn merge_bounds(
    bounds_list: &[BoundsSource],
    resolution: Option<f64>,
    merging_algorithm: &str,
    return_as_named_box: bool,
) -> ProjkitResult<MergedBounds> {
    let algorithm: MergeAlgorithm = merging_algorithm.parse()?;

    let (first, rest) = bounds_list.split_first()
        .ok_or_else(|| ProjkitError::InvalidArgument("bounds_list must contain at least one bounds".to_string()))?;

    if let Some(res) = resolution {
        if !res.is_finite() || res <= 0.0 {
            return Err(ProjkitError::InvalidArgument(format!(
                "resolution must be a positive number, got {}", res
            )));
        }
    }

    let mut merged = polygon_extent(&bounds2poly(first, None, None)?)?;

    for bounds_geom in rest {
        let extent = polygon_extent(&bounds2poly(bounds_geom, None, None)?)?;

        merged = match algorithm {
            MergeAlgorithm::Union => union_extent(&merged, &extent),
            MergeAlgorithm::Intersection => intersection_extent(&merged, &extent)
                .ok_or_else(|| ProjkitError::EmptyGeometry(
                    "bounds do not intersect, merged extent is empty".to_string()))?,
        };
    }

    let mut merged_bounds = BoundingBox::from(merged);

    // Make sure that extent is a multiple of resolution
    if let Some(res) = resolution {
        merged_bounds.right += snap_padding(merged_bounds.width(), res);
        merged_bounds.top += snap_padding(merged_bounds.height(), res);
    }

    if merged_bounds.is_degenerate() {
        warn!("Merged bounds {:?} have no area", merged_bounds.as_tuple());
    }

    debug!("Merged {} bounds by {} into {:?}", bounds_list.len(), algorithm, merged_bounds.as_tuple());

    if return_as_named_box {
        Ok(MergedBounds::Named(merged_bounds))
    } else {
        Ok(MergedBounds::Tuple(merged_bounds.as_tuple()))
    }
}

/// Amount to add to `span` to reach the next multiple of `resolution`
fn snap_padding(span: f64, resolution: f64) -> f64 {
    let modulo = span % resolution;
    if modulo == 0.0 {
        0.0
    } else {
        resolution - modulo
    }
}

fn polygon_extent(poly: &Polygon<f64>) -> ProjkitResult<Rect<f64>> {
    poly.bounding_rect()
        .ok_or_else(|| ProjkitError::EmptyGeometry("polygon has no coordinates".to_string()))
}

// The bounding box of the union of two boxes is the box spanning both
fn union_extent(a: &Rect<f64>, b: &Rect<f64>) -> Rect<f64> {
    Rect::new(
        coord! { x: a.min().x.min(b.min().x), y: a.min().y.min(b.min().y) },
        coord! { x: a.max().x.max(b.max().x), y: a.max().y.max(b.max().y) },
    )
}

// Boxes touching along an edge or a corner intersect in a line or a point
fn intersection_extent(a: &Rect<f64>, b: &Rect<f64>) -> Option<Rect<f64>> {
    let left = a.min().x.max(b.min().x);
    let bottom = a.min().y.max(b.min().y);
    let right = a.max().x.min(b.max().x);
    let top = a.max().y.min(b.max().y);

    if left > right || bottom > top {
        return None;
    }

    Some(Rect::new(coord! { x: left, y: bottom }, coord! { x: right, y: top }))
}
