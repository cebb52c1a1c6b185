//! Coordinate transformation functionality

use log::debug;
use proj::Proj;

use super::bbox::BoundingBox;
use super::crs::Crs;
use super::points::PointSet;
use crate::projection::errors::{ProjkitError, ProjkitResult};

/// Transformer for converting coordinates between two coordinate systems
///
/// Axis order is always (x, y): easting/longitude first. When both
/// systems are exactly the same no PROJ object is built and every
/// transform returns its input.
pub struct CoordinateTransformer {
    from_crs: Crs,
    to_crs: Crs,
    proj: Option<Proj>,
}

impl CoordinateTransformer {
    /// Create a transformer from `from_crs` to `to_crs`
    pub fn new(from_crs: &Crs, to_crs: &Crs) -> ProjkitResult<Self> {
        if crate::projection::compare::compare_proj(from_crs, to_crs) {
            debug!("Source and target CRS are identical ({}), using identity transform", from_crs);
            return Ok(CoordinateTransformer {
                from_crs: from_crs.clone(),
                to_crs: to_crs.clone(),
                proj: None,
            });
        }

        debug!("Creating transformer {} -> {}", from_crs, to_crs);
        let proj = Proj::new_known_crs(&from_crs.definition(), &to_crs.definition(), None)
            .map_err(|e| ProjkitError::ProjectionError(format!(
                "Failed to create transformation from {} to {}: {}", from_crs, to_crs, e
            )))?;

        Ok(CoordinateTransformer {
            from_crs: from_crs.clone(),
            to_crs: to_crs.clone(),
            proj: Some(proj),
        })
    }

    /// Check whether this transformer leaves coordinates unchanged
    pub fn is_identity(&self) -> bool {
        self.proj.is_none()
    }

    /// Transform a single point
    pub fn transform_point(&self, x: f64, y: f64) -> ProjkitResult<(f64, f64)> {
        match &self.proj {
            Some(proj) => proj.convert((x, y)).map_err(|e| ProjkitError::ProjectionError(format!(
                "Failed to transform ({:.6}, {:.6}) from {} to {}: {}",
                x, y, self.from_crs, self.to_crs, e
            ))),
            None => Ok((x, y)),
        }
    }

    /// Transform every point of a point set
    pub fn transform_points(&self, points: &PointSet) -> ProjkitResult<PointSet> {
        let pairs = points.pairs()
            .map(|(x, y)| self.transform_point(x, y))
            .collect::<ProjkitResult<Vec<_>>>()?;

        Ok(PointSet::from_pairs(&pairs))
    }

    /// Transform a bounding box, densifying each edge with `densify_pts` points
    ///
    /// The result is the box enclosing the transformed boundary.
    pub fn transform_bbox(&self, bbox: &BoundingBox, densify_pts: i32) -> ProjkitResult<BoundingBox> {
        match &self.proj {
            Some(proj) => {
                let [left, bottom, right, top] = proj
                    .transform_bounds(bbox.left, bbox.bottom, bbox.right, bbox.top, densify_pts)
                    .map_err(|e| ProjkitError::ProjectionError(format!(
                        "Failed to transform bounds {:?} from {} to {}: {}",
                        bbox.as_tuple(), self.from_crs, self.to_crs, e
                    )))?;
                Ok(BoundingBox::new(left, bottom, right, top))
            },
            None => Ok(*bbox),
        }
    }
}
