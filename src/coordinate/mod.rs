//! Coordinate handling for geospatial data
//!
//! This module provides the value types shared by the helpers:
//! CRS descriptors, bounding boxes, point sets, affine transforms,
//! bounds-bearing inputs and the PROJ-backed transformer.

mod affine;
mod bbox;
mod crs;
mod points;
mod source;
mod transform;
#[cfg(test)]
mod tests;

// Re-export key types
pub use self::affine::AffineTransform;
pub use self::bbox::BoundingBox;
pub use self::crs::Crs;
pub use self::points::{round_to, PointSet};
pub use self::source::{BoundsProvider, BoundsSource, TotalBoundsProvider};
pub use self::transform::CoordinateTransformer;
