//! Bounds-bearing inputs
//!
//! Vector layers, rasters and plain coordinate lists all carry an extent.
//! `BoundsSource` names which of the three an input is, so the helpers in
//! `utils::bounds_utils` can treat them uniformly.

use super::bbox::BoundingBox;
use super::crs::Crs;
use crate::projection::errors::{ProjkitError, ProjkitResult};

/// Vector-layer-like object exposing the extent of all of its features
pub trait TotalBoundsProvider {
    /// Extent as (xmin, ymin, xmax, ymax)
    fn total_bounds(&self) -> [f64; 4];
    /// CRS the extent is expressed in
    fn crs(&self) -> Option<Crs>;
}

/// Raster-like object exposing its extent
pub trait BoundsProvider {
    /// Extent as (left, bottom, right, top)
    fn bounds(&self) -> BoundingBox;
    /// CRS the extent is expressed in
    fn crs(&self) -> Option<Crs>;
}

/// An input that carries bounds
#[derive(Debug, Clone, PartialEq)]
pub enum BoundsSource {
    /// Taken from a vector-layer-like object
    FromExtentObject { bounds: BoundingBox, crs: Option<Crs> },
    /// Taken from a raster-like object
    FromBoundsObject { bounds: BoundingBox, crs: Option<Crs> },
    /// Plain (xmin, ymin, xmax, ymax) coordinates with no CRS
    FromCoordinates(BoundingBox),
}

impl BoundsSource {
    /// Build a source from a vector-layer-like object
    pub fn from_extent_object<T: TotalBoundsProvider + ?Sized>(object: &T) -> Self {
        BoundsSource::FromExtentObject {
            bounds: BoundingBox::from(object.total_bounds()),
            crs: object.crs(),
        }
    }

    /// Build a source from a raster-like object
    pub fn from_bounds_object<T: BoundsProvider + ?Sized>(object: &T) -> Self {
        BoundsSource::FromBoundsObject {
            bounds: object.bounds(),
            crs: object.crs(),
        }
    }

    /// The four-value extent
    pub fn bounds(&self) -> BoundingBox {
        match self {
            BoundsSource::FromExtentObject { bounds, .. }
            | BoundsSource::FromBoundsObject { bounds, .. }
            | BoundsSource::FromCoordinates(bounds) => *bounds,
        }
    }

    /// The CRS carried by the source, if any
    pub fn crs(&self) -> Option<&Crs> {
        match self {
            BoundsSource::FromExtentObject { crs, .. }
            | BoundsSource::FromBoundsObject { crs, .. } => crs.as_ref(),
            BoundsSource::FromCoordinates(_) => None,
        }
    }
}

impl From<BoundingBox> for BoundsSource {
    fn from(bounds: BoundingBox) -> Self {
        BoundsSource::FromCoordinates(bounds)
    }
}

impl From<[f64; 4]> for BoundsSource {
    fn from(values: [f64; 4]) -> Self {
        BoundsSource::FromCoordinates(BoundingBox::from(values))
    }
}

impl From<(f64, f64, f64, f64)> for BoundsSource {
    fn from(values: (f64, f64, f64, f64)) -> Self {
        BoundsSource::FromCoordinates(BoundingBox::from(values))
    }
}

impl TryFrom<&[f64]> for BoundsSource {
    type Error = ProjkitError;

    fn try_from(values: &[f64]) -> ProjkitResult<Self> {
        match values {
            &[xmin, ymin, xmax, ymax] => Ok(BoundsSource::FromCoordinates(
                BoundingBox::new(xmin, ymin, xmax, ymax))),
            _ => Err(ProjkitError::InvalidArgument(format!(
                "bounds must be a list of 4 coordinates (xmin, ymin, xmax, ymax) \
                 or an object with bounds or total_bounds, got {} values",
                values.len()
            ))),
        }
    }
}
