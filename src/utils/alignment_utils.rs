//! Grid alignment utilities

use log::debug;

use crate::coordinate::{AffineTransform, BoundingBox};
use crate::projection::errors::{ProjkitError, ProjkitResult};

/// Align bounds to the grid of a reference transform
///
/// The distance between the reference origin and the output edges is a
/// multiple of the resolution, and the output always contains the input.
/// Works for both signs of the y resolution.
///
/// # Arguments
/// * `ref_transform` - Transform of the reference dataset
/// * `src_bounds` - Bounds to align, (left, bottom, right, top)
///
/// # Returns
/// The aligned bounds
pub fn align_bounds(ref_transform: &AffineTransform, src_bounds: impl Into<BoundingBox>) -> ProjkitResult<BoundingBox> {
    let src = src_bounds.into();
    let xres = ref_transform.xres();
    let yres = ref_transform.yres();
    let ref_left = ref_transform.xoff();
    let ref_top = ref_transform.yoff();

    if xres == 0.0 || yres == 0.0 || !xres.is_finite() || !yres.is_finite() {
        return Err(ProjkitError::InvalidArgument(format!(
            "reference transform must have non-zero finite resolution, got ({}, {})", xres, yres
        )));
    }

    let left = ref_left + ((src.left - ref_left) / xres).floor() * xres;
    let right = left + ((src.right - left) / xres).ceil() * xres;
    let top = ref_top + ((src.top - ref_top) / yres).floor() * yres;
    let bottom = top + ((src.bottom - top) / yres).ceil() * yres;

    let aligned = BoundingBox::new(left, bottom, right, top);
    debug!("Aligned bounds {:?} to grid ({}, {}) at origin ({}, {}): {:?}",
           src.as_tuple(), xres, yres, ref_left, ref_top, aligned.as_tuple());

    Ok(aligned)
}
