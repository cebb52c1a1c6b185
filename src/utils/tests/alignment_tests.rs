//! Tests for grid alignment

extern crate std;

use crate::coordinate::{AffineTransform, BoundingBox};
use crate::projection::errors::ProjkitError;
use crate::utils::alignment_utils::align_bounds;

fn north_up() -> AffineTransform {
    AffineTransform::new(30.0, 0.0, 478000.0, 0.0, -30.0, 3108140.0)
}

fn is_multiple(value: f64, step: f64) -> bool {
    (value / step).fract() == 0.0
}

#[test]
fn test_align_bounds_north_up() {
    let aligned = align_bounds(&north_up(), (478010.0, 3088495.0, 501995.0, 3108130.0)).unwrap();
    std::assert_eq!(aligned, BoundingBox::new(478000.0, 3088490.0, 502000.0, 3108140.0));
}

#[test]
fn test_align_bounds_already_aligned() {
    let bounds = BoundingBox::new(478300.0, 3099140.0, 479800.0, 3107840.0);
    let aligned = align_bounds(&north_up(), bounds).unwrap();
    std::assert_eq!(aligned, bounds);
}

#[test]
fn test_align_bounds_contains_input_and_lies_on_grid() {
    let transform = north_up();

    for i in 0..40 {
        let offset = i as f64 * 7.25 - 120.0;
        let src = BoundingBox::new(
            478000.0 + offset,
            3090000.0 + offset * 3.0,
            479500.0 + offset * 2.0,
            3108140.0 + offset,
        );

        let aligned = align_bounds(&transform, src).unwrap();
        std::assert!(aligned.contains(&src), "{:?} does not contain {:?}", aligned, src);
        std::assert!(is_multiple(aligned.left - transform.xoff(), transform.xres()));
        std::assert!(is_multiple(aligned.right - transform.xoff(), transform.xres()));
        std::assert!(is_multiple(aligned.top - transform.yoff(), transform.yres()));
        std::assert!(is_multiple(aligned.bottom - transform.yoff(), transform.yres()));
    }
}

#[test]
fn test_align_bounds_positive_yres() {
    // South-up grid: "top" is the edge at the origin row, the smaller y
    let transform = AffineTransform::new(10.0, 0.0, 0.0, 0.0, 10.0, 0.0);
    let aligned = align_bounds(&transform, BoundingBox::new(3.0, 95.0, 47.0, 52.0)).unwrap();

    std::assert_eq!(aligned, BoundingBox::new(0.0, 100.0, 50.0, 50.0));
    std::assert!(aligned.top <= 52.0);
    std::assert!(aligned.bottom >= 95.0);
}

#[test]
fn test_align_bounds_zero_resolution() {
    let transform = AffineTransform::new(0.0, 0.0, 0.0, 0.0, -30.0, 0.0);
    std::assert!(matches!(align_bounds(&transform, [0.0, 0.0, 1.0, 1.0]), Err(ProjkitError::InvalidArgument(_))));
}
