//! Tests for affine transforms

extern crate std;

use crate::coordinate::AffineTransform;
use crate::projection::errors::ProjkitError;

#[test]
fn test_affine_from_gdal() {
    let transform = AffineTransform::from_gdal([478000.0, 30.0, 0.0, 3108140.0, 0.0, -30.0]);
    std::assert_eq!(transform, AffineTransform::new(30.0, 0.0, 478000.0, 0.0, -30.0, 3108140.0));
    std::assert_eq!(transform.xres(), 30.0);
    std::assert_eq!(transform.yres(), -30.0);
    std::assert_eq!(transform.xoff(), 478000.0);
    std::assert_eq!(transform.yoff(), 3108140.0);
    std::assert_eq!(transform.apply(10.0, 2.0), (478300.0, 3108080.0));
}

#[test]
fn test_affine_from_string() {
    let transform = AffineTransform::from_string("30, 0, 100, 0, -30, 200").unwrap();
    std::assert_eq!(transform.yres(), -30.0);
    std::assert!(matches!(AffineTransform::from_string("30,0,100"), Err(ProjkitError::InvalidArgument(_))));
    std::assert!(matches!(AffineTransform::from_string("30,0,100,0,x,200"), Err(ProjkitError::TypeError(_))));
}
