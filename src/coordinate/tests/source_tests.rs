//! Tests for bounds sources

extern crate std;

use crate::coordinate::{BoundingBox, BoundsProvider, BoundsSource, Crs, TotalBoundsProvider};
use crate::projection::errors::ProjkitError;

struct Layer;

impl TotalBoundsProvider for Layer {
    fn total_bounds(&self) -> [f64; 4] {
        [1.0, 2.0, 3.0, 4.0]
    }

    fn crs(&self) -> Option<Crs> {
        Some(Crs::Epsg(32645))
    }
}

struct Raster;

impl BoundsProvider for Raster {
    fn bounds(&self) -> BoundingBox {
        BoundingBox::new(5.0, 6.0, 7.0, 8.0)
    }

    fn crs(&self) -> Option<Crs> {
        None
    }
}

#[test]
fn test_sources_from_objects() {
    let layer = BoundsSource::from_extent_object(&Layer);
    std::assert_eq!(layer.bounds(), BoundingBox::new(1.0, 2.0, 3.0, 4.0));
    std::assert_eq!(layer.crs(), Some(&Crs::Epsg(32645)));

    let raster = BoundsSource::from_bounds_object(&Raster);
    std::assert!(matches!(raster, BoundsSource::FromBoundsObject { .. }));
    std::assert_eq!(raster.crs(), None);
}

#[test]
fn test_sources_from_coordinates() {
    let source = BoundsSource::from([0.0, 0.0, 1.0, 1.0]);
    std::assert_eq!(source, BoundsSource::FromCoordinates(BoundingBox::new(0.0, 0.0, 1.0, 1.0)));

    let values = vec![0.0, 0.0, 1.0, 1.0];
    std::assert_eq!(BoundsSource::try_from(values.as_slice()).unwrap(), source);

    let values = vec![0.0, 0.0, 1.0];
    std::assert!(matches!(BoundsSource::try_from(values.as_slice()), Err(ProjkitError::InvalidArgument(_))));
}
