//! Integration tests for reprojection through PROJ

extern crate std;

use geo::BoundingRect;
use geo_types::{coord, Geometry, LineString, Polygon};

use projkit::{
    bounds2poly, get_bounds_projected, reproject_from_latlon, reproject_points, reproject_shape,
    reproject_to_latlon, BoundingBox, BoundsSource, Crs, PointSet, ProjKit,
};

// WGS 84 / UTM zone 45N, around Mount Everest
fn utm45n() -> Crs {
    Crs::from_epsg(32645)
}

fn everest_bounds() -> BoundingBox {
    BoundingBox::new(478000.0, 3088490.0, 502000.0, 3108140.0)
}

fn sample_points() -> PointSet {
    let bounds = everest_bounds();
    let mut pairs = Vec::new();
    for i in 0..10 {
        for j in 0..10 {
            pairs.push((
                (bounds.left + 2377.0 * i as f64).floor(),
                (bounds.bottom + 1931.0 * j as f64).floor(),
            ));
        }
    }
    PointSet::from_pairs(&pairs)
}

#[test]
fn test_reproject_points_known_value() {
    // Central meridian of zone 31 on the equator
    let points = PointSet::new(vec![3.0], vec![0.0]).unwrap();
    let projected = reproject_points(&points, &Crs::from_epsg(4326), &Crs::from_epsg(32631)).unwrap();

    std::assert!((projected.xs()[0] - 500000.0).abs() < 1e-6);
    std::assert!(projected.ys()[0].abs() < 1e-6);
}

#[test]
fn test_latlon_roundtrip() {
    let points = sample_points();

    let latlon = reproject_to_latlon(&points, &utm45n(), None).unwrap();
    for (lat, lon) in latlon.pairs() {
        std::assert!((27.0..29.0).contains(&lat), "unexpected latitude {}", lat);
        std::assert!((86.0..88.0).contains(&lon), "unexpected longitude {}", lon);
    }

    let back = reproject_from_latlon(&latlon, &utm45n(), None).unwrap();
    for ((x, y), (x0, y0)) in back.pairs().zip(points.pairs()) {
        std::assert!((x - x0).abs() < 1e-6, "x {} != {}", x, x0);
        std::assert!((y - y0).abs() < 1e-6, "y {} != {}", y, y0);
    }
}

#[test]
fn test_reproject_shape_roundtrip() {
    let bounds = everest_bounds();
    let polygon = Polygon::new(
        LineString::from(vec![
            (bounds.left, bounds.bottom),
            (bounds.right, bounds.bottom),
            (bounds.right, bounds.top),
            (bounds.left, bounds.bottom),
        ]),
        vec![],
    );
    let geometry = Geometry::Polygon(polygon);

    let geographic = reproject_shape(&geometry, &utm45n(), &Crs::from_epsg(4326)).unwrap();
    let rect = geographic.bounding_rect().unwrap();
    std::assert!(rect.min().x > 86.0 && rect.max().x < 88.0);
    std::assert!(rect.min().y > 27.0 && rect.max().y < 29.0);

    let back = reproject_shape(&geographic, &Crs::from_epsg(4326), &utm45n()).unwrap();
    match (&back, &geometry) {
        (Geometry::Polygon(a), Geometry::Polygon(b)) => {
            for (ca, cb) in a.exterior().coords().zip(b.exterior().coords()) {
                std::assert!((ca.x - cb.x).abs() < 1e-4);
                std::assert!((ca.y - cb.y).abs() < 1e-4);
            }
        },
        _ => panic!("geometry type changed during reprojection"),
    }

    // Same CRS: returned unchanged
    let same = reproject_shape(&geometry, &utm45n(), &Crs::from_string("epsg:32645").unwrap()).unwrap();
    std::assert_eq!(same, geometry);

    // Same PROJ parameters in another order: also unchanged
    let reordered = reproject_shape(
        &geometry,
        &Crs::from_string("+proj=utm +zone=45 +datum=WGS84 +units=m").unwrap(),
        &Crs::from_string("+datum=WGS84 +units=m +proj=utm +zone=45").unwrap(),
    ).unwrap();
    std::assert_eq!(reordered, geometry);
}

#[test]
fn test_densified_bounds_contain_corner_reprojection() {
    let bounds = everest_bounds();
    let wgs84 = Crs::from_epsg(4326);

    let corners = bounds2poly(&BoundsSource::from(bounds), Some(&utm45n()), Some(&wgs84)).unwrap();
    let corner_rect = corners.bounding_rect().unwrap();
    let densified = get_bounds_projected(&bounds, &utm45n(), &wgs84, Some(100)).unwrap();

    let eps = 1e-9;
    std::assert!(densified.left <= corner_rect.min().x + eps);
    std::assert!(densified.bottom <= corner_rect.min().y + eps);
    std::assert!(densified.right >= corner_rect.max().x - eps);
    std::assert!(densified.top >= corner_rect.max().y - eps);
}

#[test]
fn test_bounds2poly_reprojects_corners() {
    let wgs84 = Crs::from_epsg(4326);
    let source = BoundsSource::from([2.0, 1.0, 4.0, 2.0]);

    let poly = bounds2poly(&source, Some(&wgs84), Some(&Crs::from_epsg(32631))).unwrap();
    let corners: Vec<_> = poly.exterior().coords().copied().collect();

    // (lon 2, lat 1) lies west of the central meridian, (lon 4, lat 1) east of it
    std::assert!(corners[0].x < 500000.0);
    std::assert!(corners[1].x > 500000.0);
    std::assert!(corners[2].y > corners[1].y);
    std::assert_eq!(corners[0], corners[4]);
    std::assert_ne!(corners[0], coord! { x: 2.0, y: 1.0 });
}

#[test]
fn test_facade_uses_configured_precision() {
    let kit = ProjKit::new(None).unwrap();
    let points = PointSet::new(vec![500000.0], vec![3100000.0]).unwrap();

    let latlon = kit.reproject_to_latlon(&points, &utm45n()).unwrap();
    let scaled = latlon.xs()[0] * 1e8;
    std::assert!((scaled - scaled.round()).abs() < 1e-3);

    let (zone, epsg) = kit.utm_zone(latlon.xs()[0], latlon.ys()[0]).unwrap();
    std::assert_eq!(zone, "45N");
    std::assert_eq!(epsg, 32645);
}
