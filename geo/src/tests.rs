#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn wrap_360_basic() {
    assert!((wrap_360(0.0) - 0.0).abs() < 1e-12);
    assert!((wrap_360(370.0) - 10.0).abs() < 1e-12);
    assert!((wrap_360(-30.0) - 330.0).abs() < 1e-12);
    assert!((wrap_360(720.5) - 0.5).abs() < 1e-9);
}

#[test]
fn location_at_zero_distance_keeps_position() {
    let o = Location::new(34.0, -118.0, 5.0);
    let p = location_at(o, 0.0, 123.0, 2.5);
    assert_eq!(p.lat, o.lat);
    assert_eq!(p.lon, o.lon);
    assert!((p.depth - 7.5).abs() < 1e-12);
}

#[test]
fn location_at_north_moves_latitude_only() {
    let o = Location::new(0.0, 20.0, 0.0);
    let p = location_at(o, 111.0, 0.0, 0.0);
    // ~1 degree of latitude per ~111.19 km on the sphere
    assert!((p.lat - 111.0 / EARTH_RADIUS_KM * 180.0 / std::f64::consts::PI).abs() < 1e-9);
    assert!((p.lon - 20.0).abs() < 1e-9);
}

#[test]
fn location_at_round_trip_distance_and_azimuth() {
    let o = Location::new(37.5, 15.0, 0.0);
    for az in [0.0, 45.0, 137.0, 250.0, 359.0] {
        let p = location_at(o, 42.0, az, 0.0);
        let d = horizontal_distance_km(o, p);
        assert!((d - 42.0).abs() < 1e-6, "distance {d} for az {az}");
        let a = azimuth_deg(o, p);
        let mut diff = (a - az).abs();
        if diff > 180.0 {
            diff = 360.0 - diff;
        }
        assert!(diff < 0.05, "azimuth {a} vs {az}");
    }
}

#[test]
fn polygon_contains_rect() {
    let p = Polygon::rect(-0.5, 0.5, -0.5, 1.5);
    assert!(p.contains(0.0, 0.0));
    assert!(p.contains(0.0, 1.0));
    assert!(p.contains(0.4, 1.4));
    assert!(!p.contains(0.6, 0.0));
    assert!(!p.contains(0.0, 1.6));
    assert!(!p.contains(-0.6, -0.6));
}

#[test]
fn polygon_contains_concave() {
    // L-shape: the notch at the upper right is outside
    let p = Polygon::new(vec![(0.0, 0.0), (0.0, 2.0), (1.0, 2.0), (1.0, 1.0), (2.0, 1.0), (2.0, 0.0)]);
    assert!(p.contains(0.5, 0.5));
    assert!(p.contains(0.5, 1.5));
    assert!(p.contains(1.5, 0.5));
    assert!(!p.contains(1.5, 1.5));
}

#[test]
fn polygon_bounds() {
    let p = Polygon::new(vec![(1.0, -3.0), (4.0, 2.0), (-2.0, 0.5)]);
    let (lat0, lat1, lon0, lon1) = p.bounds();
    assert_eq!(lat0, -2.0);
    assert_eq!(lat1, 4.0);
    assert_eq!(lon0, -3.0);
    assert_eq!(lon1, 2.0);
}
