#![allow(clippy::similar_names, clippy::many_single_char_names)]
// Keep imports minimal; all math runs in f64 on a spherical Earth.

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A point on (or below) the Earth's surface.
///
/// Latitude and longitude in degrees, depth in kilometers positive down.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Location {
    /// Latitude in degrees, north positive.
    pub lat: f64,
    /// Longitude in degrees, east positive.
    pub lon: f64,
    /// Depth in kilometers below the surface (positive down).
    pub depth: f64,
}

impl Location {
    /// Location at the given latitude, longitude (degrees) and depth (km).
    #[must_use]
    pub const fn new(lat: f64, lon: f64, depth: f64) -> Self {
        Self { lat, lon, depth }
    }

    /// Same horizontal position at a different depth.
    #[must_use]
    pub const fn at_depth(self, depth: f64) -> Self {
        Self { lat: self.lat, lon: self.lon, depth }
    }
}

/// Wrap an angle in degrees into [0, 360).
#[inline]
#[must_use]
pub fn wrap_360(deg: f64) -> f64 {
    let w = deg % 360.0;
    if w < 0.0 {
        w + 360.0
    } else {
        w
    }
}

/// Direct geodesic problem on the sphere: the location reached from
/// `origin` after traveling `dist_km` horizontally along the azimuth
/// `az_deg` (degrees clockwise from north) and `dv_km` vertically
/// (positive down). Depth is carried through additively.
#[must_use]
pub fn location_at(origin: Location, dist_km: f64, az_deg: f64, dv_km: f64) -> Location {
    if dist_km == 0.0 {
        return Location::new(origin.lat, origin.lon, origin.depth + dv_km);
    }
    let lat1 = origin.lat.to_radians();
    let lon1 = origin.lon.to_radians();
    let az = az_deg.to_radians();
    let delta = dist_km / EARTH_RADIUS_KM;

    let sin_lat2 = lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * az.cos();
    let lat2 = sin_lat2.clamp(-1.0, 1.0).asin();
    let lon2 = lon1
        + (az.sin() * delta.sin() * lat1.cos()).atan2(delta.cos() - lat1.sin() * lat2.sin());

    Location::new(lat2.to_degrees(), lon2.to_degrees(), origin.depth + dv_km)
}

/// Initial great-circle azimuth from `a` to `b`, degrees in [0, 360).
#[must_use]
pub fn azimuth_deg(a: Location, b: Location) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlon = (b.lon - a.lon).to_radians();
    let y = dlon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();
    wrap_360(y.atan2(x).to_degrees())
}

/// Great-circle (haversine) surface distance between `a` and `b` in km.
/// Depths are ignored.
#[must_use]
pub fn horizontal_distance_km(a: Location, b: Location) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = lat2 - lat1;
    let dlon = (b.lon - a.lon).to_radians();
    let s = (dlat * 0.5).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon * 0.5).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * s.sqrt().clamp(-1.0, 1.0).asin()
}

/// A simple closed polygon in latitude/longitude space.
///
/// Vertices are (lat, lon) in degrees; the closing edge back to the
/// first vertex is implicit. Containment uses planar ray casting,
/// which is adequate for the regional (non-polar, non-antimeridian)
/// source zones this engine targets.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    verts: Vec<(f64, f64)>,
}

impl Polygon {
    /// Polygon from (lat, lon) vertices in order; at least 3 required.
    ///
    /// # Panics
    /// Panics when fewer than 3 vertices are supplied.
    #[must_use]
    pub fn new(verts: Vec<(f64, f64)>) -> Self {
        assert!(verts.len() >= 3, "polygon needs at least 3 vertices, got {}", verts.len());
        Self { verts }
    }

    /// Axis-aligned rectangle spanning the given latitude and longitude ranges.
    #[must_use]
    pub fn rect(lat_min: f64, lat_max: f64, lon_min: f64, lon_max: f64) -> Self {
        Self::new(vec![
            (lat_min, lon_min),
            (lat_min, lon_max),
            (lat_max, lon_max),
            (lat_max, lon_min),
        ])
    }

    /// Vertices in order, as (lat, lon) degrees.
    #[must_use]
    pub fn vertices(&self) -> &[(f64, f64)] {
        &self.verts
    }

    /// Bounding box as (`lat_min`, `lat_max`, `lon_min`, `lon_max`).
    #[must_use]
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        let mut lat_min = f64::INFINITY;
        let mut lat_max = f64::NEG_INFINITY;
        let mut lon_min = f64::INFINITY;
        let mut lon_max = f64::NEG_INFINITY;
        for &(lat, lon) in &self.verts {
            lat_min = lat_min.min(lat);
            lat_max = lat_max.max(lat);
            lon_min = lon_min.min(lon);
            lon_max = lon_max.max(lon);
        }
        (lat_min, lat_max, lon_min, lon_max)
    }

    /// Ray-casting containment test for a point at (lat, lon) degrees.
    /// Points exactly on an edge may land on either side.
    #[must_use]
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        let n = self.verts.len();
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let (yi, xi) = self.verts[i];
            let (yj, xj) = self.verts[j];
            if (yi > lat) != (yj > lat) && lon < (xj - xi) * (lat - yi) / (yj - yi) + xi {
                inside = !inside;
            }
            j = i;
        }
        inside
    }
}
