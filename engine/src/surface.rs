//! Rupture-surface value types and gridded-surface construction.

use temblor_geo::{location_at, Location};

/// Along-strike and down-dip patch spacing for gridded surfaces, in km.
/// Fixed so that catalogs are bit-comparable across runs; downstream
/// distance calculations assume it.
pub const GRID_SPACING_KM: f64 = 0.5;

/// An evenly gridded rectangular fault surface.
///
/// Patch locations are stored row-major with the top (shallowest) row
/// first; within a row, columns run along strike from the first trace
/// endpoint toward the second.
#[derive(Debug, Clone, PartialEq)]
pub struct GriddedSurface {
    locs: Vec<Location>,
    n_rows: usize,
    n_cols: usize,
    strike: f64,
    dip: f64,
}

impl GriddedSurface {
    /// Build a surface from a fault trace starting at `trace_start`
    /// (which carries the top-of-rupture depth) and running `length_km`
    /// along `strike_deg`, dipping at `dip_deg` down to
    /// `bottom_depth_km`.
    ///
    /// Row and column counts are `round(extent / 0.5) + 1` with a floor
    /// of 2, and the extents are divided evenly, so the realized patch
    /// spacing is as close to [`GRID_SPACING_KM`] as the extent allows.
    #[must_use]
    pub fn from_trace(
        trace_start: Location,
        strike_deg: f64,
        length_km: f64,
        dip_deg: f64,
        bottom_depth_km: f64,
    ) -> Self {
        let dip_rad = dip_deg.to_radians();
        let depth_extent = (bottom_depth_km - trace_start.depth).max(0.0);
        // Down-dip width along the fault plane; vertical dip keeps it
        // equal to the depth extent.
        let width_km = if dip_rad.sin() > 0.0 { depth_extent / dip_rad.sin() } else { 0.0 };

        let n_rows = grid_count(width_km);
        let n_cols = grid_count(length_km);
        let row_step = width_km / (n_rows - 1) as f64;
        let col_step = length_km / (n_cols - 1) as f64;

        // Dip direction is 90° clockwise of strike.
        let dip_dir = strike_deg + 90.0;
        let mut locs = Vec::with_capacity(n_rows * n_cols);
        for r in 0..n_rows {
            let ddw = row_step * r as f64;
            let row_origin =
                location_at(trace_start, ddw * dip_rad.cos(), dip_dir, ddw * dip_rad.sin());
            for c in 0..n_cols {
                let along = col_step * c as f64;
                locs.push(location_at(row_origin, along, strike_deg, 0.0));
            }
        }
        Self { locs, n_rows, n_cols, strike: strike_deg, dip: dip_deg }
    }

    /// Number of down-dip rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of along-strike columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Patch location at row `r` (top = 0), column `c`.
    #[must_use]
    pub fn location(&self, r: usize, c: usize) -> Location {
        self.locs[r * self.n_cols + c]
    }

    /// All patch locations, row-major, top row first.
    #[must_use]
    pub fn locations(&self) -> &[Location] {
        &self.locs
    }

    /// Trace strike in degrees.
    #[must_use]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Dip in degrees.
    #[must_use]
    pub fn dip(&self) -> f64 {
        self.dip
    }
}

/// Grid-point count covering `extent_km` at the fixed patch spacing.
fn grid_count(extent_km: f64) -> usize {
    let n = (extent_km / GRID_SPACING_KM).round() as usize + 1;
    n.max(2)
}

/// Rupture surface: a point hypocenter or a gridded finite plane.
#[derive(Debug, Clone, PartialEq)]
pub enum RuptureSurface {
    /// Point surface at a hypocentral location.
    Point(Location),
    /// Finite gridded fault-plane surface.
    Gridded(GriddedSurface),
}

#[cfg(test)]
mod tests {
    use super::*;
    use temblor_geo::horizontal_distance_km;

    #[test]
    fn vertical_surface_rows_stack_in_depth() {
        let start = Location::new(0.0, 0.0, 5.0);
        let s = GriddedSurface::from_trace(start, 0.0, 10.0, 90.0, 10.0);
        assert_eq!(s.n_cols(), 21);
        assert_eq!(s.n_rows(), 11);
        // Vertical dip: every row keeps the trace's horizontal position
        let top = s.location(0, 0);
        let bottom = s.location(s.n_rows() - 1, 0);
        assert!((top.depth - 5.0).abs() < 1e-9);
        assert!((bottom.depth - 10.0).abs() < 1e-9);
        assert!(horizontal_distance_km(top, bottom) < 1e-6);
    }

    #[test]
    fn along_strike_extent_matches_length() {
        let start = Location::new(10.0, 20.0, 2.0);
        let s = GriddedSurface::from_trace(start, 45.0, 8.0, 90.0, 6.0);
        let first = s.location(0, 0);
        let last = s.location(0, s.n_cols() - 1);
        let d = horizontal_distance_km(first, last);
        assert!((d - 8.0).abs() < 1e-3, "trace length {d}");
    }

    #[test]
    fn dipping_surface_offsets_rows_toward_dip_direction() {
        let start = Location::new(0.0, 0.0, 1.0);
        let s = GriddedSurface::from_trace(start, 0.0, 4.0, 30.0, 3.0);
        // Down-dip width = 2 km depth extent / sin(30°) = 4 km
        assert_eq!(s.n_rows(), 9);
        let top = s.location(0, 0);
        let bot = s.location(s.n_rows() - 1, 0);
        assert!((bot.depth - 3.0).abs() < 1e-9);
        // Horizontal reach = width·cos(30°) ≈ 3.464 km, due east of a
        // north-striking trace
        let reach = horizontal_distance_km(top, bot);
        assert!((reach - 4.0 * (30f64.to_radians().cos())).abs() < 1e-3, "reach {reach}");
        assert!(bot.lon > top.lon);
        assert!((bot.lat - top.lat).abs() < 1e-6);
    }

    #[test]
    fn tiny_rupture_still_yields_a_plane() {
        let start = Location::new(0.0, 0.0, 7.0);
        let s = GriddedSurface::from_trace(start, 10.0, 0.3, 90.0, 7.2);
        assert_eq!(s.n_rows(), 2);
        assert_eq!(s.n_cols(), 2);
    }
}
