#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]

//! Spherical geodesy shared by the temblor hazard engine: locations on
//! the Earth (lat/lon in degrees, depth in km), the direct geodesic
//! problem on a sphere, azimuths, and polygon containment.

mod math;
#[cfg(test)]
mod tests;

pub use math::{
    azimuth_deg, horizontal_distance_km, location_at, wrap_360, Location, Polygon,
    EARTH_RADIUS_KM,
};
