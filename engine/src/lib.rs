//! Temblor hazard engine: probabilistic seismic-hazard primitives.
//!
//! The centerpiece is the area-source rupture enumerator
//! ([`area_source::AreaSource`]), which expands a polygonal seismicity
//! model into a weighted catalog of point or finite ruptures, and the
//! point-to-finite geometry builder ([`pnt2lne::RuptureGeometryBuilder`])
//! it delegates to. Ground-motion relations live in [`gmpe`].
#![deny(missing_docs)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::dbg_macro, clippy::large_enum_variant)]

pub mod area_source;
pub mod gmpe;
pub mod gridding;
pub mod mech;
pub mod mfd;
pub mod pnt2lne;
pub mod rupture;
pub mod scaling;
pub mod surface;

/// Returns the engine version string from Cargo metadata.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_semver_like() {
        assert!(version().split('.').count() >= 3);
    }
}
