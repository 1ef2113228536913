//! Point-to-finite-rupture geometry builder: turns a point epicenter,
//! magnitude and focal mechanism into one or more finite rectangular
//! rupture surfaces ("point to line").

use rand::rngs::StdRng;
use rand::Rng;
use smallvec::SmallVec;
use temblor_geo::{location_at, wrap_360, Location};

use crate::mech::FocalMechanism;
use crate::scaling::MagScaling;
use crate::surface::GriddedSurface;

/// Errors from resolving rupture geometry.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BuildError {
    /// The scaling relation yields neither a median area nor a median length.
    #[error("magnitude-scaling relation {0:?} provides neither rupture area nor length")]
    UnsupportedScalingModel(MagScaling),
    /// The rupture bottom would extend below the seismogenic cap.
    #[error("rupture bottom {bottom_km} km exceeds lower seismogenic depth {cap_km} km")]
    RuptureExceedsSeismogenicDepth {
        /// Computed bottom-of-rupture depth in km.
        bottom_km: f64,
        /// Supplied lower-seismogenic-depth cap in km.
        cap_km: f64,
    },
    /// The `num_strikes`/mechanism-strike combination is outside the
    /// supported table.
    #[error("unsupported strike configuration: num_strikes={num_strikes}, fixed candidates={candidates}")]
    UnsupportedStrikeConfiguration {
        /// Requested strike count.
        num_strikes: u32,
        /// Number of strike candidates pinned by the mechanism.
        candidates: usize,
    },
}

/// Geometry and strike-sampling policy, fixed per builder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryParams {
    /// Rupture length divided by down-dip width.
    pub aspect_ratio: f64,
    /// Magnitude-scaling relation providing the rupture dimension.
    pub mag_scaling: MagScaling,
    /// Strike policy: 0 = a single strike (the mechanism's own, or one
    /// uniform sample); 2 = two perpendicular strikes; >2 = that many
    /// evenly fanned strikes. 1 is not a supported value.
    pub num_strikes: u32,
    /// Seed strike in degrees for the 2/>2 policies; `None` samples
    /// uniformly from [−90°, 90°).
    pub first_strike: Option<f64>,
    /// Lower seismogenic depth cap in km; `None` disables the check.
    pub lower_seis_depth: Option<f64>,
}

impl Default for GeometryParams {
    fn default() -> Self {
        Self {
            aspect_ratio: 1.0,
            mag_scaling: MagScaling::PeerArea,
            num_strikes: 0,
            first_strike: None,
            lower_seis_depth: None,
        }
    }
}

/// Resolved rupture dimensions for one (magnitude, dip, top-depth).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuptureGeometry {
    /// Along-strike length in km.
    pub length_km: f64,
    /// Down-dip width in km.
    pub width_km: f64,
    /// Bottom-of-rupture depth in km.
    pub bottom_km: f64,
}

/// Builds finite rupture surfaces from a point epicenter.
#[derive(Debug, Clone, Copy)]
pub struct RuptureGeometryBuilder {
    params: GeometryParams,
}

impl RuptureGeometryBuilder {
    /// Builder with the given fixed policy.
    #[must_use]
    pub const fn new(params: GeometryParams) -> Self {
        Self { params }
    }

    /// Resolve length, width and bottom depth for `mag` at `top_km`
    /// with the given dip, enforcing the seismogenic cap when set.
    pub fn resolve_geometry(
        &self,
        mag: f64,
        dip_deg: f64,
        top_km: f64,
    ) -> Result<RuptureGeometry, BuildError> {
        let scaling = self.params.mag_scaling;
        let length_km = if scaling.is_area_based() {
            (scaling.median_scale(mag) * self.params.aspect_ratio).sqrt()
        } else if scaling.is_length_based() {
            scaling.median_scale(mag)
        } else {
            return Err(BuildError::UnsupportedScalingModel(scaling));
        };
        let width_km = length_km / self.params.aspect_ratio;
        let bottom_km = top_km + width_km * dip_deg.to_radians().sin();
        if let Some(cap_km) = self.params.lower_seis_depth {
            if bottom_km > cap_km {
                return Err(BuildError::RuptureExceedsSeismogenicDepth { bottom_km, cap_km });
            }
        }
        Ok(RuptureGeometry { length_km, width_km, bottom_km })
    }

    /// Resolve the strike set for one build, sampling from `rng` where
    /// the policy calls for an unpinned strike.
    pub fn resolve_strikes(
        &self,
        mech_strike: Option<f64>,
        rng: &mut StdRng,
    ) -> Result<SmallVec<[f64; 4]>, BuildError> {
        let mut strikes: SmallVec<[f64; 4]> = SmallVec::new();
        match (self.params.num_strikes, mech_strike) {
            (0, Some(s)) => strikes.push(s),
            (0, None) => strikes.push(sample_strike(rng)),
            (2, None) => {
                let first = self.params.first_strike.unwrap_or_else(|| sample_strike(rng));
                strikes.push(first);
                strikes.push(wrap_360(first + 90.0));
            }
            (n, None) if n > 2 => {
                let mut s = self.params.first_strike.unwrap_or_else(|| sample_strike(rng));
                let step = 360.0 / f64::from(n);
                for _ in 0..n {
                    strikes.push(s);
                    s = wrap_360(s + step);
                }
            }
            (n, pinned) => {
                return Err(BuildError::UnsupportedStrikeConfiguration {
                    num_strikes: n,
                    candidates: usize::from(pinned.is_some()),
                })
            }
        }
        Ok(strikes)
    }

    /// Build one finite surface per resolved strike for a rupture of
    /// magnitude `mag` with top-of-rupture depth `top_km` centered at
    /// `epicenter`. Any failure aborts the whole call; no partial list
    /// is returned.
    pub fn build(
        &self,
        epicenter: Location,
        mag: f64,
        mech: FocalMechanism,
        top_km: f64,
        rng: &mut StdRng,
    ) -> Result<Vec<GriddedSurface>, BuildError> {
        let dip_deg = mech.dip_or_vertical();
        let geom = self.resolve_geometry(mag, dip_deg, top_km)?;
        let strikes = self.resolve_strikes(mech.strike, rng)?;

        let anchor = epicenter.at_depth(top_km);
        let mut surfaces = Vec::with_capacity(strikes.len());
        for &strike in &strikes {
            // Trace endpoints at ±length/2 from the epicenter; the
            // trace runs from the back endpoint so its azimuth is the
            // strike itself.
            let back = location_at(anchor, geom.length_km / 2.0, strike + 180.0, 0.0);
            surfaces.push(GriddedSurface::from_trace(
                back,
                strike,
                geom.length_km,
                dip_deg,
                geom.bottom_km,
            ));
        }
        Ok(surfaces)
    }

    /// The fixed policy this builder was constructed with.
    #[must_use]
    pub const fn params(&self) -> &GeometryParams {
        &self.params
    }
}

/// Uniform strike sample from [−90°, 90°).
fn sample_strike(rng: &mut StdRng) -> f64 {
    rng.gen_range(-90.0..90.0)
}
