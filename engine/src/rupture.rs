//! Rupture value type and rate→probability conversion.

use crate::surface::RuptureSurface;

/// Probability of at least one occurrence within `duration_yr` years
/// for a Poisson process with the given annual `rate`:
/// `P = 1 − exp(−rate·duration)`.
#[inline]
#[must_use]
pub fn prob_from_rate(rate: f64, duration_yr: f64) -> f64 {
    1.0 - (-duration_yr * rate).exp()
}

/// A single rupture produced by source enumeration.
#[derive(Debug, Clone, PartialEq)]
pub struct Rupture {
    /// Moment magnitude.
    pub magnitude: f64,
    /// Rake in degrees.
    pub rake: f64,
    /// Dip in degrees.
    pub dip: f64,
    /// Annual occurrence rate apportioned to this rupture.
    pub annual_rate: f64,
    /// Probability of at least one occurrence over the forecast
    /// duration, in (0, 1].
    pub probability: f64,
    /// Point or finite rupture surface.
    pub surface: RuptureSurface,
}
