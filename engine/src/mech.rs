//! Focal mechanism value type.

/// Fault orientation and slip direction for a rupture.
///
/// Angles follow the Aki & Richards convention: strike in degrees
/// clockwise from north, dip in degrees down from horizontal, rake in
/// degrees measured in the fault plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocalMechanism {
    /// Strike in degrees, or `None` when the mechanism leaves the
    /// strike free (to be sampled or fanned by the geometry builder).
    pub strike: Option<f64>,
    /// Dip in degrees, or `None` to default to vertical.
    pub dip: Option<f64>,
    /// Rake in degrees.
    pub rake: f64,
}

impl FocalMechanism {
    /// Mechanism with all three angles pinned.
    #[must_use]
    pub const fn new(strike: f64, dip: f64, rake: f64) -> Self {
        Self { strike: Some(strike), dip: Some(dip), rake }
    }

    /// Mechanism whose strike is left free.
    #[must_use]
    pub const fn free_strike(dip: f64, rake: f64) -> Self {
        Self { strike: None, dip: Some(dip), rake }
    }

    /// Dip in degrees, defaulting to 90° (vertical) when unset.
    #[must_use]
    pub fn dip_or_vertical(&self) -> f64 {
        self.dip.unwrap_or(90.0)
    }
}
