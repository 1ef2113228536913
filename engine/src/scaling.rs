//! Magnitude-scaling relations: median rupture dimension vs. magnitude.

/// Selector for a magnitude-scaling relation.
///
/// Area relations return a median rupture area in km²; length relations
/// a median rupture length in km; the moment relation returns seismic
/// moment in N·m and is not usable for rupture geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MagScaling {
    /// Median area = `10^(M − 4)` km² (the PEER verification relation).
    PeerArea,
    /// Wells & Coppersmith (1994) magnitude-area, all slip types:
    /// `log10 A = −3.49 + 0.91 M`.
    Wc1994Area,
    /// Wells & Coppersmith (1994) magnitude-length, all slip types:
    /// `log10 L = −3.22 + 0.69 M`.
    Wc1994Length,
    /// Hanks & Kanamori (1979) moment-magnitude:
    /// `log10 M0 = 1.5 M + 9.05` (N·m).
    HanksKanamoriMoment,
}

impl MagScaling {
    /// Median scale for magnitude `mag`: km² for area relations, km for
    /// length relations, N·m for the moment relation.
    #[must_use]
    pub fn median_scale(self, mag: f64) -> f64 {
        match self {
            Self::PeerArea => 10f64.powf(mag - 4.0),
            Self::Wc1994Area => 10f64.powf(-3.49 + 0.91 * mag),
            Self::Wc1994Length => 10f64.powf(-3.22 + 0.69 * mag),
            Self::HanksKanamoriMoment => 10f64.powf(1.5 * mag + 9.05),
        }
    }

    /// Whether `median_scale` returns a rupture area.
    #[must_use]
    pub fn is_area_based(self) -> bool {
        matches!(self, Self::PeerArea | Self::Wc1994Area)
    }

    /// Whether `median_scale` returns a rupture length.
    #[must_use]
    pub fn is_length_based(self) -> bool {
        matches!(self, Self::Wc1994Length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peer_area_is_power_of_ten() {
        assert!((MagScaling::PeerArea.median_scale(6.0) - 100.0).abs() < 1e-9);
        assert!((MagScaling::PeerArea.median_scale(4.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn wc1994_area_reasonable_for_m7() {
        // WC94 all-type relation gives ~788 km² at M7
        let a = MagScaling::Wc1994Area.median_scale(7.0);
        assert!(a > 700.0 && a < 900.0, "area {a}");
    }

    #[test]
    fn wc1994_length_reasonable_for_m7() {
        // ~41 km surface rupture length at M7
        let l = MagScaling::Wc1994Length.median_scale(7.0);
        assert!(l > 35.0 && l < 50.0, "length {l}");
    }

    #[test]
    fn dimension_classification() {
        assert!(MagScaling::PeerArea.is_area_based());
        assert!(MagScaling::Wc1994Area.is_area_based());
        assert!(!MagScaling::Wc1994Area.is_length_based());
        assert!(MagScaling::Wc1994Length.is_length_based());
        assert!(!MagScaling::HanksKanamoriMoment.is_area_based());
        assert!(!MagScaling::HanksKanamoriMoment.is_length_based());
    }
}
