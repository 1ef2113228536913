//! Ground-motion prediction (attenuation) relations: median and
//! standard deviation of log ground-motion intensity given earthquake
//! and site parameters.

/// Broad mechanism class used by relations with mechanism-dependent
/// coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MechClass {
    /// Strike-slip faulting.
    StrikeSlip,
    /// Reverse faulting.
    Reverse,
    /// Mechanism not specified.
    Unspecified,
}

/// A ground-motion prediction equation for one intensity measure.
pub trait AttenuationRelation {
    /// Mean of the natural log of the intensity measure for moment
    /// magnitude `mag` at Joyner-Boore distance `rjb_km` on a site
    /// with shear-wave velocity `vs30` m/s.
    fn mean_ln(&self, mag: f64, rjb_km: f64, vs30: f64) -> f64;

    /// Total standard deviation of the natural log of the intensity.
    fn sigma_ln(&self) -> f64;
}

/// Boore, Joyner & Fumal (1997) peak ground acceleration (g):
/// `ln Y = b1 + b2(M−6) + b3(M−6)² + b5 ln r + bv ln(Vs30/Va)` with
/// `r = sqrt(Rjb² + h²)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bjf1997Pga {
    /// Mechanism class selecting the `b1` intercept.
    pub mech: MechClass,
}

impl Bjf1997Pga {
    const B2: f64 = 0.527;
    const B3: f64 = 0.0;
    const B5: f64 = -0.778;
    const BV: f64 = -0.371;
    const VA: f64 = 1396.0;
    const H_KM: f64 = 5.57;
    const SIGMA_LN: f64 = 0.520;

    fn b1(self) -> f64 {
        match self.mech {
            MechClass::StrikeSlip => -0.313,
            MechClass::Reverse => -0.117,
            MechClass::Unspecified => -0.242,
        }
    }
}

impl AttenuationRelation for Bjf1997Pga {
    fn mean_ln(&self, mag: f64, rjb_km: f64, vs30: f64) -> f64 {
        let dm = mag - 6.0;
        let r = rjb_km.hypot(Self::H_KM);
        self.b1() + Self::B2 * dm + Self::B3 * dm * dm + Self::B5 * r.ln()
            + Self::BV * (vs30 / Self::VA).ln()
    }

    fn sigma_ln(&self) -> f64 {
        Self::SIGMA_LN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROCK_VS30: f64 = 620.0;

    #[test]
    fn motion_decays_with_distance() {
        let g = Bjf1997Pga { mech: MechClass::StrikeSlip };
        let mut prev = f64::INFINITY;
        for rjb in [1.0, 5.0, 10.0, 30.0, 80.0, 200.0] {
            let ln_y = g.mean_ln(6.5, rjb, ROCK_VS30);
            assert!(ln_y < prev, "ln Y at {rjb} km did not decay");
            prev = ln_y;
        }
    }

    #[test]
    fn motion_grows_with_magnitude() {
        let g = Bjf1997Pga { mech: MechClass::Unspecified };
        assert!(g.mean_ln(7.0, 20.0, ROCK_VS30) > g.mean_ln(5.5, 20.0, ROCK_VS30));
    }

    #[test]
    fn softer_sites_amplify() {
        let g = Bjf1997Pga { mech: MechClass::Reverse };
        assert!(g.mean_ln(6.0, 15.0, 255.0) > g.mean_ln(6.0, 15.0, 760.0));
    }

    #[test]
    fn pga_magnitude_range_sane() {
        // M6.5 strike-slip at 10 km on generic rock: a few tenths of g
        let g = Bjf1997Pga { mech: MechClass::StrikeSlip };
        let y = g.mean_ln(6.5, 10.0, 620.0).exp();
        assert!(y > 0.05 && y < 1.0, "median PGA {y} g");
        assert!(g.sigma_ln() > 0.0);
    }
}
