//! Magnitude-frequency distributions.

/// Evenly discretized magnitude-frequency distribution: an ordered
/// sequence of (magnitude, annual rate) pairs with fixed bin width.
/// Magnitudes are bin centers and strictly increase.
#[derive(Debug, Clone, PartialEq)]
pub struct GriddedMfd {
    mags: Vec<f64>,
    rates: Vec<f64>,
    delta: f64,
}

impl GriddedMfd {
    /// Build from explicit per-bin annual rates. `min_mag` is the first
    /// bin center, `delta` the fixed bin width.
    ///
    /// # Panics
    /// Panics when `delta` is not positive or `rates` is empty.
    #[must_use]
    pub fn from_rates(min_mag: f64, delta: f64, rates: Vec<f64>) -> Self {
        assert!(delta > 0.0, "bin width must be positive, got {delta}");
        assert!(!rates.is_empty(), "distribution needs at least one bin");
        let mags = (0..rates.len()).map(|i| min_mag + delta * i as f64).collect();
        Self { mags, rates, delta }
    }

    /// Truncated Gutenberg–Richter distribution: `num` bins with
    /// centers spanning [`min_mag`, `max_mag`], incremental rates
    /// proportional to `10^(-b·M)` and scaled so they total
    /// `total_rate` events per year.
    ///
    /// # Panics
    /// Panics when `num < 2` or `max_mag <= min_mag`.
    #[must_use]
    pub fn gutenberg_richter(
        min_mag: f64,
        max_mag: f64,
        num: usize,
        b_value: f64,
        total_rate: f64,
    ) -> Self {
        assert!(num >= 2, "need at least 2 bins, got {num}");
        assert!(max_mag > min_mag, "max_mag {max_mag} must exceed min_mag {min_mag}");
        let delta = (max_mag - min_mag) / (num - 1) as f64;
        let raw: Vec<f64> =
            (0..num).map(|i| 10f64.powf(-b_value * (min_mag + delta * i as f64))).collect();
        let sum: f64 = raw.iter().sum();
        let rates = raw.iter().map(|r| r / sum * total_rate).collect();
        Self { mags: (0..num).map(|i| min_mag + delta * i as f64).collect(), rates, delta }
    }

    /// Number of magnitude bins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.mags.len()
    }

    /// True when the distribution has no bins (never, by construction).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mags.is_empty()
    }

    /// Bin center magnitude at index `i`.
    #[must_use]
    pub fn magnitude(&self, i: usize) -> f64 {
        self.mags[i]
    }

    /// Annual rate of bin `i`.
    #[must_use]
    pub fn rate(&self, i: usize) -> f64 {
        self.rates[i]
    }

    /// Fixed bin width.
    #[must_use]
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Iterator over (magnitude, annual rate) pairs in magnitude order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.mags.iter().copied().zip(self.rates.iter().copied())
    }

    /// Total annual rate across all bins.
    #[must_use]
    pub fn total_rate(&self) -> f64 {
        self.rates.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rates_places_bin_centers() {
        let mfd = GriddedMfd::from_rates(5.0, 0.5, vec![0.1, 0.05, 0.01]);
        assert_eq!(mfd.len(), 3);
        assert!((mfd.magnitude(0) - 5.0).abs() < 1e-12);
        assert!((mfd.magnitude(2) - 6.0).abs() < 1e-12);
        assert!((mfd.rate(1) - 0.05).abs() < 1e-12);
        assert!((mfd.delta() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn gutenberg_richter_totals_and_decays() {
        let mfd = GriddedMfd::gutenberg_richter(5.0, 7.0, 21, 1.0, 0.2);
        assert_eq!(mfd.len(), 21);
        assert!((mfd.total_rate() - 0.2).abs() < 1e-12);
        for i in 1..mfd.len() {
            assert!(mfd.rate(i) < mfd.rate(i - 1), "GR rates must decay with magnitude");
            assert!(mfd.magnitude(i) > mfd.magnitude(i - 1));
        }
        // b = 1 means one magnitude unit drops the rate tenfold
        assert!((mfd.rate(10) / mfd.rate(0) - 0.1).abs() < 1e-9);
    }
}
