//! Multi-dimensional area-source rupture enumerator.
//!
//! An [`AreaSource`] combines a gridded polygon region, a
//! magnitude-frequency distribution, a depth distribution (a
//! depth-by-magnitude weighting matrix) and a weighted focal-mechanism
//! set, and expands them into a catalog of point or finite ruptures
//! with per-rupture annual rates and occurrence probabilities.
//!
//! Weight validation happens once, at construction; the catalog is
//! built lazily on first access and cached for the source's lifetime.

use std::sync::OnceLock;

use rand::rngs::StdRng;
use rand::SeedableRng;
use temblor_geo::{Location, Polygon};

use crate::gridding::GriddedRegion;
use crate::mech::FocalMechanism;
use crate::mfd::GriddedMfd;
use crate::pnt2lne::{BuildError, GeometryParams, RuptureGeometryBuilder};
use crate::rupture::{prob_from_rate, Rupture};
use crate::surface::RuptureSurface;

/// Absolute tolerance for caller-supplied weight sums.
pub const WEIGHT_TOL: f64 = 1.0e-4;

// Namespaced seed for the strike sampler ("mdarea").
const SEED_NS: u64 = 0x6d64_6172_6561;

/// Errors from constructing an area source or accessing its catalog.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SourceError {
    /// Dimensions of paired inputs disagree.
    #[error("shape mismatch in {what}: {left} vs {right}")]
    ShapeMismatch {
        /// Which paired inputs disagree.
        what: &'static str,
        /// First dimension.
        left: usize,
        /// Second dimension.
        right: usize,
    },
    /// A weight vector or matrix row does not sum to 1 within tolerance.
    #[error("invalid weights for {what}: sum {sum} not within {WEIGHT_TOL} of 1")]
    InvalidWeights {
        /// Which weight set is off.
        what: String,
        /// The offending sum.
        sum: f64,
    },
    /// Rupture index outside `[0, count)`.
    #[error("rupture index {index} out of range (count {count})")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Catalog size.
        count: usize,
    },
    /// Failure while building finite-rupture geometry.
    #[error(transparent)]
    Build(#[from] BuildError),
}

/// Immutable configuration of an area source.
#[derive(Debug, Clone)]
pub struct AreaSourceConfig {
    /// Polygonal source region.
    pub region: Polygon,
    /// Grid spacing in degrees.
    pub grid_spacing: f64,
    /// Magnitude-frequency distribution shared by every grid node.
    pub mfd: GriddedMfd,
    /// Candidate focal mechanisms.
    pub mechanisms: Vec<FocalMechanism>,
    /// Per-mechanism weights; must sum to 1 within [`WEIGHT_TOL`].
    pub mech_weights: Vec<f64>,
    /// Top-of-rupture depths in km.
    pub depths: Vec<f64>,
    /// Magnitude breakpoints partitioning the distribution's bins for
    /// depth weighting; one per row of `depth_mag_weights`.
    pub mag_bin_edges: Vec<f64>,
    /// Depth weights per breakpoint row, `depth_mag_weights[m][d]`;
    /// each row must sum to 1 within [`WEIGHT_TOL`] and have one column
    /// per entry of `depths`.
    pub depth_mag_weights: Vec<Vec<f64>>,
    /// Forecast duration in years.
    pub duration_yr: f64,
    /// Ruptures with magnitude strictly below this are dropped.
    pub min_mag: f64,
    /// Emit point ruptures only, skipping finite geometry entirely.
    pub point_sources_only: bool,
    /// Finite-rupture geometry and strike policy (ignored when
    /// `point_sources_only` is set).
    pub geometry: GeometryParams,
    /// Seed for the strike sampler; fixes the catalog across rebuilds.
    pub seed: u64,
    /// Print a one-line summary after the lazy catalog build.
    pub log_build: bool,
}

/// An area source with validated weights and a lazily built, cached
/// rupture catalog.
///
/// The catalog build is guarded by a `OnceLock`, so concurrent first
/// readers agree on a single catalog even though strike sampling is
/// stochastic; the build outcome (including a failure) is computed at
/// most once.
pub struct AreaSource {
    cfg: AreaSourceConfig,
    /// Row-normalized private copy of the depth-mag matrix.
    depth_mag: Vec<Vec<f64>>,
    catalog: OnceLock<Result<Vec<Rupture>, SourceError>>,
}

impl AreaSource {
    /// Validate the configuration's weights and shapes and build the
    /// source. Validation order: mechanism/weight counts, mechanism
    /// weight sum, per-row depth-mag sums, per-row column counts, row
    /// count vs. breakpoint count. After validation every row of the
    /// stored matrix is divided by its own sum, so the internal matrix
    /// is exactly row-stochastic.
    pub fn new(cfg: AreaSourceConfig) -> Result<Self, SourceError> {
        if cfg.mechanisms.len() != cfg.mech_weights.len() {
            return Err(SourceError::ShapeMismatch {
                what: "focal mechanisms vs weights",
                left: cfg.mechanisms.len(),
                right: cfg.mech_weights.len(),
            });
        }
        let mech_sum: f64 = cfg.mech_weights.iter().sum();
        if (mech_sum - 1.0).abs() > WEIGHT_TOL {
            return Err(SourceError::InvalidWeights {
                what: "focal mechanisms".to_owned(),
                sum: mech_sum,
            });
        }
        for (m, row) in cfg.depth_mag_weights.iter().enumerate() {
            let row_sum: f64 = row.iter().sum();
            if (row_sum - 1.0).abs() > WEIGHT_TOL {
                let what = match cfg.mag_bin_edges.get(m) {
                    Some(edge) => format!("depth-magnitude row at breakpoint M{edge}"),
                    None => format!("depth-magnitude row {m}"),
                };
                return Err(SourceError::InvalidWeights { what, sum: row_sum });
            }
        }
        for row in &cfg.depth_mag_weights {
            if row.len() != cfg.depths.len() {
                return Err(SourceError::ShapeMismatch {
                    what: "depth-magnitude row vs depths",
                    left: row.len(),
                    right: cfg.depths.len(),
                });
            }
        }
        if cfg.depth_mag_weights.len() != cfg.mag_bin_edges.len() {
            return Err(SourceError::ShapeMismatch {
                what: "depth-magnitude rows vs breakpoints",
                left: cfg.depth_mag_weights.len(),
                right: cfg.mag_bin_edges.len(),
            });
        }

        // Exact per-row renormalization; row sums are within WEIGHT_TOL
        // of 1 at this point, so the divisor is never near zero.
        let depth_mag = cfg
            .depth_mag_weights
            .iter()
            .map(|row| {
                let s: f64 = row.iter().sum();
                row.iter().map(|w| w / s).collect()
            })
            .collect();

        Ok(Self { cfg, depth_mag, catalog: OnceLock::new() })
    }

    /// Depth weight per magnitude bin for depth index `di`.
    ///
    /// A step function over magnitude: a bin takes the row of the last
    /// breakpoint at or below its center; bins below the first
    /// breakpoint get zero weight.
    fn fmd_weights(&self, di: usize) -> Vec<f64> {
        let edges = &self.cfg.mag_bin_edges;
        let mut weights = vec![0.0; self.cfg.mfd.len()];
        let mut next_edge = 0usize;
        let mut row: Option<usize> = None;
        for (i, w) in weights.iter_mut().enumerate() {
            let mag = self.cfg.mfd.magnitude(i);
            while next_edge < edges.len() && mag >= edges[next_edge] {
                row = Some(next_edge);
                next_edge += 1;
            }
            if let Some(r) = row {
                *w = self.depth_mag[r][di];
            }
        }
        weights
    }

    fn build_catalog(&self) -> Result<Vec<Rupture>, SourceError> {
        let cfg = &self.cfg;
        let grid = GriddedRegion::new(&cfg.region, cfg.grid_spacing);
        let node_weights = grid.node_weights();
        let builder = RuptureGeometryBuilder::new(cfg.geometry);
        let mut rng = StdRng::seed_from_u64(cfg.seed ^ SEED_NS);

        let mut catalog: Vec<Rupture> = Vec::new();
        for (di, &depth) in cfg.depths.iter().enumerate() {
            let fmd_w = self.fmd_weights(di);
            for ni in 0..grid.node_count() {
                let node = grid.node(ni);
                for bi in 0..cfg.mfd.len() {
                    let mag = cfg.mfd.magnitude(bi);
                    for (ki, mech) in cfg.mechanisms.iter().enumerate() {
                        let mut rate =
                            cfg.mfd.rate(bi) * node_weights[ni] * fmd_w[bi] * cfg.mech_weights[ki];
                        let prob = prob_from_rate(rate, cfg.duration_yr);
                        if mag < cfg.min_mag || prob <= 0.0 {
                            continue;
                        }
                        if cfg.point_sources_only {
                            catalog.push(Rupture {
                                magnitude: mag,
                                rake: mech.rake,
                                dip: mech.dip_or_vertical(),
                                annual_rate: rate,
                                probability: prob,
                                surface: RuptureSurface::Point(Location::new(
                                    node.lat, node.lon, depth,
                                )),
                            });
                        } else {
                            let surfaces = builder.build(node, mag, *mech, depth, &mut rng)?;
                            // Split the rate evenly across realized
                            // strikes; num_strikes == 0 means a single
                            // strike and keeps the full rate.
                            if cfg.geometry.num_strikes > 0 {
                                rate /= f64::from(cfg.geometry.num_strikes);
                            }
                            let prob = prob_from_rate(rate, cfg.duration_yr);
                            for surface in surfaces {
                                catalog.push(Rupture {
                                    magnitude: mag,
                                    rake: mech.rake,
                                    dip: mech.dip_or_vertical(),
                                    annual_rate: rate,
                                    probability: prob,
                                    surface: RuptureSurface::Gridded(surface),
                                });
                            }
                        }
                    }
                }
            }
        }
        if cfg.log_build {
            println!(
                "[area-source] catalog built: {} ruptures over {} nodes x {} depths x {} mags x {} mechs",
                catalog.len(),
                grid.node_count(),
                cfg.depths.len(),
                cfg.mfd.len(),
                cfg.mechanisms.len()
            );
        }
        Ok(catalog)
    }

    fn catalog(&self) -> Result<&[Rupture], SourceError> {
        match self.catalog.get_or_init(|| self.build_catalog()) {
            Ok(list) => Ok(list),
            Err(e) => Err(e.clone()),
        }
    }

    /// Number of ruptures in the catalog, building it on first call.
    pub fn num_ruptures(&self) -> Result<usize, SourceError> {
        Ok(self.catalog()?.len())
    }

    /// Rupture `i` of the catalog, building it on first call.
    pub fn rupture(&self, i: usize) -> Result<&Rupture, SourceError> {
        let list = self.catalog()?;
        list.get(i).ok_or(SourceError::IndexOutOfRange { index: i, count: list.len() })
    }

    /// The full ordered rupture catalog, building it on first call.
    pub fn rupture_list(&self) -> Result<&[Rupture], SourceError> {
        self.catalog()
    }

    /// The validated configuration.
    #[must_use]
    pub fn config(&self) -> &AreaSourceConfig {
        &self.cfg
    }

    /// The internally stored, exactly row-stochastic depth-mag matrix.
    #[must_use]
    pub fn depth_mag_weights(&self) -> &[Vec<f64>] {
        &self.depth_mag
    }
}
