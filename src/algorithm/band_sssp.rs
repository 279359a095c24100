use std::fmt::Debug;
use log::{debug, trace, warn};
use num_traits::{Float, NumCast};

use crate::algorithm::bounded_relax::k_round_relax;
use crate::algorithm::finalize::finalize;
use crate::algorithm::pivots::{process_pivots, select_pivots};
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::directed::average_edge_weight;
use crate::graph::{ensure_non_negative, Graph};
use crate::{Error, Result};

/// Default factor applied to the band ceiling whenever the frontier empties
pub const DEFAULT_GROWTH: f64 = 2.0;

/// Default ceiling beyond which the outer loop stops.
///
/// This only bounds the number of outer iterations. It is not a distance
/// limit: the finalization sweep resolves every reachable vertex regardless.
pub const DEFAULT_TERMINATION_CEILING: f64 = 1e18;

/// Default slack an edge must beat before its source rejoins the frontier
pub const DEFAULT_FRONTIER_TOLERANCE: f64 = 1e-18;

/// Band used when the derived or supplied one is unusable
const FALLBACK_BAND: f64 = 1.0;

/// Band-partitioned single-source shortest paths
///
/// Distances are grown inside a band ceiling that doubles (by default) each
/// time no in-band improvement is left. Inside a band the active vertices get
/// `k` rounds of bounded relaxation, and only a few pivots among the vertices
/// that remain incomplete are processed with a heap. A final exact sweep
/// makes the result identical to Dijkstra.
#[derive(Debug, Clone)]
pub struct BandSSSP {
    /// Relaxation rounds per iteration, derived from `n` when unset
    rounds: Option<usize>,
    /// Initial band ceiling, derived from the average edge weight when unset
    initial_band: Option<f64>,
    /// Factor applied to the band ceiling when the frontier empties
    growth: f64,
    /// Runaway guard for the outer loop
    termination_ceiling: f64,
    /// Improvement an edge must exceed for its source to stay active
    frontier_tolerance: f64,
}

/// Counters collected during one band run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BandStats {
    /// Round budget `k` used by the run
    pub rounds: usize,
    /// Number of outer loop iterations
    pub iterations: usize,
    /// Number of times the band ceiling was grown
    pub band_growths: usize,
    /// Number of iterations that invoked the pivot processor
    pub pivot_batches: usize,
    /// Total pivots handed to the pivot processor
    pub pivots_selected: usize,
    /// Vertices scanned by the pivot processor
    pub pivot_scans: usize,
    /// Band ceiling when the loop stopped
    pub final_band: f64,
}

/// Raw output of [`BandSSSP::run`]
#[derive(Debug, Clone)]
pub struct BandRun<W>
where
    W: Float + Debug,
{
    /// Exact distances, `W::infinity()` for unreachable vertices
    pub distances: Vec<W>,
    /// Run counters
    pub stats: BandStats,
}

impl Default for BandSSSP {
    fn default() -> Self {
        Self::new()
    }
}

impl BandSSSP {
    /// Create a new BandSSSP algorithm instance with default settings
    pub fn new() -> Self {
        BandSSSP {
            rounds: None,
            initial_band: None,
            growth: DEFAULT_GROWTH,
            termination_ceiling: DEFAULT_TERMINATION_CEILING,
            frontier_tolerance: DEFAULT_FRONTIER_TOLERANCE,
        }
    }

    /// Set the number of bounded relaxation rounds per iteration
    pub fn with_rounds(mut self, k: usize) -> Self {
        self.rounds = Some(k);
        self
    }

    /// Set the initial band ceiling
    pub fn with_initial_band(mut self, band: f64) -> Self {
        self.initial_band = Some(band);
        self
    }

    /// Set the band growth factor
    pub fn with_growth(mut self, growth: f64) -> Self {
        self.growth = growth;
        self
    }

    /// Set the ceiling at which the outer loop stops
    pub fn with_termination_ceiling(mut self, ceiling: f64) -> Self {
        self.termination_ceiling = ceiling;
        self
    }

    /// Set the frontier recomputation tolerance (negative values become 0)
    pub fn with_frontier_tolerance(mut self, tolerance: f64) -> Self {
        self.frontier_tolerance = tolerance.max(0.0);
        self
    }

    /// Round budget for a graph with `n` vertices: `round(log2(n)^(1/3))`, at least 1
    pub fn default_rounds(n: usize) -> usize {
        let log_n = (n.max(2) as f64).log2();
        (log_n.powf(1.0 / 3.0).round() as usize).max(1)
    }

    /// Initial band for a graph: average edge weight times `max(2, log2(n))`.
    ///
    /// A graph without edges uses an average weight of 1.
    pub fn default_initial_band<W, G>(graph: &G) -> f64
    where
        W: Float + Debug,
        G: Graph<W> + ?Sized,
    {
        let n = graph.vertex_count();
        let avg = average_edge_weight::<W, G>(graph)
            .and_then(|w| w.to_f64())
            .unwrap_or(1.0);
        avg * (n.max(2) as f64).log2().max(2.0)
    }

    fn resolve_rounds(&self, n: usize) -> usize {
        match self.rounds {
            Some(0) => {
                warn!("Round budget 0 is not usable, using 1");
                1
            }
            Some(k) => k,
            None => Self::default_rounds(n),
        }
    }

    /// The band must stay positive and finite once cast to `W`, or growing it
    /// never reaches the ceiling.
    fn resolve_initial_band<W, G>(&self, graph: &G) -> W
    where
        W: Float + Debug,
        G: Graph<W> + ?Sized,
    {
        let band = self
            .initial_band
            .unwrap_or_else(|| Self::default_initial_band::<W, G>(graph));
        let cast_band = cast::<W>(band);
        if cast_band > W::zero() && cast_band.is_finite() {
            cast_band
        } else {
            warn!("Initial band {} is not a positive finite value, using {}", band, FALLBACK_BAND);
            cast::<W>(FALLBACK_BAND)
        }
    }

    /// Checked in `W` so that a factor rounding to 1 is rejected.
    fn resolve_growth<W: Float>(&self) -> W {
        let growth = cast::<W>(self.growth);
        if growth > W::one() && growth.is_finite() {
            growth
        } else {
            warn!("Growth factor {} would not widen the band, using {}", self.growth, DEFAULT_GROWTH);
            cast::<W>(DEFAULT_GROWTH)
        }
    }

    /// The loop stops once the band exceeds the ceiling, so the ceiling must be
    /// a finite value of `W` for the loop to end.
    fn resolve_ceiling<W: Float>(&self) -> W {
        let ceiling = if self.termination_ceiling.is_nan() {
            warn!("Termination ceiling is NaN, using {}", DEFAULT_TERMINATION_CEILING);
            cast::<W>(DEFAULT_TERMINATION_CEILING)
        } else {
            cast::<W>(self.termination_ceiling)
        };
        if ceiling.is_finite() {
            ceiling
        } else {
            W::max_value()
        }
    }

    /// Computes exact shortest distances from `source`, returning the raw
    /// distance array together with run counters.
    pub fn run<W, G>(&self, graph: &G, source: usize) -> Result<BandRun<W>>
    where
        W: Float + Debug,
        G: Graph<W> + ?Sized,
    {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }
        ensure_non_negative::<W, G>(graph)?;

        let n = graph.vertex_count();
        let k = self.resolve_rounds(n);
        let growth = self.resolve_growth::<W>();
        let ceiling = self.resolve_ceiling::<W>();
        let tolerance = cast::<W>(self.frontier_tolerance);
        let mut band_upper = self.resolve_initial_band::<W, G>(graph);

        debug!(
            "Band SSSP on {} vertices / {} edges from {}: k={}, initial band={:?}",
            n,
            graph.edge_count(),
            source,
            k,
            band_upper
        );

        let mut dist = vec![W::infinity(); n];
        dist[source] = W::zero();

        let mut stats = BandStats {
            rounds: k,
            ..BandStats::default()
        };
        let mut active = vec![source];

        loop {
            stats.iterations += 1;

            let partition = k_round_relax(graph, &mut dist, &active, k, band_upper);

            if !partition.incomplete.is_empty() {
                let pivots = select_pivots(graph, &dist, &partition.incomplete, band_upper, k);
                stats.pivot_batches += 1;
                stats.pivots_selected += pivots.len();
                stats.pivot_scans += process_pivots(graph, &mut dist, &pivots, band_upper);
            }

            let next_active = improvable_vertices(graph, &dist, band_upper, tolerance);

            trace!(
                "Iteration {}: band={:?}, active={}, settled={}, incomplete={}, next={}",
                stats.iterations,
                band_upper,
                active.len(),
                partition.settled.len(),
                partition.incomplete.len(),
                next_active.len()
            );

            if next_active.is_empty() {
                band_upper = band_upper * growth;
                stats.band_growths += 1;
                active = reseed_frontier(graph, &dist, band_upper);
            } else {
                active = next_active;
            }

            if band_upper > ceiling {
                break;
            }
        }

        stats.final_band = band_upper.to_f64().unwrap_or(f64::INFINITY);

        finalize(graph, &mut dist);

        debug!(
            "Band SSSP finished after {} iterations ({} band growths, {} pivots)",
            stats.iterations, stats.band_growths, stats.pivots_selected
        );

        Ok(BandRun {
            distances: dist,
            stats,
        })
    }
}

/// Vertices below the band with an in-band edge that improves its target by
/// more than `tolerance`
pub fn improvable_vertices<W, G>(graph: &G, dist: &[W], band_upper: W, tolerance: W) -> Vec<usize>
where
    W: Float + Debug,
    G: Graph<W> + ?Sized,
{
    (0..graph.vertex_count())
        .filter(|&u| {
            let du = dist[u];
            du < band_upper
                && graph.outgoing_edges(u).any(|(v, weight)| {
                    let candidate = du + weight;
                    candidate < band_upper && candidate + tolerance < dist[v]
                })
        })
        .collect()
}

/// Every vertex below the widened band, plus each out-neighbour whose
/// candidate distance falls below it, in vertex order without duplicates
pub fn reseed_frontier<W, G>(graph: &G, dist: &[W], band_upper: W) -> Vec<usize>
where
    W: Float + Debug,
    G: Graph<W> + ?Sized,
{
    let mut seen = vec![false; graph.vertex_count()];
    let mut seed = Vec::new();

    for (u, &du) in dist.iter().enumerate() {
        if du >= band_upper {
            continue;
        }
        if !seen[u] {
            seen[u] = true;
            seed.push(u);
        }
        for (v, weight) in graph.outgoing_edges(u) {
            if du + weight < band_upper && !seen[v] {
                seen[v] = true;
                seed.push(v);
            }
        }
    }

    seed
}

/// Converts an `f64` parameter into the weight type, saturating to infinity
fn cast<W: Float>(value: f64) -> W {
    <W as NumCast>::from(value).unwrap_or_else(W::infinity)
}

impl<W, G> ShortestPathAlgorithm<W, G> for BandSSSP
where
    W: Float + Debug,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Band SSSP"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        let run = self.run::<W, G>(graph, source)?;
        Ok(ShortestPathResult::from_distances(&run.distances, source))
    }
}
