use std::fmt::Debug;
use num_traits::Float;

use crate::algorithm::relax::relax;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::DistanceHeap;
use crate::graph::{ensure_non_negative, Graph};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm implementation
///
/// Serves as the correctness oracle for [`crate::BandSSSP`].
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Runs Dijkstra from `source` and returns the raw distance array,
    /// with `W::infinity()` for unreachable vertices
    pub fn distances<W, G>(&self, graph: &G, source: usize) -> Result<Vec<W>>
    where
        W: Float + Debug,
        G: Graph<W>,
    {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }
        ensure_non_negative::<W, G>(graph)?;

        let mut dist = vec![W::infinity(); graph.vertex_count()];
        dist[source] = W::zero();

        let mut queue = DistanceHeap::new();
        queue.push(source, W::zero());

        // Main Dijkstra loop; stale entries are skipped by pop_current
        while let Some((u, _)) = queue.pop_current(&dist) {
            for (v, weight) in graph.outgoing_edges(u) {
                if relax(u, v, weight, &mut dist) {
                    queue.push(v, dist[v]);
                }
            }
        }

        Ok(dist)
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Float + Debug,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        let dist = self.distances::<W, G>(graph, source)?;
        Ok(ShortestPathResult::from_distances(&dist, source))
    }
}
