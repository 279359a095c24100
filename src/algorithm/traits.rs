use std::fmt::Debug;
use num_traits::Float;
use crate::graph::Graph;
use crate::Result;

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathResult<W>
where
    W: Float + Debug,
{
    /// Distances from source to each vertex, `None` for unreachable vertices
    pub distances: Vec<Option<W>>,

    /// Source vertex ID
    pub source: usize,
}

impl<W> ShortestPathResult<W>
where
    W: Float + Debug,
{
    /// Builds a result from a raw distance array, mapping infinity to `None`
    pub fn from_distances(distances: &[W], source: usize) -> Self {
        ShortestPathResult {
            distances: distances
                .iter()
                .map(|&d| if d.is_infinite() { None } else { Some(d) })
                .collect(),
            source,
        }
    }

    /// Distance to `vertex`, `None` if it is unreachable or out of range
    pub fn distance(&self, vertex: usize) -> Option<W> {
        self.distances.get(vertex).copied().flatten()
    }

    /// Number of vertices reachable from the source (the source included)
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Debug,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
