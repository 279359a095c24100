use crate::graph::traits::{check_weight, Graph};
use crate::{Error, Result};
use num_traits::{Float, NumCast};
use std::fmt::Debug;

/// An immutable directed graph using dense adjacency lists
///
/// The graph is built once from an edge list and never mutated afterwards.
/// Every weight is checked at construction, so algorithms can rely on
/// non-negative weights.
#[derive(Debug, Clone)]
pub struct DirectedGraph<W>
where
    W: Float + Debug,
{
    /// Outgoing edges for each vertex: adjacency[u] = [(target_vertex, weight)]
    adjacency: Vec<Vec<(usize, W)>>,

    /// Total number of edges
    edge_count: usize,
}

impl<W> DirectedGraph<W>
where
    W: Float + Debug,
{
    /// Creates a graph with `vertices` vertices and no edges
    pub fn empty(vertices: usize) -> Self {
        DirectedGraph {
            adjacency: vec![Vec::new(); vertices],
            edge_count: 0,
        }
    }

    /// Builds a graph with `vertices` vertices from `(from, to, weight)` triples.
    ///
    /// Fails with [`Error::NegativeWeight`] on a negative or NaN weight and with
    /// [`Error::InvalidEdge`] when an endpoint is not below `vertices`. Parallel
    /// edges and self-loops are kept as given.
    pub fn from_edges<I>(vertices: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut graph = Self::empty(vertices);

        for (from, to, weight) in edges {
            check_weight(weight)?;
            if from >= vertices || to >= vertices {
                return Err(Error::InvalidEdge(from, to));
            }
            graph.adjacency[from].push((to, weight));
            graph.edge_count += 1;
        }

        Ok(graph)
    }

    /// Returns the adjacency slice of a vertex (empty for unknown vertices)
    pub fn neighbors(&self, vertex: usize) -> &[(usize, W)] {
        self.adjacency.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterates over all edges as `(from, to, weight)` triples
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, W)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(from, edges)| edges.iter().map(move |&(to, weight)| (from, to, weight)))
    }

    /// Average edge weight, or `None` for a graph without edges
    pub fn average_weight(&self) -> Option<W> {
        average_edge_weight(self)
    }
}

/// Average weight over every edge of `graph`, `None` when there are no edges
pub fn average_edge_weight<W, G>(graph: &G) -> Option<W>
where
    W: Float + Debug,
    G: Graph<W> + ?Sized,
{
    let mut total = W::zero();
    let mut count = 0usize;
    for v in 0..graph.vertex_count() {
        for (_, weight) in graph.outgoing_edges(v) {
            total = total + weight;
            count += 1;
        }
    }

    if count == 0 {
        return None;
    }
    <W as NumCast>::from(count).map(|c| total / c)
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Float + Debug,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        Box::new(self.neighbors(vertex).iter().copied())
    }
}
