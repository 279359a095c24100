use std::fmt::Debug;
use num_traits::Float;

use crate::{Error, Result};

/// Trait representing an immutable weighted directed graph with dense vertex ids
pub trait Graph<W>: Debug
where
    W: Float + Debug,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex, in insertion order
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.outgoing_edges(from).any(|(target, _)| target == to)
    }

    /// Gets the weight of the first edge between two vertices if it exists
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.outgoing_edges(from)
            .find(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
    }
}

/// Checks that a weight is usable as a shortest-path edge weight.
///
/// NaN fails the `>= 0` comparison and is rejected together with negative values.
pub fn check_weight<W: Float>(weight: W) -> Result<()> {
    if weight >= W::zero() {
        Ok(())
    } else {
        Err(Error::NegativeWeight(weight.to_f64().unwrap_or(f64::NAN)))
    }
}

/// Scans every edge of `graph` and fails on the first negative weight
pub fn ensure_non_negative<W, G>(graph: &G) -> Result<()>
where
    W: Float + Debug,
    G: Graph<W> + ?Sized,
{
    for v in 0..graph.vertex_count() {
        for (_, weight) in graph.outgoing_edges(v) {
            check_weight(weight)?;
        }
    }
    Ok(())
}
