//! Band SSSP - band-partitioned single-source shortest paths
//!
//! This library implements a simplified, engineering-oriented version of the
//! strategy described in "Breaking the Sorting Barrier for Directed Single-Source
//! Shortest Paths" by Duan et al. (2025): distances are resolved inside growing
//! bands using a bounded number of relaxation rounds, and only a small set of
//! pivot vertices is processed in priority order.
//!
//! Correctness does not depend on the heuristic phases. Every run ends with an
//! exact priority-ordered sweep, so the output equals classical Dijkstra for
//! every graph with non-negative weights.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod labeled;

pub use algorithm::{
    band_sssp::{BandRun, BandSSSP, BandStats},
    dijkstra::Dijkstra,
    ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;
pub use labeled::{band_sssp, band_sssp_with, dijkstra, VertexIndex};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Negative edge weight: {0}")]
    NegativeWeight(f64),

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(usize, usize),

    #[error("Source vertex not found in graph")]
    SourceNotFound,
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
