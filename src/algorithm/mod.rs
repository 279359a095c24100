pub mod traits;
pub mod relax;
pub mod dijkstra;
pub mod bounded_relax;
pub mod pivots;
pub mod finalize;
pub mod band_sssp;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
