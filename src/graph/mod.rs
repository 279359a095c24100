pub mod traits;
pub mod directed;
pub mod generators;

pub use traits::{ensure_non_negative, Graph};
pub use directed::DirectedGraph;
