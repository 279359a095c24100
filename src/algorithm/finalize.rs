use std::fmt::Debug;
use num_traits::Float;

use crate::algorithm::relax::relax;
use crate::data_structures::DistanceHeap;
use crate::graph::Graph;

/// Runs one exact priority-ordered relaxation sweep over `dist`.
///
/// Every vertex with a finite distance seeds the heap, so whatever upper
/// bounds the earlier phases left behind, `dist` holds exact shortest
/// distances afterwards (for non-negative weights). Must run unconditionally
/// at the end of every band run.
pub fn finalize<W, G>(graph: &G, dist: &mut [W])
where
    W: Float + Debug,
    G: Graph<W> + ?Sized,
{
    let mut heap = DistanceHeap::new();
    for (u, &du) in dist.iter().enumerate() {
        if du.is_finite() {
            heap.push(u, du);
        }
    }

    while let Some((u, _)) = heap.pop_current(dist) {
        for (v, weight) in graph.outgoing_edges(u) {
            if relax(u, v, weight, dist) {
                heap.push(v, dist[v]);
            }
        }
    }
}
