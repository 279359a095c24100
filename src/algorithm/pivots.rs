use std::cmp::Reverse;
use std::fmt::Debug;
use num_traits::Float;

use crate::algorithm::relax::relax;
use crate::data_structures::DistanceHeap;
use crate::graph::Graph;

/// Selects a small set of high-impact pivots among the incomplete `candidates`.
///
/// A candidate's score is the number of its outgoing edges whose candidate
/// distance stays below `band_upper`. Candidates are ranked by descending
/// score, ties by ascending vertex id, and the top
/// `max(1, candidates.len() / budget_k)` are returned. Candidates already at
/// or above the band are never selected.
pub fn select_pivots<W, G>(
    graph: &G,
    dist: &[W],
    candidates: &[usize],
    band_upper: W,
    budget_k: usize,
) -> Vec<usize>
where
    W: Float + Debug,
    G: Graph<W> + ?Sized,
{
    let mut scored: Vec<(usize, usize)> = candidates
        .iter()
        .filter(|&&u| dist[u] < band_upper)
        .map(|&u| {
            let du = dist[u];
            let score = graph
                .outgoing_edges(u)
                .filter(|&(_, weight)| du + weight < band_upper)
                .count();
            (score, u)
        })
        .collect();

    scored.sort_by_key(|&(score, u)| (Reverse(score), u));

    let target = (candidates.len() / budget_k.max(1)).max(1);
    scored.into_iter().take(target).map(|(_, u)| u).collect()
}

/// Resolves the pivots with a priority-ordered relaxation confined to the band.
///
/// The heap is seeded with every distinct pivot below `band_upper`; an edge is
/// relaxed only when the candidate distance stays below the band. Entries that
/// no longer match `dist` are discarded when popped. Returns the number of
/// vertices scanned.
pub fn process_pivots<W, G>(graph: &G, dist: &mut [W], pivots: &[usize], band_upper: W) -> usize
where
    W: Float + Debug,
    G: Graph<W> + ?Sized,
{
    let mut heap = DistanceHeap::new();
    let mut seen = vec![false; graph.vertex_count()];
    for &u in pivots {
        if dist[u] < band_upper && !seen[u] {
            seen[u] = true;
            heap.push(u, dist[u]);
        }
    }

    let mut scanned = 0;
    while let Some((u, du)) = heap.pop_current(dist) {
        if du >= band_upper {
            continue;
        }
        scanned += 1;
        for (v, weight) in graph.outgoing_edges(u) {
            if du + weight < band_upper && relax(u, v, weight, dist) {
                heap.push(v, dist[v]);
            }
        }
    }

    scanned
}
