use std::fmt::Debug;
use num_traits::Float;

use crate::algorithm::relax::relax;
use crate::graph::Graph;

/// Outcome of [`k_round_relax`] over the original active vertices
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BandPartition {
    /// Active vertices inside the band with no improving in-band edge left
    pub settled: Vec<usize>,

    /// Active vertices inside the band that can still improve a neighbour
    pub incomplete: Vec<usize>,
}

/// Performs up to `k` rounds of relaxation restricted to `band_upper`.
///
/// The work frontier starts as `active`. In each round every frontier vertex
/// below the band relaxes the outgoing edges whose candidate distance stays
/// below the band, and the improved targets form the next frontier. Rounds
/// stop early when the frontier runs dry.
///
/// Afterwards the original `active` vertices (not the frontier) are
/// classified: vertices at or above the band are dropped, the rest are
/// incomplete if some edge would still strictly improve a neighbour inside
/// the band and settled otherwise.
pub fn k_round_relax<W, G>(
    graph: &G,
    dist: &mut [W],
    active: &[usize],
    k: usize,
    band_upper: W,
) -> BandPartition
where
    W: Float + Debug,
    G: Graph<W> + ?Sized,
{
    let n = graph.vertex_count();
    let mut in_next = vec![false; n];

    let mut work: Vec<usize> = Vec::with_capacity(active.len());
    for &u in active {
        if !in_next[u] {
            in_next[u] = true;
            work.push(u);
        }
    }
    for &u in &work {
        in_next[u] = false;
    }

    for _ in 0..k {
        let mut next_work = Vec::new();

        for &u in &work {
            let du = dist[u];
            if du >= band_upper {
                continue;
            }
            for (v, weight) in graph.outgoing_edges(u) {
                if du + weight < band_upper && relax(u, v, weight, dist) && !in_next[v] {
                    in_next[v] = true;
                    next_work.push(v);
                }
            }
        }

        for &v in &next_work {
            in_next[v] = false;
        }
        work = next_work;
        if work.is_empty() {
            break;
        }
    }

    let mut partition = BandPartition::default();
    for &u in active {
        let du = dist[u];
        if du >= band_upper {
            continue;
        }
        let can_improve = graph.outgoing_edges(u).any(|(v, weight)| {
            let candidate = du + weight;
            candidate < dist[v] && candidate < band_upper
        });
        if can_improve {
            partition.incomplete.push(u);
        } else {
            partition.settled.push(u);
        }
    }

    partition
}
