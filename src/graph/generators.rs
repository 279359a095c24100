use crate::graph::DirectedGraph;
use crate::Result;
use rand::prelude::*;
use rand::rngs::StdRng;
use std::ops::RangeInclusive;

/// Generates a directed G(n, p) random graph: every ordered pair `(u, v)` with
/// `u != v` becomes an edge with probability `p`, with an integer weight drawn
/// uniformly from `weights`.
///
/// The same `seed` always produces the same graph.
pub fn generate_gnp(
    n: usize,
    p: f64,
    weights: RangeInclusive<u32>,
    seed: u64,
) -> Result<DirectedGraph<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let p = p.clamp(0.0, 1.0);
    let mut edges = Vec::new();

    for u in 0..n {
        for v in 0..n {
            if u != v && rng.gen_bool(p) {
                let weight = rng.gen_range(weights.clone()) as f64;
                edges.push((u, v, weight));
            }
        }
    }

    DirectedGraph::from_edges(n, edges)
}

/// Generates a complete directed graph on `n` vertices (no self-loops)
pub fn generate_complete(n: usize, weights: RangeInclusive<u32>, seed: u64) -> Result<DirectedGraph<f64>> {
    generate_gnp(n, 1.0, weights, seed)
}

/// Generates a `width` x `height` grid where each undirected grid edge is
/// simulated by two directed edges sharing one random weight.
///
/// Vertex `(x, y)` has index `y * width + x`.
pub fn generate_grid_2d(
    width: usize,
    height: usize,
    weights: RangeInclusive<u32>,
    seed: u64,
) -> Result<DirectedGraph<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let index = |x: usize, y: usize| -> usize { y * width + x };
    let mut edges = Vec::new();

    for y in 0..height {
        for x in 0..width {
            let current = index(x, y);

            // Right and down neighbours; the reverse direction is added alongside
            if x + 1 < width {
                let weight = rng.gen_range(weights.clone()) as f64;
                edges.push((current, index(x + 1, y), weight));
                edges.push((index(x + 1, y), current, weight));
            }
            if y + 1 < height {
                let weight = rng.gen_range(weights.clone()) as f64;
                edges.push((current, index(x, y + 1), weight));
                edges.push((index(x, y + 1), current, weight));
            }
        }
    }

    DirectedGraph::from_edges(width * height, edges)
}

/// Generates a sparse random graph with roughly `edge_factor * n` edges and
/// real-valued weights in `[1, 100)`. Self-loops are skipped.
pub fn generate_sparse(n: usize, edge_factor: f64, seed: u64) -> Result<DirectedGraph<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let num_edges = (edge_factor * n as f64) as usize;
    let mut edges = Vec::with_capacity(num_edges);

    if n > 1 {
        for _ in 0..num_edges {
            let u = rng.gen_range(0..n);
            let v = rng.gen_range(0..n);
            if u != v {
                edges.push((u, v, rng.gen_range(1.0..100.0)));
            }
        }
    }

    DirectedGraph::from_edges(n, edges)
}
