use band_sssp::algorithm::band_sssp::{improvable_vertices, reseed_frontier};
use band_sssp::algorithm::bounded_relax::k_round_relax;
use band_sssp::algorithm::finalize::finalize;
use band_sssp::algorithm::pivots::{process_pivots, select_pivots};
use band_sssp::algorithm::relax::relax;
use band_sssp::data_structures::DistanceHeap;
use band_sssp::graph::generators::generate_gnp;
use band_sssp::graph::DirectedGraph;
use band_sssp::Dijkstra;

const INF: f64 = f64::INFINITY;

fn graph(n: usize, edges: &[(usize, usize, f64)]) -> DirectedGraph<f64> {
    DirectedGraph::from_edges(n, edges.iter().copied()).unwrap()
}

#[test]
fn test_relax_only_applies_strict_improvements() {
    let mut dist = vec![0.0, INF];

    assert!(relax(0, 1, 2.0, &mut dist));
    assert_eq!(dist[1], 2.0);

    // Equal or worse candidates are no-ops
    assert!(!relax(0, 1, 2.0, &mut dist));
    assert!(!relax(0, 1, 3.0, &mut dist));
    assert_eq!(dist[1], 2.0);

    // Self-loops never improve with non-negative weights
    assert!(!relax(0, 0, 0.0, &mut dist));
}

#[test]
fn test_distance_heap_discards_stale_entries() {
    let mut heap = DistanceHeap::new();
    let dist = vec![3.0, 1.0];

    heap.push(0, 5.0);
    heap.push(0, 3.0);
    heap.push(1, 1.0);
    assert_eq!(heap.len(), 3);

    assert_eq!(heap.pop_current(&dist), Some((1, 1.0)));
    assert_eq!(heap.pop_current(&dist), Some((0, 3.0)));
    // (0, 5.0) no longer matches dist[0]
    assert_eq!(heap.pop_current(&dist), None);
    assert!(heap.is_empty());
}

#[test]
fn test_k_round_relax_respects_round_budget() {
    let g = graph(5, &[(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0), (3, 4, 1.0)]);

    let mut dist = vec![0.0, INF, INF, INF, INF];
    let partition = k_round_relax(&g, &mut dist, &[0], 1, 10.0);
    assert_eq!(dist, vec![0.0, 1.0, INF, INF, INF]);
    assert_eq!(partition.settled, vec![0]);
    assert!(partition.incomplete.is_empty());

    let mut dist = vec![0.0, INF, INF, INF, INF];
    k_round_relax(&g, &mut dist, &[0], 3, 10.0);
    assert_eq!(dist, vec![0.0, 1.0, 2.0, 3.0, INF]);
}

#[test]
fn test_k_round_relax_stays_inside_band() {
    let g = graph(3, &[(0, 1, 3.0), (0, 2, 1.0)]);
    let mut dist = vec![0.0, INF, INF];

    let partition = k_round_relax(&g, &mut dist, &[0], 3, 2.0);

    // 0 -> 1 would land at 3.0, outside the band
    assert_eq!(dist, vec![0.0, INF, 1.0]);
    // The remaining improvement is outside the band, so 0 counts as settled
    assert_eq!(partition.settled, vec![0]);
    assert!(partition.incomplete.is_empty());
}

#[test]
fn test_k_round_relax_classifies_original_active_vertices() {
    let g = graph(4, &[(0, 1, 1.0), (0, 2, 5.0), (1, 2, 1.0)]);

    // With no rounds nothing is relaxed, so both in-band vertices are incomplete
    let mut dist = vec![0.0, 1.0, INF, 50.0];
    let partition = k_round_relax(&g, &mut dist, &[0, 1, 3], 0, 10.0);
    assert_eq!(partition.incomplete, vec![0, 1]);
    assert!(partition.settled.is_empty());
    // Vertex 3 is above the band and dropped from both lists
    assert!(!partition.incomplete.contains(&3) && !partition.settled.contains(&3));

    // One round lets both of them relax and settle
    let mut dist = vec![0.0, 1.0, INF, 50.0];
    let partition = k_round_relax(&g, &mut dist, &[0, 1, 3], 1, 10.0);
    assert_eq!(dist[2], 2.0);
    assert_eq!(partition.settled, vec![0, 1]);
    assert!(partition.incomplete.is_empty());
}

fn pivot_graph() -> DirectedGraph<f64> {
    graph(
        8,
        &[
            (1, 4, 1.0),
            (2, 4, 1.0),
            (2, 5, 1.0),
            (2, 6, 1.0),
            (3, 5, 1.0),
            (3, 6, 1.0),
            (3, 7, 1.0),
        ],
    )
}

#[test]
fn test_select_pivots_ranks_by_in_band_out_degree() {
    let g = pivot_graph();
    let dist = vec![INF, 0.0, 0.0, 0.0, INF, INF, INF, INF];

    assert_eq!(select_pivots(&g, &dist, &[1, 2, 3], 10.0, 1), vec![2, 3, 1]);
    // Budget of 2 keeps max(1, 3 / 2) = 1 pivot; the tie goes to the lower id
    assert_eq!(select_pivots(&g, &dist, &[3, 2, 1], 10.0, 2), vec![2]);
    // At least one pivot is always selected
    assert_eq!(select_pivots(&g, &dist, &[1, 2, 3], 10.0, 10), vec![2]);
}

#[test]
fn test_select_pivots_ignores_out_of_band_edges_and_vertices() {
    let g = graph(5, &[(1, 3, 1.0), (1, 4, 1.0), (2, 3, 1.0), (2, 4, 100.0)]);
    let dist = vec![INF, 0.0, 0.0, INF, INF];

    // Vertex 2 scores 1 because 0 + 100 leaves the band
    assert_eq!(select_pivots(&g, &dist, &[2, 1], 10.0, 1), vec![1, 2]);

    let dist = vec![INF, 20.0, 0.0, INF, INF];
    assert_eq!(select_pivots(&g, &dist, &[1, 2], 10.0, 1), vec![2]);
}

#[test]
fn test_process_pivots_is_confined_to_band() {
    let g = graph(4, &[(0, 1, 1.0), (1, 2, 1.0), (2, 3, 5.0)]);
    let mut dist = vec![0.0, INF, INF, INF];

    let scanned = process_pivots(&g, &mut dist, &[0, 0], 4.0);

    assert_eq!(dist, vec![0.0, 1.0, 2.0, INF]);
    assert_eq!(scanned, 3);
}

#[test]
fn test_process_pivots_skips_pivots_above_band() {
    let g = graph(2, &[(0, 1, 1.0)]);
    let mut dist = vec![5.0, INF];

    assert_eq!(process_pivots(&g, &mut dist, &[0], 4.0), 0);
    assert_eq!(dist, vec![5.0, INF]);
}

#[test]
fn test_improvable_vertices_require_in_band_improvement_above_tolerance() {
    let g = graph(
        8,
        &[
            (0, 1, 2.0),
            (2, 3, 1.0),
            (4, 5, 0.0),
            (6, 7, 20.0),
        ],
    );
    let dist = vec![0.0, 5.0, 1.0, 2.25, 0.0, 0.0, 1.0, INF];

    // 2 -> 3 only gains 0.25, 4 -> 5 gains nothing, 6 -> 7 leaves the band
    assert_eq!(improvable_vertices(&g, &dist, 10.0, 0.5), vec![0]);
    assert_eq!(improvable_vertices(&g, &dist, 10.0, 0.0), vec![0, 2]);

    // Nothing below the band is active
    assert!(improvable_vertices(&g, &dist, 0.0, 0.0).is_empty());
}

#[test]
fn test_zero_weight_edges_at_distance_zero_are_not_improvable() {
    let g = graph(3, &[(0, 1, 0.0), (1, 0, 0.0), (1, 2, 0.0)]);
    let dist = vec![0.0, 0.0, 0.0];

    assert!(improvable_vertices(&g, &dist, 1.0, 1e-18).is_empty());
    assert!(improvable_vertices(&g, &dist, 1.0, 0.0).is_empty());
}

#[test]
fn test_reseed_frontier_adds_in_band_out_neighbours() {
    let g = graph(5, &[(0, 1, 3.0), (0, 4, 1.0), (2, 3, 5.0)]);
    let dist = vec![0.0, 12.0, 9.0, INF, 1.0];

    // 1 is still above the band but reachable inside it through 0; 4 is only
    // listed once; 2 is above the band so its neighbour 3 is not added
    assert_eq!(reseed_frontier(&g, &dist, 8.0), vec![0, 1, 4]);

    // Candidates must be strictly below the band
    assert_eq!(reseed_frontier(&g, &dist, 3.0), vec![0, 4]);
}

#[test]
fn test_finalize_repairs_upper_bounds() {
    let g = graph(4, &[(0, 1, 4.0), (0, 2, 1.0), (2, 1, 1.0)]);
    let mut dist = vec![0.0, 4.0, INF, INF];

    finalize(&g, &mut dist);

    assert_eq!(dist, vec![0.0, 2.0, 1.0, INF]);
}

#[test]
fn test_phases_never_increase_distances() {
    let g = generate_gnp(40, 0.15, 0..=10, 3).unwrap();
    let mut dist = vec![INF; 40];
    dist[0] = 0.0;

    let mut snapshots = vec![dist.clone()];
    let mut band = 5.0;
    let mut active = vec![0];
    for _ in 0..4 {
        let partition = k_round_relax(&g, &mut dist, &active, 2, band);
        snapshots.push(dist.clone());

        if !partition.incomplete.is_empty() {
            let pivots = select_pivots(&g, &dist, &partition.incomplete, band, 2);
            process_pivots(&g, &mut dist, &pivots, band);
            snapshots.push(dist.clone());
        }

        active = (0..40).filter(|&v| dist[v] < band).collect();
        band *= 2.0;
    }
    finalize(&g, &mut dist);
    snapshots.push(dist.clone());

    for pair in snapshots.windows(2) {
        for v in 0..40 {
            assert!(pair[1][v] <= pair[0][v], "distance of {} increased", v);
        }
    }

    let expected = Dijkstra::new().distances(&g, 0).unwrap();
    assert_eq!(dist, expected);
}
