use std::time::{Duration, Instant};

use band_sssp::graph::generators::generate_sparse;
use band_sssp::graph::{DirectedGraph, Graph};
use band_sssp::{BandSSSP, Dijkstra};
use log::{error, info};

// Times a closure returning a distance array
fn time_run<F>(name: &str, graph: &DirectedGraph<f64>, run: F) -> band_sssp::Result<(Vec<f64>, Duration)>
where
    F: FnOnce() -> band_sssp::Result<Vec<f64>>,
{
    info!("Running {} on graph with {} vertices...", name, graph.vertex_count());

    let start = Instant::now();
    let distances = run()?;
    let duration = start.elapsed();

    let reachable = distances.iter().filter(|d| d.is_finite()).count();
    info!("  - Found {} reachable vertices in {:?}", reachable, duration);

    Ok((distances, duration))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let graph_sizes = [1_000, 10_000, 50_000, 100_000];
    let edge_factor = 4.0;

    println!("=====================================================");
    println!("Benchmark: Dijkstra vs Band SSSP");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let dijkstra = Dijkstra::new();
    let band = BandSSSP::new();
    let mut results = Vec::new();

    for (seed, &size) in graph_sizes.iter().enumerate() {
        let graph = generate_sparse(size, edge_factor, seed as u64)?;
        let source = 0;

        let (expected, dijkstra_time) = time_run("Dijkstra", &graph, || dijkstra.distances(&graph, source))?;
        let (actual, band_time) = time_run("Band SSSP", &graph, || {
            band.run(&graph, source).map(|run| run.distances)
        })?;

        let agree = expected
            .iter()
            .zip(&actual)
            .all(|(a, b)| a == b || (a - b).abs() < 1e-9);
        if !agree {
            error!("Band SSSP disagrees with Dijkstra on graph with {} vertices", size);
        }

        results.push((size, graph.edge_count(), dijkstra_time, band_time, agree));
    }

    println!("{:<10} | {:<10} | {:<15} | {:<15} | {:<8} | {:<6}",
             "Vertices", "Edges", "Dijkstra (ms)", "Band (ms)", "Ratio", "Match");
    println!("-----------------------------------------------------");

    for (size, edges, dijkstra_time, band_time, agree) in &results {
        let ratio = band_time.as_secs_f64() / dijkstra_time.as_secs_f64().max(f64::EPSILON);
        println!("{:<10} | {:<10} | {:<15} | {:<15} | {:<8.2} | {:<6}",
                 size,
                 edges,
                 dijkstra_time.as_millis(),
                 band_time.as_millis(),
                 ratio,
                 agree);
    }

    Ok(())
}
