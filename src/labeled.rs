//! Shortest paths over arbitrary hashable vertex labels.
//!
//! Graphs come in as `label -> [(neighbour label, weight)]` maps. Labels are
//! assigned dense indices by a [`VertexIndex`], the index-level algorithms run
//! on a [`DirectedGraph`], and distances are mapped back to labels. Vertices
//! never reached from the source are left out of the output.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};

use num_traits::Float;

use crate::algorithm::band_sssp::BandSSSP;
use crate::algorithm::dijkstra::Dijkstra;
use crate::graph::directed::DirectedGraph;
use crate::graph::traits::check_weight;
use crate::Result;

/// Bidirectional mapping between vertex labels and dense indices
///
/// Indices are handed out in first-seen order, starting at 0.
#[derive(Debug, Clone)]
pub struct VertexIndex<K>
where
    K: Hash + Eq + Clone,
{
    ids: HashMap<K, usize>,
    labels: Vec<K>,
}

impl<K> VertexIndex<K>
where
    K: Hash + Eq + Clone,
{
    /// Creates an empty index
    pub fn new() -> Self {
        VertexIndex {
            ids: HashMap::new(),
            labels: Vec::new(),
        }
    }

    /// Returns the index of `label`, assigning the next free one if it is new
    pub fn insert(&mut self, label: &K) -> usize {
        if let Some(&id) = self.ids.get(label) {
            return id;
        }
        let id = self.labels.len();
        self.ids.insert(label.clone(), id);
        self.labels.push(label.clone());
        id
    }

    /// Index previously assigned to `label`
    pub fn index_of(&self, label: &K) -> Option<usize> {
        self.ids.get(label).copied()
    }

    /// Label assigned to `index`
    pub fn label(&self, index: usize) -> Option<&K> {
        self.labels.get(index)
    }

    /// Number of labels indexed so far
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns true if no label has been indexed
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl<K> Default for VertexIndex<K>
where
    K: Hash + Eq + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

/// A labeled graph converted to dense form
struct IndexedGraph<K, W>
where
    K: Hash + Eq + Clone,
    W: Float + Debug,
{
    index: VertexIndex<K>,
    graph: DirectedGraph<W>,
    source: usize,
}

/// Validates every weight, then indexes labels and builds the dense graph.
///
/// The source gets an index even when it appears nowhere in `graph`.
fn index_graph<K, N, W, S>(graph: &HashMap<K, N, S>, source: &K) -> Result<IndexedGraph<K, W>>
where
    K: Hash + Eq + Clone,
    N: AsRef<[(K, W)]>,
    W: Float + Debug,
    S: BuildHasher,
{
    for neighbors in graph.values() {
        for &(_, weight) in neighbors.as_ref() {
            check_weight(weight)?;
        }
    }

    let mut index = VertexIndex::new();
    let mut edges = Vec::new();
    for (u, neighbors) in graph {
        let from = index.insert(u);
        for (v, weight) in neighbors.as_ref() {
            let to = index.insert(v);
            edges.push((from, to, *weight));
        }
    }
    let source = index.insert(source);

    let graph = DirectedGraph::from_edges(index.len(), edges)?;
    Ok(IndexedGraph {
        index,
        graph,
        source,
    })
}

/// Maps a dense distance array back to labels, dropping infinite entries
fn collect_distances<K, W>(index: &VertexIndex<K>, distances: &[W]) -> HashMap<K, W>
where
    K: Hash + Eq + Clone,
    W: Float + Debug,
{
    distances
        .iter()
        .enumerate()
        .filter(|(_, d)| d.is_finite())
        .filter_map(|(i, &d)| index.label(i).map(|label| (label.clone(), d)))
        .collect()
}

/// Shortest distances from `source` with the default [`BandSSSP`] settings.
///
/// # Errors
///
/// [`crate::Error::NegativeWeight`] if any edge weight is negative, before any
/// relaxation takes place.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
///
/// let mut graph = HashMap::new();
/// graph.insert("A", vec![("B", 1.0), ("C", 4.0)]);
/// graph.insert("B", vec![("C", 2.0)]);
///
/// let dist = band_sssp::band_sssp(&graph, &"A").unwrap();
/// assert_eq!(dist[&"C"], 3.0);
/// ```
pub fn band_sssp<K, N, W, S>(graph: &HashMap<K, N, S>, source: &K) -> Result<HashMap<K, W>>
where
    K: Hash + Eq + Clone,
    N: AsRef<[(K, W)]>,
    W: Float + Debug,
    S: BuildHasher,
{
    band_sssp_with(graph, source, &BandSSSP::new())
}

/// Shortest distances from `source` using a configured [`BandSSSP`]
pub fn band_sssp_with<K, N, W, S>(
    graph: &HashMap<K, N, S>,
    source: &K,
    algorithm: &BandSSSP,
) -> Result<HashMap<K, W>>
where
    K: Hash + Eq + Clone,
    N: AsRef<[(K, W)]>,
    W: Float + Debug,
    S: BuildHasher,
{
    let indexed = index_graph::<K, N, W, S>(graph, source)?;
    let run = algorithm.run(&indexed.graph, indexed.source)?;
    Ok(collect_distances(&indexed.index, &run.distances))
}

/// Shortest distances from `source` with classic Dijkstra
pub fn dijkstra<K, N, W, S>(graph: &HashMap<K, N, S>, source: &K) -> Result<HashMap<K, W>>
where
    K: Hash + Eq + Clone,
    N: AsRef<[(K, W)]>,
    W: Float + Debug,
    S: BuildHasher,
{
    let indexed = index_graph::<K, N, W, S>(graph, source)?;
    let distances = Dijkstra::new().distances(&indexed.graph, indexed.source)?;
    Ok(collect_distances(&indexed.index, &distances))
}
