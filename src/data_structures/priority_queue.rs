use num_traits::Float;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A min-heap of `(distance, vertex)` entries with lazy deletion
///
/// There is no decrease-key: an improved vertex is pushed again and the older
/// entry stays in the heap. Entries whose distance no longer equals the live
/// value in the distance array are discarded when popped.
#[derive(Debug)]
pub struct DistanceHeap<W>
where
    W: Float + Debug,
{
    /// The underlying binary heap, ordered by distance then vertex id
    heap: BinaryHeap<Reverse<(OrderedFloat<W>, usize)>>,
}

impl<W> DistanceHeap<W>
where
    W: Float + Debug,
{
    /// Creates a new empty heap
    pub fn new() -> Self {
        DistanceHeap {
            heap: BinaryHeap::new(),
        }
    }

    /// Returns true if no entries (stale or live) remain
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes a vertex with the distance it had when it was pushed
    pub fn push(&mut self, vertex: usize, distance: W) {
        self.heap.push(Reverse((OrderedFloat(distance), vertex)));
    }

    /// Removes the entry with the smallest distance, stale or not
    fn pop(&mut self) -> Option<(usize, W)> {
        self.heap
            .pop()
            .map(|Reverse((OrderedFloat(distance), vertex))| (vertex, distance))
    }

    /// Pops entries until one matches the live distance in `dist`.
    ///
    /// Stale entries are dropped on the way. Returns `None` once the heap is empty.
    pub fn pop_current(&mut self, dist: &[W]) -> Option<(usize, W)> {
        while let Some((vertex, distance)) = self.pop() {
            if distance == dist[vertex] {
                return Some((vertex, distance));
            }
        }
        None
    }
}

impl<W> Default for DistanceHeap<W>
where
    W: Float + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
