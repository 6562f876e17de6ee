use std::cmp::Ordering;

use rustc_hash::FxHashMap;

use crate::Weight;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapElement<VertexId> {
    /// Current shortest distance from origin to this vertex.
    pub distance: Weight,
    pub vertex: VertexId,
}

// The priority queue depends on the implementation of the Ord trait.
// By default std::BinaryHeap is a max heap.
// Explicitly implement the trait so the queue becomes a min heap.
impl<VertexId: Ord> Ord for HeapElement<VertexId> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .cmp(&self.distance)
            // breaking ties in a deterministic way
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl<VertexId: Ord> PartialOrd for HeapElement<VertexId> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Unpacks the shortest path from destination back to origin.
/// Returns the visited vertices and the edges between them, both in travel order.
pub fn unpack_path<VertexId, EdgeId>(
    previous_map: &FxHashMap<VertexId, (EdgeId, VertexId)>,
    destination: VertexId,
) -> (Vec<VertexId>, Vec<EdgeId>)
where
    VertexId: Copy + Eq + std::hash::Hash,
    EdgeId: Copy,
{
    let mut vertices = vec![destination];
    let mut edges = vec![];
    let mut next = destination;

    while let Some(&(edge, previous)) = previous_map.get(&next) {
        next = previous;
        vertices.push(previous);
        edges.push(edge);
    }

    vertices.reverse();
    edges.reverse();
    (vertices, edges)
}

#[cfg(test)]
mod tests {
    use std::collections::BinaryHeap;

    use test_log::test;

    use super::*;

    #[test]
    fn heap_element_min_heap_order() {
        let mut heap = BinaryHeap::from([
            HeapElement {
                distance: Weight::new(3.0),
                vertex: 1,
            },
            HeapElement {
                distance: Weight::INFINITY,
                vertex: 0,
            },
            HeapElement {
                distance: Weight::new(1.0),
                vertex: 7,
            },
            HeapElement {
                distance: Weight::new(1.0),
                vertex: 2,
            },
        ]);

        let order: Vec<_> = std::iter::from_fn(|| heap.pop().map(|e| e.vertex)).collect();
        assert_eq!(order, vec![2, 7, 1, 0]);
    }

    #[test]
    fn unpack_path_001() {
        let previous_map = FxHashMap::from_iter([(2, ('b', 1)), (1, ('a', 0)), (5, ('x', 4))]);

        assert_eq!(unpack_path(&previous_map, 2), (vec![0, 1, 2], vec!['a', 'b']));
        assert_eq!(unpack_path(&previous_map, 0), (vec![0], vec![]));
    }
}
