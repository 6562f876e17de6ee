mod run;

use std::collections::BinaryHeap;
use std::hash::Hash;
use std::iter;

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, trace};

pub use self::run::Run;
use crate::graph::dijkstra::{HeapElement, unpack_path};
use crate::{DirectedGraph, Metric, Weight};

#[derive(Debug, Clone, Copy)]
pub struct RoutingConfig {
    /// Tolerance used when comparing accumulated weights to find out which route was taken
    /// between two consecutive locations of a path.
    pub epsilon: f64,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self { epsilon: 1e-5 }
    }
}

/// Result of a single source shortest path run.
///
/// Holds the traversal state of every vertex for this run only: a vertex missing from the
/// distances was never reached, a vertex in the settled set has its final distance.
#[derive(Debug, Clone)]
pub struct ShortestPathTree<VertexId, EdgeId> {
    origin: VertexId,
    metric: Metric,
    /// (current) shortest distance from origin to this vertex
    shortest_distances: FxHashMap<VertexId, Weight>,
    /// edge and vertex (value) on the best known path from origin to this vertex (key)
    previous_map: FxHashMap<VertexId, (EdgeId, VertexId)>,
    settled: FxHashSet<VertexId>,
}

impl<VertexId, EdgeId> PartialEq for ShortestPathTree<VertexId, EdgeId>
where
    VertexId: Eq + Hash,
    EdgeId: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.origin == other.origin
            && self.metric == other.metric
            && self.shortest_distances == other.shortest_distances
            && self.previous_map == other.previous_map
            && self.settled == other.settled
    }
}

impl<VertexId, EdgeId> ShortestPathTree<VertexId, EdgeId>
where
    VertexId: Copy + Eq + Hash,
    EdgeId: Copy,
{
    pub const fn origin(&self) -> VertexId {
        self.origin
    }

    pub const fn metric(&self) -> Metric {
        self.metric
    }

    /// Gets the shortest distance from the origin, None if the vertex was never reached.
    pub fn distance(&self, vertex: VertexId) -> Option<Weight> {
        self.shortest_distances.get(&vertex).copied()
    }

    /// Gets the edge and the vertex the shortest path arrives from.
    pub fn previous(&self, vertex: VertexId) -> Option<(EdgeId, VertexId)> {
        self.previous_map.get(&vertex).copied()
    }

    pub fn is_settled(&self, vertex: VertexId) -> bool {
        self.settled.contains(&vertex)
    }

    pub fn settled_count(&self) -> usize {
        self.settled.len()
    }

    /// Unpacks the shortest path from the origin to the destination.
    /// Returns the visited vertices and the edges taken, or None if the destination is not
    /// the origin and was never reached.
    pub fn path_to(&self, destination: VertexId) -> Option<(Vec<VertexId>, Vec<EdgeId>)> {
        if destination != self.origin && !self.previous_map.contains_key(&destination) {
            return None;
        }

        Some(unpack_path(&self.previous_map, destination))
    }
}

/// Computes the shortest distance from the origin to every vertex of the graph, measuring
/// edges with the given metric.
///
/// Edge weights are expected to be non-negative. A vertex distance is only updated when a
/// strictly shorter path is found, so among equally short paths the first discovered one is kept.
pub fn shortest_path_tree<G: DirectedGraph>(
    graph: &G,
    origin: G::VertexId,
    metric: Metric,
) -> ShortestPathTree<G::VertexId, G::EdgeId> {
    debug!("Computing shortest path tree from {origin:?} by {metric}");

    let mut shortest_distances = FxHashMap::from_iter([(origin, Weight::ZERO)]);
    let mut previous_map: FxHashMap<G::VertexId, (G::EdgeId, G::VertexId)> = FxHashMap::default();
    let mut settled = FxHashSet::default();

    // priority queue of the frontier, initially every vertex with unreached ones at infinity
    // there is no decrease-key: improved vertices are pushed again and stale entries skipped
    let mut frontier: BinaryHeap<_> = graph
        .vertices()
        .filter(|&v| v != origin)
        .map(|vertex| HeapElement {
            vertex,
            distance: Weight::INFINITY,
        })
        .chain(iter::once(HeapElement {
            vertex: origin,
            distance: Weight::ZERO,
        }))
        .collect();

    while let Some(HeapElement { distance, vertex }) = frontier.pop() {
        if !distance.is_finite() {
            // everything left in the frontier is unreachable from the origin
            break;
        }

        if !settled.insert(vertex) {
            continue;
        }

        for (edge, vertex_to) in graph.vertex_exiting_edges(vertex) {
            if settled.contains(&vertex_to) {
                continue;
            }

            let Some(weight) = graph.get_edge_weight(edge, metric) else {
                continue;
            };
            debug_assert!(weight >= Weight::ZERO, "negative weight on {edge:?}");

            let distance = distance + weight;
            let shortest_distance = *shortest_distances
                .get(&vertex_to)
                .unwrap_or(&Weight::INFINITY);

            // check if we can follow the current path to reach the neighbor in a cheaper way
            if distance < shortest_distance {
                trace!("Relax {vertex_to:?} via {edge:?}: {shortest_distance:?} -> {distance:?}");

                shortest_distances.insert(vertex_to, distance);
                previous_map.insert(vertex_to, (edge, vertex));
                frontier.push(HeapElement {
                    vertex: vertex_to,
                    distance,
                });
            }
        }
    }

    ShortestPathTree {
        origin,
        metric,
        shortest_distances,
        previous_map,
        settled,
    }
}
