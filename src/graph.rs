use std::fmt::Debug;
use std::hash::Hash;

use crate::{Metric, Weight};

/// Directed weighted graph.
/// Exposes the behavior of a transport network that the shortest path engine runs on.
pub trait DirectedGraph {
    /// Uniquely identify a vertex that belongs to the graph.
    type VertexId: Debug + Copy + Ord + Hash;
    /// Uniquely identify a directed edge that belongs to the graph.
    type EdgeId: Debug + Copy + Ord + Hash;

    /// Gets an iterator over all the vertices of the graph.
    fn vertices(&self) -> impl Iterator<Item = Self::VertexId>;

    /// Gets the start vertex of the directed edge.
    fn get_edge_start_vertex(&self, edge: Self::EdgeId) -> Option<Self::VertexId>;

    /// Gets the end vertex of the directed edge.
    fn get_edge_end_vertex(&self, edge: Self::EdgeId) -> Option<Self::VertexId>;

    /// Gets the weight of the directed edge measured with the given metric.
    fn get_edge_weight(&self, edge: Self::EdgeId, metric: Metric) -> Option<Weight>;

    /// Gets an iterator over all the outgoing edges from the given vertex.
    /// For each edge returns the edge ID and the edge end vertex.
    /// Returns an empty iterator if the vertex doesn't belong to the graph.
    fn vertex_exiting_edges(
        &self,
        vertex: Self::VertexId,
    ) -> impl Iterator<Item = (Self::EdgeId, Self::VertexId)>;

    /// Returns the total number of vertices in the graph.
    fn vertex_count(&self) -> usize {
        self.vertices().count()
    }
}

pub mod dijkstra;
pub mod network;
pub mod path;
