use crate::{DirectedGraph, Metric, Weight};

/// Returns true only if all the edges of the path are sequentially connected in the given graph,
/// that is, every edge starts where the previous one ends.
pub fn is_path_connected<G: DirectedGraph>(graph: &G, path: &[G::EdgeId]) -> bool {
    for window in path.windows(2) {
        let [e1, e2] = [window[0], window[1]];

        match graph.get_edge_end_vertex(e1) {
            Some(v) if !graph.vertex_exiting_edges(v).any(|(e, _)| e == e2) => return false,
            None => return false,
            Some(_) => (),
        };
    }

    true
}

/// Sums the weight of every edge of the path.
/// Returns None if any of the edges doesn't belong to the graph.
pub fn path_weight<G: DirectedGraph>(
    graph: &G,
    path: &[G::EdgeId],
    metric: Metric,
) -> Option<Weight> {
    path.iter()
        .map(|&e| graph.get_edge_weight(e, metric))
        .sum()
}
