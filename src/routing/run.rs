use approx::abs_diff_eq;
use tracing::debug;

use crate::routing::{RoutingConfig, ShortestPathTree, shortest_path_tree};
use crate::{
    GraphError, Location, LocationId, Metric, Network, PathError, Route, RouteId, Weight,
};

/// Shortest paths computed from one source location of a [`Network`].
#[derive(Debug, Clone)]
pub struct Run<'a> {
    network: &'a Network,
    source: &'a Location,
    tree: ShortestPathTree<LocationId, RouteId>,
}

impl Network {
    /// Runs the shortest path engine from the source location, measuring routes with the metric.
    pub fn run(&self, source: &str, metric: Metric) -> Result<Run<'_>, GraphError> {
        let source = self.lookup(source)?;
        let tree = shortest_path_tree(self, source.id, metric);

        debug!(
            "Settled {} of {} locations from {} by {metric}",
            tree.settled_count(),
            self.locations().len(),
            source.key
        );

        Ok(Run {
            network: self,
            source,
            tree,
        })
    }
}

impl<'a> Run<'a> {
    pub const fn source(&self) -> &'a Location {
        self.source
    }

    pub fn metric(&self) -> Metric {
        self.tree.metric()
    }

    pub const fn tree(&self) -> &ShortestPathTree<LocationId, RouteId> {
        &self.tree
    }

    /// Gets the shortest distance from the source, None if the location is unreachable.
    pub fn distance(&self, destination: &str) -> Result<Option<Weight>, GraphError> {
        let destination = self.network.location_id(destination)?;
        Ok(self.tree.distance(destination))
    }

    /// Gets the locations visited by the shortest path, from the source to the destination.
    /// The path to the source itself only contains the source.
    pub fn location_path(&self, destination: &str) -> Result<Vec<&'a Location>, PathError> {
        let (vertices, _) = self.unpack(destination)?;

        Ok(vertices
            .into_iter()
            .filter_map(|v| self.network.location(v))
            .collect())
    }

    /// Gets the routes taken by the shortest path, in travel order.
    /// These are the routes the engine recorded while relaxing each location.
    pub fn route_path(&self, destination: &str) -> Result<Vec<&'a Route>, PathError> {
        let (_, edges) = self.unpack(destination)?;

        Ok(edges
            .into_iter()
            .filter_map(|e| self.network.route(e))
            .collect())
    }

    /// Gets the routes taken by the shortest path by matching weights: between two consecutive
    /// locations the route taken is the first one whose weight, added to the distance of its
    /// origin, equals the distance of its destination (within the configured epsilon).
    ///
    /// When parallel routes have the same weight the first loaded one is returned, which is
    /// also the route the engine keeps.
    pub fn derive_route_path(
        &self,
        config: &RoutingConfig,
        destination: &str,
    ) -> Result<Vec<&'a Route>, PathError> {
        let locations = self.location_path(destination)?;
        let metric = self.metric();

        locations
            .windows(2)
            .map(|pair| {
                let [from, to] = [pair[0], pair[1]];
                let from_distance = self.tree.distance(from.id).unwrap_or(Weight::INFINITY);
                let to_distance = self.tree.distance(to.id).unwrap_or(Weight::INFINITY);

                from.outgoing_routes()
                    .iter()
                    .filter_map(|&e| self.network.route(e))
                    .find(|route| {
                        let distance = from_distance + route.weight(metric);
                        route.destination == to.id
                            && abs_diff_eq!(
                                distance.value(),
                                to_distance.value(),
                                epsilon = config.epsilon
                            )
                    })
                    .ok_or_else(|| PathError::RouteNotDerived {
                        from: from.key.clone(),
                        to: to.key.clone(),
                    })
            })
            .collect()
    }

    fn unpack(&self, destination: &str) -> Result<(Vec<LocationId>, Vec<RouteId>), PathError> {
        let vertex = self.network.location_id(destination)?;

        self.tree
            .path_to(vertex)
            .ok_or_else(|| PathError::Unreachable(destination.into()))
    }
}
