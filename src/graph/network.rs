use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::{
    DirectedGraph, GraphError, Location, LocationId, LocationRecord, Metric, Route, RouteId,
    RouteRecord, Weight,
};

/// What to do with a route whose origin or destination key matches no location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnresolvedRoutes {
    /// Abort the network construction with [`GraphError::UnresolvedEndpoint`].
    #[default]
    Reject,
    /// Drop the route from the network and log a warning.
    Skip,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NetworkConfig {
    /// Policy applied to routes referencing unknown locations.
    pub unresolved_routes: UnresolvedRoutes,
}

/// Transport network stored as an arena of locations and routes addressed by index.
///
/// The network is immutable once built: every shortest path run keeps its own traversal state,
/// so a single network can serve any number of queries (also from different threads).
#[derive(Debug, Clone, Default)]
pub struct Network {
    locations: Vec<Location>,
    routes: Vec<Route>,
    index: FxHashMap<String, LocationId>,
}

impl Network {
    /// Builds the network adjacency by resolving the endpoint keys of every route.
    ///
    /// Each resolved route is attached to the outgoing list of its origin, keeping the input
    /// order. Fails if two locations share the same key, or if a route references an unknown
    /// location and the config asks to reject those.
    pub fn build(
        config: &NetworkConfig,
        locations: impl IntoIterator<Item = LocationRecord>,
        routes: impl IntoIterator<Item = RouteRecord>,
    ) -> Result<Self, GraphError> {
        let mut network = Self::default();

        for LocationRecord {
            key,
            name,
            coordinate,
        } in locations
        {
            let id = LocationId(network.locations.len() as u32);
            if network.index.insert(key.clone(), id).is_some() {
                return Err(GraphError::DuplicateLocation(key));
            }

            network.locations.push(Location {
                id,
                key,
                name,
                coordinate,
                outgoing: vec![],
            });
        }

        let mut skipped = 0;

        for record in routes {
            let origin = network.index.get(&record.origin).copied();
            let destination = network.index.get(&record.destination).copied();

            let (origin, destination) = match origin.zip(destination) {
                Some(endpoints) => endpoints,
                None => {
                    let key = match origin {
                        None => record.origin.clone(),
                        Some(_) => record.destination.clone(),
                    };

                    match config.unresolved_routes {
                        UnresolvedRoutes::Reject => {
                            return Err(GraphError::UnresolvedEndpoint {
                                origin: record.origin,
                                destination: record.destination,
                                key,
                            });
                        }
                        UnresolvedRoutes::Skip => {
                            warn!(
                                "Skipping route {} -> {}: unknown location {key}",
                                record.origin, record.destination
                            );
                            skipped += 1;
                            continue;
                        }
                    }
                }
            };

            let id = RouteId(network.routes.len() as u32);
            network.locations[origin.index()].outgoing.push(id);
            network.routes.push(Route {
                id,
                origin,
                destination,
                mode: record.mode,
                time: record.time,
                cost: record.cost,
                note: record.note,
            });
        }

        debug!(
            "Built network with {} locations and {} routes ({skipped} skipped)",
            network.locations.len(),
            network.routes.len()
        );

        Ok(network)
    }

    /// Gets the location identified by the given key.
    pub fn lookup(&self, key: &str) -> Result<&Location, GraphError> {
        let id = self.location_id(key)?;
        self.location(id)
            .ok_or_else(|| GraphError::LocationNotFound(key.into()))
    }

    pub fn location_id(&self, key: &str) -> Result<LocationId, GraphError> {
        self.index
            .get(key)
            .copied()
            .ok_or_else(|| GraphError::LocationNotFound(key.into()))
    }

    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(id.index())
    }

    pub fn route(&self, id: RouteId) -> Option<&Route> {
        self.routes.get(id.index())
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Gets the route that goes from origin to destination.
    /// If several routes connect the same pair the first one loaded is returned.
    pub fn edge_between(&self, origin: LocationId, destination: LocationId) -> Option<RouteId> {
        self.location(origin)?
            .outgoing
            .iter()
            .copied()
            .find(|&e| self.route(e).is_some_and(|r| r.connects(origin, destination)))
    }

    /// Gets the weight of the route that goes from origin to destination.
    ///
    /// Returns `Ok(None)` if the two locations exist but no route connects them. Parallel routes
    /// are resolved as in [`Network::edge_between`].
    pub fn weight(
        &self,
        origin: &str,
        destination: &str,
        metric: Metric,
    ) -> Result<Option<Weight>, GraphError> {
        let origin = self.location_id(origin)?;
        let destination = self.location_id(destination)?;

        Ok(self
            .edge_between(origin, destination)
            .and_then(|e| self.get_edge_weight(e, metric)))
    }
}

impl DirectedGraph for Network {
    type VertexId = LocationId;
    type EdgeId = RouteId;

    fn vertices(&self) -> impl Iterator<Item = Self::VertexId> {
        self.locations.iter().map(|l| l.id)
    }

    fn get_edge_start_vertex(&self, edge: Self::EdgeId) -> Option<Self::VertexId> {
        self.route(edge).map(|r| r.origin)
    }

    fn get_edge_end_vertex(&self, edge: Self::EdgeId) -> Option<Self::VertexId> {
        self.route(edge).map(|r| r.destination)
    }

    fn get_edge_weight(&self, edge: Self::EdgeId, metric: Metric) -> Option<Weight> {
        self.route(edge).map(|r| r.weight(metric))
    }

    fn vertex_exiting_edges(
        &self,
        vertex: Self::VertexId,
    ) -> impl Iterator<Item = (Self::EdgeId, Self::VertexId)> {
        self.location(vertex)
            .into_iter()
            .flat_map(|l| l.outgoing.iter())
            .filter_map(|&e| self.route(e).map(|r| (e, r.destination)))
    }

    fn vertex_count(&self) -> usize {
        self.locations.len()
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::TransportMode;
    use crate::graph::tests::{abc_network, location, route};

    #[test]
    fn network_build_001() {
        let network = abc_network();

        assert_eq!(network.vertex_count(), 3);
        assert_eq!(network.routes().len(), 3);

        let a = network.lookup("A").unwrap();
        assert_eq!(a.name, "Location A");
        assert_eq!(a.outgoing_routes(), &[RouteId(0), RouteId(2)]);

        let b = network.lookup("B").unwrap();
        assert_eq!(b.outgoing_routes(), &[RouteId(1)]);
        assert!(network.lookup("C").unwrap().outgoing_routes().is_empty());

        let exiting: Vec<_> = network.vertex_exiting_edges(a.id).collect();
        assert_eq!(
            exiting,
            vec![(RouteId(0), LocationId(1)), (RouteId(2), LocationId(2))]
        );
    }

    #[test]
    fn network_build_duplicate_location() {
        let result = Network::build(
            &NetworkConfig::default(),
            [location("A", 0.0, 0.0), location("A", 1.0, 1.0)],
            [],
        );

        assert_eq!(
            result.unwrap_err(),
            GraphError::DuplicateLocation("A".into())
        );
    }

    #[test]
    fn network_build_reject_unresolved_route() {
        let result = Network::build(
            &NetworkConfig::default(),
            [location("A", 0.0, 0.0), location("B", 0.0, 1.0)],
            [
                route("A", "B", TransportMode::Train, 1.0, 1.0),
                route("B", "X", TransportMode::Train, 1.0, 1.0),
            ],
        );

        assert_eq!(
            result.unwrap_err(),
            GraphError::UnresolvedEndpoint {
                origin: "B".into(),
                destination: "X".into(),
                key: "X".into(),
            }
        );
    }

    #[test]
    fn network_build_skip_unresolved_route() {
        let config = NetworkConfig {
            unresolved_routes: UnresolvedRoutes::Skip,
        };

        let network = Network::build(
            &config,
            [location("A", 0.0, 0.0), location("B", 0.0, 1.0)],
            [
                route("X", "A", TransportMode::Bus, 1.0, 1.0),
                route("A", "B", TransportMode::Train, 2.0, 3.0),
                route("B", "Y", TransportMode::Train, 1.0, 1.0),
            ],
        )
        .unwrap();

        assert_eq!(network.routes().len(), 1);
        let route = &network.routes()[0];
        assert_eq!(route.id, RouteId(0));
        assert!(route.connects(LocationId(0), LocationId(1)));
        assert_eq!(network.lookup("A").unwrap().outgoing_routes(), &[RouteId(0)]);
    }

    #[test]
    fn network_lookup_not_found() {
        let network = abc_network();

        assert_eq!(
            network.lookup("Z").unwrap_err(),
            GraphError::LocationNotFound("Z".into())
        );
        assert!(network.location(LocationId(3)).is_none());
        assert!(network.route(RouteId(3)).is_none());
    }

    #[test]
    fn network_weight_001() {
        let network = abc_network();

        assert_eq!(
            network.weight("A", "B", Metric::Time).unwrap(),
            Some(Weight::new(2.0))
        );
        assert_eq!(
            network.weight("A", "B", Metric::Cost).unwrap(),
            Some(Weight::new(10.0))
        );
        assert_eq!(
            network.weight("A", "C", Metric::Cost).unwrap(),
            Some(Weight::new(20.0))
        );
        assert_eq!(network.weight("C", "A", Metric::Cost).unwrap(), None);
        assert_eq!(
            network.weight("A", "Z", Metric::Cost).unwrap_err(),
            GraphError::LocationNotFound("Z".into())
        );
    }

    #[test]
    fn network_weight_parallel_routes() {
        let network = Network::build(
            &NetworkConfig::default(),
            [location("A", 0.0, 0.0), location("B", 0.0, 1.0)],
            [
                route("A", "B", TransportMode::Train, 9.0, 40.0),
                route("A", "B", TransportMode::Plane, 1.0, 90.0),
            ],
        )
        .unwrap();

        // first loaded route wins, regardless of its weight
        assert_eq!(
            network.edge_between(LocationId(0), LocationId(1)),
            Some(RouteId(0))
        );
        assert_eq!(
            network.weight("A", "B", Metric::Time).unwrap(),
            Some(Weight::new(9.0))
        );
        assert_eq!(network.edge_between(LocationId(1), LocationId(0)), None);
    }
}
