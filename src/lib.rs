#![doc = include_str!("../README.md")]

mod error;
mod graph;
mod itinerary;
mod model;
mod routing;

pub use error::{GraphError, PathError};
pub use graph::network::{Network, NetworkConfig, UnresolvedRoutes};
pub use graph::path::{is_path_connected, path_weight};
pub use graph::DirectedGraph;
pub use itinerary::{Itinerary, Leg};
pub use model::{
    Coordinate, Location, LocationId, LocationRecord, Metric, Route, RouteId, RouteRecord,
    TransportMode, Weight,
};
pub use routing::{Run, RoutingConfig, ShortestPathTree, shortest_path_tree};
