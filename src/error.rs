use thiserror::Error;

#[derive(Error, Debug, PartialEq, Clone)]
pub enum GraphError {
    #[error("Location {0} not found")]
    LocationNotFound(String),
    #[error("Route {origin} -> {destination} references unknown location {key}")]
    UnresolvedEndpoint {
        origin: String,
        destination: String,
        key: String,
    },
    #[error("Location {0} is defined more than once")]
    DuplicateLocation(String),
}

#[derive(Error, Debug, PartialEq, Clone)]
pub enum PathError {
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error("Location {0} is not reachable from the source")]
    Unreachable(String),
    #[error("Cannot find the route used between {from} and {to}")]
    RouteNotDerived { from: String, to: String },
}
