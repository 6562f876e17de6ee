use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use approx::abs_diff_eq;
use ordered_float::OrderedFloat;
use strum::{Display, EnumIter, EnumString};

/// Selects which route attribute is minimized by the shortest path search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Metric {
    /// Monetary cost of the route.
    Cost,
    /// Elapsed travel time of the route, in hours.
    Time,
}

/// The way a route is travelled.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TransportMode {
    Plane,
    Train,
    Bus,
    Car,
    Ferry,
    /// Any mode the network data uses that has no dedicated variant.
    #[strum(default)]
    Other(String),
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plane => f.write_str("plane"),
            Self::Train => f.write_str("train"),
            Self::Bus => f.write_str("bus"),
            Self::Car => f.write_str("car"),
            Self::Ferry => f.write_str("ferry"),
            Self::Other(mode) => f.write_str(mode),
        }
    }
}

/// Accumulated weight of a path under a [`Metric`].
/// Weights are never negative; [`Weight::INFINITY`] marks a location that has not been reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Weight(OrderedFloat<f64>);

impl Weight {
    pub const ZERO: Self = Self(OrderedFloat(0.0));
    pub const INFINITY: Self = Self(OrderedFloat(f64::INFINITY));

    pub const fn new(value: f64) -> Self {
        Self(OrderedFloat(value))
    }

    pub const fn value(&self) -> f64 {
        self.0.0
    }

    pub fn is_finite(&self) -> bool {
        self.value().is_finite()
    }
}

impl From<f64> for Weight {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl Add for Weight {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.value() + rhs.value())
    }
}

impl AddAssign for Weight {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Weight {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |total, weight| total + weight)
    }
}

/// WGS84 latitude and longitude, in degrees.
#[derive(Debug, Clone, Copy, Default)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        const EPSILON: f64 = 1e-5;
        abs_diff_eq!(self.lat, other.lat, epsilon = EPSILON)
            && abs_diff_eq!(self.lon, other.lon, epsilon = EPSILON)
    }
}

#[cfg(feature = "geo")]
impl From<Coordinate> for geo::Point {
    fn from(coordinate: Coordinate) -> Self {
        geo::Point::new(coordinate.lon, coordinate.lat)
    }
}

/// Index of a location inside a [`Network`](crate::Network).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocationId(pub(crate) u32);

impl LocationId {
    pub const fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Index of a route inside a [`Network`](crate::Network).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteId(pub(crate) u32);

impl RouteId {
    pub const fn index(&self) -> usize {
        self.0 as usize
    }
}

/// A location as provided by the network loader.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationRecord {
    /// Unique identity code (e.g. a country or city code).
    pub key: String,
    pub name: String,
    pub coordinate: Coordinate,
}

/// A directed route as provided by the network loader, endpoints still referenced by key.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRecord {
    pub origin: String,
    pub destination: String,
    pub mode: TransportMode,
    /// Travel time in hours.
    pub time: f64,
    /// Monetary cost.
    pub cost: f64,
    pub note: String,
}

/// A node of the network.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id: LocationId,
    pub key: String,
    pub name: String,
    pub coordinate: Coordinate,
    /// Routes leaving this location, in the order they were loaded.
    pub(crate) outgoing: Vec<RouteId>,
}

impl Location {
    pub fn outgoing_routes(&self) -> &[RouteId] {
        &self.outgoing
    }
}

/// A directed edge of the network whose endpoints have been resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub id: RouteId,
    pub origin: LocationId,
    pub destination: LocationId,
    pub mode: TransportMode,
    /// Travel time in hours.
    pub time: f64,
    /// Monetary cost.
    pub cost: f64,
    pub note: String,
}

impl Route {
    pub fn weight(&self, metric: Metric) -> Weight {
        match metric {
            Metric::Cost => Weight::new(self.cost),
            Metric::Time => Weight::new(self.time),
        }
    }

    pub fn connects(&self, origin: LocationId, destination: LocationId) -> bool {
        self.origin == origin && self.destination == destination
    }
}
