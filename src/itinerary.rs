//! Journeys as handed over to a renderer: the visited locations, the routes between them and
//! the totals of the trip.

use crate::{Location, Metric, Network, PathError, Route, Run, TransportMode, Weight};

/// A shortest journey between two locations.
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary<'a> {
    /// Metric the journey was optimized for.
    pub metric: Metric,
    /// Visited locations, from the source to the destination.
    pub locations: Vec<&'a Location>,
    /// Routes taken, `routes[i]` goes from `locations[i]` to `locations[i + 1]`.
    pub routes: Vec<&'a Route>,
}

/// A single hop of an itinerary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leg<'a> {
    pub from: &'a Location,
    pub to: &'a Location,
    pub route: &'a Route,
}

impl Network {
    /// Computes the shortest journey from source to destination.
    pub fn plan(
        &self,
        source: &str,
        destination: &str,
        metric: Metric,
    ) -> Result<Itinerary<'_>, PathError> {
        self.run(source, metric)?.itinerary(destination)
    }
}

impl<'a> Run<'a> {
    /// Reconstructs the journey from the run source to the destination.
    pub fn itinerary(&self, destination: &str) -> Result<Itinerary<'a>, PathError> {
        Ok(Itinerary {
            metric: self.metric(),
            locations: self.location_path(destination)?,
            routes: self.route_path(destination)?,
        })
    }
}

impl<'a> Itinerary<'a> {
    pub fn origin(&self) -> Option<&'a Location> {
        self.locations.first().copied()
    }

    pub fn destination(&self) -> Option<&'a Location> {
        self.locations.last().copied()
    }

    /// Returns true if origin and destination are the same location.
    pub fn is_trivial(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn legs(&self) -> impl Iterator<Item = Leg<'a>> + '_ {
        self.locations
            .windows(2)
            .zip(&self.routes)
            .map(|(pair, &route)| Leg {
                from: pair[0],
                to: pair[1],
                route,
            })
    }

    pub fn modes(&self) -> impl Iterator<Item = &'a TransportMode> + '_ {
        self.routes.iter().map(|r| &r.mode)
    }

    pub fn total_cost(&self) -> f64 {
        self.routes.iter().map(|r| r.cost).sum()
    }

    /// Total travel time in hours.
    pub fn total_time(&self) -> f64 {
        self.routes.iter().map(|r| r.time).sum()
    }

    /// Total weight of the journey measured with the metric it was optimized for.
    pub fn total_weight(&self) -> Weight {
        self.routes.iter().map(|r| r.weight(self.metric)).sum()
    }

    /// Sum of the great circle distances of every leg, in meters.
    #[cfg(feature = "geo")]
    pub fn great_circle_length(&self) -> f64 {
        use geo::{Distance, Haversine};

        self.legs()
            .map(|leg| {
                let from = geo::Point::from(leg.from.coordinate);
                let to = geo::Point::from(leg.to.coordinate);
                Haversine.distance(from, to)
            })
            .sum()
    }
}
