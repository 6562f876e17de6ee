use std::sync::LazyLock;

use itinerary::{Coordinate, LocationRecord, Network, NetworkConfig, RouteRecord};
use serde::Deserialize;

/// Capitals between Rome and Astana, Ulaanbaatar has no incoming route.
pub static NETWORK: LazyLock<Network> = LazyLock::new(|| {
    Network::build(
        &NetworkConfig::default(),
        location_records(),
        route_records(),
    )
    .unwrap()
});

#[derive(Debug, Deserialize)]
struct LocationRow {
    key: String,
    name: String,
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct RouteRow {
    origin: String,
    destination: String,
    mode: String,
    time: f64,
    cost: f64,
    note: String,
}

pub fn location_records() -> Vec<LocationRecord> {
    let data = include_str!("../data/locations.csv");

    csv::Reader::from_reader(data.as_bytes())
        .deserialize::<LocationRow>()
        .map(|row| {
            let LocationRow {
                key,
                name,
                lat,
                lon,
            } = row.unwrap();

            LocationRecord {
                key,
                name,
                coordinate: Coordinate { lat, lon },
            }
        })
        .collect()
}

pub fn route_records() -> Vec<RouteRecord> {
    let data = include_str!("../data/routes.csv");

    csv::Reader::from_reader(data.as_bytes())
        .deserialize::<RouteRow>()
        .map(|row| {
            let RouteRow {
                origin,
                destination,
                mode,
                time,
                cost,
                note,
            } = row.unwrap();

            RouteRecord {
                origin,
                destination,
                mode: mode.parse().unwrap(),
                time,
                cost,
                note,
            }
        })
        .collect()
}
