mod records;

pub use records::{NETWORK, location_records, route_records};
