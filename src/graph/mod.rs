mod complete;
mod geo;

pub use complete::{CompleteGraph, Metric, Neighbor, build_complete_graph};
pub use geo::{EARTH_RADIUS_KM, euclidean, haversine_km};

#[cfg(test)]
mod tests;
