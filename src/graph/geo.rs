use crate::types::{City, Km};

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two cities, in kilometres.
pub fn haversine_km(a: &City, b: &City) -> Km {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();

    let sin_d_lat = (d_lat / 2.0).sin();
    let sin_d_lng = (d_lng / 2.0).sin();
    let h = sin_d_lat * sin_d_lat + lat1.cos() * lat2.cos() * sin_d_lng * sin_d_lng;

    EARTH_RADIUS_KM * 2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Planar distance treating (lat, lng) as (y, x).
pub fn euclidean(a: &City, b: &City) -> f64 {
    (b.lat - a.lat).hypot(b.lng - a.lng)
}
