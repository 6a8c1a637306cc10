//! Great-circle geometry on the spherical Earth.
//!
//! Locations are `(latitude, longitude)` tuples in degrees, distances are
//! [`Meters`], bearings are degrees clockwise from north.

use crate::{
    error::{AnalysisError, Result},
    units::Meters,
};

/// Mean radius of the Earth.
pub const EARTH_RADIUS: Meters = Meters(6_371_000.0);

/// Great-circle (haversine) distance between two locations.
pub fn haversine_distance(loc1: (f64, f64), loc2: (f64, f64)) -> Meters {
    let (lat1, lon1) = (loc1.0.to_radians(), loc1.1.to_radians());
    let (lat2, lon2) = (loc2.0.to_radians(), loc2.1.to_radians());

    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);

    EARTH_RADIUS * 2.0 * h.sqrt().asin()
}

/// The location reached by traveling a distance from a starting location
/// along a bearing.
pub fn destination_point(loc: (f64, f64), distance: Meters, bearing: f64) -> (f64, f64) {
    let (lat1, lon1) = (loc.0.to_radians(), loc.1.to_radians());
    let bearing = bearing.to_radians();
    let delta = distance / EARTH_RADIUS;

    let lat2 = (lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * bearing.cos()).asin();
    let lon2 = lon1
        + (bearing.sin() * delta.sin() * lat1.cos())
            .atan2(delta.cos() - lat1.sin() * lat2.sin());

    (lat2.to_degrees(), lon2.to_degrees())
}

/// Distance from an origin to every point of a coordinate grid.
///
/// The latitude and longitude slices hold the flattened grid coordinates
/// point by point and must have the same length.
pub fn radial_distances(origin: (f64, f64), lats: &[f64], lons: &[f64]) -> Result<Vec<Meters>> {
    if lats.len() != lons.len() {
        return Err(AnalysisError::InvalidInput);
    }

    Ok(lats
        .iter()
        .zip(lons.iter())
        .map(|(&lat, &lon)| haversine_distance(origin, (lat, lon)))
        .collect())
}
