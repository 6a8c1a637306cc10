//! Data used in tests.

use crate::{
    cast::{Cast, StationInfo},
    units::{Celsius, Decibars, Meters, Psu},
};
use optional::{some, Optioned};

fn profile<T, F>(values: &[f64], wrap: F) -> Vec<Optioned<T>>
where
    T: optional::Noned + Copy,
    F: Fn(f64) -> T,
{
    values.iter().map(|&v| some(wrap(v))).collect()
}

/// A mid-latitude cast sampling the upper kilometer of a stably stratified
/// column.
pub fn make_test_cast() -> Cast {
    Cast::new()
        .with_source_description("Synthetic mid-latitude test cast.".to_owned())
        .with_station_info(
            StationInfo::new()
                .with_station(21413)
                .with_lat_lon((25.0, 155.0))
                .with_bottom_depth(Meters(5_000.0)),
        )
        .with_depth_profile(profile(&[0.0, 50.0, 100.0, 250.0, 500.0, 1_000.0], Meters))
        .with_pressure_profile(profile(
            &[0.0, 50.2, 100.5, 251.5, 503.8, 1_010.0],
            Decibars,
        ))
        .with_salinity_profile(profile(&[34.7, 34.8, 35.0, 35.1, 35.0, 34.9], Psu))
        .with_potential_temperature_profile(profile(
            &[22.0, 20.0, 16.0, 8.0, 5.0, 4.0],
            Celsius,
        ))
}

/// A cast with a well-mixed surface layer down to 50 m and a sharp
/// thermocline below it.
pub fn make_layered_cast() -> Cast {
    let temps = [20.0, 20.0, 20.0, 20.0, 20.0, 20.0, 19.0, 18.0, 16.0, 10.0];

    Cast::new()
        .with_station_info(StationInfo::new().with_lat_lon((30.0, 140.0)))
        .with_depth_profile(profile(
            &[0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 55.0, 60.0, 70.0, 100.0],
            Meters,
        ))
        .with_pressure_profile(profile(
            &[0.0, 10.0, 20.1, 30.1, 40.2, 50.2, 55.2, 60.3, 70.3, 100.5],
            Decibars,
        ))
        .with_salinity_profile(profile(&[35.0; 10], Psu))
        .with_potential_temperature_profile(profile(&temps, Celsius))
        .with_insitu_temperature_profile(profile(&temps, Celsius))
}

/// A tropical warm-pool cast with plenty of water warmer than 26 degrees C.
pub fn make_warm_cast() -> Cast {
    Cast::new()
        .with_station_info(StationInfo::new().with_lat_lon((15.0, 135.0)))
        .with_pressure_profile(profile(&[0.0, 50.0, 100.0, 150.0, 200.0], Decibars))
        .with_salinity_profile(profile(&[34.5, 34.8, 35.0, 35.2, 35.0], Psu))
        .with_potential_temperature_profile(profile(
            &[29.0, 28.5, 27.0, 24.0, 15.0],
            Celsius,
        ))
}
