//! Shared helpers for the integration tests.

use cast_analysis::units::{Celsius, Decibars, Meters, Psu};
use cast_analysis::{Cast, StationInfo};
use optional::{some, Noned, Optioned};

pub fn opt_profile<T, F>(values: &[f64], wrap: F) -> Vec<Optioned<T>>
where
    T: Noned + Copy,
    F: Fn(f64) -> T,
{
    values.iter().map(|&v| some(wrap(v))).collect()
}

/// The subtropical scenario column: warm at the surface, 4 degrees C at
/// 1000 dbar, uniform salinity.
pub fn scenario_cast() -> Cast {
    Cast::new()
        .with_station_info(StationInfo::new().with_lat_lon((10.0, 150.0)))
        .with_pressure_profile(opt_profile(&[0.0, 500.0, 1_000.0], Decibars))
        .with_potential_temperature_profile(opt_profile(&[20.0, 10.0, 4.0], Celsius))
        .with_salinity_profile(opt_profile(&[35.0, 35.0, 35.0], Psu))
}

/// A denser mid-latitude cast with both depth and pressure profiles.
pub fn subtropical_cast() -> Cast {
    Cast::new()
        .with_source_description("Synthetic subtropical cast.".to_owned())
        .with_station_info(
            StationInfo::new()
                .with_station(21413)
                .with_lat_lon((25.0, 155.0))
                .with_bottom_depth(Meters(5_000.0)),
        )
        .with_depth_profile(opt_profile(
            &[0.0, 50.0, 100.0, 250.0, 500.0, 1_000.0],
            Meters,
        ))
        .with_pressure_profile(opt_profile(
            &[0.0, 50.2, 100.5, 251.5, 503.8, 1_010.0],
            Decibars,
        ))
        .with_salinity_profile(opt_profile(&[34.7, 34.8, 35.0, 35.1, 35.0, 34.9], Psu))
        .with_potential_temperature_profile(opt_profile(
            &[22.0, 20.0, 16.0, 8.0, 5.0, 4.0],
            Celsius,
        ))
}

/// A cast mixed to 50 m over a sharp thermocline.
pub fn layered_cast() -> Cast {
    let temps = [20.0, 20.0, 20.0, 20.0, 20.0, 20.0, 19.0, 18.0, 16.0, 10.0];

    Cast::new()
        .with_station_info(StationInfo::new().with_lat_lon((30.0, 140.0)))
        .with_depth_profile(opt_profile(
            &[0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 55.0, 60.0, 70.0, 100.0],
            Meters,
        ))
        .with_pressure_profile(opt_profile(
            &[0.0, 10.0, 20.1, 30.1, 40.2, 50.2, 55.2, 60.3, 70.3, 100.5],
            Decibars,
        ))
        .with_salinity_profile(opt_profile(&[35.0; 10], Psu))
        .with_potential_temperature_profile(opt_profile(&temps, Celsius))
        .with_insitu_temperature_profile(opt_profile(&temps, Celsius))
}

pub fn approx_equal(tgt: f64, guess: f64, tol: f64) -> bool {
    assert!(tol > 0.0);

    (tgt - guess).abs() <= tol
}
