#![warn(missing_docs)]
//! Functions and data types for analyzing oceanographic profile casts.
//!
//! A [`Cast`] bundles the named profiles of a single station (depth,
//! pressure, practical salinity, potential temperature, and the derived
//! quantities attached as they are computed). Diagnostic functions borrow a
//! cast, validate that the profiles they need are present and consistent,
//! convert units internally, and hand back either a scalar index or a new
//! profile to attach onto the cast.
//!
//! ```rust
//! use cast_analysis::{total_heat_content, Cast, StationInfo};
//! use cast_analysis::units::{Celsius, Decibars, Psu};
//! use optional::some;
//!
//! let cast = Cast::new()
//!     .with_station_info(StationInfo::new().with_lat_lon((10.0, 150.0)))
//!     .with_pressure_profile(
//!         vec![some(Decibars(0.0)), some(Decibars(500.0)), some(Decibars(1000.0))])
//!     .with_potential_temperature_profile(
//!         vec![some(Celsius(20.0)), some(Celsius(10.0)), some(Celsius(4.0))])
//!     .with_salinity_profile(vec![some(Psu(35.0)); 3]);
//!
//! let ohc = total_heat_content(&cast).unwrap();
//! assert!(ohc.0 > 0.0);
//! ```

//
// API
//
pub use crate::{
    cast::{Cast, CastRow, StationInfo},
    error::{AnalysisError, Result},
    indexes::{depth_averaged_temperature, total_heat_content, tropical_cyclone_heat_potential},
    interpolation::{linear_interpolate, linear_interpolate_cast},
    keys::CastVariable,
    levels::{
        density_mixed_layer_depth, iso_surface_depth, isotherm_depth,
        temperature_mixed_layer_depth,
    },
};

pub mod geo;
pub mod profile;
pub mod seawater;
pub mod units;

//
// Internal use only
//

// Modules
mod cast;
mod error;
mod indexes;
mod interpolation;
mod keys;
mod levels;
#[cfg(test)]
mod test_data;
mod utility;
