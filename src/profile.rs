//! Create derived profiles from a cast.
//!
//! Each function here reads the profiles it needs from a cast, converts
//! units internally, and returns a new profile at the same levels, suitable
//! to be attached back onto the cast with the matching builder method. A
//! level with missing or unphysical input becomes a missing value in the
//! output; a required profile that is absent or of mismatched length fails
//! the whole call.

use crate::{
    cast::Cast,
    error::Result,
    keys::CastVariable::{Depth, PotentialTemperature, Pressure, Salinity},
    seawater,
    units::{Celsius, Decibars, GramsPerKilogram, JpKgK, KgPm3, Meters, MetersPSec, Psu},
};
use itertools::izip;
use optional::Optioned;

/// Given a cast, calculate a profile of absolute salinity.
pub fn absolute_salinity(cast: &Cast) -> Result<Vec<Optioned<GramsPerKilogram>>> {
    cast.check_variables(&[Salinity])?;

    Ok(cast
        .salinity_profile()
        .iter()
        .map(|s_opt| {
            s_opt
                .into_option()
                .and_then(seawater::sa_from_sp)
                .into()
        })
        .collect())
}

/// Given a cast, calculate a profile of conservative temperature.
pub fn conservative_temperature(cast: &Cast) -> Result<Vec<Optioned<Celsius>>> {
    cast.check_variables(&[Salinity, PotentialTemperature])?;

    let s_profile = cast.salinity_profile();
    let pt_profile = cast.potential_temperature_profile();

    Ok(izip!(s_profile, pt_profile)
        .map(|(s_opt, pt_opt)| {
            s_opt
                .into_option()
                .and_then(|s| {
                    pt_opt.into_option().and_then(|pt| {
                        seawater::sa_from_sp(s).and_then(|sa| seawater::ct_from_pt(sa, pt))
                    })
                })
                .into()
        })
        .collect())
}

/// Given a cast, calculate a profile of in-situ temperature from the
/// potential temperature.
pub fn insitu_temperature(cast: &Cast) -> Result<Vec<Optioned<Celsius>>> {
    cast.check_variables(&[Salinity, PotentialTemperature, Pressure])?;

    Ok(each_level(cast, |s, pt, p| {
        seawater::insitu_from_potential(s, pt, p)
    }))
}

/// Given a cast, calculate a profile of in-situ density.
pub fn density(cast: &Cast) -> Result<Vec<Optioned<KgPm3>>> {
    cast.check_variables(&[Salinity, PotentialTemperature, Pressure])?;

    Ok(each_level(cast, |s, pt, p| {
        let t = seawater::insitu_from_potential(s, pt, p)?;
        seawater::density(s, t, p)
    }))
}

/// Given a cast, calculate a profile of the specific heat capacity of the
/// seawater at each level.
pub fn specific_heat(cast: &Cast) -> Result<Vec<Optioned<JpKgK>>> {
    cast.check_variables(&[Salinity, PotentialTemperature, Pressure])?;

    Ok(each_level(cast, |s, pt, p| {
        let t = seawater::insitu_from_potential(s, pt, p)?;
        seawater::specific_heat(s, t, p)
    }))
}

/// Given a cast, calculate a profile of the speed of sound.
pub fn sound_speed(cast: &Cast) -> Result<Vec<Optioned<MetersPSec>>> {
    cast.check_variables(&[Salinity, PotentialTemperature, Pressure])?;

    Ok(each_level(cast, |s, pt, p| {
        let t = seawater::insitu_from_potential(s, pt, p)?;
        seawater::sound_speed(s, t, p)
    }))
}

/// Given a cast, calculate the sea pressure profile from the depth profile
/// and the station latitude.
pub fn pressure(cast: &Cast) -> Result<Vec<Optioned<Decibars>>> {
    cast.check_variables(&[Depth])?;
    let latitude = cast.latitude()?;

    Ok(cast
        .depth_profile()
        .iter()
        .map(|d_opt| {
            d_opt
                .into_option()
                .and_then(|d| seawater::pressure_from_depth(d, latitude))
                .into()
        })
        .collect())
}

/// Given a cast, calculate the depth profile from the sea pressure profile
/// and the station latitude.
pub fn depth(cast: &Cast) -> Result<Vec<Optioned<Meters>>> {
    cast.check_variables(&[Pressure])?;
    let latitude = cast.latitude()?;

    Ok(cast
        .pressure_profile()
        .iter()
        .map(|p_opt| {
            p_opt
                .into_option()
                .and_then(|p| seawater::depth_from_pressure(p, latitude))
                .into()
        })
        .collect())
}

// Run a conversion over the (salinity, potential temperature, pressure)
// triple at every level. Assumes the profiles were already validated.
fn each_level<Y, F>(cast: &Cast, f: F) -> Vec<Optioned<Y>>
where
    Y: crate::units::Quantity + optional::Noned,
    F: Fn(Psu, Celsius, Decibars) -> Option<Y>,
{
    let s_profile = cast.salinity_profile();
    let pt_profile = cast.potential_temperature_profile();
    let p_profile = cast.pressure_profile();

    izip!(s_profile, pt_profile, p_profile)
        .map(|(s_opt, pt_opt, p_opt)| {
            s_opt
                .into_option()
                .and_then(|s| {
                    pt_opt.into_option().and_then(|pt| {
                        p_opt.into_option().and_then(|p| f(s, pt, p))
                    })
                })
                .into()
        })
        .collect()
}
