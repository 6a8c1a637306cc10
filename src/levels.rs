//! This module finds significant depths in a cast, such as the depth of an
//! isotherm or the mixed-layer depth.

use crate::{
    cast::Cast,
    error::{AnalysisError, Result},
    interpolation::{linear_interp, linear_interpolate},
    keys::CastVariable::{Depth, InsituTemperature, PotentialTemperature, Salinity},
    seawater,
    units::{Celsius, CelsiusDiff, KgPm3, Meters, Quantity},
};
use itertools::izip;
use optional::{none, Noned, Optioned};
use std::ops::Sub;

// Reference depth for the mixed-layer criteria, below the diurnal surface
// layer (de Boyer Montegut et al. 2004).
const MIXED_LAYER_REFERENCE: Meters = Meters(10.0);

/// Find the depth where a quantity first crosses the target value, scanning
/// from the surface downward.
///
/// Returns a missing value when the column never crosses the target.
///
/// # Errors
/// [`AnalysisError::MismatchedProfiles`] for slices of unequal length,
/// [`AnalysisError::MissingProfile`] for empty slices, and
/// [`AnalysisError::NoDataProfile`] when no pair of adjacent valid levels
/// exists.
pub fn iso_surface_depth<Y>(
    depths: &[Optioned<Meters>],
    values: &[Optioned<Y>],
    target: Y,
) -> Result<Optioned<Meters>>
where
    Y: Quantity + Noned + PartialOrd + Sub<Y>,
    <Y as Sub<Y>>::Output: Quantity,
{
    first_crossing_below(depths, values, Meters(0.0), target)
}

/// Find the depth of a target in-situ temperature.
///
/// The cast needs depth and in-situ temperature profiles; attach the latter
/// with [`profile::insitu_temperature`](crate::profile::insitu_temperature)
/// when it was not measured directly.
pub fn isotherm_depth(cast: &Cast, target: Celsius) -> Result<Optioned<Meters>> {
    cast.check_variables(&[Depth, InsituTemperature])?;

    iso_surface_depth(cast.depth_profile(), cast.insitu_temperature_profile(), target)
}

/// Mixed-layer depth by the temperature criterion: the depth where the
/// in-situ temperature first drops `dt` below its value at the 10 m
/// reference level.
pub fn temperature_mixed_layer_depth(cast: &Cast, dt: CelsiusDiff) -> Result<Optioned<Meters>> {
    if dt.0 <= 0.0 {
        return Err(AnalysisError::InvalidInput);
    }
    cast.check_variables(&[Depth, InsituTemperature])?;

    let depths = cast.depth_profile();
    let temps = cast.insitu_temperature_profile();

    let t_ref = linear_interpolate(depths, temps, MIXED_LAYER_REFERENCE)
        .into_option()
        .ok_or(AnalysisError::NotEnoughData)?;

    first_crossing_below(depths, temps, MIXED_LAYER_REFERENCE, t_ref - dt)
}

/// Mixed-layer depth by the density criterion: the depth where the potential
/// density first exceeds its value at the 10 m reference level by `drho`.
///
/// Potential rather than in-situ density, so the compressibility of seawater
/// cannot masquerade as stratification.
pub fn density_mixed_layer_depth(cast: &Cast, drho: KgPm3) -> Result<Optioned<Meters>> {
    if drho.0 <= 0.0 {
        return Err(AnalysisError::InvalidInput);
    }
    cast.check_variables(&[Depth, Salinity, PotentialTemperature])?;

    let depths = cast.depth_profile();
    let sigma: Vec<Optioned<KgPm3>> =
        izip!(cast.salinity_profile(), cast.potential_temperature_profile())
            .map(|(s_opt, pt_opt)| {
                s_opt
                    .into_option()
                    .and_then(|s| {
                        pt_opt
                            .into_option()
                            .and_then(|pt| seawater::potential_density(s, pt))
                    })
                    .into()
            })
            .collect();

    let rho_ref = linear_interpolate(depths, &sigma, MIXED_LAYER_REFERENCE)
        .into_option()
        .ok_or(AnalysisError::NotEnoughData)?;

    first_crossing_below(depths, &sigma, MIXED_LAYER_REFERENCE, rho_ref + drho)
}

// Scan pairs of valid levels at or below `start` for the first crossing of
// `target` and interpolate the depth of the crossing.
fn first_crossing_below<Y>(
    depths: &[Optioned<Meters>],
    values: &[Optioned<Y>],
    start: Meters,
    target: Y,
) -> Result<Optioned<Meters>>
where
    Y: Quantity + Noned + PartialOrd + Sub<Y>,
    <Y as Sub<Y>>::Output: Quantity,
{
    if depths.len() != values.len() {
        return Err(AnalysisError::MismatchedProfiles);
    }
    if depths.is_empty() || values.is_empty() {
        return Err(AnalysisError::MissingProfile);
    }

    let mut iter = izip!(depths, values)
        // Remove levels with missing data and unpack the `Optioned` type
        .filter(|(d, v)| d.is_some() && v.is_some())
        .map(|(d, v)| (d.unpack(), v.unpack()))
        // Don't look above the starting depth
        .filter(|&(d, _)| d >= start);

    let (mut last_d, mut last_v) = match iter.next() {
        Some(first) => first,
        None => return Err(AnalysisError::NoDataProfile),
    };

    if (last_v.unpack() - target.unpack()).abs() < std::f64::EPSILON {
        return Ok(Optioned::from(last_d));
    }

    for (d, v) in iter {
        let crossed =
            (last_v <= target && v >= target) || (last_v >= target && v <= target);
        if crossed {
            let tgt_depth = linear_interp(target, last_v, v, last_d, d);
            return Ok(Optioned::from(tgt_depth));
        }

        last_d = d;
        last_v = v;
    }

    Ok(none())
}
