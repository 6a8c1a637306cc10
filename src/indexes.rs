//! Indexes computed from a whole cast, reducing the water column to a single
//! number.

use crate::{
    cast::Cast,
    error::{AnalysisError, Result},
    interpolation::linear_interpolate,
    keys::CastVariable::{ConservativeTemperature, Depth, PotentialTemperature, Pressure, Salinity},
    seawater::{self, CP0},
    units::{Celsius, JpM2, Meters, Quantity},
};
use itertools::{izip, Itertools};

/// Column-integrated ocean heat content (J/m^2).
///
/// The trapezoidal integral over depth of rho * cp0 * conservative
/// temperature. Depths come from the pressure profile and the station
/// latitude, density from the equation of state at each level.
#[inline]
pub fn total_heat_content(cast: &Cast) -> Result<JpM2> {
    let levels = column_levels(cast)?;

    let integrated = levels
        .iter()
        .map(|&(z, rho, ct)| (z, rho * CP0.unpack() * ct))
        .tuple_windows::<(_, _)>()
        // Do the sum for integrating
        .fold(0.0, |mut acc, ((z0, h0), (z1, h1))| {
            acc += (h0 + h1) * (z1 - z0) / 2.0;

            acc
        });

    Ok(JpM2(integrated))
}

/// Heat available to a tropical cyclone (J/m^2): the heat the column holds
/// in excess of 26 degrees C conservative temperature, integrated from the
/// surface down to the 26 degree isotherm. Zero for a column everywhere
/// cooler than that.
pub fn tropical_cyclone_heat_potential(cast: &Cast) -> Result<JpM2> {
    const TCHP_REFERENCE: Celsius = Celsius(26.0);

    let levels = column_levels(cast)?;

    let mut integrated = 0.0;
    let excess = levels
        .iter()
        .map(|&(z, rho, ct)| (z, rho * CP0.unpack() * (ct - TCHP_REFERENCE.unpack())));

    for ((z0, x0), (z1, x1)) in excess.tuple_windows::<(_, _)>() {
        if x0 <= 0.0 {
            break;
        }

        if x1 <= 0.0 {
            // The isotherm sits between these levels, close out the last
            // wedge at the interpolated crossing depth.
            let z_cross = z0 + (z1 - z0) * x0 / (x0 - x1);
            integrated += x0 * (z_cross - z0) / 2.0;
            break;
        }

        integrated += (x0 + x1) * (z1 - z0) / 2.0;
    }

    Ok(JpM2(integrated))
}

/// Mean conservative temperature of the upper column, surface to `to_depth`,
/// e.g. T100.
///
/// The cast needs depth and conservative temperature profiles; attach the
/// latter with
/// [`profile::conservative_temperature`](crate::profile::conservative_temperature)
/// when starting from potential temperature.
pub fn depth_averaged_temperature(cast: &Cast, to_depth: Meters) -> Result<Celsius> {
    if to_depth.unpack() <= 0.0 || !to_depth.unpack().is_finite() {
        return Err(AnalysisError::InvalidInput);
    }
    cast.check_variables(&[Depth, ConservativeTemperature])?;

    let depths = cast.depth_profile();
    let temps = cast.conservative_temperature_profile();

    // The column must reach the averaging depth.
    let t_bottom = linear_interpolate(depths, temps, to_depth)
        .into_option()
        .ok_or(AnalysisError::NotEnoughData)?;

    let mut levels: Vec<(f64, f64)> = izip!(depths, temps)
        // Remove levels with missing data and unpack the `Optioned` type
        .filter(|(d, t)| d.is_some() && t.is_some())
        .map(|(d, t)| (d.unpack().unpack(), t.unpack().unpack()))
        .filter(|&(d, _)| d < to_depth.unpack())
        .collect();
    levels.push((to_depth.unpack(), t_bottom.unpack()));

    let (z_top, _) = levels[0];
    let span = to_depth.unpack() - z_top;
    if span <= 0.0 {
        return Err(AnalysisError::NotEnoughData);
    }

    let integrated = levels
        .iter()
        .tuple_windows::<(_, _)>()
        .fold(0.0, |mut acc, (&(z0, t0), &(z1, t1))| {
            acc += (t0 + t1) * (z1 - z0) / 2.0;

            acc
        });

    Ok(Celsius(integrated / span))
}

// Reduce a cast to (depth, density, conservative temperature) triples, one
// per level with complete valid data, ordered from the surface downward.
fn column_levels(cast: &Cast) -> Result<Vec<(f64, f64, f64)>> {
    cast.check_variables(&[Salinity, PotentialTemperature, Pressure])?;
    let latitude = cast.latitude()?;

    let levels: Vec<(f64, f64, f64)> = izip!(
        cast.pressure_profile(),
        cast.salinity_profile(),
        cast.potential_temperature_profile()
    )
    // Remove levels with missing data and unpack the `Optioned` type
    .filter(|(p, s, pt)| p.is_some() && s.is_some() && pt.is_some())
    .map(|(p, s, pt)| (p.unpack(), s.unpack(), pt.unpack()))
    // Convert each level, dropping any that fail in the formula layer
    .filter_map(|(p, s, pt)| {
        let z = seawater::depth_from_pressure(p, latitude)?;
        let sa = seawater::sa_from_sp(s)?;
        let ct = seawater::ct_from_pt(sa, pt)?;
        let t = seawater::insitu_from_potential(s, pt, p)?;
        let rho = seawater::density(s, t, p)?;

        Some((z.unpack(), rho.unpack(), ct.unpack()))
    })
    .collect();

    if levels.len() < 2 {
        return Err(AnalysisError::NotEnoughData);
    }

    Ok(levels)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        cast::StationInfo,
        test_data::{make_test_cast, make_warm_cast},
        units::{Decibars, Psu},
    };
    use optional::some;

    fn scenario_cast() -> Cast {
        let pressures = [0.0, 500.0, 1_000.0];
        let temps = [20.0, 10.0, 4.0];

        Cast::new()
            .with_station_info(StationInfo::new().with_lat_lon((10.0, 150.0)))
            .with_pressure_profile(pressures.iter().map(|&p| some(Decibars(p))).collect())
            .with_potential_temperature_profile(temps.iter().map(|&t| some(Celsius(t))).collect())
            .with_salinity_profile(vec![some(Psu(35.0)); 3])
    }

    #[test]
    fn heat_content_of_a_subtropical_column() {
        let ohc = total_heat_content(&scenario_cast()).unwrap();

        assert!(ohc.unpack().is_finite());
        assert!(ohc.unpack() > 0.0);
        // A 1000 dbar column in the subtropics holds a few times 1e10 J/m^2.
        assert!(ohc.unpack() > 1.0e10 && ohc.unpack() < 1.0e11, "ohc = {}", ohc);
    }

    #[test]
    fn heat_content_is_idempotent() {
        let cast = scenario_cast();
        let first = total_heat_content(&cast).unwrap();
        let second = total_heat_content(&cast).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn zero_filled_profiles_are_degenerate_but_valid() {
        let cast = Cast::new()
            .with_station_info(StationInfo::new().with_lat_lon((10.0, 150.0)))
            .with_pressure_profile(vec![some(Decibars(0.0)); 3])
            .with_potential_temperature_profile(vec![some(Celsius(0.0)); 3])
            .with_salinity_profile(vec![some(Psu(0.0)); 3]);

        // All the levels collapse to the surface, so the column holds no
        // heat, but nothing errors.
        assert_eq!(total_heat_content(&cast), Ok(JpM2(0.0)));
    }

    #[test]
    fn heat_content_without_salinity_is_a_missing_profile_error() {
        let cast = Cast::new()
            .with_station_info(StationInfo::new().with_lat_lon((10.0, 150.0)))
            .with_pressure_profile(vec![some(Decibars(0.0)), some(Decibars(500.0))])
            .with_potential_temperature_profile(vec![some(Celsius(20.0)), some(Celsius(10.0))]);

        assert_eq!(
            total_heat_content(&cast),
            Err(AnalysisError::MissingProfile)
        );
    }

    #[test]
    fn heat_content_without_a_location_is_a_missing_value_error() {
        let cast = scenario_cast().with_station_info(StationInfo::new());

        assert_eq!(total_heat_content(&cast), Err(AnalysisError::MissingValue));
    }

    #[test]
    fn cold_columns_hold_no_cyclone_heat() {
        let cast = make_test_cast();
        assert_eq!(tropical_cyclone_heat_potential(&cast), Ok(JpM2(0.0)));
    }

    #[test]
    fn warm_columns_hold_cyclone_heat() {
        let cast = make_warm_cast();
        let tchp = tropical_cyclone_heat_potential(&cast).unwrap();

        assert!(
            tchp.unpack() > 1.0e8 && tchp.unpack() < 1.0e10,
            "tchp = {}",
            tchp
        );
    }

    #[test]
    fn depth_averaged_temperature_of_a_linear_profile() {
        let cast = Cast::new()
            .with_depth_profile(vec![
                some(Meters(0.0)),
                some(Meters(100.0)),
                some(Meters(200.0)),
            ])
            .with_conservative_temperature_profile(vec![
                some(Celsius(20.0)),
                some(Celsius(10.0)),
                some(Celsius(4.0)),
            ]);

        let t100 = depth_averaged_temperature(&cast, Meters(100.0)).unwrap();
        assert!((t100.unpack() - 15.0).abs() < 1.0e-9, "t100 = {}", t100);

        let t150 = depth_averaged_temperature(&cast, Meters(150.0)).unwrap();
        assert!((t150.unpack() - 1_925.0 / 150.0).abs() < 1.0e-9, "t150 = {}", t150);

        assert_eq!(
            depth_averaged_temperature(&cast, Meters(500.0)),
            Err(AnalysisError::NotEnoughData)
        );
        assert_eq!(
            depth_averaged_temperature(&cast, Meters(-5.0)),
            Err(AnalysisError::InvalidInput)
        );
    }
}
