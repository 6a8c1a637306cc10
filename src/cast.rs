//! Data type and methods to store an oceanographic cast.

use crate::{
    error::{AnalysisError, Result},
    keys::CastVariable,
    units::{Celsius, Decibars, GramsPerKilogram, KgPm3, Meters, Psu},
};
use chrono::NaiveDateTime;
use optional::Optioned;

pub use self::{data_row::CastRow, station_info::StationInfo};

mod data_row;
mod station_info;

/// All the variables stored in a cast.
///
/// The profile variables are stored in parallel vectors ordered from the
/// surface downward. If a cast lacks a certain variable, e.g. density, that
/// whole vector has length 0 instead of being full of missing values.
///
/// A cast is the parameter bundle every diagnostic in this crate works from:
/// the caller builds one, a diagnostic borrows it and validates the profiles
/// it needs, and derived profiles are handed back for the caller to attach
/// with the matching builder method.
#[derive(Clone, Debug, Default)]
pub struct Cast {
    // Description of the source of the cast.
    source: Option<String>,

    // Station info
    station: StationInfo,

    // Valid time of the cast
    valid_time: Option<NaiveDateTime>,
    // Difference in model initialization time and `valid_time` in hours.
    lead_time: Optioned<i32>,

    // Measured profiles
    depth: Vec<Optioned<Meters>>,
    pressure: Vec<Optioned<Decibars>>,
    salinity: Vec<Optioned<Psu>>,
    potential_temperature: Vec<Optioned<Celsius>>,

    // Derived profiles
    absolute_salinity: Vec<Optioned<GramsPerKilogram>>,
    conservative_temperature: Vec<Optioned<Celsius>>,
    insitu_temperature: Vec<Optioned<Celsius>>,
    density: Vec<Optioned<KgPm3>>,

    // Surface values
    sea_surface_temperature: Optioned<Celsius>,
    sea_surface_salinity: Optioned<Psu>,
}

macro_rules! make_profile_accessors {
    ($(#[$setter_attr:meta])* => $setter:ident, $(#[$getter_attr:meta])* => $getter:ident,
     $inner_type:tt, $p_var:ident) => {
        $(#[$setter_attr])*
        #[inline]
        pub fn $setter(self, profile: Vec<Optioned<$inner_type>>) -> Self {
            Self { $p_var: profile, ..self }
        }

        $(#[$getter_attr])*
        #[inline]
        pub fn $getter(&self) -> &[Optioned<$inner_type>] {
            &self.$p_var
        }
    };
}

impl Cast {
    /// Create a new cast with default values. This is a proxy for default with a clearer name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cast_analysis::Cast;
    ///
    /// let cast = Cast::new();
    /// println!("{:?}", cast);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Cast::default()
    }

    /// Add a source description to this cast.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cast_analysis::Cast;
    ///
    /// let cast = Cast::new().with_source_description("An empty cast.".to_owned());
    /// let cast = cast.with_source_description(Some("Still empty.".to_owned()));
    /// let _cast = cast.with_source_description(None);
    /// ```
    #[inline]
    pub fn with_source_description<S>(mut self, desc: S) -> Self
    where
        Option<String>: From<S>,
    {
        self.source = Option::from(desc);
        self
    }

    /// Retrieve the source description for this cast.
    #[inline]
    pub fn source_description(&self) -> Option<&str> {
        self.source.as_ref().map(|s| s.as_ref())
    }

    /// Builder method for setting the station info.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cast_analysis::{Cast, StationInfo};
    ///
    /// let stn = StationInfo::new().with_lat_lon((10.0, 150.0));
    /// let _cast = Cast::new().with_station_info(stn);
    /// ```
    #[inline]
    pub fn with_station_info(mut self, new_value: StationInfo) -> Self {
        self.station = new_value;
        self
    }

    /// Get the station info.
    #[inline]
    pub fn station_info(&self) -> &StationInfo {
        &self.station
    }

    /// Builder method for the valid time.
    #[inline]
    pub fn with_valid_time<T>(mut self, valid_time: T) -> Self
    where
        Option<NaiveDateTime>: From<T>,
    {
        self.valid_time = Option::from(valid_time);
        self
    }

    /// Get the valid time.
    #[inline]
    pub fn valid_time(&self) -> Option<NaiveDateTime> {
        self.valid_time
    }

    /// Builder method for the forecast lead time in hours.
    #[inline]
    pub fn with_lead_time<T>(mut self, lead_time: T) -> Self
    where
        Optioned<i32>: From<T>,
    {
        self.lead_time = Optioned::from(lead_time);
        self
    }

    /// Get the forecast lead time in hours.
    #[inline]
    pub fn lead_time(&self) -> Optioned<i32> {
        self.lead_time
    }

    make_profile_accessors!(
        /// Builder method for the depth profile, positive downward.
        ///
        /// # Examples
        /// ```rust
        /// use cast_analysis::Cast;
        /// use cast_analysis::units::Meters;
        /// use optional::{some, Optioned};
        ///
        /// let data = vec![0.0, 10.0, 20.0, 50.0, 100.0, 250.0, 500.0, 1000.0];
        /// let depth_data: Vec<Optioned<Meters>> = data.into_iter()
        ///     .map(Meters)
        ///     .map(some)
        ///     .collect();
        ///
        /// let _cast = Cast::new().with_depth_profile(depth_data);
        /// ```
        => with_depth_profile,
        /// Get the depth profile.
        ///
        /// An uninitialized profile is just an empty slice.
        => depth_profile, Meters, depth
    );

    make_profile_accessors!(
        /// Builder method for the sea pressure profile.
        => with_pressure_profile,
        /// Get the sea pressure profile.
        => pressure_profile, Decibars, pressure
    );

    make_profile_accessors!(
        /// Builder method for the practical salinity profile.
        ///
        /// # Examples
        /// ```rust
        /// use cast_analysis::Cast;
        /// use cast_analysis::units::Psu;
        /// use optional::{none, some, Optioned};
        ///
        /// // A level with a failed conductivity reading stays in the profile
        /// // as a missing value.
        /// let salinity_data: Vec<Optioned<Psu>> =
        ///     vec![some(Psu(35.1)), none(), some(Psu(34.9))];
        ///
        /// let _cast = Cast::new().with_salinity_profile(salinity_data);
        /// ```
        => with_salinity_profile,
        /// Get the practical salinity profile.
        => salinity_profile, Psu, salinity
    );

    make_profile_accessors!(
        /// Builder method for the potential temperature profile.
        => with_potential_temperature_profile,
        /// Get the potential temperature profile.
        => potential_temperature_profile, Celsius, potential_temperature
    );

    make_profile_accessors!(
        /// Builder method for the absolute salinity profile, usually derived
        /// with [`profile::absolute_salinity`](crate::profile::absolute_salinity).
        => with_absolute_salinity_profile,
        /// Get the absolute salinity profile.
        => absolute_salinity_profile, GramsPerKilogram, absolute_salinity
    );

    make_profile_accessors!(
        /// Builder method for the conservative temperature profile, usually
        /// derived with
        /// [`profile::conservative_temperature`](crate::profile::conservative_temperature).
        => with_conservative_temperature_profile,
        /// Get the conservative temperature profile.
        => conservative_temperature_profile, Celsius, conservative_temperature
    );

    make_profile_accessors!(
        /// Builder method for the in-situ temperature profile, usually derived
        /// with [`profile::insitu_temperature`](crate::profile::insitu_temperature).
        => with_insitu_temperature_profile,
        /// Get the in-situ temperature profile.
        => insitu_temperature_profile, Celsius, insitu_temperature
    );

    make_profile_accessors!(
        /// Builder method for the in-situ density profile, usually derived
        /// with [`profile::density`](crate::profile::density).
        => with_density_profile,
        /// Get the in-situ density profile.
        => density_profile, KgPm3, density
    );

    /// Builder method for the sea-surface temperature.
    #[inline]
    pub fn with_sea_surface_temperature<T>(mut self, sst: T) -> Self
    where
        Optioned<Celsius>: From<T>,
    {
        self.sea_surface_temperature = Optioned::from(sst);
        self
    }

    /// Get the sea-surface temperature.
    #[inline]
    pub fn sea_surface_temperature(&self) -> Optioned<Celsius> {
        self.sea_surface_temperature
    }

    /// Builder method for the sea-surface salinity.
    #[inline]
    pub fn with_sea_surface_salinity<T>(mut self, sss: T) -> Self
    where
        Optioned<Psu>: From<T>,
    {
        self.sea_surface_salinity = Optioned::from(sss);
        self
    }

    /// Get the sea-surface salinity.
    #[inline]
    pub fn sea_surface_salinity(&self) -> Optioned<Psu> {
        self.sea_surface_salinity
    }

    /// Get a row of data values from this cast.
    #[inline]
    pub fn data_row(&self, idx: usize) -> Option<CastRow> {
        let len = self
            .depth
            .len()
            .max(self.pressure.len())
            .max(self.salinity.len())
            .max(self.potential_temperature.len())
            .max(self.absolute_salinity.len())
            .max(self.conservative_temperature.len())
            .max(self.insitu_temperature.len())
            .max(self.density.len());

        if idx >= len {
            return None;
        }

        Some(CastRow {
            depth: self.depth.get(idx).copied().unwrap_or_default(),
            pressure: self.pressure.get(idx).copied().unwrap_or_default(),
            salinity: self.salinity.get(idx).copied().unwrap_or_default(),
            potential_temperature: self
                .potential_temperature
                .get(idx)
                .copied()
                .unwrap_or_default(),
            absolute_salinity: self.absolute_salinity.get(idx).copied().unwrap_or_default(),
            conservative_temperature: self
                .conservative_temperature
                .get(idx)
                .copied()
                .unwrap_or_default(),
            insitu_temperature: self.insitu_temperature.get(idx).copied().unwrap_or_default(),
            density: self.density.get(idx).copied().unwrap_or_default(),
        })
    }

    /// Check the bundle contract for an analysis.
    ///
    /// Every required profile must be present (non-empty) and all required
    /// profiles must have the same length. Returns that common length.
    ///
    /// # Errors
    /// [`AnalysisError::MissingProfile`] if a required profile is absent and
    /// [`AnalysisError::MismatchedProfiles`] if the required profiles have
    /// different lengths.
    pub fn check_variables(&self, required: &[CastVariable]) -> Result<usize> {
        let mut common_len: Option<usize> = None;

        for &var in required {
            let len = self.profile_len(var);
            if len == 0 {
                return Err(AnalysisError::MissingProfile);
            }

            match common_len {
                Some(l) if l != len => return Err(AnalysisError::MismatchedProfiles),
                Some(_) => {}
                None => common_len = Some(len),
            }
        }

        Ok(common_len.unwrap_or(0))
    }

    /// The station latitude, required by the diagnostics that integrate the
    /// hydrostatic balance.
    pub(crate) fn latitude(&self) -> Result<f64> {
        self.station
            .location()
            .map(|(lat, _)| lat)
            .ok_or(AnalysisError::MissingValue)
    }

    fn profile_len(&self, var: CastVariable) -> usize {
        use CastVariable::*;

        match var {
            Depth => self.depth.len(),
            Pressure => self.pressure.len(),
            Salinity => self.salinity.len(),
            PotentialTemperature => self.potential_temperature.len(),
            AbsoluteSalinity => self.absolute_salinity.len(),
            ConservativeTemperature => self.conservative_temperature.len(),
            InsituTemperature => self.insitu_temperature.len(),
            Density => self.density.len(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use optional::some;
    use strum::IntoEnumIterator;

    #[test]
    fn empty_profiles_fail_the_variable_check() {
        let cast = Cast::new().with_salinity_profile(vec![some(Psu(35.0))]);

        assert_eq!(
            cast.check_variables(&[CastVariable::Salinity, CastVariable::Pressure]),
            Err(AnalysisError::MissingProfile)
        );
        assert_eq!(cast.check_variables(&[CastVariable::Salinity]), Ok(1));
    }

    #[test]
    fn mismatched_profiles_fail_the_variable_check() {
        let cast = Cast::new()
            .with_salinity_profile(vec![some(Psu(35.0)), some(Psu(35.0))])
            .with_pressure_profile(vec![some(Decibars(0.0))]);

        assert_eq!(
            cast.check_variables(&[CastVariable::Salinity, CastVariable::Pressure]),
            Err(AnalysisError::MismatchedProfiles)
        );
    }

    #[test]
    fn every_variable_is_reachable_through_the_check() {
        let cast = Cast::new();

        // All profiles of an empty cast are missing.
        for var in CastVariable::iter() {
            assert_eq!(
                cast.check_variables(&[var]),
                Err(AnalysisError::MissingProfile)
            );
        }
    }

    #[test]
    fn data_row_gathers_all_profiles() {
        let cast = Cast::new()
            .with_depth_profile(vec![some(Meters(0.0)), some(Meters(10.0))])
            .with_salinity_profile(vec![some(Psu(35.0)), some(Psu(35.1))]);

        let row = cast.data_row(1).unwrap();
        assert_eq!(row.depth.unpack(), Meters(10.0));
        assert_eq!(row.salinity.unpack(), Psu(35.1));
        assert!(row.pressure.is_none());

        assert!(cast.data_row(2).is_none());
    }

    #[test]
    fn builder_round_trips_metadata() {
        let vt = chrono::NaiveDate::from_ymd_opt(2023, 12, 2)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();

        let cast = Cast::new()
            .with_valid_time(vt)
            .with_lead_time(6)
            .with_source_description("archive".to_owned())
            .with_sea_surface_temperature(Celsius(28.4))
            .with_sea_surface_salinity(Psu(34.2));

        assert_eq!(cast.valid_time().unwrap(), vt);
        assert_eq!(cast.lead_time().unwrap(), 6);
        assert_eq!(cast.source_description().unwrap(), "archive");
        assert_eq!(cast.sea_surface_temperature().unwrap(), Celsius(28.4));
        assert_eq!(cast.sea_surface_salinity().unwrap(), Psu(34.2));
    }

    #[test]
    fn missing_location_is_an_error() {
        let cast = Cast::new();
        assert_eq!(cast.latitude(), Err(AnalysisError::MissingValue));

        let cast = cast.with_station_info(StationInfo::new().with_lat_lon((10.0, 150.0)));
        assert_eq!(cast.latitude(), Ok(10.0));
    }
}
