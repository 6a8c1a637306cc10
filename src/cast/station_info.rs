use crate::units::Meters;
use optional::Optioned;

/// Station information including location data and identification number.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StationInfo {
    /// Station or platform identification number, e.g. a WMO number.
    num: Optioned<i32>,
    /// Latitude and longitude in degrees.
    location: Option<(f64, f64)>,
    /// Bottom depth at the station, positive downward.
    bottom_depth: Optioned<Meters>,
}

impl StationInfo {
    /// Create a new `StationInfo` object.
    ///
    /// # Arguments
    /// station_num: The station identifier, or None.
    ///
    /// location: The latitude and longitude as a tuple in degrees, or None.
    ///
    /// bottom_depth: The bottom depth at the station **in meters**.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cast_analysis::StationInfo;
    /// use cast_analysis::units::Meters;
    /// use optional::{some, none};
    ///
    /// let _stn = StationInfo::new_with_values(21413, (10.0, 150.0), Meters(5_000.0));
    /// let _stn = StationInfo::new_with_values(21413, Some((10.0, 150.0)), some(Meters(5_000.0)));
    ///
    /// // Note that lat-lon is an `Option` and not an `Optioned`
    /// let _stn = StationInfo::new_with_values(some(21413), None, none::<Meters>());
    /// ```
    #[inline]
    pub fn new_with_values<T, U, V>(station_num: T, location: U, bottom_depth: V) -> Self
    where
        Optioned<i32>: From<T>,
        Option<(f64, f64)>: From<U>,
        Optioned<Meters>: From<V>,
    {
        StationInfo {
            num: Optioned::from(station_num),
            location: Option::from(location),
            bottom_depth: Optioned::from(bottom_depth),
        }
    }

    /// Create a new object with default values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cast_analysis::StationInfo;
    ///
    /// assert!(StationInfo::new().station_num().is_none());
    /// assert!(StationInfo::new().location().is_none());
    /// assert!(StationInfo::new().bottom_depth().is_none());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to add a station number.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cast_analysis::StationInfo;
    ///
    /// assert_eq!(StationInfo::new().with_station(21413).station_num().unwrap(), 21413);
    /// assert_eq!(StationInfo::new().with_station(Some(21413)).station_num().unwrap(), 21413);
    /// ```
    #[inline]
    pub fn with_station<T>(mut self, number: T) -> Self
    where
        Optioned<i32>: From<T>,
    {
        self.num = Optioned::from(number);

        self
    }

    /// Builder method to add a location.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cast_analysis::StationInfo;
    ///
    /// assert_eq!(
    ///     StationInfo::new().with_lat_lon((10.0, 150.0)).location().unwrap(), (10.0, 150.0));
    /// ```
    #[inline]
    pub fn with_lat_lon<T>(mut self, location: T) -> Self
    where
        Option<(f64, f64)>: From<T>,
    {
        self.location = Option::from(location);

        self
    }

    /// Builder method to add a bottom depth.
    #[inline]
    pub fn with_bottom_depth<T>(mut self, depth: T) -> Self
    where
        Optioned<Meters>: From<T>,
    {
        self.bottom_depth = Optioned::from(depth);

        self
    }

    /// Get the station number.
    #[inline]
    pub fn station_num(&self) -> Optioned<i32> {
        self.num
    }

    /// Get the location as a (latitude, longitude) tuple in degrees.
    #[inline]
    pub fn location(&self) -> Option<(f64, f64)> {
        self.location
    }

    /// Get the bottom depth at the station.
    #[inline]
    pub fn bottom_depth(&self) -> Optioned<Meters> {
        self.bottom_depth
    }
}
