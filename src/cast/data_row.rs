use crate::units::{Celsius, Decibars, GramsPerKilogram, KgPm3, Meters, Psu};
use optional::Optioned;

/// A copy of a row of the cast data.
#[derive(Clone, Default, Copy, Debug, PartialEq)]
pub struct CastRow {
    /// Depth below the surface in meters, positive downward.
    pub depth: Optioned<Meters>,
    /// Sea pressure in dbar.
    pub pressure: Optioned<Decibars>,
    /// Practical salinity.
    pub salinity: Optioned<Psu>,
    /// Potential temperature in Celsius.
    pub potential_temperature: Optioned<Celsius>,
    /// Absolute salinity in g/kg.
    pub absolute_salinity: Optioned<GramsPerKilogram>,
    /// Conservative temperature in Celsius.
    pub conservative_temperature: Optioned<Celsius>,
    /// In-situ temperature in Celsius.
    pub insitu_temperature: Optioned<Celsius>,
    /// In-situ density in kg/m^3.
    pub density: Optioned<KgPm3>,
}
