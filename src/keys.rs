//! Enums used as keys naming the variables stored in a cast.
use strum_macros::EnumIter;

/// The profile variables a cast can hold.
///
/// Diagnostic functions declare the profiles they need as a slice of these
/// keys and validate the bundle with
/// [`check_variables`](crate::Cast::check_variables) before computing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum CastVariable {
    /// Depth below the surface, positive downward (m).
    Depth,
    /// Sea pressure (dbar).
    Pressure,
    /// Practical salinity (PSS-78).
    Salinity,
    /// Potential temperature (C).
    PotentialTemperature,
    /// Absolute salinity (g/kg), usually attached after conversion.
    AbsoluteSalinity,
    /// Conservative temperature (C), usually attached after conversion.
    ConservativeTemperature,
    /// In-situ temperature (C), usually attached after conversion.
    InsituTemperature,
    /// In-situ density (kg/m^3), usually attached after conversion.
    Density,
}
