//! Dimensioned newtypes for the physical quantities handled by this crate.
//!
//! Every value that crosses a function boundary carries its unit in the type,
//! so a pressure in decibars cannot be fed where a depth in meters is
//! expected. The wrappers are thin: a single `f64`, free to copy, with
//! `optional::Noned` implemented so any quantity can be stored in an
//! [`Optioned`](optional::Optioned) inside a profile.

use optional::{Noned, OptEq};
use std::fmt;

/// A value wrapped with its unit of measure.
pub trait Quantity: Copy + fmt::Debug + Sized {
    /// Create an instance by wrapping a bare value.
    fn pack(val: f64) -> Self;

    /// Unwrap the bare value without any validity checking.
    fn unpack(self) -> f64;

    /// The name of the unit.
    fn unit_name() -> &'static str;

    /// The common abbreviation for the unit.
    fn abbreviation() -> &'static str;
}

/// Marker trait for temperature types.
pub trait Temperature: Quantity {}

/// Marker trait for pressure types.
pub trait Pressure: Quantity {}

/// Marker trait for length types.
pub trait Length: Quantity {}

/// Marker trait for salinity types.
pub trait Salinity: Quantity {}

macro_rules! make_quantity {
    ($(#[$attr:meta])* => $name:ident, $unit:expr, $abbrev:expr) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
        pub struct $name(pub f64);

        impl Quantity for $name {
            #[inline]
            fn pack(val: f64) -> Self {
                $name(val)
            }

            #[inline]
            fn unpack(self) -> f64 {
                self.0
            }

            #[inline]
            fn unit_name() -> &'static str {
                $unit
            }

            #[inline]
            fn abbreviation() -> &'static str {
                $abbrev
            }
        }

        impl Noned for $name {
            #[inline]
            fn is_none(&self) -> bool {
                Noned::is_none(&self.0)
            }

            #[inline]
            fn get_none() -> Self {
                $name(<f64 as Noned>::get_none())
            }
        }

        impl OptEq for $name {
            #[inline]
            fn opt_eq(&self, other: &Self) -> bool {
                self == other
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{} {}", self.0, $abbrev)
            }
        }

        impl ::std::ops::Mul<f64> for $name {
            type Output = $name;

            #[inline]
            fn mul(self, rhs: f64) -> $name {
                $name(self.0 * rhs)
            }
        }

        impl ::std::ops::Div<f64> for $name {
            type Output = $name;

            #[inline]
            fn div(self, rhs: f64) -> $name {
                $name(self.0 / rhs)
            }
        }

        impl ::std::ops::Div<$name> for $name {
            type Output = f64;

            #[inline]
            fn div(self, rhs: $name) -> f64 {
                self.0 / rhs.0
            }
        }

        impl ::std::ops::Neg for $name {
            type Output = $name;

            #[inline]
            fn neg(self) -> $name {
                $name(-self.0)
            }
        }
    };
}

// Same-unit addition and subtraction, for quantities where a difference is
// expressed in the unit itself.
macro_rules! impl_same_unit_ops {
    ($name:ident) => {
        impl ::std::ops::Add for $name {
            type Output = $name;

            #[inline]
            fn add(self, rhs: $name) -> $name {
                $name(self.0 + rhs.0)
            }
        }

        impl ::std::ops::Sub for $name {
            type Output = $name;

            #[inline]
            fn sub(self, rhs: $name) -> $name {
                $name(self.0 - rhs.0)
            }
        }
    };
}

// Temperature scales subtract to a difference type rather than to another
// point on the scale.
macro_rules! impl_temperature_ops {
    ($name:ident) => {
        impl ::std::ops::Sub for $name {
            type Output = CelsiusDiff;

            #[inline]
            fn sub(self, rhs: $name) -> CelsiusDiff {
                CelsiusDiff(self.0 - rhs.0)
            }
        }

        impl ::std::ops::Add<CelsiusDiff> for $name {
            type Output = $name;

            #[inline]
            fn add(self, rhs: CelsiusDiff) -> $name {
                $name(self.0 + rhs.0)
            }
        }

        impl ::std::ops::Sub<CelsiusDiff> for $name {
            type Output = $name;

            #[inline]
            fn sub(self, rhs: CelsiusDiff) -> $name {
                $name(self.0 - rhs.0)
            }
        }
    };
}

make_quantity!(
    /// Length or depth in meters. Depths are positive, increasing downward.
    => Meters, "meters", "m"
);
impl_same_unit_ops!(Meters);
impl Length for Meters {}

make_quantity!(
    /// Sea pressure in decibars, zero at the surface.
    => Decibars, "decibars", "dbar"
);
impl_same_unit_ops!(Decibars);
impl Pressure for Decibars {}

make_quantity!(
    /// Pressure in pascals.
    => Pascals, "pascals", "Pa"
);
impl_same_unit_ops!(Pascals);
impl Pressure for Pascals {}

make_quantity!(
    /// Temperature in degrees Celsius (ITS-90).
    => Celsius, "degrees Celsius", "\u{00b0}C"
);
impl_temperature_ops!(Celsius);
impl Temperature for Celsius {}

make_quantity!(
    /// Temperature in Kelvin.
    => Kelvin, "Kelvin", "K"
);
impl_temperature_ops!(Kelvin);
impl Temperature for Kelvin {}

make_quantity!(
    /// A difference between two temperatures.
    => CelsiusDiff, "Celsius degrees", "\u{00b0}C"
);
impl_same_unit_ops!(CelsiusDiff);

make_quantity!(
    /// Practical salinity on the PSS-78 scale, dimensionless.
    => Psu, "practical salinity units", "PSU"
);
impl_same_unit_ops!(Psu);
impl Salinity for Psu {}

make_quantity!(
    /// Absolute salinity as a mass fraction, grams of dissolved material per
    /// kilogram of seawater.
    => GramsPerKilogram, "grams per kilogram", "g/kg"
);
impl_same_unit_ops!(GramsPerKilogram);
impl Salinity for GramsPerKilogram {}

make_quantity!(
    /// Density in kilograms per cubic meter.
    => KgPm3, "kilograms per cubic meter", "kg/m\u{00b3}"
);
impl_same_unit_ops!(KgPm3);

make_quantity!(
    /// Specific volume in cubic meters per kilogram.
    => M3PKg, "cubic meters per kilogram", "m\u{00b3}/kg"
);
impl_same_unit_ops!(M3PKg);

make_quantity!(
    /// Specific heat capacity in joules per kilogram per Kelvin.
    => JpKgK, "joules per kilogram per Kelvin", "J/(kg K)"
);
impl_same_unit_ops!(JpKgK);

make_quantity!(
    /// Column-integrated heat content in joules per square meter.
    => JpM2, "joules per square meter", "J/m\u{00b2}"
);
impl_same_unit_ops!(JpM2);

make_quantity!(
    /// Speed in meters per second.
    => MetersPSec, "meters per second", "m/s"
);
impl_same_unit_ops!(MetersPSec);

impl From<Celsius> for Kelvin {
    #[inline]
    fn from(t: Celsius) -> Self {
        Kelvin(t.0 + 273.15)
    }
}

impl From<Kelvin> for Celsius {
    #[inline]
    fn from(t: Kelvin) -> Self {
        Celsius(t.0 - 273.15)
    }
}

impl From<Decibars> for Pascals {
    #[inline]
    fn from(p: Decibars) -> Self {
        Pascals(p.0 * 10_000.0)
    }
}

impl From<Pascals> for Decibars {
    #[inline]
    fn from(p: Pascals) -> Self {
        Decibars(p.0 / 10_000.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use optional::{none, some, Optioned};

    #[test]
    fn pack_and_unpack_round_trip() {
        assert_eq!(Meters::pack(12.5).unpack(), 12.5);
        assert_eq!(Decibars(500.0).unpack(), 500.0);
    }

    #[test]
    fn scale_conversions() {
        assert_eq!(Kelvin::from(Celsius(0.0)), Kelvin(273.15));
        assert_eq!(Celsius::from(Kelvin(273.15)), Celsius(0.0));
        assert_eq!(Pascals::from(Decibars(1.0)), Pascals(10_000.0));
        assert_eq!(Decibars::from(Pascals(10_000.0)), Decibars(1.0));
    }

    #[test]
    fn temperature_differences() {
        assert_eq!(Celsius(20.0) - Celsius(15.0), CelsiusDiff(5.0));
        assert_eq!(Celsius(20.0) - CelsiusDiff(0.2), Celsius(19.8));
        assert_eq!(Celsius(20.0) + CelsiusDiff(1.0), Celsius(21.0));
    }

    #[test]
    fn quantities_work_inside_optioned() {
        let val: Optioned<Psu> = some(Psu(35.0));
        assert!(val.is_some());
        assert_eq!(val.unpack(), Psu(35.0));

        let missing: Optioned<Meters> = none();
        assert!(missing.is_none());
    }

    #[test]
    fn display_includes_the_abbreviation() {
        assert_eq!(format!("{}", Psu(35.0)), "35 PSU");
        assert_eq!(format!("{}", Meters(10.5)), "10.5 m");
    }
}
