//! Seawater thermodynamics.
//!
//! The formula layer behind the cast diagnostics: salinity and temperature
//! scale conversions from TEOS-10, the UNESCO EOS-80 equation of state, and
//! hydrostatic depth/pressure conversion. Functions here take and return
//! dimensioned quantities and yield `None` for physically invalid input, so
//! callers working level by level can turn a bad level into a missing value
//! rather than aborting a whole profile.
//!
//! References: IOC, SCOR and IAPSO (2010), *The international thermodynamic
//! equation of seawater - 2010*; UNESCO (1983), *Algorithms for computation
//! of fundamental properties of seawater*; Millero & Poisson (1981); Chen &
//! Millero (1977).

use crate::{
    units::{Celsius, Decibars, GramsPerKilogram, JpKgK, KgPm3, M3PKg, Meters, MetersPSec, Psu},
    utility::find_root,
};

/// The fixed TEOS-10 heat capacity relating conservative temperature to
/// potential enthalpy, J/(kg K).
pub const CP0: JpKgK = JpKgK(3991.867_957_119_63);

// Ratio of absolute (reference composition) to practical salinity.
const UPS: f64 = 35.165_04 / 35.0;

// Normalization used by the TEOS-10 polynomials: SFAC * 35.16504 g/kg = 0.875.
const SFAC: f64 = 0.024_882_667_558_461_5;

/// Absolute salinity from practical salinity.
///
/// Scales onto the reference composition of Millero et al. (2008). The
/// spatially varying absolute salinity anomaly is below 0.03 g/kg over most
/// of the open ocean and is neglected.
#[inline]
pub fn sa_from_sp(sp: Psu) -> Option<GramsPerKilogram> {
    if sp.0 < 0.0 || !sp.0.is_finite() {
        None
    } else {
        Some(GramsPerKilogram(sp.0 * UPS))
    }
}

/// Practical salinity from absolute salinity, the inverse scaling.
#[inline]
pub fn sp_from_sa(sa: GramsPerKilogram) -> Option<Psu> {
    if sa.0 < 0.0 || !sa.0.is_finite() {
        None
    } else {
        Some(Psu(sa.0 / UPS))
    }
}

/// Conservative temperature from potential temperature.
///
/// Evaluates the TEOS-10 potential enthalpy polynomial and divides by
/// [`CP0`].
#[inline]
pub fn ct_from_pt(sa: GramsPerKilogram, pt: Celsius) -> Option<Celsius> {
    if sa.0 < 0.0 || !sa.0.is_finite() || !pt.0.is_finite() {
        None
    } else {
        Some(Celsius(pot_enthalpy(sa.0, pt.0) / CP0.0))
    }
}

/// Potential temperature from conservative temperature.
///
/// Inverts [`ct_from_pt`] by bisection; the result round-trips to well below
/// measurement precision.
#[inline]
pub fn pt_from_ct(sa: GramsPerKilogram, ct: Celsius) -> Option<Celsius> {
    if sa.0 < 0.0 || !sa.0.is_finite() || !ct.0.is_finite() {
        return None;
    }

    let sa_val = sa.0;
    let pt = find_root(
        &|pt| pot_enthalpy(sa_val, pt) / CP0.0 - ct.0,
        ct.0 - 10.0,
        ct.0 + 10.0,
    );

    Some(Celsius(pt))
}

// Potential enthalpy of seawater, J/kg, from the TEOS-10 polynomial fit
// (IOC et al. 2010, appendix A.30). Inputs are g/kg and degrees Celsius.
fn pot_enthalpy(sa: f64, pt: f64) -> f64 {
    let x2 = SFAC * sa;
    let x = x2.sqrt();
    let y = pt * 0.025;

    61.013_624_206_810_71
        + y * (168_776.461_380_480_15
            + y * (-2_735.278_560_511_962_5
                + y * (2_574.216_445_382_143_3
                    + y * (-1_536.664_443_497_754_3
                        + y * (545.734_049_793_162_9
                            + (-50.910_917_284_743_31 - 18.304_898_789_278_02 * y) * y)))))
        + x2 * (268.552_026_584_507_1
            + y * (-12_019.028_203_559_312
                + y * (3_734.858_026_725_145
                    + y * (-2_046.767_114_505_761_8
                        + y * (465.286_556_238_262_34
                            + (-0.637_082_030_237_635_9 - 10.650_848_542_359_153 * y) * y))))
            + x * (937.209_911_062_070_7
                + y * (588.180_281_217_010_8
                    + y * (248.394_765_229_712_85
                        + (-3.871_557_904_936_333 - 2.626_801_985_426_835_6 * y) * y))
                + x * (-1_687.914_374_187_449
                    + x * (246.959_888_878_137_7
                        + x * (123.595_765_824_579_64 - 48.589_106_902_540_9 * x))
                    + y * (936.320_654_446_033_6
                        + y * (-942.782_730_454_443_9
                            + y * (369.438_943_750_900_2
                                + (-33.836_649_478_952_48 - 9.987_880_382_780_322 * y) * y))))))
}

/// Adiabatic temperature gradient, degrees Celsius per decibar (Bryden 1973).
#[inline]
pub fn adiabatic_lapse_rate(s: Psu, t: Celsius, p: Decibars) -> Option<f64> {
    if s.0 < 0.0 || p.0 < 0.0 {
        None
    } else {
        Some(atg(s.0, t.0, p.0))
    }
}

fn atg(s: f64, t: f64, p: f64) -> f64 {
    let ds = s - 35.0;

    (((-2.1687e-16 * t + 1.8676e-14) * t - 4.6206e-13) * p
        + ((2.7759e-12 * t - 1.1351e-10) * ds
            + ((-5.4481e-14 * t + 8.733e-12) * t - 6.7795e-10) * t
            + 1.8741e-8))
        * p
        + (-4.2393e-8 * t + 1.8932e-6) * ds
        + ((6.6228e-10 * t - 6.836e-8) * t + 8.5258e-6) * t
        + 3.5803e-5
}

/// Potential temperature of a water parcel moved adiabatically from pressure
/// `p` to the reference pressure `p_ref`.
///
/// Integrates the adiabatic lapse rate with the 4-stage Runge-Kutta scheme of
/// Fofonoff & Millard (1983).
pub fn potential_temperature(s: Psu, t: Celsius, p: Decibars, p_ref: Decibars) -> Option<Celsius> {
    if s.0 < 0.0 || p.0 < 0.0 || p_ref.0 < 0.0 {
        return None;
    }

    const SQRT2: f64 = std::f64::consts::SQRT_2;

    let (s, p0, pr) = (s.0, p.0, p_ref.0);
    let dp = pr - p0;

    let mut dth = dp * atg(s, t.0, p0);
    let mut th = t.0 + 0.5 * dth;
    let mut q = dth;

    dth = dp * atg(s, th, p0 + 0.5 * dp);
    th += (1.0 - 1.0 / SQRT2) * (dth - q);
    q = (2.0 - SQRT2) * dth + (-2.0 + 3.0 / SQRT2) * q;

    dth = dp * atg(s, th, p0 + 0.5 * dp);
    th += (1.0 + 1.0 / SQRT2) * (dth - q);
    q = (2.0 + SQRT2) * dth + (-2.0 - 3.0 / SQRT2) * q;

    dth = dp * atg(s, th, p0 + dp);

    Some(Celsius(th + (dth - 2.0 * q) / 6.0))
}

/// In-situ temperature at pressure `p` of a parcel whose potential
/// temperature referenced to the surface is `pt`.
#[inline]
pub fn insitu_from_potential(s: Psu, pt: Celsius, p: Decibars) -> Option<Celsius> {
    potential_temperature(s, pt, Decibars(0.0), p)
}

/// In-situ temperature from conservative temperature and pressure.
#[inline]
pub fn t_from_ct(sa: GramsPerKilogram, ct: Celsius, p: Decibars) -> Option<Celsius> {
    let sp = sp_from_sa(sa)?;
    let pt = pt_from_ct(sa, ct)?;

    insitu_from_potential(sp, pt, p)
}

/// In-situ density from the UNESCO EOS-80 equation of state
/// (Millero & Poisson 1981).
#[inline]
pub fn density(s: Psu, t: Celsius, p: Decibars) -> Option<KgPm3> {
    if s.0 < 0.0 || p.0 < 0.0 || !t.0.is_finite() {
        None
    } else {
        Some(KgPm3(rho(s.0, t.0, p.0)))
    }
}

fn rho(s: f64, t: f64, p: f64) -> f64 {
    let rho_surface = rho_at_surface(s, t);
    if p == 0.0 {
        return rho_surface;
    }

    // The high pressure terms of EOS-80 take pressure in bars.
    let p_bar = p / 10.0;
    rho_surface / (1.0 - p_bar / secant_bulk_modulus(s, t, p_bar))
}

// One-atmosphere density, kg/m^3.
fn rho_at_surface(s: f64, t: f64) -> f64 {
    // Pure water density (Bigg formula).
    let rho_w = 999.842_594 + 6.793_952e-2 * t - 9.095_290e-3 * t.powi(2)
        + 1.001_685e-4 * t.powi(3)
        - 1.120_083e-6 * t.powi(4)
        + 6.536_336e-9 * t.powi(5);

    let a = 8.244_93e-1 - 4.0899e-3 * t + 7.6438e-5 * t.powi(2) - 8.2467e-7 * t.powi(3)
        + 5.3875e-9 * t.powi(4);
    let b = -5.724_66e-3 + 1.0227e-4 * t - 1.6546e-6 * t.powi(2);
    let c = 4.8314e-4;

    rho_w + a * s + b * s.powf(1.5) + c * s.powi(2)
}

// Secant bulk modulus K(S, T, p), pressure in bars.
fn secant_bulk_modulus(s: f64, t: f64, p_bar: f64) -> f64 {
    let kw = 19_652.21 + 148.4206 * t - 2.327_105 * t.powi(2) + 1.360_477e-2 * t.powi(3)
        - 5.155_288e-5 * t.powi(4);

    let k0 = kw
        + s * (54.6746 - 0.603_459 * t + 1.099_87e-2 * t.powi(2) - 6.1670e-5 * t.powi(3))
        + s.powf(1.5) * (7.944e-2 + 1.6483e-2 * t - 5.3009e-4 * t.powi(2));

    let aw = 3.239_908 + 1.437_13e-3 * t + 1.160_92e-4 * t.powi(2) - 5.779_05e-7 * t.powi(3);
    let a =
        aw + s * (2.2838e-3 - 1.0981e-5 * t - 1.6078e-6 * t.powi(2)) + s.powf(1.5) * 1.910_75e-4;

    let bw = 8.509_35e-5 - 6.122_93e-6 * t + 5.2787e-8 * t.powi(2);
    let b = bw + s * (-9.9348e-7 + 2.0816e-8 * t + 9.1697e-10 * t.powi(2));

    k0 + p_bar * (a + b * p_bar)
}

/// Potential density: the density a parcel would have at the surface,
/// evaluated from its potential temperature. Used where the compressibility
/// of seawater must not enter, e.g. mixed-layer criteria.
#[inline]
pub fn potential_density(s: Psu, pt: Celsius) -> Option<KgPm3> {
    density(s, pt, Decibars(0.0))
}

/// Specific volume, the reciprocal of [`density`].
#[inline]
pub fn specific_volume(s: Psu, t: Celsius, p: Decibars) -> Option<M3PKg> {
    density(s, t, p).map(|rho| M3PKg(1.0 / rho.0))
}

/// Specific volume anomaly relative to standard ocean water (S = 35,
/// t = 0 degrees C) at the same pressure.
#[inline]
pub fn specific_volume_anomaly(s: Psu, t: Celsius, p: Decibars) -> Option<M3PKg> {
    let v = specific_volume(s, t, p)?;
    let v_std = specific_volume(Psu(35.0), Celsius(0.0), p)?;

    Some(v - v_std)
}

/// Specific heat capacity of seawater at one atmosphere (Millero et al.
/// 1973).
///
/// The pressure dependence of the heat capacity is below half a percent over
/// the water column and is neglected; `p` is validated only.
#[inline]
pub fn specific_heat(s: Psu, t: Celsius, p: Decibars) -> Option<JpKgK> {
    if s.0 < 0.0 || p.0 < 0.0 || !t.0.is_finite() {
        return None;
    }

    let (s, t) = (s.0, t.0);

    let cp_w = 4_217.4 - 3.720_283 * t + 0.141_285_5 * t.powi(2) - 2.654_387e-3 * t.powi(3)
        + 2.093_236e-5 * t.powi(4);
    let a = -7.643_57 + 0.107_276_3 * t - 1.383_85e-3 * t.powi(2);
    let b = 0.177_038_3 - 4.077_18e-3 * t + 5.148e-5 * t.powi(2);

    Some(JpKgK(cp_w + a * s + b * s.powf(1.5)))
}

/// Speed of sound in seawater (Chen & Millero 1977).
pub fn sound_speed(s: Psu, t: Celsius, p: Decibars) -> Option<MetersPSec> {
    if s.0 < 0.0 || p.0 < 0.0 || !t.0.is_finite() {
        return None;
    }

    let (s, t) = (s.0, t.0);
    let p = p.0 / 10.0; // bars

    let cw = 1_402.388
        + 5.038_30 * t
        - 5.810_90e-2 * t.powi(2)
        + 3.3432e-4 * t.powi(3)
        - 1.477_97e-6 * t.powi(4)
        + 3.1419e-9 * t.powi(5)
        + (0.153_563 + 6.8999e-4 * t - 8.1829e-6 * t.powi(2) + 1.3632e-7 * t.powi(3)
            - 6.1260e-10 * t.powi(4))
            * p
        + (3.1260e-5 - 1.7111e-6 * t + 2.5986e-8 * t.powi(2) - 2.5353e-10 * t.powi(3)
            + 1.0415e-12 * t.powi(4))
            * p.powi(2)
        + (-9.7729e-9 + 3.8513e-10 * t - 2.3654e-12 * t.powi(2)) * p.powi(3);

    let a = 1.389 - 1.262e-2 * t + 7.166e-5 * t.powi(2) + 2.008e-6 * t.powi(3)
        - 3.21e-8 * t.powi(4)
        + (9.4742e-5 - 1.2583e-5 * t - 6.4928e-8 * t.powi(2) + 1.0515e-8 * t.powi(3)
            - 2.0142e-10 * t.powi(4))
            * p
        + (-3.9064e-7 + 9.1061e-9 * t - 1.6009e-10 * t.powi(2) + 7.994e-12 * t.powi(3))
            * p.powi(2)
        + (1.100e-10 + 6.651e-12 * t - 3.391e-13 * t.powi(2)) * p.powi(3);

    let b = -1.922e-2 - 4.42e-5 * t + (7.3637e-5 + 1.7950e-7 * t) * p;

    let d = 1.727e-3 - 7.9836e-6 * p;

    Some(MetersPSec(
        cw + a * s + b * s.powf(1.5) + d * s.powi(2),
    ))
}

/// Freezing point of seawater at pressure `p` (UNESCO 1983).
#[inline]
pub fn freezing_point(s: Psu, p: Decibars) -> Option<Celsius> {
    if s.0 < 0.0 || p.0 < 0.0 {
        return None;
    }

    let (s, p) = (s.0, p.0);

    Some(Celsius(
        -0.0575 * s + 1.710_523e-3 * s.powf(1.5) - 2.154_996e-4 * s.powi(2) - 7.53e-4 * p,
    ))
}

/// Gravitational acceleration at the sea surface, m/s^2, from the
/// international gravity formula.
#[inline]
pub fn gravity(latitude: f64) -> Option<f64> {
    if !(-90.0..=90.0).contains(&latitude) {
        return None;
    }

    let sin_lat = latitude.to_radians().sin();
    let sin_2lat = (2.0 * latitude.to_radians()).sin();

    Some(9.780_327 * (1.0 + 5.3024e-3 * sin_lat.powi(2) - 5.8e-6 * sin_2lat.powi(2)))
}

/// Sea pressure at a depth below the surface.
///
/// Integrates the hydrostatic balance down a standard ocean column (S = 35,
/// t = 0 degrees C) with latitude-dependent gravity. Depth is positive
/// downward.
pub fn pressure_from_depth(depth: Meters, latitude: f64) -> Option<Decibars> {
    if depth.0 < 0.0 || !depth.0.is_finite() {
        return None;
    }

    let g = gravity(latitude)?;

    Some(Decibars(hydrostatic_pressure(depth.0, g) / 1.0e4))
}

/// Depth below the surface at a sea pressure, the inverse of
/// [`pressure_from_depth`]. Depth is positive downward.
pub fn depth_from_pressure(p: Decibars, latitude: f64) -> Option<Meters> {
    if p.0 < 0.0 || !p.0.is_finite() {
        return None;
    }

    let g = gravity(latitude)?;
    if p.0 == 0.0 {
        return Some(Meters(0.0));
    }

    let p_pa = p.0 * 1.0e4;
    let z = find_root(
        &|z| hydrostatic_pressure(z, g) - p_pa,
        0.0,
        p.0.max(1.0), // a meter of water is always more than a decibar
    );

    Some(Meters(z))
}

// Pressure in pascals at depth z meters, stepping the hydrostatic balance
// through the standard ocean column in layers of at most 10 m.
fn hydrostatic_pressure(z: f64, g: f64) -> f64 {
    let n = (z / 10.0).ceil().max(1.0) as usize;
    let dz = z / n as f64;

    let mut p_pa = 0.0f64;
    for _ in 0..n {
        let rho = rho(35.0, 0.0, p_pa / 1.0e4);
        p_pa += rho * g * dz;
    }

    p_pa
}
