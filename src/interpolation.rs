use crate::{
    cast::{Cast, CastRow},
    error::{AnalysisError, Result},
    units::{Meters, Quantity},
};
use itertools::{izip, Itertools};
use optional::{Noned, Optioned};
use std::ops::Sub;

/// Interpolate values from the cast using depth as the primary coordinate.
///
/// Returns a `CastRow` struct with interpolated values.
pub fn linear_interpolate_cast(cast: &Cast, tgt_depth: Meters) -> Result<CastRow> {
    let depth: &[Optioned<Meters>] = cast.depth_profile();

    // What kind of bracket is this?
    enum BracketType {
        Bracket(usize, usize),
        EndEquals(usize),
    }

    // Map this pair of slice index and depth points to a BracketType
    let make_bracket = |pnt_0, pnt_1| -> Option<BracketType> {
        let (i0, d0): (_, Meters) = pnt_0;
        let (i1, d1): (_, Meters) = pnt_1;

        // Always assume depth is sorted in ascending order
        debug_assert!(d0 < d1);
        if d0 < tgt_depth && d1 > tgt_depth {
            Some(BracketType::Bracket(i0, i1))
        } else if (d0 - tgt_depth).unpack().abs() < std::f64::EPSILON {
            Some(BracketType::EndEquals(i0))
        } else if (d1 - tgt_depth).unpack().abs() < std::f64::EPSILON {
            Some(BracketType::EndEquals(i1))
        } else {
            None
        }
    };

    // Find the levels to interpolate between.
    depth
        .iter()
        .enumerate()
        // Remove levels with missing depth (SHOULD be none...but...) and then unwrap from the
        // Optioned type
        .filter_map(|(i, d_val_opt)| d_val_opt.map(|d_val| (i, d_val)))
        // Look at the levels two at a time...
        .tuple_windows::<(_, _)>()
        // Map these pairs to brackets and remove anything that isn't a bracket. Should leave
        // at most one bracket in the iterator!
        .filter_map(|(pnt_0, pnt_1)| make_bracket(pnt_0, pnt_1))
        // Get the first (and only) bracket
        .next() // Option<BracketType>
        // Perform the interpolation!
        .and_then(|bracket| match bracket {
            BracketType::Bracket(i0, i1) => {
                let row0 = cast.data_row(i0)?;
                let row1 = cast.data_row(i1)?;
                linear_interp_cast_rows(row0, row1, tgt_depth)
            }
            BracketType::EndEquals(i) => cast.data_row(i),
        })
        // Map to error
        .ok_or(AnalysisError::InterpolationError)
}

/// Interpolate values given two parallel vectors of data and a target value.
///
/// Assumes that xs is monotonic.
#[inline]
pub fn linear_interpolate<X, Y>(xs: &[Optioned<X>], ys: &[Optioned<Y>], target_x: X) -> Optioned<Y>
where
    X: Quantity + Noned + PartialOrd + Sub<X>,
    <X as Sub<X>>::Output: Quantity + Noned,
    Y: Quantity + Noned + Sub<Y>,
    <Y as Sub<Y>>::Output: Quantity,
{
    debug_assert_eq!(xs.len(), ys.len());

    enum BracketType<X, Y> {
        Bracket((X, Y), (X, Y)),
        EndEqual((X, Y)),
    }

    let make_bracket = |pnt_0, pnt_1| -> Option<BracketType<X, Y>> {
        let (x0, _) = pnt_0;
        let (x1, _) = pnt_1;

        if (x0 < target_x && x1 > target_x) || (x0 > target_x && x1 < target_x) {
            Some(BracketType::Bracket(pnt_0, pnt_1))
        } else if (x0 - target_x).unpack().abs() < std::f64::EPSILON {
            Some(BracketType::EndEqual(pnt_0))
        } else if (x1 - target_x).unpack().abs() < std::f64::EPSILON {
            Some(BracketType::EndEqual(pnt_1))
        } else {
            None
        }
    };

    let value_opt = izip!(xs, ys)
        // Filter out elements where one of the values is missing, this allows us to skip over
        // a point with a missing value and use the points on either side of it for the
        // interpolation.
        .filter(|(x, y)| x.is_some() && y.is_some())
        // Unpack the values from the `Optioned` type
        .map(|(x, y)| (x.unpack(), y.unpack()))
        // Look at them in pairs.
        .tuple_windows::<(_, _)>()
        // Make a bracket and filter out all levels that don't create a bracket.
        .filter_map(|(pnt_0, pnt_1)| make_bracket(pnt_0, pnt_1))
        // Get the first (and only) one that brackets the target value
        .next() // This is an Option<BracketType>
        // Map from the bracket type to the interpolated value
        .map(|val| match val {
            BracketType::Bracket(pnt_0, pnt_1) => {
                let (x0, y0) = pnt_0;
                let (x1, y1) = pnt_1;
                linear_interp(target_x, x0, x1, y0, y1)
            }
            BracketType::EndEqual(pnt) => pnt.1,
        });

    Optioned::from(value_opt)
}

#[inline]
pub(crate) fn linear_interp<X, Y>(x_val: X, x1: X, x2: X, y1: Y, y2: Y) -> Y
where
    X: Sub<X> + Copy + std::fmt::Debug + std::cmp::PartialEq,
    <X as Sub<X>>::Output: Quantity,
    Y: Quantity + Sub<Y>,
    <Y as Sub<Y>>::Output: Quantity,
{
    debug_assert_ne!(x1, x2);

    let run = (x2 - x1).unpack();
    let rise = (y2 - y1).unpack();
    let dx = (x_val - x1).unpack();

    Y::pack(y1.unpack() + dx * (rise / run))
}

#[inline]
fn linear_interp_cast_rows(row0: CastRow, row1: CastRow, tgt_depth: Meters) -> Option<CastRow> {
    let d0 = row0.depth.into_option()?;
    let d1 = row1.depth.into_option()?;

    let run = d1 - d0;
    let dd = tgt_depth - d0;

    let mut result = CastRow::default();
    result.depth = Optioned::from(tgt_depth);

    result.pressure = eval_linear_interp(row0.pressure, row1.pressure, run, dd);
    result.salinity = eval_linear_interp(row0.salinity, row1.salinity, run, dd);
    result.potential_temperature = eval_linear_interp(
        row0.potential_temperature,
        row1.potential_temperature,
        run,
        dd,
    );
    result.absolute_salinity =
        eval_linear_interp(row0.absolute_salinity, row1.absolute_salinity, run, dd);
    result.conservative_temperature = eval_linear_interp(
        row0.conservative_temperature,
        row1.conservative_temperature,
        run,
        dd,
    );
    result.insitu_temperature =
        eval_linear_interp(row0.insitu_temperature, row1.insitu_temperature, run, dd);
    result.density = eval_linear_interp(row0.density, row1.density, run, dd);

    Some(result)
}

#[inline]
fn eval_linear_interp<QX, Y>(
    low_val: Optioned<Y>,
    high_val: Optioned<Y>,
    run: QX,
    dd: QX,
) -> Optioned<Y>
where
    QX: Quantity + Noned,
    Y: Quantity + Noned,
{
    if low_val.is_some() && high_val.is_some() {
        let (val_below, val_above) = (low_val.unpack().unpack(), high_val.unpack().unpack());
        let rise: f64 = val_above - val_below;
        let run: f64 = run.unpack();
        let dd: f64 = dd.unpack();
        Optioned::from(Y::pack(val_below + dd * rise / run))
    } else {
        Optioned::default()
    }
}
