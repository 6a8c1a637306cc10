//! Error types for the cast-analysis crate.
use std::fmt;

/// Error type for the crate.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AnalysisError {
    /// A profile that is required for this analysis is missing from the cast.
    MissingProfile,
    /// A value (surface value, station location, etc) that is required is not available.
    MissingValue,
    /// Profiles required for this analysis have different lengths.
    MismatchedProfiles,
    /// Not enough data available for analysis.
    NotEnoughData,
    /// There is no data available that meets the requirements.
    NoDataProfile,
    /// Bad or invalid input.
    InvalidInput,
    /// Missing data during interpolation, or it would have been extrapolation.
    InterpolationError,
}

/// Shorthand for results.
pub type Result<T> = std::result::Result<T, AnalysisError>;

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use AnalysisError::*;

        let msg = match self {
            MissingProfile => "missing profile required for the analysis",
            MissingValue => "missing value required for analysis",
            MismatchedProfiles => "required profiles have mismatched lengths",
            NotEnoughData => "not enough data available for analysis",
            NoDataProfile => "profile is full of missing values, cannot do analysis",
            InvalidInput => "invalid input",
            InterpolationError => "none value encountered during interpolation",
        };

        write!(f, "{}", msg)
    }
}

impl std::error::Error for AnalysisError {}
