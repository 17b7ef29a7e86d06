//! Error types for the Givens-angle solver.

use thiserror::Error;

/// Errors produced while reading amplitudes or solving for rotation angles.
#[derive(Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum GivensError {
    /// `theta_2 = 2·atan(-c/b)` divides by `b`.
    #[error("Amplitude b is zero, so theta_2 is undefined")]
    ZeroB,

    /// An `asin` argument fell outside `[-1, 1]`.
    #[error("Cannot solve {angle}: asin argument {value} lies outside [-1, 1]")]
    OutOfDomain {
        /// Angle being solved for.
        angle: &'static str,
        /// Offending argument.
        value: f64,
    },

    /// `a = cos(theta_1/2)·cos(theta_3/2)` is never negative for angles in range.
    #[error("Amplitude a = {0} is negative and cannot be prepared")]
    NegativeA(f64),

    /// The four amplitudes do not describe a unit vector.
    #[error("Amplitudes have norm {0}, expected 1")]
    NotNormalized(f64),

    /// Input did not hold exactly four fields.
    #[error("Expected four amplitudes 'a,b,c,d', got {0} field(s)")]
    FieldCount(usize),

    /// A field is not a real number.
    #[error("Invalid amplitude '{0}'")]
    InvalidAmplitude(String),
}

/// Result type for Givens-angle operations.
pub type GivensResult<T> = Result<T, GivensError>;
