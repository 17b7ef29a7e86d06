//! Angles of the three-rotation double-excitation circuit.
//!
//! Starting from `|110000>`, a double-excitation Givens rotation by
//! `theta_1` followed by a double excitation by `theta_2` on the excited
//! branch and a single excitation by `theta_3` on the reference branch
//! prepares
//!
//! ```text
//! a = cos(theta_1/2)·cos(theta_3/2)     |110000>
//! b = -sin(theta_1/2)·cos(theta_2/2)    |001100>
//! c = sin(theta_1/2)·sin(theta_2/2)     |000011>
//! d = -cos(theta_1/2)·sin(theta_3/2)    |100100>
//! ```
//!
//! Solving those four equations gives
//!
//! ```text
//! theta_2 = 2·atan(-c/b)
//! theta_1 = 2·asin(c / sin(theta_2/2))
//! theta_3 = 2·asin(-d / cos(theta_1/2))
//! ```

use serde::Serialize;
use tracing::trace;

use crate::error::{GivensError, GivensResult};

/// Largest distance of the amplitude norm from 1 that is still accepted.
pub const NORM_TOLERANCE: f64 = 1e-6;

/// `asin` arguments this far past ±1 are rounding noise and get clamped.
const ROUNDING_SLACK: f64 = 1e-12;

/// Real amplitudes of the four basis states reachable by the circuit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Amplitudes {
    /// Amplitude of `|110000>`.
    pub a: f64,
    /// Amplitude of `|001100>`.
    pub b: f64,
    /// Amplitude of `|000011>`.
    pub c: f64,
    /// Amplitude of `|100100>`.
    pub d: f64,
}

impl Amplitudes {
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Euclidean norm of the four amplitudes.
    pub fn norm(&self) -> f64 {
        (self.a * self.a + self.b * self.b + self.c * self.c + self.d * self.d).sqrt()
    }
}

/// Rotation angles in the order the gates are applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GivensAngles {
    /// Double excitation out of the reference state, in `[-π, π]`.
    pub theta_1: f64,
    /// Double excitation between the excited states, in `(-π, π)`.
    pub theta_2: f64,
    /// Single excitation on the reference branch, in `[-π, π]`.
    pub theta_3: f64,
}

impl GivensAngles {
    /// The angles as `[theta_1, theta_2, theta_3]`.
    pub fn to_array(self) -> [f64; 3] {
        [self.theta_1, self.theta_2, self.theta_3]
    }

    /// Amplitudes the circuit prepares with these angles.
    pub fn amplitudes(&self) -> Amplitudes {
        let (s1, c1) = (self.theta_1 / 2.0).sin_cos();
        let (s2, c2) = (self.theta_2 / 2.0).sin_cos();
        let (s3, c3) = (self.theta_3 / 2.0).sin_cos();
        Amplitudes::new(c1 * c3, -s1 * c2, s1 * s2, -c1 * s3)
    }
}

/// Solve for the rotation angles that prepare `amps`.
///
/// # Errors
///
/// - [`GivensError::NotNormalized`] if the norm is off by more than
///   [`NORM_TOLERANCE`].
/// - [`GivensError::NegativeA`] if `a < 0`.
/// - [`GivensError::ZeroB`] if `b == 0`.
/// - [`GivensError::OutOfDomain`] if an `asin` argument leaves `[-1, 1]`.
pub fn givens_rotations(amps: &Amplitudes) -> GivensResult<GivensAngles> {
    let Amplitudes { a, b, c, d } = *amps;

    let norm = amps.norm();
    if norm.is_nan() || (norm - 1.0).abs() > NORM_TOLERANCE {
        return Err(GivensError::NotNormalized(norm));
    }
    if a < 0.0 {
        return Err(GivensError::NegativeA(a));
    }
    if b == 0.0 {
        return Err(GivensError::ZeroB);
    }

    let theta_2 = 2.0 * (-c / b).atan();

    // With c == 0, theta_2 is 0 and the c equation reads 0/0; the b
    // equation gives the same limit, sin(theta_1/2) = -b.
    let half_sin_2 = (theta_2 / 2.0).sin();
    let sin_1 = if half_sin_2 == 0.0 { -b } else { c / half_sin_2 };
    let theta_1 = 2.0 * checked_asin("theta_1", sin_1)?;

    // theta_1/2 lies in [-π/2, π/2], where the float cosine stays positive.
    let theta_3 = 2.0 * checked_asin("theta_3", -d / (theta_1 / 2.0).cos())?;

    trace!(a, b, c, d, theta_1, theta_2, theta_3, "solved givens angles");
    Ok(GivensAngles {
        theta_1,
        theta_2,
        theta_3,
    })
}

fn checked_asin(angle: &'static str, value: f64) -> GivensResult<f64> {
    if value.abs() <= 1.0 {
        Ok(value.asin())
    } else if value.abs() <= 1.0 + ROUNDING_SLACK {
        Ok(value.clamp(-1.0, 1.0).asin())
    } else {
        Err(GivensError::OutOfDomain { angle, value })
    }
}
