//! Givens-rotation angles for a two-electron state.
//!
//! Three Givens rotations acting on the Hartree-Fock state `|110000>` can
//! prepare any real, normalized superposition
//! `a|110000> + b|001100> + c|000011> + d|100100>` with `a >= 0`. This
//! crate inverts the circuit: given the amplitudes it returns the angles.
//!
//! # Example
//!
//! ```rust
//! use qhack_givens::{givens_rotations, parse_amplitudes};
//!
//! let amps = parse_amplitudes("0.8,-0.4,0.4,-0.2").unwrap();
//! let angles = givens_rotations(&amps).unwrap();
//! assert!((angles.theta_2 - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
//!
//! let back = angles.amplitudes();
//! assert!((back.d - amps.d).abs() < 1e-12);
//! ```

pub mod error;
pub mod input;
pub mod rotations;

pub use error::{GivensError, GivensResult};
pub use input::parse_amplitudes;
pub use rotations::{Amplitudes, GivensAngles, NORM_TOLERANCE, givens_rotations};
