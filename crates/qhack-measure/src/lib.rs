//! Measurement grouping for Pauli-sum Hamiltonians.
//!
//! Estimating `<H>` for `H = Σ cᵢ Pᵢ` needs one measurement setting per
//! Pauli word unless several words can be read off the same setting. Two
//! words share a setting when, qubit by qubit, they agree or one of them is
//! the identity.
//!
//! # Example
//!
//! ```rust
//! use qhack_measure::{compression_ratio, group_measurements, parse_hamiltonian};
//!
//! let words = parse_hamiltonian("4,Y,I,Z,I,Y,X,I,I,Y,I,X,I,I,I,I,Z").unwrap();
//! let plan = group_measurements(&words).unwrap();
//! assert_eq!(plan.len(), 2);
//! assert_eq!(compression_ratio(&words, &plan).unwrap(), 0.5);
//! ```

pub mod error;
pub mod grouping;
pub mod input;
pub mod pauli;

pub use error::{MeasureError, MeasureResult};
pub use grouping::{MeasurementGroup, MeasurementPlan, compression_ratio, group_measurements};
pub use input::parse_hamiltonian;
pub use pauli::{Pauli, PauliWord};
