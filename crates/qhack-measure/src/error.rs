//! Error types for the measurement crate.

use thiserror::Error;

/// Errors produced while parsing or grouping Pauli words.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum MeasureError {
    /// Character is not one of `I`, `X`, `Y`, `Z`.
    #[error("Invalid Pauli operator '{0}'")]
    InvalidOperator(char),

    /// Two words acting on a different number of qubits were compared.
    #[error("Pauli words act on {left} and {right} qubits")]
    LengthMismatch {
        /// Length of the first word.
        left: usize,
        /// Length of the second word.
        right: usize,
    },

    /// Words were merged that do not share a measurement basis.
    #[error("Pauli words {left} and {right} cannot be measured together")]
    Incompatible {
        /// First word.
        left: String,
        /// Second word.
        right: String,
    },

    /// No Pauli words were given.
    #[error("Hamiltonian has no Pauli words")]
    EmptyHamiltonian,

    /// Header token is not a positive word length.
    #[error("Invalid word length '{0}'")]
    InvalidWordLength(String),

    /// A token carries no operator character.
    #[error("Empty operator token at position {0}")]
    EmptyToken(usize),
}

/// Result type for measurement operations.
pub type MeasureResult<T> = Result<T, MeasureError>;
