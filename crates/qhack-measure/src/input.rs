//! Reader for the comma-separated Hamiltonian format.
//!
//! ```text
//! 4,Y,I,Z,I,Y,X,I,I
//! ```
//!
//! The first token is the number of qubits `n`. Each following token
//! contributes its first non-blank character, and every `n` characters form
//! one Pauli word. A trailing partial word is dropped.

use tracing::warn;

use crate::error::{MeasureError, MeasureResult};
use crate::pauli::{Pauli, PauliWord};

/// Parse the word length header and the Pauli words that follow it.
pub fn parse_hamiltonian(input: &str) -> MeasureResult<Vec<PauliWord>> {
    let mut tokens = input.split(',');

    let header = tokens.next().unwrap_or_default().trim();
    let width: usize = header
        .parse()
        .ok()
        .filter(|&n| n > 0)
        .ok_or_else(|| MeasureError::InvalidWordLength(header.to_string()))?;

    let mut words = Vec::new();
    let mut current = Vec::with_capacity(width);
    for (position, token) in tokens.enumerate() {
        let c = token
            .trim_start()
            .chars()
            .next()
            .ok_or(MeasureError::EmptyToken(position + 1))?;
        current.push(Pauli::try_from(c)?);
        if current.len() == width {
            words.push(PauliWord::new(std::mem::replace(
                &mut current,
                Vec::with_capacity(width),
            )));
        }
    }

    if !current.is_empty() {
        warn!(
            dropped = current.len(),
            width, "ignoring trailing partial Pauli word"
        );
    }
    Ok(words)
}
