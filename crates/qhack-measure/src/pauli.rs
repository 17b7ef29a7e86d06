//! Pauli operators and dense Pauli words.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MeasureError, MeasureResult};

/// A single Pauli operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pauli {
    /// Identity operator.
    I,
    /// Pauli-X operator.
    X,
    /// Pauli-Y operator.
    Y,
    /// Pauli-Z operator.
    Z,
}

impl Pauli {
    /// Get the name of this Pauli operator.
    pub fn name(&self) -> &'static str {
        match self {
            Pauli::I => "I",
            Pauli::X => "X",
            Pauli::Y => "Y",
            Pauli::Z => "Z",
        }
    }

    /// Whether this is the identity.
    #[inline]
    pub fn is_identity(&self) -> bool {
        matches!(self, Pauli::I)
    }
}

impl TryFrom<char> for Pauli {
    type Error = MeasureError;

    fn try_from(c: char) -> MeasureResult<Self> {
        match c {
            'I' => Ok(Pauli::I),
            'X' => Ok(Pauli::X),
            'Y' => Ok(Pauli::Y),
            'Z' => Ok(Pauli::Z),
            other => Err(MeasureError::InvalidOperator(other)),
        }
    }
}

impl fmt::Display for Pauli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A tensor product of Pauli operators, one per qubit, qubit 0 first.
///
/// Serializes as its string form, e.g. `"YIZI"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct PauliWord {
    ops: Vec<Pauli>,
}

impl PauliWord {
    /// Create a word from per-qubit operators.
    pub fn new(ops: Vec<Pauli>) -> Self {
        Self { ops }
    }

    /// The all-identity word on `n` qubits.
    pub fn identity(n: usize) -> Self {
        Self::new(vec![Pauli::I; n])
    }

    /// Number of qubits the word acts on.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Whether the word acts on no qubits.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Per-qubit operators.
    pub fn ops(&self) -> &[Pauli] {
        &self.ops
    }

    /// Number of non-identity operators.
    pub fn weight(&self) -> usize {
        self.ops.iter().filter(|p| !p.is_identity()).count()
    }

    /// Whether both words can be read off one measurement setting.
    ///
    /// On every qubit at least one of the two words must be the identity, or
    /// both must carry the same operator.
    pub fn is_compatible(&self, other: &PauliWord) -> MeasureResult<bool> {
        self.check_len(other)?;
        Ok(self
            .ops
            .iter()
            .zip(&other.ops)
            .all(|(a, b)| a.is_identity() || b.is_identity() || a == b))
    }

    /// The word measuring both `self` and `other`: on each qubit, the
    /// non-identity operator of either word.
    pub fn merge(&self, other: &PauliWord) -> MeasureResult<PauliWord> {
        if !self.is_compatible(other)? {
            return Err(MeasureError::Incompatible {
                left: self.to_string(),
                right: other.to_string(),
            });
        }
        Ok(PauliWord::new(
            self.ops
                .iter()
                .zip(&other.ops)
                .map(|(&a, &b)| if a.is_identity() { b } else { a })
                .collect(),
        ))
    }

    /// Whether measuring `self` also yields `other`.
    pub fn covers(&self, other: &PauliWord) -> bool {
        self.len() == other.len()
            && self
                .ops
                .iter()
                .zip(&other.ops)
                .all(|(a, b)| b.is_identity() || a == b)
    }

    fn check_len(&self, other: &PauliWord) -> MeasureResult<()> {
        if self.len() == other.len() {
            Ok(())
        } else {
            Err(MeasureError::LengthMismatch {
                left: self.len(),
                right: other.len(),
            })
        }
    }
}

impl FromStr for PauliWord {
    type Err = MeasureError;

    fn from_str(s: &str) -> MeasureResult<Self> {
        s.trim()
            .chars()
            .map(Pauli::try_from)
            .collect::<MeasureResult<Vec<_>>>()
            .map(PauliWord::new)
    }
}

impl TryFrom<String> for PauliWord {
    type Error = MeasureError;

    fn try_from(s: String) -> MeasureResult<Self> {
        s.parse()
    }
}

impl From<PauliWord> for String {
    fn from(word: PauliWord) -> Self {
        word.to_string()
    }
}

impl fmt::Display for PauliWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for op in &self.ops {
            write!(f, "{op}")?;
        }
        Ok(())
    }
}
