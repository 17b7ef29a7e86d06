//! Error types for the topology crate.

use thiserror::Error;

/// Errors that can occur while building topologies or searching them.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TopologyError {
    /// Qubit index is not a node of the topology.
    #[error("Qubit {qubit} is not part of the topology ({num_qubits} qubits)")]
    InvalidQubitIndex {
        /// The offending qubit index.
        qubit: u32,
        /// Number of qubits in the topology.
        num_qubits: u32,
    },

    /// Target cannot be reached from the control qubit.
    #[error("Qubit {target} is unreachable from qubit {control}")]
    TargetUnreachable {
        /// Control qubit of the two-qubit gate.
        control: u32,
        /// Target qubit of the two-qubit gate.
        target: u32,
    },

    /// Control and target name the same qubit.
    #[error("Control and target are the same qubit ({0})")]
    CoincidentQubits(u32),

    /// A qubit lists itself as a neighbor.
    #[error("Qubit {0} lists itself as a neighbor")]
    SelfLoop(u32),

    /// Adjacency lists disagree about an edge.
    #[error("Qubit {from} lists {to} as a neighbor, but {to} does not list {from}")]
    AsymmetricAdjacency {
        /// Qubit declaring the edge.
        from: u32,
        /// Qubit missing the reverse edge.
        to: u32,
    },

    /// Adjacency keys do not cover `0..n`.
    #[error("Topology qubits must be numbered 0..{expected}, missing qubit {missing}")]
    NonContiguousQubits {
        /// Number of qubits implied by the largest key.
        expected: u32,
        /// First missing index.
        missing: u32,
    },

    /// Topology configuration could not be read or is inconsistent.
    #[error("Topology config error: {0}")]
    Config(String),

    /// I/O failure while reading a topology file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for topology operations.
pub type TopologyResult<T> = Result<T, TopologyError>;
