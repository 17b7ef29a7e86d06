//! Qubit topologies and SWAP-count search.
//!
//! This crate answers one routing question: how many SWAP gates does a
//! two-qubit gate on `(control, target)` cost on a given hardware coupling
//! map, when every SWAP that moves an operand is paired with a SWAP that
//! restores the wiring afterwards.
//!
//! # Overview
//!
//! - [`CouplingMap`]: undirected, irreflexive qubit connectivity graph kept
//!   as ordered neighbor lists. [`CouplingMap::qhack_9q`] is the 9-qubit
//!   reference device.
//! - [`min_swaps`] / [`SwapSearch`]: ring-by-ring expansion from the control
//!   qubit, 2 SWAPs per ring that does not reach the target.
//! - [`TopologyConfig`]: YAML/JSON topology files and named presets.
//!
//! # Example
//!
//! ```rust
//! use qhack_topology::{min_swaps, CouplingMap, SwapSearch};
//!
//! let map = CouplingMap::qhack_9q();
//! assert_eq!(min_swaps(&map, 0, 2).unwrap(), 2);
//!
//! let report = SwapSearch::new(&map, 0, 5).unwrap().run().unwrap();
//! assert_eq!(report.swaps, 4);
//! assert_eq!(report.rounds(), 3);
//! assert_eq!(report.route, vec![0, 1, 4, 5]);
//! ```

pub mod config;
pub mod coupling;
pub mod error;
pub mod swaps;

pub use config::{DEFAULT_PRESET, MAX_PRESET_QUBITS, TOPOLOGY_ENV, TopologyConfig, resolve_preset};
pub use coupling::CouplingMap;
pub use error::{TopologyError, TopologyResult};
pub use swaps::{SWAPS_PER_ROUND, SwapReport, SwapSearch, min_swaps};
