//! SWAP-count search over a coupling map.
//!
//! Given a two-qubit gate on `(control, target)`, the search expands rings
//! of qubits outward from `control`. Round 1 inspects the neighbors of
//! `control` itself; every round whose frontier has no neighbor equal to
//! `target` costs 2 (one SWAP to move the operand, one to restore the
//! wiring afterwards) and the next frontier becomes the neighbors of the
//! current one.
//!
//! The count for a pair at hop distance `d` is therefore `2 * (d - 1)`.
//!
//! ```
//! use qhack_topology::{min_swaps, CouplingMap};
//!
//! let map = CouplingMap::qhack_9q();
//! assert_eq!(min_swaps(&map, 0, 1).unwrap(), 0);
//! assert_eq!(min_swaps(&map, 0, 5).unwrap(), 4);
//! ```

use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;
use serde::Serialize;
use tracing::{debug, trace};

use crate::coupling::CouplingMap;
use crate::error::{TopologyError, TopologyResult};

/// Cost of one failed expansion round: swap out, swap back.
pub const SWAPS_PER_ROUND: u32 = 2;

/// Outcome of a SWAP-count search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwapReport {
    /// Control qubit of the gate.
    pub control: u32,
    /// Target qubit of the gate.
    pub target: u32,
    /// Total SWAP gates required.
    pub swaps: u32,
    /// Frontier inspected in each round, in order. The last entry is the
    /// frontier in which `target` was found as a neighbor.
    pub frontiers: Vec<Vec<u32>>,
    /// Qubits from `control` to `target` along the links the search
    /// followed. Always one hop longer than the number of rounds.
    pub route: Vec<u32>,
}

impl SwapReport {
    /// Number of rounds the search ran, including the successful one.
    pub fn rounds(&self) -> usize {
        self.frontiers.len()
    }
}

/// Ring-by-ring search for the SWAP cost of one two-qubit gate.
///
/// Frontier members already expanded in an earlier round are not expanded
/// again. This only shrinks the frontiers: a qubit revisited through a
/// back-edge can never expose `target` earlier than its first visit did.
///
/// Every qubit remembers the frontier member it was first reached from, so
/// the route to `target` falls out of the search without a second pass.
#[derive(Debug)]
pub struct SwapSearch<'a> {
    map: &'a CouplingMap,
    control: u32,
    target: u32,
}

impl<'a> SwapSearch<'a> {
    /// Prepare a search, validating both operands against `map`.
    pub fn new(map: &'a CouplingMap, control: u32, target: u32) -> TopologyResult<Self> {
        map.check_qubit(control)?;
        map.check_qubit(target)?;
        if control == target {
            return Err(TopologyError::CoincidentQubits(control));
        }
        Ok(Self {
            map,
            control,
            target,
        })
    }

    /// Run the search to completion.
    ///
    /// At most `num_qubits` rounds are explored; a target not found by then
    /// is reported as [`TopologyError::TargetUnreachable`].
    pub fn run(&self) -> TopologyResult<SwapReport> {
        let mut frontier = vec![self.control];
        // The control is its own parent and ends every route walk.
        let mut parents: FxHashMap<u32, u32> = FxHashMap::default();
        parents.insert(self.control, self.control);

        let mut frontiers = Vec::new();
        let mut swaps = 0u32;

        for round in 1..=self.map.num_qubits() {
            trace!(round, ?frontier, swaps, "expanding frontier");

            let mut next = Vec::new();
            let mut reached_from = None;
            'scan: for &qubit in &frontier {
                for neighbor in self.map.neighbors(qubit) {
                    if neighbor == self.target {
                        reached_from = Some(qubit);
                        break 'scan;
                    }
                    if let Entry::Vacant(slot) = parents.entry(neighbor) {
                        slot.insert(qubit);
                        next.push(neighbor);
                    }
                }
            }
            frontiers.push(std::mem::take(&mut frontier));

            if let Some(last_hop) = reached_from {
                let route = self.walk_back(&parents, last_hop);
                debug!(
                    control = self.control,
                    target = self.target,
                    swaps,
                    rounds = round,
                    ?route,
                    "target adjacent to frontier"
                );
                return Ok(SwapReport {
                    control: self.control,
                    target: self.target,
                    swaps,
                    frontiers,
                    route,
                });
            }

            if next.is_empty() {
                break;
            }
            swaps += SWAPS_PER_ROUND;
            frontier = next;
        }

        Err(TopologyError::TargetUnreachable {
            control: self.control,
            target: self.target,
        })
    }

    /// Follow parent links from `last_hop` back to the control.
    fn walk_back(&self, parents: &FxHashMap<u32, u32>, last_hop: u32) -> Vec<u32> {
        let mut route = vec![self.target, last_hop];
        let mut hop = last_hop;
        while let Some(&parent) = parents.get(&hop) {
            if parent == hop {
                break;
            }
            route.push(parent);
            hop = parent;
        }
        route.reverse();
        route
    }
}

/// Minimum number of SWAP gates needed to make `control` and `target`
/// adjacent on `map`.
///
/// Returns 0 for adjacent qubits, otherwise 2 for every failed ring of
/// expansion around `control`.
///
/// # Errors
///
/// - [`TopologyError::InvalidQubitIndex`] if either operand is not in `map`.
/// - [`TopologyError::CoincidentQubits`] if both operands are the same qubit.
/// - [`TopologyError::TargetUnreachable`] if `target` lies in a different
///   connected component.
pub fn min_swaps(map: &CouplingMap, control: u32, target: u32) -> TopologyResult<u32> {
    SwapSearch::new(map, control, target)?
        .run()
        .map(|report| report.swaps)
}
