//! Hardware coupling maps.
//!
//! A [`CouplingMap`] records which pairs of physical qubits can interact
//! directly. Qubits are numbered `0..n`, links are undirected and a qubit is
//! never its own neighbor.
//!
//! # Example
//!
//! ```
//! use qhack_topology::CouplingMap;
//!
//! let map = CouplingMap::qhack_9q();
//! assert!(map.is_connected(1, 4));
//! assert!(!map.is_connected(0, 2));
//! assert_eq!(map.distance(0, 5), Some(3));
//! ```

use std::collections::BTreeMap;

use crate::error::{TopologyError, TopologyResult};

/// Neighbor lists of the 9-qubit reference device, indexed by qubit.
const QHACK_9Q_LINKS: [&[u32]; 9] = [
    &[1],
    &[0, 2, 3, 4],
    &[1],
    &[1],
    &[1, 5, 7, 8],
    &[4, 6],
    &[5, 7],
    &[4, 6],
    &[4],
];

/// Qubit connectivity of a device.
///
/// Neighbor order is part of the map: the SWAP search scans neighbors in
/// this order, which fixes the frontiers and the route it reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CouplingMap {
    /// `links[q]` holds the neighbors of qubit `q`, without duplicates.
    links: Vec<Vec<u32>>,
}

impl CouplingMap {
    /// A device of `num_qubits` isolated qubits.
    pub fn new(num_qubits: u32) -> Self {
        Self {
            links: vec![Vec::new(); num_qubits as usize],
        }
    }

    /// Link two qubits in both directions.
    ///
    /// Linking an already linked pair is a no-op.
    pub fn add_edge(&mut self, a: u32, b: u32) -> TopologyResult<()> {
        self.check_qubit(a)?;
        self.check_qubit(b)?;
        if a == b {
            return Err(TopologyError::SelfLoop(a));
        }
        if !self.is_connected(a, b) {
            self.links[a as usize].push(b);
            self.links[b as usize].push(a);
        }
        Ok(())
    }

    /// Build a coupling map from an adjacency table.
    ///
    /// Keys must be exactly `0..n`. Every listed neighbor must itself be a
    /// key, must not be the qubit itself, and must list the qubit back.
    /// Neighbor order follows the table; repeated entries are dropped.
    pub fn from_adjacency(table: &BTreeMap<u32, Vec<u32>>) -> TopologyResult<Self> {
        let num_qubits = match table.keys().next_back() {
            Some(&max) => max + 1,
            None => 0,
        };
        if let Some(missing) = (0..num_qubits).find(|q| !table.contains_key(q)) {
            return Err(TopologyError::NonContiguousQubits {
                expected: num_qubits,
                missing,
            });
        }

        for (&qubit, neighbors) in table {
            for &neighbor in neighbors {
                if neighbor == qubit {
                    return Err(TopologyError::SelfLoop(qubit));
                }
                let back = table
                    .get(&neighbor)
                    .ok_or(TopologyError::InvalidQubitIndex {
                        qubit: neighbor,
                        num_qubits,
                    })?;
                if !back.contains(&qubit) {
                    return Err(TopologyError::AsymmetricAdjacency {
                        from: qubit,
                        to: neighbor,
                    });
                }
            }
        }

        // Keys are contiguous, so value order is qubit order.
        let links = table
            .values()
            .map(|neighbors| {
                let mut unique = Vec::with_capacity(neighbors.len());
                for &n in neighbors {
                    if !unique.contains(&n) {
                        unique.push(n);
                    }
                }
                unique
            })
            .collect();
        Ok(Self { links })
    }

    /// The 9-qubit reference device.
    ///
    /// ```text
    ///   0   2   3
    ///    \  |  /
    ///       1
    ///       |
    ///   8 - 4 - 5
    ///       |   |
    ///       7 - 6
    /// ```
    pub fn qhack_9q() -> Self {
        Self {
            links: QHACK_9Q_LINKS.iter().map(|n| n.to_vec()).collect(),
        }
    }

    /// Qubits in a chain: `0 - 1 - ... - (n-1)`.
    pub fn linear(n: u32) -> Self {
        let links = (0..n)
            .map(|q| {
                let left = q.checked_sub(1);
                let right = (q + 1 < n).then_some(q + 1);
                left.into_iter().chain(right).collect()
            })
            .collect();
        Self { links }
    }

    /// Qubit 0 as a hub linked to every other qubit.
    pub fn star(n: u32) -> Self {
        let links = (0..n)
            .map(|q| if q == 0 { (1..n).collect() } else { vec![0] })
            .collect();
        Self { links }
    }

    /// Every qubit linked to every other qubit.
    pub fn full(n: u32) -> Self {
        let links = (0..n)
            .map(|q| (0..n).filter(|&p| p != q).collect())
            .collect();
        Self { links }
    }

    /// Number of physical qubits.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        self.links.len() as u32
    }

    /// Number of undirected links.
    pub fn num_edges(&self) -> usize {
        self.links.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Each undirected link once, as `(lower, higher)`.
    pub fn edges(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.links.iter().zip(0u32..).flat_map(|(neighbors, q)| {
            neighbors
                .iter()
                .copied()
                .filter(move |&n| n > q)
                .map(move |n| (q, n))
        })
    }

    /// Whether `a` and `b` share a link.
    #[inline]
    pub fn is_connected(&self, a: u32, b: u32) -> bool {
        self.links
            .get(a as usize)
            .is_some_and(|neighbors| neighbors.contains(&b))
    }

    /// Whether `qubit` is a node of this map.
    #[inline]
    pub fn contains(&self, qubit: u32) -> bool {
        qubit < self.num_qubits()
    }

    /// Fail with [`TopologyError::InvalidQubitIndex`] unless `qubit` is a node.
    pub fn check_qubit(&self, qubit: u32) -> TopologyResult<()> {
        if self.contains(qubit) {
            Ok(())
        } else {
            Err(TopologyError::InvalidQubitIndex {
                qubit,
                num_qubits: self.num_qubits(),
            })
        }
    }

    /// Neighbors of `qubit` in map order. Empty for unknown qubits.
    pub fn neighbors(&self, qubit: u32) -> impl Iterator<Item = u32> + '_ {
        self.links.get(qubit as usize).into_iter().flatten().copied()
    }

    /// Adjacency table keyed by qubit, in the same shape `from_adjacency`
    /// accepts.
    pub fn adjacency_table(&self) -> BTreeMap<u32, Vec<u32>> {
        (0u32..).zip(self.links.iter().cloned()).collect()
    }

    /// Hop count between two qubits, `None` if either is unknown or they
    /// sit in different components.
    pub fn distance(&self, from: u32, to: u32) -> Option<u32> {
        if !self.contains(from) || !self.contains(to) {
            return None;
        }

        let mut seen = vec![false; self.links.len()];
        seen[from as usize] = true;
        let mut layer = vec![from];
        let mut hops = 0;

        while !layer.is_empty() {
            if layer.contains(&to) {
                return Some(hops);
            }
            hops += 1;
            layer = layer
                .iter()
                .flat_map(|&q| self.neighbors(q))
                .filter(|&n| !std::mem::replace(&mut seen[n as usize], true))
                .collect();
        }
        None
    }
}
