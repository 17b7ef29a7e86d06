//! Topology configuration files.
//!
//! A topology is described either by a named preset or by an explicit
//! adjacency table. YAML is the default format; files ending in `.json` are
//! read as JSON.
//!
//! ```yaml
//! name: heavy-hex-fragment
//! adjacency:
//!   0: [1]
//!   1: [0, 2]
//!   2: [1]
//! ```
//!
//! ```yaml
//! preset: linear-5
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::coupling::CouplingMap;
use crate::error::{TopologyError, TopologyResult};

/// Name of the built-in 9-qubit reference topology.
pub const DEFAULT_PRESET: &str = "qhack-9q";

/// Environment variable naming a topology file for the CLI.
pub const TOPOLOGY_ENV: &str = "QHACK_TOPOLOGY";

/// Largest qubit count a `linear-N`, `star-N` or `full-N` preset may ask for.
pub const MAX_PRESET_QUBITS: u32 = 1024;

/// On-disk description of a coupling map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologyConfig {
    /// Optional human-readable name.
    #[serde(default)]
    pub name: Option<String>,

    /// Built-in topology: `qhack-9q`, `linear-N`, `star-N` or `full-N`.
    #[serde(default)]
    pub preset: Option<String>,

    /// Explicit adjacency table, qubit index to neighbor list.
    #[serde(default)]
    pub adjacency: BTreeMap<u32, Vec<u32>>,
}

impl TopologyConfig {
    /// Configuration selecting a preset by name.
    pub fn preset(name: impl Into<String>) -> Self {
        Self {
            preset: Some(name.into()),
            ..Self::default()
        }
    }

    /// Parse a YAML document.
    pub fn from_yaml(source: &str) -> TopologyResult<Self> {
        serde_yaml_ng::from_str(source).map_err(|e| TopologyError::Config(e.to_string()))
    }

    /// Parse a JSON document.
    pub fn from_json(source: &str) -> TopologyResult<Self> {
        serde_json::from_str(source).map_err(|e| TopologyError::Config(e.to_string()))
    }

    /// Load a configuration file, choosing the format by extension.
    pub fn from_file<P: AsRef<Path>>(path: P) -> TopologyResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        let config = if is_json {
            Self::from_json(&contents)?
        } else {
            Self::from_yaml(&contents)?
        };
        config.validate()?;

        info!(path = %path.display(), name = ?config.name, "loaded topology config");
        Ok(config)
    }

    /// Check that exactly one of `preset` and `adjacency` is given.
    pub fn validate(&self) -> TopologyResult<()> {
        match (&self.preset, self.adjacency.is_empty()) {
            (Some(_), false) => Err(TopologyError::Config(
                "specify either a preset or an adjacency table, not both".into(),
            )),
            (None, true) => Err(TopologyError::Config(
                "topology needs a preset or an adjacency table".into(),
            )),
            _ => Ok(()),
        }
    }

    /// Build the coupling map this configuration describes.
    pub fn into_coupling_map(self) -> TopologyResult<CouplingMap> {
        self.validate()?;
        let map = match self.preset {
            Some(preset) => resolve_preset(&preset)?,
            None => CouplingMap::from_adjacency(&self.adjacency)?,
        };
        debug!(
            num_qubits = map.num_qubits(),
            num_edges = map.num_edges(),
            "built coupling map"
        );
        Ok(map)
    }
}

/// Look up a built-in topology by name.
pub fn resolve_preset(name: &str) -> TopologyResult<CouplingMap> {
    let lower = name.to_lowercase();
    if lower == DEFAULT_PRESET {
        return Ok(CouplingMap::qhack_9q());
    }

    let (family, size) = lower
        .rsplit_once('-')
        .ok_or_else(|| unknown_preset(name))?;
    let n: u32 = size.parse().map_err(|_| unknown_preset(name))?;
    if n > MAX_PRESET_QUBITS {
        return Err(TopologyError::Config(format!(
            "preset '{name}' asks for {n} qubits, at most {MAX_PRESET_QUBITS} are supported"
        )));
    }

    match family {
        "linear" => Ok(CouplingMap::linear(n)),
        "star" => Ok(CouplingMap::star(n)),
        "full" => Ok(CouplingMap::full(n)),
        _ => Err(unknown_preset(name)),
    }
}

fn unknown_preset(name: &str) -> TopologyError {
    TopologyError::Config(format!(
        "unknown preset '{name}'. Available: {DEFAULT_PRESET}, linear-N, star-N, full-N"
    ))
}
