//! Shared helpers for CLI commands.

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use qhack_topology::{CouplingMap, TopologyConfig};

/// Read the whole input from a file, or from stdin when no path is given.
pub fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            if !Path::new(path).exists() {
                anyhow::bail!("File not found: {path}");
            }
            fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Load the coupling map from a topology file, or the 9-qubit reference
/// device when no file is given.
pub fn load_topology(path: Option<&str>) -> Result<CouplingMap> {
    let config = match path {
        Some(path) => TopologyConfig::from_file(path)
            .with_context(|| format!("Failed to load topology: {path}"))?,
        None => {
            debug!("no topology file given, using reference device");
            TopologyConfig::preset(qhack_topology::DEFAULT_PRESET)
        }
    };
    Ok(config.into_coupling_map()?)
}

/// Parse `control,target` into a pair of qubit indices.
pub fn parse_gate_operands(input: &str) -> Result<(u32, u32)> {
    let fields: Vec<&str> = input.trim().split(',').map(str::trim).collect();
    let [control, target] = fields.as_slice() else {
        anyhow::bail!(
            "Expected 'control,target', got {} field(s): '{}'",
            fields.len(),
            input.trim()
        );
    };
    let control = control
        .parse::<u32>()
        .with_context(|| format!("Invalid control qubit: '{control}'"))?;
    let target = target
        .parse::<u32>()
        .with_context(|| format!("Invalid target qubit: '{target}'"))?;
    Ok((control, target))
}

/// Format a float the way Python's `repr` does.
///
/// Rust's `{:?}` already picks the shortest round-trip digits and the same
/// switch to scientific notation (below 1e-4, from 1e16 up). Python writes
/// the exponent signed and at least two digits wide: `1e-05`, `1e+16`.
pub fn format_float(value: f64) -> String {
    let shortest = format!("{value:?}");
    match shortest.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => shortest,
    }
}

/// Parse an output format name.
pub fn is_json(format: &str) -> Result<bool> {
    match format {
        "json" => Ok(true),
        "text" => Ok(false),
        other => anyhow::bail!("Unknown output format '{other}'. Available: text, json"),
    }
}
