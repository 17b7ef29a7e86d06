//! Measurements command implementation.

use anyhow::{Context, Result};
use console::style;
use tracing::info;

use qhack_measure::{compression_ratio, group_measurements, parse_hamiltonian};

use super::common::{format_float, is_json, read_input};

/// Execute the measurements command: print the compression ratio achieved
/// by grouping the input Pauli words.
pub fn execute(input: Option<&str>, show_groups: bool, format: &str) -> Result<()> {
    let json = is_json(format)?;
    let words = parse_hamiltonian(&read_input(input)?).context("Failed to parse Hamiltonian")?;
    let plan = group_measurements(&words)?;
    let ratio = compression_ratio(&words, &plan)?;
    info!(words = words.len(), groups = plan.len(), "grouped Pauli words");

    if show_groups {
        for group in &plan.groups {
            let members: Vec<String> = group
                .members
                .iter()
                .map(|&m| words[m].to_string())
                .collect();
            eprintln!(
                "  {} <- {}",
                style(&group.setting).for_stderr().cyan(),
                members.join(", ")
            );
        }
    }

    if json {
        let summary = serde_json::json!({
            "words": words,
            "compression_ratio": ratio,
            "groups": plan.groups,
        });
        let json = serde_json::to_string_pretty(&summary).context("JSON serialization failed")?;
        println!("{json}");
    } else {
        println!("{}", format_float(ratio));
    }
    Ok(())
}
