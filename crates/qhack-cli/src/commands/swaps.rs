//! Swaps command implementation.

use anyhow::{Context, Result};
use console::style;
use tracing::info;

use qhack_topology::SwapSearch;

use super::common::{is_json, load_topology, parse_gate_operands, read_input};

/// Execute the swaps command: print the SWAP count for one two-qubit gate.
pub fn execute(
    input: Option<&str>,
    topology: Option<&str>,
    explain: bool,
    format: &str,
) -> Result<()> {
    let json = is_json(format)?;
    let map = load_topology(topology)?;
    let (control, target) = parse_gate_operands(&read_input(input)?)?;
    info!(control, target, num_qubits = map.num_qubits(), "counting swaps");

    let report = SwapSearch::new(&map, control, target)?.run()?;

    if explain {
        eprintln!(
            "{} CNOT({control}, {target}) on {} qubits",
            style("→").for_stderr().cyan().bold(),
            map.num_qubits()
        );
        for (round, frontier) in report.frontiers.iter().enumerate() {
            let members: Vec<String> = frontier.iter().map(ToString::to_string).collect();
            eprintln!(
                "  round {}: frontier [{}]",
                style(round + 1).for_stderr().yellow(),
                members.join(", ")
            );
        }
        let hops: Vec<String> = report.route.iter().map(ToString::to_string).collect();
        eprintln!("  route: {}", style(hops.join(" -> ")).for_stderr().green());
    }

    if json {
        let json = serde_json::to_string_pretty(&report).context("JSON serialization failed")?;
        println!("{json}");
    } else {
        println!("{}", report.swaps);
    }
    Ok(())
}
