//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - qubit routing, measurement grouping and Givens-angle solvers",
        style("qhack").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  qhack-topology  Coupling maps and SWAP-count search");
    println!("  qhack-measure   Pauli-word measurement grouping");
    println!("  qhack-givens    Givens-rotation angles for state preparation");
    println!("  qhack-cli       Command-line interface");
    println!();
    println!("License: {}", style("Apache-2.0").dim());
}
