//! Givens command implementation.

use anyhow::{Context, Result};
use tracing::info;

use qhack_givens::{givens_rotations, parse_amplitudes};

use super::common::{format_float, is_json, read_input};

/// Execute the givens command: print `theta_1,theta_2,theta_3` for the
/// amplitudes `a,b,c,d` on the input.
pub fn execute(input: Option<&str>, format: &str) -> Result<()> {
    let json = is_json(format)?;
    let amps = parse_amplitudes(&read_input(input)?).context("Failed to parse amplitudes")?;
    let angles = givens_rotations(&amps)?;
    info!(?amps, ?angles, "solved rotation angles");

    if json {
        let json = serde_json::to_string_pretty(&angles).context("JSON serialization failed")?;
        println!("{json}");
    } else {
        let fields: Vec<String> = angles.to_array().into_iter().map(format_float).collect();
        println!("{}", fields.join(","));
    }
    Ok(())
}
