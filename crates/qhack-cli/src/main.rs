//! qhack command-line interface.
//!
//! Every subcommand reads its puzzle input from stdin (or `--input`) and
//! prints a single answer on stdout. Logs and explanations go to stderr.
//!
//! ```text
//! $ echo "0,5" | qhack swaps
//! 4
//! $ echo "4,Y,I,Z,I,Y,X,I,I" | qhack measurements
//! 0.5
//! $ echo "0.8,-0.4,0.4,-0.2" | qhack givens
//! 1.2025284333582569,1.5707963267948966,0.4899573262537284
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{givens, measurements, swaps, version};

/// qhack - qubit routing, measurement grouping and Givens-angle solvers
#[derive(Parser)]
#[command(name = "qhack")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Count the SWAP gates a CNOT needs on the hardware topology
    Swaps {
        /// Input file holding `control,target` (stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,

        /// Topology file (YAML or JSON); the 9-qubit reference device if omitted
        #[arg(short, long, env = qhack_topology::TOPOLOGY_ENV)]
        topology: Option<String>,

        /// Print each search round and the route it found to stderr
        #[arg(long)]
        explain: bool,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Group Pauli words into shared measurements and print the compression ratio
    Measurements {
        /// Input file in `n,P,P,...` format (stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,

        /// List the measured settings and their members on stderr
        #[arg(long)]
        groups: bool,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Solve the Givens-rotation angles preparing amplitudes `a,b,c,d`
    Givens {
        /// Input file holding `a,b,c,d` (stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Swaps {
            input,
            topology,
            explain,
            format,
        } => swaps::execute(input.as_deref(), topology.as_deref(), explain, &format),

        Commands::Measurements {
            input,
            groups,
            format,
        } => measurements::execute(input.as_deref(), groups, &format),

        Commands::Givens { input, format } => givens::execute(input.as_deref(), &format),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").for_stderr().red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
