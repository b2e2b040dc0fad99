//! divq Command-Line Interface
//!
//! Finds the division-property exponent of a multiset with quantum counting
//! on the local statevector simulator.
//!
//! ```text
//! $ divq search
//! → Searching {0x1, 0x1, 0x1, 0x3, 0x3, 0x5} over 3 bits (6 counting qubits, BasisState readout)
//! Division Property holds for k = 1 when u = 04
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::common::ProblemArgs;
use commands::{classical, count, search, version};

/// divq - division-property search by quantum counting
#[derive(Parser)]
#[command(name = "divq")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the division-property exponent k and its witness u
    Search {
        #[command(flatten)]
        problem: ProblemArgs,

        /// Show every candidate u with its estimated count
        #[arg(long)]
        trace: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Estimate the count for a single control parameter u
    Count {
        /// Control parameter (decimal or 0x-prefixed hex)
        #[arg(short, long, value_parser = parse_u64)]
        u: u64,

        #[command(flatten)]
        problem: ProblemArgs,

        /// Print the estimate as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the search with exact classical counts
    Classical {
        #[command(flatten)]
        problem: ProblemArgs,

        /// Show every candidate u with its exact count
        #[arg(long)]
        trace: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

/// Parse `u` as decimal or `0x` hex.
fn parse_u64(s: &str) -> Result<u64, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid control parameter '{s}': {e}"))
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

    // Execute command; no subcommand runs the default search
    let result = match cli.command {
        None => search::execute(&ProblemArgs::default(), false, false),

        Some(Commands::Search {
            problem,
            trace,
            json,
        }) => search::execute(&problem, trace, json),

        Some(Commands::Count { u, problem, json }) => count::execute(&problem, u, json),

        Some(Commands::Classical {
            problem,
            trace,
            json,
        }) => classical::execute(&problem, trace, json),

        Some(Commands::Version) => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
