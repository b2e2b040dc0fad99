//! Search command implementation.

use anyhow::Result;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use divq_core::DivisionSearch;

use super::common::{ProblemArgs, print_result};

/// Execute the search command.
pub fn execute(args: &ProblemArgs, show_trace: bool, json: bool) -> Result<()> {
    let (multiset, config) = args.resolve()?;
    let backend = args.backend()?;

    if !json {
        println!(
            "{} Searching {} ({} counting qubits, {:?} readout)",
            style("→").cyan().bold(),
            style(&multiset).green(),
            config.counting_qubits,
            config.readout
        );
    }

    let search = DivisionSearch::new(&backend, &multiset, config)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    spinner.set_message("Running quantum counting...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));

    let result = search.run();
    spinner.finish_and_clear();

    print_result(&result?, show_trace, json)
}
