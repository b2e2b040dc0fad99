//! Count command implementation.

use anyhow::Result;
use console::style;

use divq_core::QuantumCounter;

use super::common::ProblemArgs;

/// Execute the count command for a single control parameter.
pub fn execute(args: &ProblemArgs, u: u64, json: bool) -> Result<()> {
    let (multiset, config) = args.resolve()?;
    let backend = args.backend()?;

    let counter = QuantumCounter::new(&backend, &multiset, config)?;
    let estimate = counter.estimate(u)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&estimate)?);
        return Ok(());
    }

    let parity = if estimate.is_odd() { "odd" } else { "even" };
    println!(
        "u = {}: p_val = {}, count ≈ {:.4} (rounded {}, {})",
        style(format!("{u:#04x}")).cyan(),
        estimate.phase,
        estimate.count,
        style(estimate.rounded()).yellow().bold(),
        parity
    );
    println!("  exact count: {}", multiset.exact_count(u));
    Ok(())
}
