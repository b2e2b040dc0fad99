//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - division-property search by quantum counting",
        style("divq").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  divq-hal          Backend abstraction (registers, gate primitives)");
    println!("  divq-core         Oracle, amplification, phase extraction, search");
    println!("  divq-adapter-sim  Local statevector simulator");
    println!("  divq-cli          Command-line interface");
    println!();
    println!("License:    {}", style("Apache-2.0").dim());
}
