//! Classical reference command implementation.

use anyhow::Result;

use divq_core::classical_search;

use super::common::{ProblemArgs, print_result};

/// Execute the classical search with exact counts.
pub fn execute(args: &ProblemArgs, show_trace: bool, json: bool) -> Result<()> {
    let (multiset, _) = args.resolve()?;
    let result = classical_search(&multiset);
    print_result(&result, show_trace, json)
}
