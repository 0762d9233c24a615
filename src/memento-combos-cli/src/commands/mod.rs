//! Command handlers for mementos CLI
//!
//! Each subcommand has its own module with handler functions.

pub mod check_dupes;
pub mod configure;
pub mod extract_loc;
pub mod generate;

use memento_combos::Issue;
use std::collections::BTreeMap;

/// Print a per-kind count of recorded issues
pub(crate) fn print_issue_summary(issues: &[Issue]) {
    if issues.is_empty() {
        return;
    }

    let mut by_kind: BTreeMap<&str, usize> = BTreeMap::new();
    for issue in issues {
        *by_kind.entry(issue.kind()).or_default() += 1;
    }

    println!("{} issues:", issues.len());
    for (kind, count) in by_kind {
        println!("  {:<22} {}", kind, count);
    }
}
