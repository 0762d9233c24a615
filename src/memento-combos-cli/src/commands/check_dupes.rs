//! Duplicate combo id check for generated SQL files

use crate::config::Config;
use anyhow::{bail, Context, Result};
use memento_combos::DuplicateId;
use std::path::{Path, PathBuf};

/// Handle the check-dupes command
pub fn handle(input: Option<PathBuf>, config: &Config) -> Result<()> {
    let input = input
        .or_else(|| config.output.clone())
        .unwrap_or_else(|| PathBuf::from(super::generate::DEFAULT_OUTPUT));

    let dupes = check(&input)?;
    if !dupes.is_empty() {
        bail!("{} duplicate combo ids in {}", dupes.len(), input.display());
    }

    Ok(())
}

/// Scan a SQL file and print every repeated combo id
pub fn check(input: &Path) -> Result<Vec<DuplicateId>> {
    let dupes = memento_combos::check_file(input)
        .with_context(|| format!("Failed to check {}", input.display()))?;

    println!("Checked {}", input.display());
    if dupes.is_empty() {
        println!("No duplicates found");
    }
    for dupe in &dupes {
        println!("  {} (x{})", dupe.combo_id, dupe.occurrences);
    }

    Ok(dupes)
}
