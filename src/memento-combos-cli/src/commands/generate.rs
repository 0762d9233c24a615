//! Combo SQL generation command handler
//!
//! Reads the synergy spreadsheet, resolves every label through the loc
//! mapping and writes a single multi-row INSERT for SpecificMementoCombo.

use crate::config::{resolve_path, Config};
use anyhow::{bail, Context, Result};
use memento_combos::{combo, sheet, sql, ComboSet, LocMapping};
use std::path::{Path, PathBuf};
use tracing::info;

/// Default output when neither the argument nor config names one
pub const DEFAULT_OUTPUT: &str = "gen_sql.sql";

/// Arguments for `generate`
#[derive(Debug, Default)]
pub struct GenerateArgs {
    pub input: Option<PathBuf>,
    pub loc_map: Option<PathBuf>,
    pub sheet: Option<String>,
    pub output: Option<PathBuf>,
    pub strict: bool,
}

/// Handle the generate command
pub fn handle(args: GenerateArgs, config: &Config) -> Result<()> {
    let input = resolve_path(args.input, config.spreadsheet.as_ref(), "spreadsheet")?;
    let loc_map = resolve_path(args.loc_map, config.loc_map.as_ref(), "loc mapping")?;
    let output = args
        .output
        .or_else(|| config.output.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
    let sheet_name = args.sheet.as_deref().or(config.sheet.as_deref());

    let combos = run(&input, sheet_name, &loc_map, &output)?;

    super::print_issue_summary(&combos.issues);
    if args.strict && !combos.issues.is_empty() {
        bail!("{} issues while generating combos", combos.issues.len());
    }

    Ok(())
}

/// Generate combos and write the SQL file
pub fn run(
    input: &Path,
    sheet_name: Option<&str>,
    loc_map: &Path,
    output: &Path,
) -> Result<ComboSet> {
    let mapping = LocMapping::load(loc_map)
        .with_context(|| format!("Failed to load loc mapping from {}", loc_map.display()))?;
    let inverted = mapping.invert();
    println!(
        "Loaded {} loc keys ({} lookup labels)",
        mapping.len(),
        inverted.len()
    );

    println!("Reading spreadsheet {}...", input.display());
    let rows = sheet::read_rows(input, sheet_name)
        .with_context(|| format!("Failed to read spreadsheet {}", input.display()))?;
    let sections = sheet::split_sections(&rows);
    info!(rows = rows.len(), sections = sections.len(), "Spreadsheet loaded");

    let combos = combo::generate(&sections, &inverted);

    sql::write_insert(output, combos.rows())
        .with_context(|| format!("Failed to write SQL to {}", output.display()))?;

    for (group, count) in &combos.group_counts {
        println!("  {}: {} rows", group, count);
    }
    println!(
        "Wrote {} combos from {} sections to {}",
        combos.len(),
        sections.len(),
        output.display()
    );

    Ok(combos)
}
