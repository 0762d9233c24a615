//! SQL rendering for the combo table, and the reverse scan used by
//! `check-dupes`.

use crate::combo::ComboRow;
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub const TABLE_NAME: &str = "SpecificMementoCombo";

pub const COLUMNS: &[&str] = &[
    "ComboID",
    "LeaderType",
    "CivilizationType",
    "MementoTypePrimary",
    "MementoTypeSecondary",
    "AgeType",
];

/// Quote a string literal, doubling embedded quotes
pub fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

fn quote_opt(value: Option<&str>) -> String {
    value.map_or_else(|| "NULL".to_string(), quote)
}

/// Render one row as a VALUES tuple
pub fn tuple(row: &ComboRow) -> String {
    format!(
        "({}, {}, {}, {}, {}, {})",
        quote(&row.combo_id),
        quote_opt(row.leader.as_deref()),
        quote_opt(row.civilization.as_deref()),
        quote(&row.memento_primary),
        quote(&row.memento_secondary),
        quote_opt(row.age.as_deref()),
    )
}

/// Render all rows as a single multi-row INSERT
pub fn render_insert(rows: &[ComboRow]) -> Result<String> {
    if rows.is_empty() {
        return Err(Error::NoRows);
    }

    let values: Vec<String> = rows.iter().map(tuple).collect();
    Ok(format!(
        "INSERT INTO {}({}) VALUES\n{};",
        TABLE_NAME,
        COLUMNS.join(", "),
        values.join(",\n")
    ))
}

/// Render and write the INSERT statement
pub fn write_insert<P: AsRef<Path>>(path: P, rows: &[ComboRow]) -> Result<()> {
    let sql = render_insert(rows)?;
    fs::write(path.as_ref(), sql)?;
    Ok(())
}

/// First quoted literal on a line, with doubled quotes collapsed
fn first_literal(line: &str) -> Option<String> {
    let start = line.find('\'')? + 1;
    let mut chars = line[start..].chars().peekable();
    let mut value = String::new();

    while let Some(c) = chars.next() {
        if c != '\'' {
            value.push(c);
            continue;
        }
        if chars.peek() == Some(&'\'') {
            chars.next();
            value.push('\'');
            continue;
        }
        return Some(value);
    }

    // Unterminated literal
    None
}

/// Combo ids from a generated SQL file, one per VALUES line
pub fn scan_combo_ids(sql: &str) -> Vec<String> {
    sql.lines()
        .filter(|line| !line.contains("INSERT INTO"))
        .filter_map(first_literal)
        .collect()
}

/// An id that appears more than once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateId {
    pub combo_id: String,
    pub occurrences: usize,
}

/// Ids seen more than once, ordered by where the first repeat happens
pub fn find_duplicates(ids: &[String]) -> Vec<DuplicateId> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for id in ids {
        let count = counts.entry(id.as_str()).or_default();
        *count += 1;
        if *count == 2 {
            order.push(id.as_str());
        }
    }

    order
        .into_iter()
        .map(|id| DuplicateId {
            combo_id: id.to_string(),
            occurrences: counts[id],
        })
        .collect()
}

/// Scan a generated SQL file for repeated combo ids
pub fn check_file<P: AsRef<Path>>(path: P) -> Result<Vec<DuplicateId>> {
    let sql = fs::read_to_string(path.as_ref())?;
    Ok(find_duplicates(&scan_combo_ids(&sql)))
}
