//! Loc key extraction from the game's SQLite databases.
//!
//! The frontend database lists the loc keys of every memento, leader and
//! civilization. The localization database holds the translated text for
//! each key, per language.

use crate::error::Result;
use crate::issue::Issue;
use crate::loc::LocMapping;
use rusqlite::{params, Connection, OpenFlags};
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

/// Default language pulled from `LocalizedText`
pub const DEFAULT_LANGUAGE: &str = "en_US";

/// Frontend tables scanned for loc keys, in scan order
pub const NAME_TABLES: &[&str] = &["Mementos", "Leaders", "Civilizations"];

/// Mapping built from the game databases
#[derive(Debug, Clone, Default)]
pub struct LocExtraction {
    pub mapping: LocMapping,
    /// Keys with no translation in the chosen language
    pub missing: Vec<Issue>,
}

/// Open a game database without risking writes to it
pub fn open_read_only<P: AsRef<Path>>(path: P) -> Result<Connection> {
    let conn = Connection::open_with_flags(
        path.as_ref(),
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?;
    Ok(conn)
}

/// Collect the `Name` loc key of every row in the given tables
pub fn collect_name_keys(conn: &Connection, tables: &[&str]) -> Result<Vec<String>> {
    let mut keys = Vec::new();

    for table in tables {
        // Table names come from a fixed list, not user input
        let mut stmt = conn.prepare(&format!("SELECT Name FROM {}", table))?;
        let names = stmt.query_map([], |row| row.get::<_, Option<String>>(0))?;

        let before = keys.len();
        for name in names {
            if let Some(name) = name? {
                keys.push(name);
            }
        }
        info!("Collected {} names from {}", keys.len() - before, table);
    }

    Ok(keys)
}

/// Load every translation for one language
pub fn load_translations(conn: &Connection, language: &str) -> Result<HashMap<String, String>> {
    let mut stmt = conn.prepare("SELECT Tag, Text FROM LocalizedText WHERE Language = ?1")?;
    let rows = stmt.query_map(params![language], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, Option<String>>(1)?))
    })?;

    let mut translations = HashMap::new();
    for row in rows {
        let (tag, text) = row?;
        translations.insert(tag, text.unwrap_or_default());
    }

    info!("Loaded {} {} translations", translations.len(), language);
    Ok(translations)
}

/// Pair loc keys with their translations
///
/// Keys without a translation stay in the mapping with empty text and are
/// reported as missing.
pub fn build_mapping(keys: &[String], translations: &HashMap<String, String>) -> LocExtraction {
    let mut extraction = LocExtraction::default();

    for key in keys {
        extraction.mapping.add_key(key.as_str());
    }

    let untranslated: Vec<String> = extraction
        .mapping
        .keys()
        .filter(|key| !translations.contains_key(*key))
        .map(str::to_string)
        .collect();

    for key in keys {
        if let Some(text) = translations.get(key) {
            extraction.mapping.insert(key.as_str(), text.as_str());
        }
    }

    for key in untranslated {
        warn!("No translation for {}", key);
        extraction.missing.push(Issue::MissingTranslation { key });
    }

    extraction
}

/// Build the loc mapping straight from the two game databases
pub fn extract<P: AsRef<Path>, Q: AsRef<Path>>(
    frontend_db: P,
    localization_db: Q,
    language: &str,
) -> Result<LocExtraction> {
    let frontend = open_read_only(frontend_db)?;
    let keys = collect_name_keys(&frontend, NAME_TABLES)?;

    let localization = open_read_only(localization_db)?;
    let translations = load_translations(&localization, language)?;

    Ok(build_mapping(&keys, &translations))
}
