//! Loc mapping extraction command handler
//!
//! Reads loc keys from the frontend database and their translations from the
//! localization database, then writes the mapping JSON used by `generate`.

use crate::config::{resolve_path, Config};
use anyhow::{bail, Context, Result};
use memento_combos::gamedb;
use std::path::{Path, PathBuf};
use tracing::info;

/// Default output when neither the argument nor config names one
pub const DEFAULT_LOC_MAP: &str = "loc_mapper.json";

/// Arguments for `extract-loc`
#[derive(Debug, Default)]
pub struct ExtractArgs {
    pub frontend_db: Option<PathBuf>,
    pub localization_db: Option<PathBuf>,
    pub language: Option<String>,
    pub output: Option<PathBuf>,
    pub strict: bool,
}

/// Handle the extract-loc command
pub fn handle(args: ExtractArgs, config: &Config) -> Result<()> {
    let frontend_db = resolve_path(
        args.frontend_db,
        config.frontend_db.as_ref(),
        "frontend database",
    )?;
    let localization_db = resolve_path(
        args.localization_db,
        config.localization_db.as_ref(),
        "localization database",
    )?;
    let output = args
        .output
        .or_else(|| config.loc_map.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOC_MAP));
    let language = args.language.as_deref().unwrap_or(config.language());

    let missing = run(&frontend_db, &localization_db, language, &output)?;

    super::print_issue_summary(&missing);
    if args.strict && !missing.is_empty() {
        bail!("{} keys have no {} translation", missing.len(), language);
    }

    Ok(())
}

/// Extract and write the mapping, returning the untranslated-key issues
pub fn run(
    frontend_db: &Path,
    localization_db: &Path,
    language: &str,
    output: &Path,
) -> Result<Vec<memento_combos::Issue>> {
    println!("Reading loc keys from {}...", frontend_db.display());
    println!("Reading {} translations from {}...", language, localization_db.display());

    let extraction = gamedb::extract(frontend_db, localization_db, language)
        .context("Failed to extract loc mapping from game databases")?;

    extraction
        .mapping
        .save(output)
        .with_context(|| format!("Failed to write loc mapping to {}", output.display()))?;

    info!(
        keys = extraction.mapping.len(),
        missing = extraction.missing.len(),
        "Loc mapping extracted"
    );
    println!(
        "Wrote {} loc keys ({} untranslated) to {}",
        extraction.mapping.len(),
        extraction.mapping.untranslated(),
        output.display()
    );

    Ok(extraction.missing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use memento_combos::LocMapping;
    use rusqlite::Connection;
    use tempfile::TempDir;

    fn create_databases(dir: &TempDir) -> (PathBuf, PathBuf) {
        let frontend = dir.path().join("frontend-copy.sqlite");
        let localization = dir.path().join("localization-copy.sqlite");

        Connection::open(&frontend)
            .unwrap()
            .execute_batch(
                r#"
                CREATE TABLE Mementos (MementoType TEXT, Tier TEXT, Unlock TEXT, Name TEXT);
                CREATE TABLE Leaders (LeaderType TEXT, Domain TEXT, Name TEXT);
                CREATE TABLE Civilizations (CivilizationType TEXT, Domain TEXT, Name TEXT);
                INSERT INTO Mementos VALUES ('MEMENTO_FOUNDATION_CROWN', 'A', NULL, 'LOC_MEMENTO_FOUNDATION_CROWN_NAME');
                INSERT INTO Leaders VALUES ('LEADER_AMINA', 'StandardLeaders', 'LOC_LEADER_AMINA_NAME');
                INSERT INTO Civilizations VALUES ('CIVILIZATION_AKSUM', 'AntiquityCivilizations', 'LOC_CIVILIZATION_AKSUM_NAME');
                "#,
            )
            .unwrap();

        Connection::open(&localization)
            .unwrap()
            .execute_batch(
                r#"
                CREATE TABLE LocalizedText (Language TEXT, Tag TEXT, Text TEXT);
                INSERT INTO LocalizedText VALUES
                    ('en_US', 'LOC_MEMENTO_FOUNDATION_CROWN_NAME', 'Crown'),
                    ('en_US', 'LOC_LEADER_AMINA_NAME', 'Amina');
                "#,
            )
            .unwrap();

        (frontend, localization)
    }

    #[test]
    fn test_run_writes_mapping() {
        let dir = TempDir::new().unwrap();
        let (frontend, localization) = create_databases(&dir);
        let output = dir.path().join("loc_mapper.json");

        let missing = run(&frontend, &localization, "en_US", &output).unwrap();
        assert_eq!(missing.len(), 1);

        let mapping = LocMapping::load(&output).unwrap();
        assert_eq!(mapping.len(), 3);
        assert_eq!(mapping.get("LOC_LEADER_AMINA_NAME"), Some("Amina"));
        assert_eq!(mapping.get("LOC_CIVILIZATION_AKSUM_NAME"), Some(""));
    }

    #[test]
    fn test_strict_fails_on_missing() {
        let dir = TempDir::new().unwrap();
        let (frontend, localization) = create_databases(&dir);

        let args = ExtractArgs {
            frontend_db: Some(frontend),
            localization_db: Some(localization),
            output: Some(dir.path().join("loc.json")),
            strict: true,
            ..Default::default()
        };
        let err = handle(args, &Config::default()).unwrap_err();
        assert!(err.to_string().contains("1 keys have no en_US translation"));
        assert!(dir.path().join("loc.json").exists());
    }

    #[test]
    fn test_missing_database_errors() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("loc.json");

        let result = run(
            &dir.path().join("absent.sqlite"),
            &dir.path().join("absent-loc.sqlite"),
            "en_US",
            &output,
        );
        assert!(result.is_err());
        assert!(!output.exists());
    }

    #[test]
    fn test_handle_requires_paths() {
        let result = handle(ExtractArgs::default(), &Config::default());
        let message = result.unwrap_err().to_string();
        assert!(message.contains("frontend database"));
    }
}
