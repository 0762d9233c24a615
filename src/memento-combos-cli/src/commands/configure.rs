//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting default paths.

use crate::config::Config;
use anyhow::Result;
use std::path::PathBuf;

/// Values passed to `configure`; `None` leaves the setting untouched
#[derive(Debug, Default)]
pub struct ConfigUpdate {
    pub frontend_db: Option<PathBuf>,
    pub localization_db: Option<PathBuf>,
    pub loc_map: Option<PathBuf>,
    pub spreadsheet: Option<PathBuf>,
    pub sheet: Option<String>,
    pub output: Option<PathBuf>,
    pub language: Option<String>,
}

impl ConfigUpdate {
    fn is_empty(&self) -> bool {
        self.frontend_db.is_none()
            && self.localization_db.is_none()
            && self.loc_map.is_none()
            && self.spreadsheet.is_none()
            && self.sheet.is_none()
            && self.output.is_none()
            && self.language.is_none()
    }

    fn apply(self, config: &mut Config) {
        let ConfigUpdate {
            frontend_db,
            localization_db,
            loc_map,
            spreadsheet,
            sheet,
            output,
            language,
        } = self;

        config.frontend_db = frontend_db.or(config.frontend_db.take());
        config.localization_db = localization_db.or(config.localization_db.take());
        config.loc_map = loc_map.or(config.loc_map.take());
        config.spreadsheet = spreadsheet.or(config.spreadsheet.take());
        config.sheet = sheet.or(config.sheet.take());
        config.output = output.or(config.output.take());
        config.language = language.or(config.language.take());
    }
}

/// Handle the configure command
pub fn handle(update: ConfigUpdate, show: bool) -> Result<()> {
    let mut config = Config::load()?;

    if show {
        show_config(&config);
        return Ok(());
    }

    if update.is_empty() {
        show_usage();
        return Ok(());
    }

    update.apply(&mut config);
    config.save()?;

    if let Ok(path) = Config::config_path() {
        println!("Config saved to: {}", path.display());
    }
    show_config(&config);

    Ok(())
}

/// Display current configuration
fn show_config(config: &Config) {
    let path = |p: &Option<PathBuf>| {
        p.as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(not set)".to_string())
    };

    println!("Frontend DB:     {}", path(&config.frontend_db));
    println!("Localization DB: {}", path(&config.localization_db));
    println!("Loc map:         {}", path(&config.loc_map));
    println!("Spreadsheet:     {}", path(&config.spreadsheet));
    println!(
        "Sheet:           {}",
        config.sheet.as_deref().unwrap_or("(first)")
    );
    println!("Output:          {}", path(&config.output));
    println!("Language:        {}", config.language());

    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }
}

/// Show usage help for the configure command
fn show_usage() {
    println!("Usage: mementos configure --frontend-db PATH --localization-db PATH");
    println!("   or: mementos configure --loc-map PATH --spreadsheet PATH --output PATH");
    println!("   or: mementos configure --show");
    println!();
    println!("Note: the game writes its databases to the Debug folder under");
    println!("      its local app data directory once debug output is enabled.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_usage_does_not_panic() {
        show_usage();
    }

    #[test]
    fn test_empty_update() {
        assert!(ConfigUpdate::default().is_empty());
        let update = ConfigUpdate {
            sheet: Some("Synergies".to_string()),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }

    #[test]
    fn test_apply_keeps_unset_values() {
        let mut config = Config {
            loc_map: Some(PathBuf::from("old.json")),
            output: Some(PathBuf::from("combos.sql")),
            ..Default::default()
        };

        ConfigUpdate {
            loc_map: Some(PathBuf::from("new.json")),
            ..Default::default()
        }
        .apply(&mut config);

        assert_eq!(config.loc_map, Some(PathBuf::from("new.json")));
        assert_eq!(config.output, Some(PathBuf::from("combos.sql")));
        assert_eq!(config.language, None);
    }
}
