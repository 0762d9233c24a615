//! Localization mapping and its reverse lookup.
//!
//! The forward mapping (`LOC_LEADER_AMINA_NAME` -> `Amina`) is what
//! `extract-loc` writes to disk. Spreadsheets are written in localized text,
//! so generation needs the inverse: `Amina` -> `LEADER_AMINA`.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

/// Spreadsheet spellings that differ from the game's localized names
pub const KNOWN_ALIASES: &[(&str, &str)] = &[(
    "Shisha Necklace",
    "MEMENTO_FOUNDATION_SHISA_NECKLACE",
)];

/// Loc key -> localized text, as persisted on disk
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocMapping {
    entries: BTreeMap<String, String>,
}

impl LocMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a mapping previously written by [`LocMapping::save`]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read_to_string(path.as_ref())?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Write the mapping as a JSON object with sorted keys
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        Ok(())
    }

    /// Register a key; an existing translation is left alone
    pub fn add_key(&mut self, key: impl Into<String>) {
        self.entries.entry(key.into()).or_default();
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of keys still mapped to an empty string
    pub fn untranslated(&self) -> usize {
        self.entries.values().filter(|v| v.is_empty()).count()
    }

    /// Build the localized text -> type id lookup, with built-in aliases applied
    pub fn invert(&self) -> InvertedLoc {
        let mut inverted = InvertedLoc::default();

        let translated = || self.entries.iter().filter(|(_, text)| !text.is_empty());

        // Folded spellings first so verbatim text wins on collision
        for (key, text) in translated() {
            inverted
                .lookup
                .insert(fold_ascii(text), strip_loc_key(key));
        }
        for (key, text) in translated() {
            inverted.lookup.insert(text.clone(), strip_loc_key(key));
        }

        for (label, type_id) in KNOWN_ALIASES {
            inverted.insert_alias(*label, *type_id);
        }

        inverted
    }
}

impl FromIterator<(String, String)> for LocMapping {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Localized text -> game type id (`LEADER_AMINA`, `MEMENTO_...`)
#[derive(Debug, Clone, Default)]
pub struct InvertedLoc {
    lookup: HashMap<String, String>,
}

impl InvertedLoc {
    /// Resolve a spreadsheet label, trying the trimmed text then its ASCII fold
    pub fn decode(&self, text: &str) -> Option<&str> {
        let stripped = text.trim();
        self.lookup
            .get(stripped)
            .or_else(|| self.lookup.get(&fold_ascii(stripped)))
            .map(String::as_str)
    }

    pub fn insert_alias(&mut self, label: impl Into<String>, type_id: impl Into<String>) {
        self.lookup.insert(label.into(), type_id.into());
    }

    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }
}

/// `LOC_LEADER_AMINA_NAME` -> `LEADER_AMINA`
pub fn strip_loc_key(key: &str) -> String {
    key.replace("LOC_", "").replace("_NAME", "")
}

/// Apostrophe look-alikes that should fold to a plain `'`
const APOSTROPHES: &[char] = &['\u{02BB}', '\u{02BC}', '\u{2018}', '\u{2019}'];

/// Transliterate to plain ASCII (`José` -> `Jose`, `Hawaiʻi` -> `Hawai'i`)
pub fn fold_ascii(text: &str) -> String {
    deunicode::deunicode(&text.replace(APOSTROPHES, "'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_mapping() -> LocMapping {
        [
            ("LOC_LEADER_JOSE_RIZAL_NAME", "José Rizal"),
            ("LOC_LEADER_AMINA_NAME", "Amina"),
            ("LOC_MEMENTO_FOUNDATION_SHISA_NECKLACE_NAME", "Shisa Necklace"),
            ("LOC_CIVILIZATION_MAYA_NAME", ""),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn test_strip_loc_key() {
        assert_eq!(strip_loc_key("LOC_LEADER_AMINA_NAME"), "LEADER_AMINA");
        assert_eq!(strip_loc_key("LEADER_AMINA"), "LEADER_AMINA");
    }

    #[test]
    fn test_decode_verbatim_and_folded() {
        let inverted = sample_mapping().invert();
        assert_eq!(inverted.decode("José Rizal"), Some("LEADER_JOSE_RIZAL"));
        assert_eq!(inverted.decode("Jose Rizal"), Some("LEADER_JOSE_RIZAL"));
        assert_eq!(inverted.decode("  Amina "), Some("LEADER_AMINA"));
        assert_eq!(inverted.decode("Nobody"), None);
        // untranslated keys are not reachable through an empty label
        assert_eq!(inverted.decode(""), None);
    }

    #[test]
    fn test_decode_folds_the_query() {
        let mut mapping = LocMapping::new();
        mapping.insert("LOC_LEADER_X_NAME", "Xerxes");
        let inverted = mapping.invert();
        assert_eq!(inverted.decode("Xérxes"), Some("LEADER_X"));
    }

    #[test]
    fn test_fold_apostrophes() {
        assert_eq!(fold_ascii("Hawaiʻi"), "Hawai'i");
        assert_eq!(fold_ascii("Hawai\u{2019}i"), "Hawai'i");
        assert_eq!(fold_ascii("Hawai\u{02BC}i"), "Hawai'i");
    }

    #[test]
    fn test_decode_okina_with_ascii_apostrophe() {
        let mut mapping = LocMapping::new();
        mapping.insert("LOC_CIVILIZATION_HAWAII_NAME", "Hawaiʻi");
        mapping.insert("LOC_MEMENTO_FOUNDATION_KAAHUMANU_FAN_NAME", "Kaʻahumanu's Fan");
        let inverted = mapping.invert();

        assert_eq!(inverted.decode("Hawai'i"), Some("CIVILIZATION_HAWAII"));
        assert_eq!(inverted.decode("Hawaiʻi"), Some("CIVILIZATION_HAWAII"));
        assert_eq!(
            inverted.decode("Ka'ahumanu's Fan"),
            Some("MEMENTO_FOUNDATION_KAAHUMANU_FAN")
        );
    }

    #[test]
    fn test_known_alias_applied() {
        let inverted = sample_mapping().invert();
        assert_eq!(
            inverted.decode("Shisha Necklace"),
            Some("MEMENTO_FOUNDATION_SHISA_NECKLACE")
        );
        assert_eq!(
            inverted.decode("Shisa Necklace"),
            Some("MEMENTO_FOUNDATION_SHISA_NECKLACE")
        );
    }

    #[test]
    fn test_add_key_keeps_existing_translation() {
        let mut mapping = sample_mapping();
        mapping.add_key("LOC_LEADER_AMINA_NAME");
        mapping.add_key("LOC_LEADER_NEW_NAME");
        assert_eq!(mapping.get("LOC_LEADER_AMINA_NAME"), Some("Amina"));
        assert_eq!(mapping.get("LOC_LEADER_NEW_NAME"), Some(""));
        assert_eq!(mapping.untranslated(), 2);
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("loc_mapper.json");

        let mapping = sample_mapping();
        mapping.save(&path).unwrap();

        let json = std::fs::read_to_string(&path).unwrap();
        assert!(json.contains("\"LOC_LEADER_AMINA_NAME\": \"Amina\""));

        let loaded = LocMapping::load(&path).unwrap();
        assert_eq!(loaded, mapping);
    }

    #[test]
    fn test_load_plain_object() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("loc.json");
        std::fs::write(&path, r#"{"LOC_LEADER_AMINA_NAME": "Amina"}"#).unwrap();

        let loaded = LocMapping::load(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.keys().collect::<Vec<_>>(), vec!["LOC_LEADER_AMINA_NAME"]);
    }
}
