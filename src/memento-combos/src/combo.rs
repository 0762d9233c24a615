//! Combo generation
//!
//! Turns spreadsheet sections into `SpecificMementoCombo` rows. Generic leader
//! groups fan out into one row per leader in the group; every other group
//! produces a single row for the leader named on that row.

use crate::issue::Issue;
use crate::leaders::{leader_group, resolve_leader};
use crate::loc::InvertedLoc;
use crate::sheet::{CivSection, SheetRow};
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, warn};

/// One `SpecificMementoCombo` tuple
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboRow {
    pub combo_id: String,
    pub leader: Option<String>,
    pub civilization: Option<String>,
    pub memento_primary: String,
    pub memento_secondary: String,
    pub age: Option<String>,
}

/// Generated rows plus everything that went wrong producing them
#[derive(Debug, Clone, Default)]
pub struct ComboSet {
    rows: Vec<ComboRow>,
    seen: HashSet<String>,
    pub issues: Vec<Issue>,
    /// Spreadsheet rows expanded per generic group
    pub group_counts: BTreeMap<String, usize>,
}

impl ComboSet {
    /// Add a row unless its id is already taken
    ///
    /// Returns false (and records a duplicate) if the id was seen before.
    pub fn push(&mut self, row: ComboRow) -> bool {
        if !self.seen.insert(row.combo_id.clone()) {
            warn!("Duplicate combo id {}", row.combo_id);
            self.issues.push(Issue::DuplicateCombo {
                combo_id: row.combo_id,
            });
            return false;
        }
        self.rows.push(row);
        true
    }

    pub fn rows(&self) -> &[ComboRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn issue(&mut self, issue: Issue) {
        warn!("{}", issue);
        self.issues.push(issue);
    }
}

/// `Trade Empire's Best ` -> `TRADE_EMPIRES_BEST`
pub fn theme_name(theme: &str) -> String {
    theme.replace('\'', "").trim().replace(' ', "_").to_uppercase()
}

/// Civilization type for a section, or `None` for generic sections
pub fn civilization_type(label: &str, inverted: &InvertedLoc) -> Option<String> {
    if label.contains("GENERIC") {
        return None;
    }

    if let Some(id) = inverted.decode(label).filter(|id| id.starts_with("CIVILIZATION_")) {
        return Some(id.to_string());
    }

    Some(format!("CIVILIZATION_{}", theme_name(label)))
}

/// `GENERIC ANTIQUITY` -> `AGE_ANTIQUITY`
pub fn age_type(label: &str) -> Option<String> {
    label
        .strip_prefix("GENERIC ")
        .map(|age| format!("AGE_{}", age.trim().replace(' ', "_")))
}

/// Id for a combo attached to one leader and/or civilization
pub fn specific_combo_id(leader: Option<&str>, civ: Option<&str>, name: &str) -> String {
    let leader = leader.unwrap_or("NULL");
    match civ {
        None => format!("{}_{}", leader, name),
        Some(civ) => {
            let civ = civ.strip_prefix("CIVILIZATION_").unwrap_or(civ);
            format!("{}_{}_{}", leader, civ, name).replace("LEADER_", "")
        }
    }
}

/// Id for one leader's share of a generic group combo
pub fn generic_combo_id(group: &str, leader: &str, name: &str) -> String {
    format!("{}_{}_GENERIC_{}", group, leader, name)
}

/// Generate combo rows for every section of the spreadsheet
pub fn generate(sections: &[CivSection], inverted: &InvertedLoc) -> ComboSet {
    let mut set = ComboSet::default();

    for section in sections {
        let civ = civilization_type(&section.label, inverted);
        let age = age_type(&section.label);
        debug!("Section {} -> civ {:?}, age {:?}", section.label, civ, age);

        for group in &section.groups {
            let generic = leader_group(&group.label);

            for row in &group.rows {
                let Some(theme) = row.theme.as_deref() else {
                    continue;
                };
                let name = theme_name(theme);

                let Some((primary, secondary)) =
                    resolve_mementos(row, &section.label, inverted, &mut set)
                else {
                    continue;
                };

                if let Some(group_def) = generic {
                    for leader in group_def.leaders {
                        set.push(ComboRow {
                            combo_id: generic_combo_id(group_def.name, leader, &name),
                            leader: Some((*leader).to_string()),
                            civilization: civ.clone(),
                            memento_primary: primary.clone(),
                            memento_secondary: secondary.clone(),
                            age: age.clone(),
                        });
                    }
                    *set.group_counts.entry(group_def.name.to_string()).or_default() += 1;
                    continue;
                }

                let leader = match row.leader.as_deref().map(str::trim) {
                    None => None,
                    Some(label) => match resolve_leader(label, inverted) {
                        Some(id) => Some(id),
                        None => {
                            set.issue(Issue::UnresolvedLeader {
                                civilization: section.label.clone(),
                                label: label.to_string(),
                            });
                            continue;
                        }
                    },
                };

                set.push(ComboRow {
                    combo_id: specific_combo_id(leader.as_deref(), civ.as_deref(), &name),
                    leader,
                    civilization: civ.clone(),
                    memento_primary: primary,
                    memento_secondary: secondary,
                    age: None,
                });
            }
        }
    }

    set
}

fn resolve_mementos(
    row: &SheetRow,
    civ_label: &str,
    inverted: &InvertedLoc,
    set: &mut ComboSet,
) -> Option<(String, String)> {
    let mut resolve = |label: Option<&str>| {
        let label = label.unwrap_or_default();
        match inverted.decode(label) {
            Some(id) => Some(id.to_string()),
            None => {
                set.issue(Issue::UnresolvedMemento {
                    civilization: civ_label.to_string(),
                    label: label.trim().to_string(),
                });
                None
            }
        }
    };

    let primary = resolve(row.memento_one.as_deref());
    let secondary = resolve(row.memento_two.as_deref());
    Some((primary?, secondary?))
}
