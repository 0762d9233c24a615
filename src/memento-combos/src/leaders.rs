//! Leader reference data
//!
//! Generic leader groups (the leader attribute categories) and the shorthand
//! labels used in the synergy spreadsheet.

use crate::loc::InvertedLoc;

/// A leader attribute category and the leaders that belong to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderGroup {
    pub name: &'static str,
    pub leaders: &'static [&'static str],
}

const SCIENTIFIC: &[&str] = &[
    "LEADER_BENJAMIN_FRANKLIN",
    "LEADER_CATHERINE",
    "LEADER_CHARLEMAGNE",
    "LEADER_CONFUCIUS",
    "LEADER_FRIEDRICH",
    "LEADER_HIMIKO",
    "LEADER_TRUNG_TRAC",
    "LEADER_ADA_LOVELACE",
];

const CULTURAL: &[&str] = &[
    "LEADER_AUGUSTUS",
    "LEADER_CATHERINE",
    "LEADER_HATSHEPSUT",
    "LEADER_JOSE_RIZAL",
    "LEADER_LAFAYETTE",
    "LEADER_ADA_LOVELACE",
    "LEADER_HIMIKO_ALT",
    "LEADER_NAPOLEON_ALT",
    "LEADER_XERXES_ALT",
];

const ECONOMIC: &[&str] = &[
    "LEADER_AMINA",
    "LEADER_HATSHEPSUT",
    "LEADER_ISABELLA",
    "LEADER_MACHIAVELLI",
    "LEADER_PACHACUTI",
    "LEADER_XERXES",
    "LEADER_NAPOLEON",
    "LEADER_XERXES_ALT",
];

const DIPLOMATIC: &[&str] = &[
    "LEADER_ASHOKA",
    "LEADER_BENJAMIN_FRANKLIN",
    "LEADER_HARRIET_TUBMAN",
    "LEADER_HIMIKO",
    "LEADER_JOSE_RIZAL",
    "LEADER_LAFAYETTE",
    "LEADER_MACHIAVELLI",
    "LEADER_ASHOKA_ALT",
    "LEADER_HIMIKO_ALT",
    "LEADER_NAPOLEON",
    "LEADER_TECUMSEH",
];

const EXPANSIONIST: &[&str] = &[
    "LEADER_ASHOKA",
    "LEADER_AUGUSTUS",
    "LEADER_CONFUCIUS",
    "LEADER_IBN_BATTUTA",
    "LEADER_ISABELLA",
    "LEADER_PACHACUTI",
    "LEADER_BOLIVAR",
];

const MILITARISTIC: &[&str] = &[
    "LEADER_AMINA",
    "LEADER_CHARLEMAGNE",
    "LEADER_FRIEDRICH",
    "LEADER_HARRIET_TUBMAN",
    "LEADER_TRUNG_TRAC",
    "LEADER_XERXES",
    "LEADER_ASHOKA_ALT",
    "LEADER_BOLIVAR",
    "LEADER_NAPOLEON_ALT",
    "LEADER_TECUMSEH",
    "LEADER_FRIEDRICH_ALT",
];

/// Every group name accepted in the Leader column, including the alternate
/// spellings found in the spreadsheet. Aliases share their canonical list.
pub const LEADER_GROUPS: &[LeaderGroup] = &[
    LeaderGroup { name: "SCIENTIFIC", leaders: SCIENTIFIC },
    LeaderGroup { name: "CULTURAL", leaders: CULTURAL },
    LeaderGroup { name: "ECONOMIC", leaders: ECONOMIC },
    LeaderGroup { name: "DIPLOMATIC", leaders: DIPLOMATIC },
    LeaderGroup { name: "EXPANSIONIST", leaders: EXPANSIONIST },
    LeaderGroup { name: "MILITARISTIC", leaders: MILITARISTIC },
    LeaderGroup { name: "SCIENCE", leaders: SCIENTIFIC },
    LeaderGroup { name: "CULTURE", leaders: CULTURAL },
    LeaderGroup { name: "DIPLOMACY", leaders: DIPLOMATIC },
    LeaderGroup { name: "EXPANSION", leaders: EXPANSIONIST },
    LeaderGroup { name: "MILITARY", leaders: MILITARISTIC },
    LeaderGroup { name: "MILTARISTIC", leaders: MILITARISTIC },
];

/// Shorthand spreadsheet labels that don't match a localized leader name
pub const LEADER_ODDITIES: &[(&str, &str)] = &[
    ("Ashoka, WC", "LEADER_ASHOKA"),
    ("Ashoka WC", "LEADER_ASHOKA"),
    ("Ashoka, WR", "LEADER_ASHOKA_ALT"),
    ("Benjamin", "LEADER_BENJAMIN_FRANKLIN"),
    ("Ada", "LEADER_ADA_LOVELACE"),
    ("Catherine", "LEADER_CATHERINE"),
    ("Trung", "LEADER_TRUNG_TRAC"),
    ("Napoleon, E", "LEADER_NAPOLEON"),
    ("Napoleon, R", "LEADER_NAPOLEON_ALT"),
    ("Xerxes, KOK", "LEADER_XERXES"),
];

/// Look up a generic group by its spreadsheet name
pub fn leader_group(name: &str) -> Option<&'static LeaderGroup> {
    LEADER_GROUPS.iter().find(|g| g.name == name)
}

/// Whether `id` belongs to at least one generic group
pub fn is_known_leader(id: &str) -> bool {
    LEADER_GROUPS
        .iter()
        .any(|g| g.leaders.iter().any(|leader| *leader == id))
}

fn is_leader_or_group(id: &str) -> bool {
    is_known_leader(id) || leader_group(id).is_some()
}

/// Resolve a Leader cell to a leader id or group name
///
/// Tries, in order: the label as-is, the shorthand table, then the localized
/// name lookup. Returns `None` if nothing yields a known leader or group.
pub fn resolve_leader(label: &str, inverted: &InvertedLoc) -> Option<String> {
    if is_leader_or_group(label) {
        return Some(label.to_string());
    }

    if let Some((_, id)) = LEADER_ODDITIES.iter().find(|(odd, _)| *odd == label) {
        return Some((*id).to_string());
    }

    inverted
        .decode(label)
        .filter(|id| is_leader_or_group(id))
        .map(str::to_string)
}
