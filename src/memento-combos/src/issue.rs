//! Data irregularities found while extracting or generating.
//!
//! None of these abort a run. They are logged as they happen and handed back
//! to the caller, which decides whether a non-empty list is fatal.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    /// A loc key had no row in `LocalizedText` for the chosen language
    MissingTranslation { key: String },

    /// A spreadsheet leader label matched no known leader or generic group
    UnresolvedLeader { civilization: String, label: String },

    /// A memento label matched no localized memento name
    UnresolvedMemento { civilization: String, label: String },

    /// A combo id was produced more than once; only the first row is kept
    DuplicateCombo { combo_id: String },
}

impl Issue {
    /// Short machine-friendly tag for summaries
    pub fn kind(&self) -> &'static str {
        match self {
            Issue::MissingTranslation { .. } => "missing-translation",
            Issue::UnresolvedLeader { .. } => "unresolved-leader",
            Issue::UnresolvedMemento { .. } => "unresolved-memento",
            Issue::DuplicateCombo { .. } => "duplicate-combo",
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::MissingTranslation { key } => write!(f, "no translation for {}", key),
            Issue::UnresolvedLeader {
                civilization,
                label,
            } => write!(f, "[{}] unknown leader '{}'", civilization, label),
            Issue::UnresolvedMemento {
                civilization,
                label,
            } => write!(f, "[{}] unknown memento '{}'", civilization, label),
            Issue::DuplicateCombo { combo_id } => write!(f, "duplicate combo id {}", combo_id),
        }
    }
}
