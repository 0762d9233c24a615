//! # memento-combos
//!
//! Builds the `SpecificMementoCombo` table for the memento randomiser mod.
//!
//! The pipeline has three independent stages that only share files on disk:
//! - Extract loc keys and their English text from the game databases
//!   into a JSON loc mapping ([`gamedb`], `gamedb` feature)
//! - Read the synergy spreadsheet, resolve its localized labels back to
//!   game type ids and render a multi-row INSERT ([`sheet`], [`combo`], [`sql`])
//! - Scan a generated SQL file for repeated combo ids ([`sql::check_file`])
//!
//! ## Example
//!
//! ```no_run
//! use memento_combos::{generate, read_rows, render_insert, split_sections, LocMapping};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let inverted = LocMapping::load("loc_mapper.json")?.invert();
//! let rows = read_rows("synergies.ods", None)?;
//!
//! let combos = generate(&split_sections(&rows), &inverted);
//! for issue in &combos.issues {
//!     eprintln!("{}", issue);
//! }
//!
//! std::fs::write("combos.sql", render_insert(combos.rows())?)?;
//! # Ok(())
//! # }
//! ```

pub mod combo;
pub mod error;
#[cfg(feature = "gamedb")]
pub mod gamedb;
pub mod issue;
pub mod leaders;
pub mod loc;
pub mod sheet;
pub mod sql;

#[doc(inline)]
pub use combo::{generate, ComboRow, ComboSet};
#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use issue::Issue;
#[doc(inline)]
pub use leaders::{leader_group, resolve_leader, LeaderGroup, LEADER_GROUPS, LEADER_ODDITIES};
#[doc(inline)]
pub use loc::{InvertedLoc, LocMapping};
#[doc(inline)]
pub use sheet::{read_rows, split_sections, CivSection, LeaderBlock, SheetRow};
#[doc(inline)]
pub use sql::{check_file, render_insert, write_insert, DuplicateId};

#[cfg(feature = "gamedb")]
#[doc(inline)]
pub use gamedb::{extract as extract_loc, LocExtraction, DEFAULT_LANGUAGE};
