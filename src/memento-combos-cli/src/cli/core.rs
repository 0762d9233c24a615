//! Core CLI definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mementos")]
#[command(about = "SpecificMementoCombo SQL generator", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the loc mapping JSON from the game databases
    #[command(visible_alias = "x")]
    ExtractLoc {
        /// Frontend database (uses configured default if not provided)
        #[arg(long)]
        frontend_db: Option<PathBuf>,

        /// Localization database (uses configured default if not provided)
        #[arg(long)]
        localization_db: Option<PathBuf>,

        /// LocalizedText language
        #[arg(short, long)]
        language: Option<String>,

        /// Output loc mapping JSON
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fail if any key has no translation
        #[arg(long)]
        strict: bool,
    },

    /// Generate the combo INSERT statement from the synergy spreadsheet
    #[command(visible_alias = "g")]
    Generate {
        /// Spreadsheet (.ods, .xlsx or .csv)
        input: Option<PathBuf>,

        /// Loc mapping JSON produced by extract-loc
        #[arg(long)]
        loc_map: Option<PathBuf>,

        /// Worksheet name (defaults to the first sheet)
        #[arg(long)]
        sheet: Option<String>,

        /// Output SQL file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fail if any row could not be resolved or was a duplicate
        #[arg(long)]
        strict: bool,
    },

    /// Report combo ids that appear more than once in a generated SQL file
    #[command(visible_alias = "d")]
    CheckDupes {
        /// SQL file (uses configured output if not provided)
        input: Option<PathBuf>,
    },

    /// Configure default paths
    #[command(visible_alias = "c")]
    Configure {
        #[arg(long)]
        frontend_db: Option<PathBuf>,

        #[arg(long)]
        localization_db: Option<PathBuf>,

        #[arg(long)]
        loc_map: Option<PathBuf>,

        #[arg(long)]
        spreadsheet: Option<PathBuf>,

        #[arg(long)]
        sheet: Option<String>,

        #[arg(long)]
        output: Option<PathBuf>,

        #[arg(long)]
        language: Option<String>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
