mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::*;
use commands::configure::ConfigUpdate;
use commands::extract_loc::ExtractArgs;
use commands::generate::GenerateArgs;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::ExtractLoc {
            frontend_db,
            localization_db,
            language,
            output,
            strict,
        } => {
            let config = Config::load()?;
            commands::extract_loc::handle(
                ExtractArgs {
                    frontend_db,
                    localization_db,
                    language,
                    output,
                    strict,
                },
                &config,
            )?;
        }

        Commands::Generate {
            input,
            loc_map,
            sheet,
            output,
            strict,
        } => {
            let config = Config::load()?;
            commands::generate::handle(
                GenerateArgs {
                    input,
                    loc_map,
                    sheet,
                    output,
                    strict,
                },
                &config,
            )?;
        }

        Commands::CheckDupes { input } => {
            let config = Config::load()?;
            commands::check_dupes::handle(input, &config)?;
        }

        Commands::Configure {
            frontend_db,
            localization_db,
            loc_map,
            spreadsheet,
            sheet,
            output,
            language,
            show,
        } => {
            commands::configure::handle(
                ConfigUpdate {
                    frontend_db,
                    localization_db,
                    loc_map,
                    spreadsheet,
                    sheet,
                    output,
                    language,
                },
                show,
            )?;
        }
    }

    Ok(())
}
