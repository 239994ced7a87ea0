//! Command-line interface for the London stadiums and pubs map.
//!
//! Each subcommand loads the boundary, stadium and pub datasets, builds the
//! map on an in-memory scene and prints part of it as JSON.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod commands;
mod config;
mod error;

pub use error::CliError;

use commands::{DefaultDatasetProvider, run_focus_with, run_scene_with, run_stadiums_with};
use config::{FocusArgs, SceneArgs, StadiumsArgs};

pub(crate) const ARG_DATA_DIR: &str = "data-dir";
pub(crate) const ARG_BASE_URL: &str = "base-url";
pub(crate) const ARG_DISPLAY_WIDTH: &str = "display-width";
pub(crate) const ARG_BOUNDARY_FILE: &str = "boundary-file";
pub(crate) const ARG_STADIUMS_FILE: &str = "stadiums-file";
pub(crate) const ARG_PUBS_FILE: &str = "pubs-file";
pub(crate) const ARG_STADIUM: &str = "stadium";
pub(crate) const ARG_STADIUM_ID: &str = "stadium-id";
pub(crate) const ARG_OUTPUT: &str = "output";
pub(crate) const ENV_FOCUS_STADIUM_ID: &str = "PITCHSIDE_CMDS_FOCUS_STADIUM_ID";

/// Run the Pitchside CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns an error when arguments or configuration are invalid, the
/// datasets cannot be loaded, the requested stadium is unknown or output
/// cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    init_logging(cli.verbose);
    let mut stdout = std::io::stdout().lock();
    let provider = DefaultDatasetProvider;
    match cli.command {
        Command::Stadiums(args) => run_stadiums_with(args, &provider, &mut stdout),
        Command::Focus(args) => run_focus_with(args, &provider, &mut stdout),
        Command::Scene(args) => run_scene_with(args, &provider, &mut stdout),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

#[derive(Debug, Parser)]
#[command(
    name = "pitchside",
    about = "Football stadiums and the pubs around them, across Greater London",
    version
)]
struct Cli {
    /// Log debug detail to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the stadiums as the sidebar shows them.
    Stadiums(StadiumsArgs),
    /// Select a stadium and report the pubs within a kilometre.
    Focus(FocusArgs),
    /// Dump the whole map scene, optionally after selecting a stadium.
    Scene(SceneArgs),
}

#[cfg(test)]
mod tests;
