//! Error types emitted by the Pitchside CLI.

use std::sync::Arc;

use camino::Utf8PathBuf;
use pitchside_core::SelectError;
use pitchside_data::{ClientBuildError, DatasetLoadError};
use thiserror::Error;

/// Errors emitted by the Pitchside CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Option name.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// The HTTP dataset source could not be constructed.
    #[error("failed to prepare HTTP source for {base_url:?}: {source}")]
    BuildHttpSource {
        /// Configured base URL.
        base_url: String,
        /// Underlying construction error.
        #[source]
        source: ClientBuildError,
    },
    /// Loading the datasets failed.
    #[error("failed to load datasets: {0}")]
    Load(#[from] DatasetLoadError),
    /// The requested stadium is not on the map.
    #[error(transparent)]
    Select(#[from] SelectError),
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output to stdout failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
    /// Writing command output to a file failed.
    #[error("failed to write output to {path:?}: {source}")]
    WriteOutputFile {
        /// Destination path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
