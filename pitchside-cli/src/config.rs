//! Subcommand arguments and their resolved configuration.
//!
//! Every option can come from CLI flags, `PITCHSIDE_*` environment variables
//! or configuration files; `ortho_config` merges the layers before the
//! arguments are resolved here.

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use pitchside_data::DatasetFiles;
use serde::{Deserialize, Serialize};

use crate::{
    ARG_BASE_URL, ARG_BOUNDARY_FILE, ARG_DATA_DIR, ARG_DISPLAY_WIDTH, ARG_OUTPUT, ARG_PUBS_FILE,
    ARG_STADIUM, ARG_STADIUM_ID, ARG_STADIUMS_FILE, CliError, ENV_FOCUS_STADIUM_ID,
};

/// Directory read when neither a data directory nor a base URL is given.
pub(crate) const DEFAULT_DATA_DIR: &str = "data";

/// Display width assumed when none is given; selects the wide zoom.
pub(crate) const DEFAULT_DISPLAY_WIDTH: u32 = 1024;

/// Where the datasets live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DataRoot {
    /// A local directory.
    Directory(Utf8PathBuf),
    /// A URL served over HTTP.
    BaseUrl(String),
}

/// Resolved dataset location and file names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SourceConfig {
    pub(crate) root: DataRoot,
    pub(crate) files: DatasetFiles,
}

impl SourceConfig {
    /// A base URL wins over a data directory.
    fn resolve(
        data_dir: Option<Utf8PathBuf>,
        base_url: Option<String>,
        boundary_file: Option<String>,
        stadiums_file: Option<String>,
        pubs_file: Option<String>,
    ) -> Self {
        let root = match base_url {
            Some(url) => DataRoot::BaseUrl(url),
            None => DataRoot::Directory(
                data_dir.unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_DATA_DIR)),
            ),
        };
        let mut files = DatasetFiles::default();
        if let Some(name) = boundary_file {
            files = files.with_boundary(name);
        }
        if let Some(name) = stadiums_file {
            files = files.with_stadiums(name);
        }
        if let Some(name) = pubs_file {
            files = files.with_pubs(name);
        }
        Self { root, files }
    }
}

/// CLI arguments for the `stadiums` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "List the stadiums as the sidebar shows them")]
#[ortho_config(prefix = "PITCHSIDE")]
pub(crate) struct StadiumsArgs {
    /// Directory holding the GeoJSON datasets.
    #[arg(long = ARG_DATA_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) data_dir: Option<Utf8PathBuf>,
    /// Base URL serving the GeoJSON datasets; wins over --data-dir.
    #[arg(long = ARG_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) base_url: Option<String>,
    /// Boundary file name (default `London.geojson`).
    #[arg(long = ARG_BOUNDARY_FILE, value_name = "name")]
    #[serde(default)]
    pub(crate) boundary_file: Option<String>,
    /// Stadium file name (default `stadiums.geojson`).
    #[arg(long = ARG_STADIUMS_FILE, value_name = "name")]
    #[serde(default)]
    pub(crate) stadiums_file: Option<String>,
    /// Pub file name (default `pubs.geojson`).
    #[arg(long = ARG_PUBS_FILE, value_name = "name")]
    #[serde(default)]
    pub(crate) pubs_file: Option<String>,
}

impl StadiumsArgs {
    pub(crate) fn into_config(self) -> Result<StadiumsConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(StadiumsConfig::from(merged))
    }
}

/// Resolved `stadiums` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StadiumsConfig {
    pub(crate) source: SourceConfig,
}

impl From<StadiumsArgs> for StadiumsConfig {
    fn from(args: StadiumsArgs) -> Self {
        Self {
            source: SourceConfig::resolve(
                args.data_dir,
                args.base_url,
                args.boundary_file,
                args.stadiums_file,
                args.pubs_file,
            ),
        }
    }
}

/// CLI arguments for the `focus` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Select a stadium as though its sidebar row was clicked and \
                 print the summary together with the identifiers of every \
                 pub within one kilometre.",
    about = "Select a stadium and report the pubs within a kilometre"
)]
#[ortho_config(prefix = "PITCHSIDE")]
pub(crate) struct FocusArgs {
    /// Identifier of the stadium to select.
    #[arg(value_name = ARG_STADIUM_ID)]
    #[serde(default)]
    pub(crate) stadium_id: Option<u64>,
    /// Directory holding the GeoJSON datasets.
    #[arg(long = ARG_DATA_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) data_dir: Option<Utf8PathBuf>,
    /// Base URL serving the GeoJSON datasets; wins over --data-dir.
    #[arg(long = ARG_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) base_url: Option<String>,
    /// Display width in pixels; below 768 the map starts zoomed out.
    #[arg(long = ARG_DISPLAY_WIDTH, value_name = "px")]
    #[serde(default)]
    pub(crate) display_width: Option<u32>,
    /// Boundary file name (default `London.geojson`).
    #[arg(long = ARG_BOUNDARY_FILE, value_name = "name")]
    #[serde(default)]
    pub(crate) boundary_file: Option<String>,
    /// Stadium file name (default `stadiums.geojson`).
    #[arg(long = ARG_STADIUMS_FILE, value_name = "name")]
    #[serde(default)]
    pub(crate) stadiums_file: Option<String>,
    /// Pub file name (default `pubs.geojson`).
    #[arg(long = ARG_PUBS_FILE, value_name = "name")]
    #[serde(default)]
    pub(crate) pubs_file: Option<String>,
}

impl FocusArgs {
    pub(crate) fn into_config(self) -> Result<FocusConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        FocusConfig::try_from(merged)
    }
}

/// Resolved `focus` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FocusConfig {
    pub(crate) source: SourceConfig,
    pub(crate) display_width: u32,
    pub(crate) stadium_id: u64,
}

impl TryFrom<FocusArgs> for FocusConfig {
    type Error = CliError;

    fn try_from(args: FocusArgs) -> Result<Self, Self::Error> {
        let stadium_id = args.stadium_id.ok_or(CliError::MissingArgument {
            field: ARG_STADIUM_ID,
            env: ENV_FOCUS_STADIUM_ID,
        })?;
        Ok(Self {
            source: SourceConfig::resolve(
                args.data_dir,
                args.base_url,
                args.boundary_file,
                args.stadiums_file,
                args.pubs_file,
            ),
            display_width: args.display_width.unwrap_or(DEFAULT_DISPLAY_WIDTH),
            stadium_id,
        })
    }
}

/// CLI arguments for the `scene` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Build the map as a browser would show it and print every \
                 layer, control and panel as JSON. With --stadium the scene \
                 is captured after selecting that stadium.",
    about = "Dump the whole map scene as JSON"
)]
#[ortho_config(prefix = "PITCHSIDE")]
pub(crate) struct SceneArgs {
    /// Stadium to select before capturing the scene.
    #[arg(long = ARG_STADIUM, value_name = "id")]
    #[serde(default)]
    pub(crate) stadium: Option<u64>,
    /// Write the scene to this file instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
    /// Directory holding the GeoJSON datasets.
    #[arg(long = ARG_DATA_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) data_dir: Option<Utf8PathBuf>,
    /// Base URL serving the GeoJSON datasets; wins over --data-dir.
    #[arg(long = ARG_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) base_url: Option<String>,
    /// Display width in pixels; below 768 the map starts zoomed out.
    #[arg(long = ARG_DISPLAY_WIDTH, value_name = "px")]
    #[serde(default)]
    pub(crate) display_width: Option<u32>,
    /// Boundary file name (default `London.geojson`).
    #[arg(long = ARG_BOUNDARY_FILE, value_name = "name")]
    #[serde(default)]
    pub(crate) boundary_file: Option<String>,
    /// Stadium file name (default `stadiums.geojson`).
    #[arg(long = ARG_STADIUMS_FILE, value_name = "name")]
    #[serde(default)]
    pub(crate) stadiums_file: Option<String>,
    /// Pub file name (default `pubs.geojson`).
    #[arg(long = ARG_PUBS_FILE, value_name = "name")]
    #[serde(default)]
    pub(crate) pubs_file: Option<String>,
}

impl SceneArgs {
    pub(crate) fn into_config(self) -> Result<SceneConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(SceneConfig::from(merged))
    }
}

/// Resolved `scene` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SceneConfig {
    pub(crate) source: SourceConfig,
    pub(crate) display_width: u32,
    pub(crate) stadium: Option<u64>,
    pub(crate) output: Option<Utf8PathBuf>,
}

impl From<SceneArgs> for SceneConfig {
    fn from(args: SceneArgs) -> Self {
        Self {
            source: SourceConfig::resolve(
                args.data_dir,
                args.base_url,
                args.boundary_file,
                args.stadiums_file,
                args.pubs_file,
            ),
            display_width: args.display_width.unwrap_or(DEFAULT_DISPLAY_WIDTH),
            stadium: args.stadium,
            output: args.output,
        }
    }
}

#[cfg(test)]
pub(crate) fn scene_config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SceneConfig, CliError> {
    let merged = SceneArgs::merge_from_layers(layers).map_err(CliError::from)?;
    Ok(SceneConfig::from(merged))
}
