//! Subcommand execution.
//!
//! Every command builds the map on an in-memory [`Scene`] exactly as an
//! interactive host would, then prints the part of it the command asks for.

use std::io::Write;

use pitchside_core::{
    Datasets, FocusReport, MapEvent, MapSession, MapShell, Scene, SelectError, build_sidebar,
};
use pitchside_data::{DatasetLoader, FileDatasetSource, HttpDatasetSource, HttpDatasetSourceConfig};
use serde::Serialize;

use crate::CliError;
use crate::config::{
    DEFAULT_DISPLAY_WIDTH, DataRoot, FocusArgs, SceneArgs, SourceConfig, StadiumsArgs,
};

/// Loads the datasets a command needs.
pub(crate) trait DatasetProvider {
    fn load(&self, source: &SourceConfig) -> Result<Datasets, CliError>;
}

/// Reads from the configured directory or base URL.
pub(crate) struct DefaultDatasetProvider;

impl DatasetProvider for DefaultDatasetProvider {
    fn load(&self, source: &SourceConfig) -> Result<Datasets, CliError> {
        match &source.root {
            DataRoot::Directory(dir) => {
                let files = FileDatasetSource::new(dir.clone()).with_files(source.files.clone());
                Ok(DatasetLoader::new(files).load_blocking()?)
            }
            DataRoot::BaseUrl(base_url) => {
                let config =
                    HttpDatasetSourceConfig::new(base_url.clone()).with_files(source.files.clone());
                let http = HttpDatasetSource::with_config(config).map_err(|err| {
                    CliError::BuildHttpSource {
                        base_url: base_url.clone(),
                        source: err,
                    }
                })?;
                Ok(DatasetLoader::new(http).load_blocking()?)
            }
        }
    }
}

pub(crate) fn run_stadiums_with(
    args: StadiumsArgs,
    provider: &dyn DatasetProvider,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let shell = MapShell::for_display_width(DEFAULT_DISPLAY_WIDTH);
    let (_, session) = open_map(provider, &config.source, shell)?;
    write_json(writer, &build_sidebar(session.stadiums()))
}

pub(crate) fn run_focus_with(
    args: FocusArgs,
    provider: &dyn DatasetProvider,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let shell = MapShell::for_display_width(config.display_width);
    let (mut scene, mut session) = open_map(provider, &config.source, shell)?;
    let report = focus(&mut scene, &mut session, config.stadium_id)?;
    write_json(writer, &report)
}

pub(crate) fn run_scene_with(
    args: SceneArgs,
    provider: &dyn DatasetProvider,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let shell = MapShell::for_display_width(config.display_width);
    let (mut scene, mut session) = open_map(provider, &config.source, shell)?;
    if let Some(stadium_id) = config.stadium {
        focus(&mut scene, &mut session, stadium_id)?;
    }

    match config.output {
        Some(path) => {
            let payload = to_json(&scene)?;
            pitchside_fs::write_utf8_file(&path, &payload)
                .map_err(|source| CliError::WriteOutputFile {
                    path: path.clone(),
                    source,
                })?;
            log::info!("wrote scene with {} layers to {path}", scene.layers().count());
            Ok(())
        }
        None => write_json(writer, &scene),
    }
}

fn open_map(
    provider: &dyn DatasetProvider,
    source: &SourceConfig,
    shell: MapShell,
) -> Result<(Scene, MapSession), CliError> {
    let mut scene = Scene::default();
    let loaded = provider.load(source);
    let session = MapSession::bootstrap(&mut scene, shell, loaded)?;
    Ok((scene, session))
}

fn focus(
    scene: &mut Scene,
    session: &mut MapSession,
    stadium_id: u64,
) -> Result<FocusReport, CliError> {
    session
        .dispatch(scene, MapEvent::SidebarActivated(stadium_id))
        .ok_or(CliError::Select(SelectError::UnknownStadium { id: stadium_id }))
}

fn to_json(value: &impl Serialize) -> Result<String, CliError> {
    let mut payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    payload.push('\n');
    Ok(payload)
}

fn write_json(writer: &mut dyn Write, value: &impl Serialize) -> Result<(), CliError> {
    let payload = to_json(value)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)
}
