//! Behavioural tests for [`DatasetLoader`] against files and stub sources.

use camino::Utf8PathBuf;
use geo::Coord;
use pitchside_core::{LOAD_ERROR_MESSAGE, MapSession, MapShell, Scene, StadiumListPanel};
use pitchside_data::test_support::{StubDatasetSource, pub_collection, stadium_collection};
use pitchside_data::{DatasetKind, DatasetLoadError, DatasetLoader, FileDatasetSource};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use std::fs;
use tempfile::TempDir;

type LoadCell = RefCell<Option<Result<pitchside_core::Datasets, DatasetLoadError>>>;

const THE_DEN: Coord<f64> = Coord {
    x: -0.0509,
    y: 51.4859,
};

const BOUNDARY: &str = r#"{"type": "FeatureCollection", "features": [
    {"type": "Feature", "properties": {"name": "Greater London"}, "geometry": {"type": "Polygon",
     "coordinates": [[[-0.51, 51.28], [0.33, 51.28], [0.33, 51.69], [-0.51, 51.69], [-0.51, 51.28]]]}}
]}"#;

fn stadiums() -> String {
    stadium_collection(&[(1, THE_DEN, Some("The Den"), Some("Millwall"))])
}

fn pubs() -> String {
    pub_collection(&[
        (1, Coord { x: -0.0505, y: 51.4862 }, Some("The Lions")),
        (2, Coord { x: -0.0700, y: 51.4950 }, None),
    ])
}

#[fixture]
fn data_dir() -> TempDir {
    TempDir::new().expect("create data directory")
}

#[fixture]
fn loader() -> RefCell<Option<DatasetLoader<FileDatasetSource>>> {
    RefCell::new(None)
}

#[fixture]
fn stub() -> RefCell<Option<StubDatasetSource>> {
    RefCell::new(None)
}

#[fixture]
fn outcome() -> LoadCell {
    RefCell::new(None)
}

#[fixture]
fn scene() -> RefCell<Scene> {
    RefCell::new(Scene::default())
}

fn root_of(dir: &TempDir) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 temp dir")
}

fn write(dir: &TempDir, name: &str, contents: &str) {
    fs::write(dir.path().join(name), contents)
        .unwrap_or_else(|err| panic!("write fixture {name}: {err}"));
}

#[given("a data directory holding the boundary, stadium and pub files")]
fn complete_directory(
    #[from(data_dir)] data_dir: &TempDir,
    #[from(loader)] loader: &RefCell<Option<DatasetLoader<FileDatasetSource>>>,
) {
    write(data_dir, "London.geojson", BOUNDARY);
    write(data_dir, "stadiums.geojson", &stadiums());
    write(data_dir, "pubs.geojson", &pubs());
    *loader.borrow_mut() = Some(DatasetLoader::new(FileDatasetSource::new(root_of(data_dir))));
}

#[given("a data directory without a pub file")]
fn directory_without_pubs(
    #[from(data_dir)] data_dir: &TempDir,
    #[from(loader)] loader: &RefCell<Option<DatasetLoader<FileDatasetSource>>>,
) {
    write(data_dir, "London.geojson", BOUNDARY);
    write(data_dir, "stadiums.geojson", &stadiums());
    *loader.borrow_mut() = Some(DatasetLoader::new(FileDatasetSource::new(root_of(data_dir))));
}

#[given("a source whose pub fetch fails")]
fn failing_pub_source(#[from(stub)] stub: &RefCell<Option<StubDatasetSource>>) {
    *stub.borrow_mut() =
        Some(StubDatasetSource::new(BOUNDARY, &stadiums(), &pubs()).failing(DatasetKind::Pubs));
}

#[when("the datasets are loaded")]
fn load_datasets(
    #[from(loader)] loader: &RefCell<Option<DatasetLoader<FileDatasetSource>>>,
    #[from(outcome)] outcome: &LoadCell,
) {
    let guard = loader.borrow();
    let loader = guard.as_ref().expect("loader prepared");
    *outcome.borrow_mut() = Some(loader.load_blocking());
}

#[when("the map is started from the source")]
fn start_map(
    #[from(stub)] stub: &RefCell<Option<StubDatasetSource>>,
    #[from(scene)] scene: &RefCell<Scene>,
) {
    let source = stub.borrow_mut().take().expect("stub prepared");
    let loaded = DatasetLoader::new(source).load_blocking();
    let started = MapSession::bootstrap(
        &mut *scene.borrow_mut(),
        MapShell::for_display_width(1024),
        loaded,
    );
    assert!(started.is_err(), "a failed load must not start a session");
}

#[then("one stadium and two pubs are available")]
fn stadium_and_pubs_available(#[from(outcome)] outcome: &LoadCell) {
    let guard = outcome.borrow();
    let datasets = guard
        .as_ref()
        .and_then(|result| result.as_ref().ok())
        .expect("datasets loaded");
    assert_eq!(datasets.stadiums.len(), 1);
    assert_eq!(datasets.pubs.len(), 2);
    let den = datasets.stadiums.first().expect("stadium present");
    assert_eq!(den.club_label(), "Millwall");
}

#[then("the boundary has one polygon")]
fn boundary_has_one_polygon(#[from(outcome)] outcome: &LoadCell) {
    let guard = outcome.borrow();
    let datasets = guard
        .as_ref()
        .and_then(|result| result.as_ref().ok())
        .expect("datasets loaded");
    assert_eq!(datasets.boundary.shape.0.len(), 1);
}

#[then("the load fails while reading the pubs dataset")]
fn load_fails_on_pubs(#[from(outcome)] outcome: &LoadCell) {
    let guard = outcome.borrow();
    match guard.as_ref().expect("load attempted") {
        Err(DatasetLoadError::Read { kind, path, .. }) => {
            assert_eq!(*kind, DatasetKind::Pubs);
            assert_eq!(path.file_name(), Some("pubs.geojson"));
        }
        other => panic!("expected a read error for pubs, got {other:?}"),
    }
}

#[then("no stadium or pub markers are drawn")]
fn no_markers(#[from(scene)] scene: &RefCell<Scene>) {
    assert_eq!(scene.borrow().marker_count(), 0);
}

#[then("the stadium list shows the load error once")]
fn error_shown_once(#[from(scene)] scene: &RefCell<Scene>) {
    let scene = scene.borrow();
    assert_eq!(scene.list_errors_shown(), 1);
    assert_eq!(
        scene.stadium_list(),
        &StadiumListPanel::Error(LOAD_ERROR_MESSAGE.to_owned())
    );
}

#[scenario(path = "tests/features/dataset_loader.feature", index = 0)]
fn loads_from_directory(
    data_dir: TempDir,
    loader: RefCell<Option<DatasetLoader<FileDatasetSource>>>,
    stub: RefCell<Option<StubDatasetSource>>,
    outcome: LoadCell,
    scene: RefCell<Scene>,
) {
    let _ = (data_dir, loader, stub, outcome, scene);
}

#[scenario(path = "tests/features/dataset_loader.feature", index = 1)]
fn missing_pub_file(
    data_dir: TempDir,
    loader: RefCell<Option<DatasetLoader<FileDatasetSource>>>,
    stub: RefCell<Option<StubDatasetSource>>,
    outcome: LoadCell,
    scene: RefCell<Scene>,
) {
    let _ = (data_dir, loader, stub, outcome, scene);
}

#[scenario(path = "tests/features/dataset_loader.feature", index = 2)]
fn failed_pub_fetch(
    data_dir: TempDir,
    loader: RefCell<Option<DatasetLoader<FileDatasetSource>>>,
    stub: RefCell<Option<StubDatasetSource>>,
    outcome: LoadCell,
    scene: RefCell<Scene>,
) {
    let _ = (data_dir, loader, stub, outcome, scene);
}
