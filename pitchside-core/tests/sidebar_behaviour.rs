//! Behavioural tests for the stadium list and identifier fallbacks.

use geo::Coord;
use pitchside_core::{
    Datasets, MapSession, MapShell, Pub, Scene, SidebarEntry, Stadium, build_sidebar,
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

fn at(x: f64, y: f64) -> Coord<f64> {
    Coord { x, y }
}

#[fixture]
fn datasets() -> RefCell<Datasets> {
    RefCell::new(Datasets::default())
}

#[fixture]
fn rows() -> RefCell<Vec<SidebarEntry>> {
    RefCell::new(Vec::new())
}

#[fixture]
fn scene() -> RefCell<Scene> {
    RefCell::new(Scene::default())
}

#[fixture]
fn session() -> RefCell<Option<MapSession>> {
    RefCell::new(None)
}

#[given("stadiums operated by Arsenal, an unnamed club and Chelsea")]
fn given_three_clubs(#[from(datasets)] datasets: &RefCell<Datasets>) {
    datasets.borrow_mut().stadiums = vec![
        Stadium::new(1, at(-0.1086, 51.5549)).with_operator("Arsenal"),
        Stadium::new(2, at(-0.0660, 51.6043)),
        Stadium::new(3, at(-0.1910, 51.4817)).with_operator("Chelsea"),
    ];
}

#[given("an unnamed stadium with id 7 and an unnamed pub with id 3")]
fn given_unnamed_features(#[from(datasets)] datasets: &RefCell<Datasets>) {
    let mut datasets = datasets.borrow_mut();
    datasets.stadiums = vec![Stadium::new(7, at(-0.1, 51.5))];
    datasets.pubs = vec![Pub::new(3, at(-0.1, 51.501))];
}

#[when("the sidebar is built")]
fn when_sidebar_built(
    #[from(datasets)] datasets: &RefCell<Datasets>,
    #[from(rows)] rows: &RefCell<Vec<SidebarEntry>>,
) {
    *rows.borrow_mut() = build_sidebar(&datasets.borrow().stadiums);
}

#[when("the map starts")]
fn when_map_starts(
    #[from(datasets)] datasets: &RefCell<Datasets>,
    #[from(scene)] scene: &RefCell<Scene>,
    #[from(session)] session: &RefCell<Option<MapSession>>,
) {
    let loaded: Result<Datasets, std::io::Error> = Ok(datasets.take());
    let started = MapSession::bootstrap(
        &mut *scene.borrow_mut(),
        MapShell::for_display_width(1024),
        loaded,
    )
    .expect("datasets are present");
    *session.borrow_mut() = Some(started);
}

#[then("the rows read Stadium #2, Arsenal, Chelsea in that order")]
fn then_rows_in_order(#[from(rows)] rows: &RefCell<Vec<SidebarEntry>>) {
    let rows = rows.borrow();
    let labels: Vec<&str> = rows.iter().map(|row| row.label.as_str()).collect();
    assert_eq!(labels, ["Stadium #2", "Arsenal", "Chelsea"]);
    let ids: Vec<u64> = rows.iter().map(|row| row.stadium_id).collect();
    assert_eq!(ids, [2, 1, 3]);
}

#[then("the stadium popup reads Stadium #7")]
fn then_stadium_popup(
    #[from(scene)] scene: &RefCell<Scene>,
    #[from(session)] session: &RefCell<Option<MapSession>>,
) {
    let session = session.borrow();
    let marker = session
        .as_ref()
        .and_then(|started| started.layers().stadiums.by_feature(7))
        .expect("stadium marker drawn");
    assert_eq!(
        scene.borrow().popup(marker.layer).as_deref(),
        Some("<b>Stadium #7</b>")
    );
}

#[then("the pub popup reads Pub #3")]
fn then_pub_popup(
    #[from(scene)] scene: &RefCell<Scene>,
    #[from(session)] session: &RefCell<Option<MapSession>>,
) {
    let session = session.borrow();
    let marker = session
        .as_ref()
        .and_then(|started| started.layers().pubs.by_feature(3))
        .expect("pub marker drawn");
    assert_eq!(
        scene.borrow().popup(marker.layer).as_deref(),
        Some("<b>Pub #3</b>")
    );
}

#[scenario(path = "tests/features/sidebar.feature", index = 0)]
fn scenario_sidebar_order(
    datasets: RefCell<Datasets>,
    rows: RefCell<Vec<SidebarEntry>>,
    scene: RefCell<Scene>,
    session: RefCell<Option<MapSession>>,
) {
    let _ = (datasets, rows, scene, session);
}

#[scenario(path = "tests/features/sidebar.feature", index = 1)]
fn scenario_identifier_fallbacks(
    datasets: RefCell<Datasets>,
    rows: RefCell<Vec<SidebarEntry>>,
    scene: RefCell<Scene>,
    session: RefCell<Option<MapSession>>,
) {
    let _ = (datasets, rows, scene, session);
}
