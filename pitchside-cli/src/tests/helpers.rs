//! Test helpers that lay out GeoJSON datasets on disk.

use camino::{Utf8Path, Utf8PathBuf};
use geo::Coord;
use pitchside_core::test_support::offset;
use pitchside_data::test_support::{pub_collection, stadium_collection};
use std::fs;
use tempfile::TempDir;

pub(super) use pitchside_core::test_support::THE_DEN;

const THE_VALLEY: Coord<f64> = Coord {
    x: 0.0364,
    y: 51.4865,
};

const BOUNDARY: &str = r#"{"type": "FeatureCollection", "features": [
    {"type": "Feature", "properties": {}, "geometry": {"type": "Polygon",
     "coordinates": [[[-0.51, 51.28], [0.33, 51.28], [0.33, 51.69], [-0.51, 51.69], [-0.51, 51.28]]]}}
]}"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &str) {
    fs::write(path.as_std_path(), contents)
        .unwrap_or_else(|err| panic!("failed to write {path}: {err}"));
}

/// A temporary data directory holding the three default dataset files.
///
/// Stadium 1 (Millwall) has pubs 1, 2 and 3 at 0.3, 0.9 and 1.5 km; stadium
/// 2 (Charlton Athletic) is about six kilometres east.
pub(super) struct DataDirectory {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl DataDirectory {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 tempdir");
        write_utf8(&root.join("London.geojson"), BOUNDARY);
        write_utf8(
            &root.join("stadiums.geojson"),
            &stadium_collection(&[
                (1, THE_DEN, Some("The Den"), Some("Millwall")),
                (2, THE_VALLEY, Some("The Valley"), Some("Charlton Athletic")),
            ]),
        );
        write_utf8(
            &root.join("pubs.geojson"),
            &pub_collection(&[
                (1, offset(THE_DEN, 10.0, 300.0), Some("The Lions")),
                (2, offset(THE_DEN, 135.0, 900.0), None),
                (3, offset(THE_DEN, 270.0, 1500.0), None),
            ]),
        );
        Self { _dir: dir, root }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn remove(&self, name: &str) {
        fs::remove_file(self.root.join(name).as_std_path())
            .unwrap_or_else(|err| panic!("failed to remove {name}: {err}"));
    }
}
