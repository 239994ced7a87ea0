//! Where the three datasets come from.
//!
//! A [`DatasetSource`] hands back the raw text of one dataset. Decoding is
//! left to the loader so that every source shares the same parsing rules.

use std::fmt;

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use pitchside_fs::read_utf8_to_string;

use crate::error::DatasetLoadError;

/// Default file name of the boundary dataset.
pub const DEFAULT_BOUNDARY_FILE: &str = "London.geojson";
/// Default file name of the stadium dataset.
pub const DEFAULT_STADIUMS_FILE: &str = "stadiums.geojson";
/// Default file name of the pub dataset.
pub const DEFAULT_PUBS_FILE: &str = "pubs.geojson";

/// The three datasets the map needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DatasetKind {
    /// Region outline drawn as a backdrop.
    Boundary,
    /// Stadium points.
    Stadiums,
    /// Pub points.
    Pubs,
}

impl DatasetKind {
    /// Every dataset, in load order.
    pub const ALL: [Self; 3] = [Self::Boundary, Self::Stadiums, Self::Pubs];

    /// Lowercase name used in messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Boundary => "boundary",
            Self::Stadiums => "stadiums",
            Self::Pubs => "pubs",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// File names of the datasets relative to a data root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetFiles {
    /// Boundary file name.
    pub boundary: String,
    /// Stadium file name.
    pub stadiums: String,
    /// Pub file name.
    pub pubs: String,
}

impl Default for DatasetFiles {
    fn default() -> Self {
        Self {
            boundary: DEFAULT_BOUNDARY_FILE.to_owned(),
            stadiums: DEFAULT_STADIUMS_FILE.to_owned(),
            pubs: DEFAULT_PUBS_FILE.to_owned(),
        }
    }
}

impl DatasetFiles {
    /// File name for one dataset.
    #[must_use]
    pub fn file_name(&self, kind: DatasetKind) -> &str {
        match kind {
            DatasetKind::Boundary => &self.boundary,
            DatasetKind::Stadiums => &self.stadiums,
            DatasetKind::Pubs => &self.pubs,
        }
    }

    /// Replace the boundary file name.
    #[must_use]
    pub fn with_boundary(mut self, name: impl Into<String>) -> Self {
        self.boundary = name.into();
        self
    }

    /// Replace the stadium file name.
    #[must_use]
    pub fn with_stadiums(mut self, name: impl Into<String>) -> Self {
        self.stadiums = name.into();
        self
    }

    /// Replace the pub file name.
    #[must_use]
    pub fn with_pubs(mut self, name: impl Into<String>) -> Self {
        self.pubs = name.into();
        self
    }
}

/// Supplies the raw GeoJSON text of each dataset.
#[async_trait(?Send)]
pub trait DatasetSource {
    /// Human-readable location of a dataset, used in log lines.
    fn locate(&self, kind: DatasetKind) -> String;

    /// Fetch the full text of a dataset.
    async fn fetch(&self, kind: DatasetKind) -> Result<String, DatasetLoadError>;
}

/// Reads datasets from a local directory.
#[derive(Debug, Clone)]
pub struct FileDatasetSource {
    root: Utf8PathBuf,
    files: DatasetFiles,
}

impl FileDatasetSource {
    /// Read the default file names from `root`.
    #[must_use]
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self {
            root: root.into(),
            files: DatasetFiles::default(),
        }
    }

    /// Override the dataset file names.
    #[must_use]
    pub fn with_files(mut self, files: DatasetFiles) -> Self {
        self.files = files;
        self
    }

    /// Directory the datasets are read from.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Full path of one dataset.
    #[must_use]
    pub fn path(&self, kind: DatasetKind) -> Utf8PathBuf {
        self.root.join(self.files.file_name(kind))
    }
}

#[async_trait(?Send)]
impl DatasetSource for FileDatasetSource {
    fn locate(&self, kind: DatasetKind) -> String {
        self.path(kind).into_string()
    }

    async fn fetch(&self, kind: DatasetKind) -> Result<String, DatasetLoadError> {
        let path = self.path(kind);
        let task_path = path.clone();
        let read = tokio::task::spawn_blocking(move || read_utf8_to_string(&task_path))
            .await
            .map_err(|source| DatasetLoadError::Join { kind, source })?;
        read.map_err(|source| DatasetLoadError::Read { kind, path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(DatasetKind::Boundary, "London.geojson")]
    #[case(DatasetKind::Stadiums, "stadiums.geojson")]
    #[case(DatasetKind::Pubs, "pubs.geojson")]
    fn default_file_names(#[case] kind: DatasetKind, #[case] expected: &str) {
        assert_eq!(DatasetFiles::default().file_name(kind), expected);
    }

    #[rstest]
    fn file_names_can_be_overridden() {
        let files = DatasetFiles::default()
            .with_boundary("greater-london.geojson")
            .with_pubs("bars.geojson");
        let source = FileDatasetSource::new("data").with_files(files);

        assert_eq!(
            source.path(DatasetKind::Boundary),
            Utf8PathBuf::from("data/greater-london.geojson")
        );
        assert_eq!(
            source.path(DatasetKind::Stadiums),
            Utf8PathBuf::from("data/stadiums.geojson")
        );
        assert_eq!(source.locate(DatasetKind::Pubs), "data/bars.geojson");
    }

    #[rstest]
    fn kinds_display_in_lowercase() {
        let names: Vec<String> = DatasetKind::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(names, ["boundary", "stadiums", "pubs"]);
    }
}
