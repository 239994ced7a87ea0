//! Facade crate for Pitchside, the London stadiums and pubs map.
//!
//! This crate re-exports the core map types together with the dataset
//! loaders so embedders can depend on a single crate.

#![forbid(unsafe_code)]

pub use pitchside_core::{
    Boundary, Datasets, FocusReport, LOAD_ERROR_MESSAGE, MapEvent, MapHost, MapSession, MapShell,
    Pub, SEARCH_RADIUS_METRES, Scene, SelectError, SidebarEntry, Stadium, Summary, build_sidebar,
};

pub use pitchside_data::{
    DatasetKind, DatasetLoadError, DatasetLoader, DatasetSource, FileDatasetSource,
    HttpDatasetSource, HttpDatasetSourceConfig,
};
