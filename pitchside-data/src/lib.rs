//! Dataset loading for Pitchside.
//!
//! Responsibilities:
//! - Fetch the boundary, stadium and pub GeoJSON from a directory or a base
//!   URL.
//! - Decode feature collections into `pitchside-core` records.
//! - Fail the whole load when any one dataset cannot be fetched or decoded.
//!
//! Boundaries:
//! - No map logic; rendering and selection live in `pitchside-core`.
//! - Blocking file reads run on Tokio's blocking pool, never on the executor.
#![forbid(unsafe_code)]

mod error;
mod http;
mod loader;
mod parse;
mod source;

#[doc(hidden)]
pub mod test_support;

pub use error::DatasetLoadError;
pub use http::{ClientBuildError, DEFAULT_USER_AGENT, HttpDatasetSource, HttpDatasetSourceConfig};
pub use loader::DatasetLoader;
pub use parse::{parse_boundary, parse_pubs, parse_stadiums};
pub use source::{
    DEFAULT_BOUNDARY_FILE, DEFAULT_PUBS_FILE, DEFAULT_STADIUMS_FILE, DatasetFiles, DatasetKind,
    DatasetSource, FileDatasetSource,
};
