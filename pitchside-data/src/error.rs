//! Error types produced while loading the map datasets.

use std::io;

use camino::Utf8PathBuf;
use thiserror::Error;

use crate::source::DatasetKind;

/// Errors produced while fetching or decoding a dataset.
///
/// Any one of these aborts the whole load; partial datasets are never
/// returned.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DatasetLoadError {
    /// Reading a dataset file failed.
    #[error("failed to read the {kind} dataset from {path}")]
    Read {
        /// Dataset being read.
        kind: DatasetKind,
        /// File that could not be read.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The dataset URL could not be built from the base URL.
    #[error("cannot build a URL for the {kind} dataset from {base}")]
    InvalidUrl {
        /// Dataset being located.
        kind: DatasetKind,
        /// Configured base URL.
        base: String,
        /// Underlying parse error.
        #[source]
        source: url::ParseError,
    },
    /// The HTTP request for a dataset failed before a response arrived, or
    /// the body could not be read.
    #[error("request for the {kind} dataset at {url} failed")]
    Request {
        /// Dataset being fetched.
        kind: DatasetKind,
        /// Fully qualified request URL.
        url: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },
    /// The server answered with a non-success status.
    #[error("request for the {kind} dataset at {url} returned status {status}")]
    Status {
        /// Dataset being fetched.
        kind: DatasetKind,
        /// Fully qualified request URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },
    /// The payload is not valid GeoJSON.
    #[error("the {kind} dataset is not valid GeoJSON")]
    Parse {
        /// Dataset being decoded.
        kind: DatasetKind,
        /// Underlying decoding error.
        #[source]
        source: Box<geojson::Error>,
    },
    /// The payload is GeoJSON but not a feature collection.
    #[error("the {kind} dataset is not a FeatureCollection")]
    NotFeatureCollection {
        /// Dataset being decoded.
        kind: DatasetKind,
    },
    /// A background file read was cancelled or panicked.
    #[error("background read of the {kind} dataset did not complete")]
    Join {
        /// Dataset being read.
        kind: DatasetKind,
        /// Underlying task error.
        #[source]
        source: tokio::task::JoinError,
    },
    /// Building the Tokio runtime for a blocking load failed.
    #[error("failed to build the Tokio runtime")]
    Runtime {
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl DatasetLoadError {
    /// Dataset the error refers to, if any.
    #[must_use]
    pub const fn kind(&self) -> Option<DatasetKind> {
        match self {
            Self::Read { kind, .. }
            | Self::InvalidUrl { kind, .. }
            | Self::Request { kind, .. }
            | Self::Status { kind, .. }
            | Self::Parse { kind, .. }
            | Self::NotFeatureCollection { kind }
            | Self::Join { kind, .. } => Some(*kind),
            Self::Runtime { .. } => None,
        }
    }
}
