//! Fetches all three datasets concurrently and decodes them together.

use pitchside_core::Datasets;
use tokio::runtime::{Handle, RuntimeFlavor};

use crate::error::DatasetLoadError;
use crate::parse::{parse_boundary, parse_pubs, parse_stadiums};
use crate::source::{DatasetKind, DatasetSource};

/// Loads the boundary, stadium and pub datasets from one source.
///
/// # Examples
/// ```no_run
/// use pitchside_data::{DatasetLoader, FileDatasetSource};
///
/// let loader = DatasetLoader::new(FileDatasetSource::new("data"));
/// let datasets = loader.load_blocking()?;
/// println!("{} stadiums", datasets.stadiums.len());
/// # Ok::<(), pitchside_data::DatasetLoadError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DatasetLoader<S> {
    source: S,
}

impl<S: DatasetSource> DatasetLoader<S> {
    /// Wrap a dataset source.
    #[must_use]
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// The wrapped source.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Fetch the three datasets concurrently, then decode them.
    ///
    /// Nothing is returned unless every fetch and decode succeeds.
    ///
    /// # Errors
    ///
    /// Returns the first fetch error to surface, or the first decode error
    /// in boundary, stadiums, pubs order.
    pub async fn load(&self) -> Result<Datasets, DatasetLoadError> {
        for kind in DatasetKind::ALL {
            log::debug!("fetching {kind} dataset from {}", self.source.locate(kind));
        }
        let (boundary, stadiums, pubs) = tokio::try_join!(
            self.source.fetch(DatasetKind::Boundary),
            self.source.fetch(DatasetKind::Stadiums),
            self.source.fetch(DatasetKind::Pubs),
        )?;

        let datasets = Datasets {
            boundary: parse_boundary(&boundary)?,
            stadiums: parse_stadiums(&stadiums)?,
            pubs: parse_pubs(&pubs)?,
        };
        log::info!(
            "loaded {} stadiums, {} pubs and {} boundary polygons",
            datasets.stadiums.len(),
            datasets.pubs.len(),
            datasets.boundary.shape.0.len()
        );
        Ok(datasets)
    }

    /// Run [`load`](Self::load) to completion from synchronous code.
    ///
    /// Inside a multi-threaded Tokio runtime the load runs on that runtime
    /// via [`tokio::task::block_in_place`]; otherwise a current-thread
    /// runtime is built for the call. Calling this from inside a
    /// current-thread runtime is not supported.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetLoadError::Runtime`] if a runtime cannot be built,
    /// or any error from [`load`](Self::load).
    pub fn load_blocking(&self) -> Result<Datasets, DatasetLoadError> {
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(self.load()))
            }
            _ => tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .map_err(|source| DatasetLoadError::Runtime { source })?
                .block_on(self.load()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{StubDatasetSource, pub_collection, stadium_collection};
    use geo::Coord;
    use rstest::{fixture, rstest};

    #[fixture]
    fn stub() -> StubDatasetSource {
        StubDatasetSource::new(
            r#"{"type": "FeatureCollection", "features": []}"#,
            &stadium_collection(&[(1, Coord { x: -0.0509, y: 51.4859 }, Some("The Den"), Some("Millwall"))]),
            &pub_collection(&[(1, Coord { x: -0.05, y: 51.486 }, None)]),
        )
    }

    #[rstest]
    fn loads_every_dataset(stub: StubDatasetSource) {
        let loader = DatasetLoader::new(stub);
        let datasets = loader.load_blocking().expect("all datasets load");

        assert_eq!(datasets.stadiums.len(), 1);
        assert_eq!(datasets.pubs.len(), 1);
        assert!(datasets.boundary.shape.0.is_empty());
        assert_eq!(loader.source().fetched().len(), 3);
    }

    #[rstest]
    #[case(DatasetKind::Boundary)]
    #[case(DatasetKind::Stadiums)]
    #[case(DatasetKind::Pubs)]
    fn any_failed_fetch_fails_the_load(stub: StubDatasetSource, #[case] failing: DatasetKind) {
        let loader = DatasetLoader::new(stub.failing(failing));
        let err = loader.load_blocking().expect_err("one dataset fails");

        assert_eq!(err.kind(), Some(failing));
    }

    #[rstest]
    fn decode_errors_fail_the_load(stub: StubDatasetSource) {
        let loader = DatasetLoader::new(stub.with_payload(DatasetKind::Stadiums, "[1, 2"));
        let err = loader.load_blocking().expect_err("stadiums are malformed");

        assert!(matches!(
            err,
            DatasetLoadError::Parse {
                kind: DatasetKind::Stadiums,
                ..
            }
        ));
    }

    #[rstest]
    #[tokio::test(flavor = "multi_thread")]
    async fn blocking_load_runs_inside_a_multi_threaded_runtime(stub: StubDatasetSource) {
        let loader = DatasetLoader::new(stub);
        let datasets = loader.load_blocking().expect("all datasets load");

        assert_eq!(datasets.stadiums.len(), 1);
    }
}
