//! Test doubles for dataset sources.
//!
//! [`StubDatasetSource`] serves fixed payloads from memory and can be told
//! to fail individual datasets, so loader behaviour can be checked without
//! touching the filesystem or the network.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use geo::Coord;
use serde_json::{Value, json};

use crate::error::DatasetLoadError;
use crate::source::{DatasetKind, DatasetSource};

/// Stadium row for [`stadium_collection`]: id, location, name, operator.
pub type StadiumRow<'a> = (u64, Coord<f64>, Option<&'a str>, Option<&'a str>);

/// Pub row for [`pub_collection`]: id, location, name.
pub type PubRow<'a> = (u64, Coord<f64>, Option<&'a str>);

/// In-memory [`DatasetSource`].
///
/// # Example
///
/// ```
/// use pitchside_data::test_support::StubDatasetSource;
/// use pitchside_data::{DatasetKind, DatasetLoader};
///
/// let empty = r#"{"type": "FeatureCollection", "features": []}"#;
/// let stub = StubDatasetSource::new(empty, empty, empty).failing(DatasetKind::Pubs);
/// assert!(DatasetLoader::new(stub).load_blocking().is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StubDatasetSource {
    payloads: BTreeMap<DatasetKind, String>,
    failures: BTreeSet<DatasetKind>,
    fetched: RefCell<Vec<DatasetKind>>,
}

impl StubDatasetSource {
    /// Serve the given payloads.
    #[must_use]
    pub fn new(boundary: &str, stadiums: &str, pubs: &str) -> Self {
        Self::default()
            .with_payload(DatasetKind::Boundary, boundary)
            .with_payload(DatasetKind::Stadiums, stadiums)
            .with_payload(DatasetKind::Pubs, pubs)
    }

    /// Replace the payload of one dataset.
    #[must_use]
    pub fn with_payload(mut self, kind: DatasetKind, payload: &str) -> Self {
        self.payloads.insert(kind, payload.to_owned());
        self
    }

    /// Answer fetches of `kind` with a 404 status error.
    #[must_use]
    pub fn failing(mut self, kind: DatasetKind) -> Self {
        self.failures.insert(kind);
        self
    }

    /// Datasets requested so far, in request order.
    #[must_use]
    pub fn fetched(&self) -> Vec<DatasetKind> {
        self.fetched.borrow().clone()
    }
}

#[async_trait(?Send)]
impl DatasetSource for StubDatasetSource {
    fn locate(&self, kind: DatasetKind) -> String {
        format!("stub://{kind}")
    }

    async fn fetch(&self, kind: DatasetKind) -> Result<String, DatasetLoadError> {
        self.fetched.borrow_mut().push(kind);
        if self.failures.contains(&kind) {
            return Err(DatasetLoadError::Status {
                kind,
                url: self.locate(kind),
                status: 404,
            });
        }
        Ok(self.payloads.get(&kind).cloned().unwrap_or_default())
    }
}

/// A stadium feature collection as GeoJSON text.
#[must_use]
pub fn stadium_collection(rows: &[StadiumRow<'_>]) -> String {
    collection(rows.iter().map(|&(id, location, name, operator)| {
        point_feature(
            location,
            json!({ "id": id, "name": name, "operator": operator }),
        )
    }))
}

/// A pub feature collection as GeoJSON text.
#[must_use]
pub fn pub_collection(rows: &[PubRow<'_>]) -> String {
    collection(
        rows.iter()
            .map(|&(id, location, name)| point_feature(location, json!({ "id": id, "name": name }))),
    )
}

fn point_feature(location: Coord<f64>, properties: Value) -> Value {
    json!({
        "type": "Feature",
        "geometry": { "type": "Point", "coordinates": [location.x, location.y] },
        "properties": properties,
    })
}

fn collection(features: impl Iterator<Item = Value>) -> String {
    json!({
        "type": "FeatureCollection",
        "features": features.collect::<Vec<_>>(),
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::{parse_pubs, parse_stadiums};
    use rstest::rstest;

    #[rstest]
    fn generated_collections_parse_back() {
        let stadiums = stadium_collection(&[(4, Coord { x: 0.1, y: 51.5 }, None, Some("Orient"))]);
        let pubs = pub_collection(&[(9, Coord { x: 0.2, y: 51.6 }, Some("The Birkbeck"))]);

        let stadium = parse_stadiums(&stadiums).expect("stadiums parse");
        let venue = parse_pubs(&pubs).expect("pubs parse");
        assert_eq!(stadium.first().map(|s| s.sidebar_label()).as_deref(), Some("Orient"));
        assert_eq!(venue.first().map(|p| p.popup_label()).as_deref(), Some("The Birkbeck"));
    }
}
