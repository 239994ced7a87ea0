//! Decodes GeoJSON feature collections into domain records.
//!
//! Stadiums and pubs are point features carrying a positive integer `id`
//! property. Features that do not fit are skipped with a warning so that a
//! single bad row does not blank the map.

use geo::{Coord, LineString, MultiPolygon, Polygon};
use geojson::{Feature, FeatureCollection, GeoJson, JsonValue, Value};
use pitchside_core::{Boundary, Pub, Stadium};

use crate::error::DatasetLoadError;
use crate::source::DatasetKind;

/// Decode the stadium dataset.
///
/// # Errors
///
/// Returns an error if the text is not a GeoJSON feature collection.
pub fn parse_stadiums(text: &str) -> Result<Vec<Stadium>, DatasetLoadError> {
    let collection = feature_collection(DatasetKind::Stadiums, text)?;
    Ok(collection
        .features
        .iter()
        .enumerate()
        .filter_map(|(index, feature)| {
            let (id, location) = point_record(DatasetKind::Stadiums, index, feature)?;
            let mut stadium = Stadium::new(id, location);
            if let Some(name) = string_property(feature, "name") {
                stadium = stadium.with_name(name);
            }
            if let Some(operator) = string_property(feature, "operator") {
                stadium = stadium.with_operator(operator);
            }
            Some(stadium)
        })
        .collect())
}

/// Decode the pub dataset.
///
/// # Errors
///
/// Returns an error if the text is not a GeoJSON feature collection.
pub fn parse_pubs(text: &str) -> Result<Vec<Pub>, DatasetLoadError> {
    let collection = feature_collection(DatasetKind::Pubs, text)?;
    Ok(collection
        .features
        .iter()
        .enumerate()
        .filter_map(|(index, feature)| {
            let (id, location) = point_record(DatasetKind::Pubs, index, feature)?;
            let venue = Pub::new(id, location);
            Some(match string_property(feature, "name") {
                Some(name) => venue.with_name(name),
                None => venue,
            })
        })
        .collect())
}

/// Decode the boundary dataset.
///
/// Every polygon and multipolygon in the collection joins one multipolygon.
///
/// # Errors
///
/// Returns an error if the text is not a GeoJSON feature collection.
pub fn parse_boundary(text: &str) -> Result<Boundary, DatasetLoadError> {
    let collection = feature_collection(DatasetKind::Boundary, text)?;
    let mut polygons = Vec::new();
    for (index, feature) in collection.features.iter().enumerate() {
        match feature.geometry.as_ref().map(|geometry| &geometry.value) {
            Some(Value::Polygon(rings)) => polygons.extend(polygon(rings)),
            Some(Value::MultiPolygon(members)) => {
                polygons.extend(members.iter().filter_map(|rings| polygon(rings)));
            }
            Some(_) => log::warn!("skipping boundary feature {index}: not a polygon"),
            None => log::warn!("skipping boundary feature {index}: no geometry"),
        }
    }
    Ok(Boundary::new(MultiPolygon::new(polygons)))
}

fn feature_collection(kind: DatasetKind, text: &str) -> Result<FeatureCollection, DatasetLoadError> {
    let parsed = text
        .parse::<GeoJson>()
        .map_err(|source| DatasetLoadError::Parse {
            kind,
            source: Box::new(source),
        })?;
    match parsed {
        GeoJson::FeatureCollection(collection) => Ok(collection),
        GeoJson::Feature(_) | GeoJson::Geometry(_) => {
            Err(DatasetLoadError::NotFeatureCollection { kind })
        }
    }
}

fn point_record(kind: DatasetKind, index: usize, feature: &Feature) -> Option<(u64, Coord<f64>)> {
    let Some(geometry) = feature.geometry.as_ref() else {
        log::warn!("skipping {kind} feature {index}: no geometry");
        return None;
    };
    let Value::Point(position) = &geometry.value else {
        log::warn!("skipping {kind} feature {index}: not a point");
        return None;
    };
    let Some(location) = coord(position) else {
        log::warn!("skipping {kind} feature {index}: malformed position");
        return None;
    };
    let Some(id) = feature
        .property("id")
        .and_then(JsonValue::as_u64)
        .filter(|id| *id > 0)
    else {
        log::warn!("skipping {kind} feature {index}: missing positive integer id");
        return None;
    };
    Some((id, location))
}

fn string_property<'a>(feature: &'a Feature, key: &str) -> Option<&'a str> {
    feature.property(key).and_then(JsonValue::as_str)
}

fn coord(position: &[f64]) -> Option<Coord<f64>> {
    match position {
        [x, y, ..] if x.is_finite() && y.is_finite() => Some(Coord { x: *x, y: *y }),
        _ => None,
    }
}

fn polygon(rings: &[Vec<Vec<f64>>]) -> Option<Polygon<f64>> {
    let (exterior, interiors) = rings.split_first()?;
    Some(Polygon::new(
        ring(exterior),
        interiors.iter().map(|interior| ring(interior)).collect(),
    ))
}

fn ring(positions: &[Vec<f64>]) -> LineString<f64> {
    positions.iter().filter_map(|position| coord(position)).collect()
}
