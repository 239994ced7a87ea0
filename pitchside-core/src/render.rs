//! Turns loaded datasets into host layers.
//!
//! Every marker is recorded in a [`MarkerRegistry`] so that the sidebar and
//! the proximity highlighter can find a marker from a dataset identifier, and
//! click events can be traced back from a layer to its feature.

use std::collections::{BTreeMap, HashMap};

use geo::Coord;

use crate::host::{Layer, LayerId, MapHost, popup_markup};
use crate::model::Datasets;
use crate::style::{BOUNDARY_STYLE, PubStyle, STADIUM_ICON_URL};

/// A rendered point feature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    /// Dataset identifier of the feature.
    pub feature_id: u64,
    /// Host handle of the marker layer.
    pub layer: LayerId,
    /// Marker position.
    pub location: Coord<f64>,
    /// Position of the feature in its dataset.
    pub record: usize,
}

/// Two-way mapping between dataset identifiers and marker layers.
///
/// When a dataset repeats an identifier, lookups by identifier resolve to the
/// first marker rendered for it; every marker is still iterated.
#[derive(Debug, Clone, Default)]
pub struct MarkerRegistry {
    markers: Vec<Marker>,
    by_feature: BTreeMap<u64, usize>,
    by_layer: HashMap<LayerId, usize>,
}

impl MarkerRegistry {
    fn insert(&mut self, marker: Marker) {
        let position = self.markers.len();
        self.by_feature.entry(marker.feature_id).or_insert(position);
        self.by_layer.insert(marker.layer, position);
        self.markers.push(marker);
    }

    /// Marker rendered for a dataset identifier.
    #[must_use]
    pub fn by_feature(&self, feature_id: u64) -> Option<&Marker> {
        self.by_feature
            .get(&feature_id)
            .and_then(|&position| self.markers.get(position))
    }

    /// Marker owning a host layer.
    #[must_use]
    pub fn by_layer(&self, layer: LayerId) -> Option<&Marker> {
        self.by_layer
            .get(&layer)
            .and_then(|&position| self.markers.get(position))
    }

    /// Markers in rendering order.
    pub fn iter(&self) -> impl Iterator<Item = &Marker> + '_ {
        self.markers.iter()
    }

    /// Number of rendered markers.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.markers.len()
    }

    /// Whether nothing was rendered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

/// Handles of everything drawn from the datasets.
#[derive(Debug, Clone, Default)]
pub struct RenderedLayers {
    /// Boundary layer.
    pub boundary: Option<LayerId>,
    /// Stadium markers.
    pub stadiums: MarkerRegistry,
    /// Pub markers, all in the default style when first drawn.
    pub pubs: MarkerRegistry,
}

/// Draw the boundary, stadium markers and pub markers.
///
/// The boundary goes to the back so that point markers stay clickable.
pub fn render_layers(host: &mut dyn MapHost, datasets: &Datasets) -> RenderedLayers {
    let mut rendered = RenderedLayers::default();

    if !datasets.boundary.shape.0.is_empty() {
        let layer = host.add_layer(Layer::Boundary {
            shape: datasets.boundary.shape.clone(),
            style: BOUNDARY_STYLE,
        });
        host.bring_to_back(layer);
        rendered.boundary = Some(layer);
    }

    for (record, stadium) in datasets.stadiums.iter().enumerate() {
        let layer = host.add_layer(Layer::StadiumMarker {
            location: stadium.location,
            popup: popup_markup(&stadium.popup_label()),
            icon_url: STADIUM_ICON_URL,
        });
        rendered.stadiums.insert(Marker {
            feature_id: stadium.id,
            layer,
            location: stadium.location,
            record,
        });
    }

    for (record, venue) in datasets.pubs.iter().enumerate() {
        let layer = host.add_layer(Layer::PubMarker {
            location: venue.location,
            popup: popup_markup(&venue.popup_label()),
            style: PubStyle::Default,
        });
        rendered.pubs.insert(Marker {
            feature_id: venue.id,
            layer,
            location: venue.location,
            record,
        });
    }

    log::debug!(
        "rendered {} stadium markers and {} pub markers",
        rendered.stadiums.len(),
        rendered.pubs.len()
    );
    rendered
}
