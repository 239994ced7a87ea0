//! The map session: one owner for everything that changes after start-up.
//!
//! A session is either idle (nothing selected, every pub in the default
//! style, no buffer circle) or focused on one stadium. Selecting a stadium
//! always replaces the previous focus; there is no way back to idle.
//!
//! # Examples
//! ```
//! use geo::Coord;
//! use pitchside_core::{Datasets, MapEvent, MapSession, MapShell, Pub, Scene, Stadium};
//!
//! let datasets = Datasets {
//!     stadiums: vec![Stadium::new(1, Coord { x: -0.1086, y: 51.5549 }).with_operator("Arsenal")],
//!     pubs: vec![Pub::new(10, Coord { x: -0.1080, y: 51.5552 })],
//!     ..Datasets::default()
//! };
//! let mut scene = Scene::default();
//! let loaded: Result<Datasets, std::io::Error> = Ok(datasets);
//! let mut session = MapSession::bootstrap(&mut scene, MapShell::for_display_width(1280), loaded)?;
//!
//! let report = session
//!     .dispatch(&mut scene, MapEvent::SidebarActivated(1))
//!     .expect("stadium is listed");
//! assert_eq!(report.summary.club, "Arsenal");
//! assert_eq!(report.highlighted_pubs, vec![10]);
//! # Ok::<(), std::io::Error>(())
//! ```

use std::collections::BTreeSet;
use std::fmt::Display;

use serde::Serialize;
use thiserror::Error;

use crate::host::{Layer, LayerId, MapHost, Summary};
use crate::model::{Datasets, Pub, Stadium};
use crate::proximity::{GeodesicBuffer, SEARCH_RADIUS_METRES};
use crate::render::{Marker, RenderedLayers, render_layers};
use crate::shell::{MapShell, STADIUM_ZOOM, Viewport};
use crate::sidebar::build_sidebar;
use crate::style::{BUFFER_CIRCLE_STYLE, PubStyle};

/// Message placed in the stadium list when the datasets cannot be loaded.
pub const LOAD_ERROR_MESSAGE: &str = "Error loading data. Check file paths.";

/// User interactions delivered to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapEvent {
    /// A marker layer was clicked.
    MarkerClicked(LayerId),
    /// The sidebar row for a stadium was clicked.
    SidebarActivated(u64),
    /// The home control was clicked.
    ResetView,
}

/// Outcome of focusing on a stadium.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FocusReport {
    /// Stadium that was selected.
    pub stadium_id: u64,
    /// Text published to the summary panel.
    pub summary: Summary,
    /// Identifiers of the highlighted pub markers, ascending.
    ///
    /// Holds one entry per marker, so a repeated dataset id is listed once
    /// for every pub carrying it and the length always equals
    /// `summary.pub_count`.
    pub highlighted_pubs: Vec<u64>,
}

/// Errors returned by [`MapSession::select_stadium`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectError {
    /// No marker was rendered for the stadium.
    #[error("no stadium with id {id} is on the map")]
    UnknownStadium {
        /// Requested identifier.
        id: u64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Idle,
    Focused { stadium: LayerId, buffer: LayerId },
}

/// Owns the rendered layers, the highlight set and the active buffer circle.
#[derive(Debug)]
pub struct MapSession {
    shell: MapShell,
    stadiums: Vec<Stadium>,
    pubs: Vec<Pub>,
    layers: RenderedLayers,
    highlighted: BTreeSet<LayerId>,
    focus: Focus,
}

impl MapSession {
    /// Install the map shell, then build the session from the load outcome.
    ///
    /// On failure the stadium list shows [`LOAD_ERROR_MESSAGE`], no data
    /// layers are drawn and the load error is handed back.
    pub fn bootstrap<E: Display>(
        host: &mut dyn MapHost,
        shell: MapShell,
        loaded: Result<Datasets, E>,
    ) -> Result<Self, E> {
        shell.install(host);
        match loaded {
            Ok(datasets) => Ok(Self::from_datasets(host, shell, datasets)),
            Err(err) => {
                log::error!("failed to load datasets: {err}");
                host.show_stadium_list_error(LOAD_ERROR_MESSAGE);
                Err(err)
            }
        }
    }

    /// Draw the datasets and the stadium list on a host whose shell is
    /// already installed.
    pub fn from_datasets(host: &mut dyn MapHost, shell: MapShell, datasets: Datasets) -> Self {
        let layers = render_layers(host, &datasets);
        host.show_stadium_list(&build_sidebar(&datasets.stadiums));
        if let Some(first) = datasets.stadiums.first() {
            log::debug!("first stadium: {first:?}");
        }
        let Datasets { stadiums, pubs, .. } = datasets;
        Self {
            shell,
            stadiums,
            pubs,
            layers,
            highlighted: BTreeSet::new(),
            focus: Focus::Idle,
        }
    }

    /// Route an interaction to its handler.
    ///
    /// Returns a report when the event selected a stadium.
    pub fn dispatch(&mut self, host: &mut dyn MapHost, event: MapEvent) -> Option<FocusReport> {
        match event {
            MapEvent::MarkerClicked(layer) => self.marker_clicked(host, layer),
            MapEvent::SidebarActivated(stadium_id) => self.activate_sidebar_entry(host, stadium_id),
            MapEvent::ResetView => {
                self.shell.reset_view(host);
                None
            }
        }
    }

    /// Behave as though the stadium's sidebar row was clicked: zoom to its
    /// marker, open the popup and select it.
    ///
    /// Returns `None` when no marker was rendered for the stadium.
    pub fn activate_sidebar_entry(
        &mut self,
        host: &mut dyn MapHost,
        stadium_id: u64,
    ) -> Option<FocusReport> {
        let Some(marker) = self.layers.stadiums.by_feature(stadium_id).copied() else {
            log::debug!("sidebar entry for stadium {stadium_id} has no marker");
            return None;
        };
        host.set_view(Viewport {
            center: marker.location,
            zoom: STADIUM_ZOOM,
        });
        host.open_popup(marker.layer);
        Some(self.focus_marker(host, marker))
    }

    /// Select a stadium by identifier without moving the viewport.
    pub fn select_stadium(
        &mut self,
        host: &mut dyn MapHost,
        stadium_id: u64,
    ) -> Result<FocusReport, SelectError> {
        let marker = self
            .layers
            .stadiums
            .by_feature(stadium_id)
            .copied()
            .ok_or(SelectError::UnknownStadium { id: stadium_id })?;
        Ok(self.focus_marker(host, marker))
    }

    /// Identifiers of the pubs currently highlighted.
    #[must_use]
    pub fn highlighted_pub_ids(&self) -> BTreeSet<u64> {
        self.highlighted
            .iter()
            .filter_map(|layer| self.layers.pubs.by_layer(*layer))
            .map(|marker| marker.feature_id)
            .collect()
    }

    /// The selected stadium, if any.
    #[must_use]
    pub fn focused_stadium(&self) -> Option<&Stadium> {
        match self.focus {
            Focus::Idle => None,
            Focus::Focused { stadium, .. } => self
                .layers
                .stadiums
                .by_layer(stadium)
                .and_then(|marker| self.stadiums.get(marker.record)),
        }
    }

    /// Handle of the buffer circle around the selected stadium.
    #[must_use]
    pub const fn buffer_layer(&self) -> Option<LayerId> {
        match self.focus {
            Focus::Idle => None,
            Focus::Focused { buffer, .. } => Some(buffer),
        }
    }

    /// Handles of everything drawn from the datasets.
    #[must_use]
    pub const fn layers(&self) -> &RenderedLayers {
        &self.layers
    }

    /// Stadiums in dataset order.
    #[must_use]
    pub fn stadiums(&self) -> &[Stadium] {
        &self.stadiums
    }

    /// Pubs in dataset order.
    #[must_use]
    pub fn pubs(&self) -> &[Pub] {
        &self.pubs
    }

    fn marker_clicked(&mut self, host: &mut dyn MapHost, layer: LayerId) -> Option<FocusReport> {
        if let Some(marker) = self.layers.stadiums.by_layer(layer).copied() {
            host.open_popup(layer);
            return Some(self.focus_marker(host, marker));
        }
        if self.layers.pubs.by_layer(layer).is_some() {
            host.open_popup(layer);
        }
        None
    }

    fn focus_marker(&mut self, host: &mut dyn MapHost, marker: Marker) -> FocusReport {
        for layer in std::mem::take(&mut self.highlighted) {
            host.set_pub_style(layer, PubStyle::Default);
        }

        if let Focus::Focused { buffer, .. } = self.focus {
            host.remove_layer(buffer);
        }
        let buffer = host.add_layer(Layer::BufferCircle {
            center: marker.location,
            radius_metres: SEARCH_RADIUS_METRES,
            style: BUFFER_CIRCLE_STYLE,
        });
        host.bring_to_back(buffer);
        if let Some(boundary) = self.layers.boundary {
            host.bring_to_back(boundary);
        }
        self.focus = Focus::Focused {
            stadium: marker.layer,
            buffer,
        };

        let search_area = GeodesicBuffer::new(marker.location, SEARCH_RADIUS_METRES);
        for candidate in self.layers.pubs.iter() {
            if search_area.contains(candidate.location) {
                host.set_pub_style(candidate.layer, PubStyle::Highlighted);
                self.highlighted.insert(candidate.layer);
            } else {
                host.set_pub_style(candidate.layer, PubStyle::Default);
            }
        }

        let summary = self.summary_for(&marker);
        host.show_summary(&summary);
        log::debug!(
            "stadium {} focused with {} pubs in range",
            marker.feature_id,
            summary.pub_count
        );

        FocusReport {
            stadium_id: marker.feature_id,
            summary,
            highlighted_pubs: self.highlighted_marker_ids(),
        }
    }

    fn highlighted_marker_ids(&self) -> Vec<u64> {
        let mut ids: Vec<u64> = self
            .highlighted
            .iter()
            .filter_map(|layer| self.layers.pubs.by_layer(*layer))
            .map(|marker| marker.feature_id)
            .collect();
        ids.sort_unstable();
        ids
    }

    fn summary_for(&self, marker: &Marker) -> Summary {
        let (stadium, club) = self.stadiums.get(marker.record).map_or_else(
            || {
                let fallback = Stadium::new(marker.feature_id, marker.location);
                (fallback.popup_label(), fallback.club_label())
            },
            |record| (record.popup_label(), record.club_label()),
        );
        Summary {
            stadium,
            club,
            pub_count: self.highlighted.len(),
        }
    }
}
