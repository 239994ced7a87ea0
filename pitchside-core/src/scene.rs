//! In-memory [`MapHost`] that records the map as plain data.
//!
//! `Scene` is what the CLI serialises and what the behaviour tests inspect.
//! Layers are kept bottom to top; basemap tiles always stay at the bottom.

use serde::Serialize;

use crate::host::{Control, Layer, LayerId, MapHost, Summary};
use crate::shell::Viewport;
use crate::sidebar::SidebarEntry;
use crate::style::PubStyle;

/// A layer together with its handle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneLayer {
    /// Handle returned by [`MapHost::add_layer`].
    pub id: LayerId,
    /// Layer contents, including the current pub style.
    #[serde(flatten)]
    pub layer: Layer,
}

/// Contents of the stadium list panel.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum StadiumListPanel {
    /// Nothing shown yet.
    #[default]
    Empty,
    /// Clickable stadium rows.
    Entries(Vec<SidebarEntry>),
    /// Load failure message.
    Error(String),
}

/// Recorded map state.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Scene {
    view: Option<Viewport>,
    layers: Vec<SceneLayer>,
    controls: Vec<Control>,
    stadium_list: StadiumListPanel,
    list_errors_shown: usize,
    summary: Option<Summary>,
    open_popup: Option<LayerId>,
    #[serde(skip)]
    next_layer: u64,
}

impl Scene {
    /// Current viewport.
    #[must_use]
    pub const fn view(&self) -> Option<Viewport> {
        self.view
    }

    /// Layers from bottom to top.
    pub fn layers(&self) -> impl Iterator<Item = &SceneLayer> + '_ {
        self.layers.iter()
    }

    /// Look up a layer by handle.
    #[must_use]
    pub fn layer(&self, id: LayerId) -> Option<&SceneLayer> {
        self.layers.iter().find(|entry| entry.id == id)
    }

    /// Stacking position of a layer, `0` being the bottom.
    #[must_use]
    pub fn z_index(&self, id: LayerId) -> Option<usize> {
        self.layers.iter().position(|entry| entry.id == id)
    }

    /// Popup markup bound to a marker layer.
    #[must_use]
    pub fn popup(&self, id: LayerId) -> Option<String> {
        match &self.layer(id)?.layer {
            Layer::StadiumMarker { popup, .. } | Layer::PubMarker { popup, .. } => {
                Some(popup.clone())
            }
            _ => None,
        }
    }

    /// Current style of a pub marker.
    #[must_use]
    pub fn pub_style(&self, id: LayerId) -> Option<PubStyle> {
        match self.layer(id)?.layer {
            Layer::PubMarker { style, .. } => Some(style),
            _ => None,
        }
    }

    /// Handles of pub markers currently drawn highlighted.
    #[must_use]
    pub fn highlighted_pubs(&self) -> Vec<LayerId> {
        self.layers
            .iter()
            .filter(|entry| {
                matches!(
                    entry.layer,
                    Layer::PubMarker {
                        style: PubStyle::Highlighted,
                        ..
                    }
                )
            })
            .map(|entry| entry.id)
            .collect()
    }

    /// Buffer circles currently drawn.
    #[must_use]
    pub fn buffer_circles(&self) -> Vec<&SceneLayer> {
        self.layers
            .iter()
            .filter(|entry| matches!(entry.layer, Layer::BufferCircle { .. }))
            .collect()
    }

    /// Number of stadium and pub markers currently drawn.
    #[must_use]
    pub fn marker_count(&self) -> usize {
        self.layers
            .iter()
            .filter(|entry| {
                matches!(
                    entry.layer,
                    Layer::StadiumMarker { .. } | Layer::PubMarker { .. }
                )
            })
            .count()
    }

    /// Controls in the order they were added.
    #[must_use]
    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    /// Stadium list panel contents.
    #[must_use]
    pub const fn stadium_list(&self) -> &StadiumListPanel {
        &self.stadium_list
    }

    /// How many times an error was written to the stadium list panel.
    #[must_use]
    pub const fn list_errors_shown(&self) -> usize {
        self.list_errors_shown
    }

    /// Summary panel contents.
    #[must_use]
    pub const fn summary(&self) -> Option<&Summary> {
        self.summary.as_ref()
    }

    /// Layer whose popup is open.
    #[must_use]
    pub const fn open_popup_layer(&self) -> Option<LayerId> {
        self.open_popup
    }

    fn bottom_of_overlays(&self) -> usize {
        self.layers
            .iter()
            .take_while(|entry| matches!(entry.layer, Layer::Tiles(_)))
            .count()
    }
}

impl MapHost for Scene {
    fn set_view(&mut self, view: Viewport) {
        self.view = Some(view);
    }

    fn add_layer(&mut self, layer: Layer) -> LayerId {
        self.next_layer += 1;
        let id = LayerId(self.next_layer);
        if matches!(layer, Layer::Tiles(_)) {
            let position = self.bottom_of_overlays();
            self.layers.insert(position, SceneLayer { id, layer });
        } else {
            self.layers.push(SceneLayer { id, layer });
        }
        id
    }

    fn remove_layer(&mut self, id: LayerId) {
        self.layers.retain(|entry| entry.id != id);
        if self.open_popup == Some(id) {
            self.open_popup = None;
        }
    }

    fn bring_to_back(&mut self, id: LayerId) {
        let Some(position) = self.z_index(id) else {
            return;
        };
        let entry = self.layers.remove(position);
        let bottom = self.bottom_of_overlays();
        self.layers.insert(bottom, entry);
    }

    fn set_pub_style(&mut self, id: LayerId, style: PubStyle) {
        if let Some(SceneLayer {
            layer: Layer::PubMarker { style: current, .. },
            ..
        }) = self.layers.iter_mut().find(|entry| entry.id == id)
        {
            *current = style;
        }
    }

    fn open_popup(&mut self, id: LayerId) {
        if self.layer(id).is_some() {
            self.open_popup = Some(id);
        }
    }

    fn add_control(&mut self, control: Control) {
        self.controls.push(control);
    }

    fn show_stadium_list(&mut self, entries: &[SidebarEntry]) {
        self.stadium_list = StadiumListPanel::Entries(entries.to_vec());
    }

    fn show_stadium_list_error(&mut self, message: &str) {
        self.stadium_list = StadiumListPanel::Error(message.to_owned());
        self.list_errors_shown += 1;
    }

    fn show_summary(&mut self, summary: &Summary) {
        self.summary = Some(summary.clone());
    }
}
