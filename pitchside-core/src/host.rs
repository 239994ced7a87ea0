//! The seam between the map session and whatever draws the map.
//!
//! A [`MapHost`] receives viewport, layer, style, popup and panel commands.
//! Hosts hand out [`LayerId`] handles; the session keeps its own mapping from
//! dataset identifiers to those handles rather than tagging host objects.

use geo::{Coord, MultiPolygon};
use serde::Serialize;

use crate::shell::{Legend, TileLayer, Viewport};
use crate::sidebar::SidebarEntry;
use crate::style::{PathStyle, PubStyle};

/// Opaque handle to a layer added to a [`MapHost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct LayerId(pub u64);

impl std::fmt::Display for LayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "layer#{}", self.0)
    }
}

/// A drawable layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Layer {
    /// Raster basemap.
    Tiles(TileLayer),
    /// Region outline and fill.
    Boundary {
        /// Shape to draw.
        shape: MultiPolygon<f64>,
        /// Stroke and fill.
        style: PathStyle,
    },
    /// Icon marker for a stadium.
    StadiumMarker {
        /// Marker position.
        location: Coord<f64>,
        /// Popup markup.
        popup: String,
        /// Marker image.
        icon_url: &'static str,
    },
    /// Circle marker for a pub.
    PubMarker {
        /// Marker position.
        location: Coord<f64>,
        /// Popup markup.
        popup: String,
        /// Initial visual state.
        style: PubStyle,
    },
    /// Geographic circle with a radius in metres.
    BufferCircle {
        /// Circle centre.
        center: Coord<f64>,
        /// Radius on the ground.
        radius_metres: f64,
        /// Stroke and fill.
        style: PathStyle,
    },
}

/// Where a control is anchored on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlPosition {
    /// Upper left corner.
    TopLeft,
    /// Lower right corner.
    BottomRight,
}

/// UI controls laid over the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Control {
    /// Button that resets the viewport to the home view.
    Home {
        /// Tooltip text.
        title: &'static str,
        /// Anchor.
        position: ControlPosition,
    },
    /// Static legend panel.
    Legend {
        /// Legend content.
        legend: Legend,
        /// Anchor.
        position: ControlPosition,
    },
}

/// Text shown after a stadium is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Stadium name or `Stadium #<id>`.
    pub stadium: String,
    /// Club name or `Unknown Club`.
    pub club: String,
    /// Number of pubs inside the search radius.
    pub pub_count: usize,
}

impl Summary {
    /// Render the summary panel markup.
    ///
    /// # Examples
    /// ```
    /// use pitchside_core::Summary;
    ///
    /// let summary = Summary {
    ///     stadium: "The Den".into(),
    ///     club: "Millwall".into(),
    ///     pub_count: 4,
    /// };
    /// assert!(summary.to_markup().contains("<span class=\"count-number\">4</span>"));
    /// ```
    #[must_use]
    pub fn to_markup(&self) -> String {
        format!(
            "<div>Stadium: <u>{}</u></div>\n<div>Club: <u>{}</u></div>\n\
             <div>Pubs within 1 km: <strong><span class=\"count-number\">{}</span></strong></div>",
            escape_markup(&self.stadium),
            escape_markup(&self.club),
            self.pub_count
        )
    }
}

/// Receives drawing commands from the map session.
///
/// Implementations own the layers; the session never reads styles back, so a
/// host only needs to apply what it is told.
pub trait MapHost {
    /// Centre the viewport.
    fn set_view(&mut self, view: Viewport);

    /// Add a layer on top of the existing ones and return its handle.
    fn add_layer(&mut self, layer: Layer) -> LayerId;

    /// Remove a layer. Unknown handles are ignored.
    fn remove_layer(&mut self, id: LayerId);

    /// Move a layer beneath every other vector layer.
    fn bring_to_back(&mut self, id: LayerId);

    /// Restyle a pub marker.
    fn set_pub_style(&mut self, id: LayerId, style: PubStyle);

    /// Open the popup bound to a layer.
    fn open_popup(&mut self, id: LayerId);

    /// Add a control overlay.
    fn add_control(&mut self, control: Control);

    /// Replace the stadium list panel with the given entries.
    fn show_stadium_list(&mut self, entries: &[SidebarEntry]);

    /// Replace the stadium list panel with an error message.
    fn show_stadium_list_error(&mut self, message: &str);

    /// Replace the summary panel.
    fn show_summary(&mut self, summary: &Summary);
}

/// Popup markup for a marker label: the label in bold.
///
/// # Examples
/// ```
/// use pitchside_core::popup_markup;
///
/// assert_eq!(popup_markup("Fish & Chips"), "<b>Fish &amp; Chips</b>");
/// ```
#[must_use]
pub fn popup_markup(label: &str) -> String {
    format!("<b>{}</b>", escape_markup(label))
}

pub(crate) fn escape_markup(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("The Gunners", "The Gunners")]
    #[case("<script>", "&lt;script&gt;")]
    #[case("O'Neill's", "O&#39;Neill&#39;s")]
    fn escapes_markup(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(escape_markup(input), expected);
    }

    #[rstest]
    fn summary_markup_lists_every_field() {
        let summary = Summary {
            stadium: "Stadium #7".into(),
            club: "Unknown Club".into(),
            pub_count: 2,
        };
        let markup = summary.to_markup();
        assert!(markup.contains("Stadium: <u>Stadium #7</u>"));
        assert!(markup.contains("Club: <u>Unknown Club</u>"));
        assert!(markup.contains(">2</span>"));
    }
}
