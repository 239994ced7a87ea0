//! Viewport, basemap, home control and legend.
//!
//! The shell has no data dependencies: it is installed before any dataset is
//! requested, so the basemap shows even when loading later fails.

use geo::Coord;
use serde::Serialize;

use crate::host::{Control, ControlPosition, Layer, MapHost};
use crate::style::{BOUNDARY_STYLE, PubStyle, STADIUM_ICON_URL};

/// Home view centre, shared by the initial viewport and the reset control.
pub const HOME: Coord<f64> = Coord {
    x: -0.0376,
    y: 51.4772,
};

/// Displays narrower than this many pixels start one zoom level further out.
pub const NARROW_DISPLAY_WIDTH_PX: u32 = 768;

/// Initial zoom on narrow displays.
pub const NARROW_ZOOM: u8 = 9;

/// Initial zoom on wide displays.
pub const WIDE_ZOOM: u8 = 10;

/// Zoom used when jumping to a stadium from the sidebar.
pub const STADIUM_ZOOM: u8 = 14;

/// Tooltip of the home control.
pub const HOME_TITLE: &str = "Reset to Home";

/// Map centre and zoom level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    /// Centre coordinate.
    pub center: Coord<f64>,
    /// Zoom level.
    pub zoom: u8,
}

/// Raster basemap source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TileLayer {
    /// URL template with `{s}`, `{z}`, `{x}`, `{y}` and `{r}` placeholders.
    pub url_template: &'static str,
    /// Attribution markup.
    pub attribution: &'static str,
    /// Values substituted for `{s}`.
    pub subdomains: &'static str,
    /// Deepest zoom the source serves.
    pub max_zoom: u8,
}

/// CARTO light basemap over OpenStreetMap data.
pub const BASEMAP: TileLayer = TileLayer {
    url_template: "https://{s}.basemaps.cartocdn.com/rastertiles/light_all/{z}/{x}/{y}{r}.png",
    attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> \
                  contributors &copy; <a href=\"https://carto.com/attributions\">CARTO</a> | \
                  Data: Stadiums and Pubs from \
                  <a href=\"https://overpass-turbo.eu/\">OSM via Overpass Turbo</a>",
    subdomains: "abcd",
    max_zoom: 18,
};

/// Swatch drawn next to a legend label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LegendSymbol {
    /// Marker image.
    Icon {
        /// Image URL.
        url: &'static str,
    },
    /// Filled circle in a pub style.
    Circle {
        /// Pub state the swatch depicts.
        style: PubStyle,
    },
    /// Filled polygon swatch.
    Polygon {
        /// Outline colour.
        color: &'static str,
        /// Fill colour.
        fill_color: &'static str,
    },
}

/// One legend row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    /// Swatch.
    pub symbol: LegendSymbol,
    /// Row text.
    pub label: &'static str,
}

/// Static legend panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Legend {
    /// Panel heading.
    pub title: &'static str,
    /// Rows in display order.
    pub entries: Vec<LegendEntry>,
}

impl Legend {
    /// The fixed four-row legend.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            title: "Legend",
            entries: vec![
                LegendEntry {
                    symbol: LegendSymbol::Icon {
                        url: STADIUM_ICON_URL,
                    },
                    label: "Stadiums",
                },
                LegendEntry {
                    symbol: LegendSymbol::Circle {
                        style: PubStyle::Default,
                    },
                    label: "Pubs",
                },
                LegendEntry {
                    symbol: LegendSymbol::Circle {
                        style: PubStyle::Highlighted,
                    },
                    label: "Pubs (highlighted)",
                },
                LegendEntry {
                    symbol: LegendSymbol::Polygon {
                        color: BOUNDARY_STYLE.color,
                        fill_color: BOUNDARY_STYLE.fill_color,
                    },
                    label: "Greater London",
                },
            ],
        }
    }
}

/// Owns the viewport decisions made once at start-up.
///
/// # Examples
/// ```
/// use pitchside_core::MapShell;
///
/// assert_eq!(MapShell::for_display_width(375).initial_zoom(), 9);
/// assert_eq!(MapShell::for_display_width(1440).initial_zoom(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapShell {
    initial_zoom: u8,
}

impl MapShell {
    /// Pick the zoom preset for a display of the given width.
    ///
    /// The choice is fixed for the lifetime of the shell.
    #[must_use]
    pub const fn for_display_width(width_px: u32) -> Self {
        let initial_zoom = if width_px < NARROW_DISPLAY_WIDTH_PX {
            NARROW_ZOOM
        } else {
            WIDE_ZOOM
        };
        Self { initial_zoom }
    }

    /// Zoom level chosen at start-up.
    #[must_use]
    pub const fn initial_zoom(&self) -> u8 {
        self.initial_zoom
    }

    /// The home view.
    #[must_use]
    pub const fn home_view(&self) -> Viewport {
        Viewport {
            center: HOME,
            zoom: self.initial_zoom,
        }
    }

    /// Set the initial view and add the basemap, home control and legend.
    pub fn install(&self, host: &mut dyn MapHost) {
        host.set_view(self.home_view());
        host.add_layer(Layer::Tiles(BASEMAP));
        host.add_control(Control::Home {
            title: HOME_TITLE,
            position: ControlPosition::TopLeft,
        });
        host.add_control(Control::Legend {
            legend: Legend::standard(),
            position: ControlPosition::BottomRight,
        });
        log::debug!("map shell installed at zoom {}", self.initial_zoom);
    }

    /// Return the viewport to the home view.
    pub fn reset_view(&self, host: &mut dyn MapHost) {
        host.set_view(self.home_view());
    }
}
