//! Core domain types and map logic for Pitchside.
//!
//! The crate turns three loaded datasets (a boundary, stadiums and pubs) into
//! map layers on a [`MapHost`], lists the stadiums, and highlights the pubs
//! within a kilometre of whichever stadium the user selects. It performs no
//! I/O; loading lives in `pitchside-data`.

#![forbid(unsafe_code)]

pub mod host;
pub mod model;
pub mod proximity;
pub mod render;
pub mod scene;
pub mod session;
pub mod shell;
pub mod sidebar;
pub mod style;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use host::{Control, ControlPosition, Layer, LayerId, MapHost, Summary, popup_markup};
pub use model::{Boundary, Datasets, Pub, Stadium, UNKNOWN_CLUB};
pub use proximity::{DEFAULT_BUFFER_SEGMENTS, GeodesicBuffer, SEARCH_RADIUS_METRES};
pub use render::{Marker, MarkerRegistry, RenderedLayers, render_layers};
pub use scene::{Scene, SceneLayer, StadiumListPanel};
pub use session::{FocusReport, LOAD_ERROR_MESSAGE, MapEvent, MapSession, SelectError};
pub use shell::{HOME, Legend, LegendEntry, LegendSymbol, MapShell, TileLayer, Viewport};
pub use sidebar::{SidebarEntry, build_sidebar};
pub use style::{CircleStyle, PathStyle, PubStyle};
