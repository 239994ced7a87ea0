//! Stadium, pub and boundary records loaded once at start-up.
//!
//! Coordinates are WGS84 with `x = longitude` and `y = latitude`. Records are
//! immutable after loading; the session only ever reads them.

use geo::{Coord, MultiPolygon};
use serde::{Deserialize, Serialize};

/// Fallback club label used in the summary when a stadium has no operator.
pub const UNKNOWN_CLUB: &str = "Unknown Club";

/// A football stadium.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use pitchside_core::Stadium;
///
/// let stadium = Stadium::new(7, Coord { x: -0.1086, y: 51.5549 });
/// assert_eq!(stadium.popup_label(), "Stadium #7");
/// assert_eq!(stadium.club_label(), "Unknown Club");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stadium {
    /// Unique identifier taken from the dataset.
    pub id: u64,
    /// Marker position.
    pub location: Coord<f64>,
    /// Stadium name, if the dataset carries one.
    pub name: Option<String>,
    /// Operating club, if the dataset carries one.
    pub operator: Option<String>,
}

impl Stadium {
    /// Construct an unnamed stadium without an operator.
    #[must_use]
    pub const fn new(id: u64, location: Coord<f64>) -> Self {
        Self {
            id,
            location,
            name: None,
            operator: None,
        }
    }

    /// Attach a name. Empty names are treated as missing.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = non_empty(name.into());
        self
    }

    /// Attach an operating club. Empty operators are treated as missing.
    #[must_use]
    pub fn with_operator(mut self, operator: impl Into<String>) -> Self {
        self.operator = non_empty(operator.into());
        self
    }

    /// Text shown in the marker popup and in the summary.
    #[must_use]
    pub fn popup_label(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("Stadium #{}", self.id))
    }

    /// Text shown for this stadium in the sidebar list.
    #[must_use]
    pub fn sidebar_label(&self) -> String {
        self.operator
            .clone()
            .unwrap_or_else(|| format!("Stadium #{}", self.id))
    }

    /// Club name shown in the summary.
    #[must_use]
    pub fn club_label(&self) -> String {
        self.operator
            .clone()
            .unwrap_or_else(|| UNKNOWN_CLUB.to_owned())
    }

    /// Lowercased operator used to order the sidebar; missing sorts first.
    pub(crate) fn sort_key(&self) -> String {
        self.operator
            .as_deref()
            .unwrap_or_default()
            .to_lowercase()
    }
}

/// A pub.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use pitchside_core::Pub;
///
/// let named = Pub::new(1, Coord { x: -0.1, y: 51.5 }).with_name("The Gunners");
/// assert_eq!(named.popup_label(), "The Gunners");
/// assert_eq!(Pub::new(3, Coord { x: 0.0, y: 0.0 }).popup_label(), "Pub #3");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pub {
    /// Unique identifier taken from the dataset.
    pub id: u64,
    /// Marker position.
    pub location: Coord<f64>,
    /// Pub name, if the dataset carries one.
    pub name: Option<String>,
}

impl Pub {
    /// Construct an unnamed pub.
    #[must_use]
    pub const fn new(id: u64, location: Coord<f64>) -> Self {
        Self {
            id,
            location,
            name: None,
        }
    }

    /// Attach a name. Empty names are treated as missing.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = non_empty(name.into());
        self
    }

    /// Text shown in the marker popup.
    #[must_use]
    pub fn popup_label(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("Pub #{}", self.id))
    }
}

/// The region drawn behind every other layer.
///
/// The boundary is a backdrop only; nothing is ever tested against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boundary {
    /// Boundary shape. Single polygons are stored as one-member collections.
    pub shape: MultiPolygon<f64>,
}

impl Boundary {
    /// Wrap a shape as the map boundary.
    #[must_use]
    pub const fn new(shape: MultiPolygon<f64>) -> Self {
        Self { shape }
    }
}

impl Default for Boundary {
    fn default() -> Self {
        Self::new(MultiPolygon::new(Vec::new()))
    }
}

/// The three datasets the map is built from.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Datasets {
    /// Region outline.
    pub boundary: Boundary,
    /// Stadiums in dataset order.
    pub stadiums: Vec<Stadium>,
    /// Pubs in dataset order.
    pub pubs: Vec<Pub>,
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}
