//! Fixed styling rules for every layer the map draws.
//!
//! # Examples
//! ```
//! use pitchside_core::PubStyle;
//!
//! assert_eq!(PubStyle::Highlighted.as_str(), "highlighted");
//! assert!(PubStyle::Highlighted.circle().radius > PubStyle::Default.circle().radius);
//! ```

use serde::Serialize;

/// Stroke and fill of a circle marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CircleStyle {
    /// Marker radius in screen pixels.
    pub radius: u8,
    /// Outline width in pixels.
    pub weight: u8,
    /// Outline colour.
    pub color: &'static str,
    /// Fill colour.
    pub fill_color: &'static str,
    /// Fill opacity in `[0, 1]`.
    pub fill_opacity: f32,
}

/// Stroke and fill of a polygon or a geographic circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PathStyle {
    /// Outline width in pixels.
    pub weight: u8,
    /// Outline colour.
    pub color: &'static str,
    /// Fill colour.
    pub fill_color: &'static str,
    /// Fill opacity in `[0, 1]`.
    pub fill_opacity: f32,
}

/// Region outline drawn under everything else.
pub const BOUNDARY_STYLE: PathStyle = PathStyle {
    weight: 3,
    color: "#105228ff",
    fill_color: "#b9e3c6",
    fill_opacity: 0.15,
};

/// Search radius circle drawn around the selected stadium.
pub const BUFFER_CIRCLE_STYLE: PathStyle = PathStyle {
    weight: 1,
    color: "#2f6fed",
    fill_color: "#2f6fed",
    fill_opacity: 0.06,
};

/// Image used for stadium markers and their legend entry.
pub const STADIUM_ICON_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/images/marker-icon.png";

/// The two visual states a pub marker can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PubStyle {
    /// Outside the current search radius, or nothing selected.
    Default,
    /// Within the current search radius.
    Highlighted,
}

impl PubStyle {
    /// Return the state as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Highlighted => "highlighted",
        }
    }

    /// Circle marker styling for this state.
    #[must_use]
    pub const fn circle(self) -> CircleStyle {
        match self {
            Self::Default => CircleStyle {
                radius: 5,
                weight: 1,
                color: "#7a3e00",
                fill_color: "#ffd9a6",
                fill_opacity: 0.9,
            },
            Self::Highlighted => CircleStyle {
                radius: 6,
                weight: 2,
                color: "#d42a1f",
                fill_color: "#e93723ff",
                fill_opacity: 1.0,
            },
        }
    }
}

impl std::fmt::Display for PubStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_as_str() {
        assert_eq!(PubStyle::Default.to_string(), PubStyle::Default.as_str());
    }

    #[test]
    fn highlighted_pubs_stand_out() {
        let default = PubStyle::Default.circle();
        let highlighted = PubStyle::Highlighted.circle();
        assert_ne!(default.color, highlighted.color);
        assert!(highlighted.weight > default.weight);
    }
}
