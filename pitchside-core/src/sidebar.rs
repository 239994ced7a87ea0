//! Stadium list shown beside the map.

use serde::{Deserialize, Serialize};

use crate::model::Stadium;

/// One clickable row of the stadium list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarEntry {
    /// Stadium the row activates.
    pub stadium_id: u64,
    /// Row text: the club, or `Stadium #<id>`.
    pub label: String,
}

/// Build the stadium list, ordered case-insensitively by club.
///
/// Stadiums without a club sort first. Equal keys keep dataset order.
/// Lowercased keys compare by code point, with no locale collation, so
/// accented initials sort after `z`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use pitchside_core::{Stadium, build_sidebar};
///
/// let origin = Coord { x: 0.0, y: 0.0 };
/// let entries = build_sidebar(&[
///     Stadium::new(1, origin).with_operator("chelsea"),
///     Stadium::new(2, origin).with_operator("Arsenal"),
/// ]);
/// let labels: Vec<_> = entries.iter().map(|e| e.label.as_str()).collect();
/// assert_eq!(labels, ["Arsenal", "chelsea"]);
/// ```
#[must_use]
pub fn build_sidebar(stadiums: &[Stadium]) -> Vec<SidebarEntry> {
    let mut keyed: Vec<(String, &Stadium)> = stadiums
        .iter()
        .map(|stadium| (stadium.sort_key(), stadium))
        .collect();
    keyed.sort_by(|(left, _), (right, _)| left.cmp(right));
    keyed
        .into_iter()
        .map(|(_, stadium)| SidebarEntry {
            stadium_id: stadium.id,
            label: stadium.sidebar_label(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Coord;
    use rstest::{fixture, rstest};

    fn stadium(id: u64, operator: &str) -> Stadium {
        Stadium::new(id, Coord { x: 0.0, y: 0.0 }).with_operator(operator)
    }

    #[fixture]
    fn london_clubs() -> Vec<Stadium> {
        vec![stadium(1, "Arsenal"), stadium(2, ""), stadium(3, "Chelsea")]
    }

    #[rstest]
    fn missing_operator_sorts_first(london_clubs: Vec<Stadium>) {
        let ids: Vec<_> = build_sidebar(&london_clubs)
            .iter()
            .map(|entry| entry.stadium_id)
            .collect();
        assert_eq!(ids, [2, 1, 3]);
    }

    #[rstest]
    fn unnamed_entries_use_stadium_label(london_clubs: Vec<Stadium>) {
        let entries = build_sidebar(&london_clubs);
        let labels: Vec<_> = entries.iter().map(|entry| entry.label.as_str()).collect();
        assert_eq!(labels, ["Stadium #2", "Arsenal", "Chelsea"]);
    }

    #[rstest]
    fn ordering_ignores_case() {
        let entries = build_sidebar(&[
            stadium(1, "west Ham United"),
            stadium(2, "Brentford"),
            stadium(3, "arsenal"),
        ]);
        let ids: Vec<_> = entries.iter().map(|entry| entry.stadium_id).collect();
        assert_eq!(ids, [3, 2, 1]);
    }

    #[rstest]
    fn accented_names_sort_by_code_point() {
        let entries = build_sidebar(&[
            stadium(1, "Étoile"),
            stadium(2, "Wimbledon"),
            stadium(3, "Enfield Town"),
        ]);
        let ids: Vec<_> = entries.iter().map(|entry| entry.stadium_id).collect();
        assert_eq!(ids, [3, 2, 1]);
    }

    #[rstest]
    fn ties_keep_dataset_order() {
        let entries = build_sidebar(&[stadium(9, "Fulham"), stadium(4, "FULHAM")]);
        let ids: Vec<_> = entries.iter().map(|entry| entry.stadium_id).collect();
        assert_eq!(ids, [9, 4]);
    }
}
