//! Test-only fixtures shared by unit and behaviour tests.
//!
//! Pubs are placed at exact geodesic distances from a stadium so that
//! containment expectations do not depend on hand-picked coordinates.

use geo::{Coord, Destination, Geodesic, MultiPolygon, Point, polygon};

use crate::{Boundary, Datasets, Pub, Stadium};

/// The Den, home of Millwall.
pub const THE_DEN: Coord<f64> = Coord {
    x: -0.0509,
    y: 51.4859,
};

/// Coordinate `metres` away from `origin` along `bearing` degrees.
#[must_use]
pub fn offset(origin: Coord<f64>, bearing: f64, metres: f64) -> Coord<f64> {
    Geodesic.destination(Point::from(origin), bearing, metres).0
}

/// A rough box around Greater London.
#[must_use]
pub fn london_box() -> Boundary {
    Boundary::new(MultiPolygon::new(vec![polygon![
        (x: -0.51, y: 51.28),
        (x: 0.33, y: 51.28),
        (x: 0.33, y: 51.69),
        (x: -0.51, y: 51.69),
    ]]))
}

/// One stadium with pubs 0.3 km, 0.9 km and 1.5 km away.
///
/// The pubs have ids 1, 2 and 3 in order of distance.
#[must_use]
pub fn single_stadium_datasets() -> Datasets {
    Datasets {
        boundary: london_box(),
        stadiums: vec![
            Stadium::new(1, THE_DEN)
                .with_name("The Den")
                .with_operator("Millwall"),
        ],
        pubs: vec![
            Pub::new(1, offset(THE_DEN, 10.0, 300.0)).with_name("The Lions"),
            Pub::new(2, offset(THE_DEN, 135.0, 900.0)),
            Pub::new(3, offset(THE_DEN, 270.0, 1500.0)).with_name("Far Away Arms"),
        ],
    }
}
