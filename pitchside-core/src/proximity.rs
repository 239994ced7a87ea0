//! Geodesic search buffers around a stadium.
//!
//! The buffer polygon is the authoritative containment boundary. Its ring
//! vertices lie on the WGS84 ellipsoid at exactly the search radius from the
//! centre, so edges sit marginally inside the true circle.

use geo::{Coord, Destination, Geodesic, Intersects, LineString, Point, Polygon};

/// Radius of the pub search around a selected stadium.
pub const SEARCH_RADIUS_METRES: f64 = 1000.0;

/// Number of ring segments used unless a caller asks otherwise.
pub const DEFAULT_BUFFER_SEGMENTS: u16 = 64;

/// Fewest segments that still describe an area.
const MIN_BUFFER_SEGMENTS: u16 = 4;

/// Polygon approximating every point within a ground distance of a centre.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use pitchside_core::GeodesicBuffer;
///
/// let emirates = Coord { x: -0.1086, y: 51.5549 };
/// let buffer = GeodesicBuffer::new(emirates, 1000.0);
/// assert!(buffer.contains(emirates));
/// assert!(!buffer.contains(Coord { x: -0.0376, y: 51.4772 }));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GeodesicBuffer {
    center: Coord<f64>,
    radius_metres: f64,
    polygon: Polygon<f64>,
}

impl GeodesicBuffer {
    /// Build a buffer with [`DEFAULT_BUFFER_SEGMENTS`] ring segments.
    #[must_use]
    pub fn new(center: Coord<f64>, radius_metres: f64) -> Self {
        Self::with_segments(center, radius_metres, DEFAULT_BUFFER_SEGMENTS)
    }

    /// Build a buffer with an explicit number of ring segments.
    ///
    /// Segment counts below four are raised to four.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "bearings are spread evenly around the full circle"
    )]
    pub fn with_segments(center: Coord<f64>, radius_metres: f64, segments: u16) -> Self {
        let ring_segments = segments.max(MIN_BUFFER_SEGMENTS);
        let origin = Point::from(center);
        let step = 360.0 / f64::from(ring_segments);
        let ring: Vec<Coord<f64>> = (0..ring_segments)
            .map(|i| {
                let bearing = f64::from(i) * step;
                Geodesic.destination(origin, bearing, radius_metres).0
            })
            .collect();
        // `Polygon::new` closes the ring.
        let polygon = Polygon::new(LineString::new(ring), Vec::new());
        Self {
            center,
            radius_metres,
            polygon,
        }
    }

    /// Whether `location` lies inside the buffer or on its boundary.
    #[must_use]
    pub fn contains(&self, location: Coord<f64>) -> bool {
        self.polygon.intersects(&location)
    }

    /// Buffer centre.
    #[must_use]
    pub const fn center(&self) -> Coord<f64> {
        self.center
    }

    /// Ground radius the buffer was built for.
    #[must_use]
    pub const fn radius_metres(&self) -> f64 {
        self.radius_metres
    }

    /// The buffer outline.
    #[must_use]
    pub const fn polygon(&self) -> &Polygon<f64> {
        &self.polygon
    }
}
