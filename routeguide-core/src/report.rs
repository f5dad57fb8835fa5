//! # Report
//!
//! Human-readable lines printed while touring the RouteGuide service.
//!
//! Points travel in the E7 representation (degrees multiplied by 10^7). Every line that talks
//! about a feature or a visited point shows degrees; route notes are shown with their raw
//! integer coordinates.
use routeguide_proto::{Feature, Point, Rectangle, RouteNote, RouteSummary};
use std::fmt;

/// Scale between E7 integers and degrees.
pub const COORD_FACTOR: f64 = 1e7;

/// Displays a point in degrees, e.g. `40.9146138, -74.6188906`.
pub struct Degrees<'a>(pub &'a Point);

impl fmt::Display for Degrees<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}",
            self.0.latitude as f64 / COORD_FACTOR,
            self.0.longitude as f64 / COORD_FACTOR
        )
    }
}

/// Displays a point with its raw E7 integers, e.g. `0, 1`.
pub struct Raw<'a>(pub &'a Point);

impl fmt::Display for Raw<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.0.latitude, self.0.longitude)
    }
}

/// Describes a feature found at `at`. An empty name means nothing was found there.
pub fn feature_line(feature: &Feature, at: &Point) -> String {
    if feature.name.is_empty() {
        format!("Found no feature at {}", Degrees(at))
    } else {
        format!("Found feature called \"{}\" at {}", feature.name, Degrees(at))
    }
}

pub fn search_line(rectangle: &Rectangle) -> String {
    let lo = rectangle.lo.clone().unwrap_or_default();
    let hi = rectangle.hi.clone().unwrap_or_default();
    format!(
        "Looking for features between {} and {}",
        Degrees(&lo),
        Degrees(&hi)
    )
}

pub fn visiting_line(point: &Point) -> String {
    format!("Visiting point {}", Degrees(point))
}

pub fn summary_lines(summary: &RouteSummary) -> [String; 4] {
    [
        format!("Finished trip with {} points", summary.point_count),
        format!("Passed {} features", summary.feature_count),
        format!("Travelled {} meters", summary.distance),
        format!("It took {} seconds", summary.elapsed_time),
    ]
}

pub fn sending_line(note: &RouteNote) -> String {
    let at = note.location.clone().unwrap_or_default();
    format!("Sending message \"{}\" at {}", note.message, Raw(&at))
}

pub fn received_line(note: &RouteNote) -> String {
    let at = note.location.clone().unwrap_or_default();
    format!("Got message \"{}\" at {}", note.message, Raw(&at))
}
