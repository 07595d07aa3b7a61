//! Route planning on the metro network.
//!
//! Answers "how do I get from this station to that one?" with either a
//! direct ride or a ride with one change, and checks rider input before
//! the search so failures can be explained.

mod finder;
mod validate;


pub use finder::{RouteFinder, sub_route};
pub use validate::{TripInputError, ValidTrip, validate_trip};

use crate::domain::RouteResult;
use crate::metrics;
use crate::network::StationNetwork;

/// Find a route between two named stations.
pub fn calculate_route(network: &StationNetwork, start: &str, end: &str) -> RouteResult {
    RouteFinder::new(network).find_route(start, end)
}

/// Stations left from `current` to the end of `route`, or `-1` when
/// `current` is not on it.
///
/// This is the integer form used at the client boundary; Rust callers
/// should prefer [`metrics::remaining_stations`].
pub fn calculate_remaining_stations<S: AsRef<str>>(route: &[S], current: &str) -> i64 {
    metrics::remaining_stations(route, current)
        .and_then(|n| i64::try_from(n).ok())
        .unwrap_or(-1)
}
