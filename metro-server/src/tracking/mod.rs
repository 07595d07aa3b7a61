//! Trip progress from device location.
//!
//! A client asks for one location fix, gets back either a coordinate or a
//! reason there is none, and turns that into "you are at X, N stops to
//! go". Acquiring the fix is the client's job; this module only defines
//! the hand-off and the arithmetic.

use serde::{Deserialize, Serialize};

use crate::domain::Coordinate;
use crate::metrics;
use crate::network::StationNetwork;

/// Why no location fix was delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum LocationFailure {
    #[error("location permission denied")]
    PermissionDenied,

    #[error("location services unavailable")]
    Unavailable,

    /// The provider answered but had no position yet
    #[error("no location fix")]
    NoFix,
}

/// The single answer to a location request.
pub type LocationOutcome = Result<Coordinate, LocationFailure>;

/// A pending one-shot location request.
///
/// The continuation runs when [`deliver`](Self::deliver) is called, which
/// consumes the request, so it can run at most once. Dropping the request
/// without delivering cancels it.
///
/// # Example
///
/// ```
/// use std::cell::Cell;
/// use metro_server::domain::Coordinate;
/// use metro_server::tracking::LocationRequest;
///
/// let got = Cell::new(None);
/// let request = LocationRequest::new(|outcome| got.set(Some(outcome)));
/// request.deliver(Ok(Coordinate::new_unchecked(30.04, 31.23)));
/// assert!(got.get().unwrap().is_ok());
/// ```
pub struct LocationRequest<F>
where
    F: FnOnce(LocationOutcome),
{
    continuation: F,
}

impl<F> LocationRequest<F>
where
    F: FnOnce(LocationOutcome),
{
    pub fn new(continuation: F) -> Self {
        Self { continuation }
    }

    /// Hand the outcome to the waiting continuation.
    pub fn deliver(self, outcome: LocationOutcome) {
        (self.continuation)(outcome);
    }
}

impl<F> std::fmt::Debug for LocationRequest<F>
where
    F: FnOnce(LocationOutcome),
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocationRequest").finish_non_exhaustive()
    }
}

/// Where the rider is relative to their route.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Progress {
    /// The nearest station is on the route.
    OnRoute {
        current: String,
        remaining: usize,
        minutes: u32,
    },

    /// The nearest station is somewhere else.
    OffRoute { nearest: String },

    /// No usable location.
    LocationFailed { reason: LocationFailure },
}

/// Work out progress along `route` from a location outcome.
///
/// The rider is placed at the network station nearest the fix. A network
/// with no located stations reports [`LocationFailure::NoFix`].
pub fn track_progress<S: AsRef<str>>(
    network: &StationNetwork,
    route: &[S],
    outcome: LocationOutcome,
) -> Progress {
    let observed = match outcome {
        Ok(c) => c,
        Err(reason) => return Progress::LocationFailed { reason },
    };

    let Some(nearest) = network.nearest(&observed) else {
        return Progress::LocationFailed {
            reason: LocationFailure::NoFix,
        };
    };
    let current = nearest.station.name.clone();

    match metrics::remaining_stations(route, &current) {
        Some(remaining) => Progress::OnRoute {
            minutes: metrics::estimated_minutes(remaining),
            current,
            remaining,
        },
        None => Progress::OffRoute { nearest: current },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MetroLine;
    use std::cell::RefCell;

    fn network() -> StationNetwork {
        StationNetwork::builder()
            .line(MetroLine::Line1, &["A", "B", "C", "D"])
            .line(MetroLine::Line2, &["E", "B", "F"])
            .interchanges(&["B"])
            .coordinate("A", Coordinate::new_unchecked(30.00, 31.0))
            .coordinate("B", Coordinate::new_unchecked(30.01, 31.0))
            .coordinate("C", Coordinate::new_unchecked(30.02, 31.0))
            .coordinate("D", Coordinate::new_unchecked(30.03, 31.0))
            .coordinate("E", Coordinate::new_unchecked(30.01, 31.1))
            .build()
            .unwrap()
    }

    #[test]
    fn on_route() {
        let route = ["A", "B", "C", "D"];
        let here = Coordinate::new_unchecked(30.0201, 31.0);

        let progress = track_progress(&network(), &route, Ok(here));
        assert_eq!(
            progress,
            Progress::OnRoute {
                current: "C".into(),
                remaining: 1,
                minutes: 2,
            }
        );
    }

    #[test]
    fn off_route() {
        let route = ["A", "B", "C", "D"];
        let here = Coordinate::new_unchecked(30.01, 31.1);

        let progress = track_progress(&network(), &route, Ok(here));
        assert_eq!(
            progress,
            Progress::OffRoute {
                nearest: "E".into()
            }
        );
    }

    #[test]
    fn failure_passes_through() {
        let route = ["A", "B"];
        let progress = track_progress(&network(), &route, Err(LocationFailure::PermissionDenied));
        assert_eq!(
            progress,
            Progress::LocationFailed {
                reason: LocationFailure::PermissionDenied
            }
        );
    }

    #[test]
    fn unlocated_network_has_no_fix() {
        let network = StationNetwork::builder()
            .line(MetroLine::Line1, &["A", "B"])
            .build()
            .unwrap();
        let progress = track_progress(
            &network,
            &["A", "B"],
            Ok(Coordinate::new_unchecked(30.0, 31.0)),
        );
        assert_eq!(
            progress,
            Progress::LocationFailed {
                reason: LocationFailure::NoFix
            }
        );
    }

    #[test]
    fn request_delivers_once() {
        let seen = RefCell::new(Vec::new());
        let request = LocationRequest::new(|outcome| seen.borrow_mut().push(outcome));
        request.deliver(Err(LocationFailure::Unavailable));

        assert_eq!(*seen.borrow(), vec![Err(LocationFailure::Unavailable)]);
    }

    #[test]
    fn dropped_request_never_fires() {
        let fired = RefCell::new(false);
        let request = LocationRequest::new(|_| *fired.borrow_mut() = true);
        drop(request);
        assert!(!*fired.borrow());
    }

    #[test]
    fn progress_json_shape() {
        let progress = Progress::OnRoute {
            current: "C".into(),
            remaining: 1,
            minutes: 2,
        };
        let json = serde_json::to_value(&progress).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"status": "on_route", "current": "C", "remaining": 1, "minutes": 2})
        );

        let failed = Progress::LocationFailed {
            reason: LocationFailure::NoFix,
        };
        let json = serde_json::to_value(&failed).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"status": "location_failed", "reason": "no_fix"})
        );
    }

    #[test]
    fn failure_messages() {
        assert_eq!(
            LocationFailure::PermissionDenied.to_string(),
            "location permission denied"
        );
    }
}
