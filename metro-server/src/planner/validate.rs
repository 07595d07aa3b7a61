//! Trip input validation.
//!
//! The route finder folds every failure into an invalid result. Callers
//! that need to tell the rider *why* (nothing selected, same station,
//! misspelled name) check the input here first; a trip that passes and
//! still has no route is "no route found".

use crate::network::StationNetwork;

/// Why a start/end pair was rejected before routing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TripInputError {
    /// Start or end was blank
    #[error("please select both a start and an end station")]
    MissingStation,

    /// Start and end name the same station
    #[error("start and end stations are the same")]
    SameStation,

    /// A name matched no station
    #[error("unknown station: {0}")]
    UnknownStation(String),
}

/// A checked trip, holding canonical station names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidTrip {
    pub start: String,
    pub end: String,
}

/// Check a start/end pair against the network.
pub fn validate_trip(
    network: &StationNetwork,
    start: &str,
    end: &str,
) -> Result<ValidTrip, TripInputError> {
    let (start, end) = (start.trim(), end.trim());
    if start.is_empty() || end.is_empty() {
        return Err(TripInputError::MissingStation);
    }
    if start.to_lowercase() == end.to_lowercase() {
        return Err(TripInputError::SameStation);
    }

    let start = network
        .resolve(start)
        .ok_or_else(|| TripInputError::UnknownStation(start.to_string()))?;
    let end = network
        .resolve(end)
        .ok_or_else(|| TripInputError::UnknownStation(end.to_string()))?;

    Ok(ValidTrip {
        start: start.to_string(),
        end: end.to_string(),
    })
}
