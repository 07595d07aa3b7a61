//! Route result type.
//!
//! A `RouteResult` is the answer to "how do I get from A to B": the stops
//! in travel order, where to change (if anywhere), which way to face on
//! the platform, and the trip metrics derived from the stop count.

use crate::metrics;

use super::MetroLine;

/// The outcome of a route search.
///
/// Derived fields (`station_count`, `estimated_minutes`, `fare`) are
/// computed once by the constructor, so they always agree with the
/// station sequence.
///
/// # Invariants
///
/// - Valid iff there are at least two stations
/// - A transfer station, when present, is one of the stations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteResult {
    stations: Vec<String>,
    transfer_station: Option<String>,
    direction: String,
    start_line: Option<MetroLine>,
    end_line: Option<MetroLine>,
    station_count: usize,
    estimated_minutes: u32,
    fare: u32,
}

impl RouteResult {
    /// An empty result: no route, for whatever reason.
    pub fn invalid() -> Self {
        Self::build(Vec::new(), None, String::new(), None, None)
    }

    /// A route that stays on one line.
    pub fn direct(stations: Vec<String>, direction: impl Into<String>, line: MetroLine) -> Self {
        Self::build(stations, None, direction.into(), Some(line), Some(line))
    }

    /// A route with one change at `transfer_station`.
    ///
    /// Returns `None` if the transfer station is not one of the stops.
    pub fn with_transfer(
        stations: Vec<String>,
        transfer_station: impl Into<String>,
        direction: impl Into<String>,
        start_line: MetroLine,
        end_line: MetroLine,
    ) -> Option<Self> {
        let transfer_station = transfer_station.into();
        if !stations.contains(&transfer_station) {
            return None;
        }
        Some(Self::build(
            stations,
            Some(transfer_station),
            direction.into(),
            Some(start_line),
            Some(end_line),
        ))
    }

    fn build(
        stations: Vec<String>,
        transfer_station: Option<String>,
        direction: String,
        start_line: Option<MetroLine>,
        end_line: Option<MetroLine>,
    ) -> Self {
        let station_count = metrics::station_count(stations.len());
        Self {
            stations,
            transfer_station,
            direction,
            start_line,
            end_line,
            station_count,
            estimated_minutes: metrics::estimated_minutes(station_count),
            fare: metrics::fare_for(station_count),
        }
    }

    /// Stops from start to end, inclusive.
    pub fn stations(&self) -> &[String] {
        &self.stations
    }

    /// Where to change lines, if the route needs a change.
    pub fn transfer_station(&self) -> Option<&str> {
        self.transfer_station.as_deref()
    }

    pub fn has_transfer(&self) -> bool {
        self.transfer_station.is_some()
    }

    /// Terminal station named on the platform signs for the final leg.
    pub fn direction(&self) -> &str {
        &self.direction
    }

    pub fn start_line(&self) -> Option<MetroLine> {
        self.start_line
    }

    pub fn end_line(&self) -> Option<MetroLine> {
        self.end_line
    }

    /// Number of hops (stations minus one).
    pub fn station_count(&self) -> usize {
        self.station_count
    }

    pub fn estimated_minutes(&self) -> u32 {
        self.estimated_minutes
    }

    /// Ticket price in EGP.
    pub fn fare(&self) -> u32 {
        self.fare
    }

    /// Estimated time as "H hr M min" / "M min".
    pub fn formatted_time(&self) -> String {
        metrics::format_minutes(self.estimated_minutes)
    }

    pub fn is_valid(&self) -> bool {
        self.stations.len() >= 2
    }

    pub fn origin(&self) -> Option<&str> {
        self.stations.first().map(String::as_str)
    }

    pub fn destination(&self) -> Option<&str> {
        self.stations.last().map(String::as_str)
    }

    /// Stops left after `current`; `None` if `current` is not on the route.
    pub fn remaining_from(&self, current: &str) -> Option<usize> {
        metrics::remaining_stations(&self.stations, current)
    }
}

impl Default for RouteResult {
    fn default() -> Self {
        Self::invalid()
    }
}
