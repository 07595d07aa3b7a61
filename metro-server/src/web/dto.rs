//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{MetroLine, RouteResult, SavedRoute};
use crate::network::{NearestStation, StationNetwork};
use crate::prefs::Language;
use crate::tracking::LocationFailure;

// ============================================================================
// Stations
// ============================================================================

/// The whole network, for populating station pickers.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    /// Every station name, in line order without repeats
    pub stations: Vec<String>,

    pub lines: Vec<LineResult>,

    pub interchanges: Vec<String>,
}

/// One line and its stops.
#[derive(Debug, Serialize)]
pub struct LineResult {
    pub number: u8,
    pub name: String,
    pub color: String,
    pub stations: Vec<String>,
}

impl LineResult {
    fn from_line(line: MetroLine, stations: &[String]) -> Self {
        Self {
            number: line.number(),
            name: line.display_name().to_string(),
            color: line.color_hex().to_string(),
            stations: stations.to_vec(),
        }
    }
}

impl StationsResponse {
    pub fn from_network(network: &StationNetwork) -> Self {
        Self {
            stations: network.station_names().map(str::to_string).collect(),
            lines: network
                .lines()
                .map(|(line, stations)| LineResult::from_line(line, stations))
                .collect(),
            interchanges: network.interchanges().to_vec(),
        }
    }
}

/// Query for the nearest station.
#[derive(Debug, Deserialize)]
pub struct NearestRequest {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Serialize)]
pub struct NearestResponse {
    pub station: String,

    /// Great-circle distance, rounded to the metre
    pub distance_m: u64,
}

impl NearestResponse {
    pub fn from_nearest(nearest: &NearestStation<'_>) -> Self {
        Self {
            station: nearest.station.name.clone(),
            distance_m: nearest.distance_m.round() as u64,
        }
    }
}

// ============================================================================
// Routes
// ============================================================================

/// Query for a route. Missing fields arrive as empty strings so they are
/// reported the same way as blank ones.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    #[serde(default)]
    pub start: String,

    #[serde(default)]
    pub end: String,
}

/// A found route.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    pub stations: Vec<String>,
    pub transfer_station: Option<String>,

    /// Terminal the rider should look for on the platform signs
    pub direction: String,

    pub start_line: Option<u8>,
    pub end_line: Option<u8>,
    pub station_count: usize,
    pub estimated_minutes: u32,

    /// Human-readable time, e.g. "1 hr 16 min"
    pub formatted_time: String,

    /// Ticket price in EGP
    pub fare: u32,

    pub is_favorite: bool,
}

impl RouteResponse {
    pub fn from_route(route: &RouteResult, is_favorite: bool) -> Self {
        Self {
            stations: route.stations().to_vec(),
            transfer_station: route.transfer_station().map(str::to_string),
            direction: route.direction().to_string(),
            start_line: route.start_line().map(MetroLine::number),
            end_line: route.end_line().map(MetroLine::number),
            station_count: route.station_count(),
            estimated_minutes: route.estimated_minutes(),
            formatted_time: route.formatted_time(),
            fare: route.fare(),
            is_favorite,
        }
    }
}

/// Request for stations left on a route.
#[derive(Debug, Deserialize)]
pub struct RemainingRequest {
    pub stations: Vec<String>,
    pub current: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct RemainingResponse {
    /// Stops left, or -1 when `current` is not on the route
    pub remaining: i64,

    /// Estimated minutes to the destination; 0 when off the route
    pub minutes: u32,
}

/// A device location fix.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LocationFix {
    pub lat: f64,
    pub lon: f64,
}

/// Request to place the rider on a route. Exactly one of `location` and
/// `failure` should be present.
#[derive(Debug, Deserialize)]
pub struct TrackRequest {
    pub stations: Vec<String>,
    pub location: Option<LocationFix>,
    pub failure: Option<LocationFailure>,
}

// ============================================================================
// Preferences
// ============================================================================

/// A stored favourite or recent search.
#[derive(Debug, Serialize)]
pub struct SavedRouteResult {
    pub start: String,
    pub end: String,
    pub nickname: String,
    pub display_name: String,
    pub timestamp_millis: i64,
}

impl SavedRouteResult {
    pub fn from_saved(route: &SavedRoute) -> Self {
        Self {
            start: route.start_station.clone(),
            end: route.end_station.clone(),
            nickname: route.nickname.clone(),
            display_name: route.display_name(),
            timestamp_millis: route.timestamp_millis,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SavedRoutesResponse {
    pub routes: Vec<SavedRouteResult>,
}

impl SavedRoutesResponse {
    pub fn from_saved(routes: &[SavedRoute]) -> Self {
        Self {
            routes: routes.iter().map(SavedRouteResult::from_saved).collect(),
        }
    }
}

/// Request to save a favourite.
#[derive(Debug, Deserialize)]
pub struct AddFavoriteRequest {
    pub start: String,
    pub end: String,
    pub nickname: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AddFavoriteResponse {
    /// False when the pair was already a favourite
    pub added: bool,
}

/// A start/end pair in a query string.
#[derive(Debug, Deserialize)]
pub struct PairQuery {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Serialize)]
pub struct RemoveFavoriteResponse {
    pub removed: bool,
}

#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    pub language: Language,
    pub dark_mode: bool,
}

/// Partial settings update; absent fields are left alone.
#[derive(Debug, Default, Deserialize)]
pub struct SettingsUpdate {
    pub language: Option<Language>,
    pub dark_mode: Option<bool>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
