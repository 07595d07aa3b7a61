//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use crate::domain::{Coordinate, InvalidCoordinate};
use crate::metrics;
use crate::planner::{RouteFinder, TripInputError, calculate_remaining_stations, validate_trip};
use crate::prefs::PrefsError;
use crate::tracking::{LocationOutcome, track_progress};

use super::dto::*;
use super::state::AppState;
use super::templates::RouteDetailsTemplate;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", get(list_stations))
        .route("/stations/nearest", get(nearest_station))
        .route("/route", get(find_route))
        .route("/route/remaining", post(remaining_stations))
        .route("/route/track", post(track))
        .route(
            "/favorites",
            get(list_favorites).post(add_favorite).delete(remove_favorite),
        )
        .route("/recents", get(list_recents).delete(clear_recents))
        .route("/settings", get(get_settings).put(update_settings))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Every station and line.
async fn list_stations(State(state): State<AppState>) -> Json<StationsResponse> {
    Json(StationsResponse::from_network(&state.network))
}

/// Nearest station to a coordinate.
async fn nearest_station(
    State(state): State<AppState>,
    Query(req): Query<NearestRequest>,
) -> Result<Json<NearestResponse>, AppError> {
    let observed = Coordinate::new(req.lat, req.lon)?;
    let nearest = state
        .network
        .nearest(&observed)
        .ok_or_else(|| AppError::NotFound {
            message: "no station has a known location".to_string(),
        })?;

    Ok(Json(NearestResponse::from_nearest(&nearest)))
}

/// Check if request prefers plain text.
fn accepts_text(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/plain"))
}

/// Find a route between two stations and remember the search.
async fn find_route(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<RouteRequest>,
) -> Result<Response, AppError> {
    let trip = validate_trip(&state.network, &req.start, &req.end)?;

    // Any well-formed search is remembered, whether or not a route exists.
    let is_favorite = {
        let mut prefs = state.prefs.lock().await;
        prefs.add_recent_search(&trip.start, &trip.end)?;
        prefs.is_favorite(&trip.start, &trip.end)?
    };

    let route = RouteFinder::new(&state.network).find_route(&trip.start, &trip.end);
    if !route.is_valid() {
        return Err(AppError::NotFound {
            message: format!("no route found from {} to {}", trip.start, trip.end),
        });
    }

    debug!(
        start = %trip.start,
        end = %trip.end,
        stations = route.station_count(),
        transfer = route.transfer_station().unwrap_or("-"),
        "route found"
    );

    if accepts_text(&headers) {
        let text = RouteDetailsTemplate::from_route(&route)
            .render()
            .map_err(|e| AppError::Internal {
                message: format!("Template error: {e}"),
            })?;
        Ok(text.into_response())
    } else {
        Ok(Json(RouteResponse::from_route(&route, is_favorite)).into_response())
    }
}

/// Stations left from the rider's current stop.
async fn remaining_stations(Json(req): Json<RemainingRequest>) -> Json<RemainingResponse> {
    let remaining = calculate_remaining_stations(&req.stations, &req.current);
    let minutes = usize::try_from(remaining)
        .map(metrics::estimated_minutes)
        .unwrap_or(0);

    Json(RemainingResponse { remaining, minutes })
}

/// Place the rider on their route from a location outcome.
async fn track(
    State(state): State<AppState>,
    Json(req): Json<TrackRequest>,
) -> Result<Response, AppError> {
    let outcome: LocationOutcome = match (req.location, req.failure) {
        (Some(fix), None) => Ok(Coordinate::new(fix.lat, fix.lon)?),
        (None, Some(failure)) => Err(failure),
        _ => {
            return Err(AppError::BadRequest {
                message: "expected exactly one of location and failure".to_string(),
            });
        }
    };

    let progress = track_progress(&state.network, &req.stations, outcome);
    Ok(Json(progress).into_response())
}

async fn list_favorites(
    State(state): State<AppState>,
) -> Result<Json<SavedRoutesResponse>, AppError> {
    let favorites = state.prefs.lock().await.favorites()?;
    Ok(Json(SavedRoutesResponse::from_saved(&favorites)))
}

/// Save a favourite. Station names are checked and stored in canonical form.
async fn add_favorite(
    State(state): State<AppState>,
    Json(req): Json<AddFavoriteRequest>,
) -> Result<Json<AddFavoriteResponse>, AppError> {
    let trip = validate_trip(&state.network, &req.start, &req.end)?;
    let nickname = req.nickname.as_deref().map(str::trim).filter(|n| !n.is_empty());

    let added = state
        .prefs
        .lock()
        .await
        .add_favorite(&trip.start, &trip.end, nickname)?;

    Ok(Json(AddFavoriteResponse { added }))
}

async fn remove_favorite(
    State(state): State<AppState>,
    Query(req): Query<PairQuery>,
) -> Result<Json<RemoveFavoriteResponse>, AppError> {
    // Stale favourites may name stations the network no longer knows, so
    // fall back to the raw input.
    let start = state.network.resolve(&req.start).unwrap_or(req.start.as_str());
    let end = state.network.resolve(&req.end).unwrap_or(req.end.as_str());

    let removed = state.prefs.lock().await.remove_favorite(start, end)?;
    Ok(Json(RemoveFavoriteResponse { removed }))
}

async fn list_recents(
    State(state): State<AppState>,
) -> Result<Json<SavedRoutesResponse>, AppError> {
    let recent = state.prefs.lock().await.recent_searches()?;
    Ok(Json(SavedRoutesResponse::from_saved(&recent)))
}

async fn clear_recents(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.prefs.lock().await.clear_recent_searches()?;
    Ok(StatusCode::NO_CONTENT)
}

async fn get_settings(State(state): State<AppState>) -> Result<Json<SettingsResponse>, AppError> {
    let prefs = state.prefs.lock().await;
    Ok(Json(SettingsResponse {
        language: prefs.language()?,
        dark_mode: prefs.is_dark_mode()?,
    }))
}

async fn update_settings(
    State(state): State<AppState>,
    Json(update): Json<SettingsUpdate>,
) -> Result<Json<SettingsResponse>, AppError> {
    let mut prefs = state.prefs.lock().await;
    if let Some(language) = update.language {
        prefs.set_language(language)?;
    }
    if let Some(dark_mode) = update.dark_mode {
        prefs.set_dark_mode(dark_mode)?;
    }

    Ok(Json(SettingsResponse {
        language: prefs.language()?,
        dark_mode: prefs.is_dark_mode()?,
    }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<TripInputError> for AppError {
    fn from(e: TripInputError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<InvalidCoordinate> for AppError {
    fn from(e: InvalidCoordinate) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<PrefsError> for AppError {
    fn from(e: PrefsError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
