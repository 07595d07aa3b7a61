//! Web layer for the metro route finder.
//!
//! Provides HTTP endpoints for station lookup, route finding, trip
//! progress and rider preferences.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
