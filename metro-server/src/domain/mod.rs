//! Domain types for the metro route planner.
//!
//! These are plain values: lines, stations, route results and saved
//! routes. Types that carry invariants enforce them at construction, so
//! code that receives them can trust them.

mod line;
mod route;
mod saved_route;
mod station;

pub use line::{MetroLine, UnknownLine};
pub use route::RouteResult;
pub use saved_route::SavedRoute;
pub use station::{Coordinate, InvalidCoordinate, Station};
