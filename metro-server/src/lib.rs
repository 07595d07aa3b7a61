//! Cairo Metro route finder server.
//!
//! Answers "how do I get from this station to that one?" on the Cairo
//! Metro: a direct ride or a ride with one change, with stop count, time
//! and fare, plus trip progress and saved routes.

pub mod config;
pub mod domain;
pub mod metrics;
pub mod network;
pub mod planner;
pub mod prefs;
pub mod tracking;
pub mod web;
