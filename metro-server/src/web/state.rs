//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::network::StationNetwork;
use crate::prefs::Preferences;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The metro network, read-only after start-up
    pub network: Arc<StationNetwork>,

    /// Rider preferences; every change is a read-modify-write, so access
    /// is serialised
    pub prefs: Arc<Mutex<Preferences>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: StationNetwork, prefs: Preferences) -> Self {
        Self {
            network: Arc::new(network),
            prefs: Arc::new(Mutex::new(prefs)),
        }
    }
}
