use metro_server::config::ServerConfig;
use metro_server::network::cairo_metro;
use metro_server::prefs::{FileStore, Preferences};
use metro_server::web::{AppState, create_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "metro_server=info,tower_http=info";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = ServerConfig::from_env().expect("Invalid configuration");

    let network = cairo_metro().expect("Built-in network data is inconsistent");
    info!(
        stations = network.len(),
        interchanges = network.interchanges().len(),
        "Loaded Cairo Metro network"
    );

    let store = FileStore::open(&config.prefs_path).expect("Failed to open preference store");
    info!(path = %config.prefs_path.display(), "Opened preference store");

    // Build app state
    let state = AppState::new(network, Preferences::new(store));

    // Create router
    let app = create_router(state);

    // Bind and serve
    let addr = config.bind_addr;
    info!("Cairo Metro route finder listening on http://{addr}");
    info!("API endpoints:");
    info!("  GET  /health             - Health check");
    info!("  GET  /stations           - All stations and lines");
    info!("  GET  /stations/nearest   - Nearest station to lat/lon");
    info!("  GET  /route              - Find a route (JSON, or text/plain to share)");
    info!("  POST /route/remaining    - Stations left on a route");
    info!("  POST /route/track        - Trip progress from a location fix");
    info!("  /favorites, /recents, /settings - Saved preferences");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app).await.expect("Server error");
}
