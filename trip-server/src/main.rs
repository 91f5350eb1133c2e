use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use trip_server::config::ServerConfig;
use trip_server::resrobot::{MockTripSource, ResRobotClient};
use trip_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ServerConfig::from_env().unwrap_or_else(|e| exit_with(&e));

    // Pick the trip source
    let state = match &config.mock_file {
        Some(path) => {
            let mock = MockTripSource::from_file(path).unwrap_or_else(|e| exit_with(&e));
            info!(path = %path.display(), trips = mock.trip_count(), "serving mock trips");
            AppState::new(mock)
        }
        None => {
            if config.missing_api_key() {
                warn!("RESROBOT_API_KEY not set. API calls will fail.");
            }
            let client =
                ResRobotClient::new(config.resrobot.clone()).unwrap_or_else(|e| exit_with(&e));
            AppState::new(client)
        }
    };

    let app = create_router(state);

    let addr = config.addr;
    info!("Trip server listening on http://{addr}");
    info!("  GET /health");
    info!("  GET /trips?origin=<id>&destination=<id>");
    info!("  GET /trips/<index>?origin=<id>&destination=<id>");
    info!("  GET /trips/<index>/map?origin=<id>&destination=<id>");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| exit_with(&e));
    if let Err(e) = axum::serve(listener, app).await {
        exit_with(&e);
    }
}

/// Log a startup failure and exit.
fn exit_with(e: &dyn std::fmt::Display) -> ! {
    error!("{e}");
    std::process::exit(1);
}
