//! Production deployment probe.
//!
//! Entry point for the production instance: serves the production readiness
//! string on port 6000. Exits non-zero if the port cannot be bound.

use deploy_probe::config::ProbeConfig;
use deploy_probe::http::start_server;
use deploy_probe::logging;
use deploy_probe::routes::create_router;
use deploy_probe::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let config = ProbeConfig::production();
    tracing::info!(
        instance = %config.instance,
        host = %config.host,
        port = config.port,
        "Loaded probe profile"
    );

    let state = AppState::new(config);
    let app = create_router(state.clone());

    start_server(app, &state.config).await?;

    Ok(())
}
