use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use roster_auth::Argon2Hasher;
use roster_server::config::ServerConfig;
use roster_server::routes;
use roster_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("roster=info".parse()?))
        .with_target(false)
        .init();

    let config = ServerConfig::from_env()?;
    if config.uses_insecure_secret() {
        tracing::warn!("JWT_SECRET not set; tokens are signed with the public demo secret");
    }

    let state = AppState::bootstrap(&config, Argon2Hasher::new()).await?;

    let app = routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {addr}");
    tracing::info!("API docs at http://localhost:{}/api-docs", config.port);
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C handler");
    tracing::info!("Shutdown signal received");
}
