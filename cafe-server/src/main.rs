//! cafe-server - café content-management backend
//!
//! Serves the admin console API and the anonymous public reads over one
//! HTTP listener. Concurrency is delegated to tokio/axum and SQLite's
//! transaction isolation; there is no in-process scheduler or queue.

use cafe_server::{AppState, Config, api};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cafe_server=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    tracing::info!("Starting cafe-server (env: {})", config.environment);

    let state = AppState::new(&config).await?;
    let app = api::router(state);

    let addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("cafe-server listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
