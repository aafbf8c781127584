//! roster-server — Employee roster REST service
//!
//! Long-running HTTP service that:
//! - Exposes CRUD endpoints for employee records under `/employees`
//! - Enforces email uniqueness on create and existence on read/update
//! - Persists to an embedded SQLite database via sqlx

use roster_server::{AppState, Config, api};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster_server=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env();

    tracing::info!("Starting roster-server");

    // Initialize application state (pool + migrations)
    let state = AppState::new(&config).await?;

    let app = api::create_router(state);

    let http_addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&http_addr).await?;
    tracing::info!("roster-server HTTP listening on {http_addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
