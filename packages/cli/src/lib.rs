use anyhow::Context;
use axum::http::{HeaderValue, Method};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod config;


pub use config::{Config, ConfigError};
use tasklist_api::DbState;

/// Install the global tracing subscriber (RUST_LOG, defaulting to `info`)
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();
}

/// Build the CORS layer. `*` allows any origin.
pub fn cors_layer(cors_origin: &str) -> Result<CorsLayer, ConfigError> {
    let allow_origin = if cors_origin.trim() == "*" {
        AllowOrigin::from(Any)
    } else {
        let origin = cors_origin
            .parse::<HeaderValue>()
            .map_err(|_| ConfigError::InvalidCorsOrigin(cors_origin.to_string()))?;
        AllowOrigin::exact(origin)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any))
}

/// Application router with CORS and request tracing layered on
pub fn build_app(config: &Config, db: DbState) -> Result<Router, ConfigError> {
    let cors = cors_layer(&config.cors_origin)?;

    Ok(tasklist_api::create_router(db)
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}

pub async fn run_server(config: Config) -> anyhow::Result<()> {
    let db = DbState::init_with_path(&config.database_path)
        .await
        .with_context(|| {
            format!(
                "Failed to open database at {}",
                config.database_path.display()
            )
        })?;

    let app = build_app(&config, db)?;

    let listener = bind_listener(&config).await?;
    let addr = listener.local_addr()?;

    info!("Server is running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Bind the configured host and port. Hostnames such as `localhost` are resolved.
pub async fn bind_listener(config: &Config) -> anyhow::Result<TcpListener> {
    TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.host, config.port))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
