mod analysis;
mod config;
mod errors;
mod models;
mod routes;
mod state;
mod validation;

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::analysis::store::InMemoryAnalysisStore;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::validation::ResumeValidator;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CV screening API v{}", env!("CARGO_PKG_VERSION"));

    // Compile the category table once; every request shares it read-only
    let validator = match config.load_categories()? {
        Some(custom) => {
            info!(
                "Loaded {} categories from {:?}",
                custom.len(),
                config.categories_path
            );
            ResumeValidator::new(custom)
        }
        None => ResumeValidator::with_default_categories(),
    }
    .context("Failed to compile category keywords")?;
    info!(
        "Resume validator ready ({} categories, threshold {})",
        validator.category_count(),
        validation::ATS_THRESHOLD
    );

    // Build app state
    let state = AppState {
        config: config.clone(),
        validator: Arc::new(validator),
        store: Arc::new(InMemoryAnalysisStore::new()),
    };

    // Build router
    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(build_cors(&config)),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Permissive when no origins are configured, otherwise an explicit allow-list.
fn build_cors(config: &Config) -> CorsLayer {
    if config.cors_allowed_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin '{origin}'");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any)
}
