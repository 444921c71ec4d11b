//! Name Meaning Backend
//!
//! Looks up the meaning, origin and pronunciation of personal names and keeps
//! a persisted list of favorites, backed by SQLite.

mod api;
mod config;
mod db;
mod errors;
mod favorites;
mod lookup;
mod models;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use db::Repository;
use favorites::FavoritesStore;
use lookup::NameLookup;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub lookup: Arc<NameLookup>,
    pub favorites: Arc<FavoritesStore>,
}

/// Initialize logging; `RUST_LOG` overrides the configured level.
fn init_tracing(config: &Config) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    if config.log_json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    init_tracing(&config);

    tracing::info!("Starting Name Meaning Backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Initialize key-value storage
    let pool = db::init_database(&config.db_path).await?;
    let kv = Arc::new(Repository::new(pool));

    let favorites = Arc::new(FavoritesStore::open(kv).await);

    let lookup = Arc::new(NameLookup::new(config.lookup_delay));
    tracing::info!("Lookup delay: {:?}", lookup.delay());

    let state = AppState { lookup, favorites };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Names
        .route("/names", get(api::list_known_names))
        .route("/names/featured", get(api::get_featured_name))
        .route(
            "/names/lookup",
            get(api::lookup_name_query).post(api::lookup_name),
        )
        // Favorites
        .route(
            "/favorites",
            get(api::list_favorites).post(api::add_favorite),
        )
        .route(
            "/favorites/{name}",
            get(api::get_favorite_status).delete(api::remove_favorite),
        )
        .route("/favorites/{name}/toggle", post(api::toggle_favorite));

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .fallback(api::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests;
