//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::server::graphql::create_schema;
use crate::server::routes::{
    graphql_handler, health_handler, robots_handler, sitemap_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub public_base_url: String,
}

/// Build the Axum application router
pub fn build_app(pool: PgPool, public_base_url: String) -> Router {
    // Create GraphQL schema (singleton)
    let schema = Arc::new(create_schema());

    let app_state = AppState {
        db_pool: pool,
        public_base_url,
    };

    // CORS configuration - the Dioxus frontend runs as a separate service
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    // Build router
    let mut router = Router::new().route("/graphql", post(graphql_handler));

    // GraphQL playground only in debug builds (development)
    #[cfg(debug_assertions)]
    {
        use crate::server::routes::graphql_playground;
        router = router.route("/graphql", get(graphql_playground));
    }

    router
        // Health check
        .route("/health", get(health_handler))
        // Crawler surfaces
        .route("/sitemap.xml", get(sitemap_handler))
        .route("/robots.txt", get(robots_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        // State (schema for GraphQL handlers)
        .with_state(schema)
}
