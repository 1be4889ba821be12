//! HTTP router.

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use super::handlers::{graphiql, graphql, health};
use crate::adapters::graphql::AppSchema;
use crate::config::{CorsPolicy, ServerConfig};

/// Creates the application router with request tracing, CORS and timeout.
pub fn app_router(schema: AppSchema, server: &ServerConfig) -> Router {
    Router::new()
        .route("/graphql", get(graphiql).post(graphql))
        .route("/health", get(health))
        .with_state(schema)
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(server.cors_policy()))
        .layer(TraceLayer::new_for_http())
}

/// Without configured origins no CORS headers are sent, so browsers only
/// allow same-origin calls.
fn cors_layer(policy: CorsPolicy) -> CorsLayer {
    let origins = match policy {
        CorsPolicy::SameOrigin => return CorsLayer::new(),
        CorsPolicy::AnyOrigin => return CorsLayer::permissive(),
        CorsPolicy::Origins(origins) => origins,
    };
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

