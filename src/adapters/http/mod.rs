//! HTTP adapter - axum router serving the GraphQL API.
//!
//! - `POST /graphql` executes operations
//! - `GET /graphql` serves GraphiQL
//! - `GET /health` reports liveness

mod handlers;
mod routes;

pub use handlers::HealthResponse;
pub use routes::app_router;
