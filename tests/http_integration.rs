//! Integration tests for the axum router.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use muscle_management::adapters::graphql::{build_schema, GraphqlHandlers};
use muscle_management::adapters::http::app_router;
use muscle_management::adapters::memory::{
    InMemoryExerciseRepository, InMemoryStore, InMemoryTrainingSessionRepository,
    InMemoryUnitOfWork,
};
use muscle_management::config::ServerConfig;
use muscle_management::domain::exercise::ExerciseOrderPolicy;

fn app() -> Router {
    app_with(&ServerConfig::default())
}

fn app_with(server: &ServerConfig) -> Router {
    let store = InMemoryStore::new();
    let handlers = GraphqlHandlers::new(
        Arc::new(InMemoryTrainingSessionRepository::new(store.clone())),
        Arc::new(InMemoryExerciseRepository::new(store.clone())),
        Arc::new(InMemoryUnitOfWork::new(store)),
        ExerciseOrderPolicy::First,
    );
    app_router(build_schema(handlers), server)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn graphql_post(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/graphql")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "ok");
}

#[tokio::test]
async fn graphql_post_executes_query() {
    let response = app()
        .oneshot(graphql_post(json!({ "query": "{ exerciseNames }" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "data": { "exerciseNames": [] } }));
}

#[tokio::test]
async fn graphql_errors_carry_extensions() {
    let response = app()
        .oneshot(graphql_post(json!({
            "query": "query($id: Int!) { trainingSession(id: $id) { id } }",
            "variables": { "id": 0 }
        })))
        .await
        .unwrap();

    let body = body_json(response).await;
    assert_eq!(body["errors"][0]["extensions"]["code"], "VALIDATION_FAILED");
    assert_eq!(body["errors"][0]["extensions"]["field"], "id");
}

#[tokio::test]
async fn graphiql_is_served_on_get() {
    let response = app()
        .oneshot(Request::builder().uri("/graphql").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let response = app()
        .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

fn from_origin(origin: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/graphql")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::ORIGIN, origin)
        .body(Body::from(json!({ "query": "{ exerciseNames }" }).to_string()))
        .unwrap()
}

#[tokio::test]
async fn cross_origin_calls_are_not_allowed_by_default() {
    let response = app().oneshot(from_origin("http://elsewhere.test")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

#[tokio::test]
async fn configured_origin_is_allowed() {
    let server = ServerConfig {
        cors_origins: Some("http://localhost:5173".to_string()),
        ..Default::default()
    };

    let allowed = app_with(&server)
        .oneshot(from_origin("http://localhost:5173"))
        .await
        .unwrap();
    assert_eq!(
        allowed.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:5173"
    );

    let other = app_with(&server)
        .oneshot(from_origin("http://elsewhere.test"))
        .await
        .unwrap();
    assert!(other.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}
