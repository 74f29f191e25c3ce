use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;

use crate::server::{router::router, state::AppState};


/// Builds the full application router over a fresh in-memory database.
///
/// The returned context owns the connection the router's state was cloned from.
async fn setup() -> (TestContext, Router) {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap().clone();

    (test, router(AppState::new(db)))
}

/// Sends one request through the router and returns the status and parsed body.
///
/// An empty body is returned as `Value::Null`.
async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    send_request(app, request).await
}

async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}

fn validation_errors() -> Value {
    json!({ "errors": ["validation errors"] })
}
