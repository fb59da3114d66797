use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use account_service::database::memory::MemoryAccountStore;
use account_service::routes::{app, AppState};

/// Build the full application router wired to a fresh in-memory store.
pub fn test_app() -> Router {
    app(AppState {
        store: Arc::new(MemoryAccountStore::new()),
    })
}

/// Drive a single request through the router.
pub async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.expect("request failed")
}

/// A request carrying a JSON body with the matching content type.
pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request build failed")
}

/// Collect and parse a response body as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body read failed");
    serde_json::from_slice(&bytes).expect("body was not valid JSON")
}

/// A valid account creation payload.
pub fn account_payload(name: &str) -> Value {
    serde_json::json!({
        "name": name,
        "email": format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        "address": "123 Main St, Springfield",
        "phone_number": "555-1212",
    })
}
