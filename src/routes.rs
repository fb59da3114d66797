use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::database::store::AccountStore;
use crate::handlers::accounts;
use crate::middleware::security_headers;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AccountStore>,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(account_routes())
        .with_state(state)
        // Global middleware; security_headers is outermost so its header set
        // wins on every response
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(security_headers))
}

fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/accounts", get(accounts::list).post(accounts::create))
        .route(
            "/accounts/:id",
            get(accounts::show)
                .put(accounts::update)
                .delete(accounts::remove),
        )
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Account REST API Service",
        "version": version,
        "endpoints": {
            "health": "GET /health",
            "list": "GET /accounts",
            "create": "POST /accounts",
            "read": "GET /accounts/{id}",
            "update": "PUT /accounts/{id}",
            "delete": "DELETE /accounts/{id}",
        }
    }))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "OK" }))
}
