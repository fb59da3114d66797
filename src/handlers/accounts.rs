use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::api::JsonBody;
use crate::database::models::{Account, AccountPayload};
use crate::database::store::StoreError;
use crate::error::ApiError;
use crate::routes::AppState;

/// POST /accounts - Create a new account
pub async fn create(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<AccountPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let fields = payload.validate()?;
    let account = state.store.create(fields).await?;

    tracing::info!("Created account {}", account.id);

    let location = format!("/accounts/{}", account.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(account),
    ))
}

/// GET /accounts/:id - Read a single account
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Account>, ApiError> {
    match state.store.find_by_id(id).await? {
        Some(account) => Ok(Json(account)),
        None => Err(ApiError::not_found(format!(
            "Account with id [{}] could not be found",
            id
        ))),
    }
}

/// GET /accounts - List all accounts
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Account>>, ApiError> {
    let accounts = state.store.find_all().await?;
    Ok(Json(accounts))
}

/// PUT /accounts/:id - Replace the mutable fields of an account
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    JsonBody(payload): JsonBody<AccountPayload>,
) -> Result<Json<Account>, ApiError> {
    let fields = payload.validate()?;

    match state.store.update(id, fields).await {
        Ok(account) => Ok(Json(account)),
        Err(StoreError::NotFound) => Err(ApiError::not_found(format!(
            "Account with id [{}] could not be found",
            id
        ))),
        Err(other) => Err(other.into()),
    }
}

/// DELETE /accounts/:id - Remove an account
///
/// Always answers 204, whether or not the record existed.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.store.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
