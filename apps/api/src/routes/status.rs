use axum::{body::Bytes, extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::status::StatusCheck;
use crate::routes::parse_json;
use crate::state::AppState;
use crate::store::STATUS_CHECK_LIMIT;

#[derive(Debug, Deserialize)]
struct StatusCheckBody {
    client_name: Option<String>,
}

/// POST /api/status
pub async fn handle_create_status(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<StatusCheck>, AppError> {
    let body: StatusCheckBody = parse_json(&body)?;
    let client_name = body
        .client_name
        .filter(|name| !name.trim().is_empty())
        .ok_or_else(|| AppError::Validation("client_name is required".to_string()))?;

    let check = StatusCheck::new(client_name);
    state.store.insert_status_check(&check).await?;
    info!("Recorded status check {} from {}", check.id, check.client_name);
    Ok(Json(check))
}

/// GET /api/status
pub async fn handle_list_status(
    State(state): State<AppState>,
) -> Result<Json<Vec<StatusCheck>>, AppError> {
    Ok(Json(state.store.list_status_checks(STATUS_CHECK_LIMIT).await?))
}
