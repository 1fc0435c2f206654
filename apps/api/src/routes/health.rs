use axum::Json;
use serde_json::{json, Value};

pub const WELCOME_MESSAGE: &str = "WorkWise API - Where Skills Meet Jobs";

/// GET /api/
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "message": WELCOME_MESSAGE }))
}
