use axum::{body::Bytes, extract::State, Json};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::auth::SessionToken;
use crate::errors::AppError;
use crate::models::user_skills::UserSkillsRecord;
use crate::routes::{parse_json, require_user};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SkillsResponse {
    pub skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SaveSkillsResponse {
    pub message: String,
    pub skills: Vec<String>,
}

/// GET /api/user/skills
pub async fn handle_get_skills(
    State(state): State<AppState>,
    token: SessionToken,
) -> Result<Json<SkillsResponse>, AppError> {
    let user = require_user(&state, &token).await?;
    let skills = state
        .store
        .find_user_skills(user.id)
        .await?
        .map(|record| record.skills)
        .unwrap_or_default();
    Ok(Json(SkillsResponse { skills }))
}

/// POST /api/user/skills
/// Overwrites the caller's record. The three-skill cap is a client-side rule and is not
/// enforced here.
pub async fn handle_save_skills(
    State(state): State<AppState>,
    token: SessionToken,
    body: Bytes,
) -> Result<Json<SaveSkillsResponse>, AppError> {
    let user = require_user(&state, &token).await?;
    let body: Value = parse_json(&body)?;
    let skills = skill_names(&body)?;

    let record = UserSkillsRecord::new(user.id, user.email.unwrap_or_default(), skills);
    state.store.upsert_user_skills(&record).await?;
    info!(
        "Saved {} skills for user {}",
        record.skills.len(),
        record.user_id
    );

    Ok(Json(SaveSkillsResponse {
        message: "Skills saved successfully".to_string(),
        skills: record.skills,
    }))
}

fn skill_names(body: &Value) -> Result<Vec<String>, AppError> {
    let items = body
        .get("skills")
        .and_then(Value::as_array)
        .ok_or_else(|| AppError::Validation("Skills must be an array".to_string()))?;

    items
        .iter()
        .map(|item| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                AppError::Validation("Skills must be an array of strings".to_string())
            })
        })
        .collect()
}
