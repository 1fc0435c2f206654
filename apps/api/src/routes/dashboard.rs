use axum::{extract::State, Json};
use serde::Serialize;

use crate::auth::SessionToken;
use crate::errors::AppError;
use crate::matching::{job_demand, skill_frequency, CategoryDemand, SkillFrequency};
use crate::models::user_skills::UserSkillsRecord;
use crate::routes::require_user;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub users: Vec<UserSkillsRecord>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatsResponse {
    pub total_users: usize,
    pub skill_frequency: Vec<SkillFrequency>,
    pub job_demand: Vec<CategoryDemand>,
}

/// GET /api/dashboard/users
pub async fn handle_list_users(
    State(state): State<AppState>,
    token: SessionToken,
) -> Result<Json<UsersResponse>, AppError> {
    require_user(&state, &token).await?;
    let users = state.store.list_user_skills().await?;
    Ok(Json(UsersResponse { users }))
}

/// GET /api/dashboard/stats
pub async fn handle_dashboard_stats(
    State(state): State<AppState>,
    token: SessionToken,
) -> Result<Json<DashboardStatsResponse>, AppError> {
    require_user(&state, &token).await?;
    let users = state.store.list_user_skills().await?;
    Ok(Json(DashboardStatsResponse {
        total_users: users.len(),
        skill_frequency: skill_frequency(&state.catalog.skills, &users),
        job_demand: job_demand(&state.catalog.jobs),
    }))
}
