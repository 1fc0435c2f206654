use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::auth::SessionToken;
use crate::catalog::{Job, Skill};
use crate::errors::AppError;
use crate::matching::{match_jobs, JobMatch, TypeFilter};
use crate::routes::{parse_json, require_user};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MatchQuery {
    #[serde(rename = "type")]
    pub job_type: Option<String>,
}

#[derive(Debug, Serialize)]
struct MatchesResponse<'a> {
    skills: &'a [String],
    #[serde(rename = "type")]
    type_filter: TypeFilter,
    jobs: Vec<JobMatch<'a>>,
}

#[derive(Debug, Serialize)]
pub struct MatchEchoResponse {
    pub message: String,
    pub skills: Value,
}

#[derive(Debug, Serialize)]
pub struct SkillCatalogResponse {
    pub skills: Vec<Skill>,
}

#[derive(Debug, Serialize)]
pub struct JobCatalogResponse {
    pub jobs: Vec<Job>,
}

/// GET /api/catalog/skills
pub async fn handle_skill_catalog(State(state): State<AppState>) -> Json<SkillCatalogResponse> {
    Json(SkillCatalogResponse {
        skills: state.catalog.skills.clone(),
    })
}

/// GET /api/catalog/jobs
pub async fn handle_job_catalog(State(state): State<AppState>) -> Json<JobCatalogResponse> {
    Json(JobCatalogResponse {
        jobs: state.catalog.jobs.clone(),
    })
}

/// GET /api/jobs/matches?type=all|permanent|parttime|onetime
/// Ranks the catalog against the caller's saved skills.
pub async fn handle_matches(
    State(state): State<AppState>,
    token: SessionToken,
    query: Result<Query<MatchQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let user = require_user(&state, &token).await?;
    let Query(query) =
        query.map_err(|_| AppError::Validation("Invalid query string".to_string()))?;
    let type_filter = match query.job_type.as_deref() {
        None | Some("") => TypeFilter::All,
        Some(raw) => raw
            .parse::<TypeFilter>()
            .map_err(|e| AppError::Validation(e.to_string()))?,
    };

    let skills = state
        .store
        .find_user_skills(user.id)
        .await?
        .map(|record| record.skills)
        .unwrap_or_default();

    let response = MatchesResponse {
        skills: &skills,
        type_filter,
        jobs: match_jobs(&state.catalog.jobs, &skills, type_filter),
    };
    Ok(Json(response).into_response())
}

/// POST /api/jobs/match
/// Placeholder: echoes the submitted skills. Matching runs through `GET /api/jobs/matches`.
pub async fn handle_match_placeholder(
    State(state): State<AppState>,
    token: SessionToken,
    body: Bytes,
) -> Result<Json<MatchEchoResponse>, AppError> {
    require_user(&state, &token).await?;
    let body: Value = parse_json(&body)?;
    Ok(Json(MatchEchoResponse {
        message: "Job matching endpoint".to_string(),
        skills: body
            .get("skills")
            .cloned()
            .unwrap_or_else(|| Value::Array(Vec::new())),
    }))
}
