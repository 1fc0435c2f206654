pub mod auth;
pub mod dashboard;
pub mod health;
pub mod jobs;
pub mod skills;
pub mod status;

use std::any::Any;

use axum::{
    body::Bytes,
    http::{
        header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method, Uri,
    },
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::de::DeserializeOwned;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::auth::{AuthUser, SessionToken};
use crate::errors::AppError;
use crate::state::AppState;

const API_PREFIX: &str = "/api";
const ALLOWED_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
const ALLOWED_HEADERS: &str = "Content-Type, Authorization";

/// Builds the full application: the route table plus CORS, tracing and panic handling.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api",
            get(health::health_handler).fallback(route_not_found),
        )
        .route(
            "/api/",
            get(health::health_handler).fallback(route_not_found),
        )
        // Auth
        .route(
            "/api/auth/signup",
            post(auth::handle_sign_up).fallback(route_not_found),
        )
        .route(
            "/api/auth/signin",
            post(auth::handle_sign_in).fallback(route_not_found),
        )
        .route(
            "/api/auth/signout",
            post(auth::handle_sign_out).fallback(route_not_found),
        )
        .route(
            "/api/auth/user",
            get(auth::handle_current_user).fallback(route_not_found),
        )
        // Skills
        .route(
            "/api/user/skills",
            get(skills::handle_get_skills)
                .post(skills::handle_save_skills)
                .fallback(route_not_found),
        )
        // Dashboard
        .route(
            "/api/dashboard/users",
            get(dashboard::handle_list_users).fallback(route_not_found),
        )
        .route(
            "/api/dashboard/stats",
            get(dashboard::handle_dashboard_stats).fallback(route_not_found),
        )
        // Catalog and matching
        .route(
            "/api/catalog/skills",
            get(jobs::handle_skill_catalog).fallback(route_not_found),
        )
        .route(
            "/api/catalog/jobs",
            get(jobs::handle_job_catalog).fallback(route_not_found),
        )
        .route(
            "/api/jobs/matches",
            get(jobs::handle_matches).fallback(route_not_found),
        )
        .route(
            "/api/jobs/match",
            post(jobs::handle_match_placeholder).fallback(route_not_found),
        )
        // Legacy status checks
        .route(
            "/api/status",
            get(status::handle_list_status)
                .post(status::handle_create_status)
                .fallback(route_not_found),
        )
        .fallback(route_not_found)
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .layer(SetResponseHeaderLayer::if_not_present(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        ))
}

/// Any origin. `OPTIONS` is answered here with 200 before routing.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
}

async fn route_not_found(uri: Uri) -> AppError {
    let path = uri.path();
    let route = path.strip_prefix(API_PREFIX).unwrap_or(path);
    let route = if route.is_empty() { "/" } else { route };
    AppError::NotFound(format!("Route {route} not found"))
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    AppError::Internal(anyhow::anyhow!("handler panicked: {detail}")).into_response()
}

/// Decodes a JSON request body, mapping any failure to a 400.
pub(crate) fn parse_json<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|_| AppError::Validation("Invalid JSON body".to_string()))
}

/// Resolves the caller or fails with 401.
pub(crate) async fn require_user(
    state: &AppState,
    token: &SessionToken,
) -> Result<AuthUser, AppError> {
    token
        .resolve(state.auth.as_ref())
        .await
        .map_err(AppError::from_session_lookup)
}
