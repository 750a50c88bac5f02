//! Request handlers.
//!
//! Developer handlers are thin: decode, call one [`DeveloperRepository`]
//! operation, encode. Validation and salary derivation live in the store.
//!
//! [`DeveloperRepository`]: roster_core::DeveloperRepository

use std::sync::LazyLock;
use std::time::Instant;

use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use roster_core::{Developer, DeveloperInput};
use serde::Serialize;

use crate::app::AppState;
use crate::error::{ApiError, AppJson, AppPath};

pub fn developer_routes() -> Router<AppState> {
    Router::new()
        .route("/developers", get(list_developers).post(create_developer))
        .route(
            "/developers/{id}",
            get(get_developer)
                .put(update_developer)
                .delete(delete_developer),
        )
}

pub fn system_routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

async fn list_developers(
    State(state): State<AppState>,
) -> Result<Json<Vec<Developer>>, ApiError> {
    Ok(Json(state.developers.list_developers().await?))
}

async fn get_developer(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<Developer>, ApiError> {
    Ok(Json(state.developers.get_developer(id).await?))
}

async fn create_developer(
    State(state): State<AppState>,
    AppJson(input): AppJson<DeveloperInput>,
) -> Result<(StatusCode, Json<Developer>), ApiError> {
    let created = state.developers.create_developer(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_developer(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(input): AppJson<DeveloperInput>,
) -> Result<Json<Developer>, ApiError> {
    Ok(Json(state.developers.update_developer(id, input).await?))
}

async fn delete_developer(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<StatusCode, ApiError> {
    state.developers.delete_developer(id).await?;
    Ok(StatusCode::OK)
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    uptime: u64,
}

static START_TIME: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Starts the uptime clock reported by `/health`.
pub(crate) fn mark_started() {
    LazyLock::force(&START_TIME);
}

async fn health() -> impl IntoResponse {
    let body = HealthResponse {
        status: "up",
        version: env!("CARGO_PKG_VERSION"),
        uptime: START_TIME.elapsed().as_secs(),
    };

    (
        [
            (header::CACHE_CONTROL, "no-store, no-cache, must-revalidate"),
            (header::PRAGMA, "no-cache"),
        ],
        Json(body),
    )
}
