//! HTTP handlers for the habit API.
//!
//! All endpoints answer with a `{status, data|error}` envelope.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Local;
use serde::Deserialize;
use serde_json::json;

use habitd_core::report::weekly_report;
use habitd_core::HabitError;

use crate::server::AppState;

type ApiResponse = (StatusCode, Json<serde_json::Value>);

/// Body of `POST /habits`. Both fields optional so a missing field folds
/// into `InvalidInput` instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHabitRequest {
    pub name: Option<String>,
    pub daily_goal: Option<i64>,
}

fn success(status: StatusCode, data: impl serde::Serialize) -> ApiResponse {
    (status, Json(json!({ "status": "success", "data": data })))
}

fn failure(err: &HabitError) -> ApiResponse {
    let status = match err {
        HabitError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        HabitError::NotFound(_) => StatusCode::NOT_FOUND,
    };
    (status, Json(json!({ "status": "error", "error": err.to_string() })))
}

/// `POST /habits`
pub async fn create_habit(
    State(state): State<AppState>,
    Json(req): Json<CreateHabitRequest>,
) -> ApiResponse {
    let daily_goal = match req.daily_goal {
        Some(g) if (1..=i64::from(u32::MAX)).contains(&g) => g as u32,
        Some(_) => {
            return failure(&HabitError::InvalidInput(
                "daily goal must be positive".into(),
            ))
        }
        None => return failure(&HabitError::InvalidInput("daily goal is required".into())),
    };

    match state.store.create(req.name.as_deref().unwrap_or(""), daily_goal) {
        Ok(habit) => success(StatusCode::CREATED, habit),
        Err(e) => failure(&e),
    }
}

/// `PUT /habits/{id}` — mark the habit completed for the current date.
pub async fn complete_habit(State(state): State<AppState>, Path(id): Path<u64>) -> ApiResponse {
    let today = Local::now().date_naive();
    match state.store.mark_completed_today(id, today) {
        Ok(habit) => success(StatusCode::OK, habit),
        Err(e) => failure(&e),
    }
}

/// `GET /habits`
pub async fn list_habits(State(state): State<AppState>) -> ApiResponse {
    success(StatusCode::OK, state.store.list())
}

/// `GET /habits/report` — weekly adherence for the trailing 7 days.
pub async fn report(State(state): State<AppState>) -> ApiResponse {
    let entries = weekly_report(&state.store.list(), Local::now().date_naive());
    success(StatusCode::OK, entries)
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> ApiResponse {
    success(
        StatusCode::OK,
        json!({
            "status": "healthy",
            "habits": state.store.list().len(),
            "subscribers": state.registry.count(),
        }),
    )
}
