//! Classroom capture endpoints: behavior records and lesson plans.
//!
//! Both share the capture-and-list contract: a draft with any blank required
//! field is rejected with 400 and appends nothing; a valid draft appends
//! exactly one record to the end of its log.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chalkline_classroom::{BehaviorDraft, LessonDraft};
use chalkline_common::error::ApiError;

use crate::handlers::to_json;
use crate::state::SharedState;

/// GET /api/classroom/behaviors - Ordered behavior records
pub async fn behaviors(State(state): State<SharedState>) -> Result<impl IntoResponse, ApiError> {
    let log = state.behaviors.read().await;
    to_json(log.records())
}

/// POST /api/classroom/behaviors - Capture one behavior record
pub async fn create_behavior(
    State(state): State<SharedState>,
    Json(draft): Json<BehaviorDraft>,
) -> Result<impl IntoResponse, ApiError> {
    let mut log = state.behaviors.write().await;
    let record = log.append(draft)?;
    Ok((StatusCode::CREATED, to_json(record)?))
}

/// GET /api/classroom/lessons - Ordered lesson plans
pub async fn lessons(State(state): State<SharedState>) -> Result<impl IntoResponse, ApiError> {
    let planner = state.lessons.read().await;
    to_json(planner.lessons())
}

/// POST /api/classroom/lessons - Capture one lesson plan
pub async fn create_lesson(
    State(state): State<SharedState>,
    Json(draft): Json<LessonDraft>,
) -> Result<impl IntoResponse, ApiError> {
    let mut planner = state.lessons.write().await;
    let lesson = planner.append(draft)?;
    Ok((StatusCode::CREATED, to_json(lesson)?))
}
