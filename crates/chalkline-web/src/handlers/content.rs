//! Content query endpoints: plays, movies, search, resources, curriculum.

use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use chalkline_common::error::ApiError;
use chalkline_content::{Movie, Play};

use crate::handlers::to_json;
use crate::state::SharedState;

// === API Types ===

#[derive(Debug, Serialize)]
pub struct CatalogDump {
    pub plays: Vec<Play>,
    pub movies: Vec<Movie>,
}

#[derive(Debug, Deserialize, Default)]
pub struct SearchParams {
    pub query: Option<String>,
}

// === Handlers ===

/// GET /api/content/ - Full dump of both collections
pub async fn content_index(State(state): State<SharedState>) -> Result<impl IntoResponse, ApiError> {
    to_json(CatalogDump {
        plays: state.catalog.plays().to_vec(),
        movies: state.catalog.movies().to_vec(),
    })
}

/// GET /api/content/plays - All plays, original order
pub async fn list_plays(State(state): State<SharedState>) -> Result<impl IntoResponse, ApiError> {
    to_json(state.catalog.plays())
}

/// GET /api/content/plays/:id - Single play or 404
pub async fn play_detail(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    match state.catalog.play_by_id(&id) {
        Some(play) => to_json(play),
        None => Err(ApiError::NotFound(format!("No play with id {}", id))),
    }
}

/// GET /api/content/movies - All movies, original order
pub async fn list_movies(State(state): State<SharedState>) -> Result<impl IntoResponse, ApiError> {
    to_json(state.catalog.movies())
}

/// GET /api/content/movies/:id - Single movie or 404
pub async fn movie_detail(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    match state.catalog.movie_by_id(&id) {
        Some(movie) => to_json(movie),
        None => Err(ApiError::NotFound(format!("No movie with id {}", id))),
    }
}

/// GET /api/content/:id - Item from either collection or 404
pub async fn any_detail(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    match state.catalog.any_by_id(&id) {
        Some(item) => to_json(item),
        None => Err(ApiError::NotFound(format!("No content with id {}", id))),
    }
}

/// GET /api/content/search?query= - Substring search; 400 on missing query
pub async fn search(
    State(state): State<SharedState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, ApiError> {
    let query = params
        .query
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ApiError::BadRequest("query parameter is required".to_string()))?;

    to_json(state.catalog.search(query))
}

/// GET /api/content/resources - Projected resource fields for all items
pub async fn resources_index(
    State(state): State<SharedState>,
) -> Result<impl IntoResponse, ApiError> {
    to_json(state.catalog.resources())
}

/// GET /api/content/:id/curriculum - Curriculum object or 404
pub async fn item_curriculum(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    match state.catalog.curriculum_for(&id) {
        Some(curriculum) => to_json(curriculum),
        None => Err(ApiError::NotFound(format!("No content with id {}", id))),
    }
}

/// GET /api/content/curriculum/:year - Items placed at the given year level
pub async fn curriculum_year(
    State(state): State<SharedState>,
    Path(year): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    to_json(state.catalog.filter_by_curriculum_year(&year))
}
