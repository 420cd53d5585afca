//! Axum router — maps all URL paths to handlers.

use axum::{
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{
    classroom::{behaviors, create_behavior, create_lesson, lessons},
    content::{
        any_detail, content_index, curriculum_year, item_curriculum, list_movies, list_plays,
        movie_detail, play_detail, resources_index, search,
    },
    system::health,
};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        .route("/health", get(health))
        // axum 0.8 does not treat `/api/content/` as the nested router's `/`,
        // so the documented trailing-slash path needs its own route.
        .route("/api/content/", get(content_index))
        .nest("/api/content", content_routes())
        .nest("/api/classroom", classroom_routes())

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}

/// Read-only content API. Static segments take priority over `{id}`, so
/// `/search`, `/resources` and `/curriculum/{year}` never shadow item lookups.
fn content_routes() -> Router<SharedState> {
    Router::new()
        .route("/",                   get(content_index))
        .route("/plays",              get(list_plays))
        .route("/plays/{id}",         get(play_detail))
        .route("/movies",             get(list_movies))
        .route("/movies/{id}",        get(movie_detail))
        .route("/search",             get(search))
        .route("/resources",          get(resources_index))
        .route("/curriculum/{year}",  get(curriculum_year))
        .route("/{id}",               get(any_detail))
        .route("/{id}/curriculum",    get(item_curriculum))
}

fn classroom_routes() -> Router<SharedState> {
    Router::new()
        .route("/behaviors", get(behaviors).post(create_behavior))
        .route("/lessons",   get(lessons).post(create_lesson))
}
