//! Shared application state for the web server.

use std::sync::Arc;
use tokio::sync::RwLock;

use chalkline_classroom::{BehaviorLog, LessonPlanner};
use chalkline_content::Catalog;

/// Shared state injected into every Axum handler.
///
/// The catalog is immutable after startup. Each capture log sits behind its
/// own lock and is only ever written by its own capture endpoint.
pub struct AppState {
    pub catalog: Catalog,
    pub behaviors: RwLock<BehaviorLog>,
    pub lessons: RwLock<LessonPlanner>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            behaviors: RwLock::new(BehaviorLog::new()),
            lessons: RwLock::new(LessonPlanner::new()),
        }
    }
}

pub type SharedState = Arc<AppState>;
