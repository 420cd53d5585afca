//! chalkline-classroom — session-scoped capture state.
//!
//! Behavior records and lessons live only in memory: each log is an
//! append-only ordered container with a single mutator. Nothing is ever
//! updated, deleted, or reordered, and there is no capacity limit.

pub mod behavior;
pub mod lesson;

pub use behavior::{BehaviorDraft, BehaviorLog, BehaviorRecord};
pub use lesson::{Lesson, LessonDraft, LessonPlanner};

use chalkline_common::{ChalklineError, Result};

/// Require a non-blank value for `field`. Trims before checking, so
/// whitespace-only input is rejected the same as an empty string.
pub(crate) fn require(field: &'static str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ChalklineError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

/// Normalize an optional field: absent or blank becomes `None`.
pub(crate) fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
