//! HTTP handlers for all web routes.

pub mod classroom;
pub mod content;
pub mod system;

use axum::Json;
use serde::Serialize;
use serde_json::Value;

use chalkline_common::error::ApiError;

/// Serialize a borrowed view eagerly so handlers can return owned JSON.
pub(crate) fn to_json<T: Serialize>(value: T) -> Result<Json<Value>, ApiError> {
    let value = serde_json::to_value(value).map_err(anyhow::Error::from)?;
    Ok(Json(value))
}
