//! chalkline-common — shared error types for the Chalkline workspace.

pub mod error;

pub use error::{ApiError, ChalklineError, Result};
