//! chalkline-web — HTTP surface for Chalkline.
//! Serves:
//!   - Read-only content queries (plays, movies, search, resources, curriculum)
//!   - Behavior tracking capture and listing
//!   - Lesson planning capture and listing

pub mod config;
pub mod handlers;
pub mod router;
pub mod state;
