//! chalkline-content — read-only catalog of Australian educational content.
//!
//! Two fixed collections (plays and movies) loaded once at startup and never
//! mutated. All query operations are synchronous linear scans that preserve
//! the original insertion order.

pub mod catalog;
pub mod model;

pub use catalog::{Catalog, SearchResults};
pub use model::{ContentItemRef, Curriculum, Movie, Play, ResourceSummary};
