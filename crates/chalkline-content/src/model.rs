//! Data model for catalog items.

use serde::{Deserialize, Serialize};

/// Curriculum placement for a catalog item.
/// `year` holds exact year-level strings ("9", "10", ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Curriculum {
    pub year: Vec<String>,
    #[serde(default)]
    pub subjects: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Play {
    pub id: String,
    pub title: String,
    pub playwright: String,
    pub themes: Vec<String>,
    pub educational_resources: Vec<String>,
    pub curriculum_outcomes: Vec<String>,
    pub curriculum: Curriculum,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub director: String,
    pub themes: Vec<String>,
    pub educational_resources: Vec<String>,
    pub curriculum_outcomes: Vec<String>,
    pub curriculum: Curriculum,
}

/// A borrowed view over either collection, used for cross-collection lookups.
/// Serializes as the underlying item, keeping the playwright/director field
/// names intact.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(untagged)]
pub enum ContentItemRef<'a> {
    Play(&'a Play),
    Movie(&'a Movie),
}

impl<'a> ContentItemRef<'a> {
    pub fn id(self) -> &'a str {
        match self {
            ContentItemRef::Play(p) => &p.id,
            ContentItemRef::Movie(m) => &m.id,
        }
    }

    pub fn title(self) -> &'a str {
        match self {
            ContentItemRef::Play(p) => &p.title,
            ContentItemRef::Movie(m) => &m.title,
        }
    }

    /// The creator-role field: playwright for plays, director for movies.
    pub fn creator(self) -> &'a str {
        match self {
            ContentItemRef::Play(p) => &p.playwright,
            ContentItemRef::Movie(m) => &m.director,
        }
    }

    pub fn themes(self) -> &'a [String] {
        match self {
            ContentItemRef::Play(p) => &p.themes,
            ContentItemRef::Movie(m) => &m.themes,
        }
    }

    pub fn curriculum(self) -> &'a Curriculum {
        match self {
            ContentItemRef::Play(p) => &p.curriculum,
            ContentItemRef::Movie(m) => &m.curriculum,
        }
    }
}

/// Projection served by the resources listing. Never carries themes or the
/// creator-role field.
#[derive(Debug, Serialize)]
pub struct ResourceSummary<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub educational_resources: &'a [String],
    pub curriculum_outcomes: &'a [String],
}
