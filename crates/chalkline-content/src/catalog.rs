//! Immutable catalog and its query operations.
//!
//! Lookups are first-match linear scans. Cross-collection operations merge
//! plays first, then movies; id uniqueness across the two collections is
//! assumed, not enforced.

use std::path::Path;

use serde::{Deserialize, Serialize};

use chalkline_common::{ChalklineError, Result};

use crate::model::{ContentItemRef, Curriculum, Movie, Play, ResourceSummary};

/// Seed dataset shipped with the binary.
const BUILTIN_DATASET: &str = include_str!("../data/catalog.json");

#[derive(Debug, Deserialize)]
struct Dataset {
    plays: Vec<Play>,
    movies: Vec<Movie>,
}

/// Per-collection search hits, original order preserved.
#[derive(Debug, Serialize)]
pub struct SearchResults {
    pub plays: Vec<Play>,
    pub movies: Vec<Movie>,
}

/// Read-only repository over the two content collections.
pub struct Catalog {
    plays: Vec<Play>,
    movies: Vec<Movie>,
}

impl Catalog {
    /// Build the catalog from the embedded seed dataset.
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_DATASET)
    }

    /// Build the catalog from an operator-supplied JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ChalklineError::Dataset(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&content)
    }

    fn from_json_str(raw: &str) -> Result<Self> {
        let dataset: Dataset = serde_json::from_str(raw)?;
        Ok(Self {
            plays: dataset.plays,
            movies: dataset.movies,
        })
    }

    pub fn plays(&self) -> &[Play] {
        &self.plays
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn play_by_id(&self, id: &str) -> Option<&Play> {
        self.plays.iter().find(|p| p.id == id)
    }

    pub fn movie_by_id(&self, id: &str) -> Option<&Movie> {
        self.movies.iter().find(|m| m.id == id)
    }

    /// Look up an id across both collections, plays first. First match wins.
    pub fn any_by_id(&self, id: &str) -> Option<ContentItemRef<'_>> {
        self.items().find(|item| item.id() == id)
    }

    /// Case-insensitive substring match against title, creator, and themes.
    /// No ranking; each collection keeps its original order.
    pub fn search(&self, query: &str) -> SearchResults {
        let needle = query.to_lowercase();
        SearchResults {
            plays: self
                .plays
                .iter()
                .filter(|&p| item_matches(ContentItemRef::Play(p), &needle))
                .cloned()
                .collect(),
            movies: self
                .movies
                .iter()
                .filter(|&m| item_matches(ContentItemRef::Movie(m), &needle))
                .cloned()
                .collect(),
        }
    }

    /// Project every item down to its resource fields.
    pub fn resources(&self) -> Vec<ResourceSummary<'_>> {
        self.plays
            .iter()
            .map(|p| ResourceSummary {
                id: &p.id,
                title: &p.title,
                educational_resources: &p.educational_resources,
                curriculum_outcomes: &p.curriculum_outcomes,
            })
            .chain(self.movies.iter().map(|m| ResourceSummary {
                id: &m.id,
                title: &m.title,
                educational_resources: &m.educational_resources,
                curriculum_outcomes: &m.curriculum_outcomes,
            }))
            .collect()
    }

    pub fn curriculum_for(&self, id: &str) -> Option<&Curriculum> {
        self.any_by_id(id).map(|item| item.curriculum())
    }

    /// Items whose curriculum year set contains `year` exactly.
    pub fn filter_by_curriculum_year(&self, year: &str) -> Vec<ContentItemRef<'_>> {
        self.items()
            .filter(|item| item.curriculum().year.iter().any(|y| y == year))
            .collect()
    }

    fn items<'a>(&'a self) -> impl Iterator<Item = ContentItemRef<'a>> + 'a {
        self.plays
            .iter()
            .map(ContentItemRef::Play)
            .chain(self.movies.iter().map(ContentItemRef::Movie))
    }
}

fn item_matches(item: ContentItemRef<'_>, needle: &str) -> bool {
    item.title().to_lowercase().contains(needle)
        || item.creator().to_lowercase().contains(needle)
        || item
            .themes()
            .iter()
            .any(|t| t.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    #[test]
    fn test_builtin_dataset_loads() {
        let cat = catalog();
        assert!(!cat.plays().is_empty());
        assert!(!cat.movies().is_empty());
    }

    #[test]
    fn test_collections_are_stable_across_calls() {
        let cat = catalog();
        let first: Vec<&str> = cat.plays().iter().map(|p| p.id.as_str()).collect();
        let second: Vec<&str> = cat.plays().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_play_by_id_known() {
        let cat = catalog();
        let play = cat.play_by_id("p1").unwrap();
        assert_eq!(play.title, "The Removalists");
        assert_eq!(play.playwright, "David Williamson");
    }

    #[test]
    fn test_play_by_id_unknown() {
        assert!(catalog().play_by_id("nope").is_none());
    }

    #[test]
    fn test_any_by_id_resolves_both_collections() {
        let cat = catalog();
        assert_eq!(cat.any_by_id("p2").unwrap().title(), "Summer of the Seventeenth Doll");
        assert_eq!(cat.any_by_id("m1").unwrap().creator(), "Peter Weir");
        assert!(cat.any_by_id("x9").is_none());
    }

    #[test]
    fn test_search_matches_title_case_insensitive() {
        let results = catalog().search("removalists");
        assert_eq!(results.plays.len(), 1);
        assert_eq!(results.plays[0].id, "p1");
    }

    #[test]
    fn test_search_matches_creator() {
        let results = catalog().search("WEIR");
        assert!(results.plays.is_empty());
        assert_eq!(results.movies.len(), 1);
        assert_eq!(results.movies[0].id, "m1");
    }

    #[test]
    fn test_search_matches_theme_substring() {
        // "mateship" appears as a theme on one play and one movie
        let results = catalog().search("mateship");
        assert_eq!(results.plays.len(), 1);
        assert_eq!(results.movies.len(), 1);
    }

    #[test]
    fn test_search_no_match_returns_empty_arrays() {
        let results = catalog().search("identity");
        assert!(results.plays.is_empty());
        assert!(results.movies.is_empty());
    }

    #[test]
    fn test_resources_projection_has_exactly_four_fields() {
        let cat = catalog();
        let resources = cat.resources();
        assert_eq!(resources.len(), cat.plays().len() + cat.movies().len());

        let value = serde_json::to_value(&resources[0]).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        assert!(obj.contains_key("id"));
        assert!(obj.contains_key("title"));
        assert!(obj.contains_key("educational_resources"));
        assert!(obj.contains_key("curriculum_outcomes"));
        assert!(!obj.contains_key("themes"));
        assert!(!obj.contains_key("playwright"));
    }

    #[test]
    fn test_curriculum_for_known_and_unknown() {
        let cat = catalog();
        let curriculum = cat.curriculum_for("p1").unwrap();
        assert!(curriculum.year.contains(&"10".to_string()));
        assert!(cat.curriculum_for("x9").is_none());
    }

    #[test]
    fn test_filter_by_curriculum_year_exact_membership() {
        let cat = catalog();
        let year_10 = cat.filter_by_curriculum_year("10");
        assert!(year_10.iter().any(|i| i.id() == "p1"));

        // "7" is not in any year set; "1" must not match "10"/"11" by substring
        assert!(cat.filter_by_curriculum_year("7").is_empty());
        assert!(cat.filter_by_curriculum_year("1").is_empty());
    }

    #[test]
    fn test_filter_by_curriculum_year_plays_before_movies() {
        let cat = catalog();
        let hits = cat.filter_by_curriculum_year("9");
        let first_movie = hits.iter().position(|i| i.id().starts_with('m'));
        let last_play = hits.iter().rposition(|i| i.id().starts_with('p'));
        if let (Some(fm), Some(lp)) = (first_movie, last_play) {
            assert!(lp < fm);
        }
    }
}
