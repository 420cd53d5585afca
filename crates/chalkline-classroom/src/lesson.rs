//! Lesson planning: same capture-and-list shape as behavior tracking.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use chalkline_common::Result;

use crate::{optional, require};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LessonDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Lesson {
    pub id: Uuid,
    pub title: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

/// Append-only ordered list of planned lessons.
#[derive(Debug, Default)]
pub struct LessonPlanner {
    lessons: Vec<Lesson>,
}

impl LessonPlanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, draft: LessonDraft) -> Result<&Lesson> {
        let lesson = Lesson {
            id: Uuid::new_v4(),
            title: require("title", &draft.title)?,
            date: require("date", &draft.date)?,
            description: optional(draft.description),
            recorded_at: Utc::now(),
        };
        let idx = self.lessons.len();
        self.lessons.push(lesson);
        Ok(&self.lessons[idx])
    }

    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> LessonDraft {
        LessonDraft {
            title: "Stagecraft: blocking the confrontation scene".to_string(),
            date: "2026-03-14".to_string(),
            description: Some("Small groups, Act 2 of The Removalists".to_string()),
        }
    }

    #[test]
    fn test_valid_lesson_appends() {
        let mut planner = LessonPlanner::new();
        let lesson = planner.append(valid_draft()).unwrap();
        assert_eq!(lesson.date, "2026-03-14");
        assert_eq!(planner.len(), 1);
    }

    #[test]
    fn test_missing_title_rejected() {
        let mut planner = LessonPlanner::new();
        let draft = LessonDraft {
            title: String::new(),
            ..valid_draft()
        };
        assert!(planner.append(draft).is_err());
        assert!(planner.is_empty());
    }

    #[test]
    fn test_description_is_optional() {
        let mut planner = LessonPlanner::new();
        let draft = LessonDraft {
            description: None,
            ..valid_draft()
        };
        let lesson = planner.append(draft).unwrap();
        assert!(lesson.description.is_none());
    }

    #[test]
    fn test_order_preserved_across_appends() {
        let mut planner = LessonPlanner::new();
        for title in ["Week 1", "Week 2", "Week 3"] {
            planner
                .append(LessonDraft {
                    title: title.to_string(),
                    ..valid_draft()
                })
                .unwrap();
        }
        let titles: Vec<&str> = planner.lessons().iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, ["Week 1", "Week 2", "Week 3"]);
    }
}
