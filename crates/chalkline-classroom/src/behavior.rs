//! Behavior tracking: capture drafts, validate, append.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use chalkline_common::Result;

use crate::{optional, require};

/// Incoming capture payload, as submitted by the client.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BehaviorDraft {
    #[serde(default)]
    pub student_name: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub reward_points: Option<String>,
}

/// An accepted behavior record. Immutable once created; lives only for the
/// session.
#[derive(Debug, Clone, Serialize)]
pub struct BehaviorRecord {
    pub id: Uuid,
    pub student_name: String,
    pub date: String,
    pub note: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reward_points: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

/// Append-only ordered log of behavior records.
#[derive(Debug, Default)]
pub struct BehaviorLog {
    records: Vec<BehaviorRecord>,
}

impl BehaviorLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a draft and append it. A blank required field rejects the
    /// whole draft and leaves the log untouched.
    pub fn append(&mut self, draft: BehaviorDraft) -> Result<&BehaviorRecord> {
        let record = BehaviorRecord {
            id: Uuid::new_v4(),
            student_name: require("student_name", &draft.student_name)?,
            date: require("date", &draft.date)?,
            note: require("note", &draft.note)?,
            reward_points: optional(draft.reward_points),
            recorded_at: Utc::now(),
        };
        let idx = self.records.len();
        self.records.push(record);
        Ok(&self.records[idx])
    }

    pub fn records(&self) -> &[BehaviorRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
