use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config;

/// Durable scheduling record, one per item and exercise type.
///
/// Serialized field names match the original browser progress blob
/// (`magyul_progress` in localStorage) so exported data stays readable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRecord {
  pub item_id: i64,
  pub exercise_type: String,
  pub ease_factor: f64,
  pub interval_days: i64,
  /// Consecutive-success counter; reset to 0 by any failing answer.
  pub repetitions: i64,
  pub next_review_date: DateTime<Utc>,
  pub last_reviewed: DateTime<Utc>,
  pub correct_answers: i64,
  pub total_answers: i64,
}

impl ReviewRecord {
  /// Fresh record: due immediately, ease at the starting value.
  pub fn new(item_id: i64, exercise_type: &str, now: DateTime<Utc>) -> Self {
    Self {
      item_id,
      exercise_type: exercise_type.to_string(),
      ease_factor: config::INITIAL_EASE_FACTOR,
      interval_days: 1,
      repetitions: 0,
      next_review_date: now,
      last_reviewed: now,
      correct_answers: 0,
      total_answers: 0,
    }
  }

  pub fn key(&self) -> String {
    progress_key(self.item_id, &self.exercise_type)
  }

  pub fn is_due(&self, now: DateTime<Utc>) -> bool {
    self.next_review_date <= now
  }
}

/// Map key for a record in the persisted progress blob.
pub fn progress_key(item_id: i64, exercise_type: &str) -> String {
  format!("{}_{}", item_id, exercise_type)
}
