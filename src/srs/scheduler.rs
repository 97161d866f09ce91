//! Durable review scheduling over the key-value persistence port.
//!
//! The store exclusively owns the progress map; the scheduler reads and
//! writes through it and keeps no private copy. Corrupt persisted state
//! is treated as absent and re-synthesized, never surfaced as an error.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;

use crate::config;
use crate::domain::{ReviewRecord, progress_key};
use crate::srs::sm2;
use crate::store::KeyValueStore;

pub struct ReviewScheduler<S: KeyValueStore> {
  store: S,
}

impl<S: KeyValueStore> ReviewScheduler<S> {
  pub fn new(store: S) -> Self {
    Self { store }
  }

  /// The full persisted progress map.
  ///
  /// An unreadable blob reads as empty; an unreadable individual entry is
  /// dropped and will be re-synthesized on its next answer.
  pub fn progress(&self) -> HashMap<String, ReviewRecord> {
    let Some(raw) = self.store.get(config::PROGRESS_KEY) else {
      return HashMap::new();
    };

    let entries: HashMap<String, serde_json::Value> = match serde_json::from_str(&raw) {
      Ok(map) => map,
      Err(e) => {
        tracing::warn!("Unreadable progress blob, starting fresh: {}", e);
        return HashMap::new();
      }
    };

    let mut progress = HashMap::new();
    for (key, value) in entries {
      match serde_json::from_value::<ReviewRecord>(value) {
        Ok(record) => {
          progress.insert(key, record);
        }
        Err(e) => tracing::warn!("Dropping unreadable progress entry {}: {}", key, e),
      }
    }
    progress
  }

  fn save(&mut self, progress: &HashMap<String, ReviewRecord>) {
    match serde_json::to_string(progress) {
      Ok(json) => self.store.set(config::PROGRESS_KEY, json),
      Err(e) => tracing::warn!("Failed to serialize progress map: {}", e),
    }
  }

  pub fn record_for(&self, item_id: i64, exercise_type: &str) -> Option<ReviewRecord> {
    self.progress().remove(&progress_key(item_id, exercise_type))
  }

  pub fn submit_answer(&mut self, item_id: i64, exercise_type: &str, quality: u8) -> ReviewRecord {
    self.submit_answer_at(item_id, exercise_type, quality, Utc::now())
  }

  /// Apply one graded answer and persist the updated record.
  ///
  /// Clock-injected so interval arithmetic is testable; `submit_answer`
  /// is the production entry point.
  pub fn submit_answer_at(
    &mut self,
    item_id: i64,
    exercise_type: &str,
    quality: u8,
    now: DateTime<Utc>,
  ) -> ReviewRecord {
    let mut progress = self.progress();
    let key = progress_key(item_id, exercise_type);
    let mut record = progress
      .remove(&key)
      .unwrap_or_else(|| ReviewRecord::new(item_id, exercise_type, now));

    record.total_answers += 1;
    if quality >= config::PASS_THRESHOLD {
      record.correct_answers += 1;
    }

    let result =
      sm2::calculate_review(quality, record.ease_factor, record.interval_days, record.repetitions);
    record.ease_factor = result.ease_factor;
    record.interval_days = result.interval_days;
    record.repetitions = result.repetitions;
    record.next_review_date = now + Duration::days(record.interval_days);
    record.last_reviewed = now;

    tracing::debug!(
      item_id,
      exercise_type,
      quality,
      interval_days = record.interval_days,
      "review scheduled"
    );

    progress.insert(key, record.clone());
    self.save(&progress);
    record
  }

  /// All records due for review at `now`, soonest first. Read-only.
  pub fn due_records(&self, now: DateTime<Utc>) -> Vec<ReviewRecord> {
    let mut due: Vec<ReviewRecord> =
      self.progress().into_values().filter(|r| r.is_due(now)).collect();
    due.sort_by_key(|r| r.next_review_date);
    due
  }
}
