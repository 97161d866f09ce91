//! Practice facade: the contract the presentation layer drives.
//!
//! Owns the bundled content, one session cycler per category, and the
//! durable review scheduler. Construct one per learning session; cycling
//! state dies with it, review progress lives on in the injected store.
//! Session cycling and review scheduling stay independent: callers may
//! feed either, both, or neither.

use chrono::{DateTime, Utc};

use crate::content::{ContentData, VocabularyWord};
use crate::domain::{Category, ReviewRecord};
use crate::exercise::{self, Exercise};
use crate::selector;
use crate::session::SessionCycler;
use crate::srs::ReviewScheduler;
use crate::store::KeyValueStore;

/// A due review joined with its vocabulary entry.
#[derive(Debug, Clone)]
pub struct DueItem {
  pub item: VocabularyWord,
  pub record: ReviewRecord,
}

/// Cumulative study statistics across all persisted progress.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
  pub total_words: usize,
  pub studied_words: usize,
  pub total_answers: i64,
  pub correct_answers: i64,
  /// Rounded percentage, 0 when nothing has been answered yet.
  pub accuracy: i64,
}

pub struct PracticeService<S: KeyValueStore> {
  content: ContentData,
  vocabulary_cycle: SessionCycler,
  verb_cycle: SessionCycler,
  scheduler: ReviewScheduler<S>,
}

impl<S: KeyValueStore> PracticeService<S> {
  pub fn new(content: ContentData, store: S) -> Self {
    Self {
      content,
      vocabulary_cycle: SessionCycler::new(),
      verb_cycle: SessionCycler::new(),
      scheduler: ReviewScheduler::new(store),
    }
  }

  pub fn content(&self) -> &ContentData {
    &self.content
  }

  fn cycler_mut(&mut self, category: Category) -> &mut SessionCycler {
    match category {
      Category::Vocabulary => &mut self.vocabulary_cycle,
      Category::Verb => &mut self.verb_cycle,
    }
  }

  /// Produce the next exercise for a category.
  ///
  /// `None` only when the category has no data, or a selected verb
  /// carries no conjugation forms.
  pub fn get_exercise(&mut self, category: Category) -> Option<Exercise> {
    let pool = self.content.pool_ids(category);
    let item_id = selector::next_item_id(self.cycler_mut(category), &pool)?;

    match category {
      Category::Vocabulary => {
        let word = self.content.vocabulary_by_id(item_id)?;
        Some(exercise::vocabulary_exercise(word))
      }
      Category::Verb => {
        let verb = self.content.verb_by_id(item_id)?;
        exercise::conjugation_exercise(verb)
      }
    }
  }

  /// Feed one answer event into the session cycle.
  pub fn record_result(&mut self, item_id: i64, is_correct: bool, category: Category) {
    self.cycler_mut(category).record_result(item_id, is_correct);
  }

  /// Feed one graded answer into long-term review scheduling.
  pub fn submit_review(&mut self, item_id: i64, exercise_type: &str, quality: u8) -> ReviewRecord {
    self.scheduler.submit_answer(item_id, exercise_type, quality)
  }

  pub fn submit_review_at(
    &mut self,
    item_id: i64,
    exercise_type: &str,
    quality: u8,
    now: DateTime<Utc>,
  ) -> ReviewRecord {
    self.scheduler.submit_answer_at(item_id, exercise_type, quality, now)
  }

  /// All reviews due at `now`, joined with their vocabulary entries.
  /// Records whose item is no longer in the data are skipped.
  pub fn due_items(&self, now: DateTime<Utc>) -> Vec<DueItem> {
    self
      .scheduler
      .due_records(now)
      .into_iter()
      .filter_map(|record| {
        self
          .content
          .vocabulary_by_id(record.item_id)
          .map(|item| DueItem { item: item.clone(), record })
      })
      .collect()
  }

  pub fn statistics(&self) -> Statistics {
    let progress = self.scheduler.progress();
    let total_answers: i64 = progress.values().map(|r| r.total_answers).sum();
    let correct_answers: i64 = progress.values().map(|r| r.correct_answers).sum();
    let accuracy = if total_answers > 0 {
      ((correct_answers as f64 / total_answers as f64) * 100.0).round() as i64
    } else {
      0
    };

    Statistics {
      total_words: self.content.vocabulary.len(),
      studied_words: progress.len(),
      total_answers,
      correct_answers,
      accuracy,
    }
  }

  /// Drop all session cycling state; review progress is untouched.
  pub fn reset_session(&mut self) {
    self.vocabulary_cycle.reset();
    self.verb_cycle.reset();
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::content::{Conjugations, Verb};
  use crate::store::MemoryStore;
  use std::collections::HashMap;

  fn content() -> ContentData {
    let vocabulary = (1..=4)
      .map(|id| VocabularyWord {
        id,
        word_hu: format!("szó{}", id),
        word_de: format!("Wort{}", id),
        category: None,
        example_sentence_hu: None,
        example_sentence_de: None,
      })
      .collect();

    let mut present = HashMap::new();
    present.insert("en".to_string(), "vagyok".to_string());
    let verbs = vec![Verb {
      id: 1,
      infinitive: "lenni".to_string(),
      meaning_de: "sein".to_string(),
      category: None,
      conjugations: Conjugations { present, ..Default::default() },
    }];

    ContentData { vocabulary, verbs, numbers: Vec::new() }
  }

  fn service() -> PracticeService<MemoryStore> {
    PracticeService::new(content(), MemoryStore::new())
  }

  #[test]
  fn test_get_exercise_draws_from_vocabulary_pool() {
    let mut service = service();
    let ex = service.get_exercise(Category::Vocabulary).unwrap();
    assert!((1..=4).contains(&ex.item_id));
    assert_eq!(ex.category, Category::Vocabulary);
  }

  #[test]
  fn test_get_exercise_empty_category_yields_none() {
    let mut service = PracticeService::new(ContentData::default(), MemoryStore::new());
    assert!(service.get_exercise(Category::Vocabulary).is_none());
  }

  #[test]
  fn test_wrong_answer_retries_after_two_others() {
    let mut service = service();

    service.record_result(1, false, Category::Vocabulary);
    service.record_result(2, true, Category::Vocabulary);
    service.record_result(3, true, Category::Vocabulary);

    // Item 1 is due again and takes priority over 4
    for _ in 0..10 {
      let ex = service.get_exercise(Category::Vocabulary).unwrap();
      assert_eq!(ex.item_id, 1);
    }
  }

  #[test]
  fn test_categories_cycle_independently() {
    let mut service = service();

    service.record_result(1, false, Category::Vocabulary);
    // The verb with the same id is unaffected
    let ex = service.get_exercise(Category::Verb).unwrap();
    assert_eq!(ex.item_id, 1);
    assert_eq!(ex.category, Category::Verb);
  }

  #[test]
  fn test_submit_review_persists_across_services() {
    let mut store = MemoryStore::new();
    let now = Utc::now();
    {
      let mut service = PracticeService::new(content(), &mut store);
      service.submit_review_at(1, "translation", 4, now);
    }

    // Same store, fresh session: the record is still there
    let service = PracticeService::new(content(), &mut store);
    let due = service.due_items(now + chrono::Duration::days(1));
    assert_eq!(due.len(), 1);
    assert_eq!(due[0].item.id, 1);
    assert_eq!(due[0].record.repetitions, 1);
  }

  #[test]
  fn test_due_items_skips_records_without_data() {
    let mut service = service();
    let now = Utc::now();
    service.submit_review_at(999, "translation", 4, now);

    assert!(service.due_items(now + chrono::Duration::days(2)).is_empty());
  }

  #[test]
  fn test_statistics_accumulate() {
    let mut service = service();
    let now = Utc::now();
    service.submit_review_at(1, "translation", 4, now);
    service.submit_review_at(1, "translation", 1, now);
    service.submit_review_at(2, "translation", 5, now);

    let stats = service.statistics();
    assert_eq!(stats.total_words, 4);
    assert_eq!(stats.studied_words, 2);
    assert_eq!(stats.total_answers, 3);
    assert_eq!(stats.correct_answers, 2);
    assert_eq!(stats.accuracy, 67);
  }

  #[test]
  fn test_reset_session_keeps_review_progress() {
    let mut service = service();
    let now = Utc::now();

    service.record_result(1, true, Category::Vocabulary);
    service.submit_review_at(1, "translation", 4, now);
    service.reset_session();

    // Cycling forgot everything, scheduling did not
    let ex = service.get_exercise(Category::Vocabulary).unwrap();
    assert!((1..=4).contains(&ex.item_id));
    assert_eq!(service.statistics().studied_words, 1);
  }
}
