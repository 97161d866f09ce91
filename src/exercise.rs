//! Exercise descriptor generation and literal answer checking.
//!
//! Prompts are plain template strings; correctness is a trimmed,
//! case-insensitive string comparison and nothing more.

use rand::Rng;

use crate::content::{Verb, VocabularyWord};
use crate::domain::Category;

/// Person keys as they appear in the conjugation tables.
pub const PERSONS: [&str; 6] = ["en", "te", "o", "mi", "ti", "ok"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VocabularyExerciseKind {
  HuToDe,
  DeToHu,
  /// Fill the drilled word back into its example sentence.
  ExampleCompletion,
}

impl VocabularyExerciseKind {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::HuToDe => "hu_to_de",
      Self::DeToHu => "de_to_hu",
      Self::ExampleCompletion => "example_completion",
    }
  }

  pub fn from_str(s: &str) -> Option<Self> {
    match s {
      "hu_to_de" => Some(Self::HuToDe),
      "de_to_hu" => Some(Self::DeToHu),
      "example_completion" => Some(Self::ExampleCompletion),
      _ => None,
    }
  }
}

/// One concrete exercise, ready for the presentation layer.
#[derive(Debug, Clone)]
pub struct Exercise {
  /// `"{item_id}_{kind}"` for vocabulary, `"{item_id}_{tense}_{person}"`
  /// for conjugation.
  pub exercise_id: String,
  pub item_id: i64,
  pub category: Category,
  pub instruction: String,
  pub correct_answer: String,
}

fn person_label(person: &str) -> &'static str {
  match person {
    "en" => "ich (én)",
    "te" => "du (te)",
    "o" => "er/sie/es (ő)",
    "mi" => "wir (mi)",
    "ti" => "ihr (ti)",
    "ok" => "sie (ők)",
    _ => "?",
  }
}

fn tense_label(tense: &str) -> &'static str {
  match tense {
    "present" => "Present",
    "past" => "Past",
    "future" => "Future",
    _ => "?",
  }
}

/// Build a vocabulary exercise of a random kind; example completion is
/// only offered when the word carries an example sentence.
pub fn vocabulary_exercise(word: &VocabularyWord) -> Exercise {
  let mut kinds = vec![VocabularyExerciseKind::HuToDe, VocabularyExerciseKind::DeToHu];
  if word.example_sentence_hu.is_some() {
    kinds.push(VocabularyExerciseKind::ExampleCompletion);
  }
  let kind = kinds[rand::rng().random_range(0..kinds.len())];
  vocabulary_exercise_of_kind(word, kind)
}

pub fn vocabulary_exercise_of_kind(word: &VocabularyWord, kind: VocabularyExerciseKind) -> Exercise {
  let (instruction, correct_answer) = match kind {
    VocabularyExerciseKind::HuToDe => {
      (format!("Translate to German: {}", word.word_hu), word.word_de.clone())
    }
    VocabularyExerciseKind::DeToHu => {
      (format!("Translate to Hungarian: {}", word.word_de), word.word_hu.clone())
    }
    VocabularyExerciseKind::ExampleCompletion => {
      let example = word
        .example_sentence_hu
        .as_deref()
        .unwrap_or(&word.word_hu)
        .replace(&word.word_hu, "___");
      (format!("Complete the sentence: {}", example), word.word_hu.clone())
    }
  };

  Exercise {
    exercise_id: format!("{}_{}", word.id, kind.as_str()),
    item_id: word.id,
    category: Category::Vocabulary,
    instruction,
    correct_answer,
  }
}

/// Build a conjugation exercise from a random tense and person the verb
/// actually has a form for. `None` when the verb carries no conjugations.
pub fn conjugation_exercise(verb: &Verb) -> Option<Exercise> {
  let forms = conjugated_forms(verb);
  if forms.is_empty() {
    return None;
  }
  let (tense, person, form) = forms[rand::rng().random_range(0..forms.len())];

  Some(Exercise {
    exercise_id: format!("{}_{}_{}", verb.id, tense, person),
    item_id: verb.id,
    category: Category::Verb,
    instruction: format!(
      "Conjugate \"{}\" ({}) for {} in {}",
      verb.infinitive,
      verb.meaning_de,
      person_label(person),
      tense_label(tense)
    ),
    correct_answer: form.to_string(),
  })
}

/// Walk the fixed tense/person grid so sparse or malformed tables can
/// never produce an unanswerable exercise.
fn conjugated_forms(verb: &Verb) -> Vec<(&'static str, &'static str, &str)> {
  let tables = [
    ("present", &verb.conjugations.present),
    ("past", &verb.conjugations.past),
    ("future", &verb.conjugations.future),
  ];
  let mut forms = Vec::new();
  for (tense, table) in tables {
    for person in PERSONS {
      if let Some(form) = table.get(person) {
        forms.push((tense, person, form.as_str()));
      }
    }
  }
  forms
}

/// Literal comparison only: trimmed, case-insensitive.
pub fn check_answer(user_answer: &str, correct_answer: &str) -> bool {
  user_answer.trim().to_lowercase() == correct_answer.trim().to_lowercase()
}
