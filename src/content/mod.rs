//! Bundled vocabulary, verb, and number data.
//!
//! The drill engine never looks inside these records beyond the id;
//! everything else is material for building exercise prompts. Data ships
//! as JSON: chunked `vocabulary/*.json` files, `verbs.json`,
//! `numbers.json`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::domain::Category;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabularyWord {
  pub id: i64,
  pub word_hu: String,
  pub word_de: String,
  #[serde(default)]
  pub category: Option<String>,
  #[serde(default)]
  pub example_sentence_hu: Option<String>,
  #[serde(default)]
  pub example_sentence_de: Option<String>,
}

/// Conjugation tables per tense, keyed by person (en/te/o/mi/ti/ok).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Conjugations {
  #[serde(default)]
  pub present: HashMap<String, String>,
  #[serde(default)]
  pub past: HashMap<String, String>,
  #[serde(default)]
  pub future: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verb {
  pub id: i64,
  pub infinitive: String,
  pub meaning_de: String,
  #[serde(default)]
  pub category: Option<String>,
  #[serde(default)]
  pub conjugations: Conjugations,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumberWord {
  pub id: i64,
  pub number: i64,
  pub word_hu: String,
  #[serde(default)]
  pub word_en: Option<String>,
  pub word_de: String,
}

#[derive(Debug, Clone, Default)]
pub struct ContentData {
  pub vocabulary: Vec<VocabularyWord>,
  pub verbs: Vec<Verb>,
  pub numbers: Vec<NumberWord>,
}

impl ContentData {
  /// Item id pool for a category, in data order.
  pub fn pool_ids(&self, category: Category) -> Vec<i64> {
    match category {
      Category::Vocabulary => self.vocabulary.iter().map(|w| w.id).collect(),
      Category::Verb => self.verbs.iter().map(|v| v.id).collect(),
    }
  }

  pub fn vocabulary_by_id(&self, id: i64) -> Option<&VocabularyWord> {
    self.vocabulary.iter().find(|w| w.id == id)
  }

  pub fn verb_by_id(&self, id: i64) -> Option<&Verb> {
    self.verbs.iter().find(|v| v.id == id)
  }
}

/// Content loading errors.
#[derive(Debug)]
pub enum ContentLoadError {
  DirNotFound(String),
  Io(String, String),
  Parse(String, String),
  Empty(String),
}

impl std::fmt::Display for ContentLoadError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ContentLoadError::DirNotFound(path) => write!(f, "Data directory not found: {}", path),
      ContentLoadError::Io(path, err) => write!(f, "IO error reading {}: {}", path, err),
      ContentLoadError::Parse(path, err) => write!(f, "Parse error in {}: {}", path, err),
      ContentLoadError::Empty(path) => write!(f, "No usable data in {}", path),
    }
  }
}

impl std::error::Error for ContentLoadError {}

/// Load all bundled data from a directory.
pub fn load_content(data_dir: &Path) -> Result<ContentData, ContentLoadError> {
  let vocabulary = load_vocabulary(&data_dir.join("vocabulary"))?;
  let verbs: Vec<Verb> = load_json_file(&data_dir.join("verbs.json"))?;
  let numbers: Vec<NumberWord> = load_json_file(&data_dir.join("numbers.json"))?;

  tracing::debug!(
    words = vocabulary.len(),
    verbs = verbs.len(),
    numbers = numbers.len(),
    "content loaded"
  );

  Ok(ContentData { vocabulary, verbs, numbers })
}

/// Vocabulary ships split across numbered chunk files; load them in
/// numeric order so the pool order is stable across platforms.
fn load_vocabulary(dir: &Path) -> Result<Vec<VocabularyWord>, ContentLoadError> {
  let entries =
    fs::read_dir(dir).map_err(|_| ContentLoadError::DirNotFound(dir.display().to_string()))?;

  let mut chunk_paths: Vec<_> = entries
    .filter_map(Result::ok)
    .map(|e| e.path())
    .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
    .collect();
  chunk_paths.sort_by_key(|p| {
    p.file_stem()
      .and_then(|s| s.to_str())
      .and_then(|s| s.parse::<u32>().ok())
      .unwrap_or(u32::MAX)
  });

  let mut words = Vec::new();
  for path in &chunk_paths {
    let chunk: Vec<VocabularyWord> = load_json_file(path)?;
    words.extend(chunk);
  }

  if words.is_empty() {
    return Err(ContentLoadError::Empty(dir.display().to_string()));
  }
  Ok(words)
}

fn load_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, ContentLoadError> {
  let contents = fs::read_to_string(path)
    .map_err(|e| ContentLoadError::Io(path.display().to_string(), e.to_string()))?;
  if contents.trim().is_empty() {
    return Err(ContentLoadError::Empty(path.display().to_string()));
  }
  serde_json::from_str(&contents)
    .map_err(|e| ContentLoadError::Parse(path.display().to_string(), e.to_string()))
}
