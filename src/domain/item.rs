use serde::{Deserialize, Serialize};

/// Learning category an item belongs to. Each category cycles
/// independently within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
  Vocabulary,
  Verb,
}

impl Category {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Vocabulary => "vocabulary",
      Self::Verb => "verb",
    }
  }

  pub fn from_str(s: &str) -> Option<Self> {
    match s {
      "vocabulary" => Some(Self::Vocabulary),
      "verb" => Some(Self::Verb),
      _ => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_category_as_str() {
    assert_eq!(Category::Vocabulary.as_str(), "vocabulary");
    assert_eq!(Category::Verb.as_str(), "verb");
  }

  #[test]
  fn test_category_from_str() {
    assert_eq!(Category::from_str("vocabulary"), Some(Category::Vocabulary));
    assert_eq!(Category::from_str("verb"), Some(Category::Verb));
    assert_eq!(Category::from_str("numbers"), None);
    assert_eq!(Category::from_str(""), None);
  }

  #[test]
  fn test_category_serde() {
    assert_eq!(serde_json::to_string(&Category::Verb).unwrap(), "\"verb\"");
    let parsed: Category = serde_json::from_str("\"vocabulary\"").unwrap();
    assert_eq!(parsed, Category::Vocabulary);
  }
}
