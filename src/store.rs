//! Key-value persistence port for durable review progress.
//!
//! Models the browser localStorage contract the scheduler was designed
//! against: string keys, string values, survives restarts. The session
//! cycler deliberately never touches this layer.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

pub trait KeyValueStore {
  fn get(&self, key: &str) -> Option<String>;
  fn set(&mut self, key: &str, value: String);
}

/// Lets a store outlive a session while the session holds it mutably.
impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
  fn get(&self, key: &str) -> Option<String> {
    (**self).get(key)
  }

  fn set(&mut self, key: &str, value: String) {
    (**self).set(key, value)
  }
}

/// In-memory store for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
  entries: HashMap<String, String>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }
}

impl KeyValueStore for MemoryStore {
  fn get(&self, key: &str) -> Option<String> {
    self.entries.get(key).cloned()
  }

  fn set(&mut self, key: &str, value: String) {
    self.entries.insert(key.to_string(), value);
  }
}

/// Write-through store backed by a single JSON file of the key-value map.
///
/// A missing or unreadable file opens as an empty store; writes that fail
/// are logged and dropped rather than surfaced, matching the
/// never-fatal persistence policy.
#[derive(Debug)]
pub struct FileStore {
  path: PathBuf,
  entries: HashMap<String, String>,
}

impl FileStore {
  pub fn open(path: impl Into<PathBuf>) -> Self {
    let path = path.into();
    let entries = match fs::read_to_string(&path) {
      Ok(contents) => match serde_json::from_str(&contents) {
        Ok(map) => map,
        Err(e) => {
          tracing::warn!("Unreadable store file {}, starting empty: {}", path.display(), e);
          HashMap::new()
        }
      },
      Err(_) => HashMap::new(),
    };
    Self { path, entries }
  }

  fn flush(&self) {
    if let Some(parent) = self.path.parent() {
      let _ = fs::create_dir_all(parent);
    }
    match serde_json::to_string(&self.entries) {
      Ok(json) => {
        if let Err(e) = fs::write(&self.path, json) {
          tracing::warn!("Failed to write store file {}: {}", self.path.display(), e);
        }
      }
      Err(e) => tracing::warn!("Failed to serialize store contents: {}", e),
    }
  }
}

impl KeyValueStore for FileStore {
  fn get(&self, key: &str) -> Option<String> {
    self.entries.get(key).cloned()
  }

  fn set(&mut self, key: &str, value: String) {
    self.entries.insert(key.to_string(), value);
    self.flush();
  }
}
