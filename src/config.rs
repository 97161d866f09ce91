//! Application configuration constants and path resolution.

use serde::Deserialize;
use std::path::PathBuf;

// ==================== Persistence ====================

/// Key under which the whole review progress map is persisted.
pub const PROGRESS_KEY: &str = "magyul_progress";

/// Exercise type recorded when the caller does not specify one.
pub const DEFAULT_EXERCISE_TYPE: &str = "translation";

// ==================== Review scheduling ====================

/// Ease factor assigned to a fresh review record.
pub const INITIAL_EASE_FACTOR: f64 = 2.5;

/// Answer quality at or above this value counts as a pass.
pub const PASS_THRESHOLD: u8 = 3;

// ==================== Session cycling ====================

/// A wrongly answered item comes back after this many other items
/// have been answered.
pub const RETRY_COOLDOWN: u32 = 2;

/// Configuration file structure for config.toml
#[derive(Debug, Deserialize)]
struct AppConfig {
  data: Option<DataConfig>,
  progress: Option<ProgressConfig>,
}

#[derive(Debug, Deserialize)]
struct DataConfig {
  dir: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProgressConfig {
  path: Option<String>,
}

fn read_config() -> Option<AppConfig> {
  let contents = std::fs::read_to_string("config.toml").ok()?;
  toml::from_str(&contents).ok()
}

/// Load the bundled-content directory with priority: config.toml > .env > default
pub fn load_data_dir() -> PathBuf {
  let _ = dotenvy::dotenv();

  if let Some(config) = read_config() {
    if let Some(dir) = config.data.and_then(|d| d.dir) {
      tracing::info!("Using data directory from config.toml: {}", dir);
      return PathBuf::from(dir);
    }
  }

  if let Ok(dir) = std::env::var("MAGYUL_DATA_DIR") {
    tracing::info!("Using data directory from MAGYUL_DATA_DIR env: {}", dir);
    return PathBuf::from(dir);
  }

  let default = PathBuf::from("data");
  tracing::info!("Using default data directory: {}", default.display());
  default
}

/// Load the progress store path with priority: config.toml > .env > default
pub fn load_progress_path() -> PathBuf {
  let _ = dotenvy::dotenv();

  if let Some(config) = read_config() {
    if let Some(path) = config.progress.and_then(|p| p.path) {
      tracing::info!("Using progress store from config.toml: {}", path);
      return PathBuf::from(path);
    }
  }

  if let Ok(path) = std::env::var("MAGYUL_PROGRESS_PATH") {
    tracing::info!("Using progress store from MAGYUL_PROGRESS_PATH env: {}", path);
    return PathBuf::from(path);
  }

  let default = PathBuf::from("data/progress.json");
  tracing::info!("Using default progress store path: {}", default.display());
  default
}
