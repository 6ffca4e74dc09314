use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app_dirs::AppDirs;

pub const DEFAULT_WORDS_PER_GAME: usize = 10;
pub const DEFAULT_SINGLE_LETTER_PROBABILITY: f64 = 0.3;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub progress_file: PathBuf,
    pub words_per_game: usize,
    /// Share of rounds that show a lone letter instead of a word.
    pub single_letter_probability: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            progress_file: AppDirs::progress_path(),
            words_per_game: DEFAULT_WORDS_PER_GAME,
            single_letter_probability: DEFAULT_SINGLE_LETTER_PROBABILITY,
        }
    }
}

impl Config {
    /// Builds a config from a parsed document. Each field is read on its own
    /// so a missing or invalid value only resets that field.
    pub fn from_value(value: &Value) -> Self {
        let defaults = Self::default();

        let progress_file = value
            .get("progress_file")
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.progress_file);

        let words_per_game = value
            .get("words_per_game")
            .and_then(Value::as_u64)
            .and_then(|n| usize::try_from(n).ok())
            .filter(|n| valid_words_per_game(*n))
            .unwrap_or(defaults.words_per_game);

        let single_letter_probability = value
            .get("single_letter_probability")
            .and_then(Value::as_f64)
            .filter(|p| valid_probability(*p))
            .unwrap_or(defaults.single_letter_probability);

        Self {
            progress_file,
            words_per_game,
            single_letter_probability,
        }
    }

    /// Reads the flat `key = value` file older releases kept in `config.toml`.
    /// Only plain strings and numbers are understood; other lines are skipped.
    pub fn from_legacy_toml(text: &str) -> Self {
        let mut fields = Map::new();
        for line in text.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, raw)) = line.split_once('=') else {
                tracing::warn!(line, "skipping legacy config line");
                continue;
            };
            let key = key.trim();
            match serde_json::from_str::<Value>(raw.trim()) {
                Ok(value) => {
                    fields.insert(key.to_string(), value);
                }
                Err(err) => tracing::warn!(key, %err, "skipping legacy config value"),
            }
        }
        Self::from_value(&Value::Object(fields))
    }
}

pub fn valid_words_per_game(n: usize) -> bool {
    n > 0
}

pub fn valid_probability(p: f64) -> bool {
    p.is_finite() && (0.0..=1.0).contains(&p)
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> std::io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new() -> Self {
        Self {
            path: AppDirs::config_path(),
        }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `config.toml` beside the JSON file.
    pub fn legacy_path(&self) -> PathBuf {
        self.path.with_extension("toml")
    }

    fn load_legacy(&self) -> Option<Config> {
        let legacy = self.legacy_path();
        let text = fs::read_to_string(&legacy).ok()?;
        tracing::info!(
            path = %legacy.display(),
            "importing legacy config; run with --write-config to keep it as JSON"
        );
        Some(Config::from_legacy_toml(&text))
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) => {
                if let Some(cfg) = self.load_legacy() {
                    return cfg;
                }
                tracing::debug!(path = %self.path.display(), %err, "no config file, using defaults");
                return Config::default();
            }
        };

        match serde_json::from_slice::<Value>(&bytes) {
            Ok(value) => Config::from_value(&value),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "unreadable config, using defaults");
                Config::default()
            }
        }
    }

    fn save(&self, cfg: &Config) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg)?;
        fs::write(&self.path, data)
    }
}
