use directories::ProjectDirs;
use std::path::PathBuf;

const APP_NAME: &str = "borse";

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    /// `~/.config/borse` on Linux; falls back to the working directory.
    pub fn config_dir() -> PathBuf {
        ProjectDirs::from("", "", APP_NAME)
            .map(|pd| pd.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.json")
    }

    /// Progress lives next to the config, as the config file points at it.
    pub fn progress_path() -> PathBuf {
        Self::config_dir().join("progress.json")
    }

    pub fn log_path() -> PathBuf {
        if let Ok(home) = std::env::var("HOME") {
            PathBuf::from(home)
                .join(".local")
                .join("state")
                .join(APP_NAME)
                .join("borse.log")
        } else {
            ProjectDirs::from("", "", APP_NAME)
                .map(|pd| pd.data_local_dir().join("borse.log"))
                .unwrap_or_else(|| PathBuf::from("borse.log"))
        }
    }
}
