pub mod app;
pub mod app_dirs;
pub mod config;
pub mod encoding;
pub mod error;
pub mod input;
pub mod logging;
pub mod menu;
pub mod mode;
pub mod progress;
pub mod runtime;
pub mod session;
pub mod tui;
pub mod ui;
pub mod view;
pub mod words;

pub use app::{App, AppState};
pub use config::Config;
pub use mode::Mode;
