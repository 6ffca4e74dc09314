use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter, e.g. `BORSE_LOG=debug`.
pub const LOG_ENV: &str = "BORSE_LOG";
const DEFAULT_FILTER: &str = "info";

fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn open_log(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Sends tracing output to `path`. The terminal belongs to the UI, so nothing
/// is ever written to stdout or stderr; if the file cannot be opened the game
/// simply runs without logs.
pub fn init(path: &Path) -> bool {
    let file = match open_log(path) {
        Ok(file) => file,
        Err(_) => return false,
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(Mutex::new(file)),
        )
        .with(filter())
        .try_init()
        .is_ok()
}
