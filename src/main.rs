use borse::{
    app::App,
    app_dirs::AppDirs,
    config::{valid_probability, valid_words_per_game, Config, ConfigStore, FileConfigStore},
    error::AppError,
    logging,
    mode::Mode,
    progress::{FileProgressStore, Progress, ProgressStore, ProgressTracker},
    runtime::{CrosstermEventSource, FixedTicker, Runner},
    tui::{self, TerminalGuard},
    ui,
    words::{Corpus, WordSource},
};
use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::tty::IsTty;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    io::{self, stdin},
    path::PathBuf,
    process::ExitCode,
    sync::Arc,
    time::Duration,
};

const TICK_RATE_MS: u64 = 250;

/// terminal drills for reading morse, braille, flag semaphore and a1z26
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Decode words shown as Morse code, Braille cells, flag semaphore or A1Z26 numbers and type them back. Progress is counted per day and per mode."
)]
pub struct Cli {
    /// config file to read (and write with --write-config)
    #[clap(short = 'c', long)]
    config: Option<PathBuf>,

    /// number of words per game
    #[clap(short = 'w', long, value_parser = parse_words_per_game)]
    words_per_game: Option<usize>,

    /// chance that a target is a single letter instead of a word (0.0 - 1.0)
    #[clap(short = 'p', long, value_parser = parse_probability)]
    single_letter_probability: Option<f64>,

    /// where daily progress is stored
    #[clap(long)]
    progress_file: Option<PathBuf>,

    /// newline-delimited word list to draw targets from
    #[clap(long)]
    words_file: Option<PathBuf>,

    /// skip the menu and start practicing this mode
    #[clap(short = 'm', long, value_enum)]
    mode: Option<Mode>,

    /// write the effective config to the config file and exit
    #[clap(long)]
    write_config: bool,

    /// print today's and all-time progress and exit
    #[clap(long)]
    stats: bool,
}

fn parse_words_per_game(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|e| format!("{e}"))?;
    if valid_words_per_game(n) {
        Ok(n)
    } else {
        Err("must be at least 1".to_string())
    }
}

fn parse_probability(s: &str) -> Result<f64, String> {
    let p: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if valid_probability(p) {
        Ok(p)
    } else {
        Err("must be between 0.0 and 1.0".to_string())
    }
}

impl Cli {
    fn config_store(&self) -> FileConfigStore {
        match &self.config {
            Some(path) => FileConfigStore::with_path(path),
            None => FileConfigStore::new(),
        }
    }

    /// Command line values win over the config file for this run.
    fn apply(&self, mut config: Config) -> Config {
        if let Some(n) = self.words_per_game {
            config.words_per_game = n;
        }
        if let Some(p) = self.single_letter_probability {
            config.single_letter_probability = p;
        }
        if let Some(path) = &self.progress_file {
            config.progress_file = path.clone();
        }
        config
    }

    fn corpus(&self) -> Result<Corpus, AppError> {
        let corpus = match &self.words_file {
            Some(path) => Corpus::from_file(path)?,
            None => Corpus::embedded()?,
        };
        Ok(corpus)
    }
}

fn stats_report(progress: &mut Progress) -> String {
    let alltime = progress.alltime_by_mode();
    let today = *progress.today();
    format!(
        "{}\n{}\n",
        today.summary_line("Today"),
        alltime.summary_line("All time")
    )
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("borse: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    logging::init(&AppDirs::log_path());

    let config_store = cli.config_store();
    let config = cli.apply(config_store.load());

    if cli.write_config {
        config_store
            .save(&config)
            .map_err(|source| AppError::Config {
                path: config_store.path().to_path_buf(),
                source,
            })?;
        println!("wrote {}", config_store.path().display());
        return Ok(());
    }

    let progress_store = FileProgressStore::with_path(&config.progress_file);

    if cli.stats {
        print!("{}", stats_report(&mut progress_store.load()));
        return Ok(());
    }

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let corpus = cli.corpus()?;
    tracing::info!(words = corpus.len(), "word list loaded");
    let tracker = ProgressTracker::load(Box::new(progress_store));
    let mut app = App::new(config, WordSource::new(Arc::new(corpus)), tracker);
    if let Some(mode) = cli.mode {
        app.start_session(mode);
    }

    tui::install_panic_hook();
    let mut guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let result = start_tui(&mut terminal, &mut app);
    guard.restore();

    result
}

fn start_tui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), AppError> {
    let runner = Runner::new(
        CrosstermEventSource::new(),
        FixedTicker::new(Duration::from_millis(TICK_RATE_MS)),
    );

    runner.run(app, |app| {
        let view = app.view();
        terminal.draw(|f| ui::draw(f, &view))?;
        Ok(())
    })?;
    Ok(())
}
