//! Daily completion counts and their persistence.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs;
use std::io::{BufWriter, Write};
use std::ops::AddAssign;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::error::ProgressError;
use crate::mode::Mode;

/// Words completed in each mode on one day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyProgress {
    pub morse_words: u64,
    pub braille_words: u64,
    pub semaphore_words: u64,
    pub a1z26_words: u64,
}

impl DailyProgress {
    /// Counters are read from disk unchecked, so sums saturate.
    pub fn total_words(&self) -> u64 {
        Mode::ALL
            .iter()
            .fold(0u64, |sum, mode| sum.saturating_add(self.words(*mode)))
    }

    pub fn words(&self, mode: Mode) -> u64 {
        match mode {
            Mode::Morse => self.morse_words,
            Mode::Braille => self.braille_words,
            Mode::Semaphore => self.semaphore_words,
            Mode::A1z26 => self.a1z26_words,
        }
    }

    fn counter_mut(&mut self, mode: Mode) -> &mut u64 {
        match mode {
            Mode::Morse => &mut self.morse_words,
            Mode::Braille => &mut self.braille_words,
            Mode::Semaphore => &mut self.semaphore_words,
            Mode::A1z26 => &mut self.a1z26_words,
        }
    }

    pub fn increment(&mut self, mode: Mode) {
        let counter = self.counter_mut(mode);
        *counter = counter.saturating_add(1);
    }

    /// `Today: 12 words (M:3 B:4 S:5 A:0)`
    pub fn summary_line(&self, label: &str) -> String {
        format!(
            "{label}: {} words (M:{} B:{} S:{} A:{})",
            self.total_words(),
            self.morse_words,
            self.braille_words,
            self.semaphore_words,
            self.a1z26_words
        )
    }
}

impl AddAssign<&DailyProgress> for DailyProgress {
    fn add_assign(&mut self, other: &DailyProgress) {
        for mode in Mode::ALL {
            let counter = self.counter_mut(mode);
            *counter = counter.saturating_add(other.words(mode));
        }
    }
}

/// All recorded days, keyed by calendar date (`YYYY-MM-DD` on disk).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    #[serde(default)]
    pub daily: BTreeMap<NaiveDate, DailyProgress>,
}

impl Progress {
    /// Today's entry, inserted as zero if this is the first look today.
    pub fn today(&mut self) -> &mut DailyProgress {
        self.day(Local::now().date_naive())
    }

    pub fn day(&mut self, date: NaiveDate) -> &mut DailyProgress {
        self.daily.entry(date).or_default()
    }

    pub fn add_word(&mut self, mode: Mode) {
        self.today().increment(mode);
    }

    pub fn add_word_on(&mut self, date: NaiveDate, mode: Mode) {
        self.day(date).increment(mode);
    }

    pub fn alltime_by_mode(&self) -> DailyProgress {
        self.daily
            .values()
            .fold(DailyProgress::default(), |mut acc, day| {
                acc += day;
                acc
            })
    }

    pub fn alltime_total(&self) -> u64 {
        self.alltime_by_mode().total_words()
    }

    /// Reads a parsed progress document one day at a time. Days whose key is
    /// not a date or whose body is not an object are dropped; a counter that
    /// is not a non-negative integer reads as zero. Everything else is kept.
    pub fn from_value(value: &Value) -> Self {
        let mut progress = Self::default();
        let Some(days) = value.get("daily").and_then(Value::as_object) else {
            tracing::warn!("progress document has no daily table");
            return progress;
        };

        for (key, entry) in days {
            let Ok(date) = key.parse::<NaiveDate>() else {
                tracing::warn!(%key, "dropping progress entry with an unreadable date");
                continue;
            };
            let Some(fields) = entry.as_object() else {
                tracing::warn!(%date, "dropping progress entry that is not an object");
                continue;
            };
            *progress.day(date) += &DailyProgress::from_fields(date, fields);
        }
        progress
    }
}

impl DailyProgress {
    fn from_fields(date: NaiveDate, fields: &Map<String, Value>) -> Self {
        let count = |name: &str| match fields.get(name) {
            None => 0,
            Some(value) => value.as_u64().unwrap_or_else(|| {
                tracing::warn!(%date, field = name, %value, "unreadable counter, reading as zero");
                0
            }),
        };
        Self {
            morse_words: count("morse_words"),
            braille_words: count("braille_words"),
            semaphore_words: count("semaphore_words"),
            a1z26_words: count("a1z26_words"),
        }
    }
}

pub trait ProgressStore {
    /// Never fails: unreadable storage yields an empty history.
    fn load(&self) -> Progress;
    fn save(&self, progress: &Progress) -> Result<(), ProgressError>;
}

#[derive(Debug, Clone)]
pub struct FileProgressStore {
    path: PathBuf,
}

impl FileProgressStore {
    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where an unparseable progress file is moved before it can be
    /// overwritten: `progress.json` becomes `progress.json.corrupt`.
    pub fn backup_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("progress"));
        name.push(".corrupt");
        self.path.with_file_name(name)
    }
}

impl ProgressStore for FileProgressStore {
    fn load(&self) -> Progress {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::debug!(path = %self.path.display(), %err, "no progress file, starting fresh");
                return Progress::default();
            }
        };

        match serde_json::from_slice::<Value>(&bytes) {
            Ok(value) => Progress::from_value(&value),
            Err(err) => {
                let backup = self.backup_path();
                tracing::warn!(
                    path = %self.path.display(),
                    backup = %backup.display(),
                    %err,
                    "unreadable progress file, moving it aside and starting fresh"
                );
                if let Err(err) = fs::rename(&self.path, &backup) {
                    tracing::warn!(%err, "could not move unreadable progress file aside");
                }
                Progress::default()
            }
        }
    }

    /// Writes to a sibling temp file and renames it over the old one, so a
    /// failed write leaves the previous file intact.
    fn save(&self, progress: &Progress) -> Result<(), ProgressError> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)?;

        let temp_file = NamedTempFile::new_in(parent)?;
        {
            let mut writer = BufWriter::new(&temp_file);
            serde_json::to_writer_pretty(&mut writer, progress)?;
            writer.flush()?;
        }
        temp_file.persist(&self.path)?;
        Ok(())
    }
}

/// Keeps the last saved snapshot in memory; nothing touches disk.
#[derive(Debug, Default)]
pub struct MemoryProgressStore {
    saved: std::cell::RefCell<Option<Progress>>,
    saves: std::cell::Cell<usize>,
}

impl MemoryProgressStore {
    pub fn with_progress(progress: Progress) -> Self {
        Self {
            saved: std::cell::RefCell::new(Some(progress)),
            saves: std::cell::Cell::new(0),
        }
    }

    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    pub fn saved(&self) -> Option<Progress> {
        self.saved.borrow().clone()
    }
}

impl ProgressStore for MemoryProgressStore {
    fn load(&self) -> Progress {
        self.saved().unwrap_or_default()
    }

    fn save(&self, progress: &Progress) -> Result<(), ProgressError> {
        self.saves.set(self.saves.get() + 1);
        *self.saved.borrow_mut() = Some(progress.clone());
        Ok(())
    }
}

impl<S: ProgressStore + ?Sized> ProgressStore for std::rc::Rc<S> {
    fn load(&self) -> Progress {
        (**self).load()
    }

    fn save(&self, progress: &Progress) -> Result<(), ProgressError> {
        (**self).save(progress)
    }
}

/// Receives one event per completed word.
pub trait ProgressRecorder {
    fn record(&mut self, mode: Mode);
    fn today(&mut self) -> DailyProgress;
}

/// Loaded progress plus the store it is written back to after every word.
pub struct ProgressTracker {
    progress: Progress,
    store: Box<dyn ProgressStore>,
}

impl ProgressTracker {
    pub fn load(store: Box<dyn ProgressStore>) -> Self {
        let progress = store.load();
        tracing::info!(
            days = progress.daily.len(),
            total = progress.alltime_total(),
            "progress loaded"
        );
        Self { progress, store }
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    pub fn alltime_total(&self) -> u64 {
        self.progress.alltime_total()
    }

    pub fn alltime_by_mode(&self) -> DailyProgress {
        self.progress.alltime_by_mode()
    }
}

impl ProgressRecorder for ProgressTracker {
    /// Increments first, then persists; a failed save is logged and the
    /// in-memory count stays.
    fn record(&mut self, mode: Mode) {
        self.progress.add_word(mode);
        if let Err(err) = self.store.save(&self.progress) {
            tracing::warn!(%mode, %err, "failed to save progress");
        }
    }

    fn today(&mut self) -> DailyProgress {
        *self.progress.today()
    }
}
