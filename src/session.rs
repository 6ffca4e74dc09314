//! One practice session: a fixed number of rounds in a single mode.

use crate::config::Config;
use crate::mode::Mode;
use crate::progress::{DailyProgress, ProgressRecorder};
use crate::words::TargetSource;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    pub words_per_game: usize,
    pub single_letter_probability: f64,
}

impl From<&Config> for SessionConfig {
    fn from(cfg: &Config) -> Self {
        Self {
            words_per_game: cfg.words_per_game,
            single_letter_probability: cfg.single_letter_probability,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    AwaitingInput,
    Complete,
    Cancelled,
}

/// What's shown once the last round is matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub mode: Mode,
    pub words_completed: usize,
    pub completed_words: Vec<String>,
    pub today: DailyProgress,
}

/// Result of feeding one input to a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Nothing changed.
    Ignored,
    /// The input buffer changed without matching.
    Edited,
    /// The target was typed; a new round has begun.
    Matched { word: String },
    /// The final target was typed.
    Completed(SessionSummary),
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct Session {
    mode: Mode,
    config: SessionConfig,
    target: String,
    input: String,
    completed: Vec<String>,
    phase: SessionPhase,
}

impl Session {
    pub fn start(mode: Mode, config: SessionConfig, source: &mut impl TargetSource) -> Self {
        let target = source.next_target(config.single_letter_probability);
        tracing::info!(%mode, words = config.words_per_game, "session started");
        Self {
            mode,
            config,
            target,
            input: String::new(),
            completed: Vec::new(),
            phase: SessionPhase::AwaitingInput,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn words_per_game(&self) -> usize {
        self.config.words_per_game
    }

    pub fn words_completed(&self) -> usize {
        self.completed.len()
    }

    pub fn completed_words(&self) -> &[String] {
        &self.completed
    }

    /// 1-based index of the round being played.
    pub fn round(&self) -> usize {
        (self.completed.len() + 1).min(self.config.words_per_game)
    }

    /// The current target rendered in this session's encoding.
    pub fn display_lines(&self) -> Vec<String> {
        self.mode.display_lines(&self.target)
    }

    /// Each typed character paired with whether it agrees with the target
    /// at the same position.
    pub fn input_feedback(&self) -> Vec<(char, bool)> {
        let mut target = self.target.chars();
        self.input
            .chars()
            .map(|typed| {
                let ok = target
                    .next()
                    .is_some_and(|want| typed.to_lowercase().eq(want.to_lowercase()));
                (typed, ok)
            })
            .collect()
    }

    /// Appends a printable character and checks for a match.
    pub fn type_char(
        &mut self,
        c: char,
        source: &mut impl TargetSource,
        recorder: &mut impl ProgressRecorder,
    ) -> SessionEvent {
        if self.phase != SessionPhase::AwaitingInput || c.is_control() {
            return SessionEvent::Ignored;
        }

        self.input.push(c);
        if self.input.to_lowercase() != self.target.to_lowercase() {
            return SessionEvent::Edited;
        }

        let word = std::mem::take(&mut self.target);
        recorder.record(self.mode);
        self.completed.push(word.clone());
        self.input.clear();
        tracing::debug!(mode = %self.mode, %word, round = self.completed.len(), "word matched");

        if self.completed.len() >= self.config.words_per_game {
            self.phase = SessionPhase::Complete;
            tracing::info!(mode = %self.mode, words = self.completed.len(), "session complete");
            return SessionEvent::Completed(SessionSummary {
                mode: self.mode,
                words_completed: self.completed.len(),
                completed_words: self.completed.clone(),
                today: recorder.today(),
            });
        }

        self.target = source.next_target(self.config.single_letter_probability);
        SessionEvent::Matched { word }
    }

    pub fn backspace(&mut self) -> SessionEvent {
        if self.phase != SessionPhase::AwaitingInput {
            return SessionEvent::Ignored;
        }
        match self.input.pop() {
            Some(_) => SessionEvent::Edited,
            None => SessionEvent::Ignored,
        }
    }

    /// Abandons the session; the word in progress is not recorded.
    pub fn cancel(&mut self) -> SessionEvent {
        if self.phase != SessionPhase::AwaitingInput {
            return SessionEvent::Ignored;
        }
        self.phase = SessionPhase::Cancelled;
        tracing::info!(mode = %self.mode, words = self.completed.len(), "session cancelled");
        SessionEvent::Cancelled
    }
}
