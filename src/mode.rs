use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::encoding::{A1z26, Braille, Encoder, Morse, Semaphore};

/// Practice mode; each one drills a single encoding.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ValueEnum,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Mode {
    Morse,
    Braille,
    Semaphore,
    #[value(name = "a1z26")]
    A1z26,
}

impl Mode {
    /// Menu order.
    pub const ALL: [Mode; 4] = [Mode::Morse, Mode::Braille, Mode::Semaphore, Mode::A1z26];

    pub fn encoder(self) -> &'static dyn Encoder {
        match self {
            Mode::Morse => &Morse,
            Mode::Braille => &Braille,
            Mode::Semaphore => &Semaphore,
            Mode::A1z26 => &A1z26,
        }
    }

    /// Human readable name used in titles and summaries.
    pub fn title(self) -> &'static str {
        match self {
            Mode::Morse => "Morse Code",
            Mode::Braille => "Braille",
            Mode::Semaphore => "Flag Semaphore",
            Mode::A1z26 => "A1Z26",
        }
    }

    /// Menu shortcut, matched case-insensitively.
    pub fn shortcut(self) -> char {
        match self {
            Mode::Morse => 'm',
            Mode::Braille => 'b',
            Mode::Semaphore => 's',
            Mode::A1z26 => 'a',
        }
    }

    pub fn from_shortcut(c: char) -> Option<Mode> {
        let c = c.to_ascii_lowercase();
        Mode::ALL.into_iter().find(|m| m.shortcut() == c)
    }

    pub fn display_lines(self, word: &str) -> Vec<String> {
        self.encoder().display_lines(word)
    }
}
