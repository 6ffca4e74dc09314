//! Character-to-art transducers shared by every practice mode.
//!
//! Each encoder turns one character into a [`Glyph`], a small grid of text rows
//! with a height fixed per encoder. Words are rendered glyph by glyph and then
//! laid out side by side, row aligned, with an encoder-specific separator.

pub mod a1z26;
pub mod braille;
pub mod morse;
pub mod semaphore;

use itertools::Itertools;

pub use a1z26::A1z26;
pub use braille::Braille;
pub use morse::Morse;
pub use semaphore::Semaphore;

/// One encoded character: equal-length text rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    rows: Vec<String>,
}

impl Glyph {
    pub(crate) fn from_rows(rows: Vec<String>) -> Self {
        debug_assert!(
            rows.iter()
                .map(|r| r.chars().count())
                .all_equal(),
            "glyph rows must share one width"
        );
        Self { rows }
    }

    /// A glyph of the given shape made only of spaces.
    pub fn blank(height: usize, width: usize) -> Self {
        Self {
            rows: vec![" ".repeat(width); height],
        }
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Width in characters (not bytes), taken from the first row.
    pub fn width(&self) -> usize {
        self.rows
            .first()
            .map(|r| r.chars().count())
            .unwrap_or_default()
    }

    pub fn is_blank(&self) -> bool {
        self.rows.iter().all(|r| r.trim().is_empty())
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<char> {
        self.rows.get(row).and_then(|r| r.chars().nth(col))
    }
}

/// Glyphs of the supported characters of a word, in source order.
pub type EncodedWord = Vec<Glyph>;

/// Shared contract of all encoders.
pub trait Encoder {
    /// Number of rows in every glyph this encoder produces.
    fn height(&self) -> usize;

    /// Text placed between neighbouring glyphs on each display row.
    fn separator(&self) -> &'static str;

    /// Whether `c` belongs to the encoder's alphabet (case-insensitive).
    fn supports(&self, c: char) -> bool;

    /// Encodes one character; characters outside the alphabet give a blank
    /// glyph of the same shape as a valid one.
    fn render_char(&self, c: char) -> Glyph;

    /// Encodes every supported character of `word`. Unsupported characters
    /// are skipped rather than blanked.
    fn render_word(&self, word: &str) -> EncodedWord {
        word.chars()
            .filter(|c| self.supports(*c))
            .map(|c| self.render_char(c))
            .collect()
    }

    /// The rows shown on screen for `word`: always exactly `height()` lines,
    /// all empty when nothing in the word is encodable.
    fn display_lines(&self, word: &str) -> Vec<String> {
        let glyphs = self.render_word(word);
        (0..self.height())
            .map(|row| {
                glyphs
                    .iter()
                    .map(|g| g.rows()[row].as_str())
                    .join(self.separator())
            })
            .collect()
    }
}
