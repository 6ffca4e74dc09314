use include_dir::{include_dir, Dir};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::path::Path;
use std::sync::Arc;

use crate::error::CorpusError;

static CORPUS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/corpus");
const EMBEDDED_CORPUS: &str = "common.txt";

const LETTERS: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Immutable list of practice words: lowercase, alphabetic, never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    words: Vec<String>,
}

impl Corpus {
    /// Parses a newline-delimited list. Entries are trimmed and lowercased;
    /// blank lines and entries with non-alphabetic characters are dropped.
    pub fn from_lines(text: &str) -> Result<Self, CorpusError> {
        let words: Vec<String> = text
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|w| !w.is_empty() && w.chars().all(|c| c.is_ascii_alphabetic()))
            .collect();

        if words.is_empty() {
            return Err(CorpusError::Empty);
        }
        Ok(Self { words })
    }

    /// The word list compiled into the binary.
    pub fn embedded() -> Result<Self, CorpusError> {
        let text = CORPUS_DIR
            .get_file(EMBEDDED_CORPUS)
            .and_then(|f| f.contents_utf8())
            .ok_or(CorpusError::Empty)?;
        Self::from_lines(text)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| CorpusError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_lines(&text)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

/// Anything that can hand out the next thing to type.
pub trait TargetSource {
    fn next_target(&mut self, single_letter_probability: f64) -> String;
}

/// Random draws from a shared corpus. Each draw is independent.
#[derive(Debug, Clone)]
pub struct WordSource {
    corpus: Arc<Corpus>,
    rng: StdRng,
}

impl WordSource {
    pub fn new(corpus: Arc<Corpus>) -> Self {
        Self {
            corpus,
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible draws, for tests.
    pub fn with_seed(corpus: Arc<Corpus>, seed: u64) -> Self {
        Self {
            corpus,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn random_word(&mut self) -> String {
        // Corpus guarantees at least one word.
        self.corpus
            .words()
            .choose(&mut self.rng)
            .cloned()
            .unwrap_or_default()
    }

    pub fn random_letter(&mut self) -> String {
        let idx = self.rng.gen_range(0..LETTERS.len());
        char::from(LETTERS[idx]).to_string()
    }

    /// `n` words drawn with replacement.
    pub fn sample_words(&mut self, n: usize) -> Vec<String> {
        (0..n).map(|_| self.random_word()).collect()
    }
}

impl TargetSource for WordSource {
    fn next_target(&mut self, single_letter_probability: f64) -> String {
        if self.rng.gen::<f64>() < single_letter_probability {
            self.random_letter()
        } else {
            self.random_word()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_corpus() -> Arc<Corpus> {
        Arc::new(Corpus::from_lines("apple\nbridge\ncat\n").unwrap())
    }

    #[test]
    fn embedded_corpus_is_clean() {
        let corpus = Corpus::embedded().unwrap();
        assert!(!corpus.is_empty());
        for word in corpus.words() {
            assert_eq!(word, &word.to_lowercase());
            assert!(word.chars().all(|c| c.is_ascii_alphabetic()), "{word}");
        }
    }

    #[test]
    fn from_lines_normalizes_and_filters() {
        let corpus = Corpus::from_lines("  Hello \n\nworld\ndon't\nx1\nOK\n").unwrap();
        assert_eq!(corpus.words(), &["hello", "world", "ok"]);
    }

    #[test]
    fn empty_list_is_rejected() {
        assert!(matches!(Corpus::from_lines(""), Err(CorpusError::Empty)));
        assert!(matches!(
            Corpus::from_lines("123\n!!\n"),
            Err(CorpusError::Empty)
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Corpus::from_file("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, CorpusError::Io { .. }));
    }

    #[test]
    fn probability_zero_always_gives_a_word() {
        let mut source = WordSource::with_seed(small_corpus(), 7);
        for _ in 0..100 {
            let target = source.next_target(0.0);
            assert!(source.corpus().contains(&target), "{target}");
        }
    }

    #[test]
    fn probability_one_always_gives_a_letter() {
        let mut source = WordSource::with_seed(small_corpus(), 7);
        for _ in 0..100 {
            let target = source.next_target(1.0);
            assert_eq!(target.len(), 1);
            assert!(target.chars().all(|c| c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn mixed_probability_gives_both_kinds() {
        let mut source = WordSource::with_seed(small_corpus(), 42);
        let targets: Vec<String> = (0..200).map(|_| source.next_target(0.5)).collect();
        assert!(targets.iter().any(|t| t.len() == 1));
        assert!(targets.iter().any(|t| source.corpus().contains(t)));
    }

    #[test]
    fn sample_words_returns_exact_count() {
        let mut source = WordSource::with_seed(small_corpus(), 1);
        assert!(source.sample_words(0).is_empty());
        let words = source.sample_words(5);
        assert_eq!(words.len(), 5);
        assert!(words.iter().all(|w| source.corpus().contains(w)));
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = WordSource::with_seed(small_corpus(), 99);
        let mut b = WordSource::with_seed(small_corpus(), 99);
        assert_eq!(a.sample_words(10), b.sample_words(10));
    }
}
