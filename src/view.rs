//! Immutable screen descriptions built from game state.
//!
//! A [`View`] is what the core hands to the terminal layer: a title, a list of
//! indented lines made of toned segments, and where the cursor should sit. The
//! terminal layer decides how to style tones and clips anything that does not
//! fit.

use itertools::Itertools;
use unicode_width::UnicodeWidthStr;

use crate::menu::{MenuState, MENU_ITEMS};
use crate::progress::DailyProgress;
use crate::session::{Session, SessionSummary};

pub const TITLE_ROW: u16 = 1;
pub const LEFT_MARGIN: u16 = 2;
/// First row below the title.
pub const CONTENT_TOP: u16 = 3;
const ART_INDENT: u16 = 4;
const INPUT_PROMPT: &str = "Type the word: ";
const WORDS_PER_SUMMARY_LINE: usize = 8;

/// Colour intent; advisory only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Plain,
    Title,
    Success,
    Info,
    Selected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewLine {
    pub indent: u16,
    pub segments: Vec<Segment>,
}

impl ViewLine {
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn new(indent: u16, text: impl Into<String>, tone: Tone) -> Self {
        Self {
            indent,
            segments: vec![Segment {
                text: text.into(),
                tone,
            }],
        }
    }

    pub fn push(mut self, text: impl Into<String>, tone: Tone) -> Self {
        self.segments.push(Segment {
            text: text.into(),
            tone,
        });
        self
    }

    /// Text without indentation.
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Display columns, saturating at `u16::MAX` for runaway input.
    pub fn width(&self) -> u16 {
        let text = u16::try_from(self.text().width()).unwrap_or(u16::MAX);
        self.indent.saturating_add(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub title: String,
    /// Lines starting at [`CONTENT_TOP`].
    pub lines: Vec<ViewLine>,
    /// (column, row) relative to the drawing area.
    pub cursor: Option<(u16, u16)>,
}

impl View {
    fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
            cursor: None,
        }
    }

    fn line(&mut self, line: ViewLine) -> u16 {
        self.lines.push(line);
        CONTENT_TOP + self.lines.len() as u16 - 1
    }

    fn blank(&mut self) {
        self.lines.push(ViewLine::blank());
    }

    /// Every line's text including indentation, title first. Handy for tests
    /// and plain-text output.
    pub fn plain_lines(&self) -> Vec<String> {
        std::iter::once(self.title.clone())
            .chain(
                self.lines
                    .iter()
                    .map(|l| format!("{}{}", " ".repeat(l.indent as usize), l.text())),
            )
            .collect()
    }
}

pub fn menu_view(menu: &MenuState, today: &DailyProgress, alltime: &DailyProgress) -> View {
    let mut view = View::new("BORSE - Code Practice Game");
    view.line(ViewLine::new(LEFT_MARGIN, today.summary_line("Today"), Tone::Info));
    view.line(ViewLine::new(
        LEFT_MARGIN,
        alltime.summary_line("All time"),
        Tone::Info,
    ));
    view.blank();
    view.line(ViewLine::new(
        LEFT_MARGIN,
        "Select a mode to practice:",
        Tone::Plain,
    ));
    view.blank();

    for (idx, item) in MENU_ITEMS.iter().enumerate() {
        let tone = if idx == menu.selected {
            Tone::Selected
        } else {
            Tone::Plain
        };
        view.line(ViewLine::new(4, format!("  {}  ", item.label()), tone));
    }

    view.blank();
    view.line(ViewLine::new(
        LEFT_MARGIN,
        "Use arrows + Enter, or press shortcut key",
        Tone::Plain,
    ));
    view
}

pub fn session_view(session: &Session) -> View {
    let mut view = View::new(format!(
        "{} - Word {}/{}",
        session.mode().title(),
        session.round(),
        session.words_per_game()
    ));

    for line in session.display_lines() {
        view.line(ViewLine::new(ART_INDENT, line, Tone::Plain));
    }
    view.blank();

    // Input is echoed in uppercase; positions that agree with the target
    // are marked as successes.
    let mut input_line = ViewLine::new(LEFT_MARGIN, INPUT_PROMPT, Tone::Plain);
    for (ok, group) in &session.input_feedback().into_iter().chunk_by(|(_, ok)| *ok) {
        let text: String = group.map(|(c, _)| c).collect::<String>().to_uppercase();
        input_line = input_line.push(text, if ok { Tone::Success } else { Tone::Plain });
    }
    let cursor_col = input_line.width();
    let input_row = view.line(input_line);
    view.cursor = Some((cursor_col, input_row));

    view.blank();
    view.line(ViewLine::new(
        LEFT_MARGIN,
        "Press Esc to return to menu",
        Tone::Plain,
    ));

    if !session.completed_words().is_empty() {
        view.blank();
        let words = session
            .completed_words()
            .iter()
            .map(|w| w.to_uppercase())
            .join(", ");
        view.line(
            ViewLine::new(LEFT_MARGIN, "Completed: ", Tone::Success).push(words, Tone::Success),
        );
    }
    view
}

pub fn summary_view(summary: &SessionSummary) -> View {
    let mut view = View::new("Session Complete!");
    view.line(ViewLine::new(
        LEFT_MARGIN,
        format!(
            "You completed {} {} words!",
            summary.words_completed,
            summary.mode.title()
        ),
        Tone::Success,
    ));
    view.blank();
    view.line(ViewLine::new(
        LEFT_MARGIN,
        format!("Today's total: {} words", summary.today.total_words()),
        Tone::Plain,
    ));

    if !summary.completed_words.is_empty() {
        view.blank();
        view.line(ViewLine::new(LEFT_MARGIN, "Words completed:", Tone::Plain));
        for chunk in summary.completed_words.chunks(WORDS_PER_SUMMARY_LINE) {
            let text = chunk.iter().map(|w| w.to_uppercase()).join(", ");
            view.line(ViewLine::new(LEFT_MARGIN, text, Tone::Success));
        }
    }

    view.blank();
    view.line(ViewLine::new(
        LEFT_MARGIN,
        "Press any key to continue...",
        Tone::Plain,
    ));
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::Mode;
    use crate::session::SessionConfig;
    use crate::words::TargetSource;

    struct Fixed(&'static str);

    impl TargetSource for Fixed {
        fn next_target(&mut self, _p: f64) -> String {
            self.0.to_string()
        }
    }

    #[test]
    fn menu_lists_progress_and_items() {
        let today = DailyProgress {
            morse_words: 2,
            braille_words: 1,
            ..Default::default()
        };
        let view = menu_view(&MenuState::default(), &today, &today);
        let text = view.plain_lines();
        assert_eq!(text[0], "BORSE - Code Practice Game");
        assert_eq!(text[1], "  Today: 3 words (M:2 B:1 S:0 A:0)");
        assert!(text.iter().any(|l| l.contains("[S] Flag Semaphore")));
        let selected: Vec<_> = view
            .lines
            .iter()
            .filter(|l| l.segments.iter().any(|s| s.tone == Tone::Selected))
            .collect();
        assert_eq!(selected.len(), 1);
        assert!(selected[0].text().contains("Morse Code"));
    }

    #[test]
    fn session_view_places_cursor_after_input() {
        let session = Session::start(
            Mode::A1z26,
            SessionConfig {
                words_per_game: 4,
                single_letter_probability: 0.0,
            },
            &mut Fixed("cat"),
        );
        let view = session_view(&session);
        assert_eq!(view.title, "A1Z26 - Word 1/4");
        assert_eq!(view.lines[0].text(), "3 1 20");
        let (col, row) = view.cursor.unwrap();
        assert_eq!(col, LEFT_MARGIN + INPUT_PROMPT.len() as u16);
        let input_line = &view.lines[(row - CONTENT_TOP) as usize];
        assert_eq!(input_line.text(), INPUT_PROMPT);
    }

    #[test]
    fn typed_input_is_uppercased_and_toned() {
        let mut source = Fixed("cat");
        let mut session = Session::start(
            Mode::Morse,
            SessionConfig {
                words_per_game: 4,
                single_letter_probability: 0.0,
            },
            &mut source,
        );
        let mut day = crate::progress::Progress::default();
        struct Sink<'a>(&'a mut crate::progress::Progress);
        impl crate::progress::ProgressRecorder for Sink<'_> {
            fn record(&mut self, mode: Mode) {
                self.0.add_word(mode);
            }
            fn today(&mut self) -> DailyProgress {
                *self.0.today()
            }
        }
        let mut sink = Sink(&mut day);
        session.type_char('c', &mut source, &mut sink);
        session.type_char('x', &mut source, &mut sink);

        let view = session_view(&session);
        let (_, row) = view.cursor.unwrap();
        let input_line = &view.lines[(row - CONTENT_TOP) as usize];
        assert_eq!(input_line.text(), "Type the word: CX");
        assert_eq!(input_line.segments[1].tone, Tone::Success);
        assert_eq!(input_line.segments[2].tone, Tone::Plain);
        assert_eq!(view.cursor.unwrap().0, LEFT_MARGIN + 17);
    }

    #[test]
    fn width_saturates_for_very_long_input() {
        let long = "x".repeat(70_000);
        assert_eq!(ViewLine::new(0, long.as_str(), Tone::Plain).width(), u16::MAX);
        assert_eq!(
            ViewLine::new(LEFT_MARGIN, INPUT_PROMPT, Tone::Plain)
                .push("y".repeat(65_530), Tone::Plain)
                .width(),
            u16::MAX
        );
        assert_eq!(ViewLine::new(3, "ab", Tone::Plain).width(), 5);
    }

    #[test]
    fn summary_lists_words() {
        let summary = SessionSummary {
            mode: Mode::Braille,
            words_completed: 2,
            completed_words: vec!["cat".into(), "dog".into()],
            today: DailyProgress {
                braille_words: 7,
                ..Default::default()
            },
        };
        let text = summary_view(&summary).plain_lines();
        assert_eq!(text[0], "Session Complete!");
        assert!(text.contains(&"  You completed 2 Braille words!".to_string()));
        assert!(text.contains(&"  Today's total: 7 words".to_string()));
        assert!(text.contains(&"  CAT, DOG".to_string()));
        assert_eq!(text.last().unwrap(), "  Press any key to continue...");
    }

    #[test]
    fn long_summaries_are_split_across_lines() {
        let summary = SessionSummary {
            mode: Mode::Morse,
            words_completed: 20,
            completed_words: vec!["a".to_string(); 20],
            today: DailyProgress::default(),
        };
        let view = summary_view(&summary);
        let word_lines = view
            .lines
            .iter()
            .filter(|l| l.segments.iter().any(|s| s.tone == Tone::Success))
            .count();
        // headline plus three lines of words
        assert_eq!(word_lines, 4);
    }
}
