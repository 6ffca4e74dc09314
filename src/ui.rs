use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
    Frame,
};

use crate::view::{Tone, View, ViewLine, LEFT_MARGIN, TITLE_ROW};

fn tone_style(tone: Tone) -> Style {
    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    match tone {
        Tone::Plain => Style::default(),
        Tone::Title => Style::default().patch(bold_style).fg(Color::Yellow),
        Tone::Success => Style::default().fg(Color::Green),
        Tone::Info => Style::default().fg(Color::Cyan),
        Tone::Selected => Style::default().add_modifier(Modifier::REVERSED),
    }
}

fn to_line(line: &ViewLine) -> Line<'_> {
    let mut spans = Vec::with_capacity(line.segments.len() + 1);
    if line.indent > 0 {
        spans.push(Span::raw(" ".repeat(line.indent as usize)));
    }
    spans.extend(
        line.segments
            .iter()
            .map(|s| Span::styled(s.text.as_str(), tone_style(s.tone))),
    );
    Line::from(spans)
}

impl Widget for &View {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines: Vec<Line> = vec![Line::default(); TITLE_ROW as usize];
        lines.push(Line::from(vec![
            Span::raw(" ".repeat(LEFT_MARGIN as usize)),
            Span::styled(self.title.as_str(), tone_style(Tone::Title)),
        ]));
        lines.push(Line::default());
        lines.extend(self.lines.iter().map(to_line));

        // No wrapping: encoded art must stay row aligned, so anything wider
        // than the area is clipped.
        Paragraph::new(lines).render(area, buf);
    }
}

/// Draws a view and places the terminal cursor if it falls inside the frame.
pub fn draw(f: &mut Frame, view: &View) {
    let area = f.area();
    f.render_widget(view, area);

    if let Some((col, row)) = view.cursor {
        if col < area.width && row < area.height {
            f.set_cursor_position(Position::new(area.x + col, area.y + row));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::MenuState;
    use crate::progress::DailyProgress;
    use crate::view::{menu_view, CONTENT_TOP};
    use ratatui::{backend::TestBackend, Terminal};

    fn rendered_rows(buffer: &Buffer) -> Vec<String> {
        let area = buffer.area();
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect()
    }

    fn sample_view() -> View {
        View {
            title: "Braille - Word 1/3".to_string(),
            lines: vec![
                ViewLine::new(4, "●○  ●●", Tone::Plain),
                ViewLine::blank(),
                ViewLine::new(2, "Type the word: ", Tone::Plain).push("AB", Tone::Success),
            ],
            cursor: Some((19, 5)),
        }
    }

    #[test]
    fn renders_title_and_lines_in_place() {
        let view = sample_view();
        let area = Rect::new(0, 0, 40, 10);
        let mut buffer = Buffer::empty(area);
        (&view).render(area, &mut buffer);

        let rows = rendered_rows(&buffer);
        assert!(rows[TITLE_ROW as usize].starts_with("  Braille - Word 1/3"));
        assert!(rows[CONTENT_TOP as usize].starts_with("    ●○  ●●"));
        assert!(rows[CONTENT_TOP as usize + 2].starts_with("  Type the word: AB"));
    }

    #[test]
    fn tones_map_to_styles() {
        let view = sample_view();
        let area = Rect::new(0, 0, 40, 10);
        let mut buffer = Buffer::empty(area);
        (&view).render(area, &mut buffer);

        assert_eq!(buffer[(2, TITLE_ROW)].fg, Color::Yellow);
        assert_eq!(buffer[(17, CONTENT_TOP + 2)].fg, Color::Green);
    }

    #[test]
    fn tiny_area_clips_without_panicking() {
        let view = sample_view();
        for (w, h) in [(1, 1), (5, 2), (0, 0), (80, 1)] {
            let area = Rect::new(0, 0, w, h);
            let mut buffer = Buffer::empty(area);
            (&view).render(area, &mut buffer);
            assert_eq!(*buffer.area(), area);
        }
    }

    #[test]
    fn draw_sets_cursor_inside_frame() {
        let backend = TestBackend::new(40, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let view = sample_view();
        terminal.draw(|f| draw(f, &view)).unwrap();
        terminal.show_cursor().unwrap();
        assert_eq!(
            terminal.get_cursor_position().unwrap(),
            Position::new(19, 5)
        );
    }

    #[test]
    fn draw_skips_cursor_outside_small_frame() {
        let backend = TestBackend::new(10, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let view = sample_view();
        terminal.draw(|f| draw(f, &view)).unwrap();
    }

    #[test]
    fn menu_renders_on_standard_terminal() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let view = menu_view(
            &MenuState::default(),
            &DailyProgress::default(),
            &DailyProgress::default(),
        );
        terminal.draw(|f| draw(f, &view)).unwrap();
        let rows = rendered_rows(terminal.backend().buffer());
        assert!(rows.iter().any(|r| r.contains("BORSE - Code Practice Game")));
        assert!(rows.iter().any(|r| r.contains("[A] A1Z26")));
    }
}
