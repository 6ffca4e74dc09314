use super::{Encoder, Glyph};

pub const RAISED: char = '●';
pub const FLAT: char = '○';

/// Cell rows as (left dot, right dot). Dots are numbered down the left
/// column (1, 2, 3) and then down the right column (4, 5, 6).
const CELL_ROWS: [(u8, u8); 3] = [(1, 4), (2, 5), (3, 6)];

/// Six-dot braille for the letters a to z.
#[derive(Debug, Clone, Copy, Default)]
pub struct Braille;

fn raised_dots(c: char) -> Option<&'static [u8]> {
    let dots: &'static [u8] = match c.to_ascii_uppercase() {
        'A' => &[1],
        'B' => &[1, 2],
        'C' => &[1, 4],
        'D' => &[1, 4, 5],
        'E' => &[1, 5],
        'F' => &[1, 2, 4],
        'G' => &[1, 2, 4, 5],
        'H' => &[1, 2, 5],
        'I' => &[2, 4],
        'J' => &[2, 4, 5],
        'K' => &[1, 3],
        'L' => &[1, 2, 3],
        'M' => &[1, 3, 4],
        'N' => &[1, 3, 4, 5],
        'O' => &[1, 3, 5],
        'P' => &[1, 2, 3, 4],
        'Q' => &[1, 2, 3, 4, 5],
        'R' => &[1, 2, 3, 5],
        'S' => &[2, 3, 4],
        'T' => &[2, 3, 4, 5],
        'U' => &[1, 3, 6],
        'V' => &[1, 2, 3, 6],
        'W' => &[2, 4, 5, 6],
        'X' => &[1, 3, 4, 6],
        'Y' => &[1, 3, 4, 5, 6],
        'Z' => &[1, 3, 5, 6],
        _ => return None,
    };
    Some(dots)
}

impl Encoder for Braille {
    fn height(&self) -> usize {
        CELL_ROWS.len()
    }

    fn separator(&self) -> &'static str {
        "  "
    }

    fn supports(&self, c: char) -> bool {
        raised_dots(c).is_some()
    }

    fn render_char(&self, c: char) -> Glyph {
        let Some(dots) = raised_dots(c) else {
            return Glyph::blank(CELL_ROWS.len(), 2);
        };

        let dot = |n: u8| if dots.contains(&n) { RAISED } else { FLAT };
        let rows = CELL_ROWS
            .iter()
            .map(|&(left, right)| [dot(left), dot(right)].iter().collect())
            .collect();
        Glyph::from_rows(rows)
    }
}
