use itertools::Itertools;

use super::{Encoder, Glyph};

pub const DOT: char = '●';
pub const DASH: char = '━';

/// Gap between symbols of one letter.
const SYMBOL_GAP: &str = " ";
/// Gap between letters; wide enough to read as a pause.
const LETTER_GAP: &str = "     ";

/// International Morse code, letters and digits.
#[derive(Debug, Clone, Copy, Default)]
pub struct Morse;

fn pattern(c: char) -> Option<&'static str> {
    let code = match c.to_ascii_uppercase() {
        'A' => ".-",
        'B' => "-...",
        'C' => "-.-.",
        'D' => "-..",
        'E' => ".",
        'F' => "..-.",
        'G' => "--.",
        'H' => "....",
        'I' => "..",
        'J' => ".---",
        'K' => "-.-",
        'L' => ".-..",
        'M' => "--",
        'N' => "-.",
        'O' => "---",
        'P' => ".--.",
        'Q' => "--.-",
        'R' => ".-.",
        'S' => "...",
        'T' => "-",
        'U' => "..-",
        'V' => "...-",
        'W' => ".--",
        'X' => "-..-",
        'Y' => "-.--",
        'Z' => "--..",
        '0' => "-----",
        '1' => ".----",
        '2' => "..---",
        '3' => "...--",
        '4' => "....-",
        '5' => ".....",
        '6' => "-....",
        '7' => "--...",
        '8' => "---..",
        '9' => "----.",
        _ => return None,
    };
    Some(code)
}

impl Encoder for Morse {
    fn height(&self) -> usize {
        1
    }

    fn separator(&self) -> &'static str {
        LETTER_GAP
    }

    fn supports(&self, c: char) -> bool {
        pattern(c).is_some()
    }

    fn render_char(&self, c: char) -> Glyph {
        match pattern(c) {
            Some(code) => {
                let row = code
                    .chars()
                    .map(|s| if s == '.' { DOT } else { DASH })
                    .join(SYMBOL_GAP);
                Glyph::from_rows(vec![row])
            }
            None => Glyph::blank(1, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(c: char) -> String {
        Morse.render_char(c).rows()[0].clone()
    }

    #[test]
    fn encodes_single_letters() {
        assert_eq!(encode('A'), format!("{DOT} {DASH}"));
        assert_eq!(encode('a'), format!("{DOT} {DASH}"));
        assert_eq!(encode('E'), DOT.to_string());
        assert_eq!(encode('T'), DASH.to_string());
        assert_eq!(encode('S'), format!("{DOT} {DOT} {DOT}"));
        assert_eq!(encode('O'), format!("{DASH} {DASH} {DASH}"));
    }

    #[test]
    fn encodes_digits() {
        assert_eq!(encode('1'), format!("{DOT} {DASH} {DASH} {DASH} {DASH}"));
        assert_eq!(encode('0'), format!("{DASH} {DASH} {DASH} {DASH} {DASH}"));
        assert!(Morse.supports('7'));
    }

    #[test]
    fn unknown_characters_are_blank() {
        assert_eq!(encode('!'), "");
        assert_eq!(encode(' '), "");
        assert!(!Morse.supports('#'));
    }

    #[test]
    fn sos_uses_wide_letter_gap() {
        let s = format!("{DOT} {DOT} {DOT}");
        let o = format!("{DASH} {DASH} {DASH}");
        assert_eq!(
            Morse.display_lines("SOS"),
            vec![format!("{s}     {o}     {s}")]
        );
    }

    #[test]
    fn spaces_inside_input_are_skipped() {
        let a = encode('A');
        let b = encode('B');
        assert_eq!(Morse.display_lines("A B"), vec![format!("{a}     {b}")]);
    }

    #[test]
    fn table_covers_letters_and_digits() {
        let supported = ('A'..='Z')
            .chain('0'..='9')
            .filter(|c| Morse.supports(*c))
            .count();
        assert_eq!(supported, 36);
    }
}
