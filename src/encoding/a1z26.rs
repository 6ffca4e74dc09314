use super::{Encoder, Glyph};

/// Letters as their 1-based alphabet positions (A=1 ... Z=26).
#[derive(Debug, Clone, Copy, Default)]
pub struct A1z26;

impl Encoder for A1z26 {
    fn height(&self) -> usize {
        1
    }

    fn separator(&self) -> &'static str {
        " "
    }

    fn supports(&self, c: char) -> bool {
        c.is_ascii_alphabetic()
    }

    fn render_char(&self, c: char) -> Glyph {
        if !self.supports(c) {
            return Glyph::blank(1, 0);
        }
        let position = c.to_ascii_uppercase() as u8 - b'A' + 1;
        Glyph::from_rows(vec![position.to_string()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(c: char) -> String {
        A1z26.render_char(c).rows()[0].clone()
    }

    #[test]
    fn letters_map_to_positions() {
        assert_eq!(encode('A'), "1");
        assert_eq!(encode('a'), "1");
        assert_eq!(encode('M'), "13");
        assert_eq!(encode('Z'), "26");
    }

    #[test]
    fn non_letters_are_blank() {
        assert_eq!(encode('!'), "");
        assert_eq!(encode(' '), "");
        assert_eq!(encode('1'), "");
    }

    #[test]
    fn words_are_space_separated() {
        assert_eq!(A1z26.display_lines("CAT"), vec!["3 1 20"]);
        assert_eq!(A1z26.display_lines("hello"), vec!["8 5 12 12 15"]);
        assert_eq!(A1z26.display_lines("A B"), vec!["1 2"]);
    }
}
