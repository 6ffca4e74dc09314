use super::{Encoder, Glyph};

/// Side length of the square drawing grid.
pub const GRID_SIZE: usize = 5;
/// Row and column of the signaler.
pub const CENTER: usize = GRID_SIZE / 2;
pub const SIGNALER: char = 'O';
/// Cells covered by each flag arm, counted outward from the signaler.
const ARM_LENGTH: usize = 2;

/// Direction of one arm, clockwise starting from straight down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagPosition {
    Down,
    DownLeft,
    Left,
    UpLeft,
    Up,
    UpRight,
    Right,
    DownRight,
}

impl FlagPosition {
    /// Unit step (row, column) away from the signaler.
    fn step(self) -> (isize, isize) {
        match self {
            FlagPosition::Down => (1, 0),
            FlagPosition::DownLeft => (1, -1),
            FlagPosition::Left => (0, -1),
            FlagPosition::UpLeft => (-1, -1),
            FlagPosition::Up => (-1, 0),
            FlagPosition::UpRight => (-1, 1),
            FlagPosition::Right => (0, 1),
            FlagPosition::DownRight => (1, 1),
        }
    }

    fn stroke(self) -> char {
        match self {
            FlagPosition::Down | FlagPosition::Up => '|',
            FlagPosition::DownLeft | FlagPosition::UpRight => '/',
            FlagPosition::Left | FlagPosition::Right => '-',
            FlagPosition::UpLeft | FlagPosition::DownRight => '\\',
        }
    }

    /// Grid cells painted by this arm.
    pub fn cells(self) -> impl Iterator<Item = (usize, usize)> {
        let (dr, dc) = self.step();
        (1..=ARM_LENGTH as isize).map(move |n| {
            (
                (CENTER as isize + dr * n) as usize,
                (CENTER as isize + dc * n) as usize,
            )
        })
    }
}

/// Two-flag semaphore drawn on a 5x5 grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct Semaphore;

/// Flag pair (left hand, right hand) for a letter.
pub fn flags(c: char) -> Option<(FlagPosition, FlagPosition)> {
    use FlagPosition::*;

    let pair = match c.to_ascii_uppercase() {
        'A' => (Down, DownLeft),
        'B' => (Down, Left),
        'C' => (Down, UpLeft),
        'D' => (Down, Up),
        'E' => (Down, UpRight),
        'F' => (Down, Right),
        'G' => (Down, DownRight),
        'H' => (DownLeft, Left),
        'I' => (DownLeft, UpLeft),
        'J' => (Up, Right),
        'K' => (DownLeft, Up),
        'L' => (DownLeft, UpRight),
        'M' => (DownLeft, Right),
        'N' => (DownLeft, DownRight),
        'O' => (Left, UpLeft),
        'P' => (Left, Up),
        'Q' => (Left, UpRight),
        'R' => (Left, Right),
        'S' => (Left, DownRight),
        'T' => (UpLeft, Up),
        'U' => (UpLeft, UpRight),
        'V' => (Up, DownRight),
        'W' => (UpRight, Right),
        'X' => (UpRight, DownRight),
        'Y' => (UpLeft, Right),
        'Z' => (Right, DownRight),
        _ => return None,
    };
    Some(pair)
}

impl Encoder for Semaphore {
    fn height(&self) -> usize {
        GRID_SIZE
    }

    fn separator(&self) -> &'static str {
        "  "
    }

    fn supports(&self, c: char) -> bool {
        flags(c).is_some()
    }

    fn render_char(&self, c: char) -> Glyph {
        let Some((left, right)) = flags(c) else {
            return Glyph::blank(GRID_SIZE, GRID_SIZE);
        };

        let mut grid = [[' '; GRID_SIZE]; GRID_SIZE];
        grid[CENTER][CENTER] = SIGNALER;
        for arm in [left, right] {
            for (row, col) in arm.cells() {
                grid[row][col] = arm.stroke();
            }
        }

        Glyph::from_rows(grid.iter().map(|row| row.iter().collect()).collect())
    }
}
