//! Board holds the tiles placed so far on the 15x15 grid.

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::error::GcgError;
use crate::tile::{Glyph, Tile, Word};

pub const BOARD_SIZE: usize = 15;

/// Direction of a play, implied by the shape of its position token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// `8B`: row first, the play runs along the row.
    Across,

    /// `B8`: column first, the play runs down the column.
    Down,
}

/// Position is the starting square and direction of a play. Rows and
/// columns are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

impl Position {
    /// `square` returns the coordinates `offset` squares along the play.
    pub fn square(&self, offset: usize) -> (usize, usize) {
        match self.direction {
            Direction::Across => (self.row, self.col + offset),
            Direction::Down => (self.row + offset, self.col),
        }
    }
}

fn parse_row(digits: &str) -> Option<usize> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    match digits.parse::<usize>().ok()? {
        n @ 1..=BOARD_SIZE => Some(n - 1),
        _ => None,
    }
}

fn parse_col(letter: &str) -> Option<usize> {
    let mut chars = letter.chars();
    match (chars.next(), chars.next()) {
        (Some(c @ 'A'..='O'), None) => Some((c as u8 - b'A') as usize),
        _ => None,
    }
}

impl FromStr for Position {
    type Err = GcgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GcgError::Position {
            token: s.to_string(),
        };

        let first = s.chars().next().ok_or_else(invalid)?;
        let (row, col, direction) = if first.is_ascii_digit() {
            // One or two row digits, then exactly one column letter.
            let split = s
                .char_indices()
                .take(2)
                .take_while(|(_, c)| c.is_ascii_digit())
                .last()
                .map(|(i, c)| i + c.len_utf8())
                .ok_or_else(invalid)?;
            let (row, col) = s.split_at(split);
            (parse_row(row), parse_col(col), Direction::Across)
        } else {
            let (col, row) = s.split_at(first.len_utf8());
            (parse_row(row), parse_col(col), Direction::Down)
        };

        match (row, col) {
            (Some(row), Some(col)) => Ok(Position {
                row,
                col,
                direction,
            }),
            _ => Err(invalid()),
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let col = (b'A' + self.col as u8) as char;
        match self.direction {
            Direction::Across => write!(f, "{}{}", self.row + 1, col),
            Direction::Down => write!(f, "{}{}", col, self.row + 1),
        }
    }
}

/// Board is the grid of placed tiles, empty at the start of every replay.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Option<Tile>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// `cell` returns the tile at a 0-based square, if any.
    #[cfg(test)]
    pub fn cell(&self, row: usize, col: usize) -> Option<Tile> {
        self.cells.get(row)?.get(col).copied().flatten()
    }

    fn check_fits(position: &Position, word: &Word) -> Result<(), GcgError> {
        if word.is_empty() {
            return Ok(());
        }
        let (row, col) = position.square(word.len() - 1);
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(GcgError::OffBoard {
                position: position.to_string(),
                len: word.len(),
            });
        }
        Ok(())
    }

    /// `place` writes every newly placed tile of `word`. Play-through squares
    /// keep the tile that is already there.
    pub fn place(&mut self, position: &Position, word: &Word) -> Result<(), GcgError> {
        Board::check_fits(position, word)?;
        for (i, glyph) in word.glyphs().iter().enumerate() {
            if let Glyph::Tile(tile) = glyph {
                let (row, col) = position.square(i);
                self.cells[row][col] = Some(*tile);
            }
        }
        Ok(())
    }

    /// `unplace` clears the squares `place` wrote for the same play.
    pub fn unplace(&mut self, position: &Position, word: &Word) -> Result<(), GcgError> {
        Board::check_fits(position, word)?;
        for (i, glyph) in word.glyphs().iter().enumerate() {
            if let Glyph::Tile(_) = glyph {
                let (row, col) = position.square(i);
                self.cells[row][col] = None;
            }
        }
        Ok(())
    }

    /// `filled_in_word` spells out the whole word formed by a play, reading
    /// play-through squares from the board and wrapping each run of them in
    /// parentheses: `.POTTIER` over an existing S renders as `(S)POTTIER`.
    pub fn filled_in_word(&self, position: &Position, word: &Word) -> Result<String, GcgError> {
        Board::check_fits(position, word)?;

        let glyphs = word.glyphs();
        let mut s = String::new();
        for (i, glyph) in glyphs.iter().enumerate() {
            let next = glyphs.get(i + 1);
            match glyph {
                Glyph::PlayThrough => {
                    if i == 0 {
                        s.push('(');
                    }
                    let (row, col) = position.square(i);
                    if let Some(tile) = self.cells[row][col] {
                        s.push(tile.symbol());
                    }
                    if next != Some(&Glyph::PlayThrough) {
                        s.push(')');
                    }
                }
                Glyph::Tile(tile) => {
                    s.push(tile.symbol());
                    if next == Some(&Glyph::PlayThrough) {
                        s.push('(');
                    }
                }
            }
        }
        Ok(s)
    }
}
