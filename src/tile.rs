//! Tiles as they appear in a GCG log. Uppercase letters are regular tiles,
//! lowercase letters are blanks designated as that letter, `?` is an
//! undesignated blank and `.` marks a square played through.

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::error::GcgError;

/// Marker for a square whose tile was already on the board.
pub const PLAY_THROUGH: char = '.';

/// Marker for an undesignated blank.
pub const BLANK: char = '?';

/// Tile represents a single physical tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    /// A regular tile, always uppercase A-Z.
    Letter(char),

    /// A blank, designated as an uppercase letter once it is played.
    Blank(Option<char>),
}

impl Tile {
    /// `from_char` decodes a single log character into a tile. `.` is not a
    /// tile, see `Glyph`.
    pub fn from_char(c: char) -> Option<Tile> {
        match c {
            'A'..='Z' => Some(Tile::Letter(c)),
            'a'..='z' => Some(Tile::Blank(Some(c.to_ascii_uppercase()))),
            BLANK => Some(Tile::Blank(None)),
            _ => None,
        }
    }

    /// `symbol` returns the character used on the board and in the log.
    pub fn symbol(&self) -> char {
        match self {
            Tile::Letter(c) => *c,
            Tile::Blank(Some(c)) => c.to_ascii_lowercase(),
            Tile::Blank(None) => BLANK,
        }
    }
}

impl Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Glyph is one square of a play: either a freshly placed tile or a square
/// that reuses whatever is already on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Tile(Tile),
    PlayThrough,
}

impl Glyph {
    pub fn tile(&self) -> Option<Tile> {
        match self {
            Glyph::Tile(t) => Some(*t),
            Glyph::PlayThrough => None,
        }
    }
}

/// Word is a parsed run of glyphs, e.g. a placement (`.POTTIER`), an
/// exchange (`UVWW`) or a revealed rack (`AEG?`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Word {
    glyphs: Vec<Glyph>,
}

impl Word {
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// `tiles` iterates the tiles this word takes from (or returns to) the bag,
    /// skipping play-through squares.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.glyphs.iter().filter_map(Glyph::tile)
    }
}

impl FromStr for Word {
    type Err = GcgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let glyphs = s
            .chars()
            .map(|c| match c {
                PLAY_THROUGH => Ok(Glyph::PlayThrough),
                _ => Tile::from_char(c).map(Glyph::Tile).ok_or(GcgError::Tile {
                    tile: c,
                    word: s.to_string(),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Word { glyphs })
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for glyph in &self.glyphs {
            match glyph {
                Glyph::Tile(t) => write!(f, "{}", t)?,
                Glyph::PlayThrough => write!(f, "{}", PLAY_THROUGH)?,
            }
        }
        Ok(())
    }
}
