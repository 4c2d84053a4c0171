//! The tile bag tracks every tile not yet seen by the viewer: tiles still in
//! the bag plus tiles hidden on the opponent's rack.

use std::str::FromStr;

use log::*;
use serde::{Deserialize, Serialize};

use crate::tile::{Tile, Word, BLANK};

/// Initial tile distribution for A-Z followed by the blanks.
const DISTRIBUTION: [u32; 27] = [
    9, 2, 2, 4, 12, 2, 3, 2, 9, 1, 1, 4, 2, 6, 8, 2, 1, 6, 4, 6, 4, 2, 2, 1, 2, 1, 2,
];

const BLANK_INDEX: usize = 26;

/// VowelSet decides which letters count as vowels in the unseen summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VowelSet {
    /// A, E, I, O and U.
    #[default]
    Standard,

    /// A, E, I, O, U and Y.
    WithY,
}

impl VowelSet {
    pub fn contains(&self, letter: char) -> bool {
        match letter {
            'A' | 'E' | 'I' | 'O' | 'U' => true,
            'Y' => *self == VowelSet::WithY,
            _ => false,
        }
    }
}

impl FromStr for VowelSet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(VowelSet::Standard),
            "with-y" => Ok(VowelSet::WithY),
            _ => Err(format!("unknown vowel set {:?}, expected standard or with-y", s)),
        }
    }
}

/// UnseenCounts summarizes the unseen pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnseenCounts {
    pub tiles: u32,
    pub vowels: u32,
}

impl UnseenCounts {
    pub fn consonants(&self) -> u32 {
        self.tiles - self.vowels
    }
}

/// Bag is a fixed-composition multiset of tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bag {
    counts: [u32; 27],
    vowels: VowelSet,
}

impl Default for Bag {
    fn default() -> Self {
        Bag::new(VowelSet::default())
    }
}

fn index_of(tile: Tile) -> usize {
    match tile {
        Tile::Letter(c) => (c as u8 - b'A') as usize,
        Tile::Blank(_) => BLANK_INDEX,
    }
}

fn symbol_of(index: usize) -> char {
    if index == BLANK_INDEX {
        BLANK
    } else {
        (b'A' + index as u8) as char
    }
}

impl Bag {
    /// `new` returns a full bag.
    pub fn new(vowels: VowelSet) -> Bag {
        Bag {
            counts: DISTRIBUTION,
            vowels,
        }
    }

    /// `count` returns the number of unseen tiles for a symbol (`A`-`Z` or `?`).
    #[cfg(test)]
    pub fn count(&self, symbol: char) -> u32 {
        match symbol {
            'A'..='Z' => self.counts[(symbol as u8 - b'A') as usize],
            BLANK => self.counts[BLANK_INDEX],
            _ => 0,
        }
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// `remove` takes the newly placed tiles of `word` out of the unseen pool.
    /// Designated blanks come out of the blank count, not their letter's.
    pub fn remove(&mut self, word: &Word) {
        for tile in word.tiles() {
            let i = index_of(tile);
            match self.counts[i].checked_sub(1) {
                Some(n) => self.counts[i] = n,
                None => warn!("no unseen {} left to remove for {}", symbol_of(i), word),
            }
        }
    }

    /// `add` returns the tiles of `word` to the pool, e.g. after a lost challenge.
    pub fn add(&mut self, word: &Word) {
        for tile in word.tiles() {
            let i = index_of(tile);
            if self.counts[i] >= DISTRIBUTION[i] {
                warn!("bag already holds every {} while adding {}", symbol_of(i), word);
                continue;
            }
            self.counts[i] += 1;
        }
    }

    pub fn unseen_counts(&self) -> UnseenCounts {
        let vowels = self
            .counts
            .iter()
            .enumerate()
            .filter(|(i, _)| self.vowels.contains(symbol_of(*i)))
            .map(|(_, n)| n)
            .sum::<u32>();

        UnseenCounts {
            tiles: self.total(),
            vowels,
        }
    }

    /// `as_display_string` lists every unseen tile, one run per symbol, in
    /// A-Z then blank order, e.g. `AAAA BB ?`.
    pub fn as_display_string(&self) -> String {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, n)| **n > 0)
            .map(|(i, n)| symbol_of(i).to_string().repeat(*n as usize))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
