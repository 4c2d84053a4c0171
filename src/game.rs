//! Game replays a GCG log against a fresh board, bag and scoreboard, and
//! renders the resulting snapshot for display.

use std::str::FromStr;

use log::*;
use serde::{Deserialize, Serialize};

use crate::bag::{Bag, VowelSet};
use crate::board::Board;
use crate::error::GcgError;
use crate::gcg::{self, Event, Exchange, Pass, Placement};
use crate::lexicon::Lexicon;
use crate::players::{display_name, Players};

const LAST_PLAY_PREFIX: &str = "     LAST PLAY: ";

/// PlayStyle selects how the last play is described.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlayStyle {
    /// `     LAST PLAY: Matt G 8B EDITION# +68 68 | a definition`
    #[default]
    Annotated,

    /// `Matt G: 8B EDITION# +68 68`
    Bare,
}

impl FromStr for PlayStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "annotated" => Ok(PlayStyle::Annotated),
            "bare" => Ok(PlayStyle::Bare),
            _ => Err(format!("unknown play style {:?}, expected annotated or bare", s)),
        }
    }
}

/// Move is the most recent move seen in the log.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Move {
    #[default]
    Unspecified,
    Placement(Placement),
    Exchange(Exchange),
    Pass(Pass),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Game {
    players: Players,
    board: Board,
    bag: Bag,
    last_move: Move,

    // The placement a lost challenge would take back.
    retractable: Option<Placement>,
}

fn plural(count: u32, word: &str) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

impl Game {
    pub fn new(vowels: VowelSet) -> Game {
        Game {
            bag: Bag::new(vowels),
            ..Default::default()
        }
    }

    /// `replay` builds the game state from every line of a log.
    pub fn replay<'a>(
        lines: impl IntoIterator<Item = &'a str>,
        vowels: VowelSet,
    ) -> Result<Game, GcgError> {
        let mut game = Game::new(vowels);
        for line in lines {
            game.apply(line)?;
        }
        Ok(game)
    }

    /// `apply` folds a single log line into the game.
    pub fn apply(&mut self, line: &str) -> Result<(), GcgError> {
        let line = gcg::parse_line(line)?;

        if let Some(declaration) = line.declaration {
            if self.players.name(declaration.index)?.is_empty() {
                self.players.set_name(declaration.index, declaration.name)?;
            }
        }

        // Every move line ends in the mover's running total, so this keeps the
        // scoreboard current as well as picking up final scores.
        if let Some(total) = line.total {
            self.players.set_score_of(&total.player, total.score)?;
        }

        match line.event {
            Some(Event::Placement(placement)) => {
                self.board.place(&placement.position, &placement.word)?;
                self.bag.remove(&placement.word);
                self.retractable = Some(placement.clone());
                self.last_move = Move::Placement(placement);
            }
            Some(Event::Exchange(exchange)) => self.last_move = Move::Exchange(exchange),
            Some(Event::Pass(pass)) => self.last_move = Move::Pass(pass),
            Some(Event::LostChallenge { player }) => match self.retractable.take() {
                Some(placement) => {
                    debug!(
                        "{} lost a challenge, taking back {} at {}",
                        player, placement.word, placement.position
                    );
                    self.board.unplace(&placement.position, &placement.word)?;
                    self.bag.add(&placement.word);
                }
                None => warn!("{} lost a challenge with no placement to take back", player),
            },
            Some(Event::RackReveal { tiles }) => self.bag.remove(&tiles),
            None => {}
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn players(&self) -> &Players {
        &self.players
    }

    #[cfg(test)]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub fn bag(&self) -> &Bag {
        &self.bag
    }

    #[cfg(test)]
    pub fn last_move(&self) -> &Move {
        &self.last_move
    }

    /// `scores_string` renders both scores zero-padded, e.g. `068 - 000`.
    pub fn scores_string(&self) -> Result<String, GcgError> {
        Ok(format!(
            "{:03} - {:03}",
            self.players.score(0)?,
            self.players.score(1)?
        ))
    }

    pub fn p1_score_string(&self) -> Result<String, GcgError> {
        Ok(format!("{:>3}", self.players.score(0)?))
    }

    pub fn p2_score_string(&self) -> Result<String, GcgError> {
        Ok(format!("{:>3}", self.players.score(1)?))
    }

    pub fn unseen_tiles_string(&self) -> String {
        self.bag.as_display_string()
    }

    /// `unseen_count_string` renders the unseen summary:
    ///
    ///   43 tiles
    ///   19 vowels | 24 consonants
    pub fn unseen_count_string(&self) -> String {
        let counts = self.bag.unseen_counts();
        format!(
            "{} {}\n{:>2} {} | {:>2} {}",
            counts.tiles,
            plural(counts.tiles, "tile"),
            counts.vowels,
            plural(counts.vowels, "vowel"),
            counts.consonants(),
            plural(counts.consonants(), "consonant"),
        )
    }

    /// `last_play_string` describes the last move, or returns an empty string
    /// if no move has been made yet.
    pub fn last_play_string(&self, lexicon: &Lexicon, style: PlayStyle) -> Result<String, GcgError> {
        let s = match &self.last_move {
            Move::Unspecified => return Ok(String::new()),
            Move::Placement(p) => {
                let word = self.board.filled_in_word(&p.position, &p.word)?;
                let key = word
                    .chars()
                    .filter(char::is_ascii_alphabetic)
                    .collect::<String>()
                    .to_ascii_uppercase();
                let player = display_name(&p.player);
                let markers = lexicon.markers(&key);

                match style {
                    PlayStyle::Annotated => format!(
                        "{}{} {} {}{} {} {} | {}",
                        LAST_PLAY_PREFIX,
                        player,
                        p.position,
                        word,
                        markers,
                        p.score,
                        p.total,
                        lexicon.definition(&key)
                    ),
                    PlayStyle::Bare => format!(
                        "{}: {} {}{} {} {}",
                        player, p.position, word, markers, p.score, p.total
                    ),
                }
            }
            Move::Exchange(e) => match style {
                PlayStyle::Annotated => format!(
                    "{}{} exch {} {} {}",
                    LAST_PLAY_PREFIX,
                    display_name(&e.player),
                    e.tiles,
                    e.score,
                    e.total
                ),
                PlayStyle::Bare => format!(
                    "{}: exch {} {} {}",
                    display_name(&e.player),
                    e.tiles,
                    e.score,
                    e.total
                ),
            },
            Move::Pass(p) => match style {
                PlayStyle::Annotated => format!(
                    "{}{} pass {} {}",
                    LAST_PLAY_PREFIX,
                    display_name(&p.player),
                    p.score,
                    p.total
                ),
                PlayStyle::Bare => {
                    format!("{}: pass {} {}", display_name(&p.player), p.score, p.total)
                }
            },
        };
        Ok(s)
    }
}
