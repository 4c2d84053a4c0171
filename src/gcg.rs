//! GCG line recognition. Each log line is classified once into the
//! records it carries; the replay engine then applies them in order.
//!
//! Recognized shapes:
//!
//!   #player1 Matt_G Matt Graham        seat declaration
//!   >Matt_G: DEIINOT 8B EDITION +68 68  placement
//!   >Matt_G: AEGUVWW -UVWW +0 384       exchange
//!   >Matt_G: AEGHLNR - +0 384           pass
//!   >Josh: EIOPRTT -- -107 0            lost challenge
//!   #rack1 AEGHLNR                      rack reveal
//!
//! Every line starting with `>` and ending in digits also carries a running
//! total for the named player.

use log::*;

use crate::board::Position;
use crate::error::GcgError;
use crate::players::PLAYER_COUNT;
use crate::tile::{Word, BLANK, PLAY_THROUGH};

/// Declaration binds a seat to a nickname.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub index: usize,
    pub name: String,
}

/// Total is a running or final score for a player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Total {
    pub player: String,
    pub score: u32,
}

/// Scores on move lines are kept as written (`+68`, `-107`) and only echoed
/// back in the last play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub player: String,
    pub position: Position,
    pub word: Word,
    pub score: String,
    pub total: String,
}

/// Exchange keeps the returned tiles as written. They may be letters
/// (`-UVWW`) or just a count (`-7`), and never touch the bag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    pub player: String,
    pub tiles: String,
    pub score: String,
    pub total: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pass {
    pub player: String,
    pub score: String,
    pub total: String,
}

/// Event is a line that changes the game beyond the scoreboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Placement(Placement),
    Exchange(Exchange),
    Pass(Pass),
    LostChallenge { player: String },
    RackReveal { tiles: Word },
}

/// Line holds everything recognized on a single log line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    pub declaration: Option<Declaration>,
    pub total: Option<Total>,
    pub event: Option<Event>,
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_rack(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| is_word_char(c) || c == BLANK)
}

fn leading_digits(s: &str) -> Option<&str> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    match &s[..end] {
        "" => None,
        digits => Some(digits),
    }
}

fn declaration(line: &str) -> Option<Declaration> {
    (0..PLAYER_COUNT).find_map(|index| {
        let tag = format!("#player{}", index + 1);
        line.match_indices(tag.as_str()).find_map(|(at, _)| {
            let rest = &line[at + tag.len()..];
            if !rest.starts_with(char::is_whitespace) {
                return None;
            }
            rest.split_whitespace().next().map(|name| Declaration {
                index,
                name: name.to_string(),
            })
        })
    })
}

// The player name runs from `>` to the first colon, or without a colon to the
// non-digit right before the trailing number.
fn total(line: &str) -> Option<Total> {
    let body = line.strip_prefix('>')?;
    let digits = body.trim_end_matches(|c: char| c.is_ascii_digit()).len();
    if digits == body.len() {
        return None;
    }

    let (boundary, _) = body[..digits].char_indices().last()?;
    let head = &body[..boundary];
    let name = head.split(':').next().unwrap_or_default();
    if name.is_empty() {
        return None;
    }

    let score = match body[digits..].parse() {
        Ok(score) => score,
        Err(_) => {
            warn!("ignoring out of range total in: {}", line);
            return None;
        }
    };
    Some(Total {
        player: name.trim().to_string(),
        score,
    })
}

// Splits `>name: tokens...` into the trimmed name and whitespace tokens.
fn move_parts(line: &str) -> Option<(String, Vec<&str>)> {
    let body = line.strip_prefix('>')?;
    let (name, rest) = body.split_once(':')?;
    if name.is_empty() || !rest.starts_with(char::is_whitespace) {
        return None;
    }

    let tokens = rest.split_whitespace().collect::<Vec<_>>();
    if !tokens.first().is_some_and(|rack| is_rack(rack)) {
        return None;
    }
    Some((name.trim().to_string(), tokens))
}

fn move_event(line: &str) -> Result<Option<Event>, GcgError> {
    let Some((player, tokens)) = move_parts(line) else {
        return Ok(None);
    };

    match tokens[1..] {
        [position, word, score, total, ..]
            if position.chars().all(is_word_char)
                && word.chars().all(|c| is_word_char(c) || c == PLAY_THROUGH) =>
        {
            Ok(Some(Event::Placement(Placement {
                player,
                position: position.parse()?,
                word: word.parse()?,
                score: score.to_string(),
                total: total.to_string(),
            })))
        }
        ["-", score, total, ..] => Ok(leading_digits(total).map(|total| {
            Event::Pass(Pass {
                player,
                score: score.to_string(),
                total: total.to_string(),
            })
        })),
        [tiles, ..] if tiles.starts_with("--") => Ok(Some(Event::LostChallenge { player })),
        [tiles, score, total, ..] if tiles.strip_prefix('-').is_some_and(is_rack) => {
            Ok(leading_digits(total).map(|total| {
                Event::Exchange(Exchange {
                    player,
                    tiles: tiles[1..].to_string(),
                    score: score.to_string(),
                    total: total.to_string(),
                })
            }))
        }
        _ => Ok(None),
    }
}

fn rack_reveal(line: &str) -> Result<Option<Event>, GcgError> {
    let Some(rest) = line.strip_prefix("#rack") else {
        return Ok(None);
    };

    let mut chars = rest.chars();
    let (Some(seat), Some(space)) = (chars.next(), chars.next()) else {
        return Ok(None);
    };
    if !seat.is_ascii_digit() || !space.is_whitespace() {
        return Ok(None);
    }

    let rest = chars.as_str();
    let end = rest
        .find(|c: char| !(is_word_char(c) || c == BLANK))
        .unwrap_or(rest.len());
    if end == 0 {
        return Ok(None);
    }

    let tiles = rest[..end].parse::<Word>()?;
    Ok(Some(Event::RackReveal { tiles }))
}

/// `parse_line` classifies one log line. Unrecognized lines yield an empty
/// `Line`; malformed positions and tiles are errors.
pub fn parse_line(line: &str) -> Result<Line, GcgError> {
    let event = match move_event(line)? {
        Some(event) => Some(event),
        None => rack_reveal(line)?,
    };

    Ok(Line {
        declaration: declaration(line),
        total: total(line),
        event,
    })
}
