use derive_more::{Display, Error};

/// GcgError covers the input-shape failures that abort a replay: malformed
/// positions and tiles, unresolvable players, and unreadable definitions.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GcgError {
    #[display("malformed position: {token:?}")]
    Position { token: String },

    #[display("play at {position} with {len} tiles runs off the board")]
    OffBoard { position: String, len: usize },

    #[display("invalid tile {tile:?} in {word:?}")]
    Tile { tile: char, word: String },

    #[display("player index out of range: {index}")]
    PlayerIndex { index: usize },

    #[display("could not find index for player: {name}")]
    UnknownPlayer { name: String },

    #[display("invalid definition: {line}")]
    Definition { line: String },
}
