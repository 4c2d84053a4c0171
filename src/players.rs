use std::collections::HashMap;

use crate::error::GcgError;

pub const PLAYER_COUNT: usize = 2;

/// Players is the registry of the two seats in a game, addressed either by
/// seat index or by the nickname used in the log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Players {
    names: [String; PLAYER_COUNT],
    scores: [u32; PLAYER_COUNT],
    indexes: HashMap<String, usize>,
}

/// `display_name` renders a log nickname for output, e.g. `Matt_G` as `Matt G`.
pub fn display_name(name: &str) -> String {
    name.replace('_', " ")
}

fn check_index(index: usize) -> Result<usize, GcgError> {
    if index < PLAYER_COUNT {
        Ok(index)
    } else {
        Err(GcgError::PlayerIndex { index })
    }
}

impl Players {
    /// `set_name` binds a seat to a nickname. Callers only bind a seat once.
    pub fn set_name(&mut self, index: usize, name: impl Into<String>) -> Result<(), GcgError> {
        let index = check_index(index)?;
        let name = name.into();
        self.indexes.insert(name.clone(), index);
        self.names[index] = name;
        Ok(())
    }

    /// `name` returns the nickname bound to a seat, empty if none yet.
    pub fn name(&self, index: usize) -> Result<&str, GcgError> {
        Ok(&self.names[check_index(index)?])
    }

    pub fn index_of(&self, name: &str) -> Result<usize, GcgError> {
        self.indexes
            .get(name)
            .copied()
            .ok_or_else(|| GcgError::UnknownPlayer {
                name: name.to_string(),
            })
    }

    pub fn score(&self, index: usize) -> Result<u32, GcgError> {
        Ok(self.scores[check_index(index)?])
    }

    #[cfg(test)]
    pub fn score_of(&self, name: &str) -> Result<u32, GcgError> {
        self.score(self.index_of(name)?)
    }

    /// `set_score` overwrites a seat's score.
    pub fn set_score(&mut self, index: usize, score: u32) -> Result<(), GcgError> {
        self.scores[check_index(index)?] = score;
        Ok(())
    }

    pub fn set_score_of(&mut self, name: &str, score: u32) -> Result<(), GcgError> {
        let index = self.index_of(name)?;
        self.set_score(index, score)
    }
}
