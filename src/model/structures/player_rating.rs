use serde::{Deserialize, Serialize};

use crate::model::constants::DEFAULT_RATING;

/// A player's current skill estimate and accumulated experience.
///
/// Only the rating engine mutates these; everything downstream reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRating {
    pub name: String,
    pub rating: i32,
    pub games_played: u32,
}

impl PlayerRating {
    /// A freshly registered player: default rating, no games on record.
    pub fn new(name: impl Into<String>) -> PlayerRating {
        PlayerRating {
            name: name.into(),
            rating: DEFAULT_RATING,
            games_played: 0,
        }
    }
}
