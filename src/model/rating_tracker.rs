use indexmap::IndexMap;
use serde::Serialize;

use crate::{
    error::ProcessorError,
    model::structures::player_rating::PlayerRating,
};

/// One row of the exported ranking table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RankedPlayer {
    pub position: usize,
    pub name: String,
    pub rating: i32,
    pub games: u32,
}

/// The rating table shared by both halves of the pipeline: the rating engine
/// writes it, the enumerator and the export read it.
///
/// Players are kept in registration order; that order is the documented
/// tie-break when two players sit on the same rating in the export.
#[derive(Debug, Default)]
pub struct RatingTracker {
    table: IndexMap<String, PlayerRating>,
}

impl RatingTracker {
    pub fn new() -> RatingTracker {
        RatingTracker { table: IndexMap::new() }
    }

    /// Registers a player at the league default. Re-registering an existing
    /// name is a no-op, so rosters can be re-read safely.
    pub fn register(&mut self, name: &str) {
        if !self.table.contains_key(name) {
            self.table.insert(name.to_string(), PlayerRating::new(name));
        }
    }

    pub fn insert_or_update(&mut self, rating: PlayerRating) {
        self.table.insert(rating.name.clone(), rating);
    }

    pub fn get_rating(&self, name: &str) -> Option<&PlayerRating> {
        self.table.get(name)
    }

    /// Applies a signed rating delta and counts the game. The caller derives
    /// the delta from the pre-increment games count; this method performs the
    /// one rating-plus-counter update the engine contract requires.
    pub fn apply_match_delta(&mut self, name: &str, delta: i32) -> Result<(), ProcessorError> {
        let player = self
            .table
            .get_mut(name)
            .ok_or_else(|| ProcessorError::UnknownPlayer(name.to_string()))?;

        player.rating += delta;
        player.games_played += 1;

        Ok(())
    }

    pub fn players(&self) -> impl Iterator<Item = &PlayerRating> + '_ {
        self.table.values()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Deterministic ranking view: every player with at least `min_games`
    /// games, best rating first, 1-based positions. The sort is stable, so
    /// rating ties keep registration order.
    pub fn ranking(&self, min_games: u32) -> Vec<RankedPlayer> {
        let mut eligible: Vec<&PlayerRating> = self
            .table
            .values()
            .filter(|p| p.games_played >= min_games)
            .collect();
        eligible.sort_by(|a, b| b.rating.cmp(&a.rating));

        eligible
            .into_iter()
            .enumerate()
            .map(|(index, player)| RankedPlayer {
                position: index + 1,
                name: player.name.clone(),
                rating: player.rating,
                games: player.games_played,
            })
            .collect()
    }
}
