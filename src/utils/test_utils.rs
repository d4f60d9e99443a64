//! Deterministic generators for tests and benches.
//!
//! Randomness is always drawn from an explicitly injected, seeded RNG so a
//! generated league is identical on every run.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::model::structures::{match_record::MatchRecord, player_rating::PlayerRating, team::Team};

pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

pub fn generate_player_rating(name: &str, rating: i32, games_played: u32) -> PlayerRating {
    PlayerRating {
        name: name.to_string(),
        rating,
        games_played,
    }
}

pub fn generate_match_record(team1: (&str, &str), team2: (&str, &str), score1: i32, score2: i32) -> MatchRecord {
    MatchRecord::new(
        Team::new(team1.0, team1.1),
        Team::new(team2.0, team2.1),
        score1,
        score2,
    )
}

/// `count` players named P1..Pcount with ratings spread around the default
/// and no games on record.
pub fn generate_roster(count: usize, rng: &mut impl Rng) -> Vec<PlayerRating> {
    (1..=count)
        .map(|i| generate_player_rating(&format!("P{i}"), rng.random_range(1500..=2100), 0))
        .collect()
}

/// A reproducible race-to-8 match history over `roster`: each record draws
/// four distinct players and gives the winning side a score of 8.
pub fn generate_history(roster: &[PlayerRating], matches: usize, rng: &mut impl Rng) -> Vec<MatchRecord> {
    assert!(roster.len() >= 4, "history generation needs at least 4 players");

    let mut records = Vec::with_capacity(matches);
    let mut indices: Vec<usize> = (0..roster.len()).collect();

    for _ in 0..matches {
        // Partial Fisher-Yates: the first four slots become the participants
        for slot in 0..4 {
            let pick = rng.random_range(slot..indices.len());
            indices.swap(slot, pick);
        }

        let loser_score = rng.random_range(0..8);
        let (score1, score2) = if rng.random_bool(0.5) {
            (8, loser_score)
        } else {
            (loser_score, 8)
        };

        records.push(MatchRecord::new(
            Team::new(roster[indices[0]].name.as_str(), roster[indices[1]].name.as_str()),
            Team::new(roster[indices[2]].name.as_str(), roster[indices[3]].name.as_str()),
            score1,
            score2,
        ));
    }

    records
}
