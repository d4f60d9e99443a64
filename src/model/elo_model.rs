use tracing::{debug, info};

use crate::{
    error::ProcessorError,
    model::{
        constants::{
            CALIBRATION_PHASE_ONE_FACTOR, CALIBRATION_PHASE_ONE_GAMES, CALIBRATION_PHASE_TWO_FACTOR,
            CALIBRATION_PHASE_TWO_GAMES, DEFAULT_TARGET_SCORE, SCORE_DELTA_BETA, TEAM_BALANCE_ALPHA,
        },
        prediction::{expected_score, team_rating},
        rating_tracker::RatingTracker,
        structures::{match_record::MatchRecord, player_rating::PlayerRating, team::Team},
    },
    utils::progress_utils::progress_bar,
};

/// The rating update engine.
///
/// Replays match history in the order supplied and moves every participant's
/// rating by how far the actual score strayed from the expected one. Swings
/// are amplified while a player is still calibrating, which is also why the
/// engine never reorders history: the damping factor keys off how many games
/// a player had on record *before* each match.
pub struct EloModel {
    pub rating_tracker: RatingTracker,
}

impl EloModel {
    pub fn new(initial_ratings: &[PlayerRating]) -> EloModel {
        let mut tracker = RatingTracker::new();
        for rating in initial_ratings {
            tracker.insert_or_update(rating.clone());
        }

        EloModel { rating_tracker: tracker }
    }

    /// A model with every roster name registered at the default rating and an
    /// empty game count.
    pub fn with_roster<I, S>(names: I) -> EloModel
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tracker = RatingTracker::new();
        for name in names {
            tracker.register(name.as_ref());
        }

        EloModel { rating_tracker: tracker }
    }

    /// Processes a batch of records, oldest first.
    ///
    /// The batch aborts on the first record referencing an unregistered
    /// player; nothing from the offending record is applied. Callers that
    /// would rather skip bad records can drive [`EloModel::process_record`]
    /// themselves.
    pub fn process(&mut self, records: &[MatchRecord]) -> Result<(), ProcessorError> {
        let bar = progress_bar(records.len() as u64, "Processing match history");

        for record in records {
            self.process_record(record)?;
            bar.inc(1);
        }
        bar.finish();

        info!(
            matches = records.len(),
            players = self.rating_tracker.len(),
            "match history processed"
        );
        Ok(())
    }

    /// Applies a single match result: every participant's rating and games
    /// count are updated exactly once.
    pub fn process_record(&mut self, record: &MatchRecord) -> Result<(), ProcessorError> {
        // Resolve all four players up front so an unknown name fails the
        // record before any rating has moved.
        let (team1_rating, team1_games) = self.team_state(&record.team1)?;
        let (team2_rating, team2_games) = self.team_state(&record.team2)?;

        let team1_delta = Self::rating_variation(team1_rating, team2_rating, record.score1, record.score2);
        let team2_delta = -team1_delta;

        debug!(
            team1 = %record.team1,
            team2 = %record.team2,
            score1 = record.score1,
            score2 = record.score2,
            team1_delta,
            "applying match result"
        );

        for (team, delta, games) in [
            (&record.team1, team1_delta, team1_games),
            (&record.team2, team2_delta, team2_games),
        ] {
            for (player, games_before) in team.iter().zip(games) {
                let scaled = Self::calibration_scaled_delta(delta, games_before);
                self.rating_tracker.apply_match_delta(player, scaled)?;
            }
        }

        Ok(())
    }

    /// Current team rating plus each member's games count, for the damping
    /// step later on.
    fn team_state(&self, team: &Team) -> Result<(i32, [u32; 2]), ProcessorError> {
        let [first_name, second_name] = team.players();
        let first = self.player(first_name)?;
        let second = self.player(second_name)?;

        Ok((
            team_rating(first.rating, second.rating, TEAM_BALANCE_ALPHA),
            [first.games_played, second.games_played],
        ))
    }

    fn player(&self, name: &str) -> Result<&PlayerRating, ProcessorError> {
        self.rating_tracker
            .get_rating(name)
            .ok_or_else(|| ProcessorError::UnknownPlayer(name.to_string()))
    }

    /// The signed rating swing for team1 (team2 gets the negation): how far
    /// the actual score strayed from the expected one, scaled by beta.
    fn rating_variation(team1_rating: i32, team2_rating: i32, score1: i32, score2: i32) -> i32 {
        let (expected1, expected2) = expected_score(team1_rating, team2_rating, DEFAULT_TARGET_SCORE);
        let variation = -(expected1 - score1) + (expected2 - score2);

        variation * SCORE_DELTA_BETA
    }

    /// Amplifies a rating delta while the player is still calibrating: the
    /// first ten games move at 17/7 of the standard swing, the next ten at
    /// 13/7, and from game twenty onward the raw delta applies unchanged.
    fn calibration_scaled_delta(raw_delta: i32, games_played: u32) -> i32 {
        if games_played < CALIBRATION_PHASE_ONE_GAMES {
            (raw_delta as f64 * CALIBRATION_PHASE_ONE_FACTOR).round() as i32
        } else if games_played < CALIBRATION_PHASE_TWO_GAMES {
            (raw_delta as f64 * CALIBRATION_PHASE_TWO_FACTOR).round() as i32
        } else {
            raw_delta
        }
    }
}
