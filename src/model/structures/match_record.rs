use serde::{Deserialize, Serialize};

use crate::model::structures::team::Team;

/// A historical match result: two teams and the final score.
///
/// History order matters: the rating engine derives each player's damping
/// factor from the games played before a record, so records must be supplied
/// in the order the matches were played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub team1: Team,
    pub team2: Team,
    pub score1: i32,
    pub score2: i32,
}

impl MatchRecord {
    pub fn new(team1: Team, team2: Team, score1: i32, score2: i32) -> MatchRecord {
        debug_assert!(
            !team1.iter().any(|p| team2.contains(p)),
            "a player cannot appear on both sides of a match"
        );

        MatchRecord {
            team1,
            team2,
            score1,
            score2,
        }
    }

    /// All four participants, team1 first.
    pub fn players(&self) -> impl Iterator<Item = &str> + '_ {
        self.team1.iter().chain(self.team2.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::MatchRecord;
    use crate::model::structures::team::Team;

    #[test]
    fn test_players_covers_both_teams() {
        let record = MatchRecord::new(Team::new("A", "B"), Team::new("C", "D"), 8, 5);
        let players: Vec<&str> = record.players().collect();

        assert_eq!(players, vec!["A", "B", "C", "D"]);
    }
}
