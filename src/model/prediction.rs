//! Pure outcome prediction: team strength aggregation, win probabilities,
//! expected scores and the betting odds they imply.
//!
//! Everything here is a total function over integer ratings; error handling
//! lives with the callers that feed them.

use crate::model::constants::{MAX_RATING_GAP, RATING_SCALE};

/// Combines two player ratings into a single team rating.
///
/// A mismatched team is weaker than its plain average: the skill gap between
/// the partners is charged against the average at a rate of `alpha`, since
/// opponents play through the weaker partner.
pub fn team_rating(rating1: i32, rating2: i32, alpha: f64) -> i32 {
    let stronger = rating1.max(rating2) as f64;
    let weaker = rating1.min(rating2) as f64;
    let penalty = alpha * (stronger - weaker);

    ((stronger + weaker) / 2.0 - penalty).round() as i32
}

/// Win probabilities for the two teams, each rounded to two decimals.
///
/// Standard logistic pairing formula, base 10 and scale 400. The rating gap
/// is clamped to [`MAX_RATING_GAP`] by raising the weaker team's effective
/// rating, so no pairing is ever treated as a certainty.
pub fn win_probability(team1_rating: i32, team2_rating: i32) -> (f64, f64) {
    let mut r1 = team1_rating;
    let mut r2 = team2_rating;

    if (r1 - r2).abs() > MAX_RATING_GAP {
        if r1 > r2 {
            r2 = r1 - MAX_RATING_GAP;
        } else {
            r1 = r2 - MAX_RATING_GAP;
        }
    }

    let team1_to_win = round2(1.0 / (1.0 + 10f64.powf((r2 - r1) as f64 / RATING_SCALE)));

    (team1_to_win, round2(1.0 - team1_to_win))
}

/// Predicted final score of a race-to-`target` match.
///
/// The favourite's predicted score is always exactly `target`; the other
/// team's score scales with the probability ratio and rounds up.
pub fn expected_score(team1_rating: i32, team2_rating: i32, target: i32) -> (i32, i32) {
    let (p1, p2) = win_probability(team1_rating, team2_rating);
    let favourite = p1.max(p2);

    let score1 = (target as f64 / favourite * p1).ceil() as i32;
    let score2 = (target as f64 / favourite * p2).ceil() as i32;

    (score1, score2)
}

/// Decimal betting odds implied by a pair of win probabilities.
///
/// The gap clamp in [`win_probability`] keeps probabilities off zero, so the
/// division is always defined.
pub fn betting_odds(probability1: f64, probability2: f64) -> (f64, f64) {
    (round2(1.0 / probability1), round2(1.0 / probability2))
}

// Probabilities are carried at two decimals end to end; the update maths was
// tuned against that precision.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::{betting_odds, expected_score, team_rating, win_probability};
    use crate::model::constants::TEAM_BALANCE_ALPHA;

    #[test]
    fn test_team_rating_balanced_pair_is_identity() {
        for rating in [1500, 1800, 2100] {
            assert_eq!(team_rating(rating, rating, TEAM_BALANCE_ALPHA), rating);
        }
    }

    #[test]
    fn test_team_rating_penalizes_imbalance() {
        // Average 1800, penalty 0.25 * 400
        assert_eq!(team_rating(2000, 1600, TEAM_BALANCE_ALPHA), 1700);
        // Order of arguments is irrelevant
        assert_eq!(
            team_rating(1600, 2000, TEAM_BALANCE_ALPHA),
            team_rating(2000, 1600, TEAM_BALANCE_ALPHA)
        );
    }

    #[test]
    fn test_team_rating_never_exceeds_plain_average() {
        for (r1, r2) in [(1900, 1700), (2200, 1500), (1801, 1800)] {
            let average = (r1 + r2) as f64 / 2.0;
            assert!(f64::from(team_rating(r1, r2, TEAM_BALANCE_ALPHA)) <= average);
        }
    }

    #[test]
    fn test_win_probability_equal_ratings() {
        assert_eq!(win_probability(1800, 1800), (0.5, 0.5));
    }

    #[test]
    fn test_win_probability_sums_to_one() {
        for (r1, r2) in [(1800, 1600), (2000, 1450), (1234, 2345)] {
            let (p1, p2) = win_probability(r1, r2);
            assert_abs_diff_eq!(p1 + p2, 1.0, epsilon = 0.01);
        }
    }

    #[test]
    fn test_win_probability_200_point_gap() {
        assert_eq!(win_probability(1800, 1600), (0.76, 0.24));
    }

    #[test]
    fn test_win_probability_gap_clamp() {
        // A 1000-point gap is treated exactly like a 400-point gap
        assert_eq!(win_probability(1000, 0), win_probability(1000, 600));
        assert_eq!(win_probability(0, 1000), win_probability(600, 1000));
        assert_eq!(win_probability(1000, 0), (0.91, 0.09));
    }

    #[test]
    fn test_expected_score_equal_teams() {
        assert_eq!(expected_score(1800, 1800, 8), (8, 8));
    }

    #[test]
    fn test_expected_score_favourite_reaches_target() {
        for (r1, r2) in [(1800, 1600), (1500, 1900), (2100, 1700)] {
            let (s1, s2) = expected_score(r1, r2, 8);
            assert_eq!(s1.max(s2), 8);
            assert!(s1.min(s2) >= 1);
        }
    }

    #[test]
    fn test_expected_score_underdog_scales() {
        // p = (0.76, 0.24): ceil(8 / 0.76 * 0.24) = 3
        assert_eq!(expected_score(1800, 1600, 8), (8, 3));
    }

    #[test]
    fn test_betting_odds_even_match() {
        assert_eq!(betting_odds(0.5, 0.5), (2.0, 2.0));
    }

    #[test]
    fn test_betting_odds_capped_favourite() {
        let (p1, p2) = win_probability(1000, 0);
        assert_eq!(betting_odds(p1, p2), (1.1, 11.11));
    }
}
