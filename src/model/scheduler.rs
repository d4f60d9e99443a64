//! Candidate enumeration and greedy balanced scheduling.
//!
//! Enumeration is combinatorial, `C(n, 4) * 3` candidates for an n-player
//! pool. That is fine for league-sized pools (tens of players) and does not
//! scale beyond that.

use indexmap::IndexMap;
use itertools::Itertools;
use rayon::prelude::*;
use tracing::{info, warn};

use crate::{
    error::ProcessorError,
    model::{
        constants::TEAM_BALANCE_ALPHA,
        prediction::{team_rating, win_probability},
        rating_tracker::RatingTracker,
        structures::{candidate_match::CandidateMatch, schedule::Schedule, team::Team},
    },
};

/// Minimum pool size for a single 2v2 match.
const MIN_POOL_SIZE: usize = 4;

/// Enumerates every distinct 2v2 pairing available to `pool`, annotated with
/// win probabilities and balance, most balanced first.
///
/// Each 4-player subset yields exactly three splits, and a split pins down
/// its 4-player subset, so generating the splits directly produces each
/// pairing exactly once; there are no symmetric duplicates to filter.
pub fn enumerate_candidates(
    pool: &[String],
    tracker: &RatingTracker,
) -> Result<Vec<CandidateMatch>, ProcessorError> {
    let names: Vec<&str> = pool.iter().map(String::as_str).unique().collect();
    if names.len() < MIN_POOL_SIZE {
        return Err(ProcessorError::InsufficientPlayers(names.len()));
    }

    // Snapshot ratings up front. Enumeration reads nothing but this map,
    // which is what makes the parallel fan-out below safe.
    let mut ratings: IndexMap<&str, i32> = IndexMap::with_capacity(names.len());
    for name in &names {
        let player = tracker
            .get_rating(name)
            .ok_or_else(|| ProcessorError::UnknownPlayer(name.to_string()))?;
        ratings.insert(*name, player.rating);
    }

    let groups: Vec<Vec<&str>> = names.iter().copied().combinations(4).collect();
    let mut candidates: Vec<CandidateMatch> = groups
        .par_iter()
        .flat_map_iter(|group| {
            splits(group)
                .into_iter()
                .map(|(team1, team2)| annotate(team1, team2, &ratings))
        })
        .collect();

    // Most balanced first; the sort is stable, so equal balance scores keep
    // enumeration order.
    candidates.sort_by(|a, b| a.balance_score.total_cmp(&b.balance_score));

    info!(
        pool = names.len(),
        candidates = candidates.len(),
        "enumerated candidate matches"
    );
    Ok(candidates)
}

/// Greedily fills a schedule from a balance-sorted candidate list.
///
/// A candidate is admitted only if all four players stay at or under the
/// fairness ceiling, `floor(match_count * 4 / pool_size)`, once the game is
/// counted. Selection never backtracks: a tight ceiling can leave the
/// schedule short (or empty) even when some other selection would have fit
/// more matches. The caller sees the shortfall on the returned [`Schedule`].
pub fn build_schedule(
    candidates: &[CandidateMatch],
    pool: &[String],
    match_count: usize,
) -> Result<Schedule, ProcessorError> {
    let names: Vec<&str> = pool.iter().map(String::as_str).unique().collect();
    if names.len() < MIN_POOL_SIZE {
        return Err(ProcessorError::InsufficientPlayers(names.len()));
    }

    let fairness_ceiling = (match_count * 4 / names.len()) as u32;
    let mut assigned_games: IndexMap<String, u32> =
        names.iter().map(|name| (name.to_string(), 0)).collect();
    let mut matches: Vec<CandidateMatch> = Vec::with_capacity(match_count);

    for candidate in candidates {
        if matches.len() == match_count {
            break;
        }

        let admissible = candidate.players().all(|player| {
            assigned_games
                .get(player)
                .is_some_and(|count| count + 1 <= fairness_ceiling)
        });
        if !admissible {
            continue;
        }

        for player in candidate.players() {
            if let Some(count) = assigned_games.get_mut(player) {
                *count += 1;
            }
        }
        matches.push(candidate.clone());
    }

    if matches.len() < match_count {
        warn!(
            requested = match_count,
            selected = matches.len(),
            "fairness ceiling exhausted the candidate list before the schedule was full"
        );
    }

    Ok(Schedule {
        matches,
        requested: match_count,
        assigned_games,
        fairness_ceiling,
    })
}

/// The three ways to split four players into two teams of two.
fn splits<'a>(group: &[&'a str]) -> [([&'a str; 2], [&'a str; 2]); 3] {
    [
        ([group[0], group[1]], [group[2], group[3]]),
        ([group[0], group[2]], [group[1], group[3]]),
        ([group[0], group[3]], [group[1], group[2]]),
    ]
}

fn annotate(team1: [&str; 2], team2: [&str; 2], ratings: &IndexMap<&str, i32>) -> CandidateMatch {
    let rating1 = team_rating(ratings[team1[0]], ratings[team1[1]], TEAM_BALANCE_ALPHA);
    let rating2 = team_rating(ratings[team2[0]], ratings[team2[1]], TEAM_BALANCE_ALPHA);
    let (p1, p2) = win_probability(rating1, rating2);

    CandidateMatch::new(
        Team::new(team1[0], team1[1]),
        Team::new(team2[0], team2[1]),
        p1,
        p2,
    )
}
