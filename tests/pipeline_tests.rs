//! End-to-end tests over the public API: replay a match history, export the
//! ranking, enumerate candidates and build a schedule.

use padel_processor::{
    model::{
        constants::{DEFAULT_RATING, MIN_RANKED_GAMES},
        elo_model::EloModel,
        scheduler::{build_schedule, enumerate_candidates},
    },
    utils::test_utils::{generate_history, generate_match_record, generate_roster, seeded_rng},
};

#[test]
fn test_two_match_league_by_hand() {
    // Match 1: A & B beat C & D 8-3 from identical 1800s. Expected (8, 8),
    // variation 5, raw delta 35, amplified to 85 for calibrating players.
    // Match 2: A & C (1885/1715 -> 1758) vs B & D (1885/1715 -> 1758), 8-6.
    // Equal teams expect (8, 8), variation 2, raw delta 14, amplified to 34.
    let mut model = EloModel::with_roster(["A", "B", "C", "D"]);
    let history = vec![
        generate_match_record(("A", "B"), ("C", "D"), 8, 3),
        generate_match_record(("A", "C"), ("B", "D"), 8, 6),
    ];

    model.process(&history).unwrap();

    let rating_of = |name: &str| model.rating_tracker.get_rating(name).unwrap().rating;
    assert_eq!(rating_of("A"), 1919);
    assert_eq!(rating_of("B"), 1851);
    assert_eq!(rating_of("C"), 1749);
    assert_eq!(rating_of("D"), 1681);

    for name in ["A", "B", "C", "D"] {
        assert_eq!(model.rating_tracker.get_rating(name).unwrap().games_played, 2);
    }
}

#[test]
fn test_rating_mass_is_conserved_while_everyone_calibrates() {
    // With at most 10 matches nobody can reach 10 games, so every swing in a
    // record is amplified by the same factor and the table's total rating
    // stays put.
    let mut rng = seeded_rng(42);
    let roster = generate_roster(12, &mut rng);
    let history = generate_history(&roster, 10, &mut rng);

    let mut model = EloModel::new(&roster);
    let total_before: i64 = model.rating_tracker.players().map(|p| i64::from(p.rating)).sum();

    model.process(&history).unwrap();

    let total_after: i64 = model.rating_tracker.players().map(|p| i64::from(p.rating)).sum();
    assert_eq!(total_before, total_after);

    let games_total: u32 = model.rating_tracker.players().map(|p| p.games_played).sum();
    assert_eq!(games_total, 40);
}

#[test]
fn test_ranking_export_contract() {
    let mut rng = seeded_rng(99);
    let roster = generate_roster(10, &mut rng);
    let history = generate_history(&roster, 60, &mut rng);

    let mut model = EloModel::new(&roster);
    model.process(&history).unwrap();

    let ranking = model.rating_tracker.ranking(MIN_RANKED_GAMES);

    // Only players past the eligibility floor appear, best first, with
    // 1-based contiguous positions.
    for (index, row) in ranking.iter().enumerate() {
        assert_eq!(row.position, index + 1);
        assert!(row.games >= MIN_RANKED_GAMES);
    }
    for pair in ranking.windows(2) {
        assert!(pair[0].rating >= pair[1].rating);
    }
}

#[test]
fn test_schedule_generation_from_processed_league() {
    let mut rng = seeded_rng(7);
    let roster = generate_roster(8, &mut rng);
    let history = generate_history(&roster, 30, &mut rng);

    let mut model = EloModel::new(&roster);
    model.process(&history).unwrap();

    let pool: Vec<String> = roster.iter().map(|p| p.name.clone()).collect();
    let candidates = enumerate_candidates(&pool, &model.rating_tracker).unwrap();

    // C(8, 4) * 3 distinct pairings
    assert_eq!(candidates.len(), 210);

    let schedule = build_schedule(&candidates, &pool, 6).unwrap();

    // floor(6 * 4 / 8) = 3 games per player at most
    assert_eq!(schedule.fairness_ceiling, 3);
    assert!(schedule.len() <= 6);
    for (_, count) in &schedule.assigned_games {
        assert!(*count <= schedule.fairness_ceiling);
    }

    // Probabilities on every scheduled match are a valid complementary pair
    for candidate in &schedule.matches {
        let sum = candidate.win_probability_team1 + candidate.win_probability_team2;
        assert!((sum - 1.0).abs() <= 0.01);
        assert!(candidate.balance_score >= 0.0);
    }
}

#[test]
fn test_fresh_league_schedules_everything_evenly() {
    // Unplayed league: every rating is the default, every pairing is a
    // coin flip, and the scheduler fills the request exactly.
    let model = EloModel::with_roster(["A", "B", "C", "D", "E", "F", "G", "H"]);
    let pool: Vec<String> = ["A", "B", "C", "D", "E", "F", "G", "H"]
        .iter()
        .map(|n| n.to_string())
        .collect();

    let candidates = enumerate_candidates(&pool, &model.rating_tracker).unwrap();
    for candidate in &candidates {
        assert_eq!(candidate.win_probability_team1, 0.5);
        assert_eq!(candidate.balance_score, 0.0);
    }

    let schedule = build_schedule(&candidates, &pool, 4).unwrap();
    assert!(schedule.is_complete());

    for name in ["A", "B", "C", "D", "E", "F", "G", "H"] {
        let player = model.rating_tracker.get_rating(name).unwrap();
        assert_eq!(player.rating, DEFAULT_RATING);
    }
}
