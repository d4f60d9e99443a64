use std::{fs, path::Path, process::ExitCode};

use clap::Parser;
use serde::Deserialize;
use tracing::{error, info, warn};
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use padel_processor::{
    args::Args,
    error::ProcessorError,
    model::{
        constants::MIN_RANKED_GAMES,
        elo_model::EloModel,
        prediction::betting_odds,
        scheduler::{build_schedule, enumerate_candidates},
        structures::{match_record::MatchRecord, team::Team},
    },
};

/// One row of the match history CSV.
#[derive(Debug, Deserialize)]
struct HistoryRow {
    team1_player1: String,
    team1_player2: String,
    team2_player1: String,
    team2_player2: String,
    score1: i32,
    score2: i32,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(&args.log_level);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(log_level: &str) {
    let indicatif_layer = IndicatifLayer::new();

    tracing_subscriber::registry()
        .with(EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(indicatif_layer.get_stderr_writer()))
        .with(indicatif_layer)
        .init();
}

fn run(args: &Args) -> Result<(), ProcessorError> {
    let records = load_history(&args.history)?;
    let mut model = match &args.roster {
        Some(path) => EloModel::with_roster(load_roster(path)?),
        // No explicit roster: every name appearing in the history plays
        None => EloModel::with_roster(records.iter().flat_map(|r| r.players()).collect::<Vec<_>>()),
    };
    info!(
        players = model.rating_tracker.len(),
        matches = records.len(),
        "loaded league data"
    );

    model.process(&records)?;

    write_ratings(&args.ratings_out, &model)?;
    info!(path = %args.ratings_out.display(), "ratings file updated");

    if !args.available.is_empty() {
        let candidates = enumerate_candidates(&args.available, &model.rating_tracker)?;
        let schedule = build_schedule(&candidates, &args.available, args.match_count)?;

        if !schedule.is_complete() {
            warn!(
                requested = schedule.requested,
                scheduled = schedule.len(),
                "could not fill the full schedule under the fairness ceiling"
            );
        }
        for candidate in &schedule.matches {
            let (odds1, odds2) = betting_odds(
                candidate.win_probability_team1,
                candidate.win_probability_team2,
            );
            info!(pairing = %candidate, odds1, odds2, "scheduled");
        }

        println!("{}", serde_json::to_string_pretty(&schedule)?);
    }

    Ok(())
}

fn load_roster(path: &Path) -> Result<Vec<String>, ProcessorError> {
    let contents = fs::read_to_string(path)?;

    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

fn load_history(path: &Path) -> Result<Vec<MatchRecord>, ProcessorError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();

    for row in reader.deserialize() {
        let row: HistoryRow = row?;

        for (a, b) in [
            (&row.team1_player1, &row.team1_player2),
            (&row.team2_player1, &row.team2_player2),
        ] {
            if a == b {
                return Err(ProcessorError::MalformedRecord(format!(
                    "player `{a}` appears twice on one team"
                )));
            }
        }
        let team1 = Team::new(row.team1_player1, row.team1_player2);
        let team2 = Team::new(row.team2_player1, row.team2_player2);
        if team1.iter().any(|p| team2.contains(p)) {
            return Err(ProcessorError::MalformedRecord(format!(
                "a player appears on both sides of {team1} vs {team2}"
            )));
        }

        records.push(MatchRecord::new(team1, team2, row.score1, row.score2));
    }

    Ok(records)
}

fn write_ratings(path: &Path, model: &EloModel) -> Result<(), ProcessorError> {
    let mut writer = csv::Writer::from_path(path)?;

    for row in model.rating_tracker.ranking(MIN_RANKED_GAMES) {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}
