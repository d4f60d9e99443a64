use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Clone)]
#[command(
    display_name = "Padel League Processor",
    long_about = "Replays recorded match history into player ratings and generates balanced schedules"
)]
pub struct Args {
    /// Match history CSV, oldest match first. Columns: team1_player1,
    /// team1_player2, team2_player1, team2_player2, score1, score2
    #[arg(long, help = "Path to the match history CSV")]
    pub history: PathBuf,

    /// Roster file with one player name per line. When omitted, the roster
    /// is collected from the history itself.
    #[arg(long, help = "Path to a roster file, one name per line")]
    pub roster: Option<PathBuf>,

    #[arg(
        long,
        default_value = "elo_ratings.csv",
        help = "Output path for the ranking table CSV"
    )]
    pub ratings_out: PathBuf,

    /// Players available for the next session; providing at least four
    /// enables schedule generation.
    #[arg(long, value_delimiter = ',', help = "Comma-separated list of available players")]
    pub available: Vec<String>,

    #[arg(long, default_value_t = 8, help = "How many matches to schedule")]
    pub match_count: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        short,
        long,
        env = "RUST_LOG",
        default_value = "info",
        value_parser = ["trace", "debug", "info", "warn", "error"],
        help = "Sets the logging verbosity"
    )]
    pub log_level: String,
}
