//! Error types for the league processor.
//!
//! Only the rating engine and the scheduler have caller-visible failure
//! states; the pure prediction functions never fail. An incomplete schedule
//! is not an error at all and is reported on the returned value instead.

use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProcessorError>;

#[derive(Debug, Error)]
pub enum ProcessorError {
    /// A match record or scheduling pool referenced a player that was never
    /// registered in the rating table.
    #[error("unknown player `{0}` is not registered in the rating table")]
    UnknownPlayer(String),

    /// Scheduling needs at least one full 2v2 match worth of players.
    #[error("scheduling requires at least 4 available players, got {0}")]
    InsufficientPlayers(usize),

    /// An input row violated a structural invariant (e.g. the same player on
    /// both slots of a team).
    #[error("malformed match record: {0}")]
    MalformedRecord(String),

    #[error("failed to read input data: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse csv input: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}
