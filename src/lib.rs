//! Rating and scheduling engine for a doubles padel league.
//!
//! The crate replays recorded match history to maintain an ELO-style rating
//! per player, predicts outcomes and betting odds for hypothetical pairings,
//! and builds balanced schedules from a pool of available players. File
//! formats and rendering live in the binary shell; the library works on
//! typed values only.

pub mod args;
pub mod error;
pub mod model;
pub mod utils;

pub use error::{ProcessorError, Result};
pub use model::elo_model::EloModel;
