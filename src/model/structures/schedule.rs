use indexmap::IndexMap;
use serde::Serialize;

use crate::model::structures::candidate_match::CandidateMatch;

/// The outcome of a scheduling request.
///
/// A schedule shorter than `requested` is a valid, expected result rather
/// than an error: it means the fairness ceiling exhausted every balanced
/// candidate before the target was reached. Callers surface that through
/// [`Schedule::is_complete`].
#[derive(Debug, Clone, Serialize)]
pub struct Schedule {
    pub matches: Vec<CandidateMatch>,
    pub requested: usize,
    /// Games assigned to each pool player, in pool order. Players left out of
    /// every selected match stay at zero.
    pub assigned_games: IndexMap<String, u32>,
    /// The per-player cap the selection was held to.
    pub fairness_ceiling: u32,
}

impl Schedule {
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.matches.len() == self.requested
    }

    /// How many requested matches could not be filled.
    pub fn shortfall(&self) -> usize {
        self.requested - self.matches.len()
    }
}
