pub mod constants;
pub mod elo_model;
pub mod prediction;
pub mod rating_tracker;
pub mod scheduler;
pub mod structures;
