pub mod candidate_match;
pub mod match_record;
pub mod player_rating;
pub mod schedule;
pub mod team;
