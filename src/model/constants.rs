// Model constants
pub const DEFAULT_RATING: i32 = 1800;
pub const TEAM_BALANCE_ALPHA: f64 = 0.25;
pub const RATING_SCALE: f64 = 400.0;
pub const MAX_RATING_GAP: i32 = 400;
pub const DEFAULT_TARGET_SCORE: i32 = 8;
pub const SCORE_DELTA_BETA: i32 = 7;
// Calibration period: amplified rating swings until a player has enough games
// for the estimate to settle.
pub const CALIBRATION_PHASE_ONE_GAMES: u32 = 10;
pub const CALIBRATION_PHASE_TWO_GAMES: u32 = 20;
pub const CALIBRATION_PHASE_ONE_FACTOR: f64 = 17.0 / 7.0;
pub const CALIBRATION_PHASE_TWO_FACTOR: f64 = 13.0 / 7.0;
// Eligibility floor for the exported ranking table
pub const MIN_RANKED_GAMES: u32 = 8;
