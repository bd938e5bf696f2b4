//! Sample game compiled into the binary

use super::error::Result;
use super::loader::parse_daily_game;
use super::types::DailyGame;

/// Daily game document used when no game file is given
pub const SAMPLE_GAME_JSON: &str = include_str!("../../data/sample_game.json");

/// Parse the embedded sample game
///
/// # Errors
///
/// Returns an error only if the embedded document is malformed.
pub fn sample_game() -> Result<DailyGame> {
    parse_daily_game(SAMPLE_GAME_JSON)
}
