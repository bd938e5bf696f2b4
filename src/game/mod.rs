//! Game data
//!
//! Typed game catalogs, finished-game summaries and loading of the JSON
//! documents published by the daily game API.

mod embedded;
mod error;
pub mod loader;
mod types;

pub use embedded::{SAMPLE_GAME_JSON, sample_game};
pub use error::{GameError, Result};
pub use types::{DailyGame, Game, GameValue, Gender, Summary};
