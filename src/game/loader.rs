//! Game document loading
//!
//! Reads the JSON documents served by the daily game API once they are on
//! disk. Every document is wrapped in a `{"data": ...}` envelope: a single
//! [`DailyGame`] for the daily endpoint, a list of them for the archive.

use super::error::{GameError, Result};
use super::types::{DailyGame, Game};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Parse a daily game document
///
/// # Errors
///
/// Returns an error if the JSON is malformed or an answer has an empty label
/// or alias.
///
/// # Examples
/// ```
/// use abc_daily::game::loader::parse_daily_game;
///
/// let json = r#"{"data": {"date": "2026-10-16", "game": {
///     "category": "ville", "categoryPlural": "villes", "categoryGender": "f",
///     "values": {"P": [{"label": "Paris"}]}
/// }}}"#;
/// let daily = parse_daily_game(json).unwrap();
/// assert_eq!(daily.game.category, "ville");
/// ```
pub fn parse_daily_game(json: &str) -> Result<DailyGame> {
    let Envelope { data } = serde_json::from_str::<Envelope<DailyGame>>(json)?;
    check_game(&data.game)?;
    debug!(date = %data.date, answers = data.game.answer_count(), "parsed daily game");
    Ok(data)
}

/// Parse an archive document listing every published game
///
/// # Errors
///
/// Returns an error if the JSON is malformed or any game fails
/// [`check_game`].
pub fn parse_archive(json: &str) -> Result<Vec<DailyGame>> {
    let Envelope { data } = serde_json::from_str::<Envelope<Vec<DailyGame>>>(json)?;
    for daily in &data {
        check_game(&daily.game)?;
    }
    debug!(games = data.len(), "parsed archive");
    Ok(data)
}

/// Load a daily game document from a file
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails [`parse_daily_game`].
pub fn load_daily_game<P: AsRef<Path>>(path: P) -> Result<DailyGame> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading daily game");
    parse_daily_game(&fs::read_to_string(path)?)
}

/// Load an archive document from a file
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails [`parse_archive`].
pub fn load_archive<P: AsRef<Path>>(path: P) -> Result<Vec<DailyGame>> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading archive");
    parse_archive(&fs::read_to_string(path)?)
}

/// Reject answers whose label or any alias is empty or whitespace-only
///
/// # Errors
///
/// Returns [`GameError::EmptyLabel`] or [`GameError::EmptyAlias`] for the
/// first offending answer in alphabetical then catalog order. A string made
/// only of whitespace counts as empty.
pub fn check_game(game: &Game) -> Result<()> {
    for (letter, values) in game.values.iter() {
        for value in values {
            if value.label.trim().is_empty() {
                return Err(GameError::EmptyLabel(letter));
            }
            if value.spellings().iter().any(|alias| alias.trim().is_empty()) {
                return Err(GameError::EmptyAlias {
                    letter,
                    label: value.label.clone(),
                });
            }
        }
    }
    Ok(())
}
