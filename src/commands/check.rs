//! Single-input check command
//!
//! Validates one input against a game with hand-specified progress.

use crate::core::{Letter, LetterSet};
use crate::game::Game;
use crate::validator::{Outcome, ValidationState, Validator};

/// Configuration for checking an input
pub struct CheckConfig {
    pub input: String,
    /// Letters already solved
    pub solved: LetterSet,
    /// Extra dead letters on top of the game's empty letters
    pub dead: LetterSet,
    /// Labels already recorded, one per letter
    pub found: Vec<(Letter, String)>,
}

impl CheckConfig {
    #[must_use]
    pub const fn new(input: String) -> Self {
        Self {
            input,
            solved: LetterSet::EMPTY,
            dead: LetterSet::EMPTY,
            found: Vec::new(),
        }
    }

    /// Validation state described by this configuration
    #[must_use]
    pub fn state(&self, game: &Game) -> ValidationState {
        let mut state = ValidationState::with_dead(game.dead_letters().union(self.dead));
        state.solved = self.solved;
        for (letter, label) in &self.found {
            state.found[*letter] = Some(label.clone());
        }
        state
    }
}

/// Result of checking an input
pub struct CheckResult {
    pub input: String,
    pub letter: Option<Letter>,
    pub outcome: Outcome,
}

/// Validate the configured input against `game`
#[must_use]
pub fn run_check(config: &CheckConfig, game: &Game, validator: &Validator) -> CheckResult {
    let state = config.state(game);
    let outcome = validator.validate(&config.input, &state, &game.values);

    CheckResult {
        input: config.input.clone(),
        letter: Letter::from_input(&config.input),
        outcome,
    }
}

/// Parse a `LETTER=label` pair
///
/// # Errors
///
/// Returns an error if the `=` is missing, the letter is invalid or the label
/// is empty.
pub fn parse_found(s: &str) -> Result<(Letter, String), String> {
    let (letter, label) = s
        .split_once('=')
        .ok_or_else(|| format!("Expected LETTER=label, got '{s}'"))?;
    let letter: Letter = letter.parse()?;
    let label = label.trim();
    if label.is_empty() {
        return Err(format!("Empty label for letter {letter}"));
    }
    Ok((letter, label.to_string()))
}
