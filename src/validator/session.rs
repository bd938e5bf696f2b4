//! Game session: the caller side of validation
//!
//! Holds progress for one game and applies successful outcomes to it.

use super::engine::Validator;
use super::outcome::Outcome;
use super::state::ValidationState;
use crate::core::{Letter, LetterSet};
use crate::game::{Game, Summary};
use chrono::NaiveDate;
use std::time::Duration;
use tracing::info;

/// Progress through one game
pub struct GameSession<'a> {
    game: &'a Game,
    validator: Validator,
    state: ValidationState,
    attempts: usize,
}

impl<'a> GameSession<'a> {
    /// Start a session; letters without answers are dead from the start
    #[must_use]
    pub fn new(game: &'a Game, validator: Validator) -> Self {
        Self {
            game,
            validator,
            state: ValidationState::with_dead(game.dead_letters()),
            attempts: 0,
        }
    }

    #[must_use]
    pub const fn game(&self) -> &'a Game {
        self.game
    }

    #[must_use]
    pub const fn state(&self) -> &ValidationState {
        &self.state
    }

    /// Number of inputs submitted so far
    #[must_use]
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    /// Validate an input and record it when it matches
    pub fn submit(&mut self, input: &str) -> Outcome {
        self.attempts += 1;
        let outcome = self
            .validator
            .validate(input, &self.state, &self.game.values);

        if let Outcome::Success { label } = &outcome
            && let Some(letter) = Letter::from_input(input)
        {
            info!(%letter, label = label.as_str(), "letter solved");
            self.state.record(letter, label.clone());
        }

        outcome
    }

    /// Letters with a recorded answer
    #[must_use]
    pub const fn solved(&self) -> LetterSet {
        self.state.solved
    }

    /// Letters still waiting for an answer
    #[must_use]
    pub fn remaining(&self) -> LetterSet {
        self.state.open_letters()
    }

    /// Whether every letter is solved or dead
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.remaining().is_empty()
    }

    /// Drop all progress
    pub fn reset(&mut self) {
        self.state = ValidationState::with_dead(self.game.dead_letters());
        self.attempts = 0;
    }

    /// Record of the session for `date`, having taken `elapsed`
    #[must_use]
    pub fn summary(&self, date: NaiveDate, elapsed: Duration) -> Summary {
        Summary {
            date,
            found: self.state.found.clone(),
            total: self.game.playable_letters(),
            duration: elapsed.as_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterMap;
    use crate::game::{GameValue, Gender};
    use crate::validator::Warning;

    fn two_letter_game() -> Game {
        let mut values: LetterMap<Vec<GameValue>> = LetterMap::default();
        values[Letter::L] = vec![GameValue::new("Lyon"), GameValue::new("Lille")];
        values[Letter::P] = vec![GameValue::new("Paris")];

        Game {
            category: "ville".to_string(),
            category_plural: "villes".to_string(),
            category_gender: Gender::Feminine,
            values,
        }
    }

    #[test]
    fn new_session_marks_dead_letters() {
        let game = two_letter_game();
        let session = GameSession::new(&game, Validator::default());

        assert_eq!(session.state().dead.len(), 24);
        assert_eq!(session.remaining().to_string(), "LP");
        assert!(!session.is_complete());
    }

    #[test]
    fn success_is_recorded() {
        let game = two_letter_game();
        let mut session = GameSession::new(&game, Validator::default());

        assert_eq!(session.submit("lyon").label(), Some("Lyon"));
        assert!(session.solved().contains(Letter::L));
        assert_eq!(session.state().found_label(Letter::L), Some("Lyon"));
    }

    #[test]
    fn solved_letter_then_warns() {
        let game = two_letter_game();
        let mut session = GameSession::new(&game, Validator::default());

        session.submit("Lyon");
        assert_eq!(
            session.submit("Lille"),
            Outcome::Warning(Warning::AlreadySolved(Letter::L))
        );
    }

    #[test]
    fn dead_letter_warns() {
        let game = two_letter_game();
        let mut session = GameSession::new(&game, Validator::default());

        assert_eq!(
            session.submit("Zurich"),
            Outcome::Warning(Warning::NoSolution(Letter::Z))
        );
        assert_eq!(session.attempts(), 1);
    }

    #[test]
    fn misses_are_not_recorded() {
        let game = two_letter_game();
        let mut session = GameSession::new(&game, Validator::default());

        assert_eq!(session.submit("Pau"), Outcome::Error);
        assert!(session.solved().is_empty());
    }

    #[test]
    fn completes_when_all_live_letters_solved() {
        let game = two_letter_game();
        let mut session = GameSession::new(&game, Validator::default());

        session.submit("Lille");
        session.submit("Paris");
        assert!(session.is_complete());

        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let summary = session.summary(date, Duration::from_secs(93));
        assert_eq!(summary.found_count(), 2);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.duration, 93);
        assert_eq!(summary.found[Letter::L].as_deref(), Some("Lille"));
    }

    #[test]
    fn reset_clears_progress() {
        let game = two_letter_game();
        let mut session = GameSession::new(&game, Validator::default());

        session.submit("Paris");
        session.reset();
        assert!(session.solved().is_empty());
        assert_eq!(session.attempts(), 0);
        assert_eq!(session.state().dead.len(), 24);
    }
}
