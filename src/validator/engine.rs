//! Input validation against a game catalog

use super::outcome::{Outcome, Warning};
use super::state::ValidationState;
use crate::core::{Letter, LetterMap, MatchConfig, Matcher};
use crate::game::GameValue;
use tracing::debug;

/// Classifies user input against the answers of a game
///
/// Stateless: all progress comes in through [`ValidationState`], so one
/// validator can be shared across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    matcher: Matcher,
}

impl Validator {
    #[must_use]
    pub const fn new(config: MatchConfig) -> Self {
        Self {
            matcher: Matcher::new(config),
        }
    }

    #[must_use]
    pub const fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Classify `input`
    ///
    /// # Algorithm
    /// 1. Empty input is an error
    /// 2. The first character, normalized, picks the letter
    /// 3. Solved letters and dead letters produce a warning
    /// 4. Candidates under the letter are tried in catalog order, skipping any
    ///    whose label is contained in the label already recorded for the
    ///    letter; the first whose spellings match wins
    /// 5. Otherwise the input is an error
    ///
    /// Input whose first character is not a letter targets nothing and falls
    /// through to an error.
    pub fn validate(
        &self,
        input: &str,
        state: &ValidationState,
        candidates: &LetterMap<Vec<GameValue>>,
    ) -> Outcome {
        if input.is_empty() {
            return Outcome::Error;
        }

        let Some(letter) = Letter::from_input(input) else {
            debug!(input, "input does not start with a letter");
            return Outcome::Error;
        };

        if state.solved.contains(letter) {
            return Outcome::Warning(Warning::AlreadySolved(letter));
        }
        if state.dead.contains(letter) {
            return Outcome::Warning(Warning::NoSolution(letter));
        }

        let found = state.found_label(letter);
        let outcome = candidates[letter]
            .iter()
            .filter(|value| !found.is_some_and(|found| found.contains(value.label.as_str())))
            .find(|value| self.matcher.is_match(input, value.spellings()))
            .map_or(Outcome::Error, |value| Outcome::Success {
                label: value.label.clone(),
            });

        debug!(input, %letter, %outcome, "validated input");
        outcome
    }
}

/// [`Validator::validate`] with the default match threshold
///
/// # Examples
/// ```
/// use abc_daily::core::{Letter, LetterMap};
/// use abc_daily::game::GameValue;
/// use abc_daily::validator::{Outcome, ValidationState, validate_input};
///
/// let mut candidates: LetterMap<Vec<GameValue>> = LetterMap::default();
/// candidates[Letter::P] = vec![GameValue::new("Paris")];
///
/// let outcome = validate_input("paris", &ValidationState::new(), &candidates);
/// assert_eq!(outcome, Outcome::Success { label: "Paris".to_string() });
/// ```
pub fn validate_input(
    input: &str,
    state: &ValidationState,
    candidates: &LetterMap<Vec<GameValue>>,
) -> Outcome {
    Validator::default().validate(input, state, candidates)
}
