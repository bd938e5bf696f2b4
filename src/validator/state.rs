//! Caller-owned game progress consulted by the validator

use crate::core::{Letter, LetterMap, LetterSet};

/// Progress the validator checks input against
///
/// `found` keeps a single recorded label per letter. The validator never
/// mutates this; callers apply outcomes themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationState {
    pub solved: LetterSet,
    pub dead: LetterSet,
    pub found: LetterMap<Option<String>>,
}

impl ValidationState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// State with the given dead letters and no progress
    #[must_use]
    pub fn with_dead(dead: LetterSet) -> Self {
        Self {
            dead,
            ..Self::default()
        }
    }

    /// Label recorded for a letter, if any
    #[must_use]
    pub fn found_label(&self, letter: Letter) -> Option<&str> {
        self.found[letter].as_deref()
    }

    /// Record `label` as the answer for `letter` and mark the letter solved
    pub fn record(&mut self, letter: Letter, label: impl Into<String>) {
        self.found[letter] = Some(label.into());
        self.solved.insert(letter);
    }

    /// Letters that still accept answers
    #[must_use]
    pub fn open_letters(&self) -> LetterSet {
        Letter::ALL
            .into_iter()
            .filter(|&l| !self.solved.contains(l) && !self.dead.contains(l))
            .collect()
    }
}
