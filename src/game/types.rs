//! Game catalog and result records

use crate::core::{Letter, LetterMap, LetterSet};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An accepted answer
///
/// `aliases` lists the spellings accepted as equivalent to `label`. When
/// absent, the label is the only accepted spelling. An explicitly empty list
/// accepts nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameValue {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Vec<String>>,
}

impl GameValue {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            aliases: None,
        }
    }

    #[must_use]
    pub fn with_aliases<I, S>(label: impl Into<String>, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: label.into(),
            aliases: Some(aliases.into_iter().map(Into::into).collect()),
        }
    }

    /// Spellings compared against user input
    #[must_use]
    pub fn spellings(&self) -> &[String] {
        self.aliases
            .as_deref()
            .unwrap_or(std::slice::from_ref(&self.label))
    }
}

/// Grammatical gender of the category noun
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "m")]
    Masculine,
    #[serde(rename = "f")]
    Feminine,
}

/// A day's category and its answers bucketed by first letter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub category: String,
    pub category_plural: String,
    pub category_gender: Gender,
    pub values: LetterMap<Vec<GameValue>>,
}

impl Game {
    /// Accepted answers for a letter, in catalog order
    #[must_use]
    pub fn candidates(&self, letter: Letter) -> &[GameValue] {
        &self.values[letter]
    }

    /// Letters with no accepted answer
    #[must_use]
    pub fn dead_letters(&self) -> LetterSet {
        self.values
            .iter()
            .filter(|(_, values)| values.is_empty())
            .map(|(letter, _)| letter)
            .collect()
    }

    /// Number of letters that have at least one accepted answer
    #[must_use]
    pub fn playable_letters(&self) -> usize {
        Letter::COUNT - self.dead_letters().len()
    }

    /// Total number of accepted answers across all letters
    #[must_use]
    pub fn answer_count(&self) -> usize {
        self.values.values().map(Vec::len).sum()
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} answers over {} letters)",
            self.category_plural,
            self.answer_count(),
            self.playable_letters()
        )
    }
}

/// The game published for a calendar date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyGame {
    pub date: NaiveDate,
    pub game: Game,
}

/// Record of a finished game
///
/// `found` holds the label recorded for each solved letter, `total` the number
/// of letters that had an answer and `duration` the play time in seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub date: NaiveDate,
    pub found: LetterMap<Option<String>>,
    pub total: usize,
    pub duration: u64,
}

impl Summary {
    #[must_use]
    pub fn found_count(&self) -> usize {
        self.found.values().filter(|label| label.is_some()).count()
    }
}
