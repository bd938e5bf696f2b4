//! Catalog sweep - checks every accepted spelling of a game
//!
//! Submits each spelling on a fresh board and reports the ones that do not
//! resolve to their own answer: spellings claimed by an earlier answer under
//! the same letter, and spellings the validator rejects outright.

use crate::core::Letter;
use crate::game::Game;
use crate::validator::{Outcome, ValidationState, Validator};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use tracing::debug;

/// A spelling that does not resolve to its own answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepIssue {
    pub letter: Letter,
    pub label: String,
    pub spelling: String,
    pub outcome: Outcome,
}

/// Statistics from sweeping a catalog
#[derive(Debug)]
pub struct SweepStatistics {
    pub total_spellings: usize,
    pub accepted: usize,
    /// Spellings matched by a different answer first
    pub shadowed: Vec<SweepIssue>,
    /// Spellings matched by no answer
    pub rejected: Vec<SweepIssue>,
    pub issues_per_letter: FxHashMap<Letter, usize>,
    pub total_time: Duration,
}

impl SweepStatistics {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.shadowed.is_empty() && self.rejected.is_empty()
    }
}

/// Every `(letter, label, spelling)` triple of the catalog in order
fn spellings(game: &Game) -> Vec<(Letter, &str, &str)> {
    game.values
        .iter()
        .flat_map(|(letter, values)| {
            values.iter().flat_map(move |value| {
                value
                    .spellings()
                    .iter()
                    .map(move |spelling| (letter, value.label.as_str(), spelling.as_str()))
            })
        })
        .collect()
}

/// Validate every accepted spelling of `game` (or the first `limit`) in parallel
///
/// # Panics
///
/// Panics if the progress bar template is invalid.
pub fn run_sweep(
    validator: &Validator,
    game: &Game,
    limit: Option<usize>,
    show_progress: bool,
) -> SweepStatistics {
    let mut entries = spellings(game);
    entries.truncate(limit.unwrap_or(entries.len()));

    let pb = if show_progress {
        let pb = ProgressBar::new(entries.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let fresh = ValidationState::with_dead(game.dead_letters());
    let start = Instant::now();

    let issues: Vec<SweepIssue> = entries
        .par_iter()
        .filter_map(|&(letter, label, spelling)| {
            let outcome = validator.validate(spelling, &fresh, &game.values);
            pb.inc(1);
            if outcome.label() == Some(label) {
                None
            } else {
                Some(SweepIssue {
                    letter,
                    label: label.to_string(),
                    spelling: spelling.to_string(),
                    outcome,
                })
            }
        })
        .collect();

    pb.finish_with_message("Complete!");
    let total_time = start.elapsed();

    let mut issues_per_letter: FxHashMap<Letter, usize> = FxHashMap::default();
    for issue in &issues {
        *issues_per_letter.entry(issue.letter).or_insert(0) += 1;
    }

    let (shadowed, rejected): (Vec<SweepIssue>, Vec<SweepIssue>) =
        issues.into_iter().partition(|issue| issue.outcome.is_success());

    debug!(
        spellings = entries.len(),
        shadowed = shadowed.len(),
        rejected = rejected.len(),
        "catalog sweep finished"
    );

    SweepStatistics {
        total_spellings: entries.len(),
        accepted: entries.len() - shadowed.len() - rejected.len(),
        shadowed,
        rejected,
        issues_per_letter,
        total_time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterMap;
    use crate::game::{GameValue, Gender, sample_game};
    use crate::validator::Warning;

    fn flawed_game() -> Game {
        let mut values: LetterMap<Vec<GameValue>> = LetterMap::default();
        // "Montpelier" is claimed by "Montpellier" first
        values[Letter::M] = vec![GameValue::new("Montpellier"), GameValue::new("Montpelier")];
        // "Le Havre" starts with L, so it can never be reached under H
        values[Letter::H] = vec![GameValue::new("Le Havre")];
        values[Letter::P] = vec![GameValue::new("Paris")];

        Game {
            category: "ville".to_string(),
            category_plural: "villes".to_string(),
            category_gender: Gender::Feminine,
            values,
        }
    }

    #[test]
    fn sample_catalog_is_clean() {
        let daily = sample_game().unwrap();
        let stats = run_sweep(&Validator::default(), &daily.game, None, false);

        let expected: usize = daily
            .game
            .values
            .values()
            .flatten()
            .map(|value| value.spellings().len())
            .sum();
        assert_eq!(stats.total_spellings, expected);
        assert!(stats.is_clean(), "{:?} {:?}", stats.shadowed, stats.rejected);
        assert_eq!(stats.accepted, expected);
    }

    #[test]
    fn detects_shadowed_spelling() {
        let stats = run_sweep(&Validator::default(), &flawed_game(), None, false);

        assert_eq!(stats.shadowed.len(), 1);
        let issue = &stats.shadowed[0];
        assert_eq!(issue.letter, Letter::M);
        assert_eq!(issue.spelling, "Montpelier");
        assert_eq!(issue.outcome.label(), Some("Montpellier"));
    }

    #[test]
    fn detects_rejected_spelling() {
        let stats = run_sweep(&Validator::default(), &flawed_game(), None, false);

        assert_eq!(stats.rejected.len(), 1);
        assert_eq!(stats.rejected[0].label, "Le Havre");
        // L has no answers in this catalog, so the input is refused as dead
        assert_eq!(
            stats.rejected[0].outcome,
            Outcome::Warning(Warning::NoSolution(Letter::L))
        );
        assert_eq!(stats.issues_per_letter.get(&Letter::H), Some(&1));
        assert_eq!(stats.issues_per_letter.get(&Letter::M), Some(&1));
    }

    #[test]
    fn totals_add_up() {
        let stats = run_sweep(&Validator::default(), &flawed_game(), None, false);

        assert_eq!(stats.total_spellings, 4);
        assert_eq!(
            stats.accepted + stats.shadowed.len() + stats.rejected.len(),
            stats.total_spellings
        );
    }

    #[test]
    fn respects_limit() {
        let stats = run_sweep(&Validator::default(), &flawed_game(), Some(1), false);
        assert_eq!(stats.total_spellings, 1);
    }
}
