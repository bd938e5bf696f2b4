//! Core domain types for answer matching
//!
//! Letters, text normalization and edit-distance similarity. Everything here
//! is pure and free of I/O.

mod letter;
mod normalize;
mod similarity;

pub use letter::{Letter, LetterMap, LetterSet};
pub use normalize::normalize;
pub use similarity::{MATCH_THRESHOLD, MatchConfig, Matcher, edit_distance, is_match, similarity};
