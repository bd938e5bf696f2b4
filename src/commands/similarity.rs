//! Similarity analysis command
//!
//! Shows how two spellings compare once normalized.

use crate::core::{Matcher, edit_distance, normalize, similarity};

/// Result of comparing two spellings
pub struct SimilarityReport {
    pub left: String,
    pub right: String,
    pub normalized_left: String,
    pub normalized_right: String,
    pub distance: usize,
    pub score: f64,
    pub threshold: f64,
    pub matched: bool,
}

/// Compare two spellings the way the validator does
#[must_use]
pub fn compare_spellings(left: &str, right: &str, matcher: &Matcher) -> SimilarityReport {
    let normalized_left = normalize(left);
    let normalized_right = normalize(right);
    let distance = edit_distance(&normalized_left, &normalized_right);
    let score = similarity(&normalized_left, &normalized_right);

    SimilarityReport {
        left: left.to_string(),
        right: right.to_string(),
        distance,
        score,
        threshold: matcher.threshold(),
        matched: matcher.accepts(score),
        normalized_left,
        normalized_right,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MatchConfig;

    #[test]
    fn compare_identical_after_normalization() {
        let report = compare_spellings("Orléans", "ORLEANS", &Matcher::default());

        assert_eq!(report.normalized_left, "ORLEANS");
        assert_eq!(report.distance, 0);
        assert!((report.score - 1.0).abs() < f64::EPSILON);
        assert!(report.matched);
    }

    #[test]
    fn compare_short_typo() {
        let report = compare_spellings("Paris", "parix", &Matcher::default());

        assert_eq!(report.distance, 1);
        assert!((report.score - 0.8).abs() < f64::EPSILON);
        assert!(!report.matched);
    }

    #[test]
    fn compare_reports_threshold() {
        let matcher = Matcher::new(MatchConfig { threshold: 0.5 });
        let report = compare_spellings("Paris", "parix", &matcher);

        assert!((report.threshold - 0.5).abs() < f64::EPSILON);
        assert!(report.matched);
    }
}
