//! Edit-distance similarity used to accept minor misspellings
//!
//! Similarity is the share of the longer string that survives the Levenshtein
//! edit script: `(len(longer) - distance) / len(longer)`, in `[0, 1]`.
//! Lengths are counted in Unicode scalar values.

use super::normalize;
use tracing::trace;

/// Minimum similarity (exclusive) for an input to match an accepted spelling
///
/// Tuned by hand: an 8-letter answer tolerates one typo (7/8 = 0.875), a
/// 7-letter answer tolerates none (6/7 ≈ 0.857).
pub const MATCH_THRESHOLD: f64 = 0.87;

/// Levenshtein distance with unit insert, delete and substitute costs
///
/// Keeps a single rolling row sized to the shorter string.
///
/// # Examples
/// ```
/// use abc_daily::core::edit_distance;
///
/// assert_eq!(edit_distance("kitten", "sitting"), 3);
/// assert_eq!(edit_distance("", "abc"), 3);
/// ```
#[must_use]
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (longer, shorter) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    // costs[j] = distance between the processed prefix of `longer` and shorter[..j]
    let mut costs: Vec<usize> = (0..=shorter.len()).collect();

    for (i, &lc) in longer.iter().enumerate() {
        let mut diagonal = costs[0];
        costs[0] = i + 1;

        for (j, &sc) in shorter.iter().enumerate() {
            let above = costs[j + 1];
            costs[j + 1] = if lc == sc {
                diagonal
            } else {
                1 + diagonal.min(above).min(costs[j])
            };
            diagonal = above;
        }
    }

    costs[shorter.len()]
}

/// Similarity score in `[0, 1]`; `1.0` for identical strings
///
/// Two empty strings are fully similar.
///
/// # Examples
/// ```
/// use abc_daily::core::similarity;
///
/// assert_eq!(similarity("PARIS", "PARIS"), 1.0);
/// assert_eq!(similarity("PARIS", "PARIX"), 0.8);
/// assert_eq!(similarity("", ""), 1.0);
/// ```
#[must_use]
pub fn similarity(a: &str, b: &str) -> f64 {
    let (longer, shorter) = if a.chars().count() < b.chars().count() {
        (b, a)
    } else {
        (a, b)
    };

    let longer_len = longer.chars().count();
    if longer_len == 0 {
        return 1.0;
    }

    (longer_len - edit_distance(longer, shorter)) as f64 / longer_len as f64
}

/// Matching parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchConfig {
    /// Similarity must be strictly greater than this to match
    pub threshold: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            threshold: MATCH_THRESHOLD,
        }
    }
}

/// Fuzzy comparison of user input against accepted spellings
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Matcher {
    config: MatchConfig,
}

impl Matcher {
    #[must_use]
    pub const fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.config.threshold
    }

    /// Whether a similarity score clears the threshold
    #[inline]
    #[must_use]
    pub fn accepts(&self, score: f64) -> bool {
        score > self.config.threshold
    }

    /// Whether `candidate` matches any of `aliases` once both are normalized
    ///
    /// An empty alias list never matches.
    pub fn is_match<S: AsRef<str>>(&self, candidate: &str, aliases: &[S]) -> bool {
        let candidate = normalize(candidate);
        aliases.iter().any(|alias| {
            let alias = normalize(alias.as_ref());
            let score = similarity(&alias, &candidate);
            trace!(%candidate, %alias, score, "alias similarity");
            self.accepts(score)
        })
    }
}

/// [`Matcher::is_match`] with the default threshold
///
/// # Examples
/// ```
/// use abc_daily::core::is_match;
///
/// assert!(is_match("strasbourg", &["Strasbourg"]));
/// assert!(is_match("Strasbourh", &["Strasbourg"]));
/// assert!(!is_match("Pariz", &["Paris"]));
/// assert!(!is_match::<&str>("Paris", &[]));
/// ```
pub fn is_match<S: AsRef<str>>(candidate: &str, aliases: &[S]) -> bool {
    Matcher::default().is_match(candidate, aliases)
}
