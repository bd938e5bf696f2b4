//! Classification of a submitted answer

use crate::core::Letter;
use std::fmt;

/// Why an input was refused without being compared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    /// The letter already has a recorded answer
    AlreadySolved(Letter),
    /// No accepted answer starts with the letter
    NoSolution(Letter),
}

impl Warning {
    #[must_use]
    pub const fn letter(self) -> Letter {
        match self {
            Self::AlreadySolved(letter) | Self::NoSolution(letter) => letter,
        }
    }

    /// User-facing explanation
    #[must_use]
    pub fn message(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadySolved(letter) => write!(f, "already have a solution for letter {letter}"),
            Self::NoSolution(letter) => write!(f, "no solution starts with letter {letter}"),
        }
    }
}

/// Result of validating one input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The input matched an answer; `label` is the canonical spelling to record
    Success { label: String },
    /// The input is well-formed but redundant or futile
    Warning(Warning),
    /// The input matched nothing
    Error,
}

impl Outcome {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Canonical label when the input matched
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Success { label } => Some(label),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success { label } => write!(f, "success: {label}"),
            Self::Warning(warning) => write!(f, "warning: {warning}"),
            Self::Error => write!(f, "error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warning_messages_mention_letter() {
        assert_eq!(
            Warning::AlreadySolved(Letter::A).message(),
            "already have a solution for letter A"
        );
        assert_eq!(
            Warning::NoSolution(Letter::Z).message(),
            "no solution starts with letter Z"
        );
        assert_eq!(Warning::NoSolution(Letter::Z).letter(), Letter::Z);
    }

    #[test]
    fn outcome_label() {
        let success = Outcome::Success {
            label: "Paris".to_string(),
        };
        assert!(success.is_success());
        assert_eq!(success.label(), Some("Paris"));
        assert_eq!(Outcome::Error.label(), None);
        assert!(!Outcome::Warning(Warning::NoSolution(Letter::X)).is_success());
    }

    #[test]
    fn outcome_display() {
        assert_eq!(Outcome::Error.to_string(), "error");
        assert_eq!(
            Outcome::Warning(Warning::AlreadySolved(Letter::B)).to_string(),
            "warning: already have a solution for letter B"
        );
    }
}
