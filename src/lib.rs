//! ABC Daily
//!
//! Answer validation for a daily category game: find one answer per letter of
//! the alphabet. Input is normalized, bucketed by its first letter and
//! compared against the accepted spellings with an edit-distance similarity.
//!
//! # Quick Start
//!
//! ```rust
//! use abc_daily::core::{Letter, LetterMap};
//! use abc_daily::game::GameValue;
//! use abc_daily::validator::{Outcome, ValidationState, validate_input};
//!
//! let mut candidates: LetterMap<Vec<GameValue>> = LetterMap::default();
//! candidates[Letter::O] = vec![GameValue::new("Orléans")];
//!
//! let mut state = ValidationState::new();
//! let outcome = validate_input("orleans", &state, &candidates);
//! assert_eq!(outcome.label(), Some("Orléans"));
//!
//! state.record(Letter::O, "Orléans");
//! assert!(matches!(validate_input("Orléans", &state, &candidates), Outcome::Warning(_)));
//! ```

// Letters, normalization and similarity
pub mod core;

// Game catalogs and documents
pub mod game;

// Input validation
pub mod validator;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
