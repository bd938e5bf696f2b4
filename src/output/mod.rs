//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_archive, print_check_result, print_similarity_report, print_sweep_statistics,
};
