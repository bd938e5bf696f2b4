//! Command implementations

pub mod archive;
pub mod check;
pub mod play;
pub mod similarity;
pub mod sweep;

pub use archive::{ArchiveEntry, archive_dates, find_game, list_archive};
pub use check::{CheckConfig, CheckResult, parse_found, run_check};
pub use play::run_play;
pub use similarity::{SimilarityReport, compare_spellings};
pub use sweep::{SweepIssue, SweepStatistics, run_sweep};
