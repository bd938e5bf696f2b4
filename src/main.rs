//! ABC Daily - CLI
//!
//! Play the daily alphabet game, check answers and audit game catalogs.

use abc_daily::{
    commands::{
        CheckConfig, archive_dates, compare_spellings, find_game, list_archive, parse_found,
        run_check, run_play, run_sweep,
    },
    core::{Letter, LetterSet, MATCH_THRESHOLD, MatchConfig},
    game::{DailyGame, loader, sample_game},
    output::{print_archive, print_check_result, print_similarity_report, print_sweep_statistics},
    validator::Validator,
};
use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    name = "abc_daily",
    about = "Daily alphabet category game: one answer per letter",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Daily game JSON file (default: the embedded sample game)
    #[arg(short, long, global = true)]
    game: Option<PathBuf>,

    /// Archive JSON file to pick the game from instead of --game
    #[arg(short, long, global = true, conflicts_with = "game")]
    archive: Option<PathBuf>,

    /// Date of the archived game, YYYY-MM-DD (default: the newest)
    #[arg(short, long, global = true, requires = "archive")]
    date: Option<NaiveDate>,

    /// Similarity an answer must exceed to be accepted
    #[arg(short, long, global = true, default_value_t = MATCH_THRESHOLD, value_parser = parse_threshold)]
    threshold: f64,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Play the game interactively (default)
    Play,

    /// Validate a single answer
    Check {
        /// The answer to validate
        input: String,

        /// Letters already solved, e.g. "ABQ"
        #[arg(long, default_value = "")]
        solved: LetterSet,

        /// Letters with no possible answer, on top of the game's empty letters
        #[arg(long, default_value = "")]
        dead: LetterSet,

        /// Label already recorded for a letter, e.g. "P=Paris" (repeatable)
        #[arg(long, value_parser = parse_found)]
        found: Vec<(Letter, String)>,
    },

    /// Check that every accepted spelling resolves to its own answer
    Sweep {
        /// Limit number of spellings to check
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Compare two spellings
    Similarity {
        /// First spelling
        left: String,

        /// Second spelling
        right: String,
    },

    /// List the dates of an archive document
    Archive {
        /// Archive JSON file
        path: PathBuf,
    },
}

fn parse_threshold(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("Invalid threshold '{s}': {e}"))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("Threshold must be between 0 and 1, got {value}"))
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(io::stderr))
        .init();
}

/// Pick the game for `date` (or the newest) out of an archive
fn select_from_archive(archive: &[DailyGame], date: Option<NaiveDate>) -> Result<DailyGame> {
    if let Some(daily) = find_game(archive, date) {
        return Ok(daily.clone());
    }

    let available: Vec<String> = archive_dates(archive)
        .iter()
        .map(ToString::to_string)
        .collect();
    let wanted = date.map_or_else(|| "any date".to_string(), |d| d.to_string());
    Err(anyhow!("available dates: [{}]", available.join(", ")))
        .with_context(|| format!("No game published for {wanted}"))
}

/// Load the game given with -g, the one picked from -a/-d, or the embedded sample
fn load_game(cli: &Cli) -> Result<DailyGame> {
    match (&cli.game, &cli.archive) {
        (Some(path), _) => loader::load_daily_game(path)
            .with_context(|| format!("Failed to load game from {}", path.display())),
        (None, Some(path)) => {
            let archive = loader::load_archive(path)
                .with_context(|| format!("Failed to load archive from {}", path.display()))?;
            select_from_archive(&archive, cli.date)
        }
        (None, None) => sample_game().context("Embedded sample game is invalid"),
    }
}

fn main() -> Result<()> {
    init_tracing();
    let mut cli = Cli::parse();

    let validator = Validator::new(MatchConfig {
        threshold: cli.threshold,
    });
    debug!(threshold = cli.threshold, "validator configured");

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let daily = load_game(&cli)?;
            run_play(&daily, validator, io::stdin().lock(), io::stdout().lock())?;
        }
        Commands::Check {
            input,
            solved,
            dead,
            found,
        } => {
            let daily = load_game(&cli)?;
            let config = CheckConfig {
                input,
                solved,
                dead,
                found,
            };
            print_check_result(&run_check(&config, &daily.game, &validator));
        }
        Commands::Sweep { limit } => {
            let daily = load_game(&cli)?;
            println!("🎯 Sweeping {}...", daily.game);
            let stats = run_sweep(&validator, &daily.game, limit, true);
            print_sweep_statistics(&stats);
        }
        Commands::Similarity { left, right } => {
            print_similarity_report(&compare_spellings(&left, &right, validator.matcher()));
        }
        Commands::Archive { path } => {
            let archive = loader::load_archive(&path)
                .with_context(|| format!("Failed to load archive from {}", path.display()))?;
            print_archive(&list_archive(&archive));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use abc_daily::game::loader::parse_archive;

    const ARCHIVE: &str = r#"{"data": [
        {"date": "2026-10-15", "game": {"category": "fleuve", "categoryPlural": "fleuves",
          "categoryGender": "m", "values": {"L": [{"label": "Loire"}]}}},
        {"date": "2026-10-16", "game": {"category": "ville", "categoryPlural": "villes",
          "categoryGender": "f", "values": {"P": [{"label": "Paris"}]}}}
    ]}"#;

    #[test]
    fn threshold_in_range() {
        assert_eq!(parse_threshold("0.87"), Ok(0.87));
        assert_eq!(parse_threshold("0"), Ok(0.0));
        assert_eq!(parse_threshold("1"), Ok(1.0));
    }

    #[test]
    fn threshold_out_of_range() {
        assert!(parse_threshold("1.01").is_err());
        assert!(parse_threshold("-0.1").is_err());
    }

    #[test]
    fn threshold_not_a_number() {
        assert!(parse_threshold("high").is_err());
        assert!(parse_threshold("").is_err());
        assert!(parse_threshold("NaN").is_err());
    }

    #[test]
    fn archive_date_found() {
        let archive = parse_archive(ARCHIVE).unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap();

        let daily = select_from_archive(&archive, Some(date)).unwrap();
        assert_eq!(daily.date, date);
        assert_eq!(daily.game.category, "fleuve");
    }

    #[test]
    fn archive_date_missing() {
        let archive = parse_archive(ARCHIVE).unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();

        let message = format!("{:#}", select_from_archive(&archive, Some(date)).unwrap_err());
        assert!(message.contains("No game published for 2026-01-01"));
        assert!(message.contains("2026-10-16, 2026-10-15"));
    }

    #[test]
    fn archive_without_date_picks_newest() {
        let archive = parse_archive(ARCHIVE).unwrap();
        let daily = select_from_archive(&archive, None).unwrap();
        assert_eq!(daily.game.category, "ville");
    }

    #[test]
    fn empty_archive_is_an_error() {
        assert!(select_from_archive(&[], None).is_err());
    }

    #[test]
    fn date_requires_archive() {
        let result = Cli::try_parse_from(["abc_daily", "--date", "2026-10-16", "play"]);
        assert!(result.is_err());

        let cli = Cli::try_parse_from(["abc_daily", "-a", "x.json", "-d", "2026-10-16", "play"])
            .unwrap();
        assert_eq!(cli.date, NaiveDate::from_ymd_opt(2026, 10, 16));
    }

    #[test]
    fn game_conflicts_with_archive() {
        let result = Cli::try_parse_from(["abc_daily", "-g", "a.json", "-a", "b.json"]);
        assert!(result.is_err());
    }
}
