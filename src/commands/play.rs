//! Line-based interactive game
//!
//! Each line read is submitted as an answer; a few words act as commands.

use crate::game::{DailyGame, Summary};
use crate::output::formatters::{format_date, format_duration};
use crate::validator::{GameSession, Outcome, Validator};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::time::Instant;

/// Play `daily` reading answers from `input` and writing to `output`
///
/// Returns the summary of the session when the board is complete, or when
/// the player quits or input runs out.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<R: BufRead, W: Write>(
    daily: &DailyGame,
    validator: Validator,
    mut input: R,
    mut output: W,
) -> io::Result<Summary> {
    let game = &daily.game;
    let mut session = GameSession::new(game, validator);
    let mut started = Instant::now();

    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║                    ABC Daily - {:<30}║", format_date(daily.date))?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(
        output,
        "Find one {} per letter of the alphabet: {} letters have an answer.",
        game.category.bright_cyan().bold(),
        game.playable_letters()
    )?;
    writeln!(output, "Commands: 'status' to see open letters, 'new' to restart, 'quit' to exit\n")?;

    loop {
        let Some(line) = read_line(&mut input, &mut output, "Answer")? else {
            break;
        };

        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => break,
            "status" | "s" => {
                print_status(&session, &mut output)?;
                continue;
            }
            "new" | "n" => {
                session.reset();
                started = Instant::now();
                writeln!(output, "\n🔄 New game started!\n")?;
                continue;
            }
            _ => {}
        }

        match session.submit(&line) {
            Outcome::Success { label } => {
                writeln!(output, "{} {}", "✓".green().bold(), label.bright_white().bold())?;
            }
            Outcome::Warning(warning) => {
                writeln!(output, "{} {}", "!".yellow().bold(), warning.message().yellow())?;
            }
            Outcome::Error => {
                writeln!(output, "{} {}", "✗".red().bold(), "no match".red())?;
            }
        }

        if session.is_complete() {
            writeln!(output, "\n{}", "═".repeat(70).bright_cyan())?;
            writeln!(
                output,
                "{}",
                "    🎉  A L P H A B E T   C O M P L E T E !  🎉    "
                    .bright_green()
                    .bold()
            )?;
            writeln!(output, "{}", "═".repeat(70).bright_cyan())?;
            break;
        }
    }

    let summary = session.summary(daily.date, started.elapsed());
    writeln!(
        output,
        "\n  Found {}/{} {} in {} ({} attempts)\n",
        summary.found_count().to_string().bright_cyan().bold(),
        summary.total,
        game.category_plural,
        format_duration(summary.duration),
        session.attempts()
    )?;

    Ok(summary)
}

fn print_status<W: Write>(session: &GameSession<'_>, output: &mut W) -> io::Result<()> {
    let state = session.state();
    writeln!(output)?;
    for (letter, label) in state.found.iter() {
        if let Some(label) = label {
            writeln!(output, "  {} {}", letter.to_string().green().bold(), label)?;
        }
    }
    writeln!(output, "  Open letters: {}", session.remaining().to_string().bright_yellow())?;
    writeln!(output, "  No answer:    {}\n", state.dead.to_string().bright_black())?;
    Ok(())
}

/// Read one trimmed, non-empty line after printing a prompt
///
/// Returns `None` at end of input.
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    loop {
        write!(output, "{prompt}: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed = line.trim();
        if !trimmed.is_empty() {
            return Ok(Some(trimmed.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Letter, LetterMap};
    use crate::game::{Game, GameValue, Gender};
    use chrono::NaiveDate;
    use std::io::Cursor;

    fn tiny_daily() -> DailyGame {
        let mut values: LetterMap<Vec<GameValue>> = LetterMap::default();
        values[Letter::L] = vec![GameValue::new("Lyon")];
        values[Letter::P] = vec![GameValue::new("Paris")];

        DailyGame {
            date: NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
            game: Game {
                category: "ville".to_string(),
                category_plural: "villes".to_string(),
                category_gender: Gender::Feminine,
                values,
            },
        }
    }

    fn play(script: &str) -> (Summary, String) {
        let daily = tiny_daily();
        let mut output = Vec::new();
        let summary = run_play(
            &daily,
            Validator::default(),
            Cursor::new(script.to_string()),
            &mut output,
        )
        .unwrap();
        (summary, String::from_utf8(output).unwrap())
    }

    #[test]
    fn completes_board() {
        let (summary, output) = play("lyon\n\nparis\n");

        assert_eq!(summary.found_count(), 2);
        assert_eq!(summary.total, 2);
        assert!(output.contains("C O M P L E T E"));
    }

    #[test]
    fn stops_at_end_of_input() {
        let (summary, output) = play("lyon\n");

        assert_eq!(summary.found_count(), 1);
        assert!(!output.contains("C O M P L E T E"));
    }

    #[test]
    fn quit_command_stops_early() {
        let (summary, _) = play("quit\nparis\n");
        assert_eq!(summary.found_count(), 0);
    }

    #[test]
    fn reports_warnings_and_misses() {
        let (_, output) = play("lyon\nlille\nzurich\npau\n");

        assert!(output.contains("already have a solution for letter L"));
        assert!(output.contains("no solution starts with letter Z"));
        assert!(output.contains("no match"));
    }

    #[test]
    fn new_command_resets() {
        let (summary, output) = play("lyon\nnew\nparis\n");

        assert!(output.contains("New game started"));
        assert_eq!(summary.found_count(), 1);
        assert_eq!(summary.found[Letter::P].as_deref(), Some("Paris"));
    }

    #[test]
    fn status_lists_found_and_open_letters() {
        let (_, output) = play("lyon\nstatus\n");

        assert!(output.contains("Lyon"));
        assert!(output.contains("Open letters"));
    }

    #[test]
    fn header_shows_french_date() {
        let (_, output) = play("");
        assert!(output.contains("16 octobre 2026"));
    }
}
