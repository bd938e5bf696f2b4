//! Display functions for command results

use super::formatters::{format_date, similarity_bar};
use crate::commands::{ArchiveEntry, CheckResult, SimilarityReport, SweepIssue, SweepStatistics};
use crate::game::Gender;
use crate::validator::Outcome;
use colored::Colorize;

/// Print the result of checking one input
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Input:  {}", result.input.bright_yellow().bold());
    match result.letter {
        Some(letter) => println!("Letter: {letter}"),
        None => println!("Letter: {}", "none".bright_black()),
    }
    println!("{}", "─".repeat(60).cyan());

    match &result.outcome {
        Outcome::Success { label } => {
            println!("{}", format!("✅ Accepted as {label}").green().bold());
        }
        Outcome::Warning(warning) => {
            println!("{}", format!("⚠️  {warning}").yellow().bold());
        }
        Outcome::Error => println!("{}", "❌ No match".red().bold()),
    }
}

/// Print a similarity comparison
pub fn print_similarity_report(report: &SimilarityReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} / {} ",
        "SIMILARITY:".bright_cyan().bold(),
        report.left.bright_yellow().bold(),
        report.right.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Normalized:  {} / {}", report.normalized_left, report.normalized_right);
    println!("   Distance:    {} edits", report.distance);
    println!(
        "   Score:       [{}] {}",
        similarity_bar(report.score, 30).green(),
        format!("{:.3}", report.score).bright_yellow()
    );
    println!("   Threshold:   > {:.3}", report.threshold);

    if report.matched {
        println!("\n{}", "✅ Match".green().bold());
    } else {
        println!("\n{}", "❌ No match".red().bold());
    }
}

fn print_issue(issue: &SweepIssue) {
    let verdict = match &issue.outcome {
        Outcome::Success { label } => format!("claimed by {label}"),
        Outcome::Warning(warning) => warning.message(),
        Outcome::Error => "no match".to_string(),
    };
    println!(
        "  {} {} ({}) → {}",
        issue.letter.to_string().bold(),
        issue.spelling.bright_white(),
        issue.label,
        verdict
    );
}

/// Print sweep statistics
pub fn print_sweep_statistics(stats: &SweepStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Sweep Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall".bright_cyan().bold());
    println!("  Spellings checked:   {}", stats.total_spellings);
    println!(
        "  Resolved correctly:  {} {}",
        stats.accepted,
        format!(
            "({:.1}%)",
            stats.accepted as f64 / stats.total_spellings.max(1) as f64 * 100.0
        )
        .green()
    );
    println!("  Time taken:          {:.2}s", stats.total_time.as_secs_f64());

    if !stats.shadowed.is_empty() {
        println!("\n😰 {}", "Shadowed by an earlier answer".yellow().bold());
        for issue in &stats.shadowed {
            print_issue(issue);
        }
    }

    if !stats.rejected.is_empty() {
        println!("\n❌ {}", "Never accepted".red().bold());
        for issue in &stats.rejected {
            print_issue(issue);
        }
    }

    if stats.is_clean() {
        println!("\n{}", "✅ Every spelling resolves to its own answer".green().bold());
    } else {
        let mut letters: Vec<_> = stats.issues_per_letter.iter().collect();
        letters.sort();
        let listing: Vec<String> = letters
            .into_iter()
            .map(|(letter, count)| format!("{letter}:{count}"))
            .collect();
        println!("\n  Issues per letter: {}", listing.join(" "));
    }
}

/// Print the archive listing
pub fn print_archive(entries: &[ArchiveEntry]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "ARCHIVE".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    if entries.is_empty() {
        println!("\n  No games published yet.");
        return;
    }

    for entry in entries {
        let article = match entry.category_gender {
            Gender::Masculine => "un",
            Gender::Feminine => "une",
        };
        println!(
            "  {} {} {} ({} answers)",
            format!("{:<22}", format_date(entry.date)).bright_yellow(),
            article.bright_black(),
            entry.category,
            entry.answers
        );
    }
}
