//! Formatting utilities for terminal output

use chrono::{Locale, NaiveDate, NaiveTime};

/// Format a date the way French readers expect, e.g. `16 octobre 2026`
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.and_time(NaiveTime::MIN)
        .and_utc()
        .format_localized("%-d %B %Y", Locale::fr_FR)
        .to_string()
}

/// Format an integer with at least two digits
#[must_use]
pub fn two_digits(value: u64) -> String {
    format!("{value:02}")
}

/// Format a duration in seconds as `mm:ss`, or `h:mm:ss` past one hour
#[must_use]
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{hours}:{}:{}", two_digits(minutes), two_digits(secs))
    } else {
        format!("{}:{}", two_digits(minutes), two_digits(secs))
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing a similarity score in `[0, 1]`
#[must_use]
pub fn similarity_bar(score: f64, width: usize) -> String {
    create_progress_bar(score, 1.0, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_in_french() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert_eq!(format_date(date), "16 octobre 2026");

        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(format_date(date), "1 janvier 2025");
    }

    #[test]
    fn two_digit_padding() {
        assert_eq!(two_digits(0), "00");
        assert_eq!(two_digits(7), "07");
        assert_eq!(two_digits(42), "42");
        assert_eq!(two_digits(123), "123");
    }

    #[test]
    fn duration_minutes_seconds() {
        assert_eq!(format_duration(0), "00:00");
        assert_eq!(format_duration(65), "01:05");
        assert_eq!(format_duration(3599), "59:59");
    }

    #[test]
    fn duration_with_hours() {
        assert_eq!(format_duration(3600), "1:00:00");
        assert_eq!(format_duration(3723), "1:02:03");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn similarity_bar_half() {
        assert_eq!(similarity_bar(0.5, 10), "█████░░░░░");
    }
}
