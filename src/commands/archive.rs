//! Archive listing command
//!
//! Lists the dates for which a game was published.

use crate::game::{DailyGame, Gender};
use chrono::NaiveDate;

/// One published game in the archive listing
pub struct ArchiveEntry {
    pub date: NaiveDate,
    pub category: String,
    pub category_plural: String,
    pub category_gender: Gender,
    pub answers: usize,
}

/// Archive entries, newest first, one per date
#[must_use]
pub fn list_archive(archive: &[DailyGame]) -> Vec<ArchiveEntry> {
    let mut entries: Vec<ArchiveEntry> = archive
        .iter()
        .map(|daily| ArchiveEntry {
            date: daily.date,
            category: daily.game.category.clone(),
            category_plural: daily.game.category_plural.clone(),
            category_gender: daily.game.category_gender,
            answers: daily.game.answer_count(),
        })
        .collect();

    entries.sort_by(|a, b| b.date.cmp(&a.date));
    entries.dedup_by_key(|entry| entry.date);
    entries
}

/// Published dates, newest first
#[must_use]
pub fn archive_dates(archive: &[DailyGame]) -> Vec<NaiveDate> {
    list_archive(archive).into_iter().map(|e| e.date).collect()
}

/// Game published on `date`, or the newest one when no date is given
///
/// The first entry wins when a date appears twice.
#[must_use]
pub fn find_game(archive: &[DailyGame], date: Option<NaiveDate>) -> Option<&DailyGame> {
    let date = date.or_else(|| archive_dates(archive).first().copied())?;
    archive.iter().find(|daily| daily.date == date)
}
