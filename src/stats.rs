//! Per-category run statistics and CSV reporting.
use std::collections::HashMap;
use std::path::Path;

use serde::Serialize;

use crate::categories::Categories;
use crate::error::Error;

/// Counters for one category of the prepare pipeline.
#[derive(Debug, Default, Clone)]
pub struct CategoryStats {
    pub files_seen: u64,
    pub files_kept: u64,
    pub files_discarded: u64,
    pub files_unreadable: u64,
    pub chunks_written: u64,
    pub chunks_capped_away: u64,
}

/// Counters for one category of the cleaning pre-pass.
#[derive(Debug, Default, Clone)]
pub struct CleaningStats {
    pub processed: u64,
    pub cleaned: u64,
    pub discarded: u64,
    pub unreadable: u64,
    pub removed_lines_total: u64,
}

#[derive(Serialize)]
struct PrepRow<'a> {
    category: &'a str,
    files_seen: u64,
    files_kept: u64,
    files_discarded: u64,
    chunks_written: u64,
    chunks_capped_away: u64,
}

#[derive(Serialize)]
struct CleaningRow<'a> {
    category_folder: &'a str,
    category_name: &'a str,
    processed: u64,
    cleaned: u64,
    discarded: u64,
    removed_lines_total: u64,
}

/// Write the prepare summary, one row per kept category, in keep-list
/// order. Categories with no recorded counters get a zero row.
pub fn write_prep_report(
    path: &Path,
    categories: &Categories,
    stats: &HashMap<String, CategoryStats>,
) -> Result<(), Error> {
    let mut writer = csv::Writer::from_path(path)?;
    for code in categories.keep_codes() {
        let s = stats.get(code).cloned().unwrap_or_default();
        writer.serialize(PrepRow {
            category: code,
            files_seen: s.files_seen,
            files_kept: s.files_kept,
            files_discarded: s.files_discarded,
            chunks_written: s.chunks_written,
            chunks_capped_away: s.chunks_capped_away,
        })?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the cleaning report, one row per seen category, sorted
/// case-insensitively by folder name.
pub fn write_cleaning_report(
    path: &Path,
    stats: &HashMap<String, CleaningStats>,
) -> Result<(), Error> {
    let mut codes: Vec<&String> = stats.keys().collect();
    codes.sort_by_key(|c| c.to_lowercase());

    let mut writer = csv::Writer::from_path(path)?;
    for code in codes {
        let s = &stats[code];
        writer.serialize(CleaningRow {
            category_folder: code,
            category_name: Categories::folder_name(code),
            processed: s.processed,
            cleaned: s.cleaned,
            discarded: s.discarded,
            removed_lines_total: s.removed_lines_total,
        })?;
    }
    writer.flush()?;
    Ok(())
}
