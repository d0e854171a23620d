//! Day file discovery
//!
//! Walks a log root recursively and lists the day files it holds.

use std::path::Path;
use std::time::Instant;
use tracing::debug;
use walkdir::WalkDir;

use crate::day::{DateRange, DayFile, DAY_FILE_EXTENSION};
use crate::error::Result;

/// List the day files under `root` that fall inside `range`
///
/// Every regular `*.log` file at any depth is considered a day file. Its date
/// is derived from its path, so a file that does not follow the
/// `YYYY/MM/DD.log` layout fails the whole listing instead of being skipped.
/// The result is sorted by date, ties keeping directory order.
pub fn list_day_files(root: &Path, range: &DateRange) -> Result<Vec<DayFile>> {
    let start = Instant::now();

    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        // Symlinked day files count, symlinked directories are not descended
        let is_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && entry.path().is_file());
        if !is_file {
            continue;
        }

        let is_day_file = entry
            .path()
            .extension()
            .map_or(false, |ext| ext == DAY_FILE_EXTENSION);
        if is_day_file {
            files.push(DayFile::from_path(entry.into_path())?);
        }
    }

    let discovered = files.len();

    // Stable, so same-date files keep discovery order
    files.sort_by_key(DayFile::date);
    files.retain(|file| range.contains(file.date()));

    debug!(
        root = %root.display(),
        range = %range,
        discovered,
        selected = files.len(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "listed day files"
    );

    Ok(files)
}
