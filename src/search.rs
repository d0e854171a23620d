//! Text search over day files
//!
//! Matching is plain, case-sensitive substring containment on each line of a
//! file. Lines are split on `'\n'` only; a `'\r'` before it stays part of the
//! line. Nothing is cached: every call reads the files again.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use chrono::NaiveDate;
use tracing::{debug, trace};

use crate::config::LogConfig;
use crate::day::{list_day_files, DateRange, DayFile};
use crate::error::{Error, Result};

/// Read a day file and hand each of its lines to `visit`
///
/// `visit` returns `false` to stop scanning the file. Read errors, including
/// content that is not valid UTF-8, are returned unchanged.
fn scan_lines<F>(file: &DayFile, mut visit: F) -> Result<()>
where
    F: FnMut(&str) -> bool,
{
    let content = fs::read_to_string(file.path())?;
    trace!(path = %file.path().display(), bytes = content.len(), "scanning day file");

    for line in content.split('\n') {
        if !visit(line) {
            break;
        }
    }

    Ok(())
}

/// Find the dates of the day files that contain `fragment` on some line
///
/// Each file contributes its date at most once; scanning a file stops at its
/// first matching line. The result follows the order of `files`.
pub fn find_matching_dates(fragment: &str, files: &[DayFile]) -> Result<Vec<NaiveDate>> {
    let start = Instant::now();
    let mut dates = Vec::new();

    for file in files {
        let mut matched = false;
        scan_lines(file, |line| {
            matched = line.contains(fragment);
            !matched
        })?;

        if matched {
            dates.push(file.date());
        }
    }

    debug!(
        files = files.len(),
        matches = dates.len(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "searched day files for matching dates"
    );

    Ok(dates)
}

/// Find every line of the day files that contains `fragment`
///
/// Lines come back in file order, then in order within each file. They are
/// returned as written, without the file or date they came from.
pub fn find_matching_lines(fragment: &str, files: &[DayFile]) -> Result<Vec<String>> {
    let start = Instant::now();
    let mut lines = Vec::new();

    for file in files {
        scan_lines(file, |line| {
            if line.contains(fragment) {
                lines.push(line.to_string());
            }
            true
        })?;
    }

    debug!(
        files = files.len(),
        matches = lines.len(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "searched day files for matching lines"
    );

    Ok(lines)
}

/// Searches the day files under a log root
#[derive(Debug, Clone)]
pub struct Searcher {
    root: PathBuf,
}

impl Searcher {
    /// Create a searcher over an existing log root
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();
        if !root.exists() {
            return Err(Error::config(format!(
                "Log directory does not exist: {}",
                root.display()
            )));
        }

        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    /// Create a searcher over the directory of a logging configuration
    pub fn from_config(config: &LogConfig) -> Result<Self> {
        match config.directory {
            Some(ref dir) => Self::open(dir),
            None => Err(Error::config("Log directory is not set")),
        }
    }

    /// Get the log root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List the day files inside `range`, oldest first
    pub fn day_files(&self, range: &DateRange) -> Result<Vec<DayFile>> {
        list_day_files(&self.root, range)
    }

    /// Find the dates of `files` that contain `fragment`
    pub fn matching_dates(&self, fragment: &str, files: &[DayFile]) -> Result<Vec<NaiveDate>> {
        find_matching_dates(fragment, files)
    }

    /// Find the lines of `files` that contain `fragment`
    pub fn matching_lines(&self, fragment: &str, files: &[DayFile]) -> Result<Vec<String>> {
        find_matching_lines(fragment, files)
    }

    /// Find the dates inside `range` with at least one line containing `fragment`
    pub fn search_dates(&self, fragment: &str, range: &DateRange) -> Result<Vec<NaiveDate>> {
        let files = self.day_files(range)?;
        self.matching_dates(fragment, &files)
    }

    /// Find the lines inside `range` that contain `fragment`
    pub fn search_lines(&self, fragment: &str, range: &DateRange) -> Result<Vec<String>> {
        let files = self.day_files(range)?;
        self.matching_lines(fragment, &files)
    }
}
