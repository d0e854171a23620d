//! Day file paths
//!
//! Converts between calendar dates and `<root>/YYYY/MM/DD.log` paths.

use std::fmt;
use std::path::{Path, PathBuf};
use chrono::{Datelike, NaiveDate};

use crate::day::DAY_FILE_EXTENSION;
use crate::error::{Error, Result};

/// Get the path of the day file for `date` under `root`
pub fn day_file_path(root: &Path, date: NaiveDate) -> PathBuf {
    root.join(format!("{:04}", date.year()))
        .join(format!("{:02}", date.month()))
        .join(format!("{:02}.{}", date.day(), DAY_FILE_EXTENSION))
}

/// Derive the calendar date of a day file from its path
///
/// The grandparent directory name is the year, the parent directory name is
/// the month and the file stem is the day. Each is parsed as an integer; no
/// other validation of the layout is done.
pub fn date_from_path(path: &Path) -> Result<NaiveDate> {
    let stem = path.file_stem().and_then(|s| s.to_str());
    let month_dir = path.parent();
    let year_dir = month_dir.and_then(Path::parent);

    let day = parse_component::<u32>(path, stem, "day")?;
    let month = parse_component::<u32>(path, month_dir.and_then(dir_name), "month")?;
    let year = parse_component::<i32>(path, year_dir.and_then(dir_name), "year")?;

    if !(1..=9999).contains(&year) {
        return Err(Error::path_format(path, format!("Year out of range: {}", year)));
    }

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        Error::path_format(
            path,
            format!("Not a calendar date: {:04}-{:02}-{:02}", year, month, day),
        )
    })
}

fn dir_name(dir: &Path) -> Option<&str> {
    dir.file_name().and_then(|s| s.to_str())
}

fn parse_component<T: std::str::FromStr>(path: &Path, component: Option<&str>, what: &str) -> Result<T> {
    let component = component.ok_or_else(|| {
        Error::path_format(path, format!("Missing {} component", what))
    })?;

    component.parse::<T>().map_err(|_| {
        Error::path_format(path, format!("Invalid {} component: {:?}", what, component))
    })
}

/// A log file holding every record of one calendar day
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DayFile {
    path: PathBuf,
    date: NaiveDate,
}

impl DayFile {
    /// Create a day file from its path, deriving the date
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let date = date_from_path(&path)?;
        Ok(Self { path, date })
    }

    /// Create the day file for `date` under `root`
    pub fn for_date(root: &Path, date: NaiveDate) -> Self {
        Self {
            path: day_file_path(root, date),
            date,
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the date derived from the path
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Consume the day file, returning its path
    pub fn into_path(self) -> PathBuf {
        self.path
    }
}

impl fmt::Display for DayFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.path.display(), self.date)
    }
}
