//! Day file layout and discovery
//!
//! Logs are partitioned into one file per calendar day, laid out as
//! `<root>/<YYYY>/<MM>/<DD>.log`. A file's date comes from its path alone.
//! This module maps dates to paths and back, and lists the day files under a
//! root in chronological order, optionally restricted to a date range.

mod path;
mod range;
mod enumerate;

pub use path::{day_file_path, date_from_path, DayFile};
pub use range::DateRange;
pub use enumerate::list_day_files;

/// File extension of day files
pub(crate) const DAY_FILE_EXTENSION: &str = "log";
