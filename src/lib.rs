//! # daylog
//!
//! Leveled logging into date-partitioned day files, and text search over
//! those files after the fact.
//!
//! Records are written to stderr and to `<root>/YYYY/MM/DD.log`, one file per
//! local calendar day. A [`Searcher`] lists the day files under a root, keeps
//! the ones inside a [`DateRange`], and finds either the dates with a
//! matching line or the matching lines themselves.
//!
//! ```no_run
//! use daylog::{DateRange, Log, LogConfig, LogLevel};
//!
//! # fn main() -> daylog::Result<()> {
//! let log = Log::new(
//!     LogConfig::new()
//!         .with_directory("logs")
//!         .with_stream_level(LogLevel::Warning),
//! )?;
//!
//! log.info("billing", "invoice 42 sent");
//!
//! let dates = log.search_text_date("invoice", &DateRange::last_days(7))?;
//! let rows = log.search_text_row("invoice 42", &DateRange::all())?;
//! # let _ = (dates, rows);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod day;
pub mod error;
pub mod logger;
pub mod search;

mod format;
mod writer;

pub use config::{LogConfig, LogLevel};
pub use day::{day_file_path, date_from_path, list_day_files, DateRange, DayFile};
pub use error::{Error, Result};
pub use logger::Log;
pub use search::{find_matching_dates, find_matching_lines, Searcher};
