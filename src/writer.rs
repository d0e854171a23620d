//! Day file sink
//!
//! A [`MakeWriter`] that appends each record to the day file of the current
//! local date, opening a new file when the date changes.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use chrono::{Local, NaiveDate};
use parking_lot::{Mutex, MutexGuard};
use tracing_subscriber::fmt::MakeWriter;

use crate::day::day_file_path;

/// Open day file
#[derive(Debug)]
struct OpenDay {
    date: NaiveDate,
    file: File,
}

/// Writes records into `<root>/YYYY/MM/DD.log`
#[derive(Debug)]
pub(crate) struct DayFileWriter {
    /// Root of the day file tree
    root: PathBuf,
    /// File for the date of the last record
    current: Mutex<Option<OpenDay>>,
}

impl DayFileWriter {
    /// Create a writer under `root`; nothing is created until the first write
    pub(crate) fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            current: Mutex::new(None),
        }
    }
}

impl<'a> MakeWriter<'a> for DayFileWriter {
    type Writer = DayFileGuard<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        DayFileGuard {
            root: &self.root,
            current: self.current.lock(),
        }
    }
}

/// Exclusive access to the open day file for one record
pub(crate) struct DayFileGuard<'a> {
    root: &'a Path,
    current: MutexGuard<'a, Option<OpenDay>>,
}

impl DayFileGuard<'_> {
    fn file_for(&mut self, date: NaiveDate) -> io::Result<&mut File> {
        let open = match self.current.take() {
            Some(open) if open.date == date => open,
            _ => open_day(self.root, date)?,
        };
        Ok(&mut self.current.insert(open).file)
    }
}

impl Write for DayFileGuard<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let today = Local::now().date_naive();
        self.file_for(today)?.write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        let today = Local::now().date_naive();
        self.file_for(today)?.write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.current.as_mut() {
            Some(open) => open.file.flush(),
            None => Ok(()),
        }
    }
}

fn open_day(root: &Path, date: NaiveDate) -> io::Result<OpenDay> {
    let path = day_file_path(root, date);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    Ok(OpenDay { date, file })
}
