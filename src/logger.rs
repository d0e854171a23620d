//! Leveled logging into day files
//!
//! [`Log`] writes records to stderr and, when a directory is configured, to
//! the day file of the current date. Every record names the component that
//! emitted it.
//!
//! Sinks are installed once per process. The first [`Log::new`] builds them
//! from its configuration; later calls share them and their sink settings
//! are ignored. [`Log::standalone`] builds private sinks instead.
//!
//! Records go through a dedicated tracing dispatcher, so the global tracing
//! subscriber of the host program is left alone.

use std::fmt;
use std::sync::OnceLock;
use chrono::NaiveDate;
use tracing::{debug, Dispatch};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::Layer;

use crate::config::{LogConfig, LogLevel};
use crate::day::DateRange;
use crate::error::Result;
use crate::format::{record_filter, RecordFormat, CRITICAL_TARGET, RECORD_TARGET};
use crate::search::Searcher;
use crate::writer::DayFileWriter;

/// Process-wide sinks, built by the first [`Log::new`]
static SHARED_DISPATCH: OnceLock<Dispatch> = OnceLock::new();

/// Build the stderr and day file sinks for `config`
fn build_dispatch(config: &LogConfig) -> Dispatch {
    let console = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .event_format(RecordFormat::console())
        .with_filter(record_filter(config.stream_level));

    let file = config.directory.as_ref().map(|dir| {
        tracing_subscriber::fmt::layer()
            .with_writer(DayFileWriter::new(dir))
            .with_ansi(false)
            .event_format(RecordFormat::file())
            .with_filter(record_filter(config.file_level))
    });

    let subscriber = tracing_subscriber::registry().with(console).with(file);
    Dispatch::new(subscriber)
}

/// Leveled logger writing to stderr and day files
#[derive(Clone)]
pub struct Log {
    config: LogConfig,
    dispatch: Dispatch,
}

impl fmt::Debug for Log {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Log").field("config", &self.config).finish_non_exhaustive()
    }
}

impl Log {
    /// Create a logger bound to the process-wide sinks
    pub fn new(config: LogConfig) -> Result<Self> {
        config.validate()?;

        let mut installed = false;
        let dispatch = SHARED_DISPATCH
            .get_or_init(|| {
                installed = true;
                build_dispatch(&config)
            })
            .clone();

        if !installed {
            debug!("log sinks already installed, reusing them");
        }

        Ok(Self { config, dispatch })
    }

    /// Create a logger with its own sinks
    pub fn standalone(config: LogConfig) -> Result<Self> {
        config.validate()?;
        let dispatch = build_dispatch(&config);
        Ok(Self { config, dispatch })
    }

    /// Get the configuration this logger was created with
    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    /// Emit a record at `level`
    pub fn log(&self, level: LogLevel, component: &str, text: impl fmt::Display) {
        tracing::dispatcher::with_default(&self.dispatch, || match level {
            LogLevel::Debug => tracing::debug!(target: RECORD_TARGET, component, "{}", text),
            LogLevel::Info => tracing::info!(target: RECORD_TARGET, component, "{}", text),
            LogLevel::Warning => tracing::warn!(target: RECORD_TARGET, component, "{}", text),
            LogLevel::Error => tracing::error!(target: RECORD_TARGET, component, "{}", text),
            LogLevel::Critical => tracing::error!(target: CRITICAL_TARGET, component, "{}", text),
        });
    }

    pub fn debug(&self, component: &str, text: impl fmt::Display) {
        self.log(LogLevel::Debug, component, text);
    }

    pub fn info(&self, component: &str, text: impl fmt::Display) {
        self.log(LogLevel::Info, component, text);
    }

    pub fn warning(&self, component: &str, text: impl fmt::Display) {
        self.log(LogLevel::Warning, component, text);
    }

    pub fn error(&self, component: &str, text: impl fmt::Display) {
        self.log(LogLevel::Error, component, text);
    }

    pub fn critical(&self, component: &str, text: impl fmt::Display) {
        self.log(LogLevel::Critical, component, text);
    }

    /// Emit an error record for `err`, followed by its chain of sources
    pub fn exception(&self, component: &str, text: impl fmt::Display, err: &(dyn std::error::Error + 'static)) {
        let mut record = format!("{}: {}", text, err);
        let mut source = err.source();
        while let Some(cause) = source {
            record.push_str(&format!("; caused by: {}", cause));
            source = cause.source();
        }
        self.log(LogLevel::Error, component, record);
    }

    /// Find the dates inside `range` whose day file has a line containing `fragment`
    pub fn search_text_date(&self, fragment: &str, range: &DateRange) -> Result<Vec<NaiveDate>> {
        Searcher::from_config(&self.config)?.search_dates(fragment, range)
    }

    /// Find the lines inside `range` that contain `fragment`
    pub fn search_text_row(&self, fragment: &str, range: &DateRange) -> Result<Vec<String>> {
        Searcher::from_config(&self.config)?.search_lines(fragment, range)
    }
}
