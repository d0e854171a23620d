//! Record format for emitted log lines
//!
//! Records are plain text lines:
//!
//! ```text
//! 2025-09-14 08:15:02,417 [INFO] - billing - invoice sent
//! ```
//!
//! The console variant drops the timestamp. Records are tracing events under
//! the [`RECORD_TARGET`] and [`CRITICAL_TARGET`] targets; tracing has no
//! level above `ERROR`, so critical records use their own target.

use std::fmt;
use chrono::Local;
use tracing::field::{Field, Visit};
use tracing::{Event, Metadata, Subscriber};
use tracing_subscriber::filter::{filter_fn, FilterFn};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

use crate::config::LogLevel;

/// Target of records emitted through [`Log`](crate::Log)
pub(crate) const RECORD_TARGET: &str = "daylog::record";
/// Target of critical records
pub(crate) const CRITICAL_TARGET: &str = "daylog::record::critical";

/// Timestamp layout of file records, millisecond precision
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

impl LogLevel {
    /// Get the level of a record, or `None` for events that are not records
    pub(crate) fn of_record(meta: &Metadata<'_>) -> Option<Self> {
        match meta.target() {
            CRITICAL_TARGET => Some(Self::Critical),
            RECORD_TARGET => Some(match *meta.level() {
                tracing::Level::ERROR => Self::Error,
                tracing::Level::WARN => Self::Warning,
                tracing::Level::INFO => Self::Info,
                _ => Self::Debug,
            }),
            _ => None,
        }
    }
}

/// Filter passing records at or above `threshold`
///
/// Other tracing events, including this crate's own diagnostics, never pass,
/// so a search cannot write into the files it reads.
pub(crate) fn record_filter(threshold: LogLevel) -> FilterFn<impl Fn(&Metadata<'_>) -> bool> {
    filter_fn(move |meta| LogLevel::of_record(meta).map_or(false, |level| level >= threshold))
}

/// Formats records as single text lines
#[derive(Debug, Clone, Copy)]
pub(crate) struct RecordFormat {
    timestamp: bool,
}

impl RecordFormat {
    /// Format used for day files
    pub(crate) fn file() -> Self {
        Self { timestamp: true }
    }

    /// Format used for the console
    pub(crate) fn console() -> Self {
        Self { timestamp: false }
    }
}

impl<S, N> FormatEvent<S, N> for RecordFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let level = LogLevel::of_record(event.metadata()).unwrap_or(LogLevel::Debug);

        let mut fields = RecordFields::default();
        event.record(&mut fields);

        if self.timestamp {
            write!(writer, "{} ", Local::now().format(TIMESTAMP_FORMAT))?;
        }
        write!(writer, "[{}] - ", level.label())?;
        if let Some(component) = fields.component {
            write!(writer, "{} - ", component)?;
        }
        writeln!(writer, "{}", escape_newlines(&fields.message))
    }
}

/// Keep a record on one line; day files are searched line by line
fn escape_newlines(message: &str) -> std::borrow::Cow<'_, str> {
    if message.contains('\n') {
        message.replace('\n', "\\n").into()
    } else {
        message.into()
    }
}

/// Collects the component and message of a record
#[derive(Debug, Default)]
struct RecordFields {
    component: Option<String>,
    message: String,
}

impl Visit for RecordFields {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "component" => self.component = Some(value.to_string()),
            "message" => self.message = value.to_string(),
            _ => {}
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        match field.name() {
            "component" => self.component = Some(format!("{:?}", value)),
            "message" => self.message = format!("{:?}", value),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::Arc;
    use parking_lot::Mutex;
    use tracing_subscriber::fmt::MakeWriter;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::Layer;

    #[derive(Clone, Default)]
    struct TestWriter {
        buf: Arc<Mutex<Vec<u8>>>,
    }

    impl TestWriter {
        fn output(&self) -> String {
            String::from_utf8(self.buf.lock().clone()).unwrap()
        }
    }

    impl io::Write for TestWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buf.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for TestWriter {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn capture(format: RecordFormat, threshold: LogLevel, emit: impl FnOnce()) -> String {
        let writer = TestWriter::default();
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(writer.clone())
            .with_ansi(false)
            .event_format(format)
            .with_filter(record_filter(threshold));
        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, emit);
        writer.output()
    }

    #[test]
    fn test_console_format() {
        let output = capture(RecordFormat::console(), LogLevel::Debug, || {
            let component = "billing";
            tracing::info!(target: RECORD_TARGET, component, "invoice {} sent", 42);
            tracing::error!(target: CRITICAL_TARGET, component, "ledger offline");
        });

        assert_eq!(output, "[INFO] - billing - invoice 42 sent\n[CRITICAL] - billing - ledger offline\n");
    }

    #[test]
    fn test_file_format_has_timestamp() {
        let output = capture(RecordFormat::file(), LogLevel::Debug, || {
            tracing::warn!(target: RECORD_TARGET, component = "cache", "evicting");
        });

        let line = output.trim_end_matches('\n');
        let (timestamp, rest) = line.split_at(23);
        assert!(chrono::NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M:%S,%3f").is_ok(), "{}", line);
        assert_eq!(rest, " [WARNING] - cache - evicting");
    }

    #[test]
    fn test_threshold_and_foreign_events() {
        let output = capture(RecordFormat::console(), LogLevel::Warning, || {
            tracing::debug!(target: RECORD_TARGET, component = "a", "dropped");
            tracing::info!(target: RECORD_TARGET, component = "a", "dropped");
            tracing::warn!(target: RECORD_TARGET, component = "a", "kept");
            tracing::error!(target: "some::other::crate", "not a record");
            tracing::error!("not a record either");
        });

        assert_eq!(output, "[WARNING] - a - kept\n");
    }

    #[test]
    fn test_newlines_are_escaped() {
        let output = capture(RecordFormat::console(), LogLevel::Debug, || {
            tracing::info!(target: RECORD_TARGET, component = "a", "two\nlines");
        });

        assert_eq!(output, "[INFO] - a - two\\nlines\n");
    }

    #[test]
    fn test_level_of_record() {
        let output = capture(RecordFormat::console(), LogLevel::Critical, || {
            tracing::error!(target: RECORD_TARGET, component = "a", "plain error");
            tracing::error!(target: CRITICAL_TARGET, component = "a", "critical");
        });

        assert_eq!(output, "[CRITICAL] - a - critical\n");
    }
}
