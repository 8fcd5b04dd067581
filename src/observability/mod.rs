//! Optional OpenTelemetry tracing with file-based export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → FileSpanExporter → keylist-otlp.json
//! ```
//!
//! Spans are written as OTLP JSON, one batch per line, to
//! `<data dir>/keylist-otlp.json`. The file rotates at 10 MB and the three
//! newest backups are kept. Nothing is installed unless `trace_level` is
//! configured; the level string is an [`tracing_subscriber::EnvFilter`]
//! directive such as `debug` or `keylist::app=trace`.

mod exporter;
mod file_writer;
mod init;

pub use init::{init_tracing, TRACE_FILE};
