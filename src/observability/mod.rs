//! OpenTelemetry-based observability with file-based trace export.
//!
//! Spans emitted through `tracing` are exported as OTLP JSON to a rotating
//! file in the plugin data directory, for offline analysis and debugging:
//!
//! ```text
//! tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → catalog-otlp.json
//! ```
//!
//! Files rotate at 10MB with 3 backups retained.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup from the plugin configuration
//! - [`exporter`]: Span exporter and OTLP JSON formatting
//! - [`file_writer`]: Rotating file writer

mod exporter;
mod file_writer;
mod init;

pub use init::{init_tracing, TRACE_FILE_NAME};
