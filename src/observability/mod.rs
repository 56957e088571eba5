//! OpenTelemetry-based observability with file-based trace export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON lines
//! ```
//!
//! - **File-Based Export**: `~/.local/share/zellij/zelltable/zelltable-otlp.json`
//! - **Rotation**: at 10MB, keeping 3 numbered backups
//! - **Format**: OTLP/JSON, one export batch per line
//!
//! The level comes from the `trace_level` plugin option (default `info`) and
//! accepts any [`tracing_subscriber::EnvFilter`] directive.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`exporter`]: Span exporter and OTLP JSON encoding
//! - [`file_writer`]: Rotating line writer

mod exporter;
mod file_writer;
mod init;

pub use init::{init_tracing, TRACE_FILE_NAME};
