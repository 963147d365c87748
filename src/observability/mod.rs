//! OpenTelemetry-based observability with file-based trace export.
//!
//! `tracing` spans and events are bridged into OpenTelemetry and written as
//! OTLP-JSON lines to a size-rotated file in the plugin's data directory:
//!
//! ```text
//! tracing → tracing-opentelemetry → opentelemetry_sdk → OtlpFileExporter → RotatingFile
//! ```
//!
//! The level is set with the `trace_level` configuration key (an `EnvFilter`
//! directive, default `info`). Rotation limits come from `trace_max_bytes` and
//! `trace_backups`.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`exporter`]: Span exporter and tracer provider
//! - [`otlp`]: OTLP-JSON document types
//! - [`rotation`]: Size-rotated trace file

pub mod exporter;
pub mod init;
pub mod otlp;
pub mod rotation;

pub use init::init_tracing;
pub use rotation::RotationPolicy;
