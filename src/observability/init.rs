//! Subscriber setup: `EnvFilter` plus an OpenTelemetry layer feeding the
//! trace file exporter.

use super::exporter;
use super::rotation::RotationPolicy;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// File name of the live trace file inside the data directory.
pub const TRACE_FILE_NAME: &str = "fruitstand-otlp.json";

/// Installs the global tracing subscriber.
///
/// Traces go to `/host/.local/share/zellij/fruitstand/fruitstand-otlp.json`.
/// Returns `false` when tracing stays disabled: the data directory could not
/// be created, or a subscriber was already installed. Never fails the plugin.
pub fn init_tracing(config: &Config) -> bool {
    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return false;
    }

    let filter = EnvFilter::try_new(&config.trace_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let resource = Resource::new(vec![
        KeyValue::new("service.name", "fruitstand"),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let policy = RotationPolicy {
        max_bytes: config.trace_max_bytes,
        backups: config.trace_backups,
    };

    let provider = exporter::tracer_provider(data_dir.join(TRACE_FILE_NAME), policy, resource);
    let tracer = provider.tracer("fruitstand");

    tracing_subscriber::registry()
        .with(filter)
        .with(OpenTelemetryLayer::new(tracer))
        .try_init()
        .is_ok()
}
