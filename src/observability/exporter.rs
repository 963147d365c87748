//! Span exporter writing OTLP-JSON lines to the rotating trace file.

use super::otlp::encode_batch;
use super::rotation::{RotatingFile, RotationPolicy};
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

/// Writes every export batch as one line of the trace file.
#[derive(Debug)]
pub struct OtlpFileExporter {
    file: RotatingFile,
    resource: Resource,
    stopped: AtomicBool,
}

impl OtlpFileExporter {
    #[must_use]
    pub const fn new(path: PathBuf, policy: RotationPolicy, resource: Resource) -> Self {
        Self {
            file: RotatingFile::new(path, policy),
            resource,
            stopped: AtomicBool::new(false),
        }
    }

    fn write_batch(&self, batch: &[SpanData]) -> ExportResult {
        if self.stopped.load(Ordering::SeqCst) {
            return Err(TraceError::from("trace exporter already shut down"));
        }

        let line = serde_json::to_string(&encode_batch(&self.resource, batch))
            .map_err(|e| TraceError::from(e.to_string()))?;
        self.file
            .append_line(&line)
            .map_err(|e| TraceError::from(e.to_string()))
    }
}

impl SpanExporter for OtlpFileExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = self.write_batch(&batch);
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    fn set_resource(&mut self, resource: &Resource) {
        self.resource = resource.clone();
    }
}

/// Builds a provider that exports each finished span immediately.
///
/// The plugin runs on a single WASM thread without an async runtime, so the
/// simple (synchronous) span processor is used instead of a batching one.
#[must_use]
pub fn tracer_provider(path: PathBuf, policy: RotationPolicy, resource: Resource) -> TracerProvider {
    let exporter = OtlpFileExporter::new(path, policy, resource.clone());

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::KeyValue;

    #[test]
    fn empty_export_writes_one_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fruitstand-otlp.json");
        let mut exporter = OtlpFileExporter::new(
            path.clone(),
            RotationPolicy::default(),
            Resource::new(vec![KeyValue::new("service.name", "fruitstand")]),
        );

        exporter.write_batch(&[]).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 1);
        assert!(contents.contains("\"resourceSpans\""));

        exporter.shutdown();
        assert!(exporter.write_batch(&[]).is_err());
    }
}
