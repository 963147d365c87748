//! OTLP-JSON encoding of exported spans.
//!
//! Each export batch becomes one `TracesData` document: a single resource
//! (the plugin) with a single instrumentation scope holding every span of the
//! batch. Field names and value encodings follow the OTLP/JSON mapping, so the
//! lines can be replayed into any OTLP collector.

use opentelemetry::trace::{SpanId, SpanKind, Status};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::SpanData;
use opentelemetry_sdk::resource::Resource;
use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

/// Instrumentation scope name written into every batch.
pub const SCOPE_NAME: &str = "fruitstand";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TracesData {
    pub resource_spans: Vec<ResourceSpans>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSpans {
    pub resource: ResourceAttributes,
    pub scope_spans: Vec<ScopeSpans>,
}

#[derive(Debug, Serialize)]
pub struct ResourceAttributes {
    pub attributes: Vec<Attribute>,
}

#[derive(Debug, Serialize)]
pub struct Scope {
    pub name: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopeSpans {
    pub scope: Scope,
    pub spans: Vec<OtlpSpan>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OtlpSpan {
    pub trace_id: String,
    pub span_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub parent_span_id: String,
    pub name: String,
    pub kind: u8,
    pub start_time_unix_nano: String,
    pub end_time_unix_nano: String,
    pub attributes: Vec<Attribute>,
    pub events: Vec<OtlpEvent>,
    pub status: OtlpStatus,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OtlpEvent {
    pub time_unix_nano: String,
    pub name: String,
    pub attributes: Vec<Attribute>,
}

#[derive(Debug, Serialize)]
pub struct OtlpStatus {
    pub code: u8,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct Attribute {
    pub key: String,
    pub value: AnyValue,
}

/// OTLP `AnyValue`; 64-bit integers travel as strings.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum AnyValue {
    StringValue(String),
    BoolValue(bool),
    IntValue(String),
    DoubleValue(f64),
}

impl From<&Value> for AnyValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Bool(b) => Self::BoolValue(*b),
            Value::I64(i) => Self::IntValue(i.to_string()),
            Value::F64(f) => Self::DoubleValue(*f),
            Value::String(s) => Self::StringValue(s.to_string()),
            Value::Array(_) => Self::StringValue(value.as_str().into_owned()),
        }
    }
}

fn attribute(key: &str, value: &Value) -> Attribute {
    Attribute {
        key: key.to_string(),
        value: AnyValue::from(value),
    }
}

fn attributes(pairs: &[KeyValue]) -> Vec<Attribute> {
    pairs.iter().map(|kv| attribute(kv.key.as_str(), &kv.value)).collect()
}

fn unix_nanos(time: SystemTime) -> String {
    time.duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0)
        .to_string()
}

const fn kind_code(kind: &SpanKind) -> u8 {
    match kind {
        SpanKind::Internal => 1,
        SpanKind::Server => 2,
        SpanKind::Client => 3,
        SpanKind::Producer => 4,
        SpanKind::Consumer => 5,
    }
}

fn status(status: &Status) -> OtlpStatus {
    match status {
        Status::Unset => OtlpStatus {
            code: 0,
            message: String::new(),
        },
        Status::Ok => OtlpStatus {
            code: 1,
            message: String::new(),
        },
        Status::Error { description } => OtlpStatus {
            code: 2,
            message: description.to_string(),
        },
    }
}

fn span(data: &SpanData) -> OtlpSpan {
    let parent_span_id = if data.parent_span_id == SpanId::INVALID {
        String::new()
    } else {
        format!("{:016x}", data.parent_span_id)
    };

    OtlpSpan {
        trace_id: format!("{:032x}", data.span_context.trace_id()),
        span_id: format!("{:016x}", data.span_context.span_id()),
        parent_span_id,
        name: data.name.to_string(),
        kind: kind_code(&data.span_kind),
        start_time_unix_nano: unix_nanos(data.start_time),
        end_time_unix_nano: unix_nanos(data.end_time),
        attributes: attributes(&data.attributes),
        events: data
            .events
            .iter()
            .map(|event| OtlpEvent {
                time_unix_nano: unix_nanos(event.timestamp),
                name: event.name.to_string(),
                attributes: attributes(&event.attributes),
            })
            .collect(),
        status: status(&data.status),
    }
}

/// Builds the document for one export batch.
#[must_use]
pub fn encode_batch(resource: &Resource, batch: &[SpanData]) -> TracesData {
    let resource_attributes = resource
        .iter()
        .map(|(key, value)| attribute(key.as_str(), value))
        .collect();

    TracesData {
        resource_spans: vec![ResourceSpans {
            resource: ResourceAttributes {
                attributes: resource_attributes,
            },
            scope_spans: vec![ScopeSpans {
                scope: Scope {
                    name: SCOPE_NAME,
                    version: env!("CARGO_PKG_VERSION"),
                },
                spans: batch.iter().map(span).collect(),
            }],
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn values_use_otlp_encoding() {
        assert_eq!(AnyValue::from(&Value::I64(42)), AnyValue::IntValue("42".to_string()));
        assert_eq!(AnyValue::from(&Value::Bool(true)), AnyValue::BoolValue(true));
        assert_eq!(
            serde_json::to_value(AnyValue::from(&Value::from("kiwi"))).unwrap(),
            json!({ "stringValue": "kiwi" })
        );
    }

    #[test]
    fn empty_batch_keeps_resource_and_scope() {
        let resource = Resource::new(vec![KeyValue::new("service.name", "fruitstand")]);
        let doc = serde_json::to_value(encode_batch(&resource, &[])).unwrap();

        let resource_spans = &doc["resourceSpans"][0];
        assert_eq!(
            resource_spans["resource"]["attributes"],
            json!([{ "key": "service.name", "value": { "stringValue": "fruitstand" } }])
        );
        assert_eq!(resource_spans["scopeSpans"][0]["scope"]["name"], "fruitstand");
        assert_eq!(resource_spans["scopeSpans"][0]["spans"], json!([]));
    }

    #[test]
    fn status_messages_only_for_errors() {
        let ok = serde_json::to_value(status(&Status::Ok)).unwrap();
        assert_eq!(ok, json!({ "code": 1 }));
        let err = serde_json::to_value(status(&Status::error("boom"))).unwrap();
        assert_eq!(err, json!({ "code": 2, "message": "boom" }));
    }
}
