//! Firestore REST document decoding.
//!
//! The REST API wraps every field in a one-key object naming its type
//! (`{"stringValue": "x"}`, `{"integerValue": "42"}`, ...). This module turns a
//! fetched document into a [`UserRecord`], keeping the typed distinction that
//! matters for `expiresAt` (native timestamp vs. string) and flattening the
//! rest to plain JSON.

#[cfg(test)]
#[path = "firestore_test.rs"]
mod firestore_test;

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::{Map, Number, Value};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use super::types::{ExpiresAt, RESERVED_KEYS, Timestamp, UserRecord};

/// A single fetched document.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub fields: BTreeMap<String, FieldValue>,
}

/// One typed Firestore value.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldValue {
    NullValue(Value),
    BooleanValue(bool),
    /// int64 values travel as decimal strings.
    IntegerValue(String),
    DoubleValue(f64),
    /// RFC 3339 with nanosecond precision.
    TimestampValue(String),
    StringValue(String),
    BytesValue(String),
    ReferenceValue(String),
    GeoPointValue(GeoPoint),
    ArrayValue(ArrayValue),
    MapValue(MapValue),
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct GeoPoint {
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ArrayValue {
    #[serde(default)]
    pub values: Vec<FieldValue>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct MapValue {
    #[serde(default)]
    pub fields: BTreeMap<String, FieldValue>,
}

impl FieldValue {
    /// Flatten into untyped JSON. Timestamps stay RFC 3339 strings.
    pub fn into_json(self) -> Value {
        match self {
            Self::NullValue(_) => Value::Null,
            Self::BooleanValue(b) => Value::Bool(b),
            Self::IntegerValue(raw) => raw.parse::<i64>().map_or(Value::String(raw), Value::from),
            Self::DoubleValue(f) => Number::from_f64(f).map_or(Value::Null, Value::Number),
            Self::TimestampValue(s) | Self::StringValue(s) | Self::BytesValue(s) | Self::ReferenceValue(s) => {
                Value::String(s)
            }
            Self::GeoPointValue(p) => serde_json::json!({ "latitude": p.latitude, "longitude": p.longitude }),
            Self::ArrayValue(a) => Value::Array(a.values.into_iter().map(Self::into_json).collect()),
            Self::MapValue(m) => Value::Object(fields_to_json(m.fields)),
        }
    }

    /// String form used for password comparison. Only scalars have one.
    fn into_scalar_string(self) -> Option<String> {
        match self {
            Self::StringValue(s) | Self::IntegerValue(s) => Some(s),
            Self::DoubleValue(f) => Some(format_double(f)),
            Self::BooleanValue(b) => Some(b.to_string()),
            _ => None,
        }
    }

    fn into_expires_at(self) -> ExpiresAt {
        match self {
            Self::StringValue(s) => ExpiresAt::Text(s),
            Self::TimestampValue(s) => match OffsetDateTime::parse(&s, &Rfc3339) {
                Ok(at) => ExpiresAt::Timestamp(Timestamp::from_datetime(at)),
                Err(_) => ExpiresAt::Other(Value::String(s)),
            },
            other => ExpiresAt::Other(other.into_json()),
        }
    }
}

/// Integral doubles print without a fractional part, like `String(1.0)` would.
fn format_double(f: f64) -> String {
    if f.fract() == 0.0 && f.is_finite() && f.abs() < 1e15 {
        format!("{f:.0}")
    } else {
        f.to_string()
    }
}

fn fields_to_json(fields: BTreeMap<String, FieldValue>) -> Map<String, Value> {
    fields.into_iter().map(|(k, v)| (k, v.into_json())).collect()
}

impl Document {
    /// Last path segment of the document name, i.e. the document id.
    #[cfg(test)]
    pub(crate) fn id(&self) -> Option<&str> {
        self.name.rsplit('/').next().filter(|s| !s.is_empty())
    }
}

impl From<Document> for UserRecord {
    fn from(doc: Document) -> Self {
        let mut fields = doc.fields;
        let status = match fields.remove("status") {
            Some(FieldValue::StringValue(s)) => Some(s),
            _ => None,
        };
        let expires_at = fields.remove("expiresAt").map(FieldValue::into_expires_at);
        let password = fields.remove("password").and_then(FieldValue::into_scalar_string);
        for key in RESERVED_KEYS {
            fields.remove(key);
        }
        Self { status, expires_at, password, extra: fields_to_json(fields) }
    }
}
