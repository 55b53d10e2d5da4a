//! Normalizer — turns an arbitrary decoded JSON payload into typed
//! [`ReviewRecord`] values.
//!
//! The payload shape is resolved once into a [`Payload`]; downstream code only
//! ever sees the typed row sequence. Row-level defects never fail the load:
//! fields are coerced to text leniently and non-finished rows are dropped.

use serde_json::{Map, Value};

use crate::types::ReviewRecord;

/// Field holding the row sequence when the payload is wrapped in an object.
pub const DATA_FIELD: &str = "data";
/// Field whose value decides whether a row is kept.
pub const FINISHED_FIELD: &str = "finished";

/// The shape of a decoded payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// A top-level array of rows.
    Sequence(Vec<Value>),
    /// An object whose `data` field holds the array of rows.
    Wrapped(Vec<Value>),
    /// Anything else; yields no rows.
    Other,
}

impl Payload {
    pub fn classify(value: Value) -> Self {
        match value {
            Value::Array(rows) => Payload::Sequence(rows),
            Value::Object(mut map) => match map.remove(DATA_FIELD) {
                Some(Value::Array(rows)) => Payload::Wrapped(rows),
                _ => Payload::Other,
            },
            _ => Payload::Other,
        }
    }

    pub fn into_rows(self) -> Vec<Value> {
        match self {
            Payload::Sequence(rows) | Payload::Wrapped(rows) => rows,
            Payload::Other => Vec::new(),
        }
    }
}

/// Normalise a decoded payload into finished review records, preserving the
/// payload order.
pub fn normalize(payload: Value) -> Vec<ReviewRecord> {
    let shape = Payload::classify(payload);
    let kind = match &shape {
        Payload::Sequence(_) => "sequence",
        Payload::Wrapped(_) => "wrapped",
        Payload::Other => "other",
    };
    let rows = shape.into_rows();
    let total = rows.len();

    let records: Vec<ReviewRecord> = rows
        .iter()
        .filter(|row| is_finished(row))
        .map(to_review)
        .collect();

    tracing::debug!(
        shape = kind,
        rows = total,
        finished = records.len(),
        "payload normalised"
    );
    records
}

/// Whether a raw row's `finished` field reads "yes", case-insensitively.
///
/// Rows that are not objects, or have no such field, are not finished.
pub fn is_finished(row: &Value) -> bool {
    as_text(field(row, FINISHED_FIELD)).to_lowercase() == "yes"
}

/// Build a [`ReviewRecord`] from a raw row, coercing each field to text.
pub fn to_review(row: &Value) -> ReviewRecord {
    ReviewRecord {
        timestamp: as_text(field(row, "timestamp")),
        show_name: as_text(field(row, "show_name")),
        review: as_text(field(row, "review")),
        show_type: as_text(field(row, "show_type")),
    }
}

fn field<'a>(row: &'a Value, key: &str) -> Option<&'a Value> {
    row.as_object().and_then(|map: &Map<String, Value>| map.get(key))
}

/// Coerce an optional JSON value to trimmed text.
///
/// Missing values and `null` become the empty string. Non-text values are
/// stringified the way a loosely-typed client would show them.
pub fn as_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(other) => stringify(other).trim().to_string(),
        None => String::new(),
    }
}

fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(stringify)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn number_text(n: &serde_json::Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
