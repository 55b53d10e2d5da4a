//! Test builders — ergonomic constructors for payload rows and records.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use serde_json::{json, Map, Value};
use showgrid_core::ReviewRecord;

// ---------------------------------------------------------------------------
// RowBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for raw payload rows.
///
/// # Example
///
/// ```rust
/// let row = RowBuilder::finished("The Wire")
///     .timestamp("2023-05-01")
///     .field("review", 9)
///     .build();
/// ```
pub struct RowBuilder {
    fields: Map<String, Value>,
}

impl RowBuilder {
    /// A row with `finished: "yes"`.
    pub fn finished(show_name: &str) -> Self {
        Self::new(show_name).field("finished", "yes")
    }

    /// A row with no `finished` field at all.
    pub fn new(show_name: &str) -> Self {
        let mut fields = Map::new();
        fields.insert("show_name".into(), json!(show_name));
        Self { fields }
    }

    pub fn timestamp(self, ts: &str) -> Self {
        self.field("timestamp", ts)
    }

    pub fn review(self, review: &str) -> Self {
        self.field("review", review)
    }

    pub fn show_type(self, show_type: &str) -> Self {
        self.field("show_type", show_type)
    }

    pub fn field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> Value {
        Value::Object(self.fields)
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A record with only a timestamp and a title.
pub fn record(timestamp: &str, show_name: &str) -> ReviewRecord {
    ReviewRecord {
        timestamp: timestamp.into(),
        show_name: show_name.into(),
        ..Default::default()
    }
}

/// A fully populated record.
pub fn full_record(timestamp: &str, show_name: &str, review: &str, show_type: &str) -> ReviewRecord {
    ReviewRecord {
        timestamp: timestamp.into(),
        show_name: show_name.into(),
        review: review.into(),
        show_type: show_type.into(),
    }
}

pub fn names(view: &[&ReviewRecord]) -> Vec<String> {
    view.iter().map(|r| r.show_name.clone()).collect()
}
