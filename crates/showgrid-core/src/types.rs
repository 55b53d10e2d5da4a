//! Core types for showgrid-core.
//!
//! This module defines the data structures shared across all crates: the
//! normalised [`ReviewRecord`], the [`SortKey`] columns a view can be ordered
//! by, and the [`SortDirection`] of that ordering.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Placeholder rendered in place of an empty display field.
pub const EMPTY_PLACEHOLDER: &str = "—";

/// A normalised show review produced by the normalizer.
///
/// Every field is free-form, already-trimmed text. `timestamp` is expected to
/// be date-parseable but may be empty or malformed. Records are immutable once
/// built; a reload replaces the whole set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub timestamp: String,
    pub show_name: String,
    pub review: String,
    pub show_type: String,
}

impl ReviewRecord {
    /// Text value of the column backing `key`.
    pub fn field(&self, key: SortKey) -> &str {
        match key {
            SortKey::Timestamp => &self.timestamp,
            SortKey::ShowName => &self.show_name,
            SortKey::Review => &self.review,
            SortKey::ShowType => &self.show_type,
        }
    }

    /// Display key for the record at `position` in its source sequence.
    ///
    /// Records carry no identity of their own, so the key is built from the
    /// name, the timestamp and the position.
    pub fn row_key(&self, position: usize) -> String {
        format!("{}-{}-{}", self.show_name, self.timestamp, position)
    }
}

/// Column a view is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    #[default]
    Timestamp,
    ShowName,
    Review,
    ShowType,
}

impl SortKey {
    /// All keys in column order.
    pub const ALL: [SortKey; 4] = [
        SortKey::Timestamp,
        SortKey::ShowName,
        SortKey::Review,
        SortKey::ShowType,
    ];

    /// Wire / field name of the key.
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Timestamp => "timestamp",
            SortKey::ShowName => "show_name",
            SortKey::Review => "review",
            SortKey::ShowType => "show_type",
        }
    }

    /// Column header shown in the table.
    pub fn title(self) -> &'static str {
        match self {
            SortKey::Timestamp => "Date",
            SortKey::ShowName => "Show",
            SortKey::Review => "Rating",
            SortKey::ShowType => "Type",
        }
    }

    /// Direction applied when this key becomes the active column.
    pub fn default_direction(self) -> SortDirection {
        match self {
            SortKey::Timestamp => SortDirection::Desc,
            _ => SortDirection::Asc,
        }
    }

    /// Zero-based column position.
    pub fn index(self) -> usize {
        match self {
            SortKey::Timestamp => 0,
            SortKey::ShowName => 1,
            SortKey::Review => 2,
            SortKey::ShowType => 3,
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    /// Accepts field names and column titles, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "timestamp" | "date" => Ok(SortKey::Timestamp),
            "show_name" | "show" | "name" | "title" => Ok(SortKey::ShowName),
            "review" | "rating" => Ok(SortKey::Review),
            "show_type" | "type" => Ok(SortKey::ShowType),
            other => Err(format!(
                "unknown sort key: {other} (expected timestamp|show_name|review|show_type)"
            )),
        }
    }
}

/// Ordering direction of the active column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Arrow shown next to the active column header.
    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Asc => "↑",
            SortDirection::Desc => "↓",
        }
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            other => Err(format!("unknown direction: {other} (expected asc|desc)")),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
