//! View derivation — the filter + sort pipeline behind the review table.
//!
//! [`derive_view`] is a pure function of the source rows and the view state
//! triple (query, sort key, direction). It never mutates the source; callers
//! re-run it whenever any input changes. [`ViewCache`] skips the work when
//! nothing changed since the previous call.

use std::cmp::Reverse;

use crate::{
    date,
    types::{ReviewRecord, SortDirection, SortKey, EMPTY_PLACEHOLDER},
};

// ---------------------------------------------------------------------------
// View state
// ---------------------------------------------------------------------------

/// The mutable triple driving derivation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub query: String,
    pub sort_key: SortKey,
    pub direction: SortDirection,
}

impl ViewState {
    /// Select a sort column.
    ///
    /// Selecting the active column flips its direction. Selecting another
    /// column makes it active with that column's default direction.
    pub fn change_sort(&mut self, key: SortKey) {
        if key == self.sort_key {
            self.direction = self.direction.toggled();
        } else {
            self.sort_key = key;
            self.direction = key.default_direction();
        }
        tracing::debug!(key = %self.sort_key, direction = %self.direction, "sort changed");
    }

    /// Header indicator for `key`: `↕` when inactive, otherwise the arrow of
    /// the current direction.
    pub fn sort_label(&self, key: SortKey) -> &'static str {
        if key == self.sort_key {
            self.direction.arrow()
        } else {
            "↕"
        }
    }

    /// Derive the visible rows for this state.
    pub fn derive<'a>(&self, rows: &'a [ReviewRecord]) -> Vec<&'a ReviewRecord> {
        derive_view(rows, &self.query, self.sort_key, self.direction)
    }
}

// ---------------------------------------------------------------------------
// Derivation
// ---------------------------------------------------------------------------

/// Comparable value of a record under a sort key.
///
/// Within one derivation every value has the same variant, so the derived
/// ordering only ever compares like with like.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortValue {
    Millis(i64),
    Text(String),
}

pub fn sort_value(record: &ReviewRecord, key: SortKey) -> SortValue {
    match key {
        SortKey::Timestamp => SortValue::Millis(date::sort_millis(&record.timestamp)),
        other => SortValue::Text(record.field(other).to_lowercase()),
    }
}

/// Whether `record` matches an already-normalised (trimmed, lower-cased) query.
fn name_matches(record: &ReviewRecord, needle: &str) -> bool {
    needle.is_empty() || record.show_name.to_lowercase().contains(needle)
}

/// Indices into `rows`, filtered by `query` and ordered by `key`/`direction`.
///
/// The sort is stable in both directions: records with equal sort values keep
/// their relative source order.
pub fn derive_order(
    rows: &[ReviewRecord],
    query: &str,
    key: SortKey,
    direction: SortDirection,
) -> Vec<usize> {
    let needle = query.trim().to_lowercase();
    let mut order: Vec<usize> = (0..rows.len())
        .filter(|&i| name_matches(&rows[i], &needle))
        .collect();

    match direction {
        SortDirection::Asc => order.sort_by_cached_key(|&i| sort_value(&rows[i], key)),
        SortDirection::Desc => order.sort_by_cached_key(|&i| Reverse(sort_value(&rows[i], key))),
    }
    order
}

/// Filtered and ordered view over `rows`.
pub fn derive_view<'a>(
    rows: &'a [ReviewRecord],
    query: &str,
    key: SortKey,
    direction: SortDirection,
) -> Vec<&'a ReviewRecord> {
    derive_order(rows, query, key, direction)
        .into_iter()
        .map(|i| &rows[i])
        .collect()
}

// ---------------------------------------------------------------------------
// Cache
// ---------------------------------------------------------------------------

/// Remembers the last derivation and its inputs.
///
/// The row set is identified by a caller-supplied generation number, bumped
/// every time the rows are replaced.
#[derive(Debug, Default)]
pub struct ViewCache {
    inputs: Option<(ViewState, u64)>,
    order: Vec<usize>,
}

impl ViewCache {
    /// Ordered row indices for `state`, recomputed only when `state` or
    /// `generation` differ from the previous call.
    pub fn order(&mut self, rows: &[ReviewRecord], generation: u64, state: &ViewState) -> &[usize] {
        let fresh = matches!(&self.inputs, Some((s, g)) if s == state && *g == generation);
        if !fresh {
            self.order = derive_order(rows, &state.query, state.sort_key, state.direction);
            self.inputs = Some((state.clone(), generation));
            tracing::debug!(
                generation,
                rows = rows.len(),
                visible = self.order.len(),
                "view re-derived"
            );
        }
        &self.order
    }

    /// The most recent derivation, without recomputing.
    pub fn current(&self) -> &[usize] {
        &self.order
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

/// A field as it should appear in a table cell.
pub fn display_field(value: &str) -> &str {
    if value.is_empty() {
        EMPTY_PLACEHOLDER
    } else {
        value
    }
}

/// All four cells of `record`, in column order.
pub fn display_cells(record: &ReviewRecord, date_pattern: &str) -> [String; 4] {
    [
        date::format_timestamp(&record.timestamp, date_pattern),
        display_field(&record.show_name).to_string(),
        display_field(&record.review).to_string(),
        display_field(&record.show_type).to_string(),
    ]
}

/// Live result count, e.g. `2 result(s)`.
pub fn result_count(n: usize) -> String {
    format!("{n} result(s)")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
