#![allow(unused)]
//! View derivation integration harness.
//!
//! # What this covers
//!
//! - **Filtering**: trimmed, case-insensitive substring match on the title.
//! - **Sorting**: timestamps chronologically with unparseable values at the
//!   epoch; text columns lower-cased; ties kept in payload order.
//! - **Sort toggling**: re-selecting the active column flips its direction.
//! - **Properties** (proptest): derivation never mutates its input, returns a
//!   subset of it, is idempotent under re-derivation, and stays stable.
//!
//! # Running
//!
//! ```sh
//! cargo test --test view_harness
//! ```

mod common;
use common::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use showgrid_core::{
    derive_view, normalize,
    view::{display_cells, sort_value, ViewCache},
    ReviewRecord, SortDirection, SortKey, ViewState,
};

// ---------------------------------------------------------------------------
// End-to-end over a payload
// ---------------------------------------------------------------------------

#[test]
fn default_view_is_newest_first() {
    let rows = normalize(json(PAYLOAD_BASIC));
    let view = ViewState::default().derive(&rows);
    assert_titles!(view, ["Zeta", "Alpha"]);
}

#[test]
fn search_narrows_to_one_result() {
    let rows = normalize(json(PAYLOAD_BASIC));
    let state = ViewState { query: "alpha".into(), ..ViewState::default() };
    let view = state.derive(&rows);
    assert_eq!(view.len(), 1);
    assert_titles!(view, ["Alpha"]);
}

#[test]
fn unparseable_date_sorts_at_epoch_and_displays_literally() {
    let rows = vec![
        record("1960-01-01", "Before"),
        record("not-a-date", "Broken"),
        record("1980-01-01", "After"),
    ];
    let view = derive_view(&rows, "", SortKey::Timestamp, SortDirection::Asc);
    assert_titles!(view, ["Before", "Broken", "After"]);
    assert_eq!(display_cells(view[1], "%B %Y")[0], "not-a-date");
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

#[rstest]
#[case::empty("", 4)]
#[case::whitespace("   ", 4)]
#[case::lower("the", 2)]
#[case::upper("THE", 2)]
#[case::padded("  wire  ", 2)]
#[case::inner_space("the w", 1)]
#[case::none("zzz", 0)]
fn filter_counts(#[case] query: &str, #[case] expected: usize) {
    let rows = vec![
        record("2020-01-01", "The Wire"),
        record("2020-01-01", "Wired"),
        record("2020-01-01", "The Office"),
        record("2020-01-01", "Lost"),
    ];
    let view = derive_view(&rows, query, SortKey::ShowName, SortDirection::Asc);
    assert_eq!(view.len(), expected);
    assert_all_match!(view, query);
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

#[rstest]
#[case::rating_asc(SortKey::Review, SortDirection::Asc, ["b", "c", "a"])]
#[case::rating_desc(SortKey::Review, SortDirection::Desc, ["a", "c", "b"])]
#[case::type_asc(SortKey::ShowType, SortDirection::Asc, ["a", "b", "c"])]
#[case::type_desc(SortKey::ShowType, SortDirection::Desc, ["c", "b", "a"])]
fn text_columns_sort_lowercased(
    #[case] key: SortKey,
    #[case] direction: SortDirection,
    #[case] expected: [&str; 3],
) {
    let rows = vec![
        full_record("", "a", "9", "anime"),
        full_record("", "b", "10", "Comedy"),
        full_record("", "c", "5", "drama"),
    ];
    let view = derive_view(&rows, "", key, direction);
    assert_eq!(names(&view), expected.to_vec());
}

#[test]
fn timestamp_formats_compare_chronologically() {
    let rows = vec![
        record("2023-05-01T10:00:00Z", "iso"),
        record("March 2021", "month"),
        record("2022", "year"),
        record("Tue, 1 Jul 2003 10:52:37 +0200", "rfc2822"),
    ];
    let view = derive_view(&rows, "", SortKey::Timestamp, SortDirection::Asc);
    assert_eq!(names(&view), vec!["rfc2822", "month", "year", "iso"]);
}

#[test]
fn sort_toggle_sequence() {
    let rows = vec![
        record("2021-01-01", "b"),
        record("2023-01-01", "a"),
        record("2022-01-01", "c"),
    ];
    let mut state = ViewState::default();
    assert_eq!(names(&state.derive(&rows)), vec!["a", "c", "b"]);

    state.change_sort(SortKey::Timestamp);
    assert_eq!(names(&state.derive(&rows)), vec!["b", "c", "a"]);

    state.change_sort(SortKey::ShowName);
    assert_eq!(state.direction, SortDirection::Asc);
    assert_eq!(names(&state.derive(&rows)), vec!["a", "b", "c"]);

    state.change_sort(SortKey::ShowName);
    assert_eq!(names(&state.derive(&rows)), vec!["c", "b", "a"]);
}

#[test]
fn cache_tracks_row_generation() {
    let mut cache = ViewCache::default();
    let state = ViewState::default();
    let first = vec![record("2020-01-01", "old")];
    assert_eq!(cache.order(&first, 0, &state).len(), 1);

    let second = vec![record("2020-01-01", "a"), record("2021-01-01", "b")];
    assert_eq!(cache.order(&second, 1, &state), &[1, 0]);
    assert_eq!(cache.current(), &[1, 0]);
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

fn arb_record() -> impl Strategy<Value = ReviewRecord> {
    (
        prop::sample::select(vec!["", "2020-01-01", "2021-06-15", "garbage", "2020"]),
        "[a-cA-C ]{0,4}",
        prop::sample::select(vec!["", "1", "2", "10"]),
        prop::sample::select(vec!["", "Drama", "drama", "Anime"]),
    )
        .prop_map(|(ts, name, review, show_type)| full_record(ts, &name, review, show_type))
}

fn arb_key() -> impl Strategy<Value = SortKey> {
    prop::sample::select(SortKey::ALL.to_vec())
}

fn arb_direction() -> impl Strategy<Value = SortDirection> {
    prop::sample::select(vec![SortDirection::Asc, SortDirection::Desc])
}

proptest! {
    #[test]
    fn derive_is_a_filtered_subset(
        rows in prop::collection::vec(arb_record(), 0..30),
        query in "[a-c ]{0,3}",
        key in arb_key(),
        direction in arb_direction(),
    ) {
        let before = rows.clone();
        let view = derive_view(&rows, &query, key, direction);
        prop_assert_eq!(&rows, &before);

        let needle = query.trim().to_lowercase();
        let expected = rows
            .iter()
            .filter(|r| r.show_name.to_lowercase().contains(&needle))
            .count();
        prop_assert_eq!(view.len(), expected);
    }

    #[test]
    fn derive_is_idempotent(
        rows in prop::collection::vec(arb_record(), 0..30),
        key in arb_key(),
        direction in arb_direction(),
    ) {
        let once: Vec<ReviewRecord> = derive_view(&rows, "", key, direction)
            .into_iter()
            .cloned()
            .collect();
        let twice: Vec<ReviewRecord> = derive_view(&once, "", key, direction)
            .into_iter()
            .cloned()
            .collect();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn equal_keys_keep_payload_order(
        rows in prop::collection::vec(arb_record(), 0..30),
        key in arb_key(),
        direction in arb_direction(),
    ) {
        // Tag each row with its payload position through the title.
        let tagged: Vec<ReviewRecord> = rows
            .iter()
            .enumerate()
            .map(|(i, r)| ReviewRecord { show_name: format!("{i:03}"), ..r.clone() })
            .collect();
        let view = derive_view(&tagged, "", key, direction);
        for pair in view.windows(2) {
            if sort_value(pair[0], key) == sort_value(pair[1], key) {
                prop_assert!(pair[0].show_name < pair[1].show_name);
            }
        }
    }
}
