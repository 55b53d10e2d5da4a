//! showgrid — searchable, sortable terminal table of show reviews.
//!
//! # Architecture
//!
//! ```text
//! ReviewSource ──► normalize ──► ViewState::derive ──► TUI / headless
//!  (http|file)      (core)          (core)
//! ```
//!
//! A load is a single fetch on the tokio runtime. The view is re-derived from
//! the stored rows whenever the query, sort key or direction changes.

pub mod headless;
