//! showgrid-core — review records and the pipeline that shapes them.
//!
//! # Architecture
//!
//! ```text
//! JSON payload ──► normalizer ──► Vec<ReviewRecord> ──► view (filter + sort) ──► UI
//! ```
//!
//! Everything here is synchronous and pure apart from [`config::Config::load`],
//! which touches the filesystem. Fetching lives in `showgrid-fetch`; rendering
//! in `showgrid-tui`.

pub mod config;
pub mod date;
pub mod error;
pub mod normalizer;
pub mod types;
pub mod view;

pub use error::ConfigError;
pub use normalizer::normalize;
pub use types::{ReviewRecord, SortDirection, SortKey};
pub use view::{derive_view, ViewState};
