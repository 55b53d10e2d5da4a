//! Headless mode: derive the view once and print it.
//!
//! The same normalise → filter → sort pipeline the TUI uses, without a
//! terminal. Useful for scripting and for checking an endpoint from CI.

use showgrid_core::{
    view::{display_cells, ViewState},
    ReviewRecord, SortKey,
};
use showgrid_fetch::{FetchError, ReviewSource};

/// Output format for `--headless`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated display values with a header line.
    #[default]
    Table,
    /// One JSON-encoded record per line.
    Jsonl,
}

/// Render the derived view of `rows` in `format`.
pub fn render(
    rows: &[ReviewRecord],
    view: &ViewState,
    format: OutputFormat,
    date_pattern: &str,
) -> Result<String, serde_json::Error> {
    let visible = view.derive(rows);
    let mut out = String::new();
    match format {
        OutputFormat::Table => {
            let header: Vec<&str> = SortKey::ALL.iter().map(|k| k.title()).collect();
            out.push_str(&header.join("\t"));
            out.push('\n');
            for record in visible {
                out.push_str(&display_cells(record, date_pattern).join("\t"));
                out.push('\n');
            }
        }
        OutputFormat::Jsonl => {
            for record in visible {
                out.push_str(&serde_json::to_string(record)?);
                out.push('\n');
            }
        }
    }
    Ok(out)
}

/// Load from `source` and render. A failed load is returned untouched so the
/// caller can exit non-zero.
pub async fn run(
    source: &ReviewSource,
    view: &ViewState,
    format: OutputFormat,
    date_pattern: &str,
) -> anyhow::Result<String> {
    let rows = source.load().await.inspect_err(|e: &FetchError| {
        tracing::warn!(source = %source.describe(), error = %e, "headless load failed");
    })?;
    tracing::info!(rows = rows.len(), "headless load complete");
    Ok(render(&rows, view, format, date_pattern)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use showgrid_core::{date::MONTH_YEAR, SortDirection};

    fn rows() -> Vec<ReviewRecord> {
        vec![
            ReviewRecord {
                timestamp: "2022-01-01".into(),
                show_name: "Alpha".into(),
                review: "8".into(),
                show_type: "Drama".into(),
            },
            ReviewRecord {
                timestamp: "2023-05-01".into(),
                show_name: "Zeta".into(),
                review: String::new(),
                show_type: String::new(),
            },
        ]
    }

    #[test]
    fn table_has_header_and_placeholders() {
        let out = render(&rows(), &ViewState::default(), OutputFormat::Table, MONTH_YEAR).unwrap();
        assert_eq!(
            out,
            "Date\tShow\tRating\tType\n\
             May 2023\tZeta\t—\t—\n\
             January 2022\tAlpha\t8\tDrama\n"
        );
    }

    #[test]
    fn jsonl_keeps_raw_values() {
        let view = ViewState {
            query: "alp".into(),
            sort_key: SortKey::ShowName,
            direction: SortDirection::Asc,
        };
        let out = render(&rows(), &view, OutputFormat::Jsonl, MONTH_YEAR).unwrap();
        let parsed: ReviewRecord = serde_json::from_str(out.trim_end()).unwrap();
        assert_eq!(parsed, rows()[0]);
        assert_eq!(out.lines().count(), 1);
        assert!(out.ends_with('\n'));
    }
}
