//! Review table widget — the sortable grid filling the body of the screen.
//!
//! # Navigation (when the table is focused)
//!
//! | Key | Action |
//! |-----|--------|
//! | `↑` / `k` | Move the selection up one row |
//! | `↓` / `j` | Move the selection down one row |
//! | `PageUp` / `Ctrl+u` | Up one page |
//! | `PageDown` / `Ctrl+d` | Down one page |
//! | `g` / `G` | First / last row |
//!
//! Header cells are clickable; the rectangles from the last render are kept
//! so a click can be mapped back to its column.

use std::cell::Cell as StdCell;

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{
        Block, Cell, Paragraph, Row, Scrollbar, ScrollbarOrientation, ScrollbarState,
        StatefulWidget, Table, TableState, Widget,
    },
};
use showgrid_core::{
    types::EMPTY_PLACEHOLDER,
    view::{display_cells, ViewState},
    ReviewRecord, SortKey,
};

/// Column widths, in [`SortKey::ALL`] order.
const WIDTHS: [Constraint; 4] = [
    Constraint::Length(15),
    Constraint::Fill(1),
    Constraint::Length(10),
    Constraint::Length(14),
];
const COLUMN_SPACING: u16 = 1;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct ReviewTableState {
    /// Position of the highlighted row within the derived view.
    pub selected: usize,
    /// First visible row, carried between frames.
    offset: StdCell<usize>,
    /// Body height from the last render, used for paging.
    last_height: StdCell<usize>,
    /// Header cell rectangles from the last render.
    header_cells: StdCell<Option<[Rect; 4]>>,
}

impl Default for ReviewTableState {
    fn default() -> Self {
        Self {
            selected: 0,
            offset: StdCell::new(0),
            last_height: StdCell::new(20),
            header_cells: StdCell::new(None),
        }
    }
}

impl ReviewTableState {
    fn page(&self) -> usize {
        self.last_height.get().max(1)
    }

    /// Handle a navigation event for a view of `len` rows.
    pub fn handle(&mut self, event: &AppEvent, len: usize) {
        if len == 0 {
            self.selected = 0;
            return;
        }
        let last = len - 1;
        self.selected = match event {
            AppEvent::Nav(Direction::Up) => self.selected.saturating_sub(1),
            AppEvent::Nav(Direction::Down) => (self.selected + 1).min(last),
            AppEvent::PageUp => self.selected.saturating_sub(self.page()),
            AppEvent::PageDown => (self.selected + self.page()).min(last),
            AppEvent::Top => 0,
            AppEvent::Bottom => last,
            _ => return,
        };
        tracing::debug!(selected = self.selected, len, "table: selection moved");
    }

    /// Keep the selection inside a view of `len` rows.
    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    /// Reset selection and scroll to the top.
    pub fn reset(&mut self) {
        self.selected = 0;
        self.offset.set(0);
    }

    /// The sort column whose header contains terminal cell (`column`, `row`).
    pub fn column_at(&self, column: u16, row: u16) -> Option<SortKey> {
        let cells = self.header_cells.get()?;
        cells
            .iter()
            .position(|r| row == r.y && column >= r.x && column < r.right())
            .map(|i| SortKey::ALL[i])
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

/// What the table body shows.
#[derive(Clone, Copy)]
pub enum Body<'a> {
    Loading,
    Failed(&'a str),
    /// Source rows and the derived order (indices into `rows`).
    Rows {
        rows: &'a [ReviewRecord],
        order: &'a [usize],
    },
}

pub struct ReviewTable<'a> {
    body: Body<'a>,
    view: &'a ViewState,
    state: &'a ReviewTableState,
    focused: bool,
    theme: &'a Theme,
    date_format: &'a str,
}

impl<'a> ReviewTable<'a> {
    pub fn new(
        body: Body<'a>,
        view: &'a ViewState,
        state: &'a ReviewTableState,
        focused: bool,
        theme: &'a Theme,
        date_format: &'a str,
    ) -> Self {
        Self { body, view, state, focused, theme, date_format }
    }

    fn header(&self) -> Row<'static> {
        let cells = SortKey::ALL.iter().map(|&key| {
            let style = if key == self.view.sort_key {
                self.theme.header_active
            } else {
                self.theme.header
            };
            Cell::from(format!("{} {}", key.title(), self.view.sort_label(key))).style(style)
        });
        Row::new(cells)
    }

    fn row(&self, record: &ReviewRecord, needle: &str) -> Row<'static> {
        let [date, name, review, show_type] = display_cells(record, self.date_format);
        Row::new([
            self.plain_cell(date, record.timestamp.is_empty()),
            Cell::from(highlight_match(name, needle, self.theme.search_highlight)),
            self.plain_cell(review, record.review.is_empty()),
            if record.show_type.is_empty() {
                self.plain_cell(show_type, true)
            } else {
                Cell::from(show_type).style(self.theme.type_style(&record.show_type))
            },
        ])
    }

    /// Header-only table with `lines` underneath, for the non-row states.
    fn render_message(
        &self,
        lines: Vec<Line<'static>>,
        table_area: Rect,
        message_area: Rect,
        buf: &mut Buffer,
    ) {
        Widget::render(
            Table::new(Vec::<Row>::new(), WIDTHS)
                .header(self.header())
                .column_spacing(COLUMN_SPACING),
            table_area,
            buf,
        );
        Paragraph::new(lines).render(message_area, buf);
    }

    fn plain_cell(&self, text: String, empty: bool) -> Cell<'static> {
        if empty {
            Cell::from(text).style(self.theme.placeholder)
        } else {
            Cell::from(text)
        }
    }
}

impl Widget for ReviewTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = match &self.body {
            Body::Rows { rows, order } => format!(" Reviews {}/{} ", order.len(), rows.len()),
            _ => " Reviews ".to_string(),
        };
        let block = Block::bordered()
            .title(title)
            .border_style(self.theme.border(self.focused));
        let inner = block.inner(area);
        block.render(area, buf);

        // Reserve the rightmost column for the scrollbar.
        let table_area = Rect { width: inner.width.saturating_sub(1), ..inner };
        let sb_area = Rect {
            x: inner.right().saturating_sub(1),
            width: 1,
            ..inner
        };

        let header_area = Rect { height: 1.min(table_area.height), ..table_area };
        let cols = Layout::horizontal(WIDTHS)
            .spacing(COLUMN_SPACING)
            .split(header_area);
        self.state
            .header_cells
            .set(Some([cols[0], cols[1], cols[2], cols[3]]));

        let body_height = table_area.height.saturating_sub(1) as usize;
        self.state.last_height.set(body_height);

        let message_area = Rect {
            y: table_area.y.saturating_add(2),
            height: table_area.height.saturating_sub(2),
            ..table_area
        };

        let (rows, order) = match self.body {
            Body::Loading => {
                self.render_message(
                    vec![Line::from(Span::styled("Loading reviews…", self.theme.status_loading))],
                    table_area,
                    message_area,
                    buf,
                );
                return;
            }
            Body::Failed(message) => {
                self.render_message(
                    vec![
                        Line::from(Span::styled(
                            format!("Failed to load reviews: {message}"),
                            self.theme.status_error,
                        )),
                        Line::from(Span::styled("press r to try again", self.theme.placeholder)),
                    ],
                    table_area,
                    message_area,
                    buf,
                );
                return;
            }
            Body::Rows { rows, order } => (rows, order),
        };

        let needle = self.view.query.trim().to_lowercase();
        let table_rows: Vec<Row> = order.iter().map(|&i| self.row(&rows[i], &needle)).collect();

        let mut table_state = TableState::default()
            .with_offset(self.state.offset.get())
            .with_selected(if order.is_empty() { None } else { Some(self.state.selected) });

        StatefulWidget::render(
            Table::new(table_rows, WIDTHS)
                .header(self.header())
                .column_spacing(COLUMN_SPACING)
                .row_highlight_style(if self.focused {
                    self.theme.row_selected
                } else {
                    Style::default()
                }),
            table_area,
            buf,
            &mut table_state,
        );
        self.state.offset.set(table_state.offset());

        if order.is_empty() {
            let msg = if rows.is_empty() {
                "No finished reviews".to_string()
            } else {
                format!("No shows match \"{}\"", self.view.query.trim())
            };
            Paragraph::new(Line::from(Span::styled(msg, self.theme.placeholder)))
                .render(message_area, buf);
        } else {
            let mut sb_state = ScrollbarState::new(order.len())
                .position(table_state.offset())
                .viewport_content_length(body_height);
            StatefulWidget::render(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(None)
                    .end_symbol(None),
                sb_area,
                buf,
                &mut sb_state,
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Cell rendering
// ---------------------------------------------------------------------------

/// Split `text` into spans, styling the first case-insensitive occurrence of
/// `needle`. Falls back to plain text when lower-casing changes byte offsets.
fn highlight_match(text: String, needle: &str, style: Style) -> Line<'static> {
    if needle.is_empty() || text == EMPTY_PLACEHOLDER {
        return Line::from(text);
    }
    let lower = text.to_lowercase();
    if lower.len() != text.len() {
        return Line::from(text);
    }
    match lower.find(needle) {
        Some(start) => {
            let end = start + needle.len();
            if !text.is_char_boundary(start) || !text.is_char_boundary(end) {
                return Line::from(text);
            }
            Line::from(vec![
                Span::raw(text[..start].to_string()),
                Span::styled(text[start..end].to_string(), style),
                Span::raw(text[end..].to_string()),
            ])
        }
        None => Line::from(text),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
