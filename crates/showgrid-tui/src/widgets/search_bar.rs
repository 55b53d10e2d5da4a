//! Search bar widget — title filter input plus the live result count.
//!
//! # Editing
//!
//! - `Char(c)` inserts at the cursor.
//! - `Backspace` deletes the character before the cursor.
//! - `←` / `→` move the cursor.
//!
//! Every edit changes the view query immediately; there is no submit step.

use crate::{theme::Theme, widgets::line_input::LineInput};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction as LayoutDir, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};
use showgrid_core::view::result_count;

pub struct SearchBar<'a> {
    input: &'a LineInput,
    /// Number of rows in the derived view; `None` hides the count.
    count: Option<usize>,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> SearchBar<'a> {
    pub fn new(input: &'a LineInput, count: Option<usize>, focused: bool, theme: &'a Theme) -> Self {
        Self { input, count, focused, theme }
    }

    /// Absolute terminal position of the text cursor within this widget's
    /// rendered area. Pass to `frame.set_cursor_position()` after rendering.
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        // The block adds 1-cell borders; text starts at (area.x+1, area.y+1).
        let x = (area.x + 1 + self.input.cursor_chars()).min(area.right().saturating_sub(1));
        (x, area.y + 1)
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title("Search title")
            .border_style(self.theme.border(self.focused));

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(LayoutDir::Horizontal)
            .constraints([Constraint::Fill(1), Constraint::Length(18)])
            .split(inner);

        let query_line = if self.input.text.is_empty() && !self.focused {
            Line::from(Span::styled(
                "press / to search",
                Style::default().add_modifier(Modifier::DIM),
            ))
        } else {
            Line::from(self.input.text.as_str())
        };
        Paragraph::new(query_line).render(chunks[0], buf);

        if let Some(n) = self.count {
            Paragraph::new(Line::from(result_count(n)))
                .alignment(Alignment::Right)
                .render(chunks[1], buf);
        }
    }
}
