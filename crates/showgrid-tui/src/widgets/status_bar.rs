//! Status bar widget — the 1-line strip at the top of the screen.
//!
//! Shows the app name, the review source and the load state on the left, and
//! keybinding hints (`q:quit  ?:help`) right-aligned in the same row.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// Load state summary shown next to the source.
pub enum LoadSummary {
    Loading,
    Loaded(usize),
    Failed,
}

pub struct StatusBar<'a> {
    source: &'a str,
    load: LoadSummary,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(source: &'a str, load: LoadSummary, theme: &'a Theme) -> Self {
        Self { source, load, theme }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (state, style) = match self.load {
            LoadSummary::Loading => ("loading…".to_string(), self.theme.status_loading),
            LoadSummary::Loaded(n) => (format!("{n} reviews"), Style::default()),
            LoadSummary::Failed => ("load failed".to_string(), self.theme.status_error),
        };

        let line = Line::from(vec![
            Span::styled(
                " showgrid ",
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" {} ", self.source),
                Style::default().add_modifier(Modifier::DIM),
            ),
            Span::styled(state, style),
        ]);
        buf.set_line(area.x, area.y, &line, area.width);

        let hint = " q:quit  ?:help ";
        let hint_x = area.right().saturating_sub(hint.len() as u16);
        buf.set_string(
            hint_x,
            area.y,
            hint,
            Style::default().add_modifier(Modifier::DIM),
        );
    }
}
