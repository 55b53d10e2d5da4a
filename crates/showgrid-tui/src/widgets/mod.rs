//! Ratatui widgets for the showgrid TUI.

pub mod command_bar;
pub mod help;
pub mod line_input;
pub mod review_table;
pub mod search_bar;
pub mod status_bar;
