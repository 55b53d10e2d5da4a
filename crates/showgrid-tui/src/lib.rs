//! showgrid TUI — ratatui application shell.

pub mod app;
pub mod commands;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::App;

use showgrid_core::{config::Config, view::ViewState};
use showgrid_fetch::ReviewSource;

/// Start the interactive table with `view` as the initial query and sort.
/// Loads are spawned onto `runtime`.
pub fn run(
    config: Config,
    source: ReviewSource,
    view: ViewState,
    runtime: tokio::runtime::Handle,
) -> anyhow::Result<()> {
    let theme = theme::Theme::by_name(&config.ui.theme);
    App::new(config, theme, source, runtime)
        .with_view(view)
        .run()
}
