//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, starts the initial load on the tokio
//! runtime, drives the crossterm event loop, and tears everything down
//! cleanly on exit or panic. All view state lives in [`AppState`], which is
//! plain data and can be driven without a terminal.

use crate::{
    commands::{execute_command, Command},
    event::{self, AppEvent, Direction},
    theme::Theme,
    widgets::{
        command_bar::{CommandBar, CommandBarState},
        help::HelpPopup,
        line_input::LineInput,
        review_table::{Body, ReviewTable, ReviewTableState},
        search_bar::SearchBar,
        status_bar::{LoadSummary, StatusBar},
    },
};
use crossterm::{
    event::{self as ct_event, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    Frame, Terminal,
};
use showgrid_core::{
    config::Config,
    view::{ViewCache, ViewState},
    ReviewRecord, SortDirection, SortKey,
};
use showgrid_fetch::{FetchError, ReviewSource};
use std::{io, time::Duration};
use tokio::sync::oneshot::{self, error::TryRecvError};

// ---------------------------------------------------------------------------
// Focus + load types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Table,
    Search,
    /// Vim-style `:` command line is active.
    Command,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    /// Current review set, replaced wholesale by each load.
    pub rows: Vec<ReviewRecord>,
    /// Bumped every time `rows` is replaced.
    pub generation: u64,
    pub load: LoadState,
    pub view: ViewState,
    pub cache: ViewCache,
    pub table: ReviewTableState,
    pub search: LineInput,
    pub focus: Focus,
    /// Focus state before entering command mode, restored on exit.
    pub prev_focus: Focus,
    pub theme: Theme,
    pub config: Config,
    /// Human-readable description of where reviews come from.
    pub source_label: String,
    pub show_help: bool,
    pub command_bar: CommandBarState,
    /// Set by `r` / `:reload`; the event loop starts a load and clears it.
    pub reload_requested: bool,
    pub quit: bool,
}

impl AppState {
    pub fn new(config: Config, theme: Theme, source_label: impl Into<String>) -> Self {
        Self {
            rows: Vec::new(),
            generation: 0,
            load: LoadState::Loading,
            view: ViewState::default(),
            cache: ViewCache::default(),
            table: ReviewTableState::default(),
            search: LineInput::default(),
            focus: Focus::Table,
            prev_focus: Focus::Table,
            theme,
            config,
            source_label: source_label.into(),
            show_help: false,
            command_bar: CommandBarState::default(),
            reload_requested: false,
            quit: false,
        }
    }

    /// Row indices of the current view, as of the last [`refresh`](Self::refresh).
    pub fn visible(&self) -> &[usize] {
        self.cache.current()
    }

    /// Mark a load as in flight.
    pub fn begin_load(&mut self) {
        self.load = LoadState::Loading;
    }

    /// Install the outcome of a load. Success replaces the row set; failure
    /// clears it.
    pub fn apply_load(&mut self, result: Result<Vec<ReviewRecord>, String>) {
        let anchor = self.selected_key();
        match result {
            Ok(rows) => {
                tracing::debug!(rows = rows.len(), "load applied");
                self.rows = rows;
                self.load = LoadState::Ready;
            }
            Err(message) => {
                tracing::debug!(%message, "load failed");
                self.rows = Vec::new();
                self.load = LoadState::Failed(message);
                self.table.reset();
            }
        }
        self.generation += 1;
        self.refresh(anchor);
    }

    /// Select a sort column, as a header click would.
    pub fn select_sort(&mut self, key: SortKey) {
        let anchor = self.selected_key();
        self.view.change_sort(key);
        self.refresh(anchor);
    }

    /// Force both sort key and direction.
    pub fn set_sort(&mut self, key: SortKey, direction: SortDirection) {
        let anchor = self.selected_key();
        self.view.sort_key = key;
        self.view.direction = direction;
        tracing::debug!(%key, %direction, "sort set");
        self.refresh(anchor);
    }

    /// Replace the search query.
    pub fn set_query(&mut self, query: String) {
        let anchor = self.selected_key();
        self.view.query = query;
        self.refresh(anchor);
    }

    /// Row key of the highlighted record in the current view.
    fn selected_key(&self) -> Option<String> {
        let &i = self.cache.current().get(self.table.selected)?;
        self.rows.get(i).map(|r| r.row_key(i))
    }

    /// Re-derive the view and keep the selection on `anchor` when it is still
    /// visible.
    pub fn refresh(&mut self, anchor: Option<String>) {
        let order = self.cache.order(&self.rows, self.generation, &self.view);
        let found = anchor.and_then(|key| {
            order
                .iter()
                .position(|&i| self.rows[i].row_key(i) == key)
        });
        match found {
            Some(pos) => self.table.selected = pos,
            None => self.table.clamp(order.len()),
        }
    }

    pub fn handle(&mut self, event: AppEvent) {
        // Help popup intercepts all events; only close keys pass through.
        if self.show_help {
            if matches!(event, AppEvent::Char('?') | AppEvent::Escape | AppEvent::Quit) {
                tracing::debug!("help popup closed");
                self.show_help = false;
            }
            return;
        }

        if self.focus == Focus::Command {
            self.handle_command_bar(event);
            return;
        }

        match event {
            AppEvent::Char('?') if self.focus == Focus::Table => {
                tracing::debug!("help popup opened");
                self.show_help = true;
            }

            AppEvent::Char(':') if self.focus == Focus::Table => {
                tracing::debug!("entering command mode");
                self.prev_focus = self.focus;
                self.command_bar.clear();
                self.focus = Focus::Command;
            }

            AppEvent::Quit => {
                tracing::debug!("quit");
                self.quit = true;
            }

            AppEvent::Escape | AppEvent::Enter if self.focus == Focus::Search => {
                tracing::debug!("focus: Search -> Table");
                self.focus = Focus::Table;
            }

            AppEvent::FocusNext => {
                self.focus = match self.focus {
                    Focus::Table => Focus::Search,
                    Focus::Search | Focus::Command => Focus::Table,
                };
                tracing::debug!(focus = ?self.focus, "focus cycle");
            }

            AppEvent::SearchFocus => {
                tracing::debug!("focus -> Search");
                self.focus = Focus::Search;
            }

            AppEvent::SortBy(key) => self.select_sort(key),

            AppEvent::Click { column, row } => {
                if let Some(key) = self.table.column_at(column, row) {
                    tracing::debug!(%key, "header clicked");
                    self.select_sort(key);
                }
            }

            AppEvent::Reload => self.reload_requested = true,

            // Terminal resize is handled automatically by ratatui
            AppEvent::Resize(_, _) => {}

            other => self.dispatch_to_focused(other),
        }
    }

    fn handle_command_bar(&mut self, event: AppEvent) {
        match event {
            AppEvent::Escape => {
                tracing::debug!("command bar cancelled");
                self.command_bar.clear();
                self.focus = self.prev_focus;
            }
            AppEvent::Quit => self.quit = true,
            AppEvent::Enter => match Command::parse(&self.command_bar.input.text) {
                Ok(cmd) => {
                    tracing::debug!(command = ?cmd, "executing command");
                    self.command_bar.clear();
                    self.focus = self.prev_focus;
                    execute_command(self, cmd);
                }
                Err(msg) if msg.is_empty() => {
                    self.command_bar.clear();
                    self.focus = self.prev_focus;
                }
                Err(msg) => {
                    // Show the error; bar stays open
                    self.command_bar.error = Some(msg);
                }
            },
            other => {
                self.command_bar.error = None;
                self.command_bar.input.handle(&other);
            }
        }
    }

    /// Route an event to the widget that owns the current focus.
    fn dispatch_to_focused(&mut self, event: AppEvent) {
        let len = self.visible().len();
        match self.focus {
            Focus::Table => self.table.handle(&event, len),
            Focus::Search => match event {
                // Up/down still move the table selection while typing
                AppEvent::Nav(Direction::Up) | AppEvent::Nav(Direction::Down) => {
                    self.table.handle(&event, len)
                }
                other => {
                    if self.search.handle(&other) {
                        let query = self.search.text.clone();
                        tracing::debug!(%query, "search edited");
                        self.set_query(query);
                    }
                }
            },
            Focus::Command => {} // handled before dispatch
        }
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

type LoadResult = Result<Vec<ReviewRecord>, FetchError>;

pub struct App {
    state: AppState,
    source: ReviewSource,
    runtime: tokio::runtime::Handle,
    pending: Option<oneshot::Receiver<LoadResult>>,
}

impl App {
    pub fn new(
        config: Config,
        theme: Theme,
        source: ReviewSource,
        runtime: tokio::runtime::Handle,
    ) -> Self {
        let state = AppState::new(config, theme, source.describe());
        App { state, source, runtime, pending: None }
    }

    /// Start from `view` instead of the default query and sort.
    pub fn with_view(mut self, view: ViewState) -> Self {
        self.state.search = LineInput::new(&view.query);
        self.state.view = view;
        self
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    /// Spawn one load on the runtime unless one is already in flight.
    fn start_load(&mut self) {
        if self.pending.is_some() {
            return;
        }
        let (tx, rx) = oneshot::channel();
        let source = self.source.clone();
        self.runtime.spawn(async move {
            let _ = tx.send(source.load().await);
        });
        self.pending = Some(rx);
        self.state.begin_load();
        tracing::debug!(source = %self.state.source_label, "load started");
    }

    /// Install a finished load, if any.
    fn poll_load(&mut self) {
        let Some(rx) = self.pending.as_mut() else {
            return;
        };
        let outcome = match rx.try_recv() {
            Ok(result) => result.map_err(|e| e.to_string()),
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Closed) => Err("load task ended without a result".to_string()),
        };
        self.pending = None;
        self.state.apply_load(outcome);
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        self.start_load();

        loop {
            self.poll_load();
            if std::mem::take(&mut self.state.reload_requested) {
                self.start_load();
            }

            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(16))? {
                let raw = ct_event::read()?;
                if let Event::Key(key) = &raw {
                    if key.kind != crossterm::event::KeyEventKind::Press {
                        continue;
                    }
                }
                // Use insert-mode mapping when a text widget is focused
                let app_event = if is_insert_mode(self.state.focus) {
                    event::to_app_event_insert(raw)
                } else {
                    event::to_app_event(raw)
                };
                if let Some(ev) = app_event {
                    tracing::debug!(focus = ?self.state.focus, event = ?ev, "event");
                    self.state.handle(ev);
                }
            }
        }
        Ok(())
    }
}

/// Returns true when the current focus is on a text-input widget, meaning
/// alphabetic keys should produce characters rather than trigger shortcuts.
fn is_insert_mode(focus: Focus) -> bool {
    matches!(focus, Focus::Search | Focus::Command)
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

pub fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Vertical: 1-line status bar | 3-line search bar | table
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Fill(1),
        ])
        .split(area);

    let summary = match state.load {
        LoadState::Loading => LoadSummary::Loading,
        LoadState::Ready => LoadSummary::Loaded(state.rows.len()),
        LoadState::Failed(_) => LoadSummary::Failed,
    };
    frame.render_widget(
        StatusBar::new(&state.source_label, summary, &state.theme),
        vert[0],
    );

    let count = match state.load {
        LoadState::Ready if state.config.ui.show_count => Some(state.visible().len()),
        _ => None,
    };
    let search = SearchBar::new(&state.search, count, state.focus == Focus::Search, &state.theme);
    let search_cursor = search.cursor_position(vert[1]);
    frame.render_widget(search, vert[1]);

    let body = match &state.load {
        LoadState::Loading => Body::Loading,
        LoadState::Failed(message) => Body::Failed(message),
        LoadState::Ready => Body::Rows {
            rows: &state.rows,
            order: state.visible(),
        },
    };
    frame.render_widget(
        ReviewTable::new(
            body,
            &state.view,
            &state.table,
            state.focus == Focus::Table,
            &state.theme,
            &state.config.ui.date_format,
        ),
        vert[2],
    );

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.theme), area);
    }

    // Command bar overlays the bottom row of the screen
    if state.focus == Focus::Command {
        let cmd_area = Rect { y: area.bottom().saturating_sub(1), height: 1, ..area };
        frame.render_widget(CommandBar::new(&state.command_bar, &state.theme), cmd_area);
        let col = state.command_bar.cursor_col(cmd_area);
        frame.set_cursor_position((col, cmd_area.y));
        return;
    }

    if state.focus == Focus::Search {
        frame.set_cursor_position(search_cursor);
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
