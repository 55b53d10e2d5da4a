//! Command-line commands typed after `:`.
//!
//! | Command | Action |
//! |---------|--------|
//! | `q`, `quit` | Quit |
//! | `help` | Toggle the help popup |
//! | `theme <name>` | Switch theme (`default`, `gruvbox`) |
//! | `sort <key> [asc\|desc]` | Select a sort column, optionally forcing the direction |
//! | `reload` | Re-run the load |
//! | `clear` | Clear the search query |

use showgrid_core::{SortDirection, SortKey};

use crate::{app::AppState, theme::Theme};

/// A parsed, validated command ready to be executed by the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    Theme(String),
    /// `None` direction behaves like clicking the column header.
    Sort(SortKey, Option<SortDirection>),
    Reload,
    Clear,
}

impl Command {
    /// Parse a raw command string (the text after the `:` prefix).
    ///
    /// Returns `Ok(cmd)` on success, `Err(message)` on failure. An empty
    /// string returns `Err("")` as a sentinel meaning "close without acting".
    pub fn parse(input: &str) -> Result<Command, String> {
        let input = input.trim();
        if input.is_empty() {
            return Err(String::new());
        }

        let mut words = input.split_whitespace();
        let word = words.next().unwrap_or_default();
        let args: Vec<&str> = words.collect();

        match word {
            "q" | "quit" | "q!" | "quit!" => Ok(Command::Quit),
            "help" => Ok(Command::Help),
            "reload" => Ok(Command::Reload),
            "clear" => Ok(Command::Clear),
            "theme" => match args.as_slice() {
                [name] => Ok(Command::Theme(name.to_string())),
                _ => Err("usage: theme <default|gruvbox>".to_string()),
            },
            "sort" => match args.as_slice() {
                [key] => Ok(Command::Sort(key.parse()?, None)),
                [key, dir] => Ok(Command::Sort(key.parse()?, Some(dir.parse()?))),
                _ => Err("usage: sort <timestamp|show_name|review|show_type> [asc|desc]".to_string()),
            },
            other => Err(format!("unknown command: {other}")),
        }
    }
}

/// Execute a parsed [`Command`] against the application state.
pub fn execute_command(s: &mut AppState, cmd: Command) {
    match cmd {
        Command::Quit => s.quit = true,
        Command::Help => s.show_help = !s.show_help,
        Command::Theme(name) => {
            s.theme = Theme::by_name(&name);
        }
        Command::Sort(key, None) => s.select_sort(key),
        Command::Sort(key, Some(direction)) => s.set_sort(key, direction),
        Command::Reload => s.reload_requested = true,
        Command::Clear => {
            s.search.clear();
            s.set_query(String::new());
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
