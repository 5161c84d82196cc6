//! Terminal user interface for the inventory.
//!
//! A single table screen with two overlays: the product form (add/edit)
//! and the delete confirmation dialog.

pub mod app;
pub mod components;
pub mod confirm;
pub mod form;
pub mod ui;

pub use app::App;

use std::io;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use crate::store::ProductStore;

/// Set up the terminal, run the app until it quits, restore the terminal.
pub fn run_tui(store: ProductStore) -> Result<()> {
    info!("starting TUI interface");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(store);
    let result = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("TUI exited");
    result
}
