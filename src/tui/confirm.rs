//! Delete confirmation dialog.
//!
//! Deleting is the only operation gated by a confirmation. The pending
//! delete is explicit state the app holds while the dialog is open, so the
//! flow is testable without a terminal.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::models::ProductId;
use crate::tui::ui::{centered_rect, Styles};

/// Outcome of routing one key event into the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    /// Key consumed, dialog stays open.
    None,
    /// User confirmed; perform the delete.
    Confirm,
    /// User backed out; nothing is deleted.
    Cancel,
}

/// A delete waiting for the user's explicit confirmation.
#[derive(Debug, Clone)]
pub struct ConfirmDelete {
    pub id: ProductId,
    pub name: String,
}

impl ConfirmDelete {
    pub fn new(id: ProductId, name: String) -> Self {
        Self { id, name }
    }

    /// Prompt text naming the product about to be removed.
    pub fn prompt(&self) -> String {
        format!("Удалить товар \"{}\"?", self.name)
    }

    pub fn handle_key(&self, key: KeyEvent) -> ConfirmAction {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => ConfirmAction::Confirm,
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => ConfirmAction::Cancel,
            _ => ConfirmAction::None,
        }
    }

    pub fn draw(&self, f: &mut Frame, area: Rect) {
        let popup = centered_rect(50, 25, area);
        f.render_widget(Clear, popup);

        let block = Block::default()
            .title("Подтверждение")
            .borders(Borders::ALL)
            .border_style(Styles::warning());
        let inner = block.inner(popup);
        f.render_widget(block, popup);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        let prompt = Paragraph::new(self.prompt())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(prompt, chunks[0]);

        let hints = Paragraph::new("y/Enter: удалить | n/Esc: отмена")
            .style(Styles::info())
            .alignment(Alignment::Center);
        f.render_widget(hints, chunks[1]);
    }
}
