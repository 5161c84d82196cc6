//! Top-level TUI application state and logic.
//!
//! `App` owns the product store, the table and the single active modal,
//! and routes key events between them. At most one modal (form or delete
//! confirmation) is open at a time; while one is open it receives every
//! key event, so nothing else can interleave with it.

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use tracing::info;

use crate::store::ProductStore;
use crate::tui::components::ProductTable;
use crate::tui::confirm::{ConfirmAction, ConfirmDelete};
use crate::tui::form::{FormAction, FormMode, ProductForm};
use crate::tui::ui::{centered_rect, Styles};

/// The single active overlay.
pub enum Modal {
    Form(ProductForm),
    Confirm(ConfirmDelete),
}

/// Main TUI application state
pub struct App {
    pub store: ProductStore,
    pub table: ProductTable,
    pub modal: Option<Modal>,
    pub status_message: Option<String>,
    pub show_help: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(store: ProductStore) -> Self {
        Self {
            store,
            table: ProductTable::new(),
            modal: None,
            status_message: None,
            show_help: false,
            should_quit: false,
        }
    }

    /// Run the main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            self.table.sync(&self.store);
            terminal.draw(|f| self.draw(f))?;

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key_event(key);
                }
            }

            if self.should_quit {
                break;
            }
        }
        Ok(())
    }

    /// Route one key event: to the active modal if there is one, to the
    /// table otherwise.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match self.modal.take() {
            Some(Modal::Form(mut form)) => match form.handle_key(key) {
                FormAction::None => self.modal = Some(Modal::Form(form)),
                FormAction::Cancel => {}
                FormAction::Save(input) => match form.mode {
                    FormMode::Add => {
                        self.store.add(&input.name, input.price);
                        self.set_status("Товар добавлен".to_string());
                    }
                    FormMode::Edit(id) => {
                        self.store.update(id, &input.name, input.price);
                        self.set_status("Товар обновлён".to_string());
                    }
                },
            },
            Some(Modal::Confirm(confirm)) => match confirm.handle_key(key) {
                ConfirmAction::None => self.modal = Some(Modal::Confirm(confirm)),
                ConfirmAction::Confirm => {
                    self.store.delete(confirm.id);
                    self.set_status("Товар удалён".to_string());
                }
                ConfirmAction::Cancel => {}
            },
            None => self.handle_table_key(key),
        }
    }

    fn handle_table_key(&mut self, key: KeyEvent) {
        if self.show_help {
            self.show_help = false;
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::F(1) | KeyCode::Char('?') => self.show_help = true,
            KeyCode::Up | KeyCode::Char('k') => self.table.navigate_up(),
            KeyCode::Down | KeyCode::Char('j') => self.table.navigate_down(),
            KeyCode::Char('a') | KeyCode::Insert => self.open_add(),
            KeyCode::Char('e') | KeyCode::Enter => self.open_edit(),
            KeyCode::Char('d') | KeyCode::Delete => self.request_delete(),
            _ => {}
        }
    }

    fn open_add(&mut self) {
        self.clear_status();
        self.modal = Some(Modal::Form(ProductForm::for_add()));
    }

    /// Open the edit form for the selected row. A selection that no longer
    /// resolves to a product leaves the app as it was.
    fn open_edit(&mut self) {
        let id = match self.table.selected_id() {
            Some(id) => id,
            None => return,
        };
        let product = match self.store.get(id) {
            Some(p) => p,
            None => return,
        };
        let form = ProductForm::for_edit(product);
        self.clear_status();
        self.modal = Some(Modal::Form(form));
    }

    fn request_delete(&mut self) {
        let id = match self.table.selected_id() {
            Some(id) => id,
            None => return,
        };
        let product = match self.store.get(id) {
            Some(p) => p,
            None => return,
        };
        let confirm = ConfirmDelete::new(id, product.name.clone());
        self.clear_status();
        self.modal = Some(Modal::Confirm(confirm));
    }

    fn set_status(&mut self, message: String) {
        info!("{message}");
        self.status_message = Some(message);
    }

    fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Draw the UI: table, status bar, then the active overlay.
    pub fn draw(&self, f: &mut Frame) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        self.table.draw(f, chunks[0]);
        self.draw_status_bar(f, chunks[1]);

        match &self.modal {
            Some(Modal::Form(form)) => form.draw(f, size),
            Some(Modal::Confirm(confirm)) => confirm.draw(f, size),
            None => {}
        }

        if self.show_help {
            self.draw_help_popup(f, size);
        }
    }

    fn draw_status_bar(&self, f: &mut Frame, area: Rect) {
        let (text, style) = match &self.status_message {
            Some(message) => (message.clone(), Styles::success()),
            None => (
                "a: добавить | e: редактировать | d: удалить | ↑/↓: выбор | ?: справка | q: выход"
                    .to_string(),
                Styles::inactive(),
            ),
        };

        let status_bar = Paragraph::new(text)
            .style(style)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(status_bar, area);
    }

    fn draw_help_popup(&self, f: &mut Frame, area: Rect) {
        let popup_area = centered_rect(60, 70, area);
        f.render_widget(Clear, popup_area);

        let help_content = "Список товаров:\n\
            ↑/↓ или j/k — выбор строки\n\
            a или Insert — добавить товар\n\
            e или Enter — редактировать выбранный\n\
            d или Delete — удалить выбранный (с подтверждением)\n\
            q — выход\n\n\
            Форма товара:\n\
            Tab / Shift+Tab — переключение полей\n\
            Enter — сохранить\n\
            Esc — отмена";

        let help_popup = Paragraph::new(help_content)
            .block(
                Block::default()
                    .title("Справка")
                    .borders(Borders::ALL)
                    .border_style(Styles::title()),
            )
            .wrap(Wrap { trim: true });
        f.render_widget(help_popup, popup_area);
    }
}
