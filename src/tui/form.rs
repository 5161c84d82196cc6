//! Modal form for adding and editing products.
//!
//! The form owns its two input fields and the validation errors of the
//! last submit attempt. The app opens it in one of two modes, feeds key
//! events in, and acts on the returned [`FormAction`].

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{Product, ProductId};
use crate::tui::ui::{centered_rect, InputField, Styles};
use crate::validate::{self, FormErrors, ValidInput};

/// What the form is doing: creating a new product or editing an existing
/// one. `Edit` carries the edit target id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit(ProductId),
}

/// Which input currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Name,
    Price,
}

/// Outcome of routing one key event into the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    /// Key consumed, form stays open.
    None,
    /// User cancelled; close without saving.
    Cancel,
    /// Validation passed; apply the input and close.
    Save(ValidInput),
}

pub struct ProductForm {
    pub mode: FormMode,
    pub name_input: InputField,
    pub price_input: InputField,
    pub focus: FormFocus,
    pub errors: FormErrors,
}

impl ProductForm {
    /// Open for adding: empty fields, no errors, focus on the name.
    pub fn for_add() -> Self {
        Self::new(FormMode::Add, "", "")
    }

    /// Open for editing: fields pre-filled from the product, focus on the
    /// name. The caller guards against ids that no longer resolve.
    pub fn for_edit(product: &Product) -> Self {
        Self::new(
            FormMode::Edit(product.id),
            &product.name,
            &product.price_editable(),
        )
    }

    fn new(mode: FormMode, name: &str, price: &str) -> Self {
        let mut name_input = InputField::new("Название")
            .with_placeholder("например, Молоко")
            .with_value(name);
        let price_input = InputField::new("Стоимость")
            .with_placeholder("например, 1500")
            .with_value(price);
        name_input.set_focus(true);

        Self {
            mode,
            name_input,
            price_input,
            focus: FormFocus::Name,
            errors: FormErrors::default(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Add => "Новый товар",
            FormMode::Edit(_) => "Редактирование товара",
        }
    }

    /// Route one key event into the form.
    pub fn handle_key(&mut self, key: KeyEvent) -> FormAction {
        match key.code {
            KeyCode::Esc => FormAction::Cancel,
            KeyCode::Enter => self.submit(),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.switch_focus();
                FormAction::None
            }
            KeyCode::Char(c) => {
                self.current_input_mut().insert_char(c);
                FormAction::None
            }
            KeyCode::Backspace => {
                self.current_input_mut().delete_char();
                FormAction::None
            }
            KeyCode::Delete => {
                self.current_input_mut().delete_char_forward();
                FormAction::None
            }
            KeyCode::Left => {
                self.current_input_mut().move_cursor_left();
                FormAction::None
            }
            KeyCode::Right => {
                self.current_input_mut().move_cursor_right();
                FormAction::None
            }
            KeyCode::Home => {
                self.current_input_mut().move_cursor_to_start();
                FormAction::None
            }
            KeyCode::End => {
                self.current_input_mut().move_cursor_to_end();
                FormAction::None
            }
            _ => FormAction::None,
        }
    }

    /// Run validation over the current field values. Errors from the
    /// previous attempt are cleared before re-validating.
    fn submit(&mut self) -> FormAction {
        self.errors = FormErrors::default();
        match validate::validate(&self.name_input.value, &self.price_input.value) {
            Ok(input) => FormAction::Save(input),
            Err(errors) => {
                self.errors = errors;
                FormAction::None
            }
        }
    }

    fn switch_focus(&mut self) {
        self.focus = match self.focus {
            FormFocus::Name => FormFocus::Price,
            FormFocus::Price => FormFocus::Name,
        };
        self.name_input.set_focus(self.focus == FormFocus::Name);
        self.price_input.set_focus(self.focus == FormFocus::Price);
    }

    fn current_input_mut(&mut self) -> &mut InputField {
        match self.focus {
            FormFocus::Name => &mut self.name_input,
            FormFocus::Price => &mut self.price_input,
        }
    }

    fn border_style(&self, field: FormFocus) -> Style {
        let has_error = match field {
            FormFocus::Name => self.errors.name.is_some(),
            FormFocus::Price => self.errors.price.is_some(),
        };
        if self.focus == field {
            Styles::active_border()
        } else if has_error {
            Styles::error()
        } else {
            Styles::inactive_border()
        }
    }

    /// Draw the form as a centered popup. Each validation error renders on
    /// its own line directly under the offending field.
    pub fn draw(&self, f: &mut Frame, area: Rect) {
        let popup = centered_rect(60, 60, area);
        f.render_widget(Clear, popup);

        let block = Block::default()
            .title(self.title())
            .borders(Borders::ALL)
            .border_style(Styles::active_border());
        let inner = block.inner(popup);
        f.render_widget(block, popup);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // name input
                Constraint::Length(1), // name error
                Constraint::Length(3), // price input
                Constraint::Length(1), // price error
                Constraint::Min(0),
                Constraint::Length(1), // hints
            ])
            .split(inner);

        self.name_input
            .render(f, chunks[0], self.border_style(FormFocus::Name));
        if let Some(error) = self.errors.name {
            let message = Paragraph::new(error.to_string()).style(Styles::error());
            f.render_widget(message, chunks[1]);
        }

        self.price_input
            .render(f, chunks[2], self.border_style(FormFocus::Price));
        if let Some(error) = self.errors.price {
            let message = Paragraph::new(error.to_string()).style(Styles::error());
            f.render_widget(message, chunks[3]);
        }

        let hints = Paragraph::new("Tab: следующее поле | Enter: сохранить | Esc: отмена")
            .style(Styles::info());
        f.render_widget(hints, chunks[5]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::{NameError, PriceError};
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(form: &mut ProductForm, text: &str) {
        for c in text.chars() {
            assert_eq!(form.handle_key(key(KeyCode::Char(c))), FormAction::None);
        }
    }

    fn product(name: &str, price: f64) -> Product {
        Product {
            id: ProductId::new(),
            name: name.to_string(),
            price,
        }
    }

    #[test]
    fn test_for_add_starts_clean_with_name_focused() {
        let form = ProductForm::for_add();
        assert_eq!(form.mode, FormMode::Add);
        assert!(form.name_input.is_empty());
        assert!(form.price_input.is_empty());
        assert_eq!(form.focus, FormFocus::Name);
        assert!(form.name_input.is_focused);
        assert!(form.errors.is_empty());
    }

    #[test]
    fn test_for_edit_prefills_fields() {
        let p = product("Новый товар", 1500.0);
        let form = ProductForm::for_edit(&p);
        assert_eq!(form.mode, FormMode::Edit(p.id));
        assert_eq!(form.name_input.value, "Новый товар");
        assert_eq!(form.price_input.value, "1500");
        assert_eq!(form.focus, FormFocus::Name);
    }

    #[test]
    fn test_typing_goes_to_the_focused_field() {
        let mut form = ProductForm::for_add();
        type_str(&mut form, "Молоко");
        form.handle_key(key(KeyCode::Tab));
        type_str(&mut form, "85");

        assert_eq!(form.name_input.value, "Молоко");
        assert_eq!(form.price_input.value, "85");
    }

    #[test]
    fn test_submit_with_empty_fields_keeps_form_open_with_both_errors() {
        let mut form = ProductForm::for_add();
        let action = form.handle_key(key(KeyCode::Enter));

        assert_eq!(action, FormAction::None);
        assert_eq!(form.errors.name, Some(NameError::Empty));
        assert_eq!(form.errors.price, Some(PriceError::Empty));
    }

    #[test]
    fn test_submit_with_negative_price_reports_only_that_error() {
        let mut form = ProductForm::for_add();
        type_str(&mut form, "Товар");
        form.handle_key(key(KeyCode::Tab));
        type_str(&mut form, "-100");
        let action = form.handle_key(key(KeyCode::Enter));

        assert_eq!(action, FormAction::None);
        assert_eq!(form.errors.name, None);
        assert_eq!(form.errors.price, Some(PriceError::NotPositive));
    }

    #[test]
    fn test_errors_clear_on_the_next_successful_attempt() {
        let mut form = ProductForm::for_add();
        form.handle_key(key(KeyCode::Enter));
        assert!(!form.errors.is_empty());

        type_str(&mut form, "Товар");
        form.handle_key(key(KeyCode::Tab));
        type_str(&mut form, "1500");
        let action = form.handle_key(key(KeyCode::Enter));

        assert!(form.errors.is_empty());
        match action {
            FormAction::Save(input) => {
                assert_eq!(input.name, "Товар");
                assert_eq!(input.price, 1500.0);
            }
            other => panic!("expected Save, got {other:?}"),
        }
    }

    #[test]
    fn test_escape_cancels() {
        let mut form = ProductForm::for_add();
        type_str(&mut form, "Черновик");
        assert_eq!(form.handle_key(key(KeyCode::Esc)), FormAction::Cancel);
    }
}
