//! Product table, the list renderer.
//!
//! Rows are rebuilt from the store only when the store's revision moves,
//! so each mutation produces exactly one rebuild and redundant redraws
//! reuse the cached rows.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::models::ProductId;
use crate::store::ProductStore;
use crate::tui::ui::Styles;

pub const HEADER_NAME: &str = "Название";
pub const HEADER_PRICE: &str = "Стоимость";
pub const HEADER_ACTIONS: &str = "Действия";

const NAME_WIDTH: usize = 32;
const PRICE_WIDTH: usize = 12;

/// One rendered row, cached between redraws.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub id: ProductId,
    pub name: String,
    pub price: String,
}

pub struct ProductTable {
    rows: Vec<TableRow>,
    pub state: ListState,
    seen_revision: Option<u64>,
}

impl ProductTable {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            state: ListState::default(),
            seen_revision: None,
        }
    }

    /// Rebuild the rows if the store changed since the last sync. Returns
    /// whether a rebuild happened.
    pub fn sync(&mut self, store: &ProductStore) -> bool {
        if self.seen_revision == Some(store.revision()) {
            return false;
        }

        self.rows = store
            .products()
            .iter()
            .map(|p| TableRow {
                id: p.id,
                name: p.name.clone(),
                price: p.price_display(),
            })
            .collect();
        self.seen_revision = Some(store.revision());
        self.clamp_selection();
        true
    }

    fn clamp_selection(&mut self) {
        if self.rows.is_empty() {
            self.state.select(None);
        } else {
            let idx = self.state.selected().unwrap_or(0).min(self.rows.len() - 1);
            self.state.select(Some(idx));
        }
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Id of the selected row, for wiring the edit and delete actions.
    pub fn selected_id(&self) -> Option<ProductId> {
        self.state
            .selected()
            .and_then(|i| self.rows.get(i))
            .map(|row| row.id)
    }

    pub fn navigate_up(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(0) | None => self.rows.len() - 1,
            Some(i) => i - 1,
        };
        self.state.select(Some(i));
    }

    pub fn navigate_down(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => (i + 1) % self.rows.len(),
            None => 0,
        };
        self.state.select(Some(i));
    }

    /// Draw the table: a header row kept on every redraw, then one row per
    /// product in list order.
    pub fn draw(&self, f: &mut Frame, area: Rect) {
        let header = Line::from(vec![
            Span::styled(pad(HEADER_NAME, NAME_WIDTH), Styles::title()),
            Span::styled(" | ", Styles::title()),
            Span::styled(
                format!("{:>width$}", HEADER_PRICE, width = PRICE_WIDTH),
                Styles::title(),
            ),
            Span::styled(" | ", Styles::title()),
            Span::styled(HEADER_ACTIONS, Styles::title()),
        ]);

        let mut items = vec![ListItem::new(header)];
        for (i, row) in self.rows.iter().enumerate() {
            let style = if Some(i) == self.state.selected() {
                Styles::selected()
            } else {
                Style::default()
            };
            let line = Line::from(vec![
                Span::styled(pad(&row.name, NAME_WIDTH), style),
                Span::styled(" | ", style),
                Span::styled(format!("{:>width$}", row.price, width = PRICE_WIDTH), style),
                Span::styled(" | ", style),
                Span::styled("✏️  ✕", style),
            ]);
            items.push(ListItem::new(line));
        }

        let title = if self.rows.is_empty() {
            "Товары (пусто)".to_string()
        } else {
            format!("Товары ({})", self.rows.len())
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Styles::active_border());

        let list = List::new(items).block(block);
        f.render_widget(list, area);
    }
}

/// Truncate and pad to a fixed display width, emoji and CJK aware. Names
/// render verbatim unless they overflow the column.
fn pad(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0usize;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    while used < width {
        out.push(' ');
        used += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_rebuilds_once_per_mutation() {
        let mut store = ProductStore::new();
        let mut table = ProductTable::new();

        assert!(table.sync(&store)); // first sync picks up the empty list
        assert!(!table.sync(&store)); // nothing changed

        store.add("Новый товар", 1500.0);
        assert!(table.sync(&store));
        assert!(!table.sync(&store));
        assert_eq!(table.rows().len(), 1);
        assert_eq!(table.rows()[0].name, "Новый товар");
        assert_eq!(table.rows()[0].price, "1500.00");
    }

    #[test]
    fn test_update_miss_does_not_rebuild_but_delete_miss_does() {
        let mut store = ProductStore::new();
        store.add("Товар", 100.0);
        let mut table = ProductTable::new();
        table.sync(&store);

        store.update(ProductId::new(), "Другой", 1.0);
        assert!(!table.sync(&store));

        store.delete(ProductId::new());
        assert!(table.sync(&store));
        assert_eq!(table.rows().len(), 1);
    }

    #[test]
    fn test_selection_clamps_when_rows_shrink() {
        let mut store = ProductStore::new();
        let a = store.add("А", 1.0);
        let b = store.add("Б", 2.0);
        let mut table = ProductTable::new();
        table.sync(&store);

        table.navigate_down();
        assert_eq!(table.selected_id(), Some(b));

        store.delete(b);
        table.sync(&store);
        assert_eq!(table.selected_id(), Some(a));

        store.delete(a);
        table.sync(&store);
        assert_eq!(table.selected_id(), None);
    }

    #[test]
    fn test_navigation_wraps() {
        let mut store = ProductStore::new();
        let a = store.add("А", 1.0);
        let b = store.add("Б", 2.0);
        let mut table = ProductTable::new();
        table.sync(&store);

        assert_eq!(table.selected_id(), Some(a));
        table.navigate_up();
        assert_eq!(table.selected_id(), Some(b));
        table.navigate_down();
        assert_eq!(table.selected_id(), Some(a));
    }

    #[test]
    fn test_pad_is_display_width_aware() {
        assert_eq!(pad("аб", 4), "аб  ");
        assert_eq!(pad("абвг", 2), "аб");
        // A two-column emoji does not split.
        assert_eq!(pad("🚚", 1), " ");
    }
}
