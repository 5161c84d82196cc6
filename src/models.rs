//! Domain model for the inventory.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque product identifier. Assigned once at creation and never changed;
/// the only key the registry looks products up by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(Uuid);

impl ProductId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A single inventory entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
}

impl Product {
    /// Price as shown in the table: always two decimals, `.` separator.
    pub fn price_display(&self) -> String {
        format!("{:.2}", self.price)
    }

    /// Price as pre-filled into the edit form: shortest plain form,
    /// `1500` rather than `1500.00`.
    pub fn price_editable(&self) -> String {
        format!("{}", self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(price: f64) -> Product {
        Product {
            id: ProductId::new(),
            name: "Товар".to_string(),
            price,
        }
    }

    #[test]
    fn test_price_display_two_decimals() {
        assert_eq!(product(1500.0).price_display(), "1500.00");
        assert_eq!(product(12.5).price_display(), "12.50");
        assert_eq!(product(0.999).price_display(), "1.00");
    }

    #[test]
    fn test_price_editable_shortest_form() {
        assert_eq!(product(1500.0).price_editable(), "1500");
        assert_eq!(product(12.5).price_editable(), "12.5");
    }

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(ProductId::new(), ProductId::new());
    }
}
