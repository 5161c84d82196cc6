//! In-memory product registry, the single source of truth for the
//! inventory.
//!
//! The registry keeps products in insertion order and carries a revision
//! counter the table renderer syncs against: every mutation that must show
//! up on screen bumps the revision exactly once.

use tracing::debug;

use crate::models::{Product, ProductId};

#[derive(Debug)]
pub struct ProductStore {
    products: Vec<Product>,
    revision: u64,
}

impl ProductStore {
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            revision: 0,
        }
    }

    /// Append a new product with a fresh id. `name` is trimmed here;
    /// everything else is assumed pre-validated by the form.
    pub fn add(&mut self, name: &str, price: f64) -> ProductId {
        let product = Product {
            id: ProductId::new(),
            name: name.trim().to_string(),
            price,
        };
        let id = product.id;
        debug!(%id, name = %product.name, price, "product added");
        self.products.push(product);
        self.revision += 1;
        id
    }

    /// Replace name and price of the product with `id`, keeping its id and
    /// list position. An unknown id is a silent no-op and does not bump
    /// the revision.
    pub fn update(&mut self, id: ProductId, name: &str, price: f64) {
        if let Some(product) = self.products.iter_mut().find(|p| p.id == id) {
            product.name = name.trim().to_string();
            product.price = price;
            debug!(%id, name = %product.name, price, "product updated");
            self.revision += 1;
        }
    }

    /// Remove the product with `id`, preserving the relative order of the
    /// rest. Bumps the revision even when nothing matched.
    pub fn delete(&mut self, id: ProductId) {
        self.products.retain(|p| p.id != id);
        debug!(%id, remaining = self.products.len(), "product deleted");
        self.revision += 1;
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_stores_trimmed_name_and_price() {
        let mut store = ProductStore::new();
        let id = store.add("  Новый товар  ", 1500.0);

        assert_eq!(store.len(), 1);
        let product = store.get(id).unwrap();
        assert_eq!(product.name, "Новый товар");
        assert_eq!(product.price, 1500.0);
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn test_update_replaces_both_fields_in_place() {
        let mut store = ProductStore::new();
        let first = store.add("Первый", 100.0);
        let second = store.add("Второй", 200.0);

        store.update(first, "  Переименованный  ", 150.0);

        let product = store.get(first).unwrap();
        assert_eq!(product.name, "Переименованный");
        assert_eq!(product.price, 150.0);
        assert_eq!(product.id, first);
        // Position and the other product are untouched.
        assert_eq!(store.products()[0].id, first);
        assert_eq!(store.products()[1].id, second);
        assert_eq!(store.get(second).unwrap().name, "Второй");
        assert_eq!(store.revision(), 3);
    }

    #[test]
    fn test_update_missing_id_is_a_noop() {
        let mut store = ProductStore::new();
        store.add("Товар", 100.0);
        let revision = store.revision();

        store.update(ProductId::new(), "Другой", 999.0);

        assert_eq!(store.len(), 1);
        assert_eq!(store.products()[0].name, "Товар");
        assert_eq!(store.products()[0].price, 100.0);
        assert_eq!(store.revision(), revision);
    }

    #[test]
    fn test_delete_keeps_relative_order() {
        let mut store = ProductStore::new();
        let a = store.add("А", 1.0);
        let b = store.add("Б", 2.0);
        let c = store.add("В", 3.0);

        store.delete(b);

        let ids: Vec<_> = store.products().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![a, c]);
    }

    #[test]
    fn test_delete_missing_id_still_bumps_revision() {
        let mut store = ProductStore::new();
        store.add("Товар", 100.0);
        let revision = store.revision();

        store.delete(ProductId::new());

        assert_eq!(store.len(), 1);
        assert_eq!(store.revision(), revision + 1);
    }

    #[test]
    fn test_get_unknown_id_is_none() {
        let mut store = ProductStore::new();
        store.add("Товар", 100.0);
        assert!(store.get(ProductId::new()).is_none());
    }
}
