//! Reusable TUI components

pub mod product_table;

pub use product_table::ProductTable;
