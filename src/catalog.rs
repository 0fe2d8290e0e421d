//! Catalog records for seeding an inventory from CSV.

use crate::error::{InventoryError, Result};
use crate::money::Money;
use serde::Deserialize;

/// Raw catalog row as read from CSV.
///
/// Columns: `category,name,price,quantity`. The category is kept as text so
/// that unsupported categories reach the factory and are reported there.
#[derive(Debug, Deserialize)]
pub struct CatalogRecord {
    /// Category name: Book or Electronics
    pub category: String,

    /// Product name
    pub name: String,

    /// Unit price, read from decimal text
    pub price: Money,

    /// Initial stock
    pub quantity: u32,
}

/// A catalog row with its text fields trimmed and its name checked.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub category: String,
    pub name: String,
    pub price: Money,
    pub quantity: u32,
}

impl CatalogRecord {
    /// Turns the raw row into an entry ready for the factory.
    ///
    /// Fails with `InvalidRecord` if the name is blank.
    pub fn parse(&self, row: usize) -> Result<CatalogEntry> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(InventoryError::InvalidRecord {
                row,
                message: "product name is empty".to_string(),
            });
        }

        Ok(CatalogEntry {
            category: self.category.trim().to_string(),
            name: name.to_string(),
            price: self.price,
            quantity: self.quantity,
        })
    }
}
