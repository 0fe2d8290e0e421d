//! Inventory manager.
//!
//! Owns the ordered product list and is the only component that mutates
//! product state. Every operation either applies fully to a single product
//! or leaves the inventory untouched and returns an error.

use crate::catalog::CatalogRecord;
use crate::discount::{
    calculate_discount, calculate_final_price, discount_description, order_total, DiscountKind,
};
use crate::error::{InventoryError, Result};
use crate::factory::ProductFactory;
use crate::money::Money;
use crate::product::{Category, Product};
use csv::{ReaderBuilder, Trim};
use log::{debug, info, warn};
use std::fmt;
use std::io::Read;

/// Products at or below this quantity are reported as low stock.
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// Receipt for a completed sale.
#[derive(Debug, Clone, PartialEq)]
pub struct SaleSummary {
    pub product: String,
    pub quantity: u32,
    pub unit_price: Money,
    pub original_total: Money,
    pub discount: Money,
    pub discount_description: String,
    pub final_price: Money,
    pub remaining_stock: u32,
}

impl fmt::Display for SaleSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== SALE COMPLETE ===")?;
        writeln!(f, "Product: {}", self.product)?;
        writeln!(f, "Quantity: {}", self.quantity)?;
        writeln!(f, "Unit Price: ${}", self.unit_price)?;
        writeln!(f, "Original Total: ${}", self.original_total)?;
        writeln!(f, "{}", self.discount_description)?;
        writeln!(f, "Final Price: ${}", self.final_price)?;
        writeln!(f, "Remaining Stock: {}", self.remaining_stock)?;
        write!(f, "====================")
    }
}

/// Aggregate figures over the whole inventory.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryStats {
    pub product_count: usize,
    pub total_value: Money,
    /// Name and quantity of each low-stock product, in insertion order.
    pub low_stock: Vec<(String, u32)>,
}

impl fmt::Display for InventoryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== INVENTORY STATISTICS ===")?;
        writeln!(f, "Total Products: {}", self.product_count)?;
        writeln!(f, "Total Inventory Value: ${}", self.total_value)?;
        writeln!(f, "Low Stock Items: {}", self.low_stock.len())?;

        if !self.low_stock.is_empty() {
            writeln!(f, "Items needing restock:")?;
            for (name, quantity) in &self.low_stock {
                writeln!(f, "  - {} (Stock: {})", name, quantity)?;
            }
        }

        write!(f, "============================")
    }
}

/// The product collection and its operations.
///
/// # Duplicate Names
///
/// Product names are not required to be unique. Lookups compare names
/// case-insensitively and always resolve to the earliest inserted match, so
/// a later product with the same name is listed and counted but can never
/// be sold or restocked by name.
#[derive(Debug, Default)]
pub struct InventoryManager {
    /// Products in insertion order.
    products: Vec<Product>,
}

impl InventoryManager {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        InventoryManager {
            products: Vec::new(),
        }
    }

    /// Creates an inventory seeded with the demo products.
    pub fn with_sample_products() -> Self {
        let mut inventory = Self::new();
        let samples = [
            (Category::Book, "Java Programming", 2999, 10),
            (Category::Book, "Data Structures", 3499, 8),
            (Category::Book, "Web Development", 2499, 15),
            (Category::Electronics, "Laptop", 59999, 5),
            (Category::Electronics, "Mouse", 1999, 20),
            (Category::Electronics, "Keyboard", 4999, 12),
        ];

        for (category, name, cents, quantity) in samples {
            inventory
                .products
                .push(ProductFactory::create(category, name, Money::from_cents(cents), quantity));
        }

        debug!("Seeded {} sample products", inventory.products.len());
        inventory
    }

    /// Loads products from a CSV catalog in streaming fashion.
    ///
    /// Rows that cannot be parsed, or whose category is unsupported, are
    /// logged at warn level and skipped. Returns the number of products added.
    pub fn load_catalog<R: Read>(&mut self, reader: R) -> Result<usize> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        let mut loaded = 0;
        for (row_idx, result) in csv_reader.deserialize::<CatalogRecord>().enumerate() {
            let row_num = row_idx + 2; // 1-indexed, accounting for header row

            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    warn!("Row {}: CSV parse error: {}", row_num, e);
                    continue;
                }
            };

            let entry = match record.parse(row_num) {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("{}", e);
                    continue;
                }
            };

            match self.add_product(&entry.category, &entry.name, entry.price, entry.quantity) {
                Ok(_) => loaded += 1,
                Err(e) => warn!("Row {}: {}", row_num, e),
            }
        }

        Ok(loaded)
    }

    /// Creates a product through the factory and appends it.
    ///
    /// On a blank name or an unsupported category the inventory is left
    /// unchanged.
    pub fn add_product(
        &mut self,
        category: &str,
        name: &str,
        price: Money,
        quantity: u32,
    ) -> Result<&Product> {
        if name.trim().is_empty() {
            warn!("Error adding product: {}", InventoryError::EmptyName);
            return Err(InventoryError::EmptyName);
        }

        let product = match ProductFactory::create_product(category, name, price, quantity) {
            Ok(product) => product,
            Err(e) => {
                warn!("Error adding product: {}", e);
                return Err(e);
            }
        };

        info!("Added product: {}", product.name());
        self.products.push(product);

        let index = self.products.len() - 1;
        Ok(&self.products[index])
    }

    /// Finds the first product whose name matches, ignoring case.
    pub fn find_product(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.matches_name(name))
    }

    fn find_product_mut(&mut self, name: &str) -> Result<&mut Product> {
        match self.products.iter_mut().find(|p| p.matches_name(name)) {
            Some(product) => Ok(product),
            None => {
                warn!("Product not found: {}", name);
                Err(InventoryError::ProductNotFound(name.to_string()))
            }
        }
    }

    /// Sells `quantity` units of the named product with the given discount.
    ///
    /// Fails without changing stock if the product is unknown, out of stock,
    /// has fewer than `quantity` units on hand, or the sale total does not
    /// fit in a decimal.
    pub fn sell_product(
        &mut self,
        name: &str,
        quantity: u32,
        kind: DiscountKind,
    ) -> Result<SaleSummary> {
        let product = self.find_product_mut(name)?;

        if !product.is_in_stock() || quantity > product.quantity() {
            warn!(
                "Not enough stock of {}. Requested: {}, Available: {}",
                product.name(),
                quantity,
                product.quantity()
            );
            return Err(InventoryError::InsufficientStock {
                name: product.name().to_string(),
                requested: quantity,
                available: product.quantity(),
            });
        }

        let summary = match Self::quote(product, quantity, kind) {
            Ok(summary) => summary,
            Err(e) => {
                warn!("Sale of {} rejected: {}", product.name(), e);
                return Err(e);
            }
        };

        let sold = product.sell(quantity);
        debug_assert!(sold, "stock was checked before pricing");

        info!(
            "Sold {} x {} with {} discount, {} left",
            quantity,
            product.name(),
            kind,
            product.quantity()
        );

        Ok(summary)
    }

    /// Prices a sale of `quantity` units already known to be in stock.
    fn quote(product: &Product, quantity: u32, kind: DiscountKind) -> Result<SaleSummary> {
        Ok(SaleSummary {
            product: product.name().to_string(),
            quantity,
            unit_price: product.price(),
            original_total: order_total(product, quantity)?,
            discount: calculate_discount(product, quantity, kind)?,
            discount_description: discount_description(product, quantity, kind)?,
            final_price: calculate_final_price(product, quantity, kind)?,
            remaining_stock: product.quantity() - quantity,
        })
    }

    /// Adds `quantity` units to the named product. Returns the new stock.
    pub fn add_stock(&mut self, name: &str, quantity: u32) -> Result<u32> {
        let product = self.find_product_mut(name)?;

        if !product.add_stock(quantity) {
            warn!("Stock limit exceeded adding {} to {}", quantity, product.name());
            return Err(InventoryError::StockOverflow {
                name: product.name().to_string(),
                amount: quantity,
            });
        }

        info!(
            "Added {} items to {}. New stock: {}",
            quantity,
            product.name(),
            product.quantity()
        );
        Ok(product.quantity())
    }

    /// All products, in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Products of one category, in insertion order.
    pub fn products_by_type(&self, category: Category) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category() == category)
            .collect()
    }

    /// Products with at most `LOW_STOCK_THRESHOLD` units, in insertion order.
    pub fn low_stock_products(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.quantity() <= LOW_STOCK_THRESHOLD)
            .collect()
    }

    /// Sum of unit price times quantity over every product.
    ///
    /// Fails with `AmountOverflow` if the total leaves the decimal range.
    pub fn total_inventory_value(&self) -> Result<Money> {
        let values = self
            .products
            .iter()
            .map(|p| {
                p.stock_value().ok_or_else(|| {
                    InventoryError::AmountOverflow(format!("stock value of {}", p.name()))
                })
            })
            .collect::<Result<Vec<Money>>>()?;

        Money::checked_sum(values)
            .ok_or_else(|| InventoryError::AmountOverflow("total inventory value".to_string()))
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    pub fn statistics(&self) -> Result<InventoryStats> {
        Ok(InventoryStats {
            product_count: self.product_count(),
            total_value: self.total_inventory_value()?,
            low_stock: self
                .low_stock_products()
                .into_iter()
                .map(|p| (p.name().to_string(), p.quantity()))
                .collect(),
        })
    }
}
