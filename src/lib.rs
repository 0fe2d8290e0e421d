//! # Inventory Tracker
//!
//! An in-memory inventory of books and electronics with stock tracking,
//! discounted sales and aggregate statistics.
//!
//! ## Design Principles
//!
//! - **Exact money**: prices are `rust_decimal` values, rounded only for display
//! - **Closed enumerations**: categories and discount rules are enums, so adding
//!   one is an exhaustiveness change rather than a string search
//! - **Failure as value**: every rejected operation returns an `InventoryError`
//!   and leaves the inventory untouched
//! - **No negative stock**: quantities are unsigned and sales are all-or-nothing
//!
//! ## Example
//!
//! ```
//! use inventory_tracker::{DiscountKind, InventoryManager, Money};
//!
//! let mut inventory = InventoryManager::new();
//! inventory
//!     .add_product("Book", "Rust Book", Money::from_cents(2000), 10)
//!     .unwrap();
//!
//! let sale = inventory
//!     .sell_product("rust book", 2, DiscountKind::Student)
//!     .unwrap();
//! assert_eq!(sale.final_price.to_string(), "36.00");
//! assert_eq!(sale.remaining_stock, 8);
//! ```

pub mod catalog;
pub mod console;
pub mod discount;
pub mod error;
pub mod factory;
pub mod inventory;
pub mod money;
pub mod product;

pub use catalog::{CatalogEntry, CatalogRecord};
pub use console::Console;
pub use discount::{
    calculate_discount, calculate_final_price, discount_description, order_total, DiscountKind,
};
pub use error::{InventoryError, Result};
pub use factory::ProductFactory;
pub use inventory::{InventoryManager, InventoryStats, SaleSummary, LOW_STOCK_THRESHOLD};
pub use money::Money;
pub use product::{Category, Product};
