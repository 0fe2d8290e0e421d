//! Product construction with per-category price floors.

use crate::error::Result;
use crate::money::Money;
use crate::product::{Category, Product};
use log::debug;

/// Builds products, raising any price below the category minimum up to it.
pub struct ProductFactory;

impl ProductFactory {
    /// Creates a product from a category name.
    ///
    /// Fails with `UnsupportedCategory` if `category` is not one of
    /// [`valid_types`](Self::valid_types).
    pub fn create_product(category: &str, name: &str, price: Money, quantity: u32) -> Result<Product> {
        let category: Category = category.parse()?;
        Ok(Self::create(category, name, price, quantity))
    }

    /// Creates a product of a known category.
    pub fn create(category: Category, name: &str, price: Money, quantity: u32) -> Product {
        let mut product = Product::new(name, category, price, quantity);

        let floor = category.minimum_price();
        if price < floor {
            debug!(
                "Raising price of {} from {} to {} {} minimum",
                name, price, floor, category
            );
            product.set_price(floor);
        }

        product
    }

    pub fn is_valid_type(category: &str) -> bool {
        category.parse::<Category>().is_ok()
    }

    /// Supported categories, in the order they are offered to users.
    pub fn valid_types() -> &'static [Category] {
        &Category::ALL
    }
}
