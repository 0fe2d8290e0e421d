//! Product model and stock operations.
//!
//! Maintains the invariant that on-hand quantity never goes negative: a sale
//! larger than the current stock is rejected as a whole.

use crate::error::InventoryError;
use crate::money::Money;
use std::fmt;
use std::str::FromStr;

/// Fixed classification of a product.
///
/// Each category carries its own minimum price, enforced when products are
/// created through [`ProductFactory`](crate::ProductFactory).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Book,
    Electronics,
}

impl Category {
    /// Every category, in menu order.
    pub const ALL: [Category; 2] = [Category::Book, Category::Electronics];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Book => "Book",
            Category::Electronics => "Electronics",
        }
    }

    /// Lowest unit price a product of this category may carry.
    pub fn minimum_price(&self) -> Money {
        match self {
            Category::Book => Money::from_cents(500),
            Category::Electronics => Money::from_cents(1000),
        }
    }
}

impl FromStr for Category {
    type Err = InventoryError;

    /// Parses an exact, case-sensitive category name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.name() == s)
            .ok_or_else(|| InventoryError::UnsupportedCategory(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A stocked item.
///
/// # Invariants
///
/// - `quantity` is never negative (enforced by `u32`)
/// - `sell` either removes the full amount or changes nothing
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    name: String,
    category: Category,
    price: Money,
    quantity: u32,
}

impl Product {
    /// Creates a product as given, without applying category floors.
    ///
    /// Outside the crate, products are built through `ProductFactory`.
    pub(crate) fn new(name: impl Into<String>, category: Category, price: Money, quantity: u32) -> Self {
        Product {
            name: name.into(),
            category,
            price,
            quantity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Unit price.
    pub fn price(&self) -> Money {
        self.price
    }

    /// Quantity on hand.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn set_price(&mut self, price: Money) {
        self.price = price;
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }

    /// Returns `true` if at least one item is on hand.
    pub fn is_in_stock(&self) -> bool {
        self.quantity > 0
    }

    /// Removes `amount` items from stock.
    ///
    /// Returns `false` without touching the stock if fewer than `amount`
    /// items are on hand.
    pub fn sell(&mut self, amount: u32) -> bool {
        if amount > self.quantity {
            return false;
        }

        self.quantity -= amount;
        true
    }

    /// Adds `amount` items to stock.
    ///
    /// Returns `false` only if the new quantity would overflow.
    pub fn add_stock(&mut self, amount: u32) -> bool {
        match self.quantity.checked_add(amount) {
            Some(quantity) => {
                self.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Stock value at the current unit price, or `None` on overflow.
    pub fn stock_value(&self) -> Option<Money> {
        self.price.checked_times(self.quantity)
    }

    /// Case-insensitive name comparison used for lookups.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) - ${} [Stock: {}]",
            self.name, self.category, self.price, self.quantity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(quantity: u32) -> Product {
        Product::new("Rust in Action", Category::Book, Money::from_cents(2999), quantity)
    }

    #[test]
    fn test_category_names_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.name().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_category_parse_is_exact() {
        assert!(matches!(
            "book".parse::<Category>(),
            Err(InventoryError::UnsupportedCategory(name)) if name == "book"
        ));
        assert!("InvalidType".parse::<Category>().is_err());
        assert!(" Book".parse::<Category>().is_err());
    }

    #[test]
    fn test_in_stock() {
        assert!(book(1).is_in_stock());
        assert!(!book(0).is_in_stock());
    }

    #[test]
    fn test_sell_decrements_stock() {
        let mut product = book(10);
        assert!(product.sell(3));
        assert_eq!(product.quantity(), 7);

        assert!(product.sell(7));
        assert_eq!(product.quantity(), 0);
        assert!(!product.is_in_stock());
    }

    #[test]
    fn test_sell_more_than_stock_is_rejected() {
        let mut product = book(2);
        assert!(!product.sell(5));
        assert_eq!(product.quantity(), 2);
    }

    #[test]
    fn test_add_stock_is_additive() {
        let mut product = book(3);
        assert!(product.add_stock(5));
        assert_eq!(product.quantity(), 8);
    }

    #[test]
    fn test_add_stock_overflow_leaves_stock() {
        let mut product = book(u32::MAX - 1);
        assert!(!product.add_stock(2));
        assert_eq!(product.quantity(), u32::MAX - 1);
    }

    #[test]
    fn test_display_format() {
        let product = Product::new("Mouse", Category::Electronics, Money::from_cents(1999), 20);
        assert_eq!(product.to_string(), "Mouse (Electronics) - $19.99 [Stock: 20]");

        let product = Product::new("Pamphlet", Category::Book, Money::from_cents(500), 0);
        assert_eq!(product.to_string(), "Pamphlet (Book) - $5.00 [Stock: 0]");
    }

    #[test]
    fn test_matches_name_ignores_case() {
        let product = book(1);
        assert!(product.matches_name("rust in action"));
        assert!(product.matches_name("RUST IN ACTION"));
        assert!(!product.matches_name("Rust"));
    }

    #[test]
    fn test_stock_value() {
        assert_eq!(book(3).stock_value(), Some(Money::from_cents(8997)));
        assert_eq!(book(0).stock_value(), Some(Money::ZERO));

        let vault = Product::new("Vault", Category::Electronics, Money::MAX, 2);
        assert_eq!(vault.stock_value(), None);
    }
}
