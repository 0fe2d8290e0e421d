//! Discount rules applied at sale time.
//!
//! The rule set is closed: a student discount on books, a bulk discount on
//! larger orders, or nothing. Unknown rule names resolve to no discount
//! rather than an error.

use crate::error::{InventoryError, Result};
use crate::money::Money;
use crate::product::{Category, Product};
use rust_decimal::Decimal;
use std::fmt;

/// Minimum item count for the bulk discount.
pub const BULK_MIN_QUANTITY: u32 = 5;

/// Selects which discount formula applies to a sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiscountKind {
    /// 10% off books; nothing on other categories.
    Student,

    /// 15% off any product when buying `BULK_MIN_QUANTITY` or more.
    Bulk,

    /// Full price. Displayed as "None".
    NoDiscount,
}

impl DiscountKind {
    /// Every discount kind, in menu order.
    pub const ALL: [DiscountKind; 3] = [
        DiscountKind::Student,
        DiscountKind::Bulk,
        DiscountKind::NoDiscount,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DiscountKind::Student => "Student",
            DiscountKind::Bulk => "Bulk",
            DiscountKind::NoDiscount => "None",
        }
    }

    /// Discount kinds offered to users, in menu order.
    pub fn available() -> &'static [DiscountKind] {
        &Self::ALL
    }

    /// Strict lookup by exact name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Lenient lookup: unrecognized names mean no discount.
    pub fn resolve(name: &str) -> Self {
        Self::from_name(name).unwrap_or(DiscountKind::NoDiscount)
    }

    pub fn is_valid(name: &str) -> bool {
        Self::from_name(name).is_some()
    }

    /// Fraction of the order total taken off when the rule applies.
    pub fn rate(&self) -> Decimal {
        match self {
            DiscountKind::Student => Decimal::new(10, 2),
            DiscountKind::Bulk => Decimal::new(15, 2),
            DiscountKind::NoDiscount => Decimal::ZERO,
        }
    }

    fn applies_to(&self, product: &Product, quantity: u32) -> bool {
        match self {
            DiscountKind::Student => product.category() == Category::Book,
            DiscountKind::Bulk => quantity >= BULK_MIN_QUANTITY,
            DiscountKind::NoDiscount => false,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            DiscountKind::Student => "Student discount (10% off books)",
            DiscountKind::Bulk => "Bulk discount (15% off 5+ items)",
            DiscountKind::NoDiscount => "Discount applied",
        }
    }
}

impl fmt::Display for DiscountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unit price times quantity, before any discount.
pub fn order_total(product: &Product, quantity: u32) -> Result<Money> {
    product
        .price()
        .checked_times(quantity)
        .ok_or_else(|| InventoryError::AmountOverflow(format!("order total for {}", product.name())))
}

/// Discount amount for buying `quantity` units of `product`.
///
/// The quantity is not checked against stock here.
pub fn calculate_discount(product: &Product, quantity: u32, kind: DiscountKind) -> Result<Money> {
    if !kind.applies_to(product, quantity) {
        return Ok(Money::ZERO);
    }

    order_total(product, quantity)?
        .checked_scaled(kind.rate())
        .ok_or_else(|| InventoryError::AmountOverflow(format!("discount for {}", product.name())))
}

/// Order total minus discount. No floor at zero is applied.
pub fn calculate_final_price(product: &Product, quantity: u32, kind: DiscountKind) -> Result<Money> {
    let discount = calculate_discount(product, quantity, kind)?;
    order_total(product, quantity)?
        .checked_sub(discount)
        .ok_or_else(|| InventoryError::AmountOverflow(format!("final price for {}", product.name())))
}

/// Human-readable description of the discount a sale would receive.
pub fn discount_description(product: &Product, quantity: u32, kind: DiscountKind) -> Result<String> {
    let discount = calculate_discount(product, quantity, kind)?;

    if discount.is_positive() {
        Ok(format!("{}: ${}", kind.label(), discount))
    } else {
        Ok("No discount applied".to_string())
    }
}
