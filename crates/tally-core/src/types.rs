//! # Domain Types
//!
//! Core value types of the receipt pipeline.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐          ┌─────────────────┐                  │
//! │  │      Product        │          │    TaxRate      │                  │
//! │  │  ─────────────────  │          │  ─────────────  │                  │
//! │  │  name               │          │  bps (u32)      │                  │
//! │  │  unit_price (Money) │          │  1000 = 10%     │                  │
//! │  │  quantity (u32)     │          │   500 = 5%      │                  │
//! │  └─────────────────────┘          └─────────────────┘                  │
//! │                                                                         │
//! │  Classification (exempt / imported) is derived from the name on       │
//! │  every query, never stored.                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use std::iter::Sum;
use std::ops::Add;

use crate::money::Money;
use crate::validation::{
    validate_line_amount, validate_price, validate_product_name, validate_quantity,
    ValidationResult,
};

/// Name fragments that put a product in an exempt category
/// (books, food, medical products).
pub const EXEMPT_KEYWORDS: [&str; 3] = ["book", "chocolate", "pill"];

/// Name fragment that marks a product as imported.
pub const IMPORTED_KEYWORD: &str = "imported";

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000, so every rate a rule can return is an
/// exact integer and rates add without drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

impl Add for TaxRate {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        TaxRate(self.0 + other.0)
    }
}

impl Sum for TaxRate {
    fn sum<I: Iterator<Item = TaxRate>>(iter: I) -> Self {
        iter.fold(TaxRate::zero(), Add::add)
    }
}

// =============================================================================
// Product
// =============================================================================

/// One ordered line item.
///
/// Fields are private so a `Product` cannot change after construction;
/// every constructor goes through validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    name: String,
    unit_price: Money,
    quantity: u32,
}

impl Product {
    /// Creates a validated product.
    ///
    /// ## Rules
    /// - `name` must not be blank (it is stored trimmed)
    /// - `unit_price` must be non-negative
    /// - `quantity` must be at least 1
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::{Money, Product};
    ///
    /// let product = Product::new("music CD", Money::from_cents(1499), 1).unwrap();
    /// assert_eq!(product.name(), "music CD");
    /// assert!(Product::new("music CD", Money::from_cents(1499), 0).is_err());
    /// ```
    pub fn new(name: impl Into<String>, unit_price: Money, quantity: u32) -> ValidationResult<Self> {
        let name = name.into();
        validate_product_name(&name)?;
        validate_price(unit_price)?;
        validate_quantity(quantity)?;
        validate_line_amount(unit_price, quantity)?;

        Ok(Product {
            name: name.trim().to_string(),
            unit_price,
            quantity,
        })
    }

    /// Creates a product with the default quantity of 1.
    pub fn single(name: impl Into<String>, unit_price: Money) -> ValidationResult<Self> {
        Product::new(name, unit_price, 1)
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    #[inline]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Price before tax for the whole line (unit price × quantity).
    #[inline]
    pub fn shelf_price(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }

    /// Whether the product falls in an exempt category (books, food,
    /// medical products). Case-insensitive substring match on the name.
    pub fn is_tax_exempt(&self) -> bool {
        let name = self.name.to_lowercase();
        EXEMPT_KEYWORDS.iter().any(|keyword| name.contains(keyword))
    }

    /// Whether the product is imported. Case-insensitive substring match.
    pub fn is_imported(&self) -> bool {
        self.name.to_lowercase().contains(IMPORTED_KEYWORD)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn product(name: &str, cents: i64) -> Product {
        Product::single(name, Money::from_cents(cents)).unwrap()
    }

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(1000);
        assert_eq!(rate.bps(), 1000);
        assert!((rate.percentage() - 10.0).abs() < 0.001);
    }

    #[test]
    fn test_tax_rate_sum() {
        let total: TaxRate = [TaxRate::from_bps(1000), TaxRate::zero(), TaxRate::from_bps(500)]
            .into_iter()
            .sum();
        assert_eq!(total.bps(), 1500);
        assert!(std::iter::empty::<TaxRate>().sum::<TaxRate>().is_zero());
    }

    #[test]
    fn test_product_fields() {
        let product = Product::new("book", Money::from_cents(1249), 2).unwrap();
        assert_eq!(product.name(), "book");
        assert_eq!(product.unit_price().cents(), 1249);
        assert_eq!(product.quantity(), 2);
    }

    #[test]
    fn test_product_single_defaults_quantity() {
        assert_eq!(product("book", 1249).quantity(), 1);
    }

    #[test]
    fn test_product_name_is_trimmed() {
        assert_eq!(product("  music CD ", 1499).name(), "music CD");
    }

    #[test]
    fn test_product_validation() {
        assert!(matches!(
            Product::single("   ", Money::from_cents(100)),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            Product::new("book", Money::from_cents(100), 0),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(matches!(
            Product::single("book", Money::from_cents(-1)),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(Product::single("free sample", Money::zero()).is_ok());
    }

    #[test]
    fn test_tax_exempt_categories() {
        assert!(product("book", 1249).is_tax_exempt());
        assert!(product("chocolate bar", 85).is_tax_exempt());
        assert!(product("packet of headache pills", 975).is_tax_exempt());
        assert!(product("Imported BOX of Chocolates", 1000).is_tax_exempt());

        assert!(!product("music CD", 1499).is_tax_exempt());
        assert!(!product("bottle of perfume", 1899).is_tax_exempt());
    }

    #[test]
    fn test_imported() {
        assert!(product("imported box of chocolates", 1000).is_imported());
        assert!(product("IMPORTED bottle of perfume", 4750).is_imported());
        assert!(!product("book", 1249).is_imported());
    }

    #[test]
    fn test_shelf_price() {
        let product = Product::new("book", Money::from_cents(1249), 2).unwrap();
        assert_eq!(product.shelf_price().cents(), 2498);
        assert_eq!(self::product("book", 1249).shelf_price().cents(), 1249);
    }

    #[test]
    fn test_product_serializes() {
        let json = serde_json::to_value(product("music CD", 1499)).unwrap();
        assert_eq!(json["name"], "music CD");
        assert_eq!(json["unit_price"], 1499);
        assert_eq!(json["quantity"], 1);
    }
}
