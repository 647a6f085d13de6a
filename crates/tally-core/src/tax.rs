//! # Tax Module
//!
//! Tax rules and the calculator that combines them.
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Product: imported bottle of perfume @ 47.50                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  BasicSalesTaxRule ── 1000 bps ─┐                                       │
//! │  ImportDutyRule ───── 500 bps ──┴──► Σ = 1500 bps                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  47.50 × 15% = 7.125 ──► round UP to 0.05 ──► 7.15 per unit             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  × quantity ──► line tax                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rules are additive: every rule is asked for its rate and the rates are
//! summed, so several rules can apply to the same product.

use tracing::debug;

use crate::money::Money;
use crate::types::{Product, TaxRate};

/// Tax rounding increment: 0.05.
pub const NICKEL: Money = Money::from_cents(5);

/// Basic sales tax rate: 10%.
pub const BASIC_SALES_TAX_RATE: TaxRate = TaxRate::from_bps(1000);

/// Import duty rate: 5%.
pub const IMPORT_DUTY_RATE: TaxRate = TaxRate::from_bps(500);

// =============================================================================
// Tax Rules
// =============================================================================

/// A tax rule decides which rate applies to a product.
///
/// Rules must be thread-safe (`Send + Sync`) and hold no mutable state, so a
/// single rule set can serve any number of concurrent receipts.
pub trait TaxRule: Send + Sync {
    /// Short identifier used in log output.
    fn name(&self) -> &str;

    /// Returns the rate this rule charges on `product` (zero if it does
    /// not apply).
    fn rate_for(&self, product: &Product) -> TaxRate;
}

/// 10% on everything except books, food and medical products.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicSalesTaxRule;

impl TaxRule for BasicSalesTaxRule {
    fn name(&self) -> &str {
        "basic_sales_tax"
    }

    fn rate_for(&self, product: &Product) -> TaxRate {
        if product.is_tax_exempt() {
            TaxRate::zero()
        } else {
            BASIC_SALES_TAX_RATE
        }
    }
}

/// 5% on all imported goods, with no exemptions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportDutyRule;

impl TaxRule for ImportDutyRule {
    fn name(&self) -> &str {
        "import_duty"
    }

    fn rate_for(&self, product: &Product) -> TaxRate {
        if product.is_imported() {
            IMPORT_DUTY_RATE
        } else {
            TaxRate::zero()
        }
    }
}

/// The built-in rule set in evaluation order: basic tax, then import duty.
pub fn default_rules() -> Vec<Box<dyn TaxRule>> {
    vec![Box::new(BasicSalesTaxRule), Box::new(ImportDutyRule)]
}

// =============================================================================
// Tax Calculator
// =============================================================================

/// Stateless tax calculator.
pub struct TaxCalculator;

impl TaxCalculator {
    /// Calculates the tax owed on a product line.
    ///
    /// Tax is computed per unit, rounded up to the next 0.05, then
    /// multiplied by the quantity.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::tax::{default_rules, TaxCalculator};
    /// use tally_core::{Money, Product};
    ///
    /// let cd = Product::single("music CD", Money::from_cents(1499)).unwrap();
    /// let tax = TaxCalculator::calculate(&cd, &default_rules());
    ///
    /// // 14.99 × 10% = 1.499 → 1.50
    /// assert_eq!(tax.cents(), 150);
    /// ```
    pub fn calculate(product: &Product, rules: &[Box<dyn TaxRule>]) -> Money {
        let total_rate: TaxRate = rules.iter().map(|rule| rule.rate_for(product)).sum();
        if total_rate.is_zero() {
            return Money::zero();
        }

        let per_unit = product.unit_price().tax_rounded_up(total_rate, NICKEL);
        let tax = per_unit.multiply_quantity(product.quantity());

        debug!(
            product = product.name(),
            rate_bps = total_rate.bps(),
            per_unit = %per_unit,
            tax = %tax,
            "Tax calculated"
        );

        tax
    }

    /// Rounds a whole-cent amount up to the nearest 0.05.
    ///
    /// ```rust
    /// use tally_core::tax::TaxCalculator;
    /// use tally_core::Money;
    ///
    /// assert_eq!(TaxCalculator::round_up_to_nickel(Money::from_cents(53)).cents(), 55);
    /// ```
    pub fn round_up_to_nickel(amount: Money) -> Money {
        amount.round_up_to(NICKEL)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
