//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With binary floats:                                                    │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │    ceil() of a value that should be a whole number of nickels can      │
//! │    jump a full nickel on such an error                                  │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    50 cents is exactly 10 nickels, ceil(10) = 10 → tax 0.50  ✅        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tally_core::money::Money;
//!
//! let price = Money::from_cents(1249); // 12.49
//! let line = price * 2;                // 24.98
//! assert_eq!(line.to_string(), "24.98");
//! ```

use serde::Serialize;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Sub};

use crate::types::TaxRate;

/// Basis points in one whole (100%).
const BPS_PER_UNIT: i128 = 10_000;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Subtraction stays closed over the type
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Display**: fixed two decimals with no currency symbol, which is
///   exactly what a receipt line prints
///
/// ## Where Money is Used
/// ```text
/// Product.unit_price ──► shelf_price (× quantity) ──┐
///                                                    ├──► ReceiptItem.total_price
/// TaxCalculator ──► per-unit tax (nickel rounded) ──┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents 10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Adds two amounts, returning `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(1125); // 11.25
    /// assert_eq!(unit_price.multiply_quantity(3).cents(), 3375);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0 * qty as i64)
    }

    /// Rounds up to the next multiple of `increment`.
    ///
    /// Exact multiples are returned unchanged. `increment` must be positive.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// let nickel = Money::from_cents(5);
    /// assert_eq!(Money::from_cents(147).round_up_to(nickel).cents(), 150);
    /// assert_eq!(Money::from_cents(150).round_up_to(nickel).cents(), 150);
    /// ```
    pub fn round_up_to(&self, increment: Money) -> Money {
        let steps = ceil_div(self.0 as i128, increment.0 as i128);
        Money::from_cents((steps * increment.0 as i128) as i64)
    }

    /// Applies `rate` and rounds the result UP to a multiple of `increment`.
    ///
    /// ## Implementation
    /// The exact product `cents × bps` is in units of 1/10000 cent, so the
    /// rounding happens before any precision is thrown away:
    /// `ceil(cents × bps / (increment × 10000)) × increment`
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    /// use tally_core::types::TaxRate;
    ///
    /// let price = Money::from_cents(1499);          // 14.99
    /// let rate = TaxRate::from_bps(1000);           // 10%
    /// let nickel = Money::from_cents(5);
    ///
    /// // 14.99 × 10% = 1.499 → 1.50
    /// assert_eq!(price.tax_rounded_up(rate, nickel).cents(), 150);
    /// ```
    pub fn tax_rounded_up(&self, rate: TaxRate, increment: Money) -> Money {
        // i128 keeps cents × bps exact for every i64 price
        let raw = self.0 as i128 * rate.bps() as i128;
        let steps = ceil_div(raw, increment.0 as i128 * BPS_PER_UNIT);
        Money::from_cents((steps * increment.0 as i128) as i64)
    }
}

/// Ceiling division for a positive divisor.
fn ceil_div(numerator: i128, denominator: i128) -> i128 {
    let quotient = numerator.div_euclid(denominator);
    if numerator.rem_euclid(denominator) == 0 {
        quotient
    } else {
        quotient + 1
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders as a plain two-decimal amount, e.g. `16.49` or `-5.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Multiplication by a quantity.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const NICKEL: Money = Money::from_cents(5);

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.major(), 10);
        assert_eq!(money.minor(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1649).to_string(), "16.49");
        assert_eq!(Money::from_cents(500).to_string(), "5.00");
        assert_eq!(Money::from_cents(85).to_string(), "0.85");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.50");
        assert_eq!(Money::from_cents(-5).to_string(), "-0.05");
        assert_eq!(Money::zero().to_string(), "0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3u32).cents(), 3000);

        let total: Money = [a, b, Money::from_cents(1)].into_iter().sum();
        assert_eq!(total.cents(), 1501);
    }

    #[test]
    fn test_checked_add() {
        let a = Money::from_cents(1000);
        assert_eq!(a.checked_add(Money::from_cents(500)), Some(Money::from_cents(1500)));
        assert_eq!(Money::from_cents(i64::MAX).checked_add(Money::from_cents(1)), None);
    }

    #[test]
    fn test_round_up_to_nickel() {
        assert_eq!(Money::from_cents(53).round_up_to(NICKEL).cents(), 55);
        assert_eq!(Money::from_cents(147).round_up_to(NICKEL).cents(), 150);
        assert_eq!(Money::from_cents(1).round_up_to(NICKEL).cents(), 5);
        assert_eq!(Money::from_cents(150).round_up_to(NICKEL).cents(), 150);
        assert_eq!(Money::from_cents(5).round_up_to(NICKEL).cents(), 5);
        assert_eq!(Money::zero().round_up_to(NICKEL).cents(), 0);
    }

    #[test]
    fn test_tax_rounded_up_sub_cent() {
        // 0.5625 → 0.60
        let price = Money::from_cents(1125);
        let tax = price.tax_rounded_up(TaxRate::from_bps(500), NICKEL);
        assert_eq!(tax.cents(), 60);

        // 47.50 × 15% = 7.125 → 7.15
        let price = Money::from_cents(4750);
        let tax = price.tax_rounded_up(TaxRate::from_bps(1500), NICKEL);
        assert_eq!(tax.cents(), 715);
    }

    /// 10.00 × 5% lands exactly on 0.50 and must stay there
    #[test]
    fn test_tax_rounded_up_exact_multiple_stays() {
        let price = Money::from_cents(1000);
        let tax = price.tax_rounded_up(TaxRate::from_bps(500), NICKEL);
        assert_eq!(tax.cents(), 50);
    }

    #[test]
    fn test_tax_rounded_up_zero_rate() {
        let price = Money::from_cents(1249);
        assert!(price.tax_rounded_up(TaxRate::zero(), NICKEL).is_zero());
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 512,
            ..ProptestConfig::default()
        })]

        /// Rounding never decreases the exact tax and always lands on a nickel.
        #[test]
        fn tax_rounding_is_ceiling_to_nickel(
            cents in 0i64..10_000_000i64,
            bps in 0u32..5_000u32,
        ) {
            let tax = Money::from_cents(cents).tax_rounded_up(TaxRate::from_bps(bps), NICKEL);
            let exact = cents as i128 * bps as i128;

            prop_assert!(tax.cents() as i128 * 10_000 >= exact);
            prop_assert!((tax.cents() as i128 - 5) * 10_000 < exact);
            prop_assert_eq!(tax.cents() % 5, 0);
        }

        #[test]
        fn round_up_to_is_idempotent(cents in 0i64..10_000_000i64) {
            let once = Money::from_cents(cents).round_up_to(NICKEL);
            prop_assert_eq!(once.round_up_to(NICKEL), once);
            prop_assert!(once >= Money::from_cents(cents));
        }
    }
}
