//! # Validation Module
//!
//! Field validators behind [`Product::new`](crate::types::Product::new).
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Input grammar (parser)                                       │
//! │  ├── digits-only quantity, unsigned two-decimal price                  │
//! │  └── failures surface as CoreError::InvalidFormat                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── quantity >= 1, price >= 0, non-blank name                         │
//! │  └── also guards products built directly by library callers            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Largest accepted line amount (`price × qty`): 10 trillion, in cents.
///
/// Keeps tax and receipt sums well inside `i64`: a line at the cap taxed at
/// 15% is ~1.15 × 10^15, so thousands of such lines still add up safely.
pub const MAX_LINE_AMOUNT_CENTS: i64 = 1_000_000_000_000_000;

/// Validates a product name.
///
/// ## Example
/// ```rust
/// use tally_core::validation::validate_product_name;
///
/// assert!(validate_product_name("music CD").is_ok());
/// assert!(validate_product_name("  ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(())
}

/// Validates a quantity value (must be at least 1).
pub fn validate_quantity(qty: u32) -> ValidationResult<()> {
    if qty == 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// Zero is allowed (free items).
///
/// ## Example
/// ```rust
/// use tally_core::money::Money;
/// use tally_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_cents(1099)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_cents(-100)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates that `price × qty` stays within [`MAX_LINE_AMOUNT_CENTS`].
///
/// ## Example
/// ```rust
/// use tally_core::money::Money;
/// use tally_core::validation::{validate_line_amount, MAX_LINE_AMOUNT_CENTS};
///
/// assert!(validate_line_amount(Money::from_cents(MAX_LINE_AMOUNT_CENTS), 1).is_ok());
/// assert!(validate_line_amount(Money::from_cents(MAX_LINE_AMOUNT_CENTS), 2).is_err());
/// ```
pub fn validate_line_amount(price: Money, qty: u32) -> ValidationResult<()> {
    match price.cents().checked_mul(qty as i64) {
        Some(amount) if amount <= MAX_LINE_AMOUNT_CENTS => Ok(()),
        _ => Err(ValidationError::OutOfRange {
            field: "line amount".to_string(),
            min: 0,
            max: MAX_LINE_AMOUNT_CENTS,
        }),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
