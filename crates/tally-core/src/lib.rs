//! # tally-core: Sales Tax Receipt Pipeline
//!
//! This crate is the **heart** of Tally. It turns order text into itemized
//! receipts as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Tally Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 apps/cli (stdin / canned samples)               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ ReceiptProcessor::process              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tally-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌──────────────┐   │   │
//! │  │   │  parser  │─►│   tax    │─►│ receipt  │  │    money     │   │   │
//! │  │   │ Product  │  │ TaxRule  │  │ Receipt  │  │ Money, cents │   │   │
//! │  │   └──────────┘  └──────────┘  └──────────┘  └──────────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO SHARED STATE • PURE FUNCTIONS                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, TaxRate)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`tax`] - Tax rules and the nickel-rounding calculator
//! - [`receipt`] - Receipt items, receipts, summaries
//! - [`parser`] - Order line grammar
//! - [`processor`] - End-to-end pipeline
//! - [`error`] - Domain error types
//! - [`validation`] - Product field validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **Immutable Values**: Products, items and receipts never change once built
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::ReceiptProcessor;
//!
//! let receipt = ReceiptProcessor::new()
//!     .process("2 book at 12.49\n1 music CD at 14.99\n1 chocolate bar at 0.85")
//!     .unwrap();
//!
//! assert_eq!(
//!     receipt.to_string(),
//!     "2 book: 24.98\n1 music CD: 16.49\n1 chocolate bar: 0.85\nSales Taxes: 1.50\nTotal: 42.32"
//! );
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod parser;
pub mod processor;
pub mod receipt;
pub mod tax;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use processor::ReceiptProcessor;
pub use receipt::{Receipt, ReceiptItem, ReceiptLine, ReceiptSummary};
pub use tax::{BasicSalesTaxRule, ImportDutyRule, TaxCalculator, TaxRule};
pub use types::{Product, TaxRate};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// The three reference orders, as printed by the CLI by default.
pub const SAMPLE_ORDERS: [&str; 3] = [
    "2 book at 12.49\n1 music CD at 14.99\n1 chocolate bar at 0.85\n",
    "1 imported box of chocolates at 10.00\n1 imported bottle of perfume at 47.50\n",
    "1 imported bottle of perfume at 27.99\n1 bottle of perfume at 18.99\n1 packet of headache pills at 9.75\n3 imported boxes of chocolates at 11.25\n",
];
