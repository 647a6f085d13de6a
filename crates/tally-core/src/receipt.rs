//! # Receipt Module
//!
//! Receipt lines, the receipt itself, and its serializable summary.
//!
//! ## Receipt Building
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Receipt::new() ──add_item(a)──► [a] ──add_item(b)──► [a, b]            │
//! │       │                           │                     │                │
//! │       ▼                           ▼                     ▼                │
//! │      [ ]  (unchanged)            [a] (unchanged)      rendered          │
//! │                                                                         │
//! │  Every add_item returns a NEW receipt; earlier values stay valid.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rendering
//! ```text
//! 2 book: 24.98
//! 1 music CD: 16.49
//! 1 chocolate bar: 0.85
//! Sales Taxes: 1.50
//! Total: 42.32
//! ```

use serde::Serialize;
use std::fmt;

use crate::money::Money;
use crate::types::Product;

// =============================================================================
// Receipt Item
// =============================================================================

/// A product together with the tax computed for it.
///
/// The tax is taken as given; the item never recomputes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptItem {
    product: Product,
    tax: Money,
}

impl ReceiptItem {
    pub fn new(product: Product, tax: Money) -> Self {
        ReceiptItem { product, tax }
    }

    #[inline]
    pub fn product(&self) -> &Product {
        &self.product
    }

    #[inline]
    pub fn tax(&self) -> Money {
        self.tax
    }

    /// Shelf price plus tax.
    pub fn total_price(&self) -> Money {
        self.product.shelf_price() + self.tax
    }
}

/// `"<quantity> <name>: <total price>"`
impl fmt::Display for ReceiptItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {}",
            self.product.quantity(),
            self.product.name(),
            self.total_price()
        )
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// An ordered, immutable list of receipt items.
///
/// ## Invariants
/// - Items keep insertion order
/// - `add_item` never modifies `self`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Receipt {
    items: Vec<ReceiptItem>,
}

impl Receipt {
    /// Creates an empty receipt.
    pub fn new() -> Self {
        Receipt { items: Vec::new() }
    }

    pub fn from_items(items: Vec<ReceiptItem>) -> Self {
        Receipt { items }
    }

    /// Returns a new receipt with `item` appended.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::{Money, Product, Receipt, ReceiptItem};
    ///
    /// let empty = Receipt::new();
    /// let book = Product::single("book", Money::from_cents(1249)).unwrap();
    /// let one = empty.add_item(ReceiptItem::new(book, Money::zero()));
    ///
    /// assert!(empty.is_empty());
    /// assert_eq!(one.len(), 1);
    /// ```
    #[must_use]
    pub fn add_item(&self, item: ReceiptItem) -> Receipt {
        let mut items = Vec::with_capacity(self.items.len() + 1);
        items.extend_from_slice(&self.items);
        items.push(item);
        Receipt { items }
    }

    pub fn items(&self) -> &[ReceiptItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of tax across all items.
    pub fn total_sales_tax(&self) -> Money {
        self.items.iter().map(ReceiptItem::tax).sum()
    }

    /// Sum of shelf prices (before tax).
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(|item| item.product().shelf_price()).sum()
    }

    /// Grand total (all items including tax).
    ///
    /// Panics on overflow; [`ReceiptProcessor`](crate::ReceiptProcessor)
    /// checks [`checked_total`](Self::checked_total) before handing a
    /// receipt out.
    pub fn total(&self) -> Money {
        self.items.iter().map(ReceiptItem::total_price).sum()
    }

    /// Grand total, or `None` if any line or the running sum overflows.
    ///
    /// Taxes and shelf prices are never negative, so when this succeeds
    /// `subtotal` and `total_sales_tax` fit as well.
    pub fn checked_total(&self) -> Option<Money> {
        self.items.iter().try_fold(Money::zero(), |sum, item| {
            let line = item.product().shelf_price().checked_add(item.tax())?;
            sum.checked_add(line)
        })
    }
}

/// Item lines, then `Sales Taxes` and `Total`, with no trailing newline.
impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in &self.items {
            writeln!(f, "{}", item)?;
        }
        writeln!(f, "Sales Taxes: {}", self.total_sales_tax())?;
        write!(f, "Total: {}", self.total())
    }
}

// =============================================================================
// Receipt Summary
// =============================================================================

/// One line of a [`ReceiptSummary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceiptLine {
    pub quantity: u32,
    pub name: String,
    pub unit_price: String,
    pub tax: String,
    pub total_price: String,
}

/// Serializable snapshot of a receipt.
///
/// Amounts are pre-formatted two-decimal strings so JSON consumers see the
/// same figures as the printed receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceiptSummary {
    pub lines: Vec<ReceiptLine>,
    pub subtotal: String,
    pub sales_taxes: String,
    pub total: String,
}

impl From<&ReceiptItem> for ReceiptLine {
    fn from(item: &ReceiptItem) -> Self {
        ReceiptLine {
            quantity: item.product().quantity(),
            name: item.product().name().to_string(),
            unit_price: item.product().unit_price().to_string(),
            tax: item.tax().to_string(),
            total_price: item.total_price().to_string(),
        }
    }
}

impl From<&Receipt> for ReceiptSummary {
    fn from(receipt: &Receipt) -> Self {
        ReceiptSummary {
            lines: receipt.items().iter().map(ReceiptLine::from).collect(),
            subtotal: receipt.subtotal().to_string(),
            sales_taxes: receipt.total_sales_tax().to_string(),
            total: receipt.total().to_string(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
