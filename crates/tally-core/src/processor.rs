//! # Receipt Processor
//!
//! Wires parser → tax rules → calculator → receipt.
//!
//! ## Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "2 book at 12.49\n1 music CD at 14.99"                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  parser::parse ──► [Product, Product]       (InvalidFormat aborts)      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  TaxCalculator::calculate(product, rules)   (per product, in order)     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ReceiptItem ──fold──► Receipt                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::info;

use crate::error::{CoreResult, ValidationError};
use crate::parser;
use crate::receipt::{Receipt, ReceiptItem};
use crate::tax::{default_rules, TaxCalculator, TaxRule};

/// Turns order text into receipts using a fixed rule set.
///
/// Holds no mutable state; one processor can be shared across threads.
pub struct ReceiptProcessor {
    rules: Vec<Box<dyn TaxRule>>,
}

impl ReceiptProcessor {
    /// Processor with the built-in rules: basic sales tax, then import duty.
    pub fn new() -> Self {
        ReceiptProcessor {
            rules: default_rules(),
        }
    }

    /// Processor with a custom rule set, evaluated in the given order.
    pub fn with_rules(rules: Vec<Box<dyn TaxRule>>) -> Self {
        ReceiptProcessor { rules }
    }

    pub fn rules(&self) -> &[Box<dyn TaxRule>] {
        &self.rules
    }

    /// Parses `input` and builds its receipt.
    ///
    /// Parser errors are returned unchanged; nothing is recovered. A receipt
    /// whose grand total does not fit in `Money` is rejected with
    /// [`ValidationError::OutOfRange`].
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::ReceiptProcessor;
    ///
    /// let receipt = ReceiptProcessor::new()
    ///     .process("1 imported box of chocolates at 10.00")
    ///     .unwrap();
    ///
    /// assert_eq!(
    ///     receipt.to_string(),
    ///     "1 imported box of chocolates: 10.50\nSales Taxes: 0.50\nTotal: 10.50"
    /// );
    /// ```
    pub fn process(&self, input: &str) -> CoreResult<Receipt> {
        let products = parser::parse(input)?;

        let receipt = products.into_iter().fold(Receipt::new(), |receipt, product| {
            let tax = TaxCalculator::calculate(&product, &self.rules);
            receipt.add_item(ReceiptItem::new(product, tax))
        });

        let total = receipt.checked_total().ok_or_else(|| ValidationError::OutOfRange {
            field: "receipt total".to_string(),
            min: 0,
            max: i64::MAX,
        })?;

        info!(
            items = receipt.len(),
            sales_taxes = %receipt.total_sales_tax(),
            total = %total,
            "Receipt processed"
        );

        Ok(receipt)
    }
}

impl Default for ReceiptProcessor {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::types::{Product, TaxRate};
    use crate::validation::MAX_LINE_AMOUNT_CENTS;
    use crate::SAMPLE_ORDERS;

    #[test]
    fn test_first_sample() {
        let receipt = ReceiptProcessor::new().process(SAMPLE_ORDERS[0]).unwrap();

        assert_eq!(
            receipt.to_string(),
            "2 book: 24.98\n1 music CD: 16.49\n1 chocolate bar: 0.85\nSales Taxes: 1.50\nTotal: 42.32"
        );
        assert_eq!(receipt.total_sales_tax().cents(), 150);
        assert_eq!(receipt.total().cents(), 4232);
    }

    #[test]
    fn test_second_sample() {
        let receipt = ReceiptProcessor::new().process(SAMPLE_ORDERS[1]).unwrap();

        assert_eq!(
            receipt.to_string(),
            "1 imported box of chocolates: 10.50\n1 imported bottle of perfume: 54.65\nSales Taxes: 7.65\nTotal: 65.15"
        );
        assert_eq!(receipt.total_sales_tax().cents(), 765);
        assert_eq!(receipt.total().cents(), 6515);
    }

    #[test]
    fn test_third_sample() {
        let receipt = ReceiptProcessor::new().process(SAMPLE_ORDERS[2]).unwrap();

        assert_eq!(
            receipt.to_string(),
            "1 imported bottle of perfume: 32.19\n1 bottle of perfume: 20.89\n1 packet of headache pills: 9.75\n3 imported boxes of chocolates: 35.55\nSales Taxes: 7.90\nTotal: 98.38"
        );
        assert_eq!(receipt.total_sales_tax().cents(), 790);
        assert_eq!(receipt.total().cents(), 9838);
    }

    #[test]
    fn test_malformed_line_propagates() {
        let err = ReceiptProcessor::new()
            .process("1 book at 12.49\ninvalid input")
            .unwrap_err();

        assert_eq!(
            err,
            CoreError::InvalidFormat {
                line: "invalid input".to_string()
            }
        );
    }

    #[test]
    fn test_blank_lines_ignored() {
        let receipt = ReceiptProcessor::new()
            .process("2 book at 12.49\n\n   \n1 music CD at 14.99\n")
            .unwrap();

        assert_eq!(receipt.len(), 2);
        assert_eq!(receipt.to_string(), "2 book: 24.98\n1 music CD: 16.49\nSales Taxes: 1.50\nTotal: 41.47");
    }

    #[test]
    fn test_largest_line_renders() {
        let receipt = ReceiptProcessor::new()
            .process("1 bottle of perfume at 10000000000000.00\n1 bottle of perfume at 10000000000000.00")
            .unwrap();

        assert_eq!(receipt.total().cents(), 2 * MAX_LINE_AMOUNT_CENTS * 11 / 10);
        assert_eq!(
            receipt.to_string(),
            "1 bottle of perfume: 11000000000000.00\n1 bottle of perfume: 11000000000000.00\nSales Taxes: 2000000000000.00\nTotal: 22000000000000.00"
        );
    }

    #[test]
    fn test_oversized_line_rejected() {
        let err = ReceiptProcessor::new()
            .process("1 bottle of perfume at 92233720368547758.07")
            .unwrap_err();

        assert_eq!(
            err,
            CoreError::InvalidFormat {
                line: "1 bottle of perfume at 92233720368547758.07".to_string()
            }
        );
    }

    #[test]
    fn test_receipt_total_overflow_rejected() {
        let input = "1 book at 10000000000000.00\n".repeat(9_300);
        let err = ReceiptProcessor::new().process(&input).unwrap_err();

        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::OutOfRange { ref field, .. }) if field == "receipt total"
        ));
    }

    #[test]
    fn test_empty_input() {
        let receipt = ReceiptProcessor::new().process("").unwrap();
        assert!(receipt.is_empty());
        assert_eq!(receipt.to_string(), "Sales Taxes: 0.00\nTotal: 0.00");
    }

    #[test]
    fn test_default_rule_order() {
        let processor = ReceiptProcessor::default();
        let names: Vec<&str> = processor.rules().iter().map(|rule| rule.name()).collect();
        assert_eq!(names, ["basic_sales_tax", "import_duty"]);
    }

    struct LuxuryRule;

    impl TaxRule for LuxuryRule {
        fn name(&self) -> &str {
            "luxury"
        }

        fn rate_for(&self, product: &Product) -> TaxRate {
            if product.name().contains("perfume") {
                TaxRate::from_bps(2000)
            } else {
                TaxRate::zero()
            }
        }
    }

    #[test]
    fn test_custom_rules() {
        let processor = ReceiptProcessor::with_rules(vec![Box::new(LuxuryRule)]);
        let receipt = processor.process("1 bottle of perfume at 18.99\n1 music CD at 14.99").unwrap();

        // 18.99 × 20% = 3.798 → 3.80
        assert_eq!(receipt.items()[0].tax().cents(), 380);
        assert!(receipt.items()[1].tax().is_zero());
    }

    #[test]
    fn test_processor_is_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReceiptProcessor>();
        assert_send_sync::<Receipt>();

        let processor = ReceiptProcessor::new();
        let processor = &processor;
        std::thread::scope(|scope| {
            let handles: Vec<_> = SAMPLE_ORDERS
                .iter()
                .map(|order| scope.spawn(move || processor.process(order).unwrap()))
                .collect();

            let totals: Vec<i64> = handles
                .into_iter()
                .map(|handle| handle.join().unwrap().total().cents())
                .collect();
            assert_eq!(totals, [4232, 6515, 9838]);
        });
    }
}
