//! # Input Parser
//!
//! Turns order text into [`Product`]s.
//!
//! ## Line Grammar
//! ```text
//! <quantity> <name> at <price>
//!
//!   3 imported boxes of chocolates at 11.25
//!   │ └──────────────┬────────────┘ │  └─┬─┘
//!   │              name             │  price: digits "." two digits
//!   quantity: digits                literal "at", whitespace on both sides
//! ```
//!
//! The trailer ` at <price>` is anchored at the end of the line, so a name
//! may itself contain the word "at" (`1 hat at 2.00`, `1 cat at home at 3.50`).

use tracing::{debug, warn};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Product;

/// Keyword separating the name from the price.
const PRICE_KEYWORD: &str = "at";

/// Parses a single order line.
///
/// ## Example
/// ```rust
/// use tally_core::parser::parse_line;
///
/// let product = parse_line("1 imported box of chocolates at 10.00").unwrap();
/// assert_eq!(product.quantity(), 1);
/// assert_eq!(product.name(), "imported box of chocolates");
/// assert_eq!(product.unit_price().cents(), 1000);
///
/// assert!(parse_line("invalid input").is_err());
/// ```
pub fn parse_line(line: &str) -> CoreResult<Product> {
    let product = split_line(line.trim_matches(is_space)).and_then(|(quantity, name, price)| {
        let quantity = quantity.parse::<u32>().ok()?;
        let unit_price = parse_price(price)?;
        Product::new(name, unit_price, quantity).ok()
    });

    match product {
        Some(product) => {
            debug!(
                quantity = product.quantity(),
                name = product.name(),
                unit_price = %product.unit_price(),
                "Parsed order line"
            );
            Ok(product)
        }
        None => {
            warn!(line, "Rejected order line");
            Err(CoreError::InvalidFormat {
                line: line.to_string(),
            })
        }
    }
}

/// Parses every non-blank line of `input`, in order.
///
/// The first malformed line fails the whole batch.
///
/// ## Example
/// ```rust
/// use tally_core::parser::parse;
///
/// let products = parse("1 book at 12.49\n\n2 music CD at 14.99").unwrap();
/// assert_eq!(products.len(), 2);
/// assert_eq!(products[1].name(), "music CD");
/// ```
pub fn parse(input: &str) -> CoreResult<Vec<Product>> {
    input
        .lines()
        .filter(|line| !line.trim_matches(is_space).is_empty())
        .map(parse_line)
        .collect()
}

/// Splits a trimmed line into its quantity, name and price tokens.
fn split_line(line: &str) -> Option<(&str, &str, &str)> {
    // price: last whitespace-separated token
    let (rest, price) = line.rsplit_once(is_space)?;

    // " at" right before the price, preceded by whitespace
    let rest = rest.trim_end_matches(is_space);
    let rest = rest.strip_suffix(PRICE_KEYWORD)?;
    if !rest.ends_with(is_space) {
        return None;
    }

    // quantity: leading digits up to the first whitespace
    let (quantity, name) = rest.split_once(is_space)?;
    if quantity.is_empty() || !quantity.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let name = name.trim_matches(is_space);
    if name.is_empty() {
        return None;
    }

    Some((quantity, name, price))
}

/// Parses `<digits>.<two digits>` into exact cents.
fn parse_price(token: &str) -> Option<Money> {
    let (major, minor) = token.split_once('.')?;
    if major.is_empty() || minor.len() != 2 {
        return None;
    }
    if !major.bytes().chain(minor.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }

    let major: i64 = major.parse().ok()?;
    let minor: i64 = minor.parse().ok()?;
    let cents = major.checked_mul(100)?.checked_add(minor)?;
    Some(Money::from_cents(cents))
}

/// ASCII whitespace, vertical tab included.
fn is_space(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0B'
}

// =============================================================================
// Unit Tests
// =============================================================================
