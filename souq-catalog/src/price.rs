//! Price string parsing and range computation
//!
//! Catalog prices arrive as display strings such as `"15.5 $"` with a
//! trailing currency token. Amounts are extracted by stripping everything
//! but digits and the decimal point; the currency is whatever remains after
//! stripping digits and separators.

use crate::product::{Product, ProductOption};
use once_cell::sync::Lazy;
use regex::Regex;

static NON_AMOUNT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9.]+").expect("valid regex"));
static NON_CURRENCY: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9.,\s]+").expect("valid regex"));

/// Extract the numeric amount from a price string.
///
/// Returns `None` when nothing numeric remains or the residue is not a valid
/// number (e.g. `"1.2.3"`). Callers treat `None` as zero for sort keys and
/// exclude it from range display.
#[must_use]
pub fn parse_amount(price: &str) -> Option<f64> {
    let stripped = NON_AMOUNT.replace_all(price, "");
    stripped.parse::<f64>().ok()
}

/// The currency token of a price string: everything left after removing
/// digits, separators and whitespace. Assumes a single trailing token.
#[must_use]
pub fn currency_suffix(price: &str) -> String {
    NON_CURRENCY.replace_all(price, "").into_owned()
}

/// Sort key for price ordering: the first option's amount, zero when the
/// product has no parseable first price.
#[must_use]
pub fn price_sort_key(product: &Product) -> f64 {
    product
        .options
        .first()
        .and_then(|opt| parse_amount(&opt.price))
        .unwrap_or(0.0)
}

/// Price span across a product's options, with the currency taken from the
/// first option's price string
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
    pub currency: String,
}

impl PriceRange {
    /// Compute the range over all options with parseable prices.
    ///
    /// Returns `None` when no option price parses, in which case the card
    /// shows a fallback label instead of a range.
    #[must_use]
    pub fn of(options: &[ProductOption]) -> Option<Self> {
        let amounts: Vec<f64> = options
            .iter()
            .filter_map(|opt| parse_amount(&opt.price))
            .collect();
        let (first, rest) = amounts.split_first()?;
        let mut min = *first;
        let mut max = *first;
        for amount in rest {
            min = min.min(*amount);
            max = max.max(*amount);
        }
        let currency = options
            .first()
            .map(|opt| currency_suffix(&opt.price))
            .unwrap_or_default();
        Some(Self { min, max, currency })
    }

    /// Display label: `"15 $"` for a single price, `"15 - 30 $"` for a span.
    #[must_use]
    pub fn label(&self) -> String {
        let amounts = if (self.min - self.max).abs() < f64::EPSILON {
            format!("{}", self.min)
        } else {
            format!("{} - {}", self.min, self.max)
        };
        if self.currency.is_empty() {
            amounts
        } else {
            format!("{amounts} {}", self.currency)
        }
    }
}
