//! Conversion math and result formatting.

use anyhow::{Context, Result};
use rust_decimal::{Decimal, RoundingStrategy};

/// Validated answers from the three prompts.
///
/// Fields hold the raw input as entered (trimmed, codes not yet
/// uppercased); immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub from: String,
    pub to: String,
    pub amount: String,
}

impl ConversionRequest {
    /// Uppercased base currency code, as the API expects it.
    pub fn base(&self) -> String {
        self.from.to_uppercase()
    }

    /// Uppercased target currency code.
    pub fn target(&self) -> String {
        self.to.to_uppercase()
    }

    /// The amount as a decimal. The prompt validator guarantees this
    /// parses; it can only fail on a hand-built request.
    pub fn amount_value(&self) -> Result<Decimal> {
        self.amount
            .parse()
            .with_context(|| format!("Invalid amount: {}", self.amount))
    }
}

/// Multiplies `amount` by `rate` and rounds to 2 fractional digits, or
/// `None` when the product does not fit a `Decimal`.
///
/// Rounding is half-away-from-zero, the usual fixed-point display
/// rounding: `99.999 * 2` becomes `200.00`, not `199.99`.
pub fn convert(amount: Decimal, rate: Decimal) -> Option<Decimal> {
    let product = amount.checked_mul(rate)?;
    Some(product.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

/// Formats the final `<amount> <FROM> = <converted> <TO>` line, echoing
/// the amount exactly as entered and padding the result to 2 digits.
pub fn conversion_line(request: &ConversionRequest, converted: Decimal) -> String {
    format!(
        "{} {} = {:.2} {}",
        request.amount,
        request.base(),
        converted,
        request.target()
    )
}
