//! Type-safe price representation using decimal arithmetic.

use core::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A price with currency information.
///
/// Displays the way an en-US storefront renders money: currency symbol,
/// comma-grouped thousands and exactly two fraction digits.
///
/// ```
/// use rust_decimal::Decimal;
/// use shopfront_core::Price;
///
/// assert_eq!(Price::usd(Decimal::new(129_999, 2)).to_string(), "$1,299.99");
/// assert_eq!(Price::usd(Decimal::from(28_500)).to_string(), "$28,500.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a price in US dollars.
    #[must_use]
    pub const fn usd(amount: Decimal) -> Self {
        Self::new(amount, CurrencyCode::USD)
    }

    /// Format for display (e.g., "$1,299.99").
    #[must_use]
    pub fn display(&self) -> String {
        let rounded = self
            .amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let digits = format!("{:.2}", rounded.abs());
        let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };

        format!(
            "{sign}{}{}.{fraction}",
            self.currency_code.symbol(),
            group_thousands(whole)
        )
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// Insert a comma between every group of three integer digits.
///
/// ```
/// assert_eq!(shopfront_core::group_thousands("1294"), "1,294");
/// ```
#[must_use]
pub fn group_thousands(whole: &str) -> String {
    let len = whole.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// ISO 4217 currency codes.
///
/// The storefront prices everything in US dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
}

impl CurrencyCode {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::USD => "$",
        }
    }
}
