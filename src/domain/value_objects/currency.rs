//! # Currency Formatting
//!
//! Renders decimal amounts as currency strings such as `$1,234.50`.
//!
//! Amounts are rounded half away from zero to the configured number of
//! fractional digits, the integer part is grouped in thousands with `,`,
//! and negative amounts carry a leading `-` before the symbol.
//!
//! # Examples
//!
//! ```
//! use taxi_income::domain::value_objects::CurrencyFormat;
//! use rust_decimal::Decimal;
//!
//! let usd = CurrencyFormat::default();
//! assert_eq!(usd.format(Decimal::new(3105, 1)), "$310.50");
//! assert_eq!(usd.format(Decimal::new(1_234_567_891, 3)), "$1,234,567.89");
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default currency symbol.
pub const DEFAULT_SYMBOL: &str = "$";

/// Default number of fractional digits.
pub const DEFAULT_DECIMAL_PLACES: u32 = 2;

/// Display settings for monetary amounts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyFormat {
    /// Symbol placed before the amount.
    symbol: String,
    /// Number of fractional digits shown.
    decimal_places: u32,
}

impl CurrencyFormat {
    /// Creates a new currency format.
    #[must_use]
    pub fn new(symbol: impl Into<String>, decimal_places: u32) -> Self {
        Self {
            symbol: symbol.into(),
            decimal_places,
        }
    }

    /// Sets the currency symbol.
    #[must_use]
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = symbol.into();
        self
    }

    /// Sets the number of fractional digits.
    #[must_use]
    pub fn with_decimal_places(mut self, decimal_places: u32) -> Self {
        self.decimal_places = decimal_places;
        self
    }

    /// Returns the currency symbol.
    #[inline]
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Returns the number of fractional digits.
    #[inline]
    #[must_use]
    pub const fn decimal_places(&self) -> u32 {
        self.decimal_places
    }

    /// Formats an amount as a currency string.
    ///
    /// # Examples
    ///
    /// ```
    /// use taxi_income::domain::value_objects::CurrencyFormat;
    /// use rust_decimal::Decimal;
    ///
    /// let eur = CurrencyFormat::new("€", 2);
    /// assert_eq!(eur.format(Decimal::new(-1005, 3)), "-€1.01");
    /// ```
    #[must_use]
    pub fn format(&self, amount: Decimal) -> String {
        let rounded =
            amount.round_dp_with_strategy(self.decimal_places, RoundingStrategy::MidpointAwayFromZero);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        let digits = format!("{:.*}", self.decimal_places as usize, rounded.abs());

        let (integer, fraction) = match digits.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (digits.as_str(), None),
        };

        let mut out = String::with_capacity(digits.len() + self.symbol.len() + 8);
        if negative {
            out.push('-');
        }
        out.push_str(&self.symbol);
        out.push_str(&group_thousands(integer));
        if let Some(fraction) = fraction {
            out.push('.');
            out.push_str(fraction);
        }
        out
    }
}

impl Default for CurrencyFormat {
    /// US dollars with two fractional digits.
    fn default() -> Self {
        Self::new(DEFAULT_SYMBOL, DEFAULT_DECIMAL_PLACES)
    }
}

impl fmt::Display for CurrencyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CurrencyFormat({}, {}dp)", self.symbol, self.decimal_places)
    }
}

/// Inserts `,` between groups of three digits. Input is ASCII digits only.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
