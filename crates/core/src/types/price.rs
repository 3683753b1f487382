//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are kept in [`rust_decimal::Decimal`] so cart totals never go
//! through floating point. Display formatting follows the es-CO convention
//! the storefront has always used: Colombian pesos render with a dot as the
//! thousands separator and no decimal places (`$1.500.000`).

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., pesos, not centavos).
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

    /// Create a Colombian peso price from a whole-peso amount.
    #[must_use]
    pub fn cop(amount: i64) -> Self {
        Self::new(Decimal::from(amount), CurrencyCode::COP)
    }

    /// Multiply by a line quantity, keeping the currency.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        Self::new(self.amount * Decimal::from(quantity), self.currency_code)
    }

    /// Whether the amount is zero or positive.
    #[must_use]
    pub fn is_non_negative(&self) -> bool {
        self.amount >= Decimal::ZERO
    }
}

impl std::ops::Add for Price {
    type Output = Self;

    /// Adds two amounts. The left-hand currency wins; the catalog is
    /// single-currency so mixed additions do not occur in practice.
    fn add(self, rhs: Self) -> Self {
        Self::new(self.amount + rhs.amount, self.currency_code)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (places, thousands, decimal) = self.currency_code.format_spec();
        let rounded = self
            .amount
            .round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
        let plain = format!("{rounded:.0$}", places as usize);
        let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), ""));

        let (sign, digits) = int_part
            .strip_prefix('-')
            .map_or(("", int_part), |rest| ("-", rest));

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i).is_multiple_of(3) {
                grouped.push(thousands);
            }
            grouped.push(c);
        }

        write!(f, "{sign}{}{grouped}", self.currency_code.symbol())?;
        if !frac_part.is_empty() {
            write!(f, "{decimal}{frac_part}")?;
        }
        Ok(())
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    COP,
    USD,
}

impl CurrencyCode {
    /// Currency symbol used in display formatting.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::COP | Self::USD => "$",
        }
    }

    /// ISO 4217 code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::COP => "COP",
            Self::USD => "USD",
        }
    }

    /// (decimal places, thousands separator, decimal separator).
    const fn format_spec(self) -> (u32, char, char) {
        match self {
            Self::COP => (0, '.', ','),
            Self::USD => (2, ',', '.'),
        }
    }
}
