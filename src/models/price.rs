use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::MenuError;

/// Largest accepted price, in cents (one billion major units).
pub const MAX_PRICE_CENTS: u64 = 100_000_000_000;

/// A non-negative amount of money held exactly in minor units (cents).
///
/// Catalog files carry prices as decimal major units (`250`, `12.5`); the
/// conversion rounds to the nearest cent once, at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price {
    cents: u64,
}

impl Price {
    pub const ZERO: Price = Price { cents: 0 };
    pub const MAX: Price = Price {
        cents: MAX_PRICE_CENTS,
    };

    pub const fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    /// Build a price from a major-unit value such as `250.0`.
    ///
    /// The binary value is rounded to the nearest cent, so inputs with more
    /// than two decimals (e.g. `0.145`) may land on either neighbouring cent.
    /// Values above [`MAX_PRICE_CENTS`] are rejected.
    pub fn from_major(value: f64) -> Result<Self, MenuError> {
        if !value.is_finite() {
            return Err(MenuError::InvalidPrice(format!("{} is not finite", value)));
        }
        if value < 0.0 {
            return Err(MenuError::InvalidPrice(format!("{} is negative", value)));
        }
        let cents = (value * 100.0).round();
        if cents > MAX_PRICE_CENTS as f64 {
            return Err(MenuError::InvalidPrice(format!(
                "{} exceeds the maximum of {}",
                value,
                Price::MAX
            )));
        }
        Ok(Self {
            cents: cents as u64,
        })
    }

    #[inline]
    pub fn cents(&self) -> u64 {
        self.cents
    }

    #[inline]
    pub fn as_major(&self) -> f64 {
        self.cents as f64 / 100.0
    }
}

impl TryFrom<f64> for Price {
    type Error = MenuError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Price::from_major(value)
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> Self {
        price.as_major()
    }
}

/// Always two decimal places, e.g. `250.00`.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.cents / 100, self.cents % 100)
    }
}
