//! # Discount Module
//!
//! A percentage discount that knows how to reduce a [`Money`] amount.
//!
//! ## Formula
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  reduced = price × (1 − percentage / 100)                               │
//! │                                                                         │
//! │  One multiplication, one rounding (half away from zero).                │
//! │                                                                         │
//! │  The "price − price × percentage / 100" form rounds the discount       │
//! │  amount instead of the result. Both agree except when the discount     │
//! │  amount lands exactly on half a cent:                                   │
//! │                                                                         │
//! │    0.05 at 50 %:  0.05 × 0.5 = 0.025 → 0.03   (retained fraction)       │
//! │                   0.05 − 0.03       = 0.02   (discount amount)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PreconditionViolation;
use crate::money::Money;
use crate::validation::validate_discount_percentage;

/// A validated discount percentage in the closed interval [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Discount {
    percentage: f64,
}

impl Discount {
    /// Creates a discount from a percentage.
    ///
    /// # Panics
    ///
    /// Panics if the percentage is outside [0, 100] or NaN. An out-of-range
    /// discount is a programming error; use [`Discount::try_new`] for input
    /// that has not been checked yet.
    ///
    /// ## Example
    /// ```rust
    /// use pricetag_core::{Discount, Money};
    ///
    /// let discount = Discount::new(30.0);
    /// let price = Money::parse("10.00").unwrap();
    /// assert_eq!(discount.apply(price).to_string(), "7.00");
    /// ```
    pub fn new(percentage: f64) -> Self {
        match Self::try_new(percentage) {
            Ok(discount) => discount,
            Err(violation) => panic!("{violation}"),
        }
    }

    /// Creates a discount, returning the violation instead of panicking.
    pub fn try_new(percentage: f64) -> Result<Self, PreconditionViolation> {
        validate_discount_percentage(percentage)?;
        Ok(Discount { percentage })
    }

    /// The discount percentage (30.0 means 30 %).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.percentage
    }

    /// The fraction of the price the customer still pays.
    #[inline]
    fn retained_fraction(&self) -> f64 {
        1.0 - self.percentage / 100.0
    }

    /// Applies the discount to a price.
    ///
    /// ## Example
    /// ```rust
    /// use pricetag_core::{Discount, Money};
    ///
    /// let price = Money::parse("999.00").unwrap();
    /// assert_eq!(Discount::new(30.0).apply(price).to_string(), "699.30");
    /// assert_eq!(Discount::new(100.0).apply(price), Money::zero());
    /// ```
    pub fn apply(&self, price: Money) -> Money {
        // The retained fraction is within [0, 1], so the rounded result is
        // never larger in magnitude than the price itself.
        match price.multiply(self.retained_fraction()) {
            Ok(reduced) => reduced,
            Err(err) => unreachable!("scaling by a fraction in [0, 1] failed: {err}"),
        }
    }
}

impl fmt::Display for Discount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percentage)
    }
}

impl TryFrom<f64> for Discount {
    type Error = PreconditionViolation;

    fn try_from(percentage: f64) -> Result<Self, Self::Error> {
        Discount::try_new(percentage)
    }
}

impl From<Discount> for f64 {
    fn from(discount: Discount) -> Self {
        discount.percentage
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
