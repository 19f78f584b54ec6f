//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    "10.00" is stored as 1000 cents, "0.07" as 7 cents                  │
//! │    Addition and subtraction are exact integer operations               │
//! │    Scalar multiply/divide is exact until one final rounding step       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pricetag_core::money::Money;
//!
//! // Parse from a literal (no separator means .00)
//! let price: Money = "999.00".parse().unwrap();
//! assert_eq!(price, Money::parse("999").unwrap());
//!
//! // Exact arithmetic
//! let total = price + Money::from_cents(500);
//! assert_eq!(total.to_string(), "1004.00");
//!
//! // Scalar arithmetic rounds once, half away from zero
//! let third = Money::parse("10.00").unwrap().divide(3.0).unwrap();
//! assert_eq!(third.to_string(), "3.33");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use std::str::FromStr;

use crate::error::{ArithmeticError, FormatError};
use crate::validation::parse_amount_cents;

// =============================================================================
// Money Type
// =============================================================================

/// A currency amount with exactly two fractional digits.
///
/// ## Design Decisions
/// - **i64 cents (signed)**: negative results of subtraction are allowed
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **serde as string**: `"999.00"` on the wire, parsed back through
///   [`Money::parse`] so the scale can never be lost
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  "999.00" ──parse──► Money ──► Product.price ──► Discount::apply       │
/// │                                      │                                  │
/// │                                      └──► CartEntry.unit_price          │
/// │                                                  │                      │
/// │                                                  ▼                      │
/// │                                        exported as "999.00"             │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Money(i64);

impl Money {
    /// Parses a money literal.
    ///
    /// ## Example
    /// ```rust
    /// use pricetag_core::money::Money;
    ///
    /// assert_eq!(Money::parse("10").unwrap(), Money::parse("10.00").unwrap());
    /// assert!(Money::parse("10.001").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, FormatError> {
        parse_amount_cents(input).map(Money)
    }

    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use pricetag_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.to_string(), "10.99");
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// # Panics
    ///
    /// Panics if the result leaves the `i64` cent range. Use
    /// [`Money::checked_multiply_quantity`] to get an error instead.
    ///
    /// ## Example
    /// ```rust
    /// use pricetag_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(1000);
    /// assert_eq!(unit_price.multiply_quantity(2).cents(), 2000);
    /// ```
    #[inline]
    pub fn multiply_quantity(&self, qty: i64) -> Self {
        self.checked_multiply_quantity(qty)
            .unwrap_or_else(|overflow| panic!("{overflow}"))
    }

    /// Multiplies money by a quantity, failing instead of overflowing.
    pub fn checked_multiply_quantity(&self, qty: i64) -> Result<Money, ArithmeticError> {
        self.0
            .checked_mul(qty)
            .map(Money)
            .ok_or(ArithmeticError::Overflow {
                operation: "multiply_quantity",
            })
    }

    /// Adds two amounts, failing instead of overflowing.
    ///
    /// ## Example
    /// ```rust
    /// use pricetag_core::money::Money;
    ///
    /// let max = Money::from_cents(i64::MAX);
    /// assert!(max.checked_add(Money::from_cents(1)).is_err());
    /// ```
    pub fn checked_add(self, other: Money) -> Result<Money, ArithmeticError> {
        self.0
            .checked_add(other.0)
            .map(Money)
            .ok_or(ArithmeticError::Overflow { operation: "add" })
    }

    /// Subtracts two amounts, failing instead of overflowing.
    pub fn checked_sub(self, other: Money) -> Result<Money, ArithmeticError> {
        self.0
            .checked_sub(other.0)
            .map(Money)
            .ok_or(ArithmeticError::Overflow {
                operation: "subtract",
            })
    }

    /// Multiplies by an arbitrary real scalar.
    ///
    /// ## Rounding
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  1. The f64 is split exactly into mantissa × 2^exponent            │
    /// │  2. cents × mantissa × 2^exponent is computed in i128 (no loss)    │
    /// │  3. The result is rounded ONCE to whole cents, half away from zero │
    /// │                                                                     │
    /// │     0.05 × 0.5  = 0.025  → 0.03                                    │
    /// │    -0.05 × 0.5  = -0.025 → -0.03                                   │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// The scalar is taken at its exact binary value, so `0.7` means
    /// 0.6999999999999999555910790149937…, which is what a decimal
    /// conversion of the same `f64` would see.
    ///
    /// ## Example
    /// ```rust
    /// use pricetag_core::money::Money;
    ///
    /// let price = Money::parse("999.00").unwrap();
    /// assert_eq!(price.multiply(0.7).unwrap().to_string(), "699.30");
    /// ```
    pub fn multiply(self, scalar: f64) -> Result<Money, ArithmeticError> {
        const OPERATION: &str = "multiply";
        let Scalar { mantissa, exponent } = Scalar::decompose(scalar)?;

        // |cents| < 2^63 and |mantissa| < 2^53, so this cannot overflow
        let product = self.0 as i128 * mantissa;

        let cents = if exponent >= 0 {
            pow2(exponent.unsigned_abs())
                .and_then(|factor| product.checked_mul(factor))
                .or_else(|| (product == 0).then_some(0))
                .ok_or(ArithmeticError::Overflow {
                    operation: OPERATION,
                })?
        } else {
            match pow2(exponent.unsigned_abs()) {
                Some(divisor) => div_round_half_away(product, divisor).ok_or(
                    ArithmeticError::Overflow {
                        operation: OPERATION,
                    },
                )?,
                // |product| < 2^116 against a divisor of at least 2^127
                None => 0,
            }
        };

        narrow(cents, OPERATION)
    }

    /// Divides by an arbitrary real scalar, rounding like [`Money::multiply`].
    ///
    /// ## Example
    /// ```rust
    /// use pricetag_core::money::Money;
    /// use pricetag_core::error::ArithmeticError;
    ///
    /// let price = Money::parse("10.00").unwrap();
    /// assert_eq!(price.divide(4.0).unwrap().to_string(), "2.50");
    /// assert_eq!(price.divide(0.0), Err(ArithmeticError::DivisionByZero));
    /// ```
    pub fn divide(self, scalar: f64) -> Result<Money, ArithmeticError> {
        const OPERATION: &str = "divide";
        let Scalar { mantissa, exponent } = Scalar::decompose(scalar)?;

        if mantissa == 0 {
            return Err(ArithmeticError::DivisionByZero);
        }
        if self.0 == 0 {
            return Ok(Money::zero());
        }

        let cents = self.0 as i128;
        let overflow = ArithmeticError::Overflow {
            operation: OPERATION,
        };

        let quotient = if exponent >= 0 {
            // cents / (mantissa × 2^exponent)
            match pow2(exponent.unsigned_abs()).and_then(|f| mantissa.checked_mul(f)) {
                Some(divisor) => div_round_half_away(cents, divisor).ok_or(overflow)?,
                // divisor beyond 2^127 against |cents| < 2^63
                None => 0,
            }
        } else {
            // (cents × 2^-exponent) / mantissa
            let numerator = pow2(exponent.unsigned_abs())
                .and_then(|factor| cents.checked_mul(factor))
                .ok_or(overflow)?;
            div_round_half_away(numerator, mantissa).ok_or(overflow)?
        };

        narrow(quotient, OPERATION)
    }
}

// =============================================================================
// Exact Scalar Arithmetic
// =============================================================================

/// A finite `f64` written exactly as `mantissa × 2^exponent`.
///
/// The mantissa is odd unless the value is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Scalar {
    mantissa: i128,
    exponent: i32,
}

impl Scalar {
    fn decompose(value: f64) -> Result<Self, ArithmeticError> {
        if !value.is_finite() {
            return Err(ArithmeticError::NonFiniteScalar { scalar: value });
        }

        let bits = value.to_bits();
        let biased = ((bits >> 52) & 0x7ff) as i32;
        let fraction = bits & ((1u64 << 52) - 1);

        let (mantissa, exponent) = if biased == 0 {
            // subnormal (or zero)
            (fraction, -1074)
        } else {
            (fraction | (1u64 << 52), biased - 1075)
        };

        if mantissa == 0 {
            return Ok(Scalar {
                mantissa: 0,
                exponent: 0,
            });
        }

        let shift = mantissa.trailing_zeros();
        let magnitude = (mantissa >> shift) as i128;
        let sign = if bits >> 63 == 1 { -1 } else { 1 };

        Ok(Scalar {
            mantissa: sign * magnitude,
            exponent: exponent + shift as i32,
        })
    }
}

/// 2^power, if it fits in a positive i128.
fn pow2(power: u32) -> Option<i128> {
    (power <= 126).then(|| 1i128 << power)
}

/// Integer division rounding half away from zero.
///
/// Returns `None` only for `i128::MIN / -1`.
fn div_round_half_away(numerator: i128, denominator: i128) -> Option<i128> {
    let quotient = numerator.checked_div(denominator)?;
    let remainder = numerator.checked_rem(denominator)?.unsigned_abs();
    let denominator_abs = denominator.unsigned_abs();

    if remainder >= denominator_abs - remainder {
        if (numerator < 0) != (denominator < 0) {
            Some(quotient - 1)
        } else {
            Some(quotient + 1)
        }
    } else {
        Some(quotient)
    }
}

fn narrow(cents: i128, operation: &'static str) -> Result<Money, ArithmeticError> {
    i64::try_from(cents)
        .map(Money)
        .map_err(|_| ArithmeticError::Overflow { operation })
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders the amount as `-?\d+\.\d\d` (no currency symbol, no grouping).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, magnitude / 100, magnitude % 100)
    }
}

impl FromStr for Money {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::parse(s)
    }
}

impl TryFrom<&str> for Money {
    type Error = FormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Money::parse(value)
    }
}

impl TryFrom<String> for Money {
    type Error = FormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Money::parse(&value)
    }
}

impl From<Money> for String {
    fn from(money: Money) -> Self {
        money.to_string()
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// The operators panic on overflow in every build profile. The `checked_*`
// methods are the fallible forms.

/// # Panics
///
/// Panics if the sum leaves the `i64` cent range.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        self.checked_add(other)
            .unwrap_or_else(|overflow| panic!("{overflow}"))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

/// # Panics
///
/// Panics if the difference leaves the `i64` cent range.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        self.checked_sub(other)
            .unwrap_or_else(|overflow| panic!("{overflow}"))
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

/// Multiplication by an integer quantity. Panics like
/// [`Money::multiply_quantity`].
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

/// # Panics
///
/// Panics if the running total leaves the `i64` cent range.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
