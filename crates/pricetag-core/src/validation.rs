//! # Validation Module
//!
//! Input validation for pricetag value types.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Construction (THIS MODULE)                                   │
//! │  ├── Money literal shape: digits, optional '-', '.' + exactly 2 digits │
//! │  ├── Discount range: 0 ≤ percentage ≤ 100                              │
//! │  └── Reduced marker detection on product names                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Types                                                        │
//! │  └── Money / Discount / Product can only exist in a valid state        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pricetag_core::validation::{parse_amount_cents, validate_discount_percentage};
//!
//! assert_eq!(parse_amount_cents("10").unwrap(), 1000);
//! assert!(parse_amount_cents("10.001").is_err());
//! assert!(validate_discount_percentage(30.0).is_ok());
//! ```

use crate::error::{FormatError, PreconditionViolation};
use crate::REDUCED_MARKER;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, FormatError>;

/// Number of digits required after the decimal point.
pub const FRACTION_DIGITS: usize = 2;

// =============================================================================
// Money Literals
// =============================================================================

/// Parses a money literal into integer cents.
///
/// ## Rules
/// - Optional leading `-`
/// - Digits, optionally followed by a single `.` and exactly two digits
/// - No `.` at all is read as `.00`
/// - The integer part may be empty (`".50"`), but not the whole literal
///
/// ## Example
/// ```rust
/// use pricetag_core::validation::parse_amount_cents;
///
/// assert_eq!(parse_amount_cents("999.00").unwrap(), 99900);
/// assert_eq!(parse_amount_cents("-5.50").unwrap(), -550);
/// assert_eq!(parse_amount_cents(".50").unwrap(), 50);
/// assert!(parse_amount_cents("10.5").is_err());
/// assert!(parse_amount_cents("1,000.00").is_err());
/// ```
pub fn parse_amount_cents(input: &str) -> ValidationResult<i64> {
    let (negative, unsigned) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input),
    };

    if unsigned.is_empty() {
        return Err(FormatError::Empty);
    }

    if let Some(found) = unsigned.chars().find(|c| !c.is_ascii_digit() && *c != '.') {
        return Err(FormatError::InvalidCharacter {
            input: input.to_string(),
            found,
        });
    }

    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };

    let fraction_cents = match fraction {
        None => 0,
        Some(fraction) if fraction.contains('.') => {
            return Err(FormatError::MultipleSeparators {
                input: input.to_string(),
            });
        }
        Some(fraction) if fraction.len() != FRACTION_DIGITS => {
            return Err(FormatError::FractionDigits {
                input: input.to_string(),
                digits: fraction.len(),
            });
        }
        Some(fraction) => parse_digits(input, fraction)?,
    };

    let whole_units = if whole.is_empty() {
        0
    } else {
        parse_digits(input, whole)?
    };

    // Magnitude in i128 so that i64::MIN, which has no positive twin, still fits
    let magnitude = whole_units
        .checked_mul(100)
        .and_then(|cents| cents.checked_add(fraction_cents))
        .ok_or_else(|| out_of_range(input))?;
    let cents = if negative { -magnitude } else { magnitude };

    i64::try_from(cents).map_err(|_| out_of_range(input))
}

/// Digits were already checked, so the only possible failure is overflow.
fn parse_digits(input: &str, digits: &str) -> Result<i128, FormatError> {
    digits.parse::<i128>().map_err(|_| out_of_range(input))
}

fn out_of_range(input: &str) -> FormatError {
    FormatError::OutOfRange {
        input: input.to_string(),
    }
}

// =============================================================================
// Discounts
// =============================================================================

/// Validates a discount percentage.
///
/// ## Rules
/// - Must be within the closed interval [0, 100]
/// - NaN is rejected
pub fn validate_discount_percentage(percentage: f64) -> Result<(), PreconditionViolation> {
    if !(0.0..=100.0).contains(&percentage) {
        return Err(PreconditionViolation::DiscountOutOfRange { percentage });
    }

    Ok(())
}

// =============================================================================
// Product Names
// =============================================================================

/// Returns true if the name carries the reduced marker suffix.
#[inline]
pub fn is_reduced_name(name: &str) -> bool {
    name.ends_with(REDUCED_MARKER)
}

// =============================================================================
// Unit Tests
// =============================================================================
