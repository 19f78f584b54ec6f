//! # Error Types
//!
//! Domain-specific error types for pricetag-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  pricetag-core errors (this file)                                      │
//! │  ├── FormatError           - Malformed money literals                  │
//! │  ├── ArithmeticError       - Division by zero, overflow, NaN scalars   │
//! │  ├── PreconditionViolation - Bad discount, double reduce               │
//! │  └── CoreError             - Wraps all of the above                    │
//! │                                                                         │
//! │  pricetag-export errors (separate crate)                               │
//! │  └── ExportError           - Sink I/O failures                         │
//! │                                                                         │
//! │  Flow: FormatError → CoreError → CliError → stderr                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending input in error messages
//! 3. Errors are enum variants, never String
//! 4. Precondition violations panic on the default path; the `try_*`
//!    constructors hand the same variants back as values

use thiserror::Error;

// =============================================================================
// Format Error
// =============================================================================

/// A money literal could not be parsed.
///
/// ## Accepted Shapes
/// ```text
/// "10"      → 10.00   (no separator means .00)
/// "10.50"   → 10.50
/// "-3.20"   → -3.20
/// "10.5"    ✗ FractionDigits { digits: 1 }
/// "10.001"  ✗ FractionDigits { digits: 3 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Nothing to parse.
    #[error("amount is required")]
    Empty,

    /// Something other than a digit, a leading `-` or a single `.`.
    #[error("amount '{input}' contains invalid character '{found}'")]
    InvalidCharacter { input: String, found: char },

    /// More than one decimal point.
    #[error("amount '{input}' has more than one decimal point")]
    MultipleSeparators { input: String },

    /// A decimal point followed by anything other than exactly two digits.
    #[error("amount '{input}' has {digits} fractional digits, expected exactly 2")]
    FractionDigits { input: String, digits: usize },

    /// The amount does not fit in the cent range.
    #[error("amount '{input}' is out of range")]
    OutOfRange { input: String },
}

// =============================================================================
// Arithmetic Error
// =============================================================================

/// Scalar arithmetic on [`Money`](crate::Money) failed.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ArithmeticError {
    /// `Money::divide` was called with zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The scalar was NaN or infinite.
    #[error("scalar {scalar} is not a finite number")]
    NonFiniteScalar { scalar: f64 },

    /// The rounded result does not fit in the cent range.
    #[error("{operation} overflowed the money range")]
    Overflow { operation: &'static str },
}

// =============================================================================
// Precondition Violation
// =============================================================================

/// A programmer error: the caller broke a documented precondition.
///
/// ## When This Occurs
/// - Building a discount outside 0-100 %
/// - Reducing a product that already carries the reduced marker
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PreconditionViolation {
    /// Discount percentage outside the closed interval [0, 100].
    #[error("discount percentage {percentage} must be between 0 and 100")]
    DiscountOutOfRange { percentage: f64 },

    /// The product was already reduced once.
    ///
    /// ## User Workflow
    /// ```text
    /// Product("Laptop")
    ///      │ reduced(30%)
    ///      ▼
    /// Product("Laptop (reduced)")
    ///      │ reduced(10%)
    ///      ▼
    /// AlreadyReduced { name: "Laptop (reduced)" }
    /// ```
    #[error("product '{name}' has already been reduced")]
    AlreadyReduced { name: String },
}

// =============================================================================
// Core Error
// =============================================================================

/// Any failure raised by pricetag-core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// Malformed money literal.
    #[error("Invalid money format: {0}")]
    Format(#[from] FormatError),

    /// Scalar arithmetic failure.
    #[error("Arithmetic error: {0}")]
    Arithmetic(#[from] ArithmeticError),

    /// Broken precondition.
    #[error("Precondition violated: {0}")]
    Precondition(#[from] PreconditionViolation),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_messages() {
        let err = FormatError::FractionDigits {
            input: "10.001".to_string(),
            digits: 3,
        };
        assert_eq!(
            err.to_string(),
            "amount '10.001' has 3 fractional digits, expected exactly 2"
        );
        assert_eq!(FormatError::Empty.to_string(), "amount is required");
    }

    #[test]
    fn test_precondition_messages() {
        let err = PreconditionViolation::AlreadyReduced {
            name: "Laptop (reduced)".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "product 'Laptop (reduced)' has already been reduced"
        );

        let err = PreconditionViolation::DiscountOutOfRange { percentage: 100.5 };
        assert_eq!(
            err.to_string(),
            "discount percentage 100.5 must be between 0 and 100"
        );
    }

    #[test]
    fn test_errors_convert_to_core_error() {
        let core_err: CoreError = FormatError::Empty.into();
        assert!(matches!(core_err, CoreError::Format(_)));

        let core_err: CoreError = ArithmeticError::DivisionByZero.into();
        assert!(matches!(core_err, CoreError::Arithmetic(_)));
        assert_eq!(core_err.to_string(), "Arithmetic error: division by zero");
    }
}
