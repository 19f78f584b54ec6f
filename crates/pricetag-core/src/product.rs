//! # Product Module
//!
//! A named item with a price, and the one-way "reduced" transition.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   ┌────────────┐   reduced(discount)   ┌─────────────────────────┐     │
//! │   │  Standard  │ ────────────────────► │  Reduced                │     │
//! │   │  "Laptop"  │                       │  "Laptop (reduced)"     │     │
//! │   └────────────┘                       └───────────┬─────────────┘     │
//! │                                                    │ reduced(...)       │
//! │                                                    ▼                    │
//! │                                         AlreadyReduced (panic)          │
//! │                                                                         │
//! │   The state lives in the name: a name ending in " (reduced)" IS        │
//! │   reduced, no matter how the product was built.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::discount::Discount;
use crate::error::PreconditionViolation;
use crate::money::Money;
use crate::validation::is_reduced_name;
use crate::REDUCED_MARKER;

/// A product available for sale.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    name: String,
    price: Money,
}

impl Product {
    /// Creates a product. The name is not validated.
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        Product {
            name: name.into(),
            price,
        }
    }

    /// Display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current price.
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    /// Returns true if a discount has already been applied.
    #[inline]
    pub fn is_reduced(&self) -> bool {
        is_reduced_name(&self.name)
    }

    /// Returns a discounted copy named `"<name> (reduced)"`.
    ///
    /// # Panics
    ///
    /// Panics if the product is already reduced. Discounting twice is a
    /// programming error; use [`Product::try_reduced`] where the product's
    /// history is unknown.
    ///
    /// ## Example
    /// ```rust
    /// use pricetag_core::{Discount, Money, Product};
    ///
    /// let laptop = Product::new("Laptop", Money::parse("999.00").unwrap());
    /// let sale = laptop.reduced(&Discount::new(30.0));
    ///
    /// assert_eq!(sale.name(), "Laptop (reduced)");
    /// assert_eq!(sale.price().to_string(), "699.30");
    /// assert_eq!(laptop.name(), "Laptop");
    /// ```
    pub fn reduced(&self, discount: &Discount) -> Product {
        match self.try_reduced(discount) {
            Ok(product) => product,
            Err(violation) => panic!("{violation}"),
        }
    }

    /// Like [`Product::reduced`], but returns the violation as a value.
    pub fn try_reduced(&self, discount: &Discount) -> Result<Product, PreconditionViolation> {
        if self.is_reduced() {
            return Err(PreconditionViolation::AlreadyReduced {
                name: self.name.clone(),
            });
        }

        Ok(Product {
            name: format!("{}{}", self.name, REDUCED_MARKER),
            price: discount.apply(self.price),
        })
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Product: {}, price: {}", self.name, self.price)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
