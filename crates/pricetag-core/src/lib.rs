//! # pricetag-core: Exact Money, Discounts and Products
//!
//! This crate holds the value types of pricetag as pure functions with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        pricetag Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  apps/cli (`pricetag` binary)                   │   │
//! │  │        config ──► tracing ──► demo run ──► stdout               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               pricetag-export (XML / JSON sinks)                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ impl CartSink                          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ pricetag-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │ discount  │  │  product  │  │   cart    │  │   │
//! │  │   │   Money   │  │ Discount  │  │  Product  │  │ CartSink  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   geometry (bounding boxes) • validation • error               │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer-cent arithmetic (no floating point!)
//! - [`discount`] - Percentage discounts in [0, 100]
//! - [`product`] - Named products and the one-way reduce transition
//! - [`cart`] - Shopping cart and the [`CartSink`] export seam
//! - [`geometry`] - Bounding boxes over the [`geometry::Point2`] trait
//! - [`validation`] - Literal parsing and range checks
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: every operation returns a new value
//! 2. **No I/O**: file system access is FORBIDDEN here
//! 3. **Integer Money**: amounts are cents (i64); scalar math rounds once
//! 4. **Loud Preconditions**: an invalid discount or a double reduce panics;
//!    the `try_*` variants return the violation instead
//!
//! ## Example Usage
//!
//! ```rust
//! use pricetag_core::{Discount, Money, Product};
//!
//! let laptop = Product::new("Laptop", Money::parse("999.00").unwrap());
//! let sale = laptop.reduced(&Discount::new(30.0));
//!
//! assert_eq!(sale.to_string(), "Product: Laptop (reduced), price: 699.30");
//! ```

pub mod cart;
pub mod discount;
pub mod error;
pub mod geometry;
pub mod money;
pub mod product;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{CartEntry, CartSink, ShoppingCart};
pub use discount::Discount;
pub use error::{ArithmeticError, CoreError, CoreResult, FormatError, PreconditionViolation};
pub use money::Money;
pub use product::Product;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Suffix appended to a product name once a discount has been applied.
///
/// It is the only record of the reduced state, so it must never change
/// between releases.
pub const REDUCED_MARKER: &str = " (reduced)";
