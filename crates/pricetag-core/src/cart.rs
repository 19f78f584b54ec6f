//! # Shopping Cart
//!
//! Collects products by name and hands them to a [`CartSink`] for export.
//!
//! ## Export Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  cart.add(&laptop) ──┐                                                 │
//! │  cart.add(&kbd)    ──┼──► entries: [Laptop ×1, Keyboard ×2]            │
//! │  cart.add(&kbd)    ──┘                 │                                │
//! │                                        │ cart.export(&mut sink)         │
//! │                                        ▼                                │
//! │          sink.add_entry("Laptop",   [price, quantity, last_modified])  │
//! │          sink.add_entry("Keyboard", [price, quantity, last_modified])  │
//! │                                                                         │
//! │  The sink decides the format (XML, JSON, ...). The cart never knows.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CoreResult;
use crate::money::Money;
use crate::product::Product;

// =============================================================================
// Sink Capability
// =============================================================================

/// Anything that can receive cart entries as a name plus string attributes.
///
/// Implementations live outside this crate (see `pricetag-export`); the
/// trait keeps the cart free of any I/O.
pub trait CartSink {
    /// Error raised while accepting an entry.
    type Error;

    /// Records one entry. Attributes arrive in a fixed order.
    fn add_entry(&mut self, name: &str, attributes: &[(&str, String)]) -> Result<(), Self::Error>;
}

// =============================================================================
// Cart Entry
// =============================================================================

/// One line in the cart.
///
/// The unit price is frozen when the name is first added; later additions
/// of a product with the same name only bump the quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    pub name: String,
    pub unit_price: Money,
    pub quantity: i64,
    pub last_modified: DateTime<Utc>,
}

impl CartEntry {
    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> CoreResult<Money> {
        Ok(self.unit_price.checked_multiply_quantity(self.quantity)?)
    }

    /// The attributes handed to a [`CartSink`], in export order.
    pub fn attributes(&self) -> [(&'static str, String); 3] {
        [
            ("price", self.unit_price.to_string()),
            ("quantity", self.quantity.to_string()),
            (
                "last_modified",
                self.last_modified
                    .to_rfc3339_opts(SecondsFormat::Micros, true),
            ),
        ]
    }
}

// =============================================================================
// Shopping Cart
// =============================================================================

/// Products keyed by name, in first-added order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingCart {
    entries: Vec<CartEntry>,
}

impl ShoppingCart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        ShoppingCart::default()
    }

    /// Adds one unit of the product, stamped with the current time.
    pub fn add(&mut self, product: &Product) {
        self.add_at(product, Utc::now());
    }

    /// Adds one unit of the product with an explicit timestamp.
    pub fn add_at(&mut self, product: &Product, at: DateTime<Utc>) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.name == product.name()) {
            entry.quantity += 1;
            entry.last_modified = at;
            debug!(name = %entry.name, quantity = entry.quantity, "Cart quantity increased");
            return;
        }

        debug!(name = %product.name(), price = %product.price(), "Cart entry added");
        self.entries.push(CartEntry {
            name: product.name().to_string(),
            unit_price: product.price(),
            quantity: 1,
            last_modified: at,
        });
    }

    /// Entries in first-added order.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Number of distinct names in the cart.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been added yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all line totals. Fails if any line or the sum overflows.
    pub fn total(&self) -> CoreResult<Money> {
        self.entries.iter().try_fold(Money::zero(), |total, entry| -> CoreResult<Money> {
            Ok(total.checked_add(entry.line_total()?)?)
        })
    }

    /// Sends every entry to the sink. Stops at the first sink error.
    pub fn export<S: CartSink>(&self, sink: &mut S) -> Result<(), S::Error> {
        for entry in &self.entries {
            let attributes = entry.attributes();
            debug!(name = %entry.name, "Exporting cart entry");
            sink.add_entry(&entry.name, &attributes)?;
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ArithmeticError, CoreError};
    use chrono::TimeZone;

    /// Records what it receives.
    #[derive(Default)]
    struct RecordingSink {
        rows: Vec<(String, Vec<(String, String)>)>,
    }

    impl CartSink for RecordingSink {
        type Error = std::convert::Infallible;

        fn add_entry(
            &mut self,
            name: &str,
            attributes: &[(&str, String)],
        ) -> Result<(), Self::Error> {
            self.rows.push((
                name.to_string(),
                attributes
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.clone()))
                    .collect(),
            ));
            Ok(())
        }
    }

    /// Fails on the named entry.
    struct FailingSink {
        fail_on: &'static str,
        accepted: usize,
    }

    impl CartSink for FailingSink {
        type Error = String;

        fn add_entry(&mut self, name: &str, _: &[(&str, String)]) -> Result<(), Self::Error> {
            if name == self.fail_on {
                return Err(format!("refused {name}"));
            }
            self.accepted += 1;
            Ok(())
        }
    }

    fn at(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, minute, 0).unwrap()
    }

    fn product(name: &str, price: &str) -> Product {
        Product::new(name, Money::parse(price).unwrap())
    }

    #[test]
    fn test_add_merges_by_name() {
        let mut cart = ShoppingCart::new();
        cart.add_at(&product("Laptop", "999.00"), at(0));
        cart.add_at(&product("Keyboard", "10.00"), at(1));
        cart.add_at(&product("Keyboard", "10.00"), at(2));

        assert_eq!(cart.len(), 2);
        let keyboard = &cart.entries()[1];
        assert_eq!(keyboard.quantity, 2);
        assert_eq!(keyboard.last_modified, at(2));
    }

    #[test]
    fn test_first_price_is_frozen() {
        let mut cart = ShoppingCart::new();
        cart.add_at(&product("Mouse", "5.00"), at(0));
        cart.add_at(&product("Mouse", "7.00"), at(1));

        assert_eq!(cart.entries()[0].unit_price, Money::parse("5.00").unwrap());
        assert_eq!(cart.total().unwrap(), Money::parse("10.00").unwrap());
    }

    #[test]
    fn test_total() {
        let mut cart = ShoppingCart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total().unwrap(), Money::zero());

        cart.add(&product("Laptop", "999.00"));
        cart.add(&product("Keyboard", "10.00"));
        cart.add(&product("Keyboard", "10.00"));
        assert_eq!(cart.total().unwrap(), Money::parse("1019.00").unwrap());
    }

    #[test]
    fn test_total_reports_overflow() {
        let mut cart = ShoppingCart::new();
        let huge = Product::new("Yacht", Money::from_cents(i64::MAX / 2 + 1));
        cart.add_at(&huge, at(0));
        assert!(cart.total().is_ok());

        cart.add_at(&huge, at(1));
        assert!(matches!(
            cart.entries()[0].line_total(),
            Err(CoreError::Arithmetic(ArithmeticError::Overflow {
                operation: "multiply_quantity"
            }))
        ));
        assert!(cart.total().is_err());

        let mut cart = ShoppingCart::new();
        cart.add_at(&Product::new("A", Money::from_cents(i64::MAX)), at(0));
        cart.add_at(&product("B", "0.01"), at(0));
        assert!(matches!(
            cart.total(),
            Err(CoreError::Arithmetic(ArithmeticError::Overflow { operation: "add" }))
        ));
    }

    #[test]
    fn test_export_order_and_attributes() {
        let mut cart = ShoppingCart::new();
        cart.add_at(&product("Laptop", "999.00"), at(0));
        cart.add_at(&product("Keyboard", "10.00"), at(1));
        cart.add_at(&product("Keyboard", "10.00"), at(2));

        let mut sink = RecordingSink::default();
        cart.export(&mut sink).unwrap();

        assert_eq!(sink.rows.len(), 2);
        assert_eq!(sink.rows[0].0, "Laptop");
        assert_eq!(
            sink.rows[1].1,
            vec![
                ("price".to_string(), "10.00".to_string()),
                ("quantity".to_string(), "2".to_string()),
                (
                    "last_modified".to_string(),
                    "2024-03-01T12:02:00.000000Z".to_string()
                ),
            ]
        );
    }

    #[test]
    fn test_export_stops_at_sink_error() {
        let mut cart = ShoppingCart::new();
        cart.add_at(&product("A", "1.00"), at(0));
        cart.add_at(&product("B", "2.00"), at(0));
        cart.add_at(&product("C", "3.00"), at(0));

        let mut sink = FailingSink {
            fail_on: "B",
            accepted: 0,
        };
        assert_eq!(cart.export(&mut sink), Err("refused B".to_string()));
        assert_eq!(sink.accepted, 1);
    }

    #[test]
    fn test_reduced_product_is_a_separate_entry() {
        let laptop = product("Laptop", "999.00");
        let mut cart = ShoppingCart::new();
        cart.add_at(&laptop, at(0));
        cart.add_at(&laptop.reduced(&crate::Discount::new(30.0)), at(1));

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.entries()[1].name, "Laptop (reduced)");
        assert_eq!(cart.total().unwrap(), Money::parse("1698.30").unwrap());
    }
}
