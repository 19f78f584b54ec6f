//! # Demo Run
//!
//! ```text
//! Laptop 999.00 ──reduce(discount)──► Laptop (reduced)
//!        │                                   │
//!        └──────────────┬────────────────────┘
//!                       ▼
//!   cart: Laptop (reduced) ×1, Keyboard ×2 ──► <output_dir>/cart.{xml,json}
//!
//!   points ──────────────────────────► BBox
//!   indexed points ──► adapter ──────► BBox
//! ```

use std::path::PathBuf;

use pricetag_core::geometry::{bounding_box, IndexedPoint, IndexedPointAdapter, Point};
use pricetag_core::{CoreError, Money, Product, ShoppingCart};
use pricetag_export::export_cart_to_path;
use tracing::info;

use crate::config::CliConfig;
use crate::error::CliResult;

/// Everything the demo produced.
#[derive(Debug, Default)]
pub struct DemoReport {
    /// Lines meant for stdout, in order.
    pub lines: Vec<String>,
    /// Files written, one per configured format.
    pub exported: Vec<PathBuf>,
}

fn price(literal: &str) -> CliResult<Money> {
    Ok(Money::parse(literal).map_err(CoreError::from)?)
}

pub fn run(config: &CliConfig) -> CliResult<DemoReport> {
    let discount = config.discount()?;
    let mut report = DemoReport::default();

    // Products
    let laptop = Product::new("Laptop", price("999.00")?);
    let keyboard = Product::new("Keyboard", price("10.00")?);
    let reduced = laptop.try_reduced(&discount).map_err(CoreError::from)?;

    report.lines.push(laptop.to_string());
    report.lines.push(keyboard.to_string());
    report.lines.push(format!("Discount: {discount}"));
    report.lines.push(reduced.to_string());

    // Cart
    let mut cart = ShoppingCart::new();
    cart.add(&reduced);
    cart.add(&keyboard);
    cart.add(&keyboard);
    report.lines.push(format!("Cart total: {}", cart.total()?));

    for format in &config.export.formats {
        let target = config
            .export
            .output_dir
            .join(format!("cart.{}", format.extension()));
        let path = export_cart_to_path(&cart, &target, *format)?;
        report.lines.push(format!("Exported {format}: {}", path.display()));
        report.exported.push(path);
    }

    // Geometry
    let points = [Point::new(0.1, 0.1), Point::new(0.9, 0.9), Point::new(0.1, 2.0)];
    if let Some(bbox) = bounding_box(&points) {
        report.lines.push(bbox.to_string());
    }

    let indexed = [IndexedPoint::new([-1.0, 0.5]), IndexedPoint::new([3.0, -2.5])];
    if let Some(bbox) = bounding_box(indexed.iter().map(IndexedPointAdapter::new)) {
        report.lines.push(bbox.to_string());
    }

    info!(
        discount = discount.percentage(),
        exported = report.exported.len(),
        "Demo finished"
    );
    Ok(report)
}
