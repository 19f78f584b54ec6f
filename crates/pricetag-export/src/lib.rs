//! # pricetag-export: Cart Export Sinks
//!
//! Concrete [`CartSink`](pricetag_core::CartSink) implementations and a scoped file export.
//!
//! ## Resource Scoping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  export_cart_to_path(cart, "out/cart.xml", Xml)                         │
//! │                                                                         │
//! │    File::create ──► BufWriter ──► XmlCartWriter::new   (header)        │
//! │                                        │                                │
//! │                                        ▼                                │
//! │                              cart.export(&mut writer)                   │
//! │                                        │                                │
//! │                   ┌────────────────────┴──────────────────┐             │
//! │                   ▼ Ok                                    ▼ Err         │
//! │          writer.finish() (footer)              writer dropped (footer) │
//! │                   │                                       │             │
//! │                   ▼                                       ▼             │
//! │              file closed                   file closed, error returned │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pricetag_core::{Money, Product, ShoppingCart};
//! use pricetag_export::{export_cart, ExportFormat};
//!
//! let mut cart = ShoppingCart::new();
//! cart.add(&Product::new("Laptop", Money::parse("999.00").unwrap()));
//!
//! let bytes = export_cart(&cart, Vec::new(), ExportFormat::Json).unwrap();
//! assert!(String::from_utf8(bytes).unwrap().starts_with(r#"{"products":[{"name":"Laptop""#));
//! ```

mod document;
pub mod error;
pub mod format;
pub mod json;
pub mod xml;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use pricetag_core::ShoppingCart;
use tracing::info;

pub use error::{ExportError, ExportResult};
pub use format::ExportFormat;
pub use json::JsonCartWriter;
pub use xml::XmlCartWriter;

/// Writes the cart to `writer` in the given format and returns the writer.
pub fn export_cart<W: Write>(
    cart: &ShoppingCart,
    writer: W,
    format: ExportFormat,
) -> ExportResult<W> {
    match format {
        ExportFormat::Xml => {
            let mut sink = XmlCartWriter::new(writer)?;
            cart.export(&mut sink)?;
            sink.finish()
        }
        ExportFormat::Json => {
            let mut sink = JsonCartWriter::new(writer)?;
            cart.export(&mut sink)?;
            sink.finish()
        }
    }
}

/// Writes the cart to a file, creating parent directories as needed, and
/// returns the path written.
///
/// The file is complete and closed when this returns, on success and on
/// error alike.
pub fn export_cart_to_path(
    cart: &ShoppingCart,
    path: &Path,
    format: ExportFormat,
) -> ExportResult<PathBuf> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let file = BufWriter::new(File::create(path)?);
    export_cart(cart, file, format)?;

    info!(?path, %format, entries = cart.len(), "Cart exported");
    Ok(path.to_path_buf())
}
