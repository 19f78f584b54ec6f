//! # JSON Sink
//!
//! ```json
//! {"products":[{"name":"Laptop","price":"999.00","quantity":"1"}]}
//! ```
//!
//! Every attribute value is written as a JSON string, exactly as received.

use std::io::Write;

use pricetag_core::CartSink;

use crate::document::Document;
use crate::error::{ExportError, ExportResult};
use crate::format::ExportFormat;

/// Writes cart entries as objects in a `products` array.
pub struct JsonCartWriter<W: Write> {
    doc: Document<W>,
    empty: bool,
}

impl<W: Write> JsonCartWriter<W> {
    /// Writes `{"products":[`.
    pub fn new(inner: W) -> ExportResult<Self> {
        Ok(JsonCartWriter {
            doc: Document::open(inner, ExportFormat::Json, r#"{"products":["#, "]}")?,
            empty: true,
        })
    }

    /// Writes `]}` and returns the writer.
    pub fn finish(mut self) -> ExportResult<W> {
        self.doc.finish()
    }
}

impl<W: Write> CartSink for JsonCartWriter<W> {
    type Error = ExportError;

    fn add_entry(&mut self, name: &str, attributes: &[(&str, String)]) -> ExportResult<()> {
        // Encode everything up front so a bad value never leaves half an object
        let mut object = format!(r#"{{"name":{}"#, serde_json::to_string(name)?);
        for (key, value) in attributes {
            object.push(',');
            object.push_str(&serde_json::to_string(key)?);
            object.push(':');
            object.push_str(&serde_json::to_string(value)?);
        }
        object.push('}');

        let out = self.doc.out()?;
        if !self.empty {
            out.write_all(b",")?;
        }
        out.write_all(object.as_bytes())?;
        self.empty = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document() {
        let mut writer = JsonCartWriter::new(Vec::new()).unwrap();
        writer
            .add_entry("Laptop", &[("price", "999.00".to_string())])
            .unwrap();
        writer
            .add_entry("Keyboard", &[("quantity", "2".to_string())])
            .unwrap();

        let json = String::from_utf8(writer.finish().unwrap()).unwrap();
        assert_eq!(
            json,
            r#"{"products":[{"name":"Laptop","price":"999.00"},{"name":"Keyboard","quantity":"2"}]}"#
        );
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["products"][1]["quantity"], "2");
    }

    #[test]
    fn test_empty_document() {
        let writer = JsonCartWriter::new(Vec::new()).unwrap();
        let json = String::from_utf8(writer.finish().unwrap()).unwrap();
        assert_eq!(json, r#"{"products":[]}"#);
    }

    #[test]
    fn test_escaping_keeps_document_valid() {
        let mut writer = JsonCartWriter::new(Vec::new()).unwrap();
        writer
            .add_entry("The \"Big\" One\n", &[("note", r"C:\temp".to_string())])
            .unwrap();

        let json = String::from_utf8(writer.finish().unwrap()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["products"][0]["name"], "The \"Big\" One\n");
        assert_eq!(parsed["products"][0]["note"], r"C:\temp");
    }

    #[test]
    fn test_drop_closes_document() {
        let mut buffer = Vec::new();
        {
            let mut writer = JsonCartWriter::new(&mut buffer).unwrap();
            writer.add_entry("Mouse", &[]).unwrap();
        }
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            r#"{"products":[{"name":"Mouse"}]}"#
        );
    }
}
