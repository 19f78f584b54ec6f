//! # XML Sink
//!
//! ```xml
//! <Products>
//!   <Product name="Laptop" price="999.00" quantity="1" last_modified="..."/>
//! </Products>
//! ```

use std::io::Write;

use pricetag_core::CartSink;

use crate::document::Document;
use crate::error::{ExportError, ExportResult};
use crate::format::ExportFormat;

/// Writes cart entries as `<Product/>` elements.
pub struct XmlCartWriter<W: Write> {
    doc: Document<W>,
}

impl<W: Write> XmlCartWriter<W> {
    /// Writes the opening `<Products>` tag.
    pub fn new(inner: W) -> ExportResult<Self> {
        Ok(XmlCartWriter {
            doc: Document::open(inner, ExportFormat::Xml, "<Products>\n", "</Products>\n")?,
        })
    }

    /// Writes the closing tag and returns the writer.
    pub fn finish(mut self) -> ExportResult<W> {
        self.doc.finish()
    }
}

impl<W: Write> CartSink for XmlCartWriter<W> {
    type Error = ExportError;

    fn add_entry(&mut self, name: &str, attributes: &[(&str, String)]) -> ExportResult<()> {
        let out = self.doc.out()?;
        write!(out, "  <Product name=\"{}\"", escape_attribute(name))?;
        for (key, value) in attributes {
            write!(out, " {}=\"{}\"", key, escape_attribute(value))?;
        }
        out.write_all(b"/>\n")?;
        Ok(())
    }
}

/// Escapes text for use inside a double-quoted attribute.
///
/// Tab, CR and LF become character references; a parser would otherwise
/// normalize them to spaces.
fn escape_attribute(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            '\t' => escaped.push_str("&#9;"),
            '\n' => escaped.push_str("&#10;"),
            '\r' => escaped.push_str("&#13;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&'static str, &str)]) -> Vec<(&'static str, String)> {
        pairs.iter().map(|(k, v)| (*k, v.to_string())).collect()
    }

    #[test]
    fn test_document() {
        let mut writer = XmlCartWriter::new(Vec::new()).unwrap();
        writer
            .add_entry("Laptop", &attrs(&[("price", "999.00"), ("quantity", "1")]))
            .unwrap();
        writer
            .add_entry("Keyboard", &attrs(&[("price", "10.00"), ("quantity", "2")]))
            .unwrap();

        let xml = String::from_utf8(writer.finish().unwrap()).unwrap();
        assert_eq!(
            xml,
            "<Products>\n\
             \x20 <Product name=\"Laptop\" price=\"999.00\" quantity=\"1\"/>\n\
             \x20 <Product name=\"Keyboard\" price=\"10.00\" quantity=\"2\"/>\n\
             </Products>\n"
        );
    }

    #[test]
    fn test_empty_document() {
        let writer = XmlCartWriter::new(Vec::new()).unwrap();
        let xml = String::from_utf8(writer.finish().unwrap()).unwrap();
        assert_eq!(xml, "<Products>\n</Products>\n");
    }

    #[test]
    fn test_escaping() {
        assert_eq!(
            escape_attribute(r#"Salt & "Pepper" <2>"#),
            "Salt &amp; &quot;Pepper&quot; &lt;2&gt;"
        );
        assert_eq!(escape_attribute("Kid's"), "Kid&apos;s");
    }

    #[test]
    fn test_whitespace_survives_attribute_normalization() {
        assert_eq!(escape_attribute("a\tb\r\nc"), "a&#9;b&#13;&#10;c");

        let mut writer = XmlCartWriter::new(Vec::new()).unwrap();
        writer.add_entry("Two\nLines", &[]).unwrap();
        let xml = String::from_utf8(writer.finish().unwrap()).unwrap();
        assert_eq!(
            xml,
            "<Products>\n  <Product name=\"Two&#10;Lines\"/>\n</Products>\n"
        );
    }

    #[test]
    fn test_drop_closes_document() {
        let mut buffer = Vec::new();
        {
            let mut writer = XmlCartWriter::new(&mut buffer).unwrap();
            writer.add_entry("Mouse", &[]).unwrap();
        }
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "<Products>\n  <Product name=\"Mouse\"/>\n</Products>\n"
        );
    }
}
