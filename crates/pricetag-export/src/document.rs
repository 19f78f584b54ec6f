//! # Framed Documents
//!
//! Shared header/footer handling for the concrete sinks.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  open(writer) ──► header written                                       │
//! │       │                                                                 │
//! │       ├──► body written by the sink (zero or more entries)              │
//! │       │                                                                 │
//! │       ├──► finish()  ──► footer + flush, writer handed back            │
//! │       │                                                                 │
//! │       └──► dropped early (error, `?`, panic unwind)                     │
//! │                      ──► footer + flush, failures logged               │
//! │                                                                         │
//! │  Either way the footer is written exactly once.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{self, Write};

use tracing::{debug, warn};

use crate::error::ExportResult;
use crate::format::ExportFormat;

pub(crate) struct Document<W: Write> {
    inner: Option<W>,
    format: ExportFormat,
    footer: &'static str,
}

impl<W: Write> Document<W> {
    pub(crate) fn open(
        mut inner: W,
        format: ExportFormat,
        header: &str,
        footer: &'static str,
    ) -> ExportResult<Self> {
        inner.write_all(header.as_bytes())?;
        debug!(%format, "Export document opened");
        Ok(Document {
            inner: Some(inner),
            format,
            footer,
        })
    }

    /// The writer for body output.
    pub(crate) fn out(&mut self) -> io::Result<&mut W> {
        self.inner
            .as_mut()
            .ok_or_else(|| io::Error::other("export document already finished"))
    }

    /// Writes the footer and returns the writer.
    pub(crate) fn finish(&mut self) -> ExportResult<W> {
        let mut inner = self
            .inner
            .take()
            .ok_or_else(|| io::Error::other("export document already finished"))?;
        close(&mut inner, self.footer)?;
        debug!(format = %self.format, "Export document finished");
        Ok(inner)
    }
}

impl<W: Write> Drop for Document<W> {
    fn drop(&mut self) {
        if let Some(mut inner) = self.inner.take() {
            match close(&mut inner, self.footer) {
                Ok(()) => debug!(format = %self.format, "Export document finalized on drop"),
                Err(error) => warn!(
                    format = %self.format,
                    %error,
                    "Failed to finalize export document"
                ),
            }
        }
    }
}

fn close<W: Write>(inner: &mut W, footer: &str) -> io::Result<()> {
    inner.write_all(footer.as_bytes())?;
    inner.flush()
}
