//! Temporary artifact lifecycle
//!
//! Rendered PDFs are parked in a uniquely named temporary file for the
//! duration of one response. The file is a scoped resource: deletion is
//! guaranteed on every exit path (including panics and early error returns)
//! because the underlying [`NamedTempFile`] removes itself on drop. A
//! failed deletion is logged and never surfaces to the caller.

use crate::{RenderError, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::warn;

/// Derive the attachment filename for a report download.
///
/// Pure function of its inputs; identical inputs always produce the
/// identical string.
pub fn attachment_filename(currency: &str, start_date: &str, end_date: &str) -> String {
    format!("currency_report_{currency}_{start_date}_to_{end_date}.pdf")
}

/// A rendered PDF parked in a process-local temporary file.
///
/// Created fresh per request and never reused. Exclusively owned by the
/// handler that created it; no other component references the path.
#[derive(Debug)]
pub struct RenderedDocument {
    file: NamedTempFile,
    filename: String,
}

impl RenderedDocument {
    /// Write PDF bytes to a fresh uniquely named temporary file.
    pub fn write(bytes: &[u8], filename: String) -> Result<Self> {
        let mut file = tempfile::Builder::new()
            .prefix("currency_report_")
            .suffix(".pdf")
            .tempfile()
            .map_err(RenderError::TempFile)?;

        file.write_all(bytes).map_err(RenderError::TempFile)?;
        file.flush().map_err(RenderError::TempFile)?;

        Ok(Self { file, filename })
    }

    /// The download filename sent in the Content-Disposition header.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Path of the temporary file (observable for lifecycle tests).
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Read the stored bytes back for transmission.
    pub fn read(&self) -> Result<Vec<u8>> {
        std::fs::read(self.path()).map_err(RenderError::TempFile)
    }

    /// Remove the temporary file.
    ///
    /// A deletion failure is logged, never propagated: by this point the
    /// response is already on its way and the caller can do nothing useful
    /// with the error. Dropping the document without calling this removes
    /// the file as well.
    pub fn cleanup(self) {
        let path = self.file.path().to_path_buf();
        if let Err(e) = self.file.close() {
            warn!(path = %path.display(), error = %e, "failed to remove temporary PDF");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_filename_derivation() {
        assert_eq!(
            attachment_filename("USDINR", "2024-01-01", "2024-02-01"),
            "currency_report_USDINR_2024-01-01_to_2024-02-01.pdf"
        );
    }

    #[test]
    fn test_filename_is_deterministic() {
        let a = attachment_filename("EURUSD", "2023-05-01", "2023-06-01");
        let b = attachment_filename("EURUSD", "2023-05-01", "2023-06-01");
        assert_eq!(a, b);
    }

    #[test]
    fn test_write_and_read_roundtrip() {
        let document =
            RenderedDocument::write(b"%PDF-fake", "report.pdf".to_string()).unwrap();
        assert!(document.path().exists());
        assert_eq!(document.read().unwrap(), b"%PDF-fake");
        assert_eq!(document.filename(), "report.pdf");
        document.cleanup();
    }

    #[test]
    fn test_cleanup_removes_file() {
        let document = RenderedDocument::write(b"bytes", "report.pdf".to_string()).unwrap();
        let path = document.path().to_path_buf();
        assert!(path.exists());
        document.cleanup();
        assert!(!path.exists());
    }

    #[test]
    fn test_drop_removes_file_on_error_paths() {
        let path: PathBuf;
        {
            let document = RenderedDocument::write(b"bytes", "report.pdf".to_string()).unwrap();
            path = document.path().to_path_buf();
            assert!(path.exists());
            // Early-return and panic paths drop the document without cleanup().
        }
        assert!(!path.exists());
    }

    #[test]
    fn test_each_document_gets_a_fresh_path() {
        let first = RenderedDocument::write(b"a", "report.pdf".to_string()).unwrap();
        let second = RenderedDocument::write(b"b", "report.pdf".to_string()).unwrap();
        assert_ne!(first.path(), second.path());
        first.cleanup();
        second.cleanup();
    }
}
