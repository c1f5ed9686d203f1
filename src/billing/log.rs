//! Append-only invoice log.

use super::BillingError;
use std::path::{Path, PathBuf};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

/// Width of the dashed line written after every invoice.
pub const SEPARATOR_WIDTH: usize = 50;

/// A flat text file that every checked-out invoice is appended to.
///
/// There is no read path; the file is only ever opened for appending.
#[derive(Debug, Clone)]
pub struct InvoiceLog {
    path: PathBuf,
}

impl InvoiceLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends the invoice text followed by a dashed separator line.
    pub async fn append(&self, invoice_text: &str) -> Result<(), BillingError> {
        debug!(path = %self.path.display(), bytes = invoice_text.len(), "Appending invoice");
        let entry = format!("{}\n{}\n", invoice_text, "-".repeat(SEPARATOR_WIDTH));

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|source| self.write_error(source))?;
        file.write_all(entry.as_bytes())
            .await
            .map_err(|source| self.write_error(source))?;
        file.flush().await.map_err(|source| self.write_error(source))?;

        info!(path = %self.path.display(), "Invoice saved");
        Ok(())
    }

    fn write_error(&self, source: std::io::Error) -> BillingError {
        BillingError::LogWrite {
            path: self.path.clone(),
            source,
        }
    }
}
