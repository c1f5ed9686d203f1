//! Error types for invoicing.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while billing an order.
#[derive(Debug, Error)]
pub enum BillingError {
    /// The invoice log could not be opened or appended to.
    #[error("could not write {}: {source}", path.display())]
    LogWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
