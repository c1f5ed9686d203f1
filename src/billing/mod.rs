//! Invoicing: rendering an [`Invoice`] and appending it to the [`InvoiceLog`].

pub mod error;
pub mod invoice;
pub mod log;

pub use error::*;
pub use invoice::*;
pub use self::log::*;
