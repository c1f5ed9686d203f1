//! Error types for the ordering session.

use crate::menu::MenuError;
use thiserror::Error;

/// Errors returned by [`SessionClient`](super::SessionClient) calls.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    /// Checkout was attempted without a customer name or contact.
    #[error("Please enter name and contact.")]
    MissingCustomerInfo,

    /// Checkout was attempted on an empty order.
    #[error("Your order is empty.")]
    EmptyOrder,

    /// The selected menu entry does not exist.
    #[error(transparent)]
    Menu(#[from] MenuError),

    /// The session loop has stopped and no longer accepts requests.
    #[error("Session closed")]
    Closed,

    /// The session loop dropped the response channel.
    #[error("Session dropped response channel")]
    Dropped,

    /// The session task panicked or was cancelled.
    #[error("Session task failed: {0}")]
    TaskFailed(String),
}
