//! Error types for the presentation layer.

use thiserror::Error;

/// Failures of the form itself, as opposed to failures of a user action.
///
/// Action failures are always turned into dialogs; only a broken input or
/// output device ends the form.
#[derive(Debug, Error)]
pub enum UiError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
