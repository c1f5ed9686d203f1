//! The rendering surface of the form.

use crate::menu::Menu;
use crate::session::OrderView;
use async_trait::async_trait;
use std::io;

/// How a modal message is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Info,
    Warning,
    Error,
}

/// A modal message shown in response to one user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub kind: DialogKind,
    pub title: String,
    pub message: String,
}

impl Dialog {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(DialogKind::Info, title, message)
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(DialogKind::Warning, title, message)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(DialogKind::Error, title, message)
    }

    fn new(kind: DialogKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Everything the [`App`](super::App) needs to draw.
///
/// Implemented by [`TerminalFrontend`](super::TerminalFrontend) for real runs and by
/// [`RecordingFrontend`](super::mock::RecordingFrontend) in tests. Errors here are
/// failures of the output device itself, which no dialog could report.
#[async_trait]
pub trait Frontend: Send {
    /// Draws the title bar and welcome banner.
    async fn show_header(&mut self, title: &str, welcome: &str) -> io::Result<()>;

    /// Draws one tab per menu section.
    async fn show_menu(&mut self, menu: &Menu) -> io::Result<()>;

    /// Draws the order list and the total label.
    async fn show_order(&mut self, view: &OrderView) -> io::Result<()>;

    /// Shows a modal message.
    async fn show_dialog(&mut self, dialog: &Dialog) -> io::Result<()>;

    /// Shows the list of available commands.
    async fn show_help(&mut self) -> io::Result<()>;
}
