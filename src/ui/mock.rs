//! # Recording Frontend
//!
//! A [`Frontend`] for testing the [`App`](super::App) without a terminal.
//!
//! Every draw call is appended to a shared log of [`Frame`]s. The frontend is
//! cloneable: hand one clone to the app and keep the other to inspect what the
//! user would have seen.
//!
//! ```ignore
//! let frontend = RecordingFrontend::new();
//! let mut app = App::new(client, frontend.clone(), &config);
//! app.handle_line("checkout").await?;
//!
//! assert_eq!(frontend.dialogs()[0].title, "Missing Info");
//! ```

use super::{Dialog, Frontend};
use crate::menu::Menu;
use crate::session::OrderView;
use async_trait::async_trait;
use std::io;
use std::sync::{Arc, Mutex};

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    Header { title: String, welcome: String },
    Menu { sections: usize, dishes: usize },
    Order(OrderView),
    Dialog(Dialog),
    Help,
}

#[derive(Clone, Default)]
pub struct RecordingFrontend {
    frames: Arc<Mutex<Vec<Frame>>>,
}

impl RecordingFrontend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every frame drawn so far, oldest first.
    pub fn frames(&self) -> Vec<Frame> {
        self.frames.lock().unwrap().clone()
    }

    /// Only the dialogs, oldest first.
    pub fn dialogs(&self) -> Vec<Dialog> {
        self.frames()
            .into_iter()
            .filter_map(|frame| match frame {
                Frame::Dialog(dialog) => Some(dialog),
                _ => None,
            })
            .collect()
    }

    /// The most recently drawn order list.
    pub fn last_order(&self) -> Option<OrderView> {
        self.frames().into_iter().rev().find_map(|frame| match frame {
            Frame::Order(view) => Some(view),
            _ => None,
        })
    }

    /// Forgets everything recorded so far.
    pub fn reset(&self) {
        self.frames.lock().unwrap().clear();
    }

    fn record(&self, frame: Frame) {
        self.frames.lock().unwrap().push(frame);
    }
}

#[async_trait]
impl Frontend for RecordingFrontend {
    async fn show_header(&mut self, title: &str, welcome: &str) -> io::Result<()> {
        self.record(Frame::Header {
            title: title.to_string(),
            welcome: welcome.to_string(),
        });
        Ok(())
    }

    async fn show_menu(&mut self, menu: &Menu) -> io::Result<()> {
        self.record(Frame::Menu {
            sections: menu.sections().count(),
            dishes: menu.len(),
        });
        Ok(())
    }

    async fn show_order(&mut self, view: &OrderView) -> io::Result<()> {
        self.record(Frame::Order(view.clone()));
        Ok(())
    }

    async fn show_dialog(&mut self, dialog: &Dialog) -> io::Result<()> {
        self.record(Frame::Dialog(dialog.clone()));
        Ok(())
    }

    async fn show_help(&mut self) -> io::Result<()> {
        self.record(Frame::Help);
        Ok(())
    }
}
