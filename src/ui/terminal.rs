//! Text rendering of the form on a terminal.

use super::{Dialog, DialogKind, Frontend};
use crate::menu::Menu;
use crate::model::rupees;
use crate::session::OrderView;
use async_trait::async_trait;
use std::io;
use tokio::io::{AsyncWrite, AsyncWriteExt, Stdout};

const HELP: &str = "\
Commands:
  menu                              show the menu tabs
  add <appetizers|main|desserts> N  add row N of a tab to the order
  remove N                          remove row N of your order
  clear                             clear the order
  name <text>                       enter your name
  contact <text>                    enter your contact
  checkout                          bill the order
  help                              show this list
  quit                              leave
";

/// Draws the form as plain text on any async writer.
pub struct TerminalFrontend<W> {
    out: W,
}

impl TerminalFrontend<Stdout> {
    pub fn stdout() -> Self {
        Self::new(tokio::io::stdout())
    }
}

impl<W: AsyncWrite + Unpin + Send> TerminalFrontend<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    async fn emit(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes()).await?;
        self.out.flush().await
    }
}

#[async_trait]
impl<W: AsyncWrite + Unpin + Send> Frontend for TerminalFrontend<W> {
    async fn show_header(&mut self, title: &str, welcome: &str) -> io::Result<()> {
        let text = format!("=== {} ===\n{}\n\n", title, welcome);
        self.emit(&text).await
    }

    async fn show_menu(&mut self, menu: &Menu) -> io::Result<()> {
        let mut text = String::new();
        for (category, dishes) in menu.sections() {
            text.push_str(&format!("[{}]\n", category.title()));
            for (i, dish) in dishes.iter().enumerate() {
                text.push_str(&format!("  {:>2}. {}\n", i + 1, dish));
            }
            text.push('\n');
        }
        self.emit(&text).await
    }

    async fn show_order(&mut self, view: &OrderView) -> io::Result<()> {
        let mut text = String::from("Your Order\n");
        if view.items.is_empty() {
            text.push_str("  (empty)\n");
        }
        for (i, dish) in view.items.iter().enumerate() {
            text.push_str(&format!("  {:>2}. {}\n", i + 1, dish));
        }
        text.push_str(&format!("Total: {}\n\n", rupees(view.total)));
        self.emit(&text).await
    }

    async fn show_dialog(&mut self, dialog: &Dialog) -> io::Result<()> {
        let kind = match dialog.kind {
            DialogKind::Info => "info",
            DialogKind::Warning => "warning",
            DialogKind::Error => "error",
        };
        let mut text = format!("+-- {} ({}) --\n", dialog.title, kind);
        for line in dialog.message.lines() {
            text.push_str(&format!("| {}\n", line));
        }
        text.push_str("+--\n\n");
        self.emit(&text).await
    }

    async fn show_help(&mut self) -> io::Result<()> {
        self.emit(HELP).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Dish, Order};

    #[tokio::test]
    async fn test_order_shows_rows_and_total_label() {
        let mut frontend = TerminalFrontend::new(Vec::new());
        let view = OrderView {
            items: vec![
                Dish::new("Spring Rolls", 500.0, Category::Appetizer).unwrap(),
                Dish::new("Cheesecake", 200.99, Category::Dessert).unwrap(),
            ],
            total: 700.99,
        };

        frontend.show_order(&view).await.unwrap();

        let out = String::from_utf8(frontend.into_inner()).unwrap();
        assert!(out.contains(" 1. Spring Rolls - rs.500.00\n"));
        assert!(out.contains(" 2. Cheesecake - rs.200.99\n"));
        assert!(out.contains("Total: rs.700.99\n"));
    }

    #[tokio::test]
    async fn test_empty_order_shows_zero_total() {
        let mut frontend = TerminalFrontend::new(Vec::new());
        frontend.show_order(&OrderView::default()).await.unwrap();

        let out = String::from_utf8(frontend.into_inner()).unwrap();
        assert_eq!(out, "Your Order\n  (empty)\nTotal: rs.0.00\n\n");
    }

    #[tokio::test]
    async fn test_cleared_order_shows_zero_total_label() {
        let mut order = Order::new();
        order.add(Dish::new("Spring Rolls", 500.0, Category::Appetizer).unwrap());
        order.clear();

        let mut frontend = TerminalFrontend::new(Vec::new());
        frontend.show_order(&OrderView::from(&order)).await.unwrap();

        let out = String::from_utf8(frontend.into_inner()).unwrap();
        let label = out.lines().find(|line| line.starts_with("Total:"));
        assert_eq!(label, Some("Total: rs.0.00"));
    }

    #[tokio::test]
    async fn test_menu_lists_every_tab() {
        let mut frontend = TerminalFrontend::new(Vec::new());
        frontend.show_menu(&Menu::house().unwrap()).await.unwrap();

        let out = String::from_utf8(frontend.into_inner()).unwrap();
        assert!(out.contains("[Appetizers]\n   1. Spring Rolls - rs.500.00\n"));
        assert!(out.contains("[Main Courses]\n"));
        assert!(out.contains("   5. Fruit Salad - rs.400.79\n"));
    }

    #[tokio::test]
    async fn test_dialog_frames_every_line() {
        let mut frontend = TerminalFrontend::new(Vec::new());
        frontend
            .show_dialog(&Dialog::warning("Missing Info", "Please enter name and contact."))
            .await
            .unwrap();

        let out = String::from_utf8(frontend.into_inner()).unwrap();
        assert_eq!(out, "+-- Missing Info (warning) --\n| Please enter name and contact.\n+--\n\n");
    }
}
