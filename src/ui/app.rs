//! # The Ordering Form
//!
//! [`App`] binds user actions to the [`SessionClient`]: every command is one
//! request/response round trip, after which the order list and total are
//! redrawn from the returned [`OrderView`]. Whatever goes wrong inside an action
//! is caught here and shown as a [`Dialog`]; nothing carries over to the next
//! action.

use super::{Command, Dialog, Frontend, UiError};
use crate::config::AppConfig;
use crate::model::{Category, Customer};
use crate::session::{OrderView, SessionClient, SessionError};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info, instrument, warn};

/// Whether the form keeps reading input after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct App<F> {
    client: SessionClient,
    frontend: F,
    title: String,
    welcome: String,
    name: String,
    contact: String,
    view: OrderView,
}

impl<F: Frontend> App<F> {
    pub fn new(client: SessionClient, frontend: F, config: &AppConfig) -> Self {
        Self {
            client,
            frontend,
            title: config.title.clone(),
            welcome: config.welcome.clone(),
            name: String::new(),
            contact: String::new(),
            view: OrderView::default(),
        }
    }

    /// Reads commands line by line until `quit` or end of input.
    ///
    /// A line that is not valid UTF-8 is reported as an error dialog and skipped.
    pub async fn run<R: AsyncBufRead + Unpin>(&mut self, mut input: R) -> Result<(), UiError> {
        self.start().await?;

        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf).await? == 0 {
                break;
            }
            let flow = match std::str::from_utf8(&buf) {
                Ok(line) => self.handle_line(line).await?,
                Err(e) => {
                    self.fail("Error", format!("Unreadable input: {}", e)).await?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                break;
            }
        }

        info!(items = self.view.items.len(), "Form closed");
        Ok(())
    }

    /// Draws the whole form once.
    pub async fn start(&mut self) -> Result<(), UiError> {
        self.frontend.show_header(&self.title, &self.welcome).await?;
        self.show_menu().await?;
        match self.client.view().await {
            Ok(view) => self.show_view(view).await,
            Err(e) => self.fail("Error", format!("Failed to load order: {}", e)).await,
        }
    }

    /// Handles one line of input.
    #[instrument(skip(self))]
    pub async fn handle_line(&mut self, line: &str) -> Result<Flow, UiError> {
        if line.trim().is_empty() {
            return Ok(Flow::Continue);
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                self.fail("Error", e.to_string()).await?;
                return Ok(Flow::Continue);
            }
        };
        debug!(?command, "Dispatch");

        match command {
            Command::Menu => self.show_menu().await?,
            Command::Add { category, row } => self.add_to_order(category, row).await?,
            Command::Remove { row } => self.remove_from_order(row).await?,
            Command::Clear => self.clear_order().await?,
            Command::Name(name) => self.name = name,
            Command::Contact(contact) => self.contact = contact,
            Command::Checkout => self.checkout().await?,
            Command::Help => self.frontend.show_help().await?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// The order list as last drawn.
    pub fn view(&self) -> &OrderView {
        &self.view
    }

    async fn show_menu(&mut self) -> Result<(), UiError> {
        match self.client.menu().await {
            Ok(menu) => Ok(self.frontend.show_menu(&menu).await?),
            Err(e) => self.fail("Error", format!("Failed to load menu: {}", e)).await,
        }
    }

    async fn add_to_order(&mut self, category: Category, row: usize) -> Result<(), UiError> {
        match self.client.add(category, row - 1).await {
            Ok(view) => self.show_view(view).await,
            Err(e) => self.fail("Error", format!("Failed to add item: {}", e)).await,
        }
    }

    async fn remove_from_order(&mut self, row: usize) -> Result<(), UiError> {
        let Some(dish) = self.view.items.get(row - 1) else {
            return self
                .fail("Error", format!("Failed to remove item: no item at row {}", row))
                .await;
        };
        let name = dish.name().to_string();

        match self.client.remove(name).await {
            Ok(removal) => self.show_view(removal.view).await,
            Err(e) => self.fail("Error", format!("Failed to remove item: {}", e)).await,
        }
    }

    async fn clear_order(&mut self) -> Result<(), UiError> {
        match self.client.clear().await {
            Ok(view) => self.show_view(view).await,
            Err(e) => self.fail("Error", format!("Failed to clear order: {}", e)).await,
        }
    }

    async fn checkout(&mut self) -> Result<(), UiError> {
        let name = self.name.trim();
        let contact = self.contact.trim();
        if name.is_empty() || contact.is_empty() {
            return self.warn_checkout(SessionError::MissingCustomerInfo).await;
        }

        let customer = Customer::new(name, contact);
        let receipt = match self.client.checkout(customer).await {
            Ok(receipt) => receipt,
            Err(e @ (SessionError::MissingCustomerInfo | SessionError::EmptyOrder)) => {
                return self.warn_checkout(e).await;
            }
            Err(e) => {
                return self
                    .fail("Checkout Error", format!("An error occurred during checkout: {}", e))
                    .await;
            }
        };

        if let Some(e) = receipt.log_error {
            self.fail("File Error", format!("Failed to save invoice: {}", e)).await?;
        }
        self.frontend.show_dialog(&Dialog::info("Invoice", receipt.invoice)).await?;
        self.show_view(receipt.view).await
    }

    async fn warn_checkout(&mut self, reason: SessionError) -> Result<(), UiError> {
        let title = match reason {
            SessionError::EmptyOrder => "Empty Order",
            _ => "Missing Info",
        };
        debug!(title, "Checkout refused");
        self.frontend.show_dialog(&Dialog::warning(title, reason.to_string())).await?;
        Ok(())
    }

    async fn show_view(&mut self, view: OrderView) -> Result<(), UiError> {
        self.view = view;
        self.frontend.show_order(&self.view).await?;
        Ok(())
    }

    async fn fail(&mut self, title: &str, message: String) -> Result<(), UiError> {
        warn!(title, %message, "Action failed");
        self.frontend.show_dialog(&Dialog::error(title, message)).await?;
        Ok(())
    }
}
