//! # Ordering Session
//!
//! The session owns the one [`Order`] of a run, together with the [`Menu`] and the
//! [`InvoiceLog`]. It is an owned-state loop: the [`OrderSession`] task receives
//! [`SessionRequest`]s over a channel and handles them one at a time, so no locking
//! is needed. The presentation layer talks to it through a cloneable [`SessionClient`].
//!
//! Every mutating request answers with a fresh [`OrderView`], so the caller can
//! re-render the list and the total after each change.

use crate::billing::{BillingError, Invoice, InvoiceId, InvoiceLog};
use crate::menu::Menu;
use crate::model::{Category, Customer, Dish, Order};
use crate::session::SessionError;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

// =============================================================================
// 1. RESPONSES
// =============================================================================

/// The derived state the form displays: the order list and its total.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderView {
    pub items: Vec<Dish>,
    pub total: f64,
}

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        Self {
            items: order.items().to_vec(),
            total: order.total(),
        }
    }
}

/// Outcome of a remove request.
#[derive(Debug, Clone, PartialEq)]
pub struct Removal {
    pub removed: bool,
    pub view: OrderView,
}

/// Outcome of a successful checkout.
///
/// The order has already been cleared. A failed log write does not undo the
/// checkout; it is handed back in `log_error` so it can be reported.
#[derive(Debug)]
pub struct CheckoutReceipt {
    pub invoice: String,
    pub log_error: Option<BillingError>,
    pub view: OrderView,
}

/// Type alias for the one-shot response channel used by the session.
pub type Response<T> = oneshot::Sender<Result<T, SessionError>>;

// =============================================================================
// 2. MESSAGES
// =============================================================================

/// Requests understood by the session loop.
#[derive(Debug)]
pub enum SessionRequest {
    Add {
        category: Category,
        index: usize,
        respond_to: Response<OrderView>,
    },
    Remove {
        name: String,
        respond_to: Response<Removal>,
    },
    Clear {
        respond_to: Response<OrderView>,
    },
    Checkout {
        customer: Customer,
        respond_to: Response<CheckoutReceipt>,
    },
    View {
        respond_to: Response<OrderView>,
    },
    Menu {
        respond_to: Response<Menu>,
    },
}

// =============================================================================
// 3. THE SESSION LOOP
// =============================================================================

pub struct OrderSession {
    receiver: mpsc::Receiver<SessionRequest>,
    menu: Menu,
    order: Order,
    log: InvoiceLog,
}

impl OrderSession {
    pub fn new(buffer_size: usize, menu: Menu, log: InvoiceLog) -> (Self, SessionClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let session = Self {
            receiver,
            menu,
            order: Order::new(),
            log,
        };
        (session, SessionClient::new(sender))
    }

    /// Handles requests until every [`SessionClient`] has been dropped.
    pub async fn run(mut self) {
        info!(menu_size = self.menu.len(), log = %self.log.path().display(), "Session started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                SessionRequest::Add { category, index, respond_to } => {
                    debug!(%category, index, "Add");
                    let result = match self.menu.get(category, index) {
                        Ok(dish) => {
                            self.order.add(dish.clone());
                            info!(dish = dish.name(), size = self.order.len(), "Added");
                            Ok(self.view())
                        }
                        Err(e) => {
                            warn!(error = %e, "Add failed");
                            Err(SessionError::from(e))
                        }
                    };
                    let _ = respond_to.send(result);
                }
                SessionRequest::Remove { name, respond_to } => {
                    let removed = self.order.remove(&name);
                    debug!(%name, removed, size = self.order.len(), "Remove");
                    let _ = respond_to.send(Ok(Removal { removed, view: self.view() }));
                }
                SessionRequest::Clear { respond_to } => {
                    self.order.clear();
                    info!("Cleared");
                    let _ = respond_to.send(Ok(self.view()));
                }
                SessionRequest::Checkout { customer, respond_to } => {
                    let result = self.checkout(customer).await;
                    let _ = respond_to.send(result);
                }
                SessionRequest::View { respond_to } => {
                    let _ = respond_to.send(Ok(self.view()));
                }
                SessionRequest::Menu { respond_to } => {
                    let _ = respond_to.send(Ok(self.menu.clone()));
                }
            }
        }

        info!(size = self.order.len(), "Shutdown");
    }

    async fn checkout(&mut self, customer: Customer) -> Result<CheckoutReceipt, SessionError> {
        debug!(?customer, "Checkout");
        if customer.name.trim().is_empty() || customer.contact.trim().is_empty() {
            warn!("Checkout without customer info");
            return Err(SessionError::MissingCustomerInfo);
        }
        if self.order.is_empty() {
            warn!("Checkout of empty order");
            return Err(SessionError::EmptyOrder);
        }

        let invoice = Invoice::new(InvoiceId::generate(), &customer, &self.order);
        let text = invoice.render();
        let log_error = match self.log.append(&text).await {
            Ok(()) => None,
            Err(e) => {
                warn!(error = %e, "Invoice not saved");
                Some(e)
            }
        };
        info!(invoice_id = %invoice.id, items = invoice.items.len(), total = invoice.total, "Checked out");

        self.order.clear();
        Ok(CheckoutReceipt {
            invoice: text,
            log_error,
            view: self.view(),
        })
    }

    fn view(&self) -> OrderView {
        OrderView::from(&self.order)
    }
}

// =============================================================================
// 4. THE CLIENT
// =============================================================================

/// A handle for sending requests to the [`OrderSession`].
#[derive(Clone, Debug)]
pub struct SessionClient {
    sender: mpsc::Sender<SessionRequest>,
}

impl SessionClient {
    pub fn new(sender: mpsc::Sender<SessionRequest>) -> Self {
        Self { sender }
    }

    /// Adds the dish at 0-based `index` of the `category` tab.
    pub async fn add(&self, category: Category, index: usize) -> Result<OrderView, SessionError> {
        self.request(|respond_to| SessionRequest::Add { category, index, respond_to }).await
    }

    /// Removes the first dish named `name`, ignoring case.
    pub async fn remove(&self, name: impl Into<String>) -> Result<Removal, SessionError> {
        let name = name.into();
        self.request(|respond_to| SessionRequest::Remove { name, respond_to }).await
    }

    pub async fn clear(&self) -> Result<OrderView, SessionError> {
        self.request(|respond_to| SessionRequest::Clear { respond_to }).await
    }

    /// Bills the current order to `customer`, saves the invoice and clears the order.
    pub async fn checkout(&self, customer: Customer) -> Result<CheckoutReceipt, SessionError> {
        self.request(|respond_to| SessionRequest::Checkout { customer, respond_to }).await
    }

    pub async fn view(&self) -> Result<OrderView, SessionError> {
        self.request(|respond_to| SessionRequest::View { respond_to }).await
    }

    pub async fn menu(&self) -> Result<Menu, SessionError> {
        self.request(|respond_to| SessionRequest::Menu { respond_to }).await
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(Response<T>) -> SessionRequest,
    ) -> Result<T, SessionError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| SessionError::Closed)?;
        response.await.map_err(|_| SessionError::Dropped)?
    }
}

// =============================================================================
// 5. TESTS
// =============================================================================
