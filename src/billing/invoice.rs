//! Invoice formatting.
//!
//! An invoice is never stored as data: it is rendered to text at checkout,
//! shown to the customer and appended to the [`InvoiceLog`](super::InvoiceLog).

use crate::model::{rupees, Customer, Dish, Order};
use std::fmt::{self, Display};
use uuid::Uuid;

/// Length of the short invoice identifier.
pub const INVOICE_ID_LEN: usize = 8;

/// Short random identifier printed at the top of an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InvoiceId(String);

impl InvoiceId {
    /// The first eight characters of a fresh v4 UUID.
    pub fn generate() -> Self {
        let mut id = Uuid::new_v4().simple().to_string();
        id.truncate(INVOICE_ID_LEN);
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for InvoiceId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for InvoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A snapshot of an order billed to a customer.
#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    pub id: InvoiceId,
    pub customer: Customer,
    pub items: Vec<Dish>,
    pub total: f64,
}

impl Invoice {
    /// Bills `order` to `customer` under the given id.
    pub fn new(id: InvoiceId, customer: &Customer, order: &Order) -> Self {
        Self {
            id,
            customer: customer.clone(),
            items: order.items().to_vec(),
            total: order.total(),
        }
    }

    /// Renders the invoice text.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Display for Invoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Invoice ID: {}", self.id)?;
        writeln!(f, "Customer: {}", self.customer.name)?;
        writeln!(f, "Contact: {}", self.customer.contact)?;
        writeln!(f, "\nItems:")?;
        for dish in &self.items {
            writeln!(f, "- {}: {}", dish.name(), rupees(dish.price()))?;
        }
        writeln!(f, "\nTotal: {}", rupees(self.total))
    }
}

/// Renders the invoice for `order` with a freshly generated id.
pub fn generate_invoice(customer: &Customer, order: &Order) -> String {
    Invoice::new(InvoiceId::generate(), customer, order).render()
}
