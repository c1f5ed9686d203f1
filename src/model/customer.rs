use serde::Serialize;

/// The person an invoice is billed to.
///
/// Built at checkout from the name and contact fields of the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    pub name: String,
    pub contact: String,
}

impl Customer {
    /// Creates a new Customer.
    ///
    /// # Arguments
    /// * `name` - Name printed on the invoice
    /// * `contact` - Phone number or any other contact string
    pub fn new(name: impl Into<String>, contact: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contact: contact.into(),
        }
    }
}
