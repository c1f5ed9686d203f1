//! Plain value types of the ordering desk: [`Dish`], [`Customer`] and the [`Order`] cart.

pub mod customer;
pub mod dish;
pub mod order;

pub use customer::*;
pub use dish::*;
pub use order::*;

/// Formats an amount the way every label, list row and invoice line shows it.
pub fn rupees(amount: f64) -> String {
    format!("rs.{:.2}", amount)
}
