//! # Restaurant Desk
//!
//! > **A counter-side ordering form: pick dishes, bill the customer, keep a log.**
//!
//! The crate is a small restaurant-ordering application. A fixed menu is loaded at
//! startup, the customer builds an order from it, and checkout renders an invoice
//! that is shown on screen and appended to a plain-text log.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`], [`menu`])
//! - [`Dish`](model::Dish) and its [`Category`](model::Category), the [`Customer`](model::Customer),
//!   and the [`Order`](model::Order) cart with its add/remove/total/clear bookkeeping.
//! - [`Menu`](menu::Menu): three ordered sections, filled once by [`Menu::house`](menu::Menu::house).
//!
//! ### 2. Billing ([`billing`])
//! - [`Invoice`](billing::Invoice) rendering and [`generate_invoice`](billing::generate_invoice).
//! - [`InvoiceLog`](billing::InvoiceLog): the append-only file of past invoices.
//!
//! ### 3. The Session ([`session`])
//! The one order of a run lives inside an [`OrderSession`](session::OrderSession) task that
//! handles requests sequentially. Callers hold a [`SessionClient`](session::SessionClient).
//!
//! ### 4. The Form ([`ui`])
//! [`App`](ui::App) maps typed commands onto session requests, redraws the order
//! list and total after every change, and turns every failure into a dialog.
//!
//! ### 5. Startup ([`config`], [`lifecycle`])
//! Optional `restaurant.toml` settings, log setup, and the
//! [`RestaurantSystem`](lifecycle::RestaurantSystem) that owns the session task.
//!
//! ## 🚀 Running
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod billing;
pub mod config;
pub mod lifecycle;
pub mod menu;
pub mod model;
pub mod session;
pub mod ui;
