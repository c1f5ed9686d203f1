//! # Application Lifecycle
//!
//! Startup and teardown of a run: [`setup_tracing`] installs the log subscriber,
//! [`RestaurantSystem::new`] loads the menu and spawns the session, and
//! [`RestaurantSystem::shutdown`] waits for the session to drain.
//!
//! The session is owned by one task on a single-threaded runtime, so there is
//! exactly one order per run and no locking anywhere.

pub mod restaurant;
pub mod tracing;

pub use restaurant::*;
pub use self::tracing::*;
