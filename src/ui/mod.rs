//! Presentation layer: the ordering form and its rendering surfaces.

pub mod app;
pub mod command;
pub mod error;
pub mod frontend;
pub mod mock;
pub mod terminal;

pub use app::*;
pub use command::*;
pub use error::*;
pub use frontend::*;
pub use terminal::*;
