//! The single ordering session of a run.

pub mod core;
pub mod error;

pub use self::core::*;
pub use error::*;
