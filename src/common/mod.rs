//! Common utilities shared between the library core and the CLI

pub mod error;
pub mod logging;

pub use error::{Error, Result};
