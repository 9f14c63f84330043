pub mod error;
pub mod config;

pub(crate) mod logger;

pub use error::{Error, Result};
