pub mod analyzer;
pub mod classifier;
pub mod config;
pub mod error;
pub mod search;
pub mod server;

pub use error::{Error, Result};
