//! Configuration, logging setup and shared type re-exports.

pub mod config;
pub mod logging;
pub mod types;

pub use config::{Config, ConfigError, InvoiceConfig};
